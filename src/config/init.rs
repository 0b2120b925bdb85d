use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::schema::{BusinessInfo, Config};
use super::ensure_parent_dir;
use crate::scoring::{CategoryEntry, Dimension, ScoringConfig};

/// Sample profile for a small digital-services business.
pub fn sample_config() -> Config {
    use Dimension::*;

    let categories = [
        (Financial, "Financial Health", 72.0, 0.15),
        (Financial, "Revenue Growth", 68.0, 0.10),
        (Financial, "Working Capital", 70.0, 0.10),
        (Business, "Market Presence", 75.0, 0.15),
        (Business, "Customer Base", 77.0, 0.10),
        (Social, "Employment Generation", 82.0, 0.08),
        (Social, "Skill Development", 78.0, 0.07),
        (Social, "Community Initiatives", 74.0, 0.05),
        (Social, "Digital Inclusion", 76.0, 0.05),
        (Digital, "Online Reputation", 73.0, 0.05),
        (Digital, "Digital Adoption", 71.0, 0.05),
        (Digital, "Cybersecurity", 69.0, 0.05),
    ]
    .into_iter()
    .map(|(dimension, label, score, weight)| CategoryEntry::new(dimension, label, score, weight))
    .collect();

    Config {
        business: Some(BusinessInfo {
            name: "Sample Digital MSME".to_string(),
            business_type: Some("Small".to_string()),
            sector: Some("Digital Services".to_string()),
            vintage: Some("5 years".to_string()),
        }),
        scoring: Some(ScoringConfig::default()),
        categories,
    }
}

/// Write a profile to `path` as YAML.
///
/// Refuses to replace an existing file unless `force` is set. The write is
/// atomic so a failed run never leaves a truncated profile behind.
pub fn write_config(path: &Path, config: &Config, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    ensure_parent_dir(path)?;

    let yaml = serde_saphyr::to_string(config).context("Failed to serialize profile")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write profile to {}", path.display()))?;
    file.commit().context("Failed to save profile")?;

    log::info!("Wrote sample profile to {}", path.display());
    Ok(())
}
