use std::io::IsTerminal;

use owo_colors::{AnsiColors, OwoColorize};
use terminal_size::{terminal_size, Width};

use crate::config::BusinessInfo;
use crate::scoring::{Band, CategoryEntry, CompositeResult, Dimension};

/// Widest bar drawn by `format_component_bars`
const MAX_BAR_WIDTH: usize = 50;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
pub fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Terminal color for a band, taken from `Band::color_name`
pub fn band_color(band: Band) -> AnsiColors {
    AnsiColors::from(band.color_name())
}

/// Format a score with the given number of decimal places
pub fn format_score(score: f64, precision: u32) -> String {
    format!("{:.*}", precision as usize, score)
}

/// Format a weight fraction as a percentage ("0.15" -> "15%", "0.075" -> "7.5%")
pub fn format_weight(weight: f64) -> String {
    let pct = weight * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{:.0}%", pct)
    } else {
        let s = format!("{:.2}", pct);
        format!("{}%", s.trim_end_matches('0').trim_end_matches('.'))
    }
}

/// Truncate label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Header card: business details and the final score colored by band
pub fn format_summary(
    result: &CompositeResult,
    precision: u32,
    business: Option<&BusinessInfo>,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let title = "Digital Business Social-Financial Score";
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title.to_string());
    }

    if let Some(info) = business {
        lines.push(format!("  Business: {}", info.name));
        let mut details = Vec::new();
        if let Some(ref kind) = info.business_type {
            details.push(format!("Type: {}", kind));
        }
        if let Some(ref sector) = info.sector {
            details.push(format!("Sector: {}", sector));
        }
        if let Some(ref vintage) = info.vintage {
            details.push(format!("Vintage: {}", vintage));
        }
        if !details.is_empty() {
            lines.push(format!("  {}", details.join(" | ")));
        }
    }

    let score = format_score(result.composite_score, precision);
    let scale = format_score(result.scale, 0);
    if use_colors {
        let color = band_color(result.band);
        lines.push(format!(
            "  Final Score: {} / {} ({})",
            score.color(color).bold(),
            scale,
            result.band.label().color(color)
        ));
    } else {
        lines.push(format!(
            "  Final Score: {} / {} ({})",
            score,
            scale,
            result.band.label()
        ));
    }

    lines.join("\n")
}

/// Share of total weight per dimension, e.g. "Financial Score (35%)"
pub fn format_distribution(result: &CompositeResult) -> String {
    let mut lines = vec!["Score Distribution".to_string()];
    for subtotal in &result.dimension_subtotals {
        lines.push(format!(
            "  {} ({})",
            subtotal.dimension.display_name(),
            format_weight(subtotal.subtotal_weight)
        ));
    }
    lines.join("\n")
}

/// Horizontal bar per category on a 0-100 axis
pub fn format_component_bars(
    entries: &[CategoryEntry],
    term_width: Option<usize>,
    use_colors: bool,
) -> String {
    if entries.is_empty() {
        return "No categories found.".to_string();
    }

    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);

    // indent + label + space + bar + space + "100"
    let bar_width = match term_width {
        Some(w) if w > label_width + 7 + 10 => (w - label_width - 7).min(MAX_BAR_WIDTH),
        Some(_) => 10,
        None => MAX_BAR_WIDTH,
    };

    let mut lines = vec!["Component Scores".to_string()];
    for entry in entries {
        let filled = ((entry.score.clamp(0.0, 100.0) / 100.0) * bar_width as f64).round() as usize;
        // Pad before coloring so escape codes don't count toward the width
        let bar = format!("{:<width$}", "#".repeat(filled), width = bar_width);
        let label = truncate_label(&entry.label, label_width);
        let score = format!("{:>3}", format_score(entry.score, 0));

        if use_colors {
            lines.push(format!(
                "  {:<lw$} {} {}",
                label,
                bar.blue(),
                score.bold(),
                lw = label_width
            ));
        } else {
            lines.push(format!("  {:<lw$} {} {}", label, bar, score, lw = label_width));
        }
    }
    lines.join("\n")
}

fn format_panel(title: &str, entries: &[&CategoryEntry], use_colors: bool) -> String {
    let mut lines = vec![title.to_string()];
    if entries.is_empty() {
        lines.push("  (none)".to_string());
    }
    for entry in entries {
        let score = format_score(entry.score, 0);
        let score = if use_colors {
            score.blue().bold().to_string()
        } else {
            score
        };
        lines.push(format!(
            "  {}  {}\n    Weight: {}",
            entry.label,
            score,
            format_weight(entry.weight)
        ));
    }
    lines.join("\n")
}

/// Category lists grouped as "Financial & Business" and "Social & Digital"
pub fn format_metric_panels(entries: &[CategoryEntry], use_colors: bool) -> String {
    let in_dims = |dims: [Dimension; 2]| {
        entries
            .iter()
            .filter(|e| dims.contains(&e.dimension))
            .collect::<Vec<_>>()
    };

    let financial_business = in_dims([Dimension::Financial, Dimension::Business]);
    let social_digital = in_dims([Dimension::Social, Dimension::Digital]);

    format!(
        "{}\n\n{}",
        format_panel("Financial & Business Metrics", &financial_business, use_colors),
        format_panel("Social & Digital Impact", &social_digital, use_colors)
    )
}

/// Per-dimension table: weight, average score, points contributed
pub fn format_breakdown(result: &CompositeResult, use_colors: bool) -> String {
    let header = format!(
        "  {:<18} {:>7} {:>9} {:>13}",
        "Dimension", "Weight", "Average", "Contribution"
    );
    let mut lines = vec![
        "Dimension Breakdown".to_string(),
        if use_colors {
            header.dimmed().to_string()
        } else {
            header
        },
    ];

    for subtotal in &result.dimension_subtotals {
        lines.push(format!(
            "  {:<18} {:>7} {:>9.1} {:>13.1}",
            subtotal.dimension.display_name(),
            format_weight(subtotal.subtotal_weight),
            subtotal.subtotal_score,
            subtotal.contribution
        ));
    }
    lines.join("\n")
}

/// Full terminal report
pub fn format_report(
    result: &CompositeResult,
    entries: &[CategoryEntry],
    precision: u32,
    business: Option<&BusinessInfo>,
    use_colors: bool,
) -> String {
    [
        format_summary(result, precision, business, use_colors),
        format_distribution(result),
        format_breakdown(result, use_colors),
        format_component_bars(entries, get_terminal_width(), use_colors),
        format_metric_panels(entries, use_colors),
    ]
    .join("\n\n")
}

/// Pretty JSON of the result for downstream renderers
pub fn format_json(result: &CompositeResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Tab-separated values for scripting (no headers, no colors)
/// First line: composite, score, band. Then one line per dimension:
/// dimension, weight, average score, contribution.
pub fn format_tsv(result: &CompositeResult, precision: u32) -> String {
    let mut lines = vec![format!(
        "composite\t{}\t{}",
        format_score(result.composite_score, precision),
        result.band.label()
    )];
    for subtotal in &result.dimension_subtotals {
        lines.push(format!(
            "{}\t{}\t{:.2}\t{:.2}",
            subtotal.dimension,
            format_weight(subtotal.subtotal_weight),
            subtotal.subtotal_score,
            subtotal.contribution
        ));
    }
    lines.join("\n")
}
