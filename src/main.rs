use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use msme_score::config::{self, Config};
use msme_score::output;
use msme_score::scoring::{self, AggregateOptions, Band, BandThresholds, WeightPolicy};

const EXIT_SUCCESS: i32 = 0;
const EXIT_SCORING: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full terminal report
    Table,
    /// Composite result as JSON
    Json,
    /// Tab-separated values for scripting
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the business profile (default if no subcommand)
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Composite score scale (overrides the profile)
        #[arg(long, value_parser = parse_positive_scale)]
        scale: Option<f64>,

        /// Rescale weights that do not sum to 1 instead of failing
        #[arg(long)]
        normalize: bool,
    },
    /// Print the band for a composite score, using the profile's
    /// `scoring.bands` when a profile exists and the default 75/65/50 otherwise
    Classify {
        /// Composite score to classify
        #[arg(allow_negative_numbers = true)]
        score: f64,

        /// Scale the score is expressed on
        #[arg(
            long,
            default_value_t = scoring::DEFAULT_SCALE,
            value_parser = parse_positive_scale,
            allow_negative_numbers = true
        )]
        scale: f64,
    },
    /// Write a sample profile to the config path
    Init {
        /// Overwrite an existing profile
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "msme-score")]
#[command(about = "Digital social-financial score for small businesses", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to profile file (defaults to ~/.config/msme-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_positive_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s
        .parse()
        .map_err(|_| format!("`{}` is not a number", s))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("scale must be a positive number, got {}", s));
    }
    Ok(scale)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let command = cli.command.unwrap_or(Commands::Show {
        format: OutputFormat::Table,
        scale: None,
        normalize: false,
    });

    let code = match command {
        Commands::Show {
            format,
            scale,
            normalize,
        } => run_show(config_path, format, scale, normalize),
        Commands::Classify { score, scale } => run_classify(config_path, score, scale),
        Commands::Init { force } => run_init(config_path, force),
    };

    std::process::exit(code);
}

fn run_init(config_path: Option<PathBuf>, force: bool) -> i32 {
    let path = match config::resolve_config_path(config_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    match config::write_config(&path, &config::sample_config(), force) {
        Ok(()) => {
            println!("Wrote sample profile to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}

/// Band thresholds from the profile, or the defaults when there is no profile
fn profile_bands(config_path: Option<PathBuf>) -> anyhow::Result<BandThresholds> {
    let path = match config::resolve_config_path(config_path) {
        Ok(p) if p.exists() => p,
        _ => {
            log::debug!("No profile found, using default band thresholds");
            return Ok(BandThresholds::default());
        }
    };

    let profile = config::load_config(Some(path))?;
    let scoring_config = profile.scoring.unwrap_or_default();
    if let Err(errors) = scoring::validate_scoring(&scoring_config) {
        anyhow::bail!("invalid scoring config: {}", errors.join("; "));
    }
    Ok(scoring_config.bands.unwrap_or_default())
}

fn classify_score(config_path: Option<PathBuf>, score: f64, scale: f64) -> anyhow::Result<Band> {
    let bands = profile_bands(config_path)?;
    log::debug!("Classifying {} on a {} scale with {:?}", score, scale, bands);
    Ok(scoring::classify_with(score, scale, &bands))
}

fn run_classify(config_path: Option<PathBuf>, score: f64, scale: f64) -> i32 {
    match classify_score(config_path, score, scale) {
        Ok(band) => {
            println!("{}", band);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}

fn run_show(
    config_path: Option<PathBuf>,
    format: OutputFormat,
    scale: Option<f64>,
    normalize: bool,
) -> i32 {
    let profile: Config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    // Validate scoring config at startup
    let mut effective_scoring = profile.scoring.clone().unwrap_or_default();
    if scale.is_some() {
        effective_scoring.scale = scale;
    }
    if let Err(errors) = scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_CONFIG;
    }

    let mut options: AggregateOptions = effective_scoring.to_options();
    if normalize {
        options.weight_policy = WeightPolicy::Normalize;
    }
    log::debug!("Aggregating with {:?}", options);

    let result = match scoring::aggregate_with(&profile.categories, &options) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Scoring error: {}", e);
            return EXIT_SCORING;
        }
    };

    log::info!(
        "Composite score {} / {} ({})",
        result.composite_score,
        result.scale,
        result.band
    );

    match format {
        OutputFormat::Table => {
            let use_colors = output::should_use_colors();
            println!(
                "{}",
                output::format_report(
                    &result,
                    &profile.categories,
                    options.precision,
                    profile.business.as_ref(),
                    use_colors,
                )
            );
        }
        OutputFormat::Json => match output::format_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                return EXIT_SCORING;
            }
        },
        OutputFormat::Tsv => println!("{}", output::format_tsv(&result, options.precision)),
    }

    EXIT_SUCCESS
}
