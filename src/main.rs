use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::fmt;

use kb_roi_estimator::adapters::input_file::{load_guided_input_set, load_input_set};
use kb_roi_estimator::adapters::summary::render_summary;
use kb_roi_estimator::application::EstimatorSession;
use kb_roi_estimator::config::{AppConfig, LoggingConfig};
use kb_roi_estimator::domain::foundation::{
    RecoveryScenario, SensitivityDimension, UsageDistribution,
};
use kb_roi_estimator::domain::inputs::IndustryPreset;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Full estimate as pretty-printed JSON
    Json,
    /// Short human-readable summary
    Summary,
}

#[derive(Parser, Debug)]
#[command(name = "kb-roi-estimator")]
#[command(about = "Estimate the annual cost of a conflicting knowledge base and the ROI of fixing it", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON or YAML file with expert inputs (or guided inputs with --guided)
    #[arg(required_unless_present = "preset")]
    input: Option<PathBuf>,

    /// Treat the input file as guided-mode operational counts
    #[arg(long)]
    guided: bool,

    /// Start from an industry preset instead of a file (smb, mid-market, enterprise)
    #[arg(long, conflicts_with = "input")]
    preset: Option<IndustryPreset>,

    /// Recovery scenario (conservative, base, aggressive)
    #[arg(long)]
    scenario: Option<RecoveryScenario>,

    /// Usage distribution (uniform, concentrated, distributed)
    #[arg(long)]
    distribution: Option<UsageDistribution>,

    /// Secondary sensitivity dimension (hallucination, deflection, churn)
    #[arg(long)]
    dimension: Option<SensitivityDimension>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_validated().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let mut session = EstimatorSession::from_config(&config.assumptions);
    if let Some(scenario) = cli.scenario {
        session.set_scenario(scenario);
    }
    if let Some(distribution) = cli.distribution {
        session.set_distribution(distribution);
    }
    if let Some(dimension) = cli.dimension {
        session.set_dimension(dimension);
    }

    let guided = match (cli.preset, &cli.input) {
        (Some(preset), _) => {
            info!(preset = %preset, "Using industry preset");
            Some(preset.guided_inputs())
        }
        (None, Some(path)) if cli.guided => Some(
            load_guided_input_set(path)
                .with_context(|| format!("Failed to load guided inputs from {}", path.display()))?,
        ),
        _ => None,
    };

    let output = match guided {
        Some(guided) => {
            let result = session.estimate_guided(&guided);
            match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&result)?,
                OutputFormat::Summary => format!(
                    "Derived conflict rate: {} ({})\n\n{}",
                    result.derived.conflict_rate,
                    result.conflict_rationale,
                    render_summary(&result.estimate)
                ),
            }
        }
        None => {
            let path = cli
                .input
                .as_ref()
                .context("An input file or --preset is required")?;
            let inputs = load_input_set(path)
                .with_context(|| format!("Failed to load inputs from {}", path.display()))?;
            let estimate = session.estimate(&inputs);
            match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&estimate)?,
                OutputFormat::Summary => render_summary(&estimate),
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
