//! LiftLoad - Training Load Analysis for Strength Workouts
//!
//! Command-line entry point.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use liftload::export::{export_csv, export_json, render_summary, ExportFormat};
use liftload::storage::config::{self, AppConfig};
use liftload::TrainingLoadCalculator;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fitness, stress and recovery curves from a workout log", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform data directory)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse a workout log
    Analyze(AnalyzeArgs),
    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Workout log with Date, Exercise, Weight and Reps columns
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatOpt::Text)]
    format: FormatOpt,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Override the fitness time constant (days)
    #[arg(long)]
    chronic_days: Option<f64>,

    /// Override the stress time constant (days)
    #[arg(long)]
    acute_days: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatOpt {
    Text,
    Csv,
    Json,
}

impl From<FormatOpt> for ExportFormat {
    fn from(opt: FormatOpt) -> Self {
        match opt {
            FormatOpt::Text => ExportFormat::Text,
            FormatOpt::Csv => ExportFormat::Csv,
            FormatOpt::Json => ExportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::get_config_path);

    match cli.command {
        Command::Analyze(args) => analyze(&config_path, args),
        Command::InitConfig { force } => init_config(&config_path, force),
    }
}

fn analyze(config_path: &Path, args: AnalyzeArgs) -> Result<()> {
    let mut app_config = config::load_config_from(config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;

    if let Some(days) = args.chronic_days {
        app_config.analysis.chronic_days = days;
    }
    if let Some(days) = args.acute_days {
        app_config.analysis.acute_days = days;
    }
    app_config.validate().context("validating options")?;

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let calc = TrainingLoadCalculator::from_config(&app_config);
    let report = calc
        .analyze(&content)
        .with_context(|| format!("analysing {}", args.input.display()))?;

    let format = ExportFormat::from(args.format);
    let rendered = match format {
        ExportFormat::Text => render_summary(&report)?,
        ExportFormat::Csv => export_csv(&report)?,
        ExportFormat::Json => export_json(&report)?,
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote {} report to {}", format, path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    config::save_config_to(&AppConfig::default(), path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Wrote default config to {}", path.display());

    Ok(())
}
