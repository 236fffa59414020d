// Rust guideline compliant 2026-10-19

//! Datatrack CLI Application
//!
//! Command-line interface that charts data processing progress from marker files.

use clap::Parser;
use datatrack_cli::commands::{self, Settings};
use datatrack_cli::{logging, should_use_color};
use datatrack_core::config::CONFIG_FILE_NAME;
use datatrack_core::{Config, MatchMode, OutputFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dtrack",
    version,
    about = "Check data processing progress.",
    long_about = "Counts unprocessed and processed marker files (<tag><run><extension>) in a directory and charts the completed share as a pie. Without a directory, a built-in example runs against fake data in a temporary directory.",
    after_help = "Examples:\n  dtrack\n  dtrack /data/runs\n  dtrack /data/runs -u Raw -p Run --extension .data\n  dtrack /data/runs --match substring --json\n  dtrack --seed 42 --no-chart\n"
)]
struct Cli {
    /// Directory to check progress in
    #[arg(value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Files tagged PTAG are processed [default: Run]
    #[arg(short, long, value_name = "PTAG")]
    processed_tag: Option<String>,

    /// Files tagged UTAG are unprocessed [default: Raw]
    #[arg(short, long, value_name = "UTAG")]
    unprocessed_tag: Option<String>,

    /// Marker file extension [default: .data]
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// How file names are matched against tags
    #[arg(long = "match", value_enum)]
    match_mode: Option<MatchArg>,

    /// Fail when a processed run has no unprocessed marker
    #[arg(long)]
    strict: bool,

    /// Seed for the example dataset
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Do not draw the pie chart
    #[arg(long)]
    no_chart: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum MatchArg {
    Structured,
    Substring,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Plain,
    Json,
}

impl Cli {
    /// Applies flag overrides on top of the loaded configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(tag) = &self.processed_tag {
            config.processed_tag = tag.clone();
        }
        if let Some(tag) = &self.unprocessed_tag {
            config.unprocessed_tag = tag.clone();
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        match self.match_mode {
            Some(MatchArg::Structured) => config.match_mode = MatchMode::Structured,
            Some(MatchArg::Substring) => config.match_mode = MatchMode::Substring,
            None => {}
        }
        if self.strict {
            config.strict_subset = true;
        }
        match self.format {
            Some(FormatArg::Plain) => config.output_format = OutputFormat::Plain,
            Some(FormatArg::Json) => config.output_format = OutputFormat::Json,
            None if self.json => config.output_format = OutputFormat::Json,
            None => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&cli.log_level, cli.log_file.as_deref())?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let mut config = Config::load(&config_path)?;
    cli.apply(&mut config);
    config.validate()?;

    let settings = Settings {
        config,
        chart: !cli.no_chart,
        use_color: !cli.no_color && should_use_color(),
    };

    match &cli.directory {
        Some(directory) => commands::check::execute(directory, &settings)?,
        None => commands::example::execute(&settings, cli.seed)?,
    }

    Ok(())
}
