//! NORE command-line interface
//!
//! Runs the daily ingest → validate pipeline and prints a short summary.
//!
//! # Usage
//!
//! ```bash
//! # Run from a config file (JSON or TOML)
//! nore run-day config/day.json
//!
//! # Run straight from an events file with the default schema
//! nore run-day --events data/events/2025-11-14.jsonl
//!
//! # Keep the valid events
//! nore run-day -e data/events/2025-11-14.jsonl --write-valid out/valid.jsonl
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use nore_core::config::PipelineConfig;
use nore_core::parsing::write_jsonl;
use nore_core::preprocessing::{DayPipeline, DayResult};

/// Number of validation errors shown in the summary
const ERROR_PREVIEW: usize = 5;

#[derive(Parser)]
#[command(name = "nore", version, about = "NORE command-line interface", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the NORE pipeline for a single day
    RunDay(RunDayArgs),
}

#[derive(Args)]
struct RunDayArgs {
    /// Path to a JSON or TOML config file (events_path, event_schema, validate)
    #[arg(required_unless_present = "events")]
    config: Option<PathBuf>,

    /// Path to a JSONL events file (bypasses the config file)
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Schema document to validate against, overriding the config
    #[arg(long, value_name = "PATH")]
    schema: Option<PathBuf>,

    /// Skip schema validation
    #[arg(long)]
    no_validate: bool,

    /// Write the valid events to a JSONL file
    #[arg(long, value_name = "PATH")]
    write_valid: Option<PathBuf>,
}

impl RunDayArgs {
    /// `--events` wins over a config file.
    fn resolve_config(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = match (&self.events, &self.config) {
            (Some(events), _) => PipelineConfig::for_events(events),
            (None, Some(path)) => PipelineConfig::from_file(path)
                .with_context(|| format!("Cannot load config {}", path.display()))?,
            (None, None) => anyhow::bail!("run-day requires either --events/-e or a config path"),
        };

        if let Some(schema) = &self.schema {
            config.event_schema = Some(schema.clone());
        }
        if self.no_validate {
            config.validate = false;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the summary
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::RunDay(args) => run_day(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("run-day failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_day(args: &RunDayArgs) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    info!(events_path = %config.events_path.display(), "starting run-day");

    let result = DayPipeline::with_config(config).run()?;

    if let Some(path) = &args.write_valid {
        let written = write_jsonl(path, &result.events)?;
        info!(path = %path.display(), written, "wrote valid events");
    }

    print_summary(&result);
    Ok(())
}

fn print_summary(result: &DayResult) {
    for line in summary_lines(result) {
        println!("{}", line);
    }
}

/// Summary printed after a run; at most [`ERROR_PREVIEW`] errors are listed.
fn summary_lines(result: &DayResult) -> Vec<String> {
    let mut lines = vec![
        "[nore] run-day completed".to_string(),
        format!("  valid events     : {}", result.events.len()),
        format!("  validation errors: {}", result.errors.len()),
    ];

    if !result.errors.is_empty() {
        lines.push("  first few errors:".to_string());
        lines.extend(
            result
                .errors
                .iter()
                .take(ERROR_PREVIEW)
                .map(|err| format!("    - {}", err)),
        );
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use nore_core::preprocessing::ValidationStats;
    use std::io::Write;
    use tempfile::Builder;

    fn run_day_args(argv: &[&str]) -> RunDayArgs {
        let cli = Cli::try_parse_from(std::iter::once("nore").chain(argv.iter().copied()))
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", argv, e));
        match cli.command {
            Commands::RunDay(args) => args,
        }
    }

    fn config_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", body).unwrap();
        file
    }

    #[test]
    fn test_events_flag_wins_over_config_file() {
        let file = config_file(r#"{"events_path": "from-config.jsonl", "validate": false}"#);
        let config_path = file.path().to_str().unwrap();

        let args = run_day_args(&["run-day", config_path, "-e", "day.jsonl"]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.events_path, PathBuf::from("day.jsonl"));
        assert!(config.validate);
    }

    #[test]
    fn test_config_file_is_used_without_events_flag() {
        let file = config_file(
            r#"{"events_path": "from-config.jsonl", "event_schema": "config.schema.json"}"#,
        );

        let args = run_day_args(&["run-day", file.path().to_str().unwrap()]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.events_path, PathBuf::from("from-config.jsonl"));
        assert_eq!(config.event_schema, Some(PathBuf::from("config.schema.json")));
        assert!(config.validate);
    }

    #[test]
    fn test_schema_and_no_validate_override_config() {
        let file = config_file(
            r#"{"events_path": "from-config.jsonl", "event_schema": "config.schema.json", "validate": true}"#,
        );

        let args = run_day_args(&[
            "run-day",
            file.path().to_str().unwrap(),
            "--schema",
            "override.schema.json",
            "--no-validate",
        ]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.event_schema, Some(PathBuf::from("override.schema.json")));
        assert!(!config.validate);
    }

    #[test]
    fn test_missing_input_is_rejected() {
        assert!(Cli::try_parse_from(["nore", "run-day"]).is_err());
        assert!(Cli::try_parse_from(["nore", "run-day", "--no-validate"]).is_err());

        let args = RunDayArgs {
            config: None,
            events: None,
            schema: None,
            no_validate: false,
            write_valid: None,
        };
        let err = args.resolve_config().unwrap_err();
        assert!(err.to_string().contains("--events"));
    }

    #[test]
    fn test_unreadable_config_file_is_an_error() {
        let args = run_day_args(&["run-day", "/nonexistent/day.json"]);
        let err = args.resolve_config().unwrap_err();
        assert!(format!("{:#}", err).contains("Cannot load config"));
    }

    #[test]
    fn test_summary_previews_at_most_five_errors() {
        let errors: Vec<String> = (1..=7).map(|n| format!("s-{}: bad vectors", n)).collect();
        let result = DayResult {
            events: Vec::new(),
            errors,
            stats: ValidationStats {
                total: 7,
                valid: 0,
                invalid: 7,
            },
        };

        let lines = summary_lines(&result);
        let previewed: Vec<&String> = lines.iter().filter(|l| l.starts_with("    - ")).collect();

        assert_eq!(lines[0], "[nore] run-day completed");
        assert_eq!(lines[2], "  validation errors: 7");
        assert_eq!(previewed.len(), ERROR_PREVIEW);
        assert_eq!(previewed[0], "    - s-1: bad vectors");
        assert_eq!(previewed[4], "    - s-5: bad vectors");
    }

    #[test]
    fn test_summary_without_errors_has_no_preview() {
        let result = DayResult {
            events: Vec::new(),
            errors: Vec::new(),
            stats: ValidationStats::default(),
        };

        let lines = summary_lines(&result);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  valid events     : 0");
    }
}
