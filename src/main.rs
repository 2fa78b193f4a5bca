use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use contract_checkr::analyze;
use contract_checkr::cli::{Cli, ReportFormat};
use contract_checkr::config::load_config;
use contract_checkr::error::AnalysisError;
use contract_checkr::input::InputSource;
use contract_checkr::report;

const EXIT_THRESHOLD: i32 = 1;
const EXIT_EMPTY_INPUT: i32 = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("contract_checkr=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("contract_checkr=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var("NO_COLOR").is_err())
        .without_time()
        .init();

    // Load config relative to the working directory
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    let source = InputSource::resolve(cli.file.as_deref(), cli.text.as_deref())?;
    let text = source.read()?;
    debug!(source = %source.label(), chars = text.chars().count(), "input read");

    let result = match analyze(&text) {
        Ok(result) => result,
        Err(AnalysisError::EmptyInput) => {
            eprintln!(
                " {} Please provide contract text before analyzing.",
                "⚠".yellow()
            );
            std::process::exit(EXIT_EMPTY_INPUT);
        }
    };

    // --pdf implies PDF format
    let (report_format, pdf_path) = cli.output(&config.report);
    let show_low = cli.verbose || config.report.show_low;

    match report_format {
        ReportFormat::Terminal => {
            report::terminal::render(&result, &source.label(), show_low, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        ReportFormat::Pdf => {
            report::pdf::render(&result, &source.label(), show_low, &pdf_path)?;
        }
    }

    let fail_on = cli.fail_on.unwrap_or(config.policy.fail_on);
    if fail_on.is_triggered_by(result.overall) {
        debug!(overall = result.overall.band_label(), "fail threshold reached");
        std::process::exit(EXIT_THRESHOLD);
    }

    Ok(())
}
