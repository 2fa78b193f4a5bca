use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::config::{FailOn, ReportConfig};

#[derive(Parser, Debug)]
#[command(
    name = "contract-checkr",
    about = "Split contract text into clauses and flag risky ones",
    version
)]
pub struct Cli {
    /// Contract text file; `-` reads standard input
    #[arg(conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Analyze this text instead of reading a file
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Config file [default: ./.contract-checkr/config.toml, fallback ~/.config/contract-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format [default: terminal, or report.format from config]
    #[arg(long, value_name = "FORMAT")]
    pub report: Option<ReportFormat>,

    /// PDF output path; use without value to default to contract-report.pdf
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub pdf: Option<Option<PathBuf>>,

    /// Exit with code 1 when the overall risk is at or above this level
    #[arg(long, value_name = "LEVEL")]
    pub fail_on: Option<FailOn>,

    /// Debug logging; always list low-risk clauses
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Effective report format and PDF path.
    ///
    /// `--pdf` implies PDF whatever `--report` says; given without a value
    /// it writes to `report.pdf_path` from config.
    pub fn output(&self, config: &ReportConfig) -> (ReportFormat, PathBuf) {
        let format = match &self.pdf {
            Some(_) => ReportFormat::Pdf,
            None => self.report.unwrap_or(config.format),
        };
        let pdf_path = self
            .pdf
            .clone()
            .flatten()
            .unwrap_or_else(|| config.pdf_path.clone());
        (format, pdf_path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Terminal,
    Json,
    Pdf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["contract-checkr", "contract.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("contract.txt")));
        assert!(cli.report.is_none());
        assert!(cli.pdf.is_none());
        assert!(cli.fail_on.is_none());
    }

    #[test]
    fn test_pdf_without_value() {
        let cli = Cli::try_parse_from(["contract-checkr", "--pdf", "--text", "x"]).unwrap();
        assert_eq!(cli.pdf, Some(None));
    }

    #[test]
    fn test_pdf_with_value() {
        let cli = Cli::try_parse_from(["contract-checkr", "c.txt", "--pdf", "out.pdf"]).unwrap();
        assert_eq!(cli.pdf, Some(Some(PathBuf::from("out.pdf"))));
    }

    #[test]
    fn test_file_conflicts_with_text() {
        assert!(Cli::try_parse_from(["contract-checkr", "c.txt", "--text", "x"]).is_err());
    }

    #[test]
    fn test_report_and_fail_on_values() {
        let cli = Cli::try_parse_from([
            "contract-checkr",
            "--text",
            "x",
            "--report",
            "json",
            "--fail-on",
            "high",
        ])
        .unwrap();
        assert_eq!(cli.report, Some(ReportFormat::Json));
        assert_eq!(cli.fail_on, Some(FailOn::High));
    }

    fn configured(format: ReportFormat, pdf_path: &str) -> ReportConfig {
        ReportConfig {
            format,
            pdf_path: PathBuf::from(pdf_path),
            show_low: true,
        }
    }

    #[test]
    fn test_output_falls_back_to_config() {
        let cli = Cli::try_parse_from(["contract-checkr", "c.txt"]).unwrap();
        let (format, _) = cli.output(&configured(ReportFormat::Json, "contract-report.pdf"));
        assert_eq!(format, ReportFormat::Json);
    }

    #[test]
    fn test_output_report_flag_beats_config() {
        let cli = Cli::try_parse_from(["contract-checkr", "c.txt", "--report", "terminal"]).unwrap();
        let (format, _) = cli.output(&configured(ReportFormat::Json, "contract-report.pdf"));
        assert_eq!(format, ReportFormat::Terminal);
    }

    #[test]
    fn test_output_bare_pdf_uses_configured_path() {
        let cli = Cli::try_parse_from(["contract-checkr", "c.txt", "--report", "json", "--pdf"]).unwrap();
        let (format, path) = cli.output(&configured(ReportFormat::Terminal, "review.pdf"));
        assert_eq!(format, ReportFormat::Pdf);
        assert_eq!(path, PathBuf::from("review.pdf"));
    }

    #[test]
    fn test_output_pdf_value_beats_config() {
        let cli = Cli::try_parse_from(["contract-checkr", "c.txt", "--pdf", "out.pdf"]).unwrap();
        let (format, path) = cli.output(&configured(ReportFormat::Terminal, "review.pdf"));
        assert_eq!(format, ReportFormat::Pdf);
        assert_eq!(path, PathBuf::from("out.pdf"));
    }
}
