use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::cli::ReportFormat;
use crate::models::RiskLevel;

pub const DEFAULT_PDF_PATH: &str = "contract-report.pdf";

/// Root configuration structure, deserialized from `.contract-checkr/config.toml`.
///
/// Only output and exit-code behaviour is configurable; the keyword rules
/// and score bands are fixed.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Report output settings.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Report format used when neither `--report` nor `--pdf` is given.
    #[serde(default = "default_format")]
    pub format: ReportFormat,
    /// Where `--pdf` writes when given without a value.
    #[serde(default = "default_pdf_path")]
    pub pdf_path: PathBuf,
    /// List Low clauses in clause listings.
    #[serde(default = "default_show_low")]
    pub show_low: bool,
}

fn default_format() -> ReportFormat {
    ReportFormat::Terminal
}

fn default_pdf_path() -> PathBuf {
    PathBuf::from(DEFAULT_PDF_PATH)
}

fn default_show_low() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            format: default_format(),
            pdf_path: default_pdf_path(),
            show_low: default_show_low(),
        }
    }
}

/// Exit-code policy.
#[derive(Debug, Default, Deserialize)]
pub struct PolicyConfig {
    /// Overall band at or above which the CLI exits with code 1.
    #[serde(default)]
    pub fail_on: FailOn,
}

/// Failure threshold for the overall assessment.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Never fail on the assessment.
    #[default]
    Never,
    Low,
    Medium,
    High,
}

impl FailOn {
    /// Convert to the lowest [`RiskLevel`] that triggers a failure, if any.
    pub fn threshold(&self) -> Option<RiskLevel> {
        match self {
            FailOn::Never => None,
            FailOn::Low => Some(RiskLevel::Low),
            FailOn::Medium => Some(RiskLevel::Medium),
            FailOn::High => Some(RiskLevel::High),
        }
    }

    /// Whether `overall` meets or exceeds this threshold.
    pub fn is_triggered_by(&self, overall: RiskLevel) -> bool {
        self.threshold().is_some_and(|t| overall >= t)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_dir>/.contract-checkr/config.toml`
/// 3. `~/.config/contract-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = base_dir.join(".contract-checkr").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("contract-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.report.format, ReportFormat::Terminal);
        assert_eq!(cfg.report.pdf_path, PathBuf::from(DEFAULT_PDF_PATH));
        assert!(cfg.report.show_low);
        assert_eq!(cfg.policy.fail_on, FailOn::Never);
    }

    #[test]
    fn test_override_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[report]").unwrap();
        writeln!(f, "format = \"json\"").unwrap();
        writeln!(f, "show_low = false").unwrap();
        writeln!(f, "[policy]").unwrap();
        writeln!(f, "fail_on = \"medium\"").unwrap();

        let cfg = load_config(Path::new("."), Some(f.path())).unwrap();
        assert_eq!(cfg.report.format, ReportFormat::Json);
        assert!(!cfg.report.show_low);
        assert_eq!(cfg.report.pdf_path, PathBuf::from(DEFAULT_PDF_PATH));
        assert_eq!(cfg.policy.fail_on, FailOn::Medium);
    }

    #[test]
    fn test_local_config_discovered() {
        let dir = tempdir().unwrap();
        let cfg_dir = dir.path().join(".contract-checkr");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(
            cfg_dir.join("config.toml"),
            "[report]\npdf_path = \"out/review.pdf\"\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.report.pdf_path, PathBuf::from("out/review.pdf"));
        assert_eq!(cfg.report.format, ReportFormat::Terminal);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[policy]").unwrap();
        writeln!(f, "fail_on = \"sometimes\"").unwrap();

        assert!(load_config(Path::new("."), Some(f.path())).is_err());
    }

    #[test]
    fn test_missing_override_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_fail_on_threshold() {
        assert!(!FailOn::Never.is_triggered_by(RiskLevel::High));
        assert!(FailOn::Medium.is_triggered_by(RiskLevel::Medium));
        assert!(FailOn::Medium.is_triggered_by(RiskLevel::High));
        assert!(!FailOn::High.is_triggered_by(RiskLevel::Medium));
        assert!(FailOn::Low.is_triggered_by(RiskLevel::Low));
    }
}
