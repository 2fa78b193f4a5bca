//! `contract-checkr` — split contract text into clauses and flag risky ones.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load report/exit config ([`config::load_config`]).
//! 3. Read the text from a file, `--text`, or stdin ([`input`]).
//! 4. Run the pipeline ([`analysis::analyze`]): extract clauses, classify
//!    each by keyword, score and band the total.
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0`, `1` (fail threshold reached) or `2` (empty input).

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod report;

pub use analysis::analyze;
pub use error::AnalysisError;
pub use models::{AnalysisResult, ClauseAssessment, RiskCounts, RiskLevel};
