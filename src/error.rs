use thiserror::Error;

/// Errors returned by [`analyze`](crate::analysis::analyze).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input was empty or whitespace only.
    #[error("no contract text to analyze")]
    EmptyInput,
}
