//! Clause extraction and keyword-based risk classification.
//!
//! - [`extractor`] — splits raw text into period-delimited clauses.
//! - [`classifier`] — assigns each clause a [`RiskLevel`](crate::models::RiskLevel) by keyword rules.
//! - [`scorer`] — weights levels and bands the summed score.
//! - [`explain`] — fixed explanation sentence per level.
//!
//! [`analyze`] runs the whole pipeline.

pub mod classifier;
pub mod explain;
pub mod extractor;
pub mod scorer;

use tracing::{debug, trace};

use crate::error::AnalysisError;
use crate::models::{AnalysisResult, ClauseAssessment, RiskCounts};

use classifier::classify;
use explain::explain;
use extractor::extract_clauses;
use scorer::{overall_band, risk_score};

/// Analyze raw contract text.
///
/// Returns [`AnalysisError::EmptyInput`] when the text is empty after
/// trimming. Text made only of periods is not empty; it yields a result
/// with no clauses and a Low band.
pub fn analyze(raw_text: &str) -> Result<AnalysisResult, AnalysisError> {
    if raw_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let clauses: Vec<ClauseAssessment> = extract_clauses(raw_text)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let risk = classify(text);
            trace!(index = i + 1, %risk, "classified clause");
            ClauseAssessment {
                index: i + 1,
                text: text.to_string(),
                risk,
                score: risk_score(risk),
                explanation: explain(risk),
            }
        })
        .collect();

    let mut counts = RiskCounts::default();
    for clause in &clauses {
        counts.record(clause.risk);
    }
    let total_score = scorer::total_score(clauses.iter().map(|c| c.risk));

    let overall = overall_band(total_score);
    debug!(
        clauses = clauses.len(),
        high = counts.high,
        medium = counts.medium,
        low = counts.low,
        total_score,
        overall = overall.band_label(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        clauses,
        counts,
        total_score,
        overall,
    })
}
