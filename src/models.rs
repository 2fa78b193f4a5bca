use serde::{Deserialize, Serialize};

/// Severity assigned to a single clause. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All levels, most severe first (the order reports list them in).
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// Upper-case band label used for the overall assessment.
    pub fn band_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// One extracted clause together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseAssessment {
    /// 1-based position in the input.
    pub index: usize,
    pub text: String,
    pub risk: RiskLevel,
    pub score: u32,
    pub explanation: &'static str,
}

/// Number of clauses per risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskCounts {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    /// Largest single-level count; used to scale distribution charts.
    pub fn max(&self) -> usize {
        self.high.max(self.medium).max(self.low)
    }
}

/// Full output of one [`analyze`](crate::analysis::analyze) call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub clauses: Vec<ClauseAssessment>,
    pub counts: RiskCounts,
    pub total_score: u32,
    #[serde(serialize_with = "serialize_band")]
    pub overall: RiskLevel,
}

impl AnalysisResult {
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

fn serialize_band<S>(level: &RiskLevel, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(level.band_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::ALL.iter().max(), Some(&RiskLevel::High));
    }

    #[test]
    fn test_counts_record_and_total() {
        let mut counts = RiskCounts::default();
        counts.record(RiskLevel::High);
        counts.record(RiskLevel::High);
        counts.record(RiskLevel::Low);

        assert_eq!(counts.get(RiskLevel::High), 2);
        assert_eq!(counts.get(RiskLevel::Medium), 0);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.max(), 2);
    }

    #[test]
    fn test_overall_serializes_upper_case() {
        let result = AnalysisResult {
            clauses: Vec::new(),
            counts: RiskCounts::default(),
            total_score: 0,
            overall: RiskLevel::Medium,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overall"], "MEDIUM");
    }
}
