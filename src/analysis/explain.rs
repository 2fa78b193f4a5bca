use crate::models::RiskLevel;

/// Fixed reader-facing explanation for a risk level.
pub fn explain(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "This clause may be risky and needs careful review.",
        RiskLevel::Medium => "This clause may cause issues in some situations.",
        RiskLevel::Low => "This clause is generally safe.",
    }
}
