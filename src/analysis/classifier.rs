use crate::models::RiskLevel;

/// Keyword rules, checked top to bottom; the first rule with a matching
/// keyword decides the level.
///
/// Penalty keywords are checked before the non-compete keywords, so a
/// clause mentioning both a competitor and a fine is Medium.
const RULES: &[(&[&str], RiskLevel)] = &[
    (&["terminate", "termination"], RiskLevel::High),
    (&["penalty", "fine"], RiskLevel::Medium),
    (&["non-compete", "competitor"], RiskLevel::High),
];

/// Classify a single clause into a risk level.
///
/// Matching is case-insensitive substring containment with no word
/// boundaries, stemming or negation handling: "defined" contains "fine",
/// and "shall not be terminated" is still High.
pub fn classify(clause: &str) -> RiskLevel {
    let lower = clause.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::Low)
}
