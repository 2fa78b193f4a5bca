use crate::models::RiskLevel;

/// Highest total still banded as Low.
pub const LOW_MAX: u32 = 5;
/// Highest total still banded as Medium.
pub const MEDIUM_MAX: u32 = 10;

/// Numeric weight of a risk level.
pub fn risk_score(level: RiskLevel) -> u32 {
    match level {
        RiskLevel::Low => 1,
        RiskLevel::Medium => 2,
        RiskLevel::High => 3,
    }
}

/// Sum of the weights of `levels`.
pub fn total_score<I>(levels: I) -> u32
where
    I: IntoIterator<Item = RiskLevel>,
{
    levels.into_iter().map(risk_score).sum()
}

/// Band a summed score into the overall assessment.
///
/// Totals are not normalized by clause count, so a long contract of
/// low-risk clauses can still band as Medium or High.
pub fn overall_band(total: u32) -> RiskLevel {
    if total <= LOW_MAX {
        RiskLevel::Low
    } else if total <= MEDIUM_MAX {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores() {
        assert_eq!(risk_score(RiskLevel::Low), 1);
        assert_eq!(risk_score(RiskLevel::Medium), 2);
        assert_eq!(risk_score(RiskLevel::High), 3);
    }

    #[test]
    fn test_total_score() {
        let levels = [RiskLevel::High, RiskLevel::Low, RiskLevel::High];
        assert_eq!(total_score(levels), 7);
        assert_eq!(total_score(Vec::new()), 0);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(overall_band(0), RiskLevel::Low);
        assert_eq!(overall_band(5), RiskLevel::Low);
        assert_eq!(overall_band(6), RiskLevel::Medium);
        assert_eq!(overall_band(10), RiskLevel::Medium);
        assert_eq!(overall_band(11), RiskLevel::High);
    }

    #[test]
    fn test_volume_of_low_clauses_raises_band() {
        let levels = std::iter::repeat(RiskLevel::Low).take(11);
        assert_eq!(overall_band(total_score(levels)), RiskLevel::High);
    }
}
