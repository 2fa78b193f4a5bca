use contract_checkr::{analyze, AnalysisError, RiskCounts, RiskLevel};

fn risks(text: &str) -> Vec<RiskLevel> {
    analyze(text)
        .unwrap()
        .clauses
        .iter()
        .map(|c| c.risk)
        .collect()
}

// ─── Reference contracts ──────────────────────────────────────────────────────

#[test]
fn at_will_contract_with_non_compete_is_medium() {
    let result = analyze(
        "Employee may be terminated at will. The salary is $50000. \
         Employee agrees to a non-compete for 2 years.",
    )
    .unwrap();

    assert_eq!(result.clause_count(), 3);
    assert_eq!(
        result.clauses.iter().map(|c| c.risk).collect::<Vec<_>>(),
        vec![RiskLevel::High, RiskLevel::Low, RiskLevel::High]
    );
    assert_eq!(result.total_score, 7);
    assert_eq!(result.overall, RiskLevel::Medium);
}

#[test]
fn plain_terms_are_low() {
    let result = analyze("Salary shall be paid monthly. Office hours are 9 to 5.").unwrap();

    assert_eq!(result.clause_count(), 2);
    assert_eq!(result.counts, RiskCounts { high: 0, medium: 0, low: 2 });
    assert_eq!(result.total_score, 2);
    assert_eq!(result.overall, RiskLevel::Low);
}

#[test]
fn whitespace_only_is_empty_input() {
    assert_eq!(analyze("   "), Err(AnalysisError::EmptyInput));
    assert_eq!(analyze(""), Err(AnalysisError::EmptyInput));
}

#[test]
fn text_without_periods_is_one_clause() {
    let result = analyze("Employee shall not disclose confidential information").unwrap();

    assert_eq!(result.clause_count(), 1);
    assert_eq!(
        result.clauses[0].text,
        "Employee shall not disclose confidential information"
    );
    assert_eq!(result.clauses[0].risk, RiskLevel::Low);
    assert_eq!(result.total_score, 1);
    assert_eq!(result.overall, RiskLevel::Low);
}

#[test]
fn termination_beats_penalty() {
    assert_eq!(risks("If terminated early a penalty applies"), vec![RiskLevel::High]);
}

// ─── Properties ───────────────────────────────────────────────────────────────

#[test]
fn keyword_case_does_not_matter() {
    assert_eq!(risks("TERMINATE"), risks("terminate"));
    assert_eq!(risks("Non-Compete applies"), vec![RiskLevel::High]);
}

#[test]
fn many_low_clauses_band_high_by_volume() {
    let text = "Lunch is provided. ".repeat(11);
    let result = analyze(&text).unwrap();

    assert_eq!(result.counts.low, 11);
    assert_eq!(result.total_score, 11);
    assert_eq!(result.overall, RiskLevel::High);
}

#[test]
fn counts_and_score_agree_with_clauses() {
    let result = analyze(
        "Termination requires 30 days notice. A penalty applies to late delivery. \
         No work for a competitor. Holidays follow the local calendar. \
         Any fine is deducted from salary. Overtime is paid.",
    )
    .unwrap();

    assert_eq!(result.counts.total(), result.clause_count());
    assert_eq!(
        result.total_score,
        result.clauses.iter().map(|c| c.score).sum::<u32>()
    );
    assert_eq!(result.counts, RiskCounts { high: 2, medium: 2, low: 2 });
    assert_eq!(result.total_score, 12);
    assert_eq!(result.overall, RiskLevel::High);
}

// ─── JSON shape ───────────────────────────────────────────────────────────────

#[test]
fn json_output_shape() {
    let result = analyze("Employee may be terminated at will. The salary is $50000.").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["clauses"][0]["text"], "Employee may be terminated at will");
    assert_eq!(json["clauses"][0]["risk"], "High");
    assert_eq!(json["clauses"][0]["index"], 1);
    assert_eq!(json["clauses"][1]["risk"], "Low");
    assert_eq!(json["counts"]["high"], 1);
    assert_eq!(json["counts"]["medium"], 0);
    assert_eq!(json["counts"]["low"], 1);
    assert_eq!(json["total_score"], 4);
    assert_eq!(json["overall"], "LOW");
}
