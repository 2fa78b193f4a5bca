/// Split raw text into clauses on every `.`.
///
/// Each piece is trimmed and empty pieces are dropped. Abbreviations,
/// decimals and section numbers ("Section 4.2") are split like any other
/// period.
pub fn extract_clauses(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}
