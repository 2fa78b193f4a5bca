use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{AnalysisResult, RiskLevel};
use crate::report::{compact, DISCLAIMER};

const BAR_WIDTH: usize = 30;

/// Render a colored terminal report.
pub fn render(result: &AnalysisResult, source: &str, show_low: bool, quiet: bool) -> Result<()> {
    let counts = &result.counts;

    if quiet {
        println!(
            "Clauses: {}  High: {}  Medium: {}  Low: {}  Score: {}  Overall: {}",
            result.clause_count(),
            counts.high.to_string().red(),
            counts.medium.to_string().yellow(),
            counts.low.to_string().green(),
            result.total_score,
            paint_band(result.overall),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "contract-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Source: {}\n", source);

    // Summary box
    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48}  │", "CONTRACT SUMMARY".bold());
    println!(
        " │  {:<48}  │",
        format!("Total clauses   : {:>4}", result.clause_count())
    );
    for level in RiskLevel::ALL {
        println!(
            " │  {}  {:<45}  │",
            paint_level("●", level),
            format!("{:<6} risk     : {:>4}", level.to_string(), counts.get(level))
        );
    }
    println!(" └────────────────────────────────────────────────────┘\n");

    // Distribution chart
    println!(" {} Risk distribution:\n", "[CHART]".cyan().bold());
    let max = counts.max();
    for level in RiskLevel::ALL {
        let count = counts.get(level);
        println!(
            "   {:<7} {} {}",
            level.to_string(),
            paint_level(&distribution_bar(count, max, BAR_WIDTH), level),
            count
        );
    }
    println!();

    // Clause table
    let hidden = if show_low { 0 } else { counts.low };
    if result.clause_count() > hidden {
        println!(" {} Clause analysis:\n", "[CLAUSES]".blue().bold());
        render_table(result, show_low);
        println!();
    }
    if hidden > 0 {
        println!(
            " {} low-risk clause{} not listed (use --verbose to show them)\n",
            hidden,
            if hidden == 1 { "" } else { "s" }
        );
    }

    // Overall assessment
    println!(" {} Overall risk assessment:\n", "[OVERALL]".bold());
    println!("   Total risk score      : {}", result.total_score.to_string().bold());
    println!("   Overall contract risk : {}\n", paint_band(result.overall));
    println!(" {} Note: {}\n", "⚠".yellow(), DISCLAIMER.dimmed());

    Ok(())
}

fn render_table(result: &AnalysisResult, show_low: bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Clause").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Explanation").add_attribute(Attribute::Bold),
        ]);

    for clause in result
        .clauses
        .iter()
        .filter(|c| show_low || c.risk != RiskLevel::Low)
    {
        let risk_color = match clause.risk {
            RiskLevel::High => Color::Red,
            RiskLevel::Medium => Color::Yellow,
            RiskLevel::Low => Color::Green,
        };

        table.add_row(vec![
            Cell::new(clause.index).set_alignment(CellAlignment::Right),
            Cell::new(compact(&clause.text)),
            Cell::new(clause.risk.to_string())
                .fg(risk_color)
                .set_alignment(CellAlignment::Center),
            Cell::new(clause.explanation).fg(Color::DarkGrey),
        ]);
    }

    println!("{}", table);
}

/// Horizontal bar for `count`, scaled so that `max` fills `width` cells.
///
/// A non-zero count always gets at least one cell.
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let cells = (count * width + max / 2) / max;
    "█".repeat(cells.clamp(1, width))
}

fn paint_level(text: &str, level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::High => text.red(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::Low => text.green(),
    }
}

fn paint_band(level: RiskLevel) -> ColoredString {
    paint_level(level.band_label(), level).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(distribution_bar(4, 4, 10).chars().count(), 10);
        assert_eq!(distribution_bar(2, 4, 10).chars().count(), 5);
    }

    #[test]
    fn test_bar_zero_is_empty() {
        assert_eq!(distribution_bar(0, 4, 10), "");
        assert_eq!(distribution_bar(0, 0, 10), "");
    }

    #[test]
    fn test_bar_small_count_still_visible() {
        assert_eq!(distribution_bar(1, 1000, 10).chars().count(), 1);
    }
}
