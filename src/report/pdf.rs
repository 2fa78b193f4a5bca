use std::path::Path;

use anyhow::{Context, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};
use tracing::debug;

use crate::models::{AnalysisResult, ClauseAssessment, RiskLevel};
use crate::report::{compact, DISCLAIMER};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 18.0;
const T_END: f32 = PAGE_W - MARGIN;
const COVER_HDR_H: f32 = 64.0;

type Rgb3 = (f32, f32, f32);

// ── Palette ───────────────────────────────────────────────────────────────────
const BG:           Rgb3 = (1.00, 1.00, 1.00);
const PANEL:        Rgb3 = (1.00, 1.00, 1.00);
const PANEL_ALT:    Rgb3 = (0.95, 0.96, 0.99);
const PANEL_BORDER: Rgb3 = (0.85, 0.87, 0.92);
const ACCENT_NAVY:  Rgb3 = (0.12, 0.20, 0.45);
const ACCENT_TEAL:  Rgb3 = (0.10, 0.55, 0.60);
const TEXT_PRI:     Rgb3 = (0.07, 0.08, 0.14);
const TEXT_SEC:     Rgb3 = (0.36, 0.40, 0.52);
const TEXT_MUT:     Rgb3 = (0.58, 0.63, 0.72);
const WHITE:        Rgb3 = (1.00, 1.00, 1.00);
const WHITE_DIM:    Rgb3 = (0.80, 0.90, 0.95);

const LOW_BG:  Rgb3 = (0.90, 0.98, 0.92);
const LOW_FG:  Rgb3 = (0.07, 0.52, 0.22);
const MED_BG:  Rgb3 = (1.00, 0.95, 0.87);
const MED_FG:  Rgb3 = (0.70, 0.40, 0.02);
const HIGH_BG: Rgb3 = (1.00, 0.91, 0.91);
const HIGH_FG: Rgb3 = (0.76, 0.09, 0.13);

const R_PANEL: f32 = 2.5;
const R_BADGE: f32 = 1.5;

// Clause pages
const CLAUSE_WRAP: usize = 84;
const LINE_H: f32 = 3.8;

/// Render a PDF report: cover page (summary, chart, overall) → clause pages.
pub fn render(
    result: &AnalysisResult,
    source: &str,
    show_low: bool,
    output_path: &Path,
) -> Result<()> {
    let doc = PdfDocument::empty("Contract Risk Report");
    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let fonts = Fonts { bold: &font_b, regular: &font_r };

    add_cover_page(&doc, result, source, &fonts);

    let listed: Vec<&ClauseAssessment> = result
        .clauses
        .iter()
        .filter(|c| show_low || c.risk != RiskLevel::Low)
        .collect();
    add_clause_pages(&doc, &listed, &fonts);

    let bytes = doc.save_to_bytes()?;
    std::fs::write(output_path, &bytes)
        .with_context(|| format!("Failed to write PDF to {}", output_path.display()))?;
    debug!(bytes = bytes.len(), clauses = listed.len(), "pdf written");

    println!("PDF report written to: {}", output_path.display());
    Ok(())
}

struct Fonts<'a> {
    bold: &'a IndirectFontRef,
    regular: &'a IndirectFontRef,
}

fn level_colors(level: RiskLevel) -> (Rgb3, Rgb3) {
    match level {
        RiskLevel::High => (HIGH_FG, HIGH_BG),
        RiskLevel::Medium => (MED_FG, MED_BG),
        RiskLevel::Low => (LOW_FG, LOW_BG),
    }
}

// ── Cover page ────────────────────────────────────────────────────────────────

fn add_cover_page(doc: &PdfDocumentReference, result: &AnalysisResult, source: &str, fonts: &Fonts) {
    let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Summary");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);
    let counts = &result.counts;

    fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);
    let hdr_bot = PAGE_H - COVER_HDR_H;
    fill_gradient_h(&layer, 0.0, hdr_bot, PAGE_W, COVER_HDR_H, ACCENT_NAVY, ACCENT_TEAL, 28);

    set_color(&layer, WHITE_DIM);
    layer.use_text(
        format!("contract-checkr v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(PAGE_W - MARGIN - 44.0), Mm(PAGE_H - 10.5), fonts.regular,
    );
    set_color(&layer, WHITE);
    layer.use_text("Contract Risk", 28.0, Mm(MARGIN), Mm(PAGE_H - 26.0), fonts.bold);
    set_color(&layer, WHITE_DIM);
    layer.use_text("Assessment", 28.0, Mm(MARGIN), Mm(PAGE_H - 41.0), fonts.bold);

    // Source chip
    let chip_y = hdr_bot - 18.0;
    let chip_h = 12.0f32;
    let chip_w = 120.0f32;
    fill_rounded_rect(&layer, MARGIN, chip_y, chip_w, chip_h, R_BADGE, PANEL);
    stroke_rounded_rect(&layer, MARGIN, chip_y, chip_w, chip_h, R_BADGE, PANEL_BORDER);
    fill_rect(&layer, MARGIN, chip_y, 2.5, chip_h, ACCENT_TEAL);
    set_color(&layer, TEXT_MUT);
    layer.use_text("SOURCE", 6.0, Mm(MARGIN + 5.0), Mm(chip_y + chip_h - 3.8), fonts.bold);
    set_color(&layer, TEXT_PRI);
    layer.use_text(truncate(source, 44), 9.5, Mm(MARGIN + 5.0), Mm(chip_y + 2.8), fonts.bold);

    set_color(&layer, TEXT_SEC);
    layer.use_text(
        format!("Analyzed  {}", today()),
        9.0, Mm(MARGIN), Mm(chip_y - 8.0), fonts.regular,
    );

    // Stat cards
    let rule_y = chip_y - 16.5;
    section_rule(&layer, rule_y, "OVERVIEW", fonts);

    let card_y = rule_y - 40.0;
    let card_h = 26.0f32;
    let gap = 4.0f32;
    let card_w = (T_END - MARGIN - gap * 3.0) / 4.0;
    let cards: [(&str, usize, Rgb3); 4] = [
        ("TOTAL CLAUSES", result.clause_count(), ACCENT_NAVY),
        ("HIGH RISK", counts.high, HIGH_FG),
        ("MEDIUM RISK", counts.medium, MED_FG),
        ("LOW RISK", counts.low, LOW_FG),
    ];
    for (i, (label, value, accent)) in cards.iter().enumerate() {
        let cx = MARGIN + (card_w + gap) * i as f32;
        draw_stat_card(&layer, cx, card_y, card_w, card_h, label, &value.to_string(), *accent, fonts);
    }

    // Distribution chart
    let chart_rule_y = card_y - 10.0;
    section_rule(&layer, chart_rule_y, "RISK DISTRIBUTION", fonts);
    draw_distribution_chart(&layer, result, chart_rule_y - 14.0, fonts);

    // Overall assessment panel
    let overall_rule_y = chart_rule_y - 52.0;
    section_rule(&layer, overall_rule_y, "OVERALL ASSESSMENT", fonts);
    draw_overall_panel(&layer, result, overall_rule_y - 40.0, fonts);

    draw_footer(&layer, fonts);
}

#[allow(clippy::too_many_arguments)]
fn draw_stat_card(
    layer: &PdfLayerReference,
    x: f32, y: f32, w: f32, h: f32,
    label: &str,
    value: &str,
    accent: Rgb3,
    fonts: &Fonts,
) {
    fill_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL);
    stroke_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL_BORDER);
    fill_rect(layer, x, y + h - 2.0, w, 2.0, accent);

    set_color(layer, accent);
    layer.use_text(value, 20.0, Mm(x + 5.0), Mm(y + h * 0.38), fonts.bold);
    set_color(layer, TEXT_MUT);
    layer.use_text(label, 6.5, Mm(x + 5.0), Mm(y + 3.5), fonts.regular);
}

/// One horizontal bar per level, scaled to the largest count.
fn draw_distribution_chart(layer: &PdfLayerReference, result: &AnalysisResult, top: f32, fonts: &Fonts) {
    const LABEL_W: f32 = 24.0;
    const BAR_H: f32 = 7.0;
    const BAR_GAP: f32 = 4.5;
    let track_x = MARGIN + LABEL_W;
    let track_w = T_END - track_x - 14.0;
    let max = result.counts.max().max(1) as f32;

    for (i, level) in RiskLevel::ALL.iter().enumerate() {
        let count = result.counts.get(*level);
        let (fg, bg) = level_colors(*level);
        let y = top - i as f32 * (BAR_H + BAR_GAP) - BAR_H;

        set_color(layer, TEXT_SEC);
        layer.use_text(level.to_string(), 8.5, Mm(MARGIN), Mm(y + 2.2), fonts.bold);

        fill_rounded_rect(layer, track_x, y, track_w, BAR_H, R_BADGE, bg);
        if count > 0 {
            let w = (track_w * count as f32 / max).max(2.0 * R_BADGE);
            fill_rounded_rect(layer, track_x, y, w, BAR_H, R_BADGE, fg);
        }

        set_color(layer, fg);
        layer.use_text(count.to_string(), 9.0, Mm(T_END - 10.0), Mm(y + 2.0), fonts.bold);
    }
}

fn draw_overall_panel(layer: &PdfLayerReference, result: &AnalysisResult, y: f32, fonts: &Fonts) {
    let h = 32.0f32;
    let w = T_END - MARGIN;
    let (fg, bg) = level_colors(result.overall);

    fill_rounded_rect(layer, MARGIN, y, w, h, R_PANEL, PANEL);
    stroke_rounded_rect(layer, MARGIN, y, w, h, R_PANEL, PANEL_BORDER);
    fill_rect(layer, MARGIN, y, 2.5, h, fg);

    set_color(layer, TEXT_MUT);
    layer.use_text("TOTAL RISK SCORE", 6.5, Mm(MARGIN + 6.0), Mm(y + h - 7.0), fonts.bold);
    set_color(layer, TEXT_PRI);
    layer.use_text(result.total_score.to_string(), 22.0, Mm(MARGIN + 6.0), Mm(y + h - 17.0), fonts.bold);

    set_color(layer, TEXT_MUT);
    layer.use_text("OVERALL CONTRACT RISK", 6.5, Mm(MARGIN + 62.0), Mm(y + h - 7.0), fonts.bold);
    let badge_x = MARGIN + 62.0;
    let badge_y = y + h - 18.5;
    fill_rounded_rect(layer, badge_x, badge_y, 30.0, 8.0, R_BADGE, bg);
    set_color(layer, fg);
    layer.use_text(result.overall.band_label(), 10.0, Mm(badge_x + 3.5), Mm(badge_y + 2.3), fonts.bold);

    set_color(layer, TEXT_SEC);
    layer.use_text(format!("Note: {}", DISCLAIMER), 8.0, Mm(MARGIN + 6.0), Mm(y + 4.5), fonts.regular);
}

// ── Clause pages ──────────────────────────────────────────────────────────────

const HDR_Y: f32 = 268.5;
const FIRST_Y: f32 = 259.5;
const BOT_MARGIN: f32 = 25.0;
const ROW_PAD: f32 = 4.0;

/// A clause, or the part of one that fits, placed on a clause page.
///
/// Clauses taller than a page are split into several rows; only the first
/// carries the index and risk badge, only the last the explanation.
#[derive(Debug)]
struct PlacedRow<'a> {
    clause: &'a ClauseAssessment,
    /// Position of the clause in the listing, for row striping.
    position: usize,
    lines: Vec<String>,
    first: bool,
    last: bool,
    top: f32,
}

impl PlacedRow<'_> {
    /// Text lines drawn in this row, explanation included.
    fn line_count(&self) -> usize {
        self.lines.len() + usize::from(self.last)
    }

    fn height(&self) -> f32 {
        row_height(self.line_count())
    }

    /// Baseline of the `n`th text line.
    fn line_y(&self, n: usize) -> f32 {
        self.top - ROW_PAD - 1.5 - n as f32 * LINE_H
    }
}

fn row_height(line_count: usize) -> f32 {
    line_count as f32 * LINE_H + ROW_PAD * 2.0
}

/// Number of text lines a row starting at `top` can hold above the bottom margin.
fn lines_that_fit(top: f32) -> usize {
    let room = top - BOT_MARGIN - ROW_PAD * 2.0;
    if room < LINE_H {
        0
    } else {
        (room / LINE_H).floor() as usize
    }
}

/// Assign clause rows to pages.
///
/// A row that does not fit the rest of the page moves to a fresh page; a
/// row that would not fit even a fresh page is split across pages.
fn layout_clause_pages<'a>(clauses: &[&'a ClauseAssessment]) -> Vec<Vec<PlacedRow<'a>>> {
    let page_capacity = lines_that_fit(FIRST_Y);
    let mut pages: Vec<Vec<PlacedRow<'a>>> = Vec::new();
    let mut cur_y = FIRST_Y;

    for (position, clause) in clauses.iter().enumerate() {
        let lines = wrap_text(&compact(&clause.text), CLAUSE_WRAP);
        let mut start = 0;

        loop {
            let rest = lines.len() - start;
            let fits_here = if pages.is_empty() { 0 } else { lines_that_fit(cur_y) };

            // the explanation needs one line after the clause text
            let (take, last) = if rest < fits_here {
                (rest, true)
            } else if rest < page_capacity || fits_here == 0 {
                pages.push(Vec::new());
                cur_y = FIRST_Y;
                continue;
            } else {
                (fits_here, false)
            };

            let row = PlacedRow {
                clause,
                position,
                lines: lines[start..start + take].to_vec(),
                first: start == 0,
                last,
                top: cur_y,
            };
            start += take;
            cur_y -= row.height();
            if let Some(page) = pages.last_mut() {
                page.push(row);
            }
            if last {
                break;
            }
        }
    }

    pages
}

fn add_clause_pages(doc: &PdfDocumentReference, clauses: &[&ClauseAssessment], fonts: &Fonts) {
    let col_idx = MARGIN + 1.5;
    let col_text = MARGIN + 12.0;
    let col_risk = T_END - 24.0;

    let pages = layout_clause_pages(clauses);
    // the cover is page 1
    let total_pages = pages.len() + 1;

    for (page_idx, rows) in pages.iter().enumerate() {
        let (pi, li) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Clauses");
        let layer = doc.get_page(pi).get_layer(li);

        fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);
        fill_gradient_h(&layer, 0.0, PAGE_H - 2.5, PAGE_W, 2.5, ACCENT_NAVY, ACCENT_TEAL, 21);

        set_color(&layer, TEXT_PRI);
        layer.use_text("Clause Analysis", 14.0, Mm(MARGIN), Mm(282.5), fonts.bold);
        set_color(&layer, TEXT_MUT);
        layer.use_text(
            page_label(page_idx + 2, total_pages),
            8.0, Mm(PAGE_W - MARGIN - 22.0), Mm(283.0), fonts.regular,
        );
        draw_hline(&layer, MARGIN, T_END, 277.5, PANEL_BORDER);

        fill_rounded_rect(&layer, MARGIN, HDR_Y - 7.5, T_END - MARGIN, 9.5, R_BADGE, PANEL);
        stroke_rounded_rect(&layer, MARGIN, HDR_Y - 7.5, T_END - MARGIN, 9.5, R_BADGE, PANEL_BORDER);
        set_color(&layer, TEXT_MUT);
        layer.use_text("#", 7.0, Mm(col_idx), Mm(HDR_Y - 4.0), fonts.bold);
        layer.use_text("CLAUSE", 7.0, Mm(col_text), Mm(HDR_Y - 4.0), fonts.bold);
        layer.use_text("RISK", 7.0, Mm(col_risk), Mm(HDR_Y - 4.0), fonts.bold);

        draw_footer(&layer, fonts);

        for row in rows {
            draw_clause_row(&layer, row, (col_idx, col_text, col_risk), fonts);
        }
    }
}

fn draw_clause_row(layer: &PdfLayerReference, row: &PlacedRow, cols: (f32, f32, f32), fonts: &Fonts) {
    let (col_idx, col_text, col_risk) = cols;
    let (fg, bg) = level_colors(row.clause.risk);
    let bottom = row.top - row.height() + 1.5;

    if row.position % 2 == 0 {
        fill_rect(layer, MARGIN, bottom, T_END - MARGIN, row.height(), PANEL_ALT);
    }

    if row.first {
        set_color(layer, TEXT_SEC);
        layer.use_text(row.clause.index.to_string(), 8.0, Mm(col_idx), Mm(row.line_y(0)), fonts.bold);

        let badge_y = row.line_y(0) - 1.3;
        fill_rounded_rect(layer, col_risk, badge_y, 20.0, 4.8, R_BADGE, bg);
        set_color(layer, fg);
        layer.use_text(
            row.clause.risk.to_string().to_uppercase(),
            7.0, Mm(col_risk + 3.0), Mm(badge_y + 1.1), fonts.bold,
        );
    }

    set_color(layer, TEXT_PRI);
    for (j, line) in row.lines.iter().enumerate() {
        layer.use_text(line.as_str(), 8.0, Mm(col_text), Mm(row.line_y(j)), fonts.regular);
    }
    if row.last {
        set_color(layer, TEXT_MUT);
        layer.use_text(
            row.clause.explanation,
            7.0, Mm(col_text), Mm(row.line_y(row.lines.len())), fonts.regular,
        );
    }

    draw_hline(layer, MARGIN, T_END, bottom, PANEL_BORDER);
}

fn page_label(page: usize, total: usize) -> String {
    format!("Page {} of {}", page, total)
}

fn draw_footer(layer: &PdfLayerReference, fonts: &Fonts) {
    draw_hline(layer, MARGIN, T_END, 22.0, PANEL_BORDER);
    set_color(layer, TEXT_MUT);
    layer.use_text(
        format!("Generated by contract-checkr v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(MARGIN), Mm(15.0), fonts.regular,
    );
    layer.use_text(DISCLAIMER, 7.5, Mm(PAGE_W - MARGIN - 68.0), Mm(15.0), fonts.regular);
}

fn section_rule(layer: &PdfLayerReference, y: f32, title: &str, fonts: &Fonts) {
    draw_hline(layer, MARGIN, T_END, y, PANEL_BORDER);
    set_color(layer, TEXT_MUT);
    layer.use_text(title, 6.5, Mm(MARGIN), Mm(y - 7.0), fonts.bold);
}

// ── Drawing helpers ───────────────────────────────────────────────────────────

fn rgb((r, g, b): Rgb3) -> Color {
    Color::Rgb(Rgb { r, g, b, icc_profile: None })
}

fn set_color(layer: &PdfLayerReference, color: Rgb3) {
    layer.set_fill_color(rgb(color));
}

fn fill_polygon(layer: &PdfLayerReference, ring: Vec<(Point, bool)>, color: Rgb3) {
    layer.set_fill_color(rgb(color));
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_fill_color(rgb((0.0, 0.0, 0.0)));
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: Rgb3) {
    let ring = vec![
        (Point::new(Mm(x), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y)), false),
        (Point::new(Mm(x + w), Mm(y + h)), false),
        (Point::new(Mm(x), Mm(y + h)), false),
    ];
    fill_polygon(layer, ring, color);
}

/// Polygon ring approximating a rounded rectangle, 8 segments per corner.
fn rounded_rect_ring(x: f32, y: f32, w: f32, h: f32, r: f32) -> Vec<(Point, bool)> {
    const SEGS: usize = 8;
    let r = r.min(w / 2.0).min(h / 2.0);
    let corners = [
        (x + w - r, y + r, 270.0f32),
        (x + w - r, y + h - r, 0.0f32),
        (x + r, y + h - r, 90.0f32),
        (x + r, y + r, 180.0f32),
    ];

    corners
        .iter()
        .flat_map(|&(cx, cy, start)| {
            (0..=SEGS).map(move |i| {
                let angle = (start + 90.0 * i as f32 / SEGS as f32).to_radians();
                (Point::new(Mm(cx + r * angle.cos()), Mm(cy + r * angle.sin())), false)
            })
        })
        .collect()
}

fn fill_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, r: f32, color: Rgb3) {
    fill_polygon(layer, rounded_rect_ring(x, y, w, h, r), color);
}

fn stroke_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, r: f32, color: Rgb3) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.4);
    layer.add_polygon(Polygon {
        rings: vec![rounded_rect_ring(x, y, w, h, r)],
        mode: PaintMode::Stroke,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_outline_color(rgb((0.0, 0.0, 0.0)));
    layer.set_outline_thickness(1.0);
}

fn draw_hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32, color: Rgb3) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    });
    layer.set_outline_color(rgb((0.0, 0.0, 0.0)));
    layer.set_outline_thickness(1.0);
}

/// Left-to-right gradient built from `steps` vertical strips.
#[allow(clippy::too_many_arguments)]
fn fill_gradient_h(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, from: Rgb3, to: Rgb3, steps: usize) {
    let step_w = w / steps as f32;
    for i in 0..steps {
        let t = i as f32 / (steps - 1).max(1) as f32;
        let color = (
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
            from.2 + (to.2 - from.2) * t,
        );
        // strips overlap to hide rounding gaps
        fill_rect(layer, x + i as f32 * step_w, y, step_w + 0.6, h, color);
    }
}

// ── Text helpers ──────────────────────────────────────────────────────────────

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

/// Greedy word wrap on character counts. Words longer than `max_chars`
/// are hard-broken into `max_chars`-sized pieces.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(max_chars) {
            let current_len = current.chars().count();
            if current_len > 0 && current_len + 1 + piece.len() > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.extend(piece);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
