//! Report renderers for analysis results.
//!
//! - [`terminal`] — colored summary, distribution chart and clause table; respects `--quiet`.
//! - [`pdf`] — cover page with stat cards, distribution chart and overall
//!   assessment, followed by paginated clause pages.

pub mod pdf;
pub mod terminal;

/// Shown under every overall assessment.
pub const DISCLAIMER: &str = "This is a decision-support tool, not legal advice.";

/// Collapse runs of whitespace (including line breaks) to single spaces for display.
pub fn compact(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
