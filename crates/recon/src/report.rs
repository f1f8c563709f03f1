//! Output-file body and the human-readable run report.

use std::fmt::Write;

use crate::error::ReconError;
use crate::model::{FilterResult, VerbEntry};

/// One raw entry per line, newline-terminated. Zero entries render as `"\n"`.
pub fn render_output(entries: &[VerbEntry]) -> String {
    let mut out = entries
        .iter()
        .map(|e| e.raw.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

/// Console report: counts, a blank line, then the collated duplicate listing.
///
/// ```text
/// A1: 1 | A2-only: 1 | Combined: 2
/// B1 total: 4
/// Duplicates removed: 2
/// B1-only written: 2
///
/// Duplicates:
///   sich freuen (A2)
///   gehen (A1)
/// ```
pub fn render_text(result: &FilterResult) -> String {
    let s = &result.summary;
    let mut out = String::new();

    let mut counts: Vec<String> = s.known.iter().map(|k| format!("{}: {}", k.title, k.count)).collect();
    counts.push(format!("Combined: {}", s.combined));

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", counts.join(" | "));
    let _ = writeln!(out, "{} total: {}", s.candidate_label, s.candidate_total);
    let _ = writeln!(out, "Duplicates removed: {}", s.duplicates_removed);
    let _ = writeln!(out, "{}-only written: {}", s.candidate_label, s.unique_written);
    let _ = writeln!(out);
    let _ = writeln!(out, "Duplicates:");
    for d in &result.duplicates {
        let _ = writeln!(out, "  {} ({})", d.entry.raw, d.source);
    }
    out
}

/// Pretty JSON for `--json` output.
pub fn render_json(result: &FilterResult) -> Result<String, ReconError> {
    serde_json::to_string_pretty(result).map_err(|e| ReconError::Serialize(e.to_string()))
}
