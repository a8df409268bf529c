// src/report.rs
use crate::core::engine::ConversionSummary;
use crate::core::types::SkipReason;

/// One `infinitive : reason` line per skipped verb, at most `limit` of them.
pub fn skip_lines(skipped: &[SkipReason], limit: usize) -> Vec<String> {
    skipped
        .iter()
        .take(limit)
        .map(|skip| format!("{} : {}", skip.infinitive, skip.code))
        .collect()
}

/// Header line for the skip section, or `None` when nothing was skipped.
pub fn skip_header(skipped: &[SkipReason], limit: usize) -> Option<String> {
    match skipped.len() {
        0 => None,
        n if n > limit => Some(format!("Skipped {n} verbs (first {limit} shown):")),
        n => Some(format!("Skipped {n} verbs:")),
    }
}

pub fn summary_line(summary: &ConversionSummary, output: &str) -> String {
    format!("Done. Wrote {} rows to {}", summary.converted, output)
}
