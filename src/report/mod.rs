pub mod json;
pub mod text;

use crate::model::page::ScoredPage;
use crate::model::recommendation::Recommendation;

/// Shortest decimal form, as the dashboard shows scores (`8.38`, `9`).
pub fn format_score(v: f64) -> String {
    format!("{}", v)
}

pub fn format_fixed(v: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, v)
}

/// Flattens separators so a free-text field stays in one TSV cell.
pub fn sanitize_cell(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

/// Occurrences of each label, in the order of `labels`.
pub fn label_counts(
    pages: &[ScoredPage],
    labels: &[Recommendation],
    pick: impl Fn(&ScoredPage) -> Recommendation,
) -> Vec<(Recommendation, usize)> {
    labels
        .iter()
        .map(|&label| (label, pages.iter().filter(|p| pick(p) == label).count()))
        .collect()
}
