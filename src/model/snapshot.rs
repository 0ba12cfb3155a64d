use serde::Serialize;

/// Dashboard-wide figures over the whole scored collection.
///
/// Averages carry two decimals, percentages one. Every field is zero for an
/// empty collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnapshotStats {
    pub avg_wq: f64,
    pub avg_tv: f64,
    pub pct_below_wq_threshold: f64,
    pub pct_below_tv_threshold: f64,
    pub pct_action_needed: f64,
    pub action_needed_count: usize,
    pub total_pages: usize,
}
