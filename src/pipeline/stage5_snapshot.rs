use crate::model::page::ScoredPage;
use crate::model::round_to;
use crate::model::snapshot::SnapshotStats;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage4_action::needs_action;

pub fn run_stage5(pages: &[ScoredPage], thresholds: &ThresholdProfile) -> SnapshotStats {
    let total = pages.len();
    if total == 0 {
        return SnapshotStats::default();
    }
    let n = total as f64;

    let sum_wq = pages.iter().map(|p| p.overall_wq_score).sum::<f64>();
    let sum_tv = pages.iter().map(|p| p.overall_tv_score).sum::<f64>();
    let below_wq = count_where(pages, |p| p.overall_wq_score < thresholds.wq_attention);
    let below_tv = count_where(pages, |p| p.overall_tv_score < thresholds.tv_attention);
    let action = count_where(pages, needs_action);

    SnapshotStats {
        avg_wq: round_to(sum_wq / n, 2),
        avg_tv: round_to(sum_tv / n, 2),
        pct_below_wq_threshold: percent(below_wq, n),
        pct_below_tv_threshold: percent(below_tv, n),
        pct_action_needed: percent(action, n),
        action_needed_count: action,
        total_pages: total,
    }
}

fn count_where(pages: &[ScoredPage], predicate: impl Fn(&ScoredPage) -> bool) -> usize {
    pages.iter().filter(|p| predicate(p)).count()
}

fn percent(count: usize, total: f64) -> f64 {
    round_to(count as f64 / total * 100.0, 1)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_snapshot.rs"]
mod tests;
