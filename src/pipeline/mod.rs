pub mod stage2_aggregate;
pub mod stage3_classify;
pub mod stage4_action;
pub mod stage5_snapshot;
pub mod stage6_report;

use tracing::debug;

use crate::input::{ParsedScores, SkippedRow};
use crate::model::page::{PageRecord, ScoredPage};
use crate::model::snapshot::SnapshotStats;
use crate::model::thresholds::ThresholdProfile;
use stage2_aggregate::run_stage2;
use stage3_classify::run_stage3;
use stage4_action::run_stage4;
use stage5_snapshot::run_stage5;

#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub pages: Vec<ScoredPage>,
    pub action_needed: Vec<ScoredPage>,
    pub snapshot: SnapshotStats,
    pub skipped: Vec<SkippedRow>,
}

pub fn run_pipeline(parsed: ParsedScores, thresholds: &ThresholdProfile) -> PipelineOutput {
    let pages = score_pages(parsed.pages, thresholds);
    let action_needed = run_stage4(&pages);
    let snapshot = run_stage5(&pages, thresholds);
    debug!(
        "scored {} pages, {} need action",
        pages.len(),
        action_needed.len()
    );
    PipelineOutput {
        pages,
        action_needed,
        snapshot,
        skipped: parsed.skipped,
    }
}

pub fn score_pages(records: Vec<PageRecord>, thresholds: &ThresholdProfile) -> Vec<ScoredPage> {
    let aggregates = run_stage2(&records, thresholds);
    let classifications = run_stage3(&aggregates);
    records
        .into_iter()
        .zip(aggregates)
        .zip(classifications)
        .map(|((record, agg), class)| ScoredPage {
            record,
            overall_wq_score: agg.overall_wq,
            overall_tv_score: agg.overall_tv,
            any_wq_sub_low: agg.any_wq_low,
            any_tv_sub_low: agg.any_tv_low,
            wq_recommendation: class.wq,
            tv_recommendation: class.tv,
        })
        .collect()
}
