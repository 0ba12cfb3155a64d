use crate::model::page::PageRecord;
use crate::model::round_to;
use crate::model::thresholds::ThresholdProfile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    /// Unrounded group means, used for classification.
    pub overall_wq_raw: f64,
    pub overall_tv_raw: f64,
    /// Group means rounded to two decimals.
    pub overall_wq: f64,
    pub overall_tv: f64,
    pub any_wq_low: bool,
    pub any_tv_low: bool,
}

pub fn run_stage2(records: &[PageRecord], thresholds: &ThresholdProfile) -> Vec<Aggregate> {
    records
        .iter()
        .map(|record| aggregate(record, thresholds))
        .collect()
}

pub fn aggregate(record: &PageRecord, thresholds: &ThresholdProfile) -> Aggregate {
    let overall_wq_raw = group_mean(&record.wq);
    let overall_tv_raw = group_mean(&record.tv);
    Aggregate {
        overall_wq_raw,
        overall_tv_raw,
        overall_wq: round_to(overall_wq_raw, 2),
        overall_tv: round_to(overall_tv_raw, 2),
        any_wq_low: any_low(&record.wq, thresholds.low_sub_score),
        any_tv_low: any_low(&record.tv, thresholds.low_sub_score),
    }
}

pub fn group_mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

pub fn any_low(scores: &[f64], threshold: f64) -> bool {
    scores.iter().any(|&s| s <= threshold)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
