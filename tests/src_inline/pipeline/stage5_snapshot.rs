use super::*;
use crate::model::page::PageRecord;
use crate::model::recommendation::Recommendation;

fn page(wq_score: f64, tv_score: f64, wq: Recommendation, tv: Recommendation) -> ScoredPage {
    ScoredPage {
        record: PageRecord {
            id: "page-0".to_string(),
            page_title: "Page".to_string(),
            page_url: String::new(),
            assessment_date: String::new(),
            wq: [wq_score; 8],
            tv: [tv_score; 6],
        },
        overall_wq_score: wq_score,
        overall_tv_score: tv_score,
        any_wq_sub_low: false,
        any_tv_sub_low: false,
        wq_recommendation: wq,
        tv_recommendation: tv,
    }
}

#[test]
fn test_empty_collection_is_all_zero() {
    let stats = run_stage5(&[], &ThresholdProfile::default_v1());
    assert_eq!(stats, SnapshotStats::default());
    assert_eq!(stats.avg_wq, 0.0);
    assert_eq!(stats.pct_action_needed, 0.0);
    assert_eq!(stats.total_pages, 0);
}

#[test]
fn test_averages_and_thresholds() {
    use Recommendation::*;
    let pages = vec![
        page(9.5, 9.0, PublishAsIs, HighPriorityTopic),
        page(5.99, 4.99, ReviewNeededLowScore, ReviewNeededLowScore),
        page(6.0, 5.0, SpotFixOptional, ValuableRefineIfNeeded),
    ];
    let stats = run_stage5(&pages, &ThresholdProfile::default_v1());
    assert_eq!(stats.total_pages, 3);
    assert_eq!(stats.avg_wq, 7.16);
    assert_eq!(stats.avg_tv, 6.33);
    assert_eq!(stats.pct_below_wq_threshold, 33.3);
    assert_eq!(stats.pct_below_tv_threshold, 33.3);
    assert_eq!(stats.action_needed_count, 1);
    assert_eq!(stats.pct_action_needed, 33.3);
}

#[test]
fn test_all_pages_need_action() {
    use Recommendation::*;
    let pages = vec![
        page(2.0, 2.0, DoNotPublishAsIs, DeprioritizeOrRemove),
        page(4.0, 4.0, NeedsFullRewriteOrReview, NeedsUpdateOrMerge),
    ];
    let stats = run_stage5(&pages, &ThresholdProfile::default_v1());
    assert_eq!(stats.pct_action_needed, 100.0);
    assert_eq!(stats.pct_below_wq_threshold, 100.0);
    assert_eq!(stats.avg_wq, 3.0);
}
