use super::*;
use crate::model::page::PageRecord;
use crate::model::recommendation::Recommendation;

fn page(id: &str, wq: Recommendation, tv: Recommendation) -> ScoredPage {
    ScoredPage {
        record: PageRecord {
            id: id.to_string(),
            page_title: id.to_uppercase(),
            page_url: String::new(),
            assessment_date: String::new(),
            wq: [7.0; 8],
            tv: [7.0; 6],
        },
        overall_wq_score: 7.0,
        overall_tv_score: 7.0,
        any_wq_sub_low: false,
        any_tv_sub_low: false,
        wq_recommendation: wq,
        tv_recommendation: tv,
    }
}

fn sample() -> Vec<ScoredPage> {
    use Recommendation::*;
    vec![
        page("a", PublishAsIs, HighPriorityTopic),
        page("b", SpotFixOptional, NeedsUpdateOrMerge),
        page("c", NeedsTargetedRevisionHighScore, ValuableRefineIfNeeded),
        page("d", ReviewCriteria, ValuableRefineIfNeededHighScore),
        page("e", ReviewNeededLowScore, ReviewNeededLowScore),
    ]
}

#[test]
fn test_selects_either_family_in_order() {
    let out = run_stage4(&sample());
    let ids = out.iter().map(|p| p.id()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["b", "c", "e"]);
}

#[test]
fn test_filter_is_idempotent() {
    let once = run_stage4(&sample());
    let twice = run_stage4(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_empty_input() {
    assert!(run_stage4(&[]).is_empty());
}

#[test]
fn test_needs_action_ignores_non_critical_labels() {
    use Recommendation::*;
    assert!(!needs_action(&page("x", SpotFixOptional, ValuableRefineIfNeeded)));
    assert!(needs_action(&page("y", DoNotPublishAsIs, HighPriorityTopic)));
    assert!(needs_action(&page("z", PublishAsIs, DeprioritizeOrRemove)));
}
