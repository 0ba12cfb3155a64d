use super::*;
use crate::model::recommendation::Recommendation;

const HEADER: &str = "PageTitle,PageURL,AssessmentDate,WQ1,WQ2,WQ3,WQ4,WQ5,WQ6,WQ7,WQ8,TV1,TV2,TV3,TV4,TV5,TV6";

fn csv() -> String {
    [
        HEADER,
        "Setup Guide,https://d/setup,2024-03-01,9,9,9,9,9,9,9,4,8,8,8,8,8,8",
        "api reference,https://d/api,2024-01-15,10,10,10,10,10,10,10,10,10,10,10,10,10,10",
        "Legacy FAQ,https://d/faq,2024-02-10,2,2,2,2,2,2,2,2,2,2,2,2,2,2",
        "Release Notes,https://d/notes,2024-02-10,4,4,4,4,4,4,4,4,7,7,7,7,7,7",
    ]
    .join("\n")
}

fn loaded() -> Dashboard {
    Dashboard::default().load_scores("scores.csv", &csv())
}

fn titles(rows: &[&ScoredPage]) -> Vec<String> {
    rows.iter().map(|p| p.title().to_string()).collect()
}

#[test]
fn test_defaults() {
    let d = Dashboard::default();
    assert_eq!(d.active_tab(), Tab::Snapshot);
    assert_eq!(d.detailed_sort(), SortConfig::ascending(SortKey::PageTitle));
    assert_eq!(d.action_sort(), SortConfig::ascending(SortKey::OverallWqScore));
    assert!(d.scored_pages().is_empty());
    assert_eq!(d.snapshot(), &SnapshotStats::default());
    assert!(d.error().is_none());
}

#[test]
fn test_load_scores_runs_pipeline() {
    let d = loaded();
    assert_eq!(d.csv_file_name(), "scores.csv");
    assert_eq!(d.scored_pages().len(), 4);

    let setup = &d.scored_pages()[0];
    assert_eq!(setup.overall_wq_score, 8.38);
    assert!(setup.any_wq_sub_low);
    assert_eq!(setup.wq_recommendation, Recommendation::NeedsTargetedRevision);
    assert_eq!(setup.tv_recommendation, Recommendation::ValuableRefineIfNeeded);

    let ids = d.action_needed().iter().map(|p| p.id()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["page-0", "page-2", "page-3"]);
    assert_eq!(d.snapshot().action_needed_count, 3);
    assert_eq!(d.snapshot().total_pages, 4);
}

#[test]
fn test_format_error_clears_previous_data() {
    let d = loaded();
    let bad = d.load_scores("bad.csv", &csv().replacen("PageURL", "URL", 1));
    assert!(bad.scored_pages().is_empty());
    assert!(bad.action_needed().is_empty());
    assert_eq!(bad.snapshot().total_pages, 0);
    assert!(bad.error().unwrap().contains("Expected: PageTitle, PageURL"));

    // The earlier value is untouched.
    assert_eq!(d.scored_pages().len(), 4);
    assert!(d.error().is_none());

    let recovered = bad.load_scores("scores.csv", &csv());
    assert!(recovered.error().is_none());
    assert_eq!(recovered.scored_pages().len(), 4);
}

#[test]
fn test_skipped_rows_are_kept_for_reporting() {
    let text = format!("{}\nShort,u,d,1,2\n", csv());
    let d = Dashboard::default().load_scores("scores.csv", &text);
    assert_eq!(d.scored_pages().len(), 4);
    assert_eq!(d.skipped_rows().len(), 1);
    assert_eq!(d.skipped_rows()[0].found, 5);
}

#[test]
fn test_detailed_rows_sorted_by_title_then_filtered() {
    let d = loaded();
    assert_eq!(
        titles(&d.detailed_rows()),
        vec!["Legacy FAQ", "Release Notes", "Setup Guide", "api reference"]
    );

    let filtered = d.filter_detailed("EN");
    assert_eq!(titles(&filtered.detailed_rows()), vec!["api reference"]);

    let filtered = d.filter_detailed("GUIDE");
    assert_eq!(titles(&filtered.detailed_rows()), vec!["Setup Guide"]);

    // Filter matches titles only, not URLs.
    assert!(d.filter_detailed("https").detailed_rows().is_empty());
}

#[test]
fn test_sort_toggle_rule() {
    let d = loaded();
    let once = d.request_detailed_sort(SortKey::PageTitle);
    assert_eq!(once.detailed_sort(), SortConfig::descending(SortKey::PageTitle));
    let twice = once.request_detailed_sort(SortKey::PageTitle);
    assert_eq!(twice.detailed_sort(), SortConfig::ascending(SortKey::PageTitle));

    let other = once.request_detailed_sort(SortKey::OverallTvScore);
    assert_eq!(other.detailed_sort(), SortConfig::ascending(SortKey::OverallTvScore));

    // Original value is unchanged.
    assert_eq!(d.detailed_sort(), SortConfig::ascending(SortKey::PageTitle));
}

#[test]
fn test_sort_is_stable_for_ties() {
    let d = loaded().with_detailed_sort(SortConfig::ascending(SortKey::AssessmentDate));
    assert_eq!(
        titles(&d.detailed_rows()),
        vec!["api reference", "Legacy FAQ", "Release Notes", "Setup Guide"]
    );
    let d = d.with_detailed_sort(SortConfig::descending(SortKey::AssessmentDate));
    assert_eq!(
        titles(&d.detailed_rows()),
        vec!["Setup Guide", "Legacy FAQ", "Release Notes", "api reference"]
    );
}

#[test]
fn test_action_rows_default_sort_by_wq_score() {
    let d = loaded();
    assert_eq!(
        titles(&d.action_rows()),
        vec!["Legacy FAQ", "Release Notes", "Setup Guide"]
    );
    let d = d.request_action_sort(SortKey::OverallWqScore);
    assert_eq!(
        titles(&d.action_rows()),
        vec!["Setup Guide", "Release Notes", "Legacy FAQ"]
    );
}

#[test]
fn test_sort_by_sub_score_key() {
    let key: SortKey = "TV1".parse().unwrap();
    assert_eq!(key, SortKey::Tv(0));
    let d = loaded().with_detailed_sort(SortConfig::descending(key));
    assert_eq!(titles(&d.detailed_rows())[0], "api reference");
    assert_eq!(key.to_string(), "TV1");
    assert_eq!(SortKey::Wq(7).to_string(), "WQ8");
    assert_eq!(SortKey::PageUrl.to_string(), "PageURL");
}

#[test]
fn test_unknown_sort_key() {
    let err = "Score".parse::<SortKey>().unwrap_err();
    assert_eq!(err.to_string(), "unknown sort key: Score");
    assert_eq!("WQ8".parse::<SortKey>().unwrap(), SortKey::Wq(7));
    assert_eq!(
        "OverallWQScore".parse::<SortKey>().unwrap(),
        SortKey::OverallWqScore
    );
}

#[test]
fn test_criteria_and_tab_actions() {
    let d = Dashboard::default();
    let with_doc = d.load_criteria(
        CriteriaFamily::TopicValue,
        CriteriaDoc::new("tv.txt", "TV1 alignment"),
    );
    assert!(with_doc.criteria(CriteriaFamily::TopicValue).is_loaded());
    assert!(!with_doc.criteria(CriteriaFamily::WritingQuality).is_loaded());
    assert!(!d.criteria(CriteriaFamily::TopicValue).is_loaded());

    let tabbed = with_doc.select_tab(Tab::CriteriaDocs);
    assert_eq!(tabbed.active_tab(), Tab::CriteriaDocs);
    assert_eq!(with_doc.active_tab(), Tab::Snapshot);
    assert_eq!(Tab::all().len(), 4);
}
