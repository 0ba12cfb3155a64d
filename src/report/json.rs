use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::criteria::CriteriaFamily;
use crate::model::page::ScoredPage;
use crate::model::recommendation::{Recommendation, topic_value_labels, writing_quality_labels};
use crate::model::snapshot::SnapshotStats;
use crate::model::thresholds::ThresholdProfile;
use crate::report::label_counts;
use crate::view::Dashboard;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub thresholds: ThresholdProfile,
    pub snapshot: SnapshotStats,
    pub recommendations: RecommendationCounts,
    pub criteria: CriteriaInfo,
    /// Action-needed pages in the action view's sort order.
    pub action_needed: Vec<ScoredPage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    pub file: String,
    pub pages: usize,
    pub skipped_rows: usize,
    pub error: Option<String>,
}

/// Label counts keyed by label text; every label of the family is present.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationCounts {
    pub writing_quality: BTreeMap<String, usize>,
    pub topic_value: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriteriaInfo {
    pub writing_quality: CriteriaState,
    pub topic_value: CriteriaState,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriteriaState {
    pub loaded: bool,
    pub file: Option<String>,
}

pub fn build_summary(dashboard: &Dashboard, tool_name: &str, tool_version: &str) -> SummaryData {
    let pages = dashboard.scored_pages();

    SummaryData {
        tool: ToolInfo {
            name: tool_name.to_string(),
            version: tool_version.to_string(),
        },
        input: InputInfo {
            file: dashboard.csv_file_name().to_string(),
            pages: pages.len(),
            skipped_rows: dashboard.skipped_rows().len(),
            error: dashboard.error().map(str::to_string),
        },
        thresholds: dashboard.thresholds().clone(),
        snapshot: dashboard.snapshot().clone(),
        recommendations: RecommendationCounts {
            writing_quality: to_map(label_counts(pages, writing_quality_labels(), |p| {
                p.wq_recommendation
            })),
            topic_value: to_map(label_counts(pages, topic_value_labels(), |p| {
                p.tv_recommendation
            })),
        },
        criteria: CriteriaInfo {
            writing_quality: criteria_state(dashboard, CriteriaFamily::WritingQuality),
            topic_value: criteria_state(dashboard, CriteriaFamily::TopicValue),
        },
        action_needed: dashboard.action_rows().into_iter().cloned().collect(),
    }
}

fn to_map(counts: Vec<(Recommendation, usize)>) -> BTreeMap<String, usize> {
    counts
        .into_iter()
        .map(|(rec, n)| (rec.label().to_string(), n))
        .collect()
}

fn criteria_state(dashboard: &Dashboard, family: CriteriaFamily) -> CriteriaState {
    let doc = dashboard.criteria(family);
    CriteriaState {
        loaded: doc.is_loaded(),
        file: doc.is_loaded().then(|| doc.file_name.clone()),
    }
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}
