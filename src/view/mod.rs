//! Immutable dashboard state.
//!
//! Every user action returns a fresh [`Dashboard`]; the previous value is
//! never touched. Scored data is shared behind `Arc` so replacing the sort,
//! filter or tab does not copy pages.

pub mod sort;

use std::sync::Arc;

use tracing::{info, warn};

use crate::input::{CriteriaDoc, SkippedRow, parse_scores_csv};
use crate::model::criteria::CriteriaFamily;
use crate::model::page::ScoredPage;
use crate::model::snapshot::SnapshotStats;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::{PipelineOutput, run_pipeline};
pub use sort::{SortConfig, SortDirection, SortKey, UnknownSortKey};
use sort::{sort_pages, title_matches};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Snapshot,
    ActionNeeded,
    DetailedView,
    CriteriaDocs,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Snapshot,
            Tab::ActionNeeded,
            Tab::DetailedView,
            Tab::CriteriaDocs,
        ]
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Snapshot => "Snapshot",
            Tab::ActionNeeded => "Action Needed",
            Tab::DetailedView => "Detailed View",
            Tab::CriteriaDocs => "Criteria Docs",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    thresholds: Arc<ThresholdProfile>,
    csv_file_name: String,
    error: Option<String>,
    data: Arc<PipelineOutput>,
    wq_criteria: Arc<CriteriaDoc>,
    tv_criteria: Arc<CriteriaDoc>,
    active_tab: Tab,
    detailed_sort: SortConfig,
    detailed_filter: String,
    action_sort: SortConfig,
}

impl Dashboard {
    pub fn new(thresholds: ThresholdProfile) -> Self {
        Self {
            thresholds: Arc::new(thresholds),
            csv_file_name: String::new(),
            error: None,
            data: Arc::new(PipelineOutput::default()),
            wq_criteria: Arc::new(CriteriaDoc::default()),
            tv_criteria: Arc::new(CriteriaDoc::default()),
            active_tab: Tab::Snapshot,
            detailed_sort: SortConfig::ascending(SortKey::PageTitle),
            detailed_filter: String::new(),
            action_sort: SortConfig::ascending(SortKey::OverallWqScore),
        }
    }

    /// Replaces the page collection with the contents of a score export.
    ///
    /// A format error clears the collection and is kept as the dashboard's
    /// error message; skipped rows are not errors.
    pub fn load_scores(&self, file_name: &str, text: &str) -> Self {
        let mut next = self.clone();
        next.csv_file_name = file_name.to_string();
        match parse_scores_csv(text) {
            Ok(parsed) => {
                let output = run_pipeline(parsed, &self.thresholds);
                info!(
                    "{}: {} pages scored, {} need action",
                    file_name,
                    output.pages.len(),
                    output.action_needed.len()
                );
                next.data = Arc::new(output);
                next.error = None;
            }
            Err(err) => {
                warn!("{}: {}", file_name, err);
                next.data = Arc::new(PipelineOutput::default());
                next.error = Some(err.to_string());
            }
        }
        next
    }

    pub fn load_criteria(&self, family: CriteriaFamily, doc: CriteriaDoc) -> Self {
        let mut next = self.clone();
        match family {
            CriteriaFamily::WritingQuality => next.wq_criteria = Arc::new(doc),
            CriteriaFamily::TopicValue => next.tv_criteria = Arc::new(doc),
        }
        next
    }

    pub fn select_tab(&self, tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..self.clone()
        }
    }

    pub fn request_detailed_sort(&self, key: SortKey) -> Self {
        self.with_detailed_sort(self.detailed_sort.toggled(key))
    }

    pub fn request_action_sort(&self, key: SortKey) -> Self {
        self.with_action_sort(self.action_sort.toggled(key))
    }

    pub fn with_detailed_sort(&self, config: SortConfig) -> Self {
        Self {
            detailed_sort: config,
            ..self.clone()
        }
    }

    pub fn with_action_sort(&self, config: SortConfig) -> Self {
        Self {
            action_sort: config,
            ..self.clone()
        }
    }

    pub fn filter_detailed(&self, text: &str) -> Self {
        Self {
            detailed_filter: text.to_string(),
            ..self.clone()
        }
    }

    pub fn thresholds(&self) -> &ThresholdProfile {
        &self.thresholds
    }

    pub fn csv_file_name(&self) -> &str {
        &self.csv_file_name
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn detailed_sort(&self) -> SortConfig {
        self.detailed_sort
    }

    pub fn action_sort(&self) -> SortConfig {
        self.action_sort
    }

    pub fn detailed_filter(&self) -> &str {
        &self.detailed_filter
    }

    pub fn criteria(&self, family: CriteriaFamily) -> &CriteriaDoc {
        match family {
            CriteriaFamily::WritingQuality => &self.wq_criteria,
            CriteriaFamily::TopicValue => &self.tv_criteria,
        }
    }

    pub fn scored_pages(&self) -> &[ScoredPage] {
        &self.data.pages
    }

    pub fn action_needed(&self) -> &[ScoredPage] {
        &self.data.action_needed
    }

    pub fn snapshot(&self) -> &SnapshotStats {
        &self.data.snapshot
    }

    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.data.skipped
    }

    /// All pages, sorted then narrowed by the title filter.
    pub fn detailed_rows(&self) -> Vec<&ScoredPage> {
        let mut rows = self.data.pages.iter().collect::<Vec<_>>();
        sort_pages(&mut rows, self.detailed_sort);
        let needle = self.detailed_filter.to_lowercase();
        rows.retain(|p| title_matches(p, &needle));
        rows
    }

    pub fn action_rows(&self) -> Vec<&ScoredPage> {
        let mut rows = self.data.action_needed.iter().collect::<Vec<_>>();
        sort_pages(&mut rows, self.action_sort);
        rows
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(ThresholdProfile::default_v1())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/view/tests.rs"]
mod tests;
