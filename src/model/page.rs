use serde::Serialize;

use crate::model::criteria::{TV_COUNT, WQ_COUNT};
use crate::model::recommendation::Recommendation;
use crate::model::thresholds::ThresholdProfile;

/// One accepted data row of a score export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    pub id: String,
    pub page_title: String,
    pub page_url: String,
    pub assessment_date: String,
    pub wq: [f64; WQ_COUNT],
    pub tv: [f64; TV_COUNT],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPage {
    #[serde(flatten)]
    pub record: PageRecord,
    pub overall_wq_score: f64,
    pub overall_tv_score: f64,
    pub any_wq_sub_low: bool,
    pub any_tv_sub_low: bool,
    pub wq_recommendation: Recommendation,
    pub tv_recommendation: Recommendation,
}

impl ScoredPage {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn title(&self) -> &str {
        &self.record.page_title
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
    Unscored,
}

impl ScoreBand {
    pub fn of(score: f64, thresholds: &ThresholdProfile) -> Self {
        if score >= thresholds.band_high {
            ScoreBand::High
        } else if score >= thresholds.band_medium {
            ScoreBand::Medium
        } else if score >= 0.0 {
            ScoreBand::Low
        } else {
            ScoreBand::Unscored
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
            ScoreBand::Unscored => "unscored",
        }
    }
}
