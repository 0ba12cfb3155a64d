use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::criteria::{TV_COUNT, TV_KEYS, WQ_COUNT, WQ_KEYS};
use crate::model::page::ScoredPage;

/// Any sortable field of a scored page, named as in the score export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    PageTitle,
    PageUrl,
    AssessmentDate,
    OverallWqScore,
    OverallTvScore,
    AnyWqSubLow,
    AnyTvSubLow,
    WqRecommendation,
    TvRecommendation,
    Wq(usize),
    Tv(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Header-click behaviour: clicking the ascending column flips it,
    /// anything else sorts ascending on the clicked column.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key && self.direction == SortDirection::Ascending {
            Self::descending(key)
        } else {
            Self::ascending(key)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Id => f.write_str("id"),
            SortKey::PageTitle => f.write_str("PageTitle"),
            SortKey::PageUrl => f.write_str("PageURL"),
            SortKey::AssessmentDate => f.write_str("AssessmentDate"),
            SortKey::OverallWqScore => f.write_str("OverallWQScore"),
            SortKey::OverallTvScore => f.write_str("OverallTVScore"),
            SortKey::AnyWqSubLow => f.write_str("AnyWQSubLow"),
            SortKey::AnyTvSubLow => f.write_str("AnyTVSubLow"),
            SortKey::WqRecommendation => f.write_str("WQRecommendation"),
            SortKey::TvRecommendation => f.write_str("TVRecommendation"),
            SortKey::Wq(i) => write!(f, "WQ{}", i + 1),
            SortKey::Tv(i) => write!(f, "TV{}", i + 1),
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "id" => SortKey::Id,
            "PageTitle" => SortKey::PageTitle,
            "PageURL" => SortKey::PageUrl,
            "AssessmentDate" => SortKey::AssessmentDate,
            "OverallWQScore" => SortKey::OverallWqScore,
            "OverallTVScore" => SortKey::OverallTvScore,
            "AnyWQSubLow" => SortKey::AnyWqSubLow,
            "AnyTVSubLow" => SortKey::AnyTvSubLow,
            "WQRecommendation" => SortKey::WqRecommendation,
            "TVRecommendation" => SortKey::TvRecommendation,
            other => {
                if let Some(i) = WQ_KEYS.iter().position(|k| *k == other) {
                    SortKey::Wq(i)
                } else if let Some(i) = TV_KEYS.iter().position(|k| *k == other) {
                    SortKey::Tv(i)
                } else {
                    return Err(UnknownSortKey(other.to_string()));
                }
            }
        };
        Ok(key)
    }
}

pub fn compare_by(a: &ScoredPage, b: &ScoredPage, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.record.id.cmp(&b.record.id),
        SortKey::PageTitle => a.record.page_title.cmp(&b.record.page_title),
        SortKey::PageUrl => a.record.page_url.cmp(&b.record.page_url),
        SortKey::AssessmentDate => a.record.assessment_date.cmp(&b.record.assessment_date),
        SortKey::OverallWqScore => cmp_f64(a.overall_wq_score, b.overall_wq_score),
        SortKey::OverallTvScore => cmp_f64(a.overall_tv_score, b.overall_tv_score),
        SortKey::AnyWqSubLow => a.any_wq_sub_low.cmp(&b.any_wq_sub_low),
        SortKey::AnyTvSubLow => a.any_tv_sub_low.cmp(&b.any_tv_sub_low),
        SortKey::WqRecommendation => a
            .wq_recommendation
            .label()
            .cmp(b.wq_recommendation.label()),
        SortKey::TvRecommendation => a
            .tv_recommendation
            .label()
            .cmp(b.tv_recommendation.label()),
        SortKey::Wq(i) if i < WQ_COUNT => cmp_f64(a.record.wq[i], b.record.wq[i]),
        SortKey::Tv(i) if i < TV_COUNT => cmp_f64(a.record.tv[i], b.record.tv[i]),
        SortKey::Wq(_) | SortKey::Tv(_) => Ordering::Equal,
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Stable sort; ties keep their current relative order in both directions.
pub fn sort_pages(pages: &mut [&ScoredPage], config: SortConfig) {
    pages.sort_by(|a, b| {
        let ord = compare_by(a, b, config.key);
        match config.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Case-insensitive substring match on the page title; empty keeps all.
pub fn title_matches(page: &ScoredPage, needle_lower: &str) -> bool {
    needle_lower.is_empty() || page.title().to_lowercase().contains(needle_lower)
}
