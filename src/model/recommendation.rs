use std::fmt;

use serde::{Serialize, Serializer};

/// Every label either classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    PublishAsIs,
    SpotFixOptional,
    NeedsTargetedRevision,
    NeedsFullRewriteOrReview,
    DoNotPublishAsIs,
    NeedsTargetedRevisionHighScore,
    HighPriorityTopic,
    ValuableRefineIfNeeded,
    NeedsUpdateOrMerge,
    DeprioritizeOrRemove,
    ValuableRefineIfNeededHighScore,
    ReviewNeededLowScore,
    ReviewCriteria,
}

impl Recommendation {
    pub fn label(self) -> &'static str {
        match self {
            Recommendation::PublishAsIs => "Publish as-is",
            Recommendation::SpotFixOptional => "Spot fix optional",
            Recommendation::NeedsTargetedRevision => "Needs targeted revision",
            Recommendation::NeedsFullRewriteOrReview => "Needs full rewrite or review",
            Recommendation::DoNotPublishAsIs => "Do not publish as-is",
            Recommendation::NeedsTargetedRevisionHighScore => {
                "Needs targeted revision (High score w/ low sub-item)"
            }
            Recommendation::HighPriorityTopic => "High-priority topic",
            Recommendation::ValuableRefineIfNeeded => "Valuable, refine if needed",
            Recommendation::NeedsUpdateOrMerge => "Needs update or merge",
            Recommendation::DeprioritizeOrRemove => "Deprioritize or remove",
            Recommendation::ValuableRefineIfNeededHighScore => {
                "Valuable, refine if needed (High score w/ low sub-item)"
            }
            Recommendation::ReviewNeededLowScore => "Review needed (Low score w/o low sub-item)",
            Recommendation::ReviewCriteria => "Review criteria",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Recommendation::PublishAsIs | Recommendation::HighPriorityTopic => "✅",
            Recommendation::SpotFixOptional
            | Recommendation::ValuableRefineIfNeeded
            | Recommendation::ValuableRefineIfNeededHighScore => "🔍",
            Recommendation::NeedsTargetedRevision
            | Recommendation::NeedsTargetedRevisionHighScore => "🛠️",
            Recommendation::NeedsFullRewriteOrReview
            | Recommendation::NeedsUpdateOrMerge
            | Recommendation::ReviewNeededLowScore => "⚠️",
            Recommendation::DoNotPublishAsIs | Recommendation::DeprioritizeOrRemove => "❌",
            Recommendation::ReviewCriteria => "ℹ️",
        }
    }

    pub fn is_critical(self) -> bool {
        critical_recommendations().contains(&self)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Labels that put a page on the action-needed list.
pub fn critical_recommendations() -> &'static [Recommendation] {
    &[
        Recommendation::NeedsUpdateOrMerge,
        Recommendation::NeedsTargetedRevision,
        Recommendation::NeedsFullRewriteOrReview,
        Recommendation::DeprioritizeOrRemove,
        Recommendation::DoNotPublishAsIs,
        Recommendation::NeedsTargetedRevisionHighScore,
        Recommendation::ReviewNeededLowScore,
    ]
}

pub fn writing_quality_labels() -> &'static [Recommendation] {
    &[
        Recommendation::PublishAsIs,
        Recommendation::SpotFixOptional,
        Recommendation::NeedsTargetedRevision,
        Recommendation::NeedsFullRewriteOrReview,
        Recommendation::DoNotPublishAsIs,
        Recommendation::NeedsTargetedRevisionHighScore,
        Recommendation::ReviewNeededLowScore,
        Recommendation::ReviewCriteria,
    ]
}

pub fn topic_value_labels() -> &'static [Recommendation] {
    &[
        Recommendation::HighPriorityTopic,
        Recommendation::ValuableRefineIfNeeded,
        Recommendation::NeedsUpdateOrMerge,
        Recommendation::DeprioritizeOrRemove,
        Recommendation::ValuableRefineIfNeededHighScore,
        Recommendation::ReviewNeededLowScore,
        Recommendation::ReviewCriteria,
    ]
}
