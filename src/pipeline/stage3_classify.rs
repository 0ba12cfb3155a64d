use crate::model::recommendation::Recommendation;
use crate::pipeline::stage2_aggregate::Aggregate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub wq: Recommendation,
    pub tv: Recommendation,
}

#[derive(Debug, Clone, Copy)]
enum ScoreRange {
    /// 9 and above.
    Top,
    /// 6 to 8.
    Upper,
    /// 3 to 5.
    Lower,
    /// 1 to 2.
    Bottom,
}

impl ScoreRange {
    fn contains(self, score: i64) -> bool {
        match self {
            ScoreRange::Top => score >= 9,
            ScoreRange::Upper => (6..=8).contains(&score),
            ScoreRange::Lower => (3..=5).contains(&score),
            ScoreRange::Bottom => (1..=2).contains(&score),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum LowItem {
    Present,
    Absent,
    Either,
}

impl LowItem {
    fn matches(self, any_low: bool) -> bool {
        match self {
            LowItem::Present => any_low,
            LowItem::Absent => !any_low,
            LowItem::Either => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    ranges: &'static [ScoreRange],
    low: LowItem,
    label: Recommendation,
}

impl Rule {
    fn applies(&self, score: i64, any_low: bool) -> bool {
        self.low.matches(any_low) && self.ranges.iter().any(|r| r.contains(score))
    }
}

// Evaluated top to bottom; the first applicable rule wins.
const WRITING_QUALITY_RULES: &[Rule] = &[
    Rule {
        ranges: &[ScoreRange::Top],
        low: LowItem::Absent,
        label: Recommendation::PublishAsIs,
    },
    Rule {
        ranges: &[ScoreRange::Upper],
        low: LowItem::Absent,
        label: Recommendation::SpotFixOptional,
    },
    Rule {
        ranges: &[ScoreRange::Upper],
        low: LowItem::Present,
        label: Recommendation::NeedsTargetedRevision,
    },
    Rule {
        ranges: &[ScoreRange::Lower],
        low: LowItem::Present,
        label: Recommendation::NeedsFullRewriteOrReview,
    },
    Rule {
        ranges: &[ScoreRange::Bottom],
        low: LowItem::Present,
        label: Recommendation::DoNotPublishAsIs,
    },
    Rule {
        ranges: &[ScoreRange::Top],
        low: LowItem::Present,
        label: Recommendation::NeedsTargetedRevisionHighScore,
    },
    Rule {
        ranges: &[ScoreRange::Lower, ScoreRange::Bottom],
        low: LowItem::Absent,
        label: Recommendation::ReviewNeededLowScore,
    },
];

const TOPIC_VALUE_RULES: &[Rule] = &[
    Rule {
        ranges: &[ScoreRange::Top],
        low: LowItem::Absent,
        label: Recommendation::HighPriorityTopic,
    },
    Rule {
        ranges: &[ScoreRange::Upper],
        low: LowItem::Either,
        label: Recommendation::ValuableRefineIfNeeded,
    },
    Rule {
        ranges: &[ScoreRange::Lower],
        low: LowItem::Present,
        label: Recommendation::NeedsUpdateOrMerge,
    },
    Rule {
        ranges: &[ScoreRange::Bottom],
        low: LowItem::Present,
        label: Recommendation::DeprioritizeOrRemove,
    },
    Rule {
        ranges: &[ScoreRange::Top],
        low: LowItem::Present,
        label: Recommendation::ValuableRefineIfNeededHighScore,
    },
    Rule {
        ranges: &[ScoreRange::Lower, ScoreRange::Bottom],
        low: LowItem::Absent,
        label: Recommendation::ReviewNeededLowScore,
    },
];

pub fn run_stage3(aggregates: &[Aggregate]) -> Vec<Classification> {
    aggregates.iter().map(classify).collect()
}

pub fn classify(aggregate: &Aggregate) -> Classification {
    Classification {
        wq: classify_writing_quality(round_score(aggregate.overall_wq_raw), aggregate.any_wq_low),
        tv: classify_topic_value(round_score(aggregate.overall_tv_raw), aggregate.any_tv_low),
    }
}

/// Nearest integer, halves away from zero.
pub fn round_score(overall: f64) -> i64 {
    overall.round() as i64
}

pub fn classify_writing_quality(score: i64, any_low: bool) -> Recommendation {
    first_match(WRITING_QUALITY_RULES, score, any_low)
}

pub fn classify_topic_value(score: i64, any_low: bool) -> Recommendation {
    first_match(TOPIC_VALUE_RULES, score, any_low)
}

fn first_match(rules: &[Rule], score: i64, any_low: bool) -> Recommendation {
    rules
        .iter()
        .find(|rule| rule.applies(score, any_low))
        .map(|rule| rule.label)
        .unwrap_or(Recommendation::ReviewCriteria)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
