pub const WQ_COUNT: usize = 8;
pub const TV_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaFamily {
    WritingQuality,
    TopicValue,
}

impl CriteriaFamily {
    pub fn title(self) -> &'static str {
        match self {
            CriteriaFamily::WritingQuality => "Writing Quality",
            CriteriaFamily::TopicValue => "Topic Value",
        }
    }

    pub fn criteria(self) -> &'static [CriterionDef] {
        match self {
            CriteriaFamily::WritingQuality => WRITING_QUALITY,
            CriteriaFamily::TopicValue => TOPIC_VALUE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CriterionDef {
    pub key: &'static str,
    pub name: &'static str,
}

pub const WQ_KEYS: [&str; WQ_COUNT] = ["WQ1", "WQ2", "WQ3", "WQ4", "WQ5", "WQ6", "WQ7", "WQ8"];
pub const TV_KEYS: [&str; TV_COUNT] = ["TV1", "TV2", "TV3", "TV4", "TV5", "TV6"];

/// Header of a score export, in the only accepted order.
pub const EXPECTED_COLUMNS: [&str; 3 + WQ_COUNT + TV_COUNT] = [
    "PageTitle",
    "PageURL",
    "AssessmentDate",
    "WQ1",
    "WQ2",
    "WQ3",
    "WQ4",
    "WQ5",
    "WQ6",
    "WQ7",
    "WQ8",
    "TV1",
    "TV2",
    "TV3",
    "TV4",
    "TV5",
    "TV6",
];

pub const COL_PAGE_TITLE: usize = 0;
pub const COL_PAGE_URL: usize = 1;
pub const COL_ASSESSMENT_DATE: usize = 2;
pub const COL_FIRST_WQ: usize = 3;
pub const COL_FIRST_TV: usize = COL_FIRST_WQ + WQ_COUNT;

const WRITING_QUALITY: &[CriterionDef] = &[
    CriterionDef {
        key: "WQ1",
        name: "Clarity & Simplicity",
    },
    CriterionDef {
        key: "WQ2",
        name: "Logical Structure & Flow",
    },
    CriterionDef {
        key: "WQ3",
        name: "Modular Structure",
    },
    CriterionDef {
        key: "WQ4",
        name: "Precision & Accuracy",
    },
    CriterionDef {
        key: "WQ5",
        name: "Tone & Language",
    },
    CriterionDef {
        key: "WQ6",
        name: "Grammar & Mechanics",
    },
    CriterionDef {
        key: "WQ7",
        name: "Self-Containment",
    },
    CriterionDef {
        key: "WQ8",
        name: "Question-Oriented Framing",
    },
];

const TOPIC_VALUE: &[CriterionDef] = &[
    CriterionDef {
        key: "TV1",
        name: "User Task Alignment",
    },
    CriterionDef {
        key: "TV2",
        name: "Completeness",
    },
    CriterionDef {
        key: "TV3",
        name: "Frequency & Use",
    },
    CriterionDef {
        key: "TV4",
        name: "Operational Significance",
    },
    CriterionDef {
        key: "TV5",
        name: "Originality",
    },
    CriterionDef {
        key: "TV6",
        name: "Automation Enablement",
    },
];
