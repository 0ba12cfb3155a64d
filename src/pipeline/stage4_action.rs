use crate::model::page::ScoredPage;

pub fn needs_action(page: &ScoredPage) -> bool {
    page.wq_recommendation.is_critical() || page.tv_recommendation.is_critical()
}

/// Pages with a critical recommendation in either family, input order kept.
pub fn run_stage4(pages: &[ScoredPage]) -> Vec<ScoredPage> {
    pages.iter().filter(|p| needs_action(p)).cloned().collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_action.rs"]
mod tests;
