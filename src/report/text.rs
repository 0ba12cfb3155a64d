use crate::model::criteria::CriteriaFamily;
use crate::model::page::{ScoreBand, ScoredPage};
use crate::model::recommendation::Recommendation;
use crate::model::thresholds::ThresholdProfile;
use crate::report::{format_fixed, format_score};
use crate::view::{Dashboard, SortConfig, SortDirection, SortKey, Tab};

const TABLE_COLUMNS: &[(SortKey, &str)] = &[
    (SortKey::PageTitle, "Page Title"),
    (SortKey::OverallWqScore, "WQ Score"),
    (SortKey::OverallTvScore, "TV Score"),
    (SortKey::WqRecommendation, "WQ Rec."),
    (SortKey::TvRecommendation, "TV Rec."),
    (SortKey::AssessmentDate, "Date"),
];

const EMPTY_TABLE: &str = "No data to display. Upload a CSV file.";

pub fn render_report_text(dashboard: &Dashboard, expand: bool) -> String {
    let mut out = String::new();

    out.push_str("Content Quality Dashboard\n");
    out.push_str("=========================\n\n");
    if !dashboard.csv_file_name().is_empty() {
        out.push_str(&format!("Score data: {}\n", dashboard.csv_file_name()));
    }
    if let Some(err) = dashboard.error() {
        out.push_str(&format!("Error: {}\n", err));
    }
    let skipped = dashboard.skipped_rows().len();
    if skipped > 0 {
        out.push_str(&format!(
            "Skipped rows: {} (incorrect number of columns)\n",
            skipped
        ));
    }
    out.push('\n');

    for (i, &tab) in Tab::all().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, tab_heading(dashboard, tab)));
        out.push_str(&render_tab(dashboard, tab, expand));
        out.push('\n');
    }

    out
}

pub fn tab_heading(dashboard: &Dashboard, tab: Tab) -> String {
    let pending = dashboard.action_needed().len();
    if tab == Tab::ActionNeeded && pending > 0 {
        format!("{} ({})", tab.title(), pending)
    } else {
        tab.title().to_string()
    }
}

pub fn render_tab(dashboard: &Dashboard, tab: Tab, expand: bool) -> String {
    let thresholds = dashboard.thresholds();
    match tab {
        Tab::Snapshot => render_snapshot(dashboard),
        Tab::ActionNeeded => render_table(
            &dashboard.action_rows(),
            dashboard.action_sort(),
            false,
            expand,
            thresholds,
        ),
        Tab::DetailedView => {
            let mut out = String::new();
            if !dashboard.detailed_filter().is_empty() {
                out.push_str(&format!("Filter: \"{}\"\n", dashboard.detailed_filter()));
            }
            out.push_str(&render_table(
                &dashboard.detailed_rows(),
                dashboard.detailed_sort(),
                true,
                expand,
                thresholds,
            ));
            out
        }
        Tab::CriteriaDocs => render_criteria(dashboard),
    }
}

fn render_snapshot(dashboard: &Dashboard) -> String {
    let stats = dashboard.snapshot();
    if stats.total_pages == 0 {
        return "No data loaded. Upload a CSV file to see the snapshot.\n".to_string();
    }
    let thresholds = dashboard.thresholds();

    let mut out = String::new();
    out.push_str(&format!(
        "Average WQ score: {}\n",
        format_fixed(stats.avg_wq, 2)
    ));
    out.push_str(&format!(
        "Average TV score: {}\n",
        format_fixed(stats.avg_tv, 2)
    ));
    out.push_str(&format!(
        "Pages below WQ threshold (< {}): {}%\n",
        format_score(thresholds.wq_attention),
        format_fixed(stats.pct_below_wq_threshold, 1)
    ));
    out.push_str(&format!(
        "Pages below TV threshold (< {}): {}%\n",
        format_score(thresholds.tv_attention),
        format_fixed(stats.pct_below_tv_threshold, 1)
    ));
    out.push_str(&format!(
        "Action needed: {}% ({} of {} pages)\n",
        format_fixed(stats.pct_action_needed, 1),
        stats.action_needed_count,
        stats.total_pages
    ));
    out
}

fn render_table(
    rows: &[&ScoredPage],
    sort: SortConfig,
    with_date: bool,
    expand: bool,
    thresholds: &ThresholdProfile,
) -> String {
    let columns = if with_date {
        TABLE_COLUMNS
    } else {
        &TABLE_COLUMNS[..TABLE_COLUMNS.len() - 1]
    };

    let header = columns
        .iter()
        .map(|&(key, name)| match (sort.key == key, sort.direction) {
            (true, SortDirection::Ascending) => format!("{} ▲", name),
            (true, SortDirection::Descending) => format!("{} ▼", name),
            (false, _) => name.to_string(),
        })
        .collect::<Vec<_>>();

    let body = rows
        .iter()
        .map(|page| {
            let mut cells = vec![
                page.title().to_string(),
                format_score(page.overall_wq_score),
                format_score(page.overall_tv_score),
                recommendation_cell(page.wq_recommendation, page.any_wq_sub_low),
                recommendation_cell(page.tv_recommendation, page.any_tv_sub_low),
            ];
            if with_date {
                cells.push(page.record.assessment_date.clone());
            }
            cells
        })
        .collect::<Vec<_>>();

    let mut widths = header.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule = widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(EMPTY_TABLE);
        out.push('\n');
        return out;
    }

    for (page, cells) in rows.iter().zip(&body) {
        push_row(&mut out, cells, &widths);
        if expand {
            out.push_str(&render_sub_criteria(page, thresholds));
        }
    }

    if rows.iter().any(|p| p.any_wq_sub_low || p.any_tv_sub_low) {
        out.push_str(&format!(
            "* one or more sub-criteria <= {}\n",
            format_score(thresholds.low_sub_score)
        ));
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
        .collect::<Vec<_>>();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

fn recommendation_cell(rec: Recommendation, any_low: bool) -> String {
    if any_low {
        format!("{} *", rec)
    } else {
        rec.to_string()
    }
}

fn render_sub_criteria(page: &ScoredPage, thresholds: &ThresholdProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("    Sub-Criteria Scores for: {}\n", page.title()));
    for family in [CriteriaFamily::WritingQuality, CriteriaFamily::TopicValue] {
        let scores: &[f64] = match family {
            CriteriaFamily::WritingQuality => &page.record.wq,
            CriteriaFamily::TopicValue => &page.record.tv,
        };
        out.push_str(&format!("      {}\n", family.title()));
        for (def, &score) in family.criteria().iter().zip(scores) {
            out.push_str(&format!(
                "        {} {}: {} ({})\n",
                def.key,
                def.name,
                format_score(score),
                ScoreBand::of(score, thresholds).name()
            ));
        }
    }
    out
}

fn render_criteria(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    for family in [CriteriaFamily::WritingQuality, CriteriaFamily::TopicValue] {
        let title = format!("{} Criteria", family.title());
        let doc = dashboard.criteria(family);
        out.push_str(&format!("--- {} ---\n", title));
        if doc.is_loaded() {
            out.push_str(&format!("Loaded: {}\n", doc.file_name));
            out.push_str(&doc.text);
            if !doc.text.ends_with('\n') {
                out.push('\n');
            }
        } else {
            out.push_str(&format!("No {} loaded.\n", title));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
