use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::model::criteria::{TV_KEYS, WQ_KEYS};
use crate::model::page::{ScoreBand, ScoredPage};
use crate::model::thresholds::ThresholdProfile;
use crate::report::json::{build_summary, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{format_score, sanitize_cell};
use crate::view::Dashboard;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub dashboard: &'a Dashboard,
    pub tool_name: String,
    pub tool_version: String,
    pub expand: bool,
}

const FIXED_COLUMNS: &[&str] = &[
    "id",
    "page_title",
    "page_url",
    "assessment_date",
    "overall_wq_score",
    "wq_band",
    "any_wq_sub_low",
    "wq_recommendation",
    "overall_tv_score",
    "tv_band",
    "any_tv_sub_low",
    "tv_recommendation",
];

pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;
    let dashboard = input.dashboard;
    let thresholds = dashboard.thresholds();

    let pages_path = out_dir.join("pages.tsv");
    write_pages_tsv(&dashboard.detailed_rows(), thresholds, &pages_path)?;

    let action_path = out_dir.join("action_needed.tsv");
    write_pages_tsv(&dashboard.action_rows(), thresholds, &action_path)?;

    let summary_path = out_dir.join("summary.json");
    let summary = build_summary(dashboard, &input.tool_name, &input.tool_version);
    let json = render_summary_json(&summary)?;
    write_text(&summary_path, &json)?;

    let report_path = out_dir.join("report.txt");
    let report = render_report_text(dashboard, input.expand);
    write_text(&report_path, &report)?;

    info!(
        "reports written to {} ({} pages, {} need action)",
        out_dir.display(),
        dashboard.scored_pages().len(),
        dashboard.action_needed().len()
    );
    Ok(())
}

pub fn tsv_header() -> Vec<&'static str> {
    FIXED_COLUMNS
        .iter()
        .chain(WQ_KEYS.iter())
        .chain(TV_KEYS.iter())
        .copied()
        .collect()
}

fn write_pages_tsv(
    rows: &[&ScoredPage],
    thresholds: &ThresholdProfile,
    path: &Path,
) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", tsv_header().join("\t"))?;

    for page in rows {
        let record = &page.record;
        let mut cells = vec![
            sanitize_cell(&record.id),
            sanitize_cell(&record.page_title),
            sanitize_cell(&record.page_url),
            sanitize_cell(&record.assessment_date),
            format_score(page.overall_wq_score),
            ScoreBand::of(page.overall_wq_score, thresholds).name().to_string(),
            page.any_wq_sub_low.to_string(),
            page.wq_recommendation.label().to_string(),
            format_score(page.overall_tv_score),
            ScoreBand::of(page.overall_tv_score, thresholds).name().to_string(),
            page.any_tv_sub_low.to_string(),
            page.tv_recommendation.label().to_string(),
        ];
        cells.extend(record.wq.iter().map(|&v| format_score(v)));
        cells.extend(record.tv.iter().map(|&v| format_score(v)));
        writeln!(w, "{}", cells.join("\t"))?;
    }

    w.flush()?;
    debug!("{}: {} rows", path.display(), rows.len());
    Ok(())
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
