use std::path::Path;

use tracing::{debug, info, warn};

use crate::input::{FormatError, InputError, read_text, strip_bom};
use crate::model::criteria::{
    COL_ASSESSMENT_DATE, COL_FIRST_TV, COL_FIRST_WQ, COL_PAGE_TITLE, COL_PAGE_URL,
    EXPECTED_COLUMNS,
};
use crate::model::page::PageRecord;

/// A data line dropped because its field count did not match the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based index among the non-blank data lines.
    pub row_index: usize,
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedScores {
    pub pages: Vec<PageRecord>,
    pub skipped: Vec<SkippedRow>,
}

pub fn load_scores_csv(path: &Path) -> Result<ParsedScores, InputError> {
    let text = read_text(path)?;
    let parsed = parse_scores_csv(&text)?;
    info!(
        "loaded {} pages from {} ({} rows skipped)",
        parsed.pages.len(),
        path.display(),
        parsed.skipped.len()
    );
    Ok(parsed)
}

pub fn parse_scores_csv(text: &str) -> Result<ParsedScores, FormatError> {
    let lines = strip_bom(text)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>();
    if lines.len() < 2 {
        return Err(FormatError::TooFewLines);
    }

    let header = lines[0].split(',').map(str::trim).collect::<Vec<_>>();
    if header.as_slice() != EXPECTED_COLUMNS.as_slice() {
        return Err(FormatError::HeaderMismatch {
            expected: EXPECTED_COLUMNS.iter().map(|s| s.to_string()).collect(),
            found: header.iter().map(|s| s.to_string()).collect(),
        });
    }

    let mut out = ParsedScores::default();
    for (row_index, line) in lines[1..].iter().enumerate() {
        let fields = line.split(',').collect::<Vec<_>>();
        if fields.len() != header.len() {
            warn!(
                "row {} has incorrect number of columns; expected {}, got {}; skipping row",
                row_index + 1,
                header.len(),
                fields.len()
            );
            out.skipped.push(SkippedRow {
                row_index,
                expected: header.len(),
                found: fields.len(),
            });
            continue;
        }
        out.pages.push(build_record(row_index, &fields));
    }

    debug!(
        "parsed {} data lines into {} pages",
        lines.len() - 1,
        out.pages.len()
    );
    Ok(out)
}

fn build_record(row_index: usize, fields: &[&str]) -> PageRecord {
    PageRecord {
        id: format!("page-{row_index}"),
        page_title: fields[COL_PAGE_TITLE].trim().to_string(),
        page_url: fields[COL_PAGE_URL].trim().to_string(),
        assessment_date: fields[COL_ASSESSMENT_DATE].trim().to_string(),
        wq: std::array::from_fn(|i| parse_score(fields[COL_FIRST_WQ + i])),
        tv: std::array::from_fn(|i| parse_score(fields[COL_FIRST_TV + i])),
    }
}

/// Lenient float coercion: parses the longest leading numeric prefix and
/// falls back to 0 when there is none or the value is not finite.
pub fn parse_score(raw: &str) -> f64 {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - end - 1;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}
