use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod criteria;
pub mod scores;

pub use criteria::{CriteriaDoc, load_criteria};
pub use scores::{ParsedScores, SkippedRow, load_scores_csv, parse_scores_csv};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Fatal problems with the shape of a score export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("CSV file must have a header row and at least one data row.")]
    TooFewLines,
    #[error(
        "CSV header does not match expected format. Expected: {}. Found: {}",
        .expected.join(", "),
        .found.join(", ")
    )]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// Reads a whole text file, gunzipping `*.gz` paths.
///
/// Invalid UTF-8 sequences become U+FFFD and a leading byte-order mark is
/// dropped, so spreadsheet exports load as they display.
pub fn read_text(path: &Path) -> Result<String, InputError> {
    let file = File::open(path)?;
    let mut bytes = Vec::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        MultiGzDecoder::new(BufReader::new(file)).read_to_end(&mut bytes)?;
    } else {
        BufReader::new(file).read_to_end(&mut bytes)?;
    }
    let text = String::from_utf8_lossy(&bytes);
    Ok(strip_bom(&text).to_string())
}

pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
