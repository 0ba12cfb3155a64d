use std::path::Path;

use tracing::info;

use crate::input::{InputError, file_name, read_text};

/// A rubric document, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaDoc {
    pub file_name: String,
    pub text: String,
}

impl CriteriaDoc {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        !self.text.is_empty()
    }
}

pub fn load_criteria(path: &Path) -> Result<CriteriaDoc, InputError> {
    let text = read_text(path)?;
    info!("loaded criteria document {} ({} bytes)", path.display(), text.len());
    Ok(CriteriaDoc::new(file_name(path), text))
}
