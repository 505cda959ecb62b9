//! File-format glossary entries.

use super::Localized;
use crate::config::Language;
use serde::Serialize;

/// Static description of one game file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileFormatEntry {
    /// Extension with leading dot, e.g. `.wd`.
    pub extension: &'static str,
    pub description: Localized<&'static str>,
}

impl FileFormatEntry {
    pub fn description(&self, lang: Language) -> &'static str {
        self.description.text(lang)
    }

    /// Case-insensitive substring match against the extension or the
    /// description in `lang`. `query` must already be lowercase.
    pub fn matches(&self, query: &str, lang: Language) -> bool {
        self.extension.to_lowercase().contains(query)
            || self.description(lang).to_lowercase().contains(query)
    }
}
