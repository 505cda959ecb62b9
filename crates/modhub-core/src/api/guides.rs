//! Guide queries, content resolution and the format glossary.

use crate::catalog;
use crate::config::Language;
use crate::models::{FileFormatEntry, GuideDescriptor};
use crate::resolver::{resolve_content_detailed, GuideContent};
use crate::ModdingHub;

impl ModdingHub {
    /// Builtin, user and auto-discovered guides.
    pub fn all_guides(&self) -> Vec<GuideDescriptor> {
        self.with_registry(|r| r.all_guides())
    }

    pub fn lookup_guide(&self, id: &str) -> Option<GuideDescriptor> {
        self.with_registry(|r| r.lookup_guide(id))
    }

    /// Search guides in the active language.
    pub fn search_guides(&self, query: &str) -> Vec<GuideDescriptor> {
        let lang = self.config.lang;
        self.with_registry(|r| r.search_guides(query, lang))
    }

    /// Text of `guide` in the active language. Never empty.
    pub fn guide_content(&self, guide: &GuideDescriptor) -> String {
        self.guide_content_in(guide, self.config.lang).text
    }

    /// Text of `guide` in `lang`, with its source.
    pub fn guide_content_in(&self, guide: &GuideDescriptor, lang: Language) -> GuideContent {
        resolve_content_detailed(guide, lang, &self.guides_dir())
    }

    pub fn file_formats(&self) -> &'static [FileFormatEntry] {
        catalog::FILE_FORMATS
    }

    pub fn lookup_format(&self, extension: &str) -> Option<&'static FileFormatEntry> {
        catalog::lookup_format(extension)
    }

    /// The credits page in the active language.
    pub fn credits(&self) -> &'static str {
        catalog::credits(self.config.lang)
    }
}
