//! Guide content resolution.
//!
//! For a guide and a language the text comes from the first source that
//! yields something: the external file in the guides directory, the embedded
//! text, the guide's own fallback note, and finally the localized
//! "guide not found" message. Resolution never fails and never caches, so
//! edits to a guide file show up on the next view.

use crate::catalog::UiString;
use crate::config::Language;
use crate::models::GuideDescriptor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Which source supplied a guide's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    Embedded,
    Fallback,
    NotFound,
}

/// Resolved guide text together with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideContent {
    pub text: String,
    pub source: ContentSource,
}

/// Resolve the text to display for `guide` in `lang`.
pub fn resolve_content(guide: &GuideDescriptor, lang: Language, guides_dir: &Path) -> String {
    resolve_content_detailed(guide, lang, guides_dir).text
}

/// Like [`resolve_content`] but also reports where the text came from.
pub fn resolve_content_detailed(
    guide: &GuideDescriptor,
    lang: Language,
    guides_dir: &Path,
) -> GuideContent {
    if let Some(filename) = guide.file.declared(lang) {
        let path = guides_dir.join(filename);
        if path.is_file() {
            match fs::read_to_string(&path) {
                Ok(text) => {
                    debug!("Guide {} ({}) read from {}", guide.id, lang, path.display());
                    return GuideContent {
                        text,
                        source: ContentSource::File(path),
                    };
                }
                Err(e) => warn!("Could not read guide file {}: {}", path.display(), e),
            }
        }
    }

    if let Some(text) = guide.content.declared(lang) {
        return GuideContent {
            text: text.to_string(),
            source: ContentSource::Embedded,
        };
    }

    if let Some(text) = guide.fallback.declared(lang) {
        return GuideContent {
            text: text.to_string(),
            source: ContentSource::Fallback,
        };
    }

    GuideContent {
        text: UiString::GuideNotFound.text(lang).to_string(),
        source: ContentSource::NotFound,
    }
}
