//! Reference guide descriptors.

use super::tool::non_empty;
use super::{derive_id, Localized, Origin};
use crate::config::Language;
use crate::error::{HubError, Result};
use serde::{Deserialize, Serialize};

/// One reference document with per-language content sources.
///
/// Content for a language comes from, in order: the external `file` inside
/// the guides directory, the embedded `content`, the `fallback` message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideDescriptor {
    /// Derived from the English title when the stored record leaves it out.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Localized<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tool_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub file: Localized<Option<String>>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub content: Localized<Option<String>>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub fallback: Localized<Option<String>>,
    #[serde(skip)]
    pub origin: Origin,
}

fn is_unset(value: &Localized<Option<String>>) -> bool {
    value.en.is_none() && value.de.is_none()
}

impl GuideDescriptor {
    pub fn title(&self, lang: Language) -> &str {
        self.title.text(lang)
    }

    /// Every external file name this guide references, across both languages.
    pub fn referenced_files(&self) -> impl Iterator<Item = &str> {
        self.file.values()
    }

    pub fn is_auto_discovered(&self) -> bool {
        matches!(self.origin, Origin::AutoDiscovered)
    }
}

/// Input of the "add guide" form.
#[derive(Debug, Clone, Default)]
pub struct NewGuide {
    pub title_en: String,
    pub title_de: Option<String>,
    pub tags: Vec<String>,
    /// Related tool names or ids; normalized to ids.
    pub tools: Vec<String>,
    pub content_en: Option<String>,
    pub content_de: Option<String>,
}

impl NewGuide {
    /// Validate the form and build a user guide descriptor.
    pub fn into_descriptor(self) -> Result<GuideDescriptor> {
        let title_en = self.title_en.trim().to_string();
        if title_en.is_empty() {
            return Err(HubError::validation("title_en", "English title required"));
        }

        let title_de = non_empty(self.title_de).unwrap_or_else(|| title_en.clone());
        let content_en = non_empty(self.content_en);
        let content_de = non_empty(self.content_de);
        let content = Localized::new(
            Some(content_en.clone().unwrap_or_else(|| title_en.clone())),
            Some(content_de.or(content_en).unwrap_or_else(|| title_en.clone())),
        );

        Ok(GuideDescriptor {
            id: derive_id(&title_en),
            title: Localized::new(title_en, title_de),
            tags: self
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            tool_ids: self
                .tools
                .iter()
                .filter(|t| !t.trim().is_empty())
                .map(|t| derive_id(t))
                .collect(),
            file: Localized::default(),
            content,
            fallback: Localized::default(),
            origin: Origin::User,
        })
    }
}
