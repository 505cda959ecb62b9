//! Per-language values.

use crate::config::Language;
use serde::{Deserialize, Serialize};

/// A value held once per supported language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    #[serde(default)]
    pub en: T,
    #[serde(default)]
    pub de: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, de: T) -> Self {
        Self { en, de }
    }

    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::De => &self.de,
        }
    }

    pub fn set(&mut self, lang: Language, value: T) {
        match lang {
            Language::En => self.en = value,
            Language::De => self.de = value,
        }
    }
}

impl<T: Clone> Localized<T> {
    /// The same value for both languages.
    pub fn both(value: T) -> Self {
        Self {
            en: value.clone(),
            de: value,
        }
    }
}

impl Localized<String> {
    /// The text for `lang`, or the primary text when it is empty.
    pub fn text(&self, lang: Language) -> &str {
        let value = self.get(lang);
        if value.is_empty() {
            &self.en
        } else {
            value
        }
    }
}

impl Localized<Option<String>> {
    /// The non-empty value declared for `lang`, if any. No cross-language fallback.
    pub fn declared(&self, lang: Language) -> Option<&str> {
        self.get(lang).as_deref().filter(|s| !s.is_empty())
    }

    /// Iterate over every declared value across both languages.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        [self.en.as_deref(), self.de.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
    }
}

impl Localized<&'static str> {
    /// The text for `lang`, falling back to the primary language.
    pub fn text(&self, lang: Language) -> &'static str {
        let value = *self.get(lang);
        if value.is_empty() {
            self.en
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_falls_back_to_primary() {
        let title = Localized::new("Guide".to_string(), String::new());
        assert_eq!(title.text(Language::De), "Guide");
        assert_eq!(title.text(Language::En), "Guide");
    }

    #[test]
    fn test_declared_ignores_empty() {
        let files = Localized::new(Some("a_en.txt".to_string()), Some(String::new()));
        assert_eq!(files.declared(Language::En), Some("a_en.txt"));
        assert_eq!(files.declared(Language::De), None);
        assert_eq!(files.values().collect::<Vec<_>>(), vec!["a_en.txt"]);
    }

    #[test]
    fn test_static_text_is_copy() {
        let label = Localized::new("Archive", "Archiv");
        let copied = label;
        assert_eq!(label.text(Language::De), "Archiv");
        assert_eq!(copied, label);
    }
}
