//! Localized UI strings and the credits page.

use crate::config::Language;
use crate::models::Localized;

/// Strings the core and the front end display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiString {
    Title,
    Tools,
    Guides,
    Formats,
    Found,
    NotFound,
    NoResults,
    Builtin,
    Custom,
    Discovered,
    Description,
    Path,
    Download,
    RelatedGuides,
    FileFormatInfo,
    GuideNotFound,
}

impl UiString {
    pub fn text(self, lang: Language) -> &'static str {
        self.localized().text(lang)
    }

    fn localized(self) -> Localized<&'static str> {
        let (en, de) = match self {
            UiString::Title => ("TW1 Modding Hub", "TW1 Modding Hub"),
            UiString::Tools => ("Tools", "Tools"),
            UiString::Guides => ("Guides", "Anleitungen"),
            UiString::Formats => ("Formats", "Formate"),
            UiString::Found => ("Found", "Gefunden"),
            UiString::NotFound => ("Not Found", "Nicht gefunden"),
            UiString::NoResults => ("No results found.", "Keine Ergebnisse gefunden."),
            UiString::Builtin => ("Built-in", "Eingebaut"),
            UiString::Custom => ("Custom", "Benutzerdefiniert"),
            UiString::Discovered => ("From guides folder", "Aus dem Anleitungen-Ordner"),
            UiString::Description => ("Description", "Beschreibung"),
            UiString::Path => ("Path", "Pfad"),
            UiString::Download => ("Download", "Download"),
            UiString::RelatedGuides => ("Related Guides", "Zugehörige Anleitungen"),
            UiString::FileFormatInfo => ("File Format Info", "Dateiformat-Info"),
            UiString::GuideNotFound => (
                "Guide file not found. Place guide .txt files in the 'guides' folder next to this hub.",
                "Guide-Datei nicht gefunden. Guide .txt-Dateien im 'guides'-Ordner neben diesem Hub ablegen.",
            ),
        };
        Localized::new(en, de)
    }
}

static CREDITS: Localized<&str> = Localized {
    en: include_str!("content/credits_en.txt"),
    de: include_str!("content/credits_de.txt"),
};

/// The credits page in `lang`.
pub fn credits(lang: Language) -> &'static str {
    CREDITS.text(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_localized() {
        assert_eq!(UiString::Guides.text(Language::De), "Anleitungen");
        assert_eq!(UiString::Guides.text(Language::En), "Guides");
        assert!(!UiString::GuideNotFound.text(Language::De).is_empty());
    }

    #[test]
    fn test_credits() {
        assert!(credits(Language::En).starts_with("CREDITS"));
        assert!(credits(Language::De).contains("ENTWICKLUNG"));
    }
}
