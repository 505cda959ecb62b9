//! Centralized configuration for the modding hub.
//!
//! Constants for file names, directory conventions and UI limits, plus the
//! two small enums every other module keys on: [`Language`] and [`ViewMode`].

use crate::error::HubError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "TW1 Modding Hub";
    pub const VERSION: &'static str = "2.0";
    pub const AUTHOR: &'static str = "MedievalDev";
}

/// Shared file and directory names, all relative to the install root.
pub struct PathsConfig;

impl PathsConfig {
    pub const CONFIG_FILE_NAME: &'static str = "tw1_modding_hub.json";
    pub const GUIDES_DIR_NAME: &'static str = "guides";
    /// Folder spellings probed when the configured guides directory is missing.
    pub const GUIDES_DIR_VARIANTS: [&'static str; 4] = ["guides", "Guids", "Guides", "guids"];
    /// Extensions picked up by guide auto-discovery.
    pub const GUIDE_EXTENSIONS: [&'static str; 2] = ["txt", "md"];
    /// Prefix for ids of auto-discovered guides.
    pub const AUTO_GUIDE_PREFIX: &'static str = "auto_";
    /// Environment variable that overrides the interpreter used for script tools.
    pub const PYTHON_ENV_VAR: &'static str = "MODHUB_PYTHON";
}

/// UI preferences limits.
pub struct UiConfig;

impl UiConfig {
    pub const DEFAULT_FONT_SIZE: u8 = 10;
    pub const MIN_FONT_SIZE: u8 = 8;
    pub const MAX_FONT_SIZE: u8 = 18;
}

/// Display language. English is the primary language and the fallback for
/// every localized lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// The filename suffix used for this language, e.g. `_en`.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Language::En => "_en",
            Language::De => "_de",
        }
    }

    /// The other supported language.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(HubError::InvalidLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the tool list is laid out by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

impl FromStr for ViewMode {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(HubError::InvalidViewMode(s.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_roundtrip() {
        for lang in Language::ALL {
            let parsed: Language = lang.as_str().parse().expect("Should parse");
            assert_eq!(lang, parsed);
        }
        assert_eq!("DE".parse::<Language>().unwrap(), Language::De);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_toggles() {
        assert_eq!(Language::En.toggled(), Language::De);
        assert_eq!(Language::De.toggled(), Language::En);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");
        assert_eq!(serde_json::to_string(&ViewMode::List).unwrap(), "\"list\"");
    }

    #[test]
    fn test_font_bounds_are_ordered() {
        assert!(UiConfig::MIN_FONT_SIZE <= UiConfig::DEFAULT_FONT_SIZE);
        assert!(UiConfig::DEFAULT_FONT_SIZE <= UiConfig::MAX_FONT_SIZE);
    }
}
