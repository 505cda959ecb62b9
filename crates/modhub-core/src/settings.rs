//! The persisted configuration record and its store.
//!
//! One JSON file beside the executable holds the user's preferences, the
//! tools and guides they added, and per-tool path overrides. It is loaded
//! once at startup and rewritten in full after every accepted mutation.

use crate::config::{Language, PathsConfig, UiConfig, ViewMode};
use crate::error::Result;
use crate::metadata::{atomic_read_json, atomic_write_json};
use crate::models::{derive_id, GuideDescriptor, Origin, ToolDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub view_mode: ViewMode,
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    /// Configured guides directory. `None` means `<install root>/guides`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guides_dir: Option<PathBuf>,
    #[serde(default)]
    pub user_tools: Vec<ToolDescriptor>,
    #[serde(default)]
    pub user_guides: Vec<GuideDescriptor>,
    /// Tool id to user-chosen executable path.
    #[serde(default)]
    pub tool_paths: BTreeMap<String, PathBuf>,
}

fn default_font_size() -> u8 {
    UiConfig::DEFAULT_FONT_SIZE
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            lang: Language::default(),
            view_mode: ViewMode::default(),
            font_size: UiConfig::DEFAULT_FONT_SIZE,
            guides_dir: None,
            user_tools: Vec::new(),
            user_guides: Vec::new(),
            tool_paths: BTreeMap::new(),
        }
    }
}

impl HubConfig {
    /// Defaults for a fresh install rooted at `install_root`.
    pub fn for_install_root(install_root: &Path) -> Self {
        Self {
            guides_dir: Some(install_root.join(PathsConfig::GUIDES_DIR_NAME)),
            ..Self::default()
        }
    }

    /// The configured guides directory, or the conventional one under `install_root`.
    pub fn configured_guides_dir(&self, install_root: &Path) -> PathBuf {
        self.guides_dir
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| install_root.join(PathsConfig::GUIDES_DIR_NAME))
    }

    /// Apply invariants that serde can't express: user entries are tagged as
    /// such, missing ids are derived from names and the font size stays in
    /// range. Entries that end up without any id are dropped.
    pub fn normalize(&mut self) {
        for tool in &mut self.user_tools {
            tool.origin = Origin::User;
            if tool.id.trim().is_empty() {
                tool.id = derive_id(&tool.name);
            }
        }
        self.user_tools.retain(|tool| {
            let keep = !tool.id.is_empty();
            if !keep {
                warn!("Dropping user tool without id or name");
            }
            keep
        });

        for guide in &mut self.user_guides {
            guide.origin = Origin::User;
            if guide.id.trim().is_empty() {
                guide.id = derive_id(&guide.title.en);
            }
        }
        self.user_guides.retain(|guide| {
            let keep = !guide.id.is_empty();
            if !keep {
                warn!("Dropping user guide without id or title");
            }
            keep
        });

        self.font_size = clamp_font_size(self.font_size);
    }

    /// Apply a preference update. Returns whether anything changed.
    pub fn apply(&mut self, prefs: &Preferences) -> bool {
        let before = (self.lang, self.view_mode, self.font_size, self.guides_dir.clone());

        if let Some(lang) = prefs.lang {
            self.lang = lang;
        }
        if let Some(view_mode) = prefs.view_mode {
            self.view_mode = view_mode;
        }
        if let Some(font_size) = prefs.font_size {
            self.font_size = clamp_font_size(font_size);
        }
        if let Some(ref guides_dir) = prefs.guides_dir {
            self.guides_dir = Some(guides_dir.clone());
        }

        before != (self.lang, self.view_mode, self.font_size, self.guides_dir.clone())
    }
}

pub(crate) fn clamp_font_size(size: u8) -> u8 {
    size.clamp(UiConfig::MIN_FONT_SIZE, UiConfig::MAX_FONT_SIZE)
}

/// A partial update to the general preferences. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub lang: Option<Language>,
    pub view_mode: Option<ViewMode>,
    pub font_size: Option<u8>,
    pub guides_dir: Option<PathBuf>,
}

impl Preferences {
    pub fn is_empty(&self) -> bool {
        self == &Preferences::default()
    }
}

/// Loads and saves the configuration record at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    keep_backup: bool,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            keep_backup: false,
        }
    }

    /// The store for the conventional config file under `install_root`.
    pub fn in_install_root(install_root: &Path) -> Self {
        Self::new(install_root.join(PathsConfig::CONFIG_FILE_NAME))
    }

    /// Keep a `.bak` copy of the previous file on every save.
    pub fn with_backup(mut self, keep_backup: bool) -> Self {
        self.keep_backup = keep_backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record. A missing or unreadable file yields the defaults for
    /// `install_root`; this never fails.
    pub fn load(&self, install_root: &Path) -> HubConfig {
        match atomic_read_json::<HubConfig>(&self.path) {
            Ok(Some(mut config)) => {
                config.normalize();
                debug!(
                    "Loaded config from {} ({} user tools, {} user guides)",
                    self.path.display(),
                    config.user_tools.len(),
                    config.user_guides.len()
                );
                config
            }
            Ok(None) => {
                info!("No config at {}, using defaults", self.path.display());
                HubConfig::for_install_root(install_root)
            }
            Err(e) => {
                warn!("Ignoring unusable config {}: {}", self.path.display(), e);
                HubConfig::for_install_root(install_root)
            }
        }
    }

    /// Write the full record.
    pub fn save(&self, config: &HubConfig) -> Result<()> {
        atomic_write_json(&self.path, config, self.keep_backup)
    }
}
