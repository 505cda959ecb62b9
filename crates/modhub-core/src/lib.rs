//! Modding Hub Core - Headless library behind the TW1 Modding Hub.
//!
//! This crate keeps the registry of modding tools and reference guides for
//! Two Worlds, resolves tools to files on disk, launches them, and picks the
//! text to show for a guide in the active language. It has no UI of its own;
//! the `modhub` binary is one front end built on top of it.
//!
//! # Example
//!
//! ```rust,no_run
//! use modhub_core::ModdingHub;
//!
//! fn main() -> modhub_core::Result<()> {
//!     let hub = ModdingHub::open("/games/TwoWorlds/hub")?;
//!
//!     for tool in hub.all_tools() {
//!         let state = if hub.resolve_tool(&tool).is_some() { "found" } else { "missing" };
//!         println!("{:<30} {}", tool.name, state);
//!     }
//!
//!     let status = hub.status();
//!     println!("{}/{} tools found", status.found_tools, status.total_tools);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod metadata;
pub mod models;
pub mod platform;
pub mod process;
pub mod registry;
pub mod resolver;
pub mod settings;

mod api;

// Re-export commonly used types
pub use catalog::{Catalog, UiString};
pub use config::{Language, ViewMode};
pub use error::{HubError, Result};
pub use models::{
    ExecutionKind, FileFormatEntry, GuideDescriptor, Localized, NewGuide, NewTool, Origin,
    ToolDescriptor,
};
pub use process::LaunchResult;
pub use registry::EntityRegistry;
pub use resolver::{ContentSource, GuideContent, LocationSource, ToolLocation};
pub use settings::{HubConfig, Preferences, SettingsStore};

// Re-export builder from api module
pub use api::{HubStatus, ModdingHubBuilder};

use std::path::{Path, PathBuf};

/// Main entry point for the modding hub.
///
/// Owns the configuration record loaded from disk, the builtin catalog and
/// the install root everything else is resolved against. Queries take
/// `&self` and always reflect the current filesystem; mutations take
/// `&mut self` and persist the whole record before returning.
pub struct ModdingHub {
    /// Directory the hub runs from
    install_root: PathBuf,
    /// Where the configuration record lives
    store: SettingsStore,
    /// In-memory configuration record
    config: HubConfig,
    catalog: Catalog,
}

impl ModdingHub {
    /// Create a builder for ModdingHub.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use modhub_core::ModdingHub;
    ///
    /// let hub = ModdingHub::builder("/games/TwoWorlds/hub")
    ///     .keep_backup(true)
    ///     .build()?;
    /// # Ok::<(), modhub_core::HubError>(())
    /// ```
    pub fn builder(install_root: impl Into<PathBuf>) -> ModdingHubBuilder {
        ModdingHubBuilder::new(install_root)
    }

    /// Open the hub rooted at `install_root` with default options.
    pub fn open(install_root: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(install_root).build()
    }

    /// Open the hub rooted at the directory of the running executable.
    pub fn from_executable() -> Result<Self> {
        Self::open(platform::install_root()?)
    }

    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    pub fn config_path(&self) -> &Path {
        self.store.path()
    }

    /// The current configuration record.
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.lang
    }

    /// The guides directory in effect: the configured one, or the first
    /// conventional spelling that exists under the install root.
    pub fn guides_dir(&self) -> PathBuf {
        let configured = self.config.configured_guides_dir(&self.install_root);
        resolver::detect_guides_dir(&configured, &self.install_root)
    }

    /// A UI string in the active language.
    pub fn ui_text(&self, key: UiString) -> &'static str {
        key.text(self.config.lang)
    }

    /// Run `f` against a registry view of the current state.
    fn with_registry<T>(&self, f: impl FnOnce(&EntityRegistry<'_>) -> T) -> T {
        let guides_dir = self.guides_dir();
        let registry = EntityRegistry::new(&self.catalog, &self.config, &guides_dir);
        f(&registry)
    }
}
