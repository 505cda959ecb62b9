//! Builder for configuring ModdingHub initialization.

use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::{HubError, Result};
use crate::platform;
use crate::settings::SettingsStore;
use crate::ModdingHub;

/// Builder for configuring ModdingHub initialization.
///
/// # Example
///
/// ```rust,no_run
/// use modhub_core::ModdingHub;
///
/// let hub = ModdingHub::builder("./hub")
///     .config_path("./hub/alt_config.json")
///     .create_guides_dir(true)
///     .build()?;
/// # Ok::<(), modhub_core::HubError>(())
/// ```
pub struct ModdingHubBuilder {
    install_root: PathBuf,
    config_path: Option<PathBuf>,
    guides_dir: Option<PathBuf>,
    keep_backup: bool,
    create_guides_dir: bool,
}

impl ModdingHubBuilder {
    /// Create a new builder with the install root directory.
    pub fn new(install_root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: install_root.into(),
            config_path: None,
            guides_dir: None,
            keep_backup: false,
            create_guides_dir: false,
        }
    }

    /// Read and write the configuration record at `path` instead of
    /// `<install root>/tw1_modding_hub.json`.
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Use `dir` as guides directory for this session.
    ///
    /// The override is applied to the in-memory record and only persisted if
    /// a later mutation saves it.
    pub fn guides_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.guides_dir = Some(dir.into());
        self
    }

    /// Keep a `.bak` copy of the previous configuration on every save.
    ///
    /// Default: `false`
    pub fn keep_backup(mut self, enable: bool) -> Self {
        self.keep_backup = enable;
        self
    }

    /// Create the guides directory if it does not exist yet.
    ///
    /// Default: `false`
    pub fn create_guides_dir(mut self, enable: bool) -> Self {
        self.create_guides_dir = enable;
        self
    }

    /// Build the ModdingHub instance.
    pub fn build(self) -> Result<ModdingHub> {
        if !self.install_root.is_dir() {
            return Err(HubError::Config {
                message: format!(
                    "Install root does not exist: {}",
                    self.install_root.display()
                ),
            });
        }

        let store = match self.config_path {
            Some(path) => SettingsStore::new(path),
            None => SettingsStore::in_install_root(&self.install_root),
        }
        .with_backup(self.keep_backup);

        let mut config = store.load(&self.install_root);
        if let Some(dir) = self.guides_dir {
            debug!("Guides directory overridden to {}", dir.display());
            config.guides_dir = Some(dir);
        }

        let hub = ModdingHub {
            install_root: self.install_root,
            store,
            config,
            catalog: Catalog::builtin(),
        };

        if self.create_guides_dir {
            let dir = hub.guides_dir();
            if !dir.exists() {
                fs::create_dir_all(&dir).map_err(|e| HubError::Io {
                    message: format!("Failed to create guides directory: {}", dir.display()),
                    path: Some(dir.clone()),
                    source: Some(e),
                })?;
            }
        }

        info!(
            "{} {} ({}) ready at {} (config {})",
            AppConfig::APP_NAME,
            AppConfig::VERSION,
            platform::current_platform(),
            hub.install_root.display(),
            hub.store.path().display()
        );
        Ok(hub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = ModdingHubBuilder::new(temp_dir.path().join("absent")).build();
        assert!(matches!(result, Err(HubError::Config { .. })));
    }

    #[test]
    fn test_custom_config_path_and_guides_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("elsewhere.json");
        std::fs::write(&config_path, r#"{"lang": "de"}"#).unwrap();

        let hub = ModdingHubBuilder::new(temp_dir.path())
            .config_path(&config_path)
            .guides_dir(temp_dir.path().join("docs"))
            .create_guides_dir(true)
            .build()
            .unwrap();

        assert_eq!(hub.config_path(), config_path);
        assert_eq!(hub.language(), Language::De);
        assert_eq!(hub.guides_dir(), temp_dir.path().join("docs"));
        assert!(temp_dir.path().join("docs").is_dir());
    }
}
