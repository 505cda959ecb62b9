//! Mutations of the configuration record.
//!
//! Every method here validates first, applies the change to a copy of the
//! record and writes that copy to disk. The in-memory record is replaced only
//! once the write succeeds, so a rejected input or a failed save leaves it
//! untouched.

use std::path::PathBuf;
use tracing::info;

use crate::config::{Language, ViewMode};
use crate::error::{HubError, Result};
use crate::models::{GuideDescriptor, NewGuide, NewTool, ToolDescriptor};
use crate::settings::{HubConfig, Preferences};
use crate::ModdingHub;

impl ModdingHub {
    /// Persist the current record.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.config)
    }

    fn commit(&mut self, next: HubConfig) -> Result<()> {
        self.store.save(&next)?;
        self.config = next;
        Ok(())
    }

    /// Register a user tool.
    ///
    /// When the form carries a path, it is also recorded as the tool's path
    /// override so the tool resolves right away.
    pub fn add_user_tool(&mut self, new_tool: NewTool) -> Result<ToolDescriptor> {
        let tool = new_tool.into_descriptor()?;
        let mut next = self.config.clone();
        if let Some(path) = &tool.explicit_path {
            next.tool_paths.insert(tool.id.clone(), path.clone());
        }
        next.user_tools.push(tool.clone());
        self.commit(next)?;
        info!("Added user tool {} ({})", tool.name, tool.id);
        Ok(tool)
    }

    /// Register a user guide with embedded content.
    pub fn add_user_guide(&mut self, new_guide: NewGuide) -> Result<GuideDescriptor> {
        let guide = new_guide.into_descriptor()?;
        let mut next = self.config.clone();
        next.user_guides.push(guide.clone());
        self.commit(next)?;
        info!("Added user guide {}", guide.id);
        Ok(guide)
    }

    /// Point the tool `id` at `path`, taking precedence over every other
    /// location.
    pub fn set_tool_path(&mut self, id: &str, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(HubError::validation("path", "Path required"));
        }
        if self.lookup_tool(id).is_none() {
            return Err(HubError::UnknownTool { id: id.to_string() });
        }
        let mut next = self.config.clone();
        next.tool_paths.insert(id.to_string(), path.clone());
        self.commit(next)?;
        info!("Tool path for {} set to {}", id, path.display());
        Ok(())
    }

    /// Drop the path override for `id`. Returns whether one was set.
    pub fn clear_tool_path(&mut self, id: &str) -> Result<bool> {
        let mut next = self.config.clone();
        let removed = next.tool_paths.remove(id).is_some();
        self.commit(next)?;
        Ok(removed)
    }

    /// Apply a preference update. Returns whether anything changed.
    pub fn update_preferences(&mut self, prefs: &Preferences) -> Result<bool> {
        let mut next = self.config.clone();
        let changed = next.apply(prefs);
        self.commit(next)?;
        Ok(changed)
    }

    /// Switch between English and German. Returns the new language.
    pub fn toggle_language(&mut self) -> Result<Language> {
        let mut next = self.config.clone();
        next.lang = next.lang.toggled();
        self.commit(next)?;
        Ok(self.config.lang)
    }

    /// Switch between grid and list view. Returns the new mode.
    pub fn toggle_view_mode(&mut self) -> Result<ViewMode> {
        let mut next = self.config.clone();
        next.view_mode = next.view_mode.toggled();
        self.commit(next)?;
        Ok(self.config.view_mode)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::HubError;
    use crate::models::NewTool;
    use crate::settings::SettingsStore;
    use crate::ModdingHub;
    use tempfile::TempDir;

    #[test]
    fn test_rejected_tool_leaves_record_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let mut hub = ModdingHub::open(temp_dir.path()).unwrap();

        let err = hub
            .add_user_tool(NewTool {
                name: "   ".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, HubError::Validation { .. }));
        assert!(hub.config().user_tools.is_empty());
        assert!(!hub.config_path().exists());
    }

    #[test]
    fn test_set_tool_path_requires_known_tool() {
        let temp_dir = TempDir::new().unwrap();
        let mut hub = ModdingHub::open(temp_dir.path()).unwrap();

        let err = hub.set_tool_path("nope", temp_dir.path().join("x.exe")).unwrap_err();
        assert!(matches!(err, HubError::UnknownTool { .. }));

        hub.set_tool_path("tw_editor", temp_dir.path().join("Editor.exe"))
            .unwrap();
        let stored = SettingsStore::in_install_root(temp_dir.path()).load(temp_dir.path());
        assert_eq!(
            stored.tool_paths.get("tw_editor"),
            Some(&temp_dir.path().join("Editor.exe"))
        );

        assert!(hub.clear_tool_path("tw_editor").unwrap());
        assert!(!hub.clear_tool_path("tw_editor").unwrap());
    }

    #[test]
    fn test_toggles_persist() {
        let temp_dir = TempDir::new().unwrap();
        let mut hub = ModdingHub::open(temp_dir.path()).unwrap();

        assert_eq!(hub.toggle_language().unwrap(), crate::Language::De);
        assert_eq!(hub.toggle_view_mode().unwrap(), crate::ViewMode::List);

        let reopened = ModdingHub::open(temp_dir.path()).unwrap();
        assert_eq!(reopened.language(), crate::Language::De);
        assert_eq!(reopened.config().view_mode, crate::ViewMode::List);
    }

    #[test]
    fn test_failed_save_leaves_record_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut hub = ModdingHub::builder(temp_dir.path())
            .config_path(blocker.join("cfg.json"))
            .build()
            .unwrap();

        let new_tool = || NewTool {
            name: "A".into(),
            path: Some(temp_dir.path().join("a.exe")),
            ..Default::default()
        };
        assert!(hub.add_user_tool(new_tool()).is_err());
        assert!(hub.config().user_tools.is_empty());
        assert!(hub.config().tool_paths.is_empty());

        assert!(hub.add_user_tool(new_tool()).is_err());
        assert!(hub.config().user_tools.is_empty());

        assert!(hub.toggle_language().is_err());
        assert_eq!(hub.language(), crate::Language::En);
        assert!(hub
            .set_tool_path("tw_editor", temp_dir.path().join("Editor.exe"))
            .is_err());
        assert!(hub.config().tool_paths.is_empty());
    }
}
