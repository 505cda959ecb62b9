//! Merged view over builtin, user and discovered entries.
//!
//! The registry never stores anything itself. It borrows the builtin catalog
//! and the configuration record and rebuilds the merged lists on each call,
//! so user additions and files dropped into the guides directory are visible
//! immediately.
//!
//! Ids are not required to be unique. Lookups return the first match in
//! merge order: builtin, then user, then auto-discovered.

mod search;

use crate::catalog::{self, Catalog};
use crate::models::{FileFormatEntry, GuideDescriptor, ToolDescriptor};
use crate::resolver::discover;
use crate::settings::HubConfig;
use std::path::Path;

/// Read-only registry view for one configuration and guides directory.
#[derive(Debug, Clone, Copy)]
pub struct EntityRegistry<'a> {
    catalog: &'a Catalog,
    config: &'a HubConfig,
    guides_dir: &'a Path,
}

impl<'a> EntityRegistry<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a HubConfig, guides_dir: &'a Path) -> Self {
        Self {
            catalog,
            config,
            guides_dir,
        }
    }

    pub fn guides_dir(&self) -> &Path {
        self.guides_dir
    }

    /// Builtin tools followed by user tools, in insertion order.
    pub fn all_tools(&self) -> Vec<ToolDescriptor> {
        self.tools().cloned().collect()
    }

    /// Builtin, user and auto-discovered guides, in that order.
    pub fn all_guides(&self) -> Vec<GuideDescriptor> {
        let mut guides: Vec<GuideDescriptor> = self.registered_guides().cloned().collect();
        let discovered = discover(self.guides_dir, &guides);
        guides.extend(discovered);
        guides
    }

    pub fn lookup_tool(&self, id: &str) -> Option<ToolDescriptor> {
        self.tools().find(|t| t.id == id).cloned()
    }

    pub fn lookup_guide(&self, id: &str) -> Option<GuideDescriptor> {
        // Registered guides precede discovered ones, so the directory is only
        // listed when they have no match.
        if let Some(guide) = self.registered_guides().find(|g| g.id == id) {
            return Some(guide.clone());
        }
        self.all_guides().into_iter().find(|g| g.id == id)
    }

    /// Guides named in `tool.guide_ids`, in that order. Unknown ids are skipped.
    pub fn related_guides(&self, tool: &ToolDescriptor) -> Vec<GuideDescriptor> {
        if tool.guide_ids.is_empty() {
            return Vec::new();
        }
        let guides = self.all_guides();
        tool.guide_ids
            .iter()
            .filter_map(|id| guides.iter().find(|g| &g.id == id).cloned())
            .collect()
    }

    pub fn file_formats(&self) -> &'static [FileFormatEntry] {
        catalog::FILE_FORMATS
    }

    pub fn lookup_format(&self, extension: &str) -> Option<&'static FileFormatEntry> {
        catalog::lookup_format(extension)
    }

    fn tools(&self) -> impl Iterator<Item = &'a ToolDescriptor> {
        let (catalog, config) = (self.catalog, self.config);
        catalog.tools.iter().chain(config.user_tools.iter())
    }

    fn registered_guides(&self) -> impl Iterator<Item = &'a GuideDescriptor> {
        let (catalog, config) = (self.catalog, self.config);
        catalog.guides.iter().chain(config.user_guides.iter())
    }
}
