//! Tool queries, path resolution and launching.

use std::path::PathBuf;
use tracing::warn;

use crate::error::{HubError, Result};
use crate::models::{GuideDescriptor, ToolDescriptor};
use crate::process::{LaunchConfig, LaunchResult, ProcessLauncher};
use crate::resolver::{PathResolver, ToolLocation};
use crate::ModdingHub;

impl ModdingHub {
    /// Builtin tools followed by user tools.
    pub fn all_tools(&self) -> Vec<ToolDescriptor> {
        self.with_registry(|r| r.all_tools())
    }

    pub fn lookup_tool(&self, id: &str) -> Option<ToolDescriptor> {
        self.with_registry(|r| r.lookup_tool(id))
    }

    /// Search tools in the active language.
    pub fn search_tools(&self, query: &str) -> Vec<ToolDescriptor> {
        let lang = self.config.lang;
        self.with_registry(|r| r.search_tools(query, lang))
    }

    /// Guides linked from `tool`.
    pub fn related_guides(&self, tool: &ToolDescriptor) -> Vec<GuideDescriptor> {
        self.with_registry(|r| r.related_guides(tool))
    }

    fn path_resolver(&self) -> PathResolver {
        PathResolver::new(&self.install_root)
    }

    /// Where `tool` currently lives on disk, if anywhere.
    pub fn resolve_tool(&self, tool: &ToolDescriptor) -> Option<PathBuf> {
        self.path_resolver().resolve(tool, &self.config.tool_paths)
    }

    /// Like [`resolve_tool`](Self::resolve_tool) but also reports which rule matched.
    pub fn locate_tool(&self, tool: &ToolDescriptor) -> Option<ToolLocation> {
        self.path_resolver().locate(tool, &self.config.tool_paths)
    }

    /// Resolve and start `tool` as a detached process.
    pub fn launch(&self, tool: &ToolDescriptor) -> Result<LaunchResult> {
        let path = self.resolve_tool(tool).ok_or_else(|| {
            warn!("Cannot launch {}: not found on disk", tool.id);
            HubError::ToolNotFound {
                filename: if tool.filename.is_empty() {
                    tool.name.clone()
                } else {
                    tool.filename.clone()
                },
            }
        })?;
        ProcessLauncher::launch(&LaunchConfig::for_tool(tool, path))
    }

    /// Look up a tool by id and launch it.
    pub fn launch_tool(&self, id: &str) -> Result<LaunchResult> {
        let tool = self
            .lookup_tool(id)
            .ok_or_else(|| HubError::UnknownTool { id: id.to_string() })?;
        self.launch(&tool)
    }
}
