//! Summary counters for the status line.

use serde::Serialize;

use crate::ModdingHub;

/// Counts shown in the front end's status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HubStatus {
    /// Tools that currently resolve to a file.
    pub found_tools: usize,
    pub total_tools: usize,
    /// All guides, including auto-discovered ones.
    pub guides: usize,
    pub formats: usize,
}

impl ModdingHub {
    pub fn status(&self) -> HubStatus {
        let tools = self.all_tools();
        let found_tools = tools
            .iter()
            .filter(|t| self.resolve_tool(t).is_some())
            .count();

        HubStatus {
            found_tools,
            total_tools: tools.len(),
            guides: self.all_guides().len(),
            formats: self.file_formats().len(),
        }
    }
}
