//! Data models shared by the registry, the resolvers and the front end.

mod format;
mod guide;
mod localized;
mod tool;

pub use format::FileFormatEntry;
pub use guide::{GuideDescriptor, NewGuide};
pub use localized::Localized;
pub use tool::{ExecutionKind, NewTool, ToolDescriptor};
pub(crate) use tool::normalize_extension;

use serde::{Deserialize, Serialize};

/// Where a tool or guide entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Shipped with the hub, immutable.
    #[default]
    Builtin,
    /// Added at runtime and persisted in the configuration record.
    User,
    /// Synthesized from loose files in the guides directory, never persisted.
    AutoDiscovered,
}

impl Origin {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Origin::Builtin)
    }
}

/// Derive a registry id from a display name: lowercase, spaces become `_`.
pub fn derive_id(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}
