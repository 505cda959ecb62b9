//! Builtin catalogs shipped with the hub.
//!
//! Everything here is immutable at runtime. User entries and discovered
//! guides are merged on top of these by the registry.

mod formats;
mod guides;
mod strings;
mod tools;

pub use formats::{lookup_format, FILE_FORMATS};
pub use guides::builtin_guides;
pub use strings::{credits, UiString};
pub use tools::builtin_tools;

use crate::models::{GuideDescriptor, ToolDescriptor};

/// The builtin tools and guides, materialized once per hub.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub tools: Vec<ToolDescriptor>,
    pub guides: Vec<GuideDescriptor>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            tools: builtin_tools(),
            guides: builtin_guides(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
