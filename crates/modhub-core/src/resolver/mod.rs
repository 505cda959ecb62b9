//! Resolution chains for tools and guides.
//!
//! - `paths` - where a tool lives on disk
//! - `content` - which text a guide shows in a given language
//! - `discovery` - guides synthesized from loose files, and guides folder detection

pub mod content;
pub mod discovery;
pub mod paths;

pub use content::{resolve_content, resolve_content_detailed, ContentSource, GuideContent};
pub use discovery::{detect_guides_dir, discover};
pub use paths::{LocationSource, PathResolver, ToolLocation};
