//! API implementation submodules.
//!
//! Each submodule contains `impl ModdingHub` blocks that extend the public API
//! with domain-specific methods. The struct definition remains in `lib.rs`.

mod builder;
mod guides;
mod settings;
mod status;
mod tools;

pub use builder::ModdingHubBuilder;
pub use status::HubStatus;
