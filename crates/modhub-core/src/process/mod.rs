//! Tool process launching.
//!
//! Launches are fire and forget; the hub never tracks the processes it starts.
//!
//! # Example
//!
//! ```rust,no_run
//! use modhub_core::catalog::builtin_tools;
//! use modhub_core::process::{LaunchConfig, ProcessLauncher};
//!
//! # fn main() -> modhub_core::Result<()> {
//! let tool = &builtin_tools()[0];
//! let config = LaunchConfig::for_tool(tool, "/games/tw1/hub/tw_editor_cmd_injector.py");
//! let started = ProcessLauncher::launch(&config)?;
//! println!("PID: {}", started.pid);
//! # Ok(())
//! # }
//! ```

mod launcher;

pub use launcher::{LaunchConfig, LaunchResult, ProcessLauncher};
