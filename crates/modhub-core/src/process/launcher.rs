//! Detached tool launching.
//!
//! The hub is a launcher, not a supervisor: a tool is started in its own
//! process group with its containing directory as working directory, and
//! the child handle is dropped right away. Exit codes and output are never
//! collected.

use crate::error::{HubError, Result};
use crate::models::{ExecutionKind, ToolDescriptor};
use crate::platform;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{error, info};

#[cfg(unix)]
use std::os::unix::process::CommandExt;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

/// Everything needed to start one tool.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Tool id, for messages.
    pub tool_id: String,
    /// Resolved script or executable.
    pub target: PathBuf,
    /// Directory the process starts in.
    pub working_dir: PathBuf,
    pub mode: ExecutionKind,
    /// Interpreter for script tools.
    pub interpreter: OsString,
}

impl LaunchConfig {
    /// Build the launch config for `tool` resolved to `path`.
    ///
    /// A tool declared as a script, or a path ending in `.py`, runs through
    /// the Python interpreter; everything else is executed directly.
    pub fn for_tool(tool: &ToolDescriptor, path: impl AsRef<Path>) -> Self {
        let target = path.as_ref().to_path_buf();
        let mode = match (tool.execution_kind, ExecutionKind::from_path(&target)) {
            (ExecutionKind::Script, _) | (_, ExecutionKind::Script) => ExecutionKind::Script,
            _ => ExecutionKind::Binary,
        };
        let working_dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            tool_id: tool.id.clone(),
            target,
            working_dir,
            mode,
            interpreter: platform::python_interpreter(),
        }
    }

    /// Use a specific interpreter for script tools.
    pub fn with_interpreter(mut self, interpreter: impl Into<OsString>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    fn command(&self) -> Command {
        let mut cmd = match self.mode {
            ExecutionKind::Script => {
                let mut cmd = Command::new(&self.interpreter);
                cmd.arg(&self.target);
                cmd
            }
            ExecutionKind::Binary => Command::new(&self.target),
        };
        cmd.current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Own process group so the tool outlives the hub and ignores its signals.
        #[cfg(unix)]
        {
            cmd.process_group(0);
        }

        #[cfg(windows)]
        {
            const CREATE_NEW_PROCESS_GROUP: u32 = 0x00000200;
            cmd.creation_flags(CREATE_NEW_PROCESS_GROUP);
        }

        cmd
    }
}

/// A successfully started tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchResult {
    pub pid: u32,
    pub target: PathBuf,
    pub mode: ExecutionKind,
}

/// Starts tools as independent processes.
pub struct ProcessLauncher;

impl ProcessLauncher {
    /// Start the process described by `config` and forget about it.
    ///
    /// Spawn failures come back as [`HubError::LaunchFailed`] carrying the
    /// OS error text.
    pub fn launch(config: &LaunchConfig) -> Result<LaunchResult> {
        info!(
            "Launching {} ({:?}) from {}",
            config.tool_id,
            config.mode,
            config.working_dir.display()
        );

        let child = config.command().spawn().map_err(|e| {
            error!("Failed to launch {}: {}", config.tool_id, e);
            HubError::LaunchFailed {
                tool: config.tool_id.clone(),
                message: e.to_string(),
            }
        })?;

        let pid = child.id();
        info!("Launched {} with PID {}", config.tool_id, pid);
        drop(child);

        Ok(LaunchResult {
            pid,
            target: config.target.clone(),
            mode: config.mode,
        })
    }
}
