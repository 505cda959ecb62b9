//! Platform-specific path utilities.

use crate::config::PathsConfig;
use crate::error::{HubError, Result};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// The directory containing the running executable.
///
/// Relative tool search paths and the default config and guides locations
/// are all resolved against this directory.
pub fn install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| HubError::Io {
        message: "Could not determine the running executable".to_string(),
        path: None,
        source: Some(e),
    })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| HubError::Config {
            message: format!("Executable {} has no parent directory", exe.display()),
        })
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` at the start of a relative path, or above the root, is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// The interpreter used to run script tools.
///
/// # Platform Behavior
/// - `MODHUB_PYTHON` wins when set and non-empty
/// - **Windows**: `python`
/// - **Linux/macOS**: `python3`
pub fn python_interpreter() -> OsString {
    if let Some(value) = std::env::var_os(PathsConfig::PYTHON_ENV_VAR) {
        if !value.is_empty() {
            return value;
        }
    }

    #[cfg(windows)]
    {
        OsString::from("python")
    }
    #[cfg(not(windows))]
    {
        OsString::from("python3")
    }
}
