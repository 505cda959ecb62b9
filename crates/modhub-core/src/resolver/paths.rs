//! Tool path resolution.
//!
//! Candidates are probed in a fixed order and the first existing file wins:
//! 1. The user's override from the configuration record
//! 2. `filename` directly in the install root
//! 3. `filename` under each search path, in listed order
//! 4. The path captured when the user registered the tool
//!
//! Nothing is cached; every call stats the filesystem again so a tool that
//! appears on disk is picked up immediately.

use crate::models::ToolDescriptor;
use crate::platform::normalize_lexically;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which rule located a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationSource {
    Override,
    InstallRoot,
    SearchPath(String),
    ExplicitPath,
}

/// A tool found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocation {
    pub path: PathBuf,
    pub source: LocationSource,
}

/// Resolves tool descriptors to files relative to an install root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    install_root: PathBuf,
}

impl PathResolver {
    pub fn new(install_root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: install_root.into(),
        }
    }

    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// Locate `tool`, or `None` if no candidate exists.
    pub fn resolve(
        &self,
        tool: &ToolDescriptor,
        overrides: &BTreeMap<String, PathBuf>,
    ) -> Option<PathBuf> {
        self.locate(tool, overrides).map(|loc| loc.path)
    }

    /// Like [`resolve`](Self::resolve) but also reports which rule matched.
    pub fn locate(
        &self,
        tool: &ToolDescriptor,
        overrides: &BTreeMap<String, PathBuf>,
    ) -> Option<ToolLocation> {
        let found = self.probe(tool, overrides);
        match &found {
            Some(loc) => debug!(
                "Resolved {} to {} via {:?}",
                tool.id,
                loc.path.display(),
                loc.source
            ),
            None => debug!("Tool {} not found", tool.id),
        }
        found
    }

    fn probe(
        &self,
        tool: &ToolDescriptor,
        overrides: &BTreeMap<String, PathBuf>,
    ) -> Option<ToolLocation> {
        if let Some(path) = overrides.get(&tool.id).filter(|p| exists(p)) {
            return Some(ToolLocation {
                path: path.clone(),
                source: LocationSource::Override,
            });
        }

        if !tool.filename.is_empty() {
            let local = self.install_root.join(&tool.filename);
            if exists(&local) {
                return Some(ToolLocation {
                    path: local,
                    source: LocationSource::InstallRoot,
                });
            }

            for dir in &tool.search_paths {
                let candidate =
                    normalize_lexically(&self.install_root.join(dir).join(&tool.filename));
                if exists(&candidate) {
                    return Some(ToolLocation {
                        path: candidate,
                        source: LocationSource::SearchPath(dir.clone()),
                    });
                }
            }
        }

        tool.explicit_path
            .as_ref()
            .filter(|p| exists(p))
            .map(|p| ToolLocation {
                path: p.clone(),
                source: LocationSource::ExplicitPath,
            })
    }
}

fn exists(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionKind, NewTool};
    use std::fs;
    use tempfile::TempDir;

    fn script_tool(filename: &str, search_paths: &[&str]) -> ToolDescriptor {
        let mut tool = NewTool {
            name: "Probe".into(),
            ..Default::default()
        }
        .into_descriptor()
        .unwrap();
        tool.filename = filename.to_string();
        tool.execution_kind = ExecutionKind::Script;
        tool.search_paths = search_paths.iter().map(|s| s.to_string()).collect();
        tool
    }

    /// `<tmp>/hub` as install root so `..` stays inside the temp dir.
    fn layout() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("hub");
        fs::create_dir_all(&root).unwrap();
        (temp_dir, root)
    }

    #[test]
    fn test_colocated_file() {
        let (_tmp, root) = layout();
        fs::write(root.join("x.py"), "").unwrap();

        let resolver = PathResolver::new(&root);
        let tool = script_tool("x.py", &[]);
        assert_eq!(
            resolver.resolve(&tool, &BTreeMap::new()),
            Some(root.join("x.py"))
        );
    }

    #[test]
    fn test_search_paths_in_order() {
        let (tmp, root) = layout();
        let tools_dir = tmp.path().join("Tools");
        fs::create_dir_all(&tools_dir).unwrap();
        fs::write(tools_dir.join("Editor.exe"), "").unwrap();

        let resolver = PathResolver::new(&root);
        let tool = script_tool("Editor.exe", &["..", "../Tools"]);
        let loc = resolver.locate(&tool, &BTreeMap::new()).unwrap();
        assert_eq!(loc.path, tools_dir.join("Editor.exe"));
        assert_eq!(loc.source, LocationSource::SearchPath("../Tools".into()));

        // A hit in an earlier search path wins.
        fs::write(tmp.path().join("Editor.exe"), "").unwrap();
        let loc = resolver.locate(&tool, &BTreeMap::new()).unwrap();
        assert_eq!(loc.path, tmp.path().join("Editor.exe"));
    }

    #[test]
    fn test_override_beats_colocated() {
        let (tmp, root) = layout();
        fs::write(root.join("x.py"), "").unwrap();
        let custom = tmp.path().join("elsewhere.py");
        fs::write(&custom, "").unwrap();

        let tool = script_tool("x.py", &[]);
        let mut overrides = BTreeMap::new();
        overrides.insert(tool.id.clone(), custom.clone());

        let resolver = PathResolver::new(&root);
        let loc = resolver.locate(&tool, &overrides).unwrap();
        assert_eq!(loc.path, custom);
        assert_eq!(loc.source, LocationSource::Override);
    }

    #[test]
    fn test_stale_override_falls_through() {
        let (tmp, root) = layout();
        fs::write(root.join("x.py"), "").unwrap();

        let tool = script_tool("x.py", &[]);
        let mut overrides = BTreeMap::new();
        overrides.insert(tool.id.clone(), tmp.path().join("gone.py"));

        let resolver = PathResolver::new(&root);
        assert_eq!(resolver.resolve(&tool, &overrides), Some(root.join("x.py")));
    }

    #[test]
    fn test_explicit_path_is_last_resort() {
        let (tmp, root) = layout();
        let explicit = tmp.path().join("mine.exe");
        fs::write(&explicit, "").unwrap();

        let mut tool = script_tool("", &[]);
        tool.explicit_path = Some(explicit.clone());

        let resolver = PathResolver::new(&root);
        let loc = resolver.locate(&tool, &BTreeMap::new()).unwrap();
        assert_eq!(loc.path, explicit);
        assert_eq!(loc.source, LocationSource::ExplicitPath);
    }

    #[test]
    fn test_absent_then_present() {
        let (_tmp, root) = layout();
        let resolver = PathResolver::new(&root);
        let tool = script_tool("late.py", &[]);

        assert_eq!(resolver.resolve(&tool, &BTreeMap::new()), None);
        assert_eq!(resolver.resolve(&tool, &BTreeMap::new()), None);

        fs::write(root.join("late.py"), "").unwrap();
        assert_eq!(
            resolver.resolve(&tool, &BTreeMap::new()),
            Some(root.join("late.py"))
        );
    }
}
