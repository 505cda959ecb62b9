//! Launchable tool descriptors.

use super::{derive_id, Localized, Origin};
use crate::config::Language;
use crate::error::{HubError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How a tool is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionKind {
    /// Interpreted script, run through the Python interpreter.
    #[serde(rename = "python", alias = "script")]
    Script,
    /// Native executable, run directly.
    #[default]
    #[serde(rename = "exe", alias = "binary")]
    Binary,
}

impl ExecutionKind {
    /// Infer the kind from a file path: `.py` is a script, anything else a binary.
    pub fn from_path(path: &Path) -> Self {
        let is_script = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("py"))
            .unwrap_or(false);
        if is_script {
            ExecutionKind::Script
        } else {
            ExecutionKind::Binary
        }
    }
}

/// One launchable external program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Derived from `name` when the stored record leaves it out.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Localized<String>,
    /// Expected executable or script file name. May be empty for user tools
    /// added without a path.
    #[serde(default)]
    pub filename: String,
    #[serde(rename = "type", default)]
    pub execution_kind: ExecutionKind,
    /// Path captured when the user registered the tool.
    #[serde(rename = "tool_path", default, skip_serializing_if = "Option::is_none")]
    pub explicit_path: Option<PathBuf>,
    /// Directories relative to the install root to probe, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<String>,
    /// Associated file extensions, each with a leading dot.
    #[serde(default)]
    pub formats: Vec<String>,
    #[serde(rename = "download", default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default)]
    pub guide_ids: Vec<String>,
    #[serde(skip)]
    pub origin: Origin,
}

impl ToolDescriptor {
    pub fn description(&self, lang: Language) -> &str {
        self.description.text(lang)
    }

    /// Whether `ext` (with or without leading dot) is one of this tool's formats.
    pub fn handles_format(&self, ext: &str) -> bool {
        let wanted = normalize_extension(ext);
        self.formats
            .iter()
            .any(|f| normalize_extension(f) == wanted)
    }

    pub fn is_builtin(&self) -> bool {
        self.origin.is_builtin()
    }
}

/// Lowercase an extension and make sure it starts with a dot.
pub(crate) fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Input of the "add tool" form.
#[derive(Debug, Clone, Default)]
pub struct NewTool {
    pub name: String,
    pub path: Option<PathBuf>,
    /// Comma-separated extensions are split by the caller; empty entries are dropped.
    pub formats: Vec<String>,
    pub description_en: Option<String>,
    pub description_de: Option<String>,
    pub download_url: Option<String>,
}

impl NewTool {
    /// Validate the form and build a user tool descriptor.
    pub fn into_descriptor(self) -> Result<ToolDescriptor> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(HubError::validation("name", "Name required"));
        }

        let path = self.path.filter(|p| !p.as_os_str().is_empty());
        let filename = path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let execution_kind = path
            .as_deref()
            .map(ExecutionKind::from_path)
            .unwrap_or_default();

        let desc_en = non_empty(self.description_en);
        let desc_de = non_empty(self.description_de);
        let description = Localized::new(
            desc_en.clone().unwrap_or_else(|| name.clone()),
            desc_de.or(desc_en).unwrap_or_else(|| name.clone()),
        );

        Ok(ToolDescriptor {
            id: derive_id(&name),
            name,
            description,
            filename,
            execution_kind,
            explicit_path: path,
            search_paths: Vec::new(),
            formats: self
                .formats
                .into_iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
            download_url: non_empty(self.download_url),
            guide_ids: Vec::new(),
            origin: Origin::User,
        })
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
