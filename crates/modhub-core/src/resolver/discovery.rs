//! Guide auto-discovery.
//!
//! Loose `.txt`/`.md` files in the guides directory that no registered guide
//! references become guides of their own. Files named `<topic>_en` and
//! `<topic>_de` are paired into one guide; a file without a language suffix
//! counts as English. Discovered guides are a view of the directory and are
//! recomputed on every registry read.

use crate::config::{Language, PathsConfig};
use crate::models::{GuideDescriptor, Localized, Origin};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Synthesize guides for unregistered files in `guides_dir`.
///
/// `known` are the guides already in the registry; any file they reference
/// (compared case-insensitively) is skipped. The result is ordered by topic.
pub fn discover(guides_dir: &Path, known: &[GuideDescriptor]) -> Vec<GuideDescriptor> {
    let known_files: HashSet<String> = known
        .iter()
        .flat_map(|g| g.referenced_files())
        .map(str::to_lowercase)
        .collect();

    let mut candidates = list_candidates(guides_dir);
    candidates.retain(|name| !known_files.contains(&name.to_lowercase()));
    candidates.sort();

    let mut topics: BTreeMap<String, Localized<Option<String>>> = BTreeMap::new();
    for name in candidates {
        let (base, lang) = split_language(&name);
        let files = topics.entry(base).or_default();
        if files.get(lang).is_none() {
            files.set(lang, Some(name));
        }
    }

    let discovered: Vec<GuideDescriptor> = topics
        .into_iter()
        .map(|(base, files)| synthesize(&base, files))
        .collect();

    debug!(
        "Discovered {} guides in {}",
        discovered.len(),
        guides_dir.display()
    );
    discovered
}

/// File names in `dir` with a guide extension. A missing or unreadable
/// directory yields nothing.
fn list_candidates(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if dir.exists() {
                warn!("Failed to list guides directory {}: {}", dir.display(), e);
            }
            return Vec::new();
        }
    };

    entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| has_guide_extension(name))
        .collect()
}

fn has_guide_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PathsConfig::GUIDE_EXTENSIONS
                .iter()
                .any(|wanted| ext.eq_ignore_ascii_case(wanted))
        })
        .unwrap_or(false)
}

/// Topic key and language of a guide file name. The `_en`/`_de` suffix match
/// is case-sensitive; unsuffixed names are English. A stem that is nothing
/// but a suffix (`_en.txt`) keeps the whole stem as key.
fn split_language(name: &str) -> (String, Language) {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);

    for lang in Language::ALL {
        match stem.strip_suffix(lang.file_suffix()) {
            Some(base) if !base.is_empty() => return (base.to_string(), lang),
            _ => {}
        }
    }
    (stem.to_string(), Language::En)
}

fn synthesize(base: &str, mut files: Localized<Option<String>>) -> GuideDescriptor {
    // A single variant serves both languages.
    match (&files.en, &files.de) {
        (Some(en), None) => files.de = Some(en.clone()),
        (None, Some(de)) => files.en = Some(de.clone()),
        _ => {}
    }

    GuideDescriptor {
        id: format!("{}{}", PathsConfig::AUTO_GUIDE_PREFIX, base.to_lowercase()),
        title: Localized::both(title_from_base(base)),
        tags: tags_from_base(base),
        tool_ids: Vec::new(),
        file: files,
        content: Localized::default(),
        fallback: Localized::default(),
        origin: Origin::AutoDiscovered,
    }
}

/// `map_to-mod` becomes `Map To Mod`. A base made only of separators is
/// used as is.
fn title_from_base(base: &str) -> String {
    let title = base
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    if title.is_empty() {
        base.to_string()
    } else {
        title
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn tags_from_base(base: &str) -> Vec<String> {
    base.replace('-', "_")
        .split('_')
        .filter(|token| token.chars().count() > 2)
        .map(str::to_lowercase)
        .collect()
}

/// Pick the guides directory to read from.
///
/// The configured directory wins when it exists. Otherwise the conventional
/// folder spellings under `install_root` are probed in order; if none exists
/// the configured path is kept so the front end can still show it.
pub fn detect_guides_dir(configured: &Path, install_root: &Path) -> PathBuf {
    if configured.is_dir() {
        return configured.to_path_buf();
    }

    for variant in PathsConfig::GUIDES_DIR_VARIANTS {
        let candidate = install_root.join(variant);
        if candidate.is_dir() {
            debug!(
                "Guides directory {} missing, using {}",
                configured.display(),
                candidate.display()
            );
            return candidate;
        }
    }

    configured.to_path_buf()
}
