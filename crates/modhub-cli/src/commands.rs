//! Subcommand definitions and their handlers.

use anyhow::Result;
use clap::Subcommand;
use modhub_core::{
    ContentSource, FileFormatEntry, GuideDescriptor, HubError, Language, ModdingHub, NewGuide,
    NewTool, Origin, Preferences, ToolDescriptor, UiString, ViewMode,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tools, optionally filtered by a search query
    Tools { query: Option<String> },

    /// Show a tool with its resolved path and related guides
    Show { id: String },

    /// Start a tool as a detached process
    Launch { id: String },

    /// Point a tool at a specific executable or script
    SetPath { id: String, path: PathBuf },

    /// Remove a tool's path override
    ResetPath { id: String },

    /// Register a custom tool
    AddTool {
        #[arg(long)]
        name: String,
        #[arg(long)]
        path: Option<PathBuf>,
        /// Comma-separated extensions, e.g. ".wd,.lnd"
        #[arg(long, value_delimiter = ',')]
        formats: Vec<String>,
        #[arg(long)]
        desc_en: Option<String>,
        #[arg(long)]
        desc_de: Option<String>,
        #[arg(long)]
        download: Option<String>,
    },

    /// List guides, optionally filtered by a search query
    Guides { query: Option<String> },

    /// Print a guide's text
    Guide {
        id: String,
        /// Language to show instead of the configured one
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Register a custom guide
    AddGuide {
        #[arg(long)]
        title_en: String,
        #[arg(long)]
        title_de: Option<String>,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Comma-separated related tool names or ids
        #[arg(long, value_delimiter = ',')]
        tools: Vec<String>,
        #[arg(long)]
        content_en: Option<String>,
        #[arg(long)]
        content_de: Option<String>,
    },

    /// Show the file-format glossary, or the entries matching a query
    Formats { query: Option<String> },

    /// Show or change preferences
    Settings {
        #[arg(long)]
        lang: Option<Language>,
        #[arg(long)]
        view: Option<ViewMode>,
        #[arg(long)]
        font_size: Option<u8>,
        #[arg(long)]
        guides_dir: Option<PathBuf>,
    },

    /// Switch between English and German
    ToggleLang,

    /// Switch between grid and list view
    ToggleView,

    /// Print found/total tool counts and guide/format totals
    Status,

    /// Print the credits page
    Credits,
}

#[derive(Serialize)]
struct ToolRow<'a> {
    #[serde(flatten)]
    tool: &'a ToolDescriptor,
    origin: Origin,
    resolved_path: Option<PathBuf>,
}

#[derive(Serialize)]
struct GuideRow<'a> {
    #[serde(flatten)]
    guide: &'a GuideDescriptor,
    origin: Origin,
}

#[derive(Serialize)]
struct GuideText<'a> {
    id: &'a str,
    title: &'a str,
    lang: Language,
    source: String,
    text: &'a str,
}

#[derive(Serialize)]
struct SettingsView {
    lang: Language,
    view_mode: ViewMode,
    font_size: u8,
    guides_dir: PathBuf,
    config_path: PathBuf,
}

/// Execute `command` against `hub`, writing the result to `out`.
pub fn run(hub: &mut ModdingHub, command: Command, json: bool, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Tools { query } => {
            let tools = match query.as_deref() {
                Some(q) => hub.search_tools(q),
                None => hub.all_tools(),
            };
            list_tools(hub, &tools, json, out)
        }
        Command::Show { id } => show_tool(hub, &id, json, out),
        Command::Launch { id } => {
            let started = hub.launch_tool(&id)?;
            if json {
                write_json(
                    out,
                    &serde_json::json!({ "id": id, "pid": started.pid, "path": started.target }),
                )
            } else {
                writeln!(out, "{} (PID {})", started.target.display(), started.pid)?;
                Ok(())
            }
        }
        Command::SetPath { id, path } => {
            hub.set_tool_path(&id, path)?;
            show_tool(hub, &id, json, out)
        }
        Command::ResetPath { id } => {
            if !hub.clear_tool_path(&id)? {
                writeln!(out, "{id}: no path override set")?;
            }
            Ok(())
        }
        Command::AddTool {
            name,
            path,
            formats,
            desc_en,
            desc_de,
            download,
        } => {
            let tool = hub.add_user_tool(NewTool {
                name,
                path,
                formats,
                description_en: desc_en,
                description_de: desc_de,
                download_url: download,
            })?;
            show_tool(hub, &tool.id, json, out)
        }
        Command::Guides { query } => {
            let guides = match query.as_deref() {
                Some(q) => hub.search_guides(q),
                None => hub.all_guides(),
            };
            list_guides(hub, &guides, json, out)
        }
        Command::Guide { id, lang } => {
            let guide = hub
                .lookup_guide(&id)
                .ok_or_else(|| HubError::UnknownGuide { id: id.clone() })?;
            let lang = lang.unwrap_or_else(|| hub.language());
            let content = hub.guide_content_in(&guide, lang);
            if json {
                write_json(
                    out,
                    &GuideText {
                        id: &guide.id,
                        title: guide.title(lang),
                        lang,
                        source: describe_source(&content.source),
                        text: &content.text,
                    },
                )
            } else {
                writeln!(out, "{}\n", guide.title(lang))?;
                writeln!(out, "{}", content.text.trim_end())?;
                Ok(())
            }
        }
        Command::AddGuide {
            title_en,
            title_de,
            tags,
            tools,
            content_en,
            content_de,
        } => {
            let guide = hub.add_user_guide(NewGuide {
                title_en,
                title_de,
                tags,
                tools,
                content_en,
                content_de,
            })?;
            list_guides(hub, std::slice::from_ref(&guide), json, out)
        }
        Command::Formats { query } => {
            let lang = hub.language();
            let formats: Vec<&FileFormatEntry> = match query.as_deref() {
                Some(q) => match hub.lookup_format(q) {
                    Some(entry) => vec![entry],
                    None => {
                        let q = q.trim().to_lowercase();
                        hub.file_formats().iter().filter(|f| f.matches(&q, lang)).collect()
                    }
                },
                None => hub.file_formats().iter().collect(),
            };
            if json {
                return write_json(out, &formats);
            }
            if formats.is_empty() {
                writeln!(out, "{}", hub.ui_text(UiString::NoResults))?;
            }
            for entry in formats {
                writeln!(out, "{:<6} {}", entry.extension, entry.description(lang))?;
            }
            Ok(())
        }
        Command::Settings {
            lang,
            view,
            font_size,
            guides_dir,
        } => {
            let prefs = Preferences {
                lang,
                view_mode: view,
                font_size,
                guides_dir,
            };
            if !prefs.is_empty() {
                hub.update_preferences(&prefs)?;
            }
            show_settings(hub, json, out)
        }
        Command::ToggleLang => {
            hub.toggle_language()?;
            show_settings(hub, json, out)
        }
        Command::ToggleView => {
            hub.toggle_view_mode()?;
            show_settings(hub, json, out)
        }
        Command::Status => {
            let status = hub.status();
            if json {
                return write_json(out, &status);
            }
            writeln!(
                out,
                "{} {}: {}/{}  |  {}: {}  |  {}: {}",
                hub.ui_text(UiString::Tools),
                hub.ui_text(UiString::Found),
                status.found_tools,
                status.total_tools,
                hub.ui_text(UiString::Guides),
                status.guides,
                hub.ui_text(UiString::Formats),
                status.formats
            )?;
            Ok(())
        }
        Command::Credits => {
            writeln!(out, "{}", hub.credits().trim_end())?;
            Ok(())
        }
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn origin_label(hub: &ModdingHub, origin: Origin) -> &'static str {
    match origin {
        Origin::Builtin => hub.ui_text(UiString::Builtin),
        Origin::User => hub.ui_text(UiString::Custom),
        Origin::AutoDiscovered => hub.ui_text(UiString::Discovered),
    }
}

fn describe_source(source: &ContentSource) -> String {
    match source {
        ContentSource::File(path) => format!("file:{}", path.display()),
        ContentSource::Embedded => "embedded".to_string(),
        ContentSource::Fallback => "fallback".to_string(),
        ContentSource::NotFound => "not_found".to_string(),
    }
}

fn list_tools(
    hub: &ModdingHub,
    tools: &[ToolDescriptor],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if json {
        let rows: Vec<ToolRow<'_>> = tools
            .iter()
            .map(|tool| ToolRow {
                tool,
                origin: tool.origin,
                resolved_path: hub.resolve_tool(tool),
            })
            .collect();
        return write_json(out, &rows);
    }

    if tools.is_empty() {
        writeln!(out, "{}", hub.ui_text(UiString::NoResults))?;
        return Ok(());
    }
    for tool in tools {
        let state = if hub.resolve_tool(tool).is_some() {
            UiString::Found
        } else {
            UiString::NotFound
        };
        writeln!(
            out,
            "{:<15} {:<15} {} [{}]",
            hub.ui_text(state),
            tool.id,
            tool.name,
            origin_label(hub, tool.origin)
        )?;
    }
    Ok(())
}

fn show_tool(hub: &ModdingHub, id: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let tool = hub
        .lookup_tool(id)
        .ok_or_else(|| HubError::UnknownTool { id: id.to_string() })?;
    let location = hub.locate_tool(&tool);

    if json {
        return write_json(
            out,
            &ToolRow {
                tool: &tool,
                origin: tool.origin,
                resolved_path: location.map(|l| l.path),
            },
        );
    }

    let lang = hub.language();
    writeln!(out, "{} [{}]", tool.name, origin_label(hub, tool.origin))?;
    writeln!(out, "{}: {}", hub.ui_text(UiString::Description), tool.description(lang))?;
    match location {
        Some(loc) => writeln!(
            out,
            "{}: {} ({:?})",
            hub.ui_text(UiString::Path),
            loc.path.display(),
            loc.source
        )?,
        None => writeln!(
            out,
            "{}: {} ({})",
            hub.ui_text(UiString::Path),
            hub.ui_text(UiString::NotFound),
            tool.filename
        )?,
    }
    if !tool.formats.is_empty() {
        writeln!(
            out,
            "{}: {}",
            hub.ui_text(UiString::Formats),
            tool.formats.join(", ")
        )?;
    }
    if let Some(url) = &tool.download_url {
        writeln!(out, "{}: {}", hub.ui_text(UiString::Download), url)?;
    }

    let related = hub.related_guides(&tool);
    if !related.is_empty() {
        writeln!(out, "{}:", hub.ui_text(UiString::RelatedGuides))?;
        for guide in related {
            writeln!(out, "  {:<24} {}", guide.id, guide.title(lang))?;
        }
    }
    Ok(())
}

fn list_guides(
    hub: &ModdingHub,
    guides: &[GuideDescriptor],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if json {
        let rows: Vec<GuideRow<'_>> = guides
            .iter()
            .map(|guide| GuideRow {
                guide,
                origin: guide.origin,
            })
            .collect();
        return write_json(out, &rows);
    }

    if guides.is_empty() {
        writeln!(out, "{}", hub.ui_text(UiString::NoResults))?;
        return Ok(());
    }
    let lang = hub.language();
    for guide in guides {
        writeln!(
            out,
            "{:<24} {} [{}]",
            guide.id,
            guide.title(lang),
            origin_label(hub, guide.origin)
        )?;
    }
    Ok(())
}

fn show_settings(hub: &ModdingHub, json: bool, out: &mut impl Write) -> Result<()> {
    let config = hub.config();
    let view = SettingsView {
        lang: config.lang,
        view_mode: config.view_mode,
        font_size: config.font_size,
        guides_dir: hub.guides_dir(),
        config_path: hub.config_path().to_path_buf(),
    };
    if json {
        return write_json(out, &view);
    }
    writeln!(out, "lang        {}", view.lang)?;
    writeln!(out, "view_mode   {}", view.view_mode.as_str())?;
    writeln!(out, "font_size   {}", view.font_size)?;
    writeln!(out, "guides_dir  {}", view.guides_dir.display())?;
    writeln!(out, "config      {}", view.config_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_to_string(hub: &mut ModdingHub, command: Command, json: bool) -> String {
        let mut out = Vec::new();
        run(hub, command, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_status_json() {
        let temp_dir = TempDir::new().unwrap();
        let mut hub = ModdingHub::open(temp_dir.path()).unwrap();

        let text = run_to_string(&mut hub, Command::Status, true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["found_tools"], 0);
        assert_eq!(value["total_tools"], hub.all_tools().len());
    }

    #[test]
    fn test_add_tool_then_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut hub = ModdingHub::open(temp_dir.path()).unwrap();

        run_to_string(
            &mut hub,
            Command::AddTool {
                name: "Map Packer".into(),
                path: None,
                formats: vec![".wd".into()],
                desc_en: None,
                desc_de: None,
                download: None,
            },
            false,
        );

        let text = run_to_string(&mut hub, Command::Tools { query: Some("packer".into()) }, false);
        assert!(text.contains("map_packer"));
        assert!(text.contains("[Custom]"));
    }

    #[test]
    fn test_guide_shows_embedded_text() {
        let temp_dir = TempDir::new().unwrap();
        let mut hub = ModdingHub::open(temp_dir.path()).unwrap();

        let text = run_to_string(
            &mut hub,
            Command::Guide {
                id: "physx_cooking".into(),
                lang: Some(Language::En),
            },
            false,
        );
        assert!(text.starts_with("PhysX Cooking Reference"));
        assert!(text.contains("PHYSX COOKING REFERENCE"));
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let temp_dir = TempDir::new().unwrap();
        let mut hub = ModdingHub::open(temp_dir.path()).unwrap();
        let mut out = Vec::new();

        assert!(run(&mut hub, Command::Show { id: "nope".into() }, false, &mut out).is_err());
        assert!(run(
            &mut hub,
            Command::Guide {
                id: "nope".into(),
                lang: None
            },
            false,
            &mut out
        )
        .is_err());
    }

    #[test]
    fn test_formats_lookup_and_search() {
        let temp_dir = TempDir::new().unwrap();
        let mut hub = ModdingHub::open(temp_dir.path()).unwrap();

        let text = run_to_string(&mut hub, Command::Formats { query: Some("WD".into()) }, false);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with(".wd"));

        let text = run_to_string(&mut hub, Command::Formats { query: Some("xyzzy".into()) }, false);
        assert_eq!(text.trim(), "No results found.");
    }
}
