//! Builtin guide catalog.
//!
//! Most guides live as text files in the guides directory and carry a short
//! fallback note; two reference cards are embedded.

use crate::models::{GuideDescriptor, Localized, Origin};

/// Where a builtin guide's text comes from.
enum GuideSource {
    File {
        en: &'static str,
        de: &'static str,
        fallback_en: &'static str,
        fallback_de: &'static str,
    },
    Embedded {
        en: &'static str,
        de: &'static str,
    },
}

/// The guides shipped with the hub, in display order.
pub fn builtin_guides() -> Vec<GuideDescriptor> {
    vec![
        builtin_guide(
            "editor_beginner_guide",
            "Editor Beginner Guide",
            "Editor Einsteiger-Handbuch",
            &["editor", "shortcuts", "objects", "markers", "terrain", "textures", "console", "beginner"],
            &["cmd_injector", "tw_editor", "modding_guide"],
            GuideSource::File {
                en: "editor_beginner_guide_en.txt",
                de: "editor_beginner_guide_de.txt",
                fallback_en: "Complete editor reference with Quick Start section. Place 'editor_beginner_guide_en.txt' in the guides/ folder.",
                fallback_de: "Komplette Editor-Referenz mit Schnellstart-Abschnitt. Die Datei 'editor_beginner_guide_de.txt' im guides/-Ordner ablegen.",
            },
        ),
        builtin_guide(
            "dungeon_guide_part1",
            "Dungeon Guide Part 1 — Manual Method",
            "Dungeon-Guide Teil 1 — Manuelle Methode",
            &["dungeon", "underground", "cave", "entrance", "markers", "manual"],
            &["tw_editor", "cmd_injector"],
            GuideSource::File {
                en: "dungeon_guide_part1_en.txt",
                de: "dungeon_guide_part1_de.txt",
                fallback_en: "Manual dungeon creation using the main editor. Place 'dungeon_guide_part1_en.txt' in the guides/ folder.",
                fallback_de: "Manuelle Dungeon-Erstellung im Haupteditor. Die Datei 'dungeon_guide_part1_de.txt' im guides/-Ordner ablegen.",
            },
        ),
        builtin_guide(
            "dungeon_guide_part2",
            "Dungeon Guide Part 2 — SDK Dungeon Editor",
            "Dungeon-Guide Teil 2 — SDK Dungeon-Editor",
            &["dungeon", "underground", "cave", "sdk", "blocks", "dungeon editor"],
            &["tw_editor"],
            GuideSource::File {
                en: "dungeon_guide_part2_en.txt",
                de: "dungeon_guide_part2_de.txt",
                fallback_en: "Block-based dungeon creation with the SDK tool. Place 'dungeon_guide_part2_en.txt' in the guides/ folder.",
                fallback_de: "Blockbasierte Dungeon-Erstellung mit dem SDK-Tool. Die Datei 'dungeon_guide_part2_de.txt' im guides/-Ordner ablegen.",
            },
        ),
        builtin_guide(
            "map_to_mod_guide",
            "Map-to-Mod Conversion Guide",
            "Map-zu-Mod Konvertierungsguide",
            &["mod", "wd", "pack", "physx", "registry", "levelheaders", "rename", "conversion"],
            &["cmd_injector", "modding_guide", "mod_selector", "wd_repacker"],
            GuideSource::File {
                en: "map_to_mod_guide_en.txt",
                de: "map_to_mod_guide_de.txt",
                fallback_en: "Complete mod conversion workflow. Place 'map_to_mod_guide_en.txt' in the guides/ folder.",
                fallback_de: "Kompletter Mod-Konvertierungs-Workflow. Die Datei 'map_to_mod_guide_de.txt' im guides/-Ordner ablegen.",
            },
        ),
        builtin_guide(
            "physx_cooking",
            "PhysX Cooking Reference",
            "PhysX-Kochen Referenz",
            &["physx", "physics", "cooking", "console", "commands", "phx"],
            &["cmd_injector", "tw_editor"],
            GuideSource::Embedded {
                en: include_str!("content/physx_cooking_en.txt"),
                de: include_str!("content/physx_cooking_de.txt"),
            },
        ),
        builtin_guide(
            "format_overview",
            "File Format Overview",
            "Dateiformat-Uebersicht",
            &["format", "wd", "lan", "par", "lnd", "phx", "idx", "qtx", "shf", "lhc", "bmp", "vdf"],
            &["lan_viewer", "quest_editor", "par_tool", "vdf_tool", "lnd_viewer", "wd_repacker"],
            GuideSource::Embedded {
                en: include_str!("content/format_overview_en.txt"),
                de: include_str!("content/format_overview_de.txt"),
            },
        ),
    ]
}

fn builtin_guide(
    id: &str,
    title_en: &str,
    title_de: &str,
    tags: &[&str],
    tool_ids: &[&str],
    source: GuideSource,
) -> GuideDescriptor {
    let some = |s: &str| Some(s.to_string());
    let (file, content, fallback) = match source {
        GuideSource::File {
            en,
            de,
            fallback_en,
            fallback_de,
        } => (
            Localized::new(some(en), some(de)),
            Localized::default(),
            Localized::new(some(fallback_en), some(fallback_de)),
        ),
        GuideSource::Embedded { en, de } => (
            Localized::default(),
            Localized::new(some(en), some(de)),
            Localized::default(),
        ),
    };

    GuideDescriptor {
        id: id.to_string(),
        title: Localized::new(title_en.to_string(), title_de.to_string()),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        tool_ids: tool_ids.iter().map(|s| s.to_string()).collect(),
        file,
        content,
        fallback,
        origin: Origin::Builtin,
    }
}
