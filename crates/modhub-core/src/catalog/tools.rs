//! Builtin tool catalog.

use crate::models::{ExecutionKind, Localized, Origin, ToolDescriptor};

/// The tools shipped with the hub, in display order.
pub fn builtin_tools() -> Vec<ToolDescriptor> {
    vec![
        builtin_tool(
            "cmd_injector",
            "TW Editor CMD Injector",
            "tw_editor_cmd_injector.py",
            ExecutionKind::Script,
            &[],
            &[],
            "https://github.com/MedievalDev/TwoWorldsEditor_Command_Injector",
            &["editor_beginner_guide", "physx_cooking"],
            "Injects commands into the Two Worlds Editor console. Categorized command database with search, multi-command execution via .txt lists, auto-detection of editor window.",
            "Injiziert Befehle in die Two Worlds Editor-Konsole. Kategorisierte Command-Datenbank mit Suche, Multi-Command-Ausführung über .txt-Listen, Auto-Erkennung des Editor-Fensters.",
        ),
        builtin_tool(
            "lan_viewer",
            "TW1 LAN Viewer",
            "tw1_lan_viewer.py",
            ExecutionKind::Script,
            &[],
            &[".lan"],
            "https://github.com/MedievalDev/Twor-Worlds-Dialog-Viewer-Editor",
            &["format_overview"],
            "View and search .lan language files. Chat-style dialog view, full-text search, compare mode. Part of the Dialog Viewer/Editor repository.",
            "Anzeigen und Durchsuchen von .lan-Sprachdateien. Chat-Ansicht, Volltextsuche, Vergleichsmodus. Teil des Dialog Viewer/Editor Repositories.",
        ),
        builtin_tool(
            "quest_editor",
            "TW1 Quest Editor",
            "tw1_quest_editor.py",
            ExecutionKind::Script,
            &[],
            &[".idx", ".qtx", ".shf"],
            "https://github.com/MedievalDev/Twor-Worlds-Dialog-Viewer-Editor",
            &["format_overview"],
            "Edit .idx/.qtx quest data and .shf WhizzEdit projects. Quest tree editing, NPC assignments, dialog structures. Part of the Dialog Viewer/Editor repository.",
            "Bearbeiten von .idx/.qtx Quest-Daten und .shf WhizzEdit-Projekten. Quest-Baum-Bearbeitung, NPC-Zuweisungen, Dialog-Strukturen. Teil des Dialog Viewer/Editor Repositories.",
        ),
        builtin_tool(
            "par_tool",
            "TW1 PAR Tool",
            "tw1param_gui.py",
            ExecutionKind::Script,
            &[],
            &[".par"],
            "https://github.com/MedievalDev/TwoWorlds_PAR_Editor",
            &["format_overview"],
            "Convert TwoWorlds.par between binary and JSON. Tree view of all groups/entries, inline editing, GUID management, hex view, file comparison. Full import/export roundtrip.",
            "Konvertiert TwoWorlds.par zwischen Binär und JSON. Baumansicht aller Gruppen/Einträge, Inline-Editing, GUID-Verwaltung, Hex-Ansicht, Dateivergleich. Vollständiger Import/Export.",
        ),
        builtin_tool(
            "vdf_tool",
            "TW1 VDF In/Export Tool",
            "tw1_vdf_tool.py",
            ExecutionKind::Script,
            &[],
            &[".vdf"],
            "https://github.com/MedievalDev/Two-Worlds-VDF-In-Export-Tool",
            &[],
            "Import and export Two Worlds .vdf 3D model files. View mesh geometry, textures and animations. Convert between VDF and standard formats.",
            "Import und Export von Two Worlds .vdf 3D-Modelldateien. Mesh-Geometrie, Texturen und Animationen anzeigen. Konvertierung zwischen VDF und Standardformaten.",
        ),
        builtin_tool(
            "lnd_viewer",
            "TW1 LND Viewer",
            "tw1_lnd_viewer.py",
            ExecutionKind::Script,
            &[],
            &[".lnd"],
            "https://github.com/MedievalDev/Twor-Worlds-LND-Viewer",
            &["editor_beginner_guide"],
            "View Two Worlds .lnd level/map files. Inspect terrain heightmaps, textures, object placements and map tile data.",
            "Two Worlds .lnd Level/Map-Dateien anzeigen. Terrain-Heightmaps, Texturen, Objekt-Platzierungen und Map-Tile-Daten inspizieren.",
        ),
        builtin_tool(
            "modding_guide",
            "TW1 Modding Guide",
            "tw1_modding_guide.py",
            ExecutionKind::Script,
            &[],
            &[],
            "https://github.com/MedievalDev/Two-Worlds-Modding-Guid",
            &["map_to_mod_guide", "editor_beginner_guide"],
            "Interactive step-by-step guide for new TW1 modders. Walks through SDK setup, editor usage, map creation, PhysX cooking, mod packaging and activation.",
            "Interaktiver Schritt-für-Schritt-Guide für neue TW1-Modder. Führt durch SDK-Setup, Editor-Benutzung, Map-Erstellung, PhysX-Kochen, Mod-Verpackung und Aktivierung.",
        ),
        builtin_tool(
            "tw_editor",
            "TwoWorlds Editor",
            "TwoWorldsEditor.exe",
            ExecutionKind::Binary,
            &["..", "../Tools"],
            &[".lnd"],
            "https://www.moddb.com/games/two-worlds/downloads",
            &["editor_beginner_guide", "dungeon_guide_part1", "dungeon_guide_part2"],
            "The official Two Worlds SDK map/level editor. Create and edit map tiles, place objects, NPCs, terrain, and structures. Console accessible via 'C' key.",
            "Der offizielle Two Worlds SDK Map/Level-Editor. Map-Tiles erstellen und bearbeiten, Objekte, NPCs, Terrain und Strukturen platzieren. Konsole über 'C'-Taste erreichbar.",
        ),
        builtin_tool(
            "whizzedit",
            "WhizzEdit",
            "WhizzEdit.exe",
            ExecutionKind::Binary,
            &["..", "../Tools"],
            &[".shf", ".idx"],
            "https://www.moddb.com/games/two-worlds/downloads",
            &[],
            "Reality Pump's quest authoring tool from the SDK. Views quest trees, dialog structures, NPC assignments. Barely runs on modern systems. Use our LAN Viewer and Quest Editor instead.",
            "Reality Pumps Quest-Erstellungstool aus dem SDK. Zeigt Quest-Bäume, Dialog-Strukturen, NPC-Zuweisungen. Läuft kaum auf modernen Systemen. Lieber unseren LAN Viewer und Quest Editor nutzen.",
        ),
        builtin_tool(
            "mod_selector",
            "Mod Selector (Buglord)",
            "TwoWorlds1 Mod Selector_ madebyBuglord.exe",
            ExecutionKind::Binary,
            &[],
            &[".wd"],
            "https://github.com/MedievalDev/Two-Worlds-Modding-Guid/blob/main/Guid/TwoWorlds1%20Mod%20Selector_%20madebyBuglord.exe",
            &["map_to_mod_guide"],
            "Buglord's tool to toggle mods on/off via Windows registry. Place in game directory, run, press Enter to switch mods between active (green) and inactive (red).",
            "Buglords Tool zum Aktivieren/Deaktivieren von Mods über die Windows-Registry. Ins Spielverzeichnis legen, starten, Enter drücken zum Umschalten zwischen aktiv (grün) und inaktiv (rot).",
        ),
        builtin_tool(
            "wd_repacker",
            "WD Repacker (Buglord)",
            "Tw1WDRepacker.exe",
            ExecutionKind::Binary,
            &[],
            &[".wd"],
            "https://www.moddb.com/games/two-worlds/downloads",
            &["map_to_mod_guide"],
            "Buglord's GUI tool for packing/unpacking .wd archives. IMPORTANT: Select the FOLDER as source, not a .wd file! Correctly handles .phx files (uncompressed).",
            "Buglords GUI-Tool zum Packen/Entpacken von .wd-Archiven. WICHTIG: Den ORDNER als Source wählen, nicht eine .wd-Datei! Behandelt .phx-Dateien korrekt (unkomprimiert).",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn builtin_tool(
    id: &str,
    name: &str,
    filename: &str,
    execution_kind: ExecutionKind,
    search_paths: &[&str],
    formats: &[&str],
    download_url: &str,
    guide_ids: &[&str],
    description_en: &str,
    description_de: &str,
) -> ToolDescriptor {
    ToolDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: Localized::new(description_en.to_string(), description_de.to_string()),
        filename: filename.to_string(),
        execution_kind,
        explicit_path: None,
        search_paths: search_paths.iter().map(|s| s.to_string()).collect(),
        formats: formats.iter().map(|s| s.to_string()).collect(),
        download_url: Some(download_url.to_string()),
        guide_ids: guide_ids.iter().map(|s| s.to_string()).collect(),
        origin: Origin::Builtin,
    }
}
