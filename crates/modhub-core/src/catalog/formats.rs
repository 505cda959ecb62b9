//! File-format glossary.

use crate::models::{FileFormatEntry, Localized};

/// Every documented game file format, in display order.
pub static FILE_FORMATS: &[FileFormatEntry] = &[
    FileFormatEntry {
        extension: ".wd",
        description: Localized {
            en: "WD Archive — Two Worlds mod container format. Contains packed game files (maps, physics, textures). Compressed with zlib, directory at end of file. Version 0x200 for TW1. GUID identifies each archive. .phx files must NOT be compressed inside.",
            de: "WD-Archiv — Two Worlds Mod-Containerformat. Enthält gepackte Spieldateien (Maps, Physik, Texturen). Zlib-komprimiert, Verzeichnis am Dateiende. Version 0x200 für TW1. GUID identifiziert jedes Archiv. .phx-Dateien dürfen NICHT komprimiert werden.",
        },
    },
    FileFormatEntry {
        extension: ".lan",
        description: Localized {
            en: "LAN Language File — Binary file containing all localized game text. Three sections: translations (16,194 entries), aliases (215 redirects), quest dialog trees (583 quests, 9,799 entries). UTF-16-LE encoded strings with 'translate' prefix keys.",
            de: "LAN-Sprachdatei — Binärdatei mit allen lokalisierten Spieltexten. Drei Abschnitte: Übersetzungen (16.194 Einträge), Aliase (215 Weiterleitungen), Quest-Dialogbäume (583 Quests, 9.799 Einträge). UTF-16-LE kodierte Strings mit 'translate'-Präfix.",
        },
    },
    FileFormatEntry {
        extension: ".par",
        description: Localized {
            en: "PAR Parameter File — Central binary database containing all item definitions, NPC stats, creatures, skills, weapons, armor. Compressed with zlib. Contains groups with typed entries (int32, float, uint32, string + arrays). GUID in header.",
            de: "PAR-Parameterdatei — Zentrale Binär-Datenbank mit allen Item-Definitionen, NPC-Stats, Kreaturen, Skills, Waffen, Rüstungen. Zlib-komprimiert. Enthält Gruppen mit typisierten Einträgen (int32, float, uint32, string + Arrays). GUID im Header.",
        },
    },
    FileFormatEntry {
        extension: ".lnd",
        description: Localized {
            en: "LND Level/Map File — Contains terrain heightmap, textures, object placements, NPC spawns, and all map tile data. Zlib-compressed. Each tile is 128x128. Files named Map_F01.lnd etc. Editor saves with 's' suffix (Map_F01s.lnd).",
            de: "LND Level/Map-Datei — Enthält Terrain-Heightmap, Texturen, Objekt-Platzierungen, NPC-Spawns und alle Map-Tile-Daten. Zlib-komprimiert. Jedes Tile ist 128x128. Dateien heißen Map_F01.lnd etc. Editor speichert mit 's'-Suffix (Map_F01s.lnd).",
        },
    },
    FileFormatEntry {
        extension: ".vdf",
        description: Localized {
            en: "VDF 3D Model File — Two Worlds proprietary 3D model format. Contains mesh geometry, textures, animations. Created by Maya plugins or TreesGenerator. Can be used as terrain stamps in the editor.",
            de: "VDF 3D-Modelldatei — Two Worlds proprietäres 3D-Modellformat. Enthält Mesh-Geometrie, Texturen, Animationen. Wird von Maya-Plugins oder TreesGenerator erstellt. Kann als Terrain-Stempel im Editor verwendet werden.",
        },
    },
    FileFormatEntry {
        extension: ".phx",
        description: Localized {
            en: "PHX Physics File — Collision data for map tiles. Generated by cooking PhysX in the editor (4 console commands). Must NOT be compressed when packed into .wd archives or the game will crash.",
            de: "PHX-Physikdatei — Kollisionsdaten für Map-Tiles. Wird durch PhysX-Kochen im Editor erzeugt (4 Konsolenbefehle). Darf beim Packen in .wd-Archive NICHT komprimiert werden, sonst crasht das Spiel.",
        },
    },
    FileFormatEntry {
        extension: ".lhc",
        description: Localized {
            en: "LHC LevelHeaders Cache — Index file containing header information of all map files. Generated by LevelHeadersCacheGen.bat / MeshParamsGen.exe. Must be regenerated after every map change.",
            de: "LHC LevelHeaders-Cache — Indexdatei mit Header-Informationen aller Map-Dateien. Wird durch LevelHeadersCacheGen.bat / MeshParamsGen.exe erzeugt. Muss nach jeder Map-Änderung neu generiert werden.",
        },
    },
    FileFormatEntry {
        extension: ".idx",
        description: Localized {
            en: "IDX Quest Data (SOAP-XML) — Full quest data export from WhizzEdit. Contains complete quest trees, NPC definitions, dialog structures, quest logic (GIVER, FC, AOQ, ACTION, REWARD). Recommended format for quest editing.",
            de: "IDX Quest-Daten (SOAP-XML) — Vollständiger Quest-Datenexport aus WhizzEdit. Enthält komplette Quest-Bäume, NPC-Definitionen, Dialog-Strukturen, Quest-Logik (GIVER, FC, AOQ, ACTION, REWARD). Empfohlenes Format zum Quest-Editieren.",
        },
    },
    FileFormatEntry {
        extension: ".qtx",
        description: Localized {
            en: "QTX Quest Logic (Plaintext) — Compiled quest logic for the game engine. Contains NPC definitions, quest parameters, actions, rewards. No dialog text (that's in .lan). OBJECTS field can carry item drop lists.",
            de: "QTX Quest-Logik (Klartext) — Kompilierte Quest-Logik für die Game-Engine. Enthält NPC-Definitionen, Quest-Parameter, Aktionen, Belohnungen. Kein Dialog-Text (der ist in .lan). OBJECTS-Feld kann Item-Drop-Listen enthalten.",
        },
    },
    FileFormatEntry {
        extension: ".shf",
        description: Localized {
            en: "SHF WhizzEdit Project — Binary .NET BinaryFormatter format. WhizzEdit's native project files (one per folder). Contains 23,329 strings. Read-only in our tools — use .idx for editing.",
            de: "SHF WhizzEdit-Projekt — Binäres .NET BinaryFormatter-Format. WhizzEdits native Projektdateien (eine pro Ordner). Enthält 23.329 Strings. Nur lesbar in unseren Tools — .idx zum Editieren verwenden.",
        },
    },
    FileFormatEntry {
        extension: ".bmp",
        description: Localized {
            en: "BMP Minimap Image — Minimap bitmap for each map tile. Saved alongside .lnd files. Must be renamed (remove 's' suffix) when creating mods, just like .lnd and .phx files.",
            de: "BMP Minimap-Bild — Minimap-Bitmap für jedes Map-Tile. Wird neben .lnd-Dateien gespeichert. Muss beim Mod-Erstellen umbenannt werden ('s'-Suffix entfernen), genau wie .lnd und .phx.",
        },
    },
];

/// Look up a glossary entry by extension, with or without the leading dot,
/// ignoring case.
pub fn lookup_format(extension: &str) -> Option<&'static FileFormatEntry> {
    let wanted = crate::models::normalize_extension(extension);
    FILE_FORMATS.iter().find(|f| f.extension == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;

    #[test]
    fn test_lookup_format() {
        let lan = lookup_format("LAN").unwrap();
        assert_eq!(lan.extension, ".lan");
        assert!(lookup_format(".phx").is_some());
        assert!(lookup_format(".exe").is_none());
    }

    #[test]
    fn test_matches_description_in_language() {
        let phx = lookup_format(".phx").unwrap();
        assert!(phx.matches("collision", Language::En));
        assert!(phx.matches("kollision", Language::De));
        assert!(!phx.matches("collision", Language::De));
    }

    #[test]
    fn test_glossary_size() {
        assert_eq!(FILE_FORMATS.len(), 11);
    }
}
