//! Integration tests for the ModdingHub public interface.
//!
//! Each test builds a throwaway install root so path resolution, guide
//! discovery and persistence run against a real filesystem.

use std::fs;
use std::path::PathBuf;

use modhub_core::{
    ContentSource, GuideDescriptor, HubError, Language, Localized, LocationSource, ModdingHub,
    NewGuide, NewTool, Origin, Preferences, ViewMode,
};
use tempfile::TempDir;

/// `<tmp>/hub` as install root, so `..` search paths stay inside the temp dir.
fn create_test_env() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("hub");
    fs::create_dir_all(root.join("guides")).unwrap();
    (temp_dir, root)
}

#[test]
fn test_hub_creation_fails_for_nonexistent_root() {
    let result = ModdingHub::open("/nonexistent/path/that/does/not/exist");
    assert!(matches!(result, Err(HubError::Config { .. })));
}

#[test]
fn test_fresh_install_defaults() {
    let (_tmp, root) = create_test_env();
    let hub = ModdingHub::open(&root).unwrap();

    assert_eq!(hub.install_root(), root);
    assert_eq!(hub.config_path(), root.join("tw1_modding_hub.json"));
    assert_eq!(hub.guides_dir(), root.join("guides"));
    assert_eq!(hub.language(), Language::En);
    assert!(hub.all_tools().iter().all(|t| t.origin == Origin::Builtin));
}

#[test]
fn test_colocated_script_resolves_to_install_root() {
    let (_tmp, root) = create_test_env();
    fs::write(root.join("tw1_lan_viewer.py"), "").unwrap();
    let hub = ModdingHub::open(&root).unwrap();

    let tool = hub.lookup_tool("lan_viewer").unwrap();
    let location = hub.locate_tool(&tool).unwrap();
    assert_eq!(location.path, root.join("tw1_lan_viewer.py"));
    assert_eq!(location.source, LocationSource::InstallRoot);
}

#[test]
fn test_editor_found_in_sibling_tools_dir() {
    let (tmp, root) = create_test_env();
    let tools_dir = tmp.path().join("Tools");
    fs::create_dir_all(&tools_dir).unwrap();
    fs::write(tools_dir.join("TwoWorldsEditor.exe"), "").unwrap();
    let hub = ModdingHub::open(&root).unwrap();

    let editor = hub.lookup_tool("tw_editor").unwrap();
    assert_eq!(
        hub.resolve_tool(&editor),
        Some(tools_dir.join("TwoWorldsEditor.exe"))
    );
}

#[test]
fn test_missing_guide_file_falls_back_to_embedded_text() {
    let (_tmp, root) = create_test_env();
    let hub = ModdingHub::open(&root).unwrap();

    let guide = GuideDescriptor {
        id: "g".into(),
        title: Localized::both("G".to_string()),
        file: Localized::both(Some("does_not_exist.txt".to_string())),
        content: Localized::both(Some("hello".to_string())),
        ..Default::default()
    };
    assert_eq!(hub.guide_content(&guide), "hello");
}

#[test]
fn test_builtin_guide_prefers_file_in_guides_dir() {
    let (_tmp, root) = create_test_env();
    let hub = ModdingHub::open(&root).unwrap();
    let guide = hub.lookup_guide("dungeon_guide_part1").unwrap();

    let before = hub.guide_content_in(&guide, Language::En);
    assert_eq!(before.source, ContentSource::Fallback);
    assert!(before.text.contains("dungeon_guide_part1_en.txt"));

    fs::write(root.join("guides/dungeon_guide_part1_en.txt"), "Step 1").unwrap();
    let after = hub.guide_content_in(&guide, Language::En);
    assert_eq!(after.text, "Step 1");

    // The registered file is not rediscovered as a loose guide.
    assert!(hub.all_guides().iter().all(|g| !g.is_auto_discovered()));
}

#[test]
fn test_user_entries_survive_restart() {
    let (tmp, root) = create_test_env();
    let packer = tmp.path().join("packer.exe");
    fs::write(&packer, "").unwrap();

    {
        let mut hub = ModdingHub::open(&root).unwrap();
        let tool = hub
            .add_user_tool(NewTool {
                name: "WD Packer".into(),
                path: Some(packer.clone()),
                formats: vec![".wd".into()],
                description_en: Some("Packs archives".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(tool.id, "wd_packer");
        assert_eq!(tool.description(Language::De), "Packs archives");

        hub.add_user_guide(NewGuide {
            title_en: "Packing Notes".into(),
            tools: vec!["WD Packer".into()],
            content_en: Some("Select the folder.".into()),
            ..Default::default()
        })
        .unwrap();

        hub.update_preferences(&Preferences {
            lang: Some(Language::De),
            view_mode: Some(ViewMode::List),
            font_size: Some(30),
            ..Default::default()
        })
        .unwrap();
    }

    let hub = ModdingHub::open(&root).unwrap();
    assert_eq!(hub.language(), Language::De);
    assert_eq!(hub.config().view_mode, ViewMode::List);
    assert_eq!(hub.config().font_size, 18);

    let tool = hub.lookup_tool("wd_packer").unwrap();
    assert_eq!(tool.origin, Origin::User);
    assert_eq!(hub.resolve_tool(&tool), Some(packer));

    let guide = hub.lookup_guide("packing_notes").unwrap();
    assert_eq!(guide.tool_ids, vec!["wd_packer".to_string()]);
    assert_eq!(hub.guide_content(&guide), "Select the folder.");
}

#[test]
fn test_override_beats_colocated_file() {
    let (tmp, root) = create_test_env();
    fs::write(root.join("tw1_par_tool.py"), "").unwrap();
    fs::write(root.join("tw1param_gui.py"), "").unwrap();
    let custom = tmp.path().join("my_par_gui.py");
    fs::write(&custom, "").unwrap();

    let mut hub = ModdingHub::open(&root).unwrap();
    let tool = hub.lookup_tool("par_tool").unwrap();
    assert_eq!(hub.resolve_tool(&tool), Some(root.join("tw1param_gui.py")));

    hub.set_tool_path("par_tool", &custom).unwrap();
    let location = hub.locate_tool(&tool).unwrap();
    assert_eq!(location.path, custom);
    assert_eq!(location.source, LocationSource::Override);

    hub.clear_tool_path("par_tool").unwrap();
    assert_eq!(hub.resolve_tool(&tool), Some(root.join("tw1param_gui.py")));
}

#[test]
fn test_discovered_guide_disappears_once_registered() {
    let (_tmp, root) = create_test_env();
    fs::write(root.join("guides/modding_notes_en.txt"), "English notes").unwrap();
    fs::write(root.join("guides/modding_notes_de.txt"), "Deutsche Notizen").unwrap();

    let hub = ModdingHub::open(&root).unwrap();
    let auto = hub.lookup_guide("auto_modding_notes").unwrap();
    assert_eq!(auto.title(Language::En), "Modding Notes");
    assert_eq!(
        hub.guide_content_in(&auto, Language::De).text,
        "Deutsche Notizen"
    );
    drop(hub);

    // Register the English file by hand; only the German file stays loose.
    fs::write(
        root.join("tw1_modding_hub.json"),
        r#"{
            "user_guides": [
                {"id": "notes", "title": {"en": "Notes"}, "file": {"en": "modding_notes_en.txt"}}
            ]
        }"#,
    )
    .unwrap();

    let hub = ModdingHub::open(&root).unwrap();
    let notes = hub.lookup_guide("notes").unwrap();
    assert_eq!(notes.origin, Origin::User);
    assert_eq!(hub.guide_content(&notes), "English notes");

    let auto = hub.lookup_guide("auto_modding_notes").unwrap();
    assert_eq!(auto.file.declared(Language::En), Some("modding_notes_de.txt"));
}

#[test]
fn test_guides_dir_variant_detected() {
    let (_tmp, root) = create_test_env();
    fs::remove_dir(root.join("guides")).unwrap();
    fs::create_dir(root.join("Guids")).unwrap();
    fs::write(root.join("Guids/terrain_tips.md"), "Tips").unwrap();

    let hub = ModdingHub::open(&root).unwrap();
    assert_eq!(hub.guides_dir(), root.join("Guids"));
    assert!(hub.lookup_guide("auto_terrain_tips").is_some());
}

#[test]
fn test_status_counts() {
    let (_tmp, root) = create_test_env();
    fs::write(root.join("tw1_lan_viewer.py"), "").unwrap();
    fs::write(root.join("guides/extra.txt"), "extra").unwrap();
    let hub = ModdingHub::open(&root).unwrap();

    let status = hub.status();
    assert_eq!(status.found_tools, 1);
    assert_eq!(status.total_tools, hub.all_tools().len());
    assert_eq!(status.guides, hub.all_guides().len());
    assert_eq!(status.formats, hub.file_formats().len());
}

#[test]
fn test_launch_errors() {
    let (_tmp, root) = create_test_env();
    let hub = ModdingHub::open(&root).unwrap();

    assert!(matches!(
        hub.launch_tool("no_such_tool"),
        Err(HubError::UnknownTool { .. })
    ));
    match hub.launch_tool("wd_repacker") {
        Err(HubError::ToolNotFound { filename }) => assert_eq!(filename, "Tw1WDRepacker.exe"),
        other => panic!("expected ToolNotFound, got {other:?}"),
    }
}

#[test]
fn test_search_uses_active_language() {
    let (_tmp, root) = create_test_env();
    let mut hub = ModdingHub::open(&root).unwrap();

    assert!(hub.search_guides("kochen").is_empty());
    hub.toggle_language().unwrap();
    let found = hub.search_guides("kochen");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "physx_cooking");
}
