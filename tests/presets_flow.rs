use std::collections::VecDeque;
use std::fs;

use ocio_presets::config::PresetsConfig;
use ocio_presets::host::{ColorManagement, ColorSession, MenuHost, PresetDialog};
use ocio_presets::menu::{MenuAction, Menus};
use ocio_presets::records::Records;
use ocio_presets::{PresetStore, PresetsController, Result, Transforms};

#[derive(Default)]
struct Published(Vec<Menus>);

impl MenuHost for Published {
    fn publish(&mut self, menus: Menus) {
        self.0.push(menus);
    }
}

struct Answers(VecDeque<Option<String>>);

impl PresetDialog for Answers {
    fn prompt_preset_name(&mut self) -> Result<Option<String>> {
        Ok(self.0.pop_front().flatten())
    }
}

fn controller(
    config: &PresetsConfig,
    session: ColorSession,
    names: &[&str],
) -> PresetsController<ColorSession, Published, Answers> {
    let answers = names.iter().map(|name| Some(name.to_string())).collect();
    let mut controller = PresetsController::new(
        PresetStore::new(Records::for_config(config)),
        session,
        Published::default(),
        Answers(answers),
    );
    controller.start();
    controller
}

#[test]
fn presets_survive_a_restart() {
    let plugin_dir = tempfile::tempdir().expect("tempdir");
    let config = PresetsConfig::for_plugin_dir(plugin_dir.path());
    assert!(!config.settings_dir().exists());

    let mut first = controller(
        &config,
        ColorSession::new("studio.ocio", Transforms::new("ACEScg", "sRGB", "None")),
        &["Shots/Day", "Night"],
    );
    first.save_preset().expect("save day");
    first.save_preset().expect("save night");
    let saved = first.store().presets().to_vec();

    assert!(config.settings_path().exists());
    let raw = fs::read_to_string(config.settings_path()).expect("read settings");
    assert!(raw.contains("\n        \"IDT\": \"ACEScg\""));

    let second = controller(
        &config,
        ColorSession::new("studio.ocio", Transforms::default()),
        &[],
    );
    assert_eq!(second.store().presets(), saved.as_slice());
    assert_eq!(second.store().preset_names(), vec!["Shots-Day", "Night"]);
    assert_eq!(second.store().next_preset_number(), 3);
}

#[test]
fn menu_selection_drives_the_session() {
    let plugin_dir = tempfile::tempdir().expect("tempdir");
    let config = PresetsConfig::for_plugin_dir(plugin_dir.path());
    let mut controller = controller(
        &config,
        ColorSession::new("studio.ocio", Transforms::new("Raw", "Rec.709", "Warm")),
        &["X"],
    );

    controller.dispatch(&MenuAction::SavePreset).expect("save");
    let menus = controller.menu_host().0.last().expect("published").clone();
    assert_eq!(
        menus.paths(),
        vec![
            "OCIO/Presets/X",
            "OCIO/Current OCIO Config",
            "OCIO/Save Preset",
            "OCIO/Remove Preset/X",
        ]
    );

    assert_eq!(controller.current_config(), "studio.ocio");

    let apply = menus.get("OCIO/Presets/X").expect("apply entry").clone();
    controller.dispatch(&apply).expect("apply");
    assert_eq!(controller.color().ocio_view(), "Rec.709");

    let remove = menus.get("OCIO/Remove Preset/X").expect("remove entry").clone();
    controller.dispatch(&remove).expect("remove");
    assert!(controller.store().is_empty());
    assert!(controller
        .dispatch(&apply)
        .expect_err("preset is gone")
        .is_not_found());
}

#[test]
fn corrupt_settings_start_empty() {
    let plugin_dir = tempfile::tempdir().expect("tempdir");
    let config = PresetsConfig::for_plugin_dir(plugin_dir.path());
    fs::create_dir(config.settings_dir()).expect("mkdir");
    fs::write(config.settings_path(), "not json").expect("write");

    let controller = controller(
        &config,
        ColorSession::new("cfg", Transforms::default()),
        &[],
    );

    assert!(controller.store().is_empty());
    assert_eq!(controller.menu_host().0.len(), 1);
}
