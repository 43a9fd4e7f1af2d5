use std::env;
use std::path::{Path, PathBuf};

use crate::records::Transforms;

pub const SETTINGS_DIR_NAME: &str = "OCIO_Presets";
pub const SETTINGS_FILE_NAME: &str = "ocioPresetsConfig.json";

pub const PLUGIN_DIR_ENV: &str = "OCIO_PRESETS_PLUGIN_DIR";
pub const SESSION_CONFIG_ENV: &str = "OCIO_PRESETS_CONFIG";
pub const SESSION_IDT_ENV: &str = "OCIO_PRESETS_IDT";
pub const SESSION_ODT_ENV: &str = "OCIO_PRESETS_ODT";
pub const SESSION_LOOK_ENV: &str = "OCIO_PRESETS_LOOK";

/// Color state the standalone session starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub config: String,
    pub transforms: Transforms,
}

#[derive(Debug, Clone)]
pub struct PresetsConfig {
    pub plugin_dir: PathBuf,
    pub settings_dir_name: String,
    pub settings_file_name: String,
    pub session: SessionDefaults,
}

impl PresetsConfig {
    /// Defaults rooted next to the running executable.
    pub fn builtin() -> Self {
        let plugin_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::for_plugin_dir(plugin_dir)
    }

    pub fn for_plugin_dir(plugin_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugin_dir: plugin_dir.into(),
            settings_dir_name: SETTINGS_DIR_NAME.to_string(),
            settings_file_name: SETTINGS_FILE_NAME.to_string(),
            session: SessionDefaults {
                config: "ocio://default".to_string(),
                transforms: Transforms::new(
                    "ACES - ACEScg",
                    "sRGB - Display / ACES 1.0 - SDR Video",
                    "None",
                ),
            },
        }
    }

    /// Builtin defaults with the process environment applied on top.
    pub fn from_env() -> Self {
        Self::builtin().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key/value source; blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = get(PLUGIN_DIR_ENV) {
            self.plugin_dir = PathBuf::from(dir);
        }
        if let Some(config) = get(SESSION_CONFIG_ENV) {
            self.session.config = config;
        }
        if let Some(idt) = get(SESSION_IDT_ENV) {
            self.session.transforms.idt = idt;
        }
        if let Some(odt) = get(SESSION_ODT_ENV) {
            self.session.transforms.odt = odt;
        }
        if let Some(look) = get(SESSION_LOOK_ENV) {
            self.session.transforms.look = look;
        }
        self
    }

    pub fn settings_dir(&self) -> PathBuf {
        self.plugin_dir.join(&self.settings_dir_name)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.settings_dir().join(&self.settings_file_name)
    }
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
