use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PresetsConfig;
use crate::error::{Context, Result};

pub mod presets;

pub use presets::{load_preset_list, save_preset_list, to_settings_json, Preset, Transforms};

/// Facade that keeps settings-file persistence isolated from the rest of the app.
#[derive(Debug, Clone)]
pub struct Records {
    settings_path: PathBuf,
}

impl Records {
    pub fn for_config(config: &PresetsConfig) -> Self {
        Self::with_path(config.settings_path())
    }

    pub fn with_path<P: Into<PathBuf>>(settings_path: P) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn settings_dir(&self) -> Option<&Path> {
        self.settings_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// Create the settings directory if needed. Only the last level is created;
    /// a missing plugin directory is reported as an error.
    pub fn prepare(&self) -> Result<()> {
        let Some(dir) = self.settings_dir() else {
            return Ok(());
        };
        if !dir.exists() {
            fs::create_dir(dir).with_context(|| {
                format!("Failed to create settings directory {}", dir.display())
            })?;
            log::debug!("Created settings directory {}", dir.display());
        }
        Ok(())
    }

    /// Load the stored presets, `Ok(None)` when no settings file exists yet.
    pub fn load_presets(&self) -> Result<Option<Vec<Preset>>> {
        if !self.settings_path.exists() {
            return Ok(None);
        }
        load_preset_list(&self.settings_path)
    }

    pub fn save_presets(&self, presets: &[Preset]) -> Result<()> {
        self.prepare()?;
        save_preset_list(&self.settings_path, presets)
    }
}
