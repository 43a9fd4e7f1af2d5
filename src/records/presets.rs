use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Context, Result};
use crate::utils::menu_display_name;

/// The three transform identifiers a preset captures, opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transforms {
    #[serde(rename = "IDT")]
    pub idt: String,
    #[serde(rename = "ODT")]
    pub odt: String,
    #[serde(rename = "Look")]
    pub look: String,
}

impl Transforms {
    pub fn new(idt: impl Into<String>, odt: impl Into<String>, look: impl Into<String>) -> Self {
        Self {
            idt: idt.into(),
            odt: odt.into(),
            look: look.into(),
        }
    }
}

/// A named snapshot of color transforms, stored as one object of the settings array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub order: i64,
    pub name: String,
    #[serde(flatten)]
    pub transforms: Transforms,
}

impl Preset {
    pub fn new(order: i64, name: impl Into<String>, transforms: Transforms) -> Self {
        Self {
            order,
            name: name.into(),
            transforms,
        }
    }

    /// Name as shown in menus; `/` would otherwise open a submenu.
    pub fn display_name(&self) -> String {
        menu_display_name(&self.name)
    }

    pub fn matches_display_name(&self, display_name: &str) -> bool {
        self.display_name() == display_name
    }
}

/// Render the preset list the way it is stored on disk: a pretty array indented by four spaces.
pub fn to_settings_json(presets: &[Preset]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    presets
        .serialize(&mut serializer)
        .context("Failed to serialize preset list")?;
    let json = String::from_utf8(buffer).context("Serialized preset list is not UTF-8")?;
    Ok(json)
}

/// Overwrite `path` with the full preset list.
pub fn save_preset_list(path: &Path, presets: &[Preset]) -> Result<()> {
    let json = to_settings_json(presets)?;

    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create settings file {:?}", path))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write settings file {:?}", path))?;

    Ok(())
}

/// Read the preset list from `path`. `Ok(None)` means the file does not exist yet.
pub fn load_preset_list(path: &Path) -> Result<Option<Vec<Preset>>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("Failed to read settings file {:?}", path))
                .into())
        }
    };

    let presets = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse settings file {:?}", path))?;
    Ok(Some(presets))
}
