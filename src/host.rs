//! Seams to the application hosting the presets: its color pipeline, its menu
//! registry and the prompt used to name a new preset.

use crate::config::SessionDefaults;
use crate::error::Result;
use crate::menu::Menus;
use crate::records::Transforms;

/// Process-wide color-management state owned by the host.
pub trait ColorManagement {
    /// Identifier of the active OCIO configuration.
    fn ocio_config(&self) -> String;
    fn ocio_ics(&self) -> String;
    fn ocio_view(&self) -> String;
    fn ocio_look(&self) -> String;

    fn set_ocio_ics(&mut self, ics: &str) -> Result<()>;
    fn set_ocio_view(&mut self, view: &str) -> Result<()>;
    fn set_ocio_look(&mut self, look: &str) -> Result<()>;
}

/// Receives the full menu mapping every time it is rebuilt.
pub trait MenuHost {
    fn publish(&mut self, menus: Menus);
}

/// Blocking prompt for a preset name. `Ok(None)` means the user dismissed it.
pub trait PresetDialog {
    fn prompt_preset_name(&mut self) -> Result<Option<String>>;
}

/// In-memory color state used when no real player is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSession {
    config: String,
    transforms: Transforms,
}

impl ColorSession {
    pub fn new(config: impl Into<String>, transforms: Transforms) -> Self {
        Self {
            config: config.into(),
            transforms,
        }
    }

    pub fn from_defaults(defaults: &SessionDefaults) -> Self {
        Self::new(defaults.config.clone(), defaults.transforms.clone())
    }

    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }
}

impl ColorManagement for ColorSession {
    fn ocio_config(&self) -> String {
        self.config.clone()
    }

    fn ocio_ics(&self) -> String {
        self.transforms.idt.clone()
    }

    fn ocio_view(&self) -> String {
        self.transforms.odt.clone()
    }

    fn ocio_look(&self) -> String {
        self.transforms.look.clone()
    }

    fn set_ocio_ics(&mut self, ics: &str) -> Result<()> {
        self.transforms.idt = ics.to_string();
        Ok(())
    }

    fn set_ocio_view(&mut self, view: &str) -> Result<()> {
        self.transforms.odt = view.to_string();
        Ok(())
    }

    fn set_ocio_look(&mut self, look: &str) -> Result<()> {
        self.transforms.look = look.to_string();
        Ok(())
    }
}
