use log::{error, info, warn};

use crate::app::state::PresetStore;
use crate::error::{AppError, Result};
use crate::host::{ColorManagement, MenuHost, PresetDialog};
use crate::menu::{MenuAction, Menus};
use crate::records::{Preset, Transforms};
use crate::utils::normalize_preset_name;

/// Adapter between the preset store and the host: color pipeline, menu registry and name prompt.
///
/// Persistence failures are logged here and never reach the user; the in-memory
/// list stays authoritative for the rest of the session.
pub struct PresetsController<C, M, D> {
    store: PresetStore,
    color: C,
    menu_host: M,
    dialog: D,
}

impl<C, M, D> PresetsController<C, M, D>
where
    C: ColorManagement,
    M: MenuHost,
    D: PresetDialog,
{
    pub fn new(store: PresetStore, color: C, menu_host: M, dialog: D) -> Self {
        Self {
            store,
            color,
            menu_host,
            dialog,
        }
    }

    /// Load the settings file and publish the initial menus.
    pub fn start(&mut self) {
        if let Err(err) = self.store.load_settings() {
            error!("An error occurred while loading the preset list: {err:#}");
        }
        self.refresh_menus();
    }

    pub fn store(&self) -> &PresetStore {
        &self.store
    }

    pub fn color(&self) -> &C {
        &self.color
    }

    pub fn menu_host(&self) -> &M {
        &self.menu_host
    }

    pub fn menu_host_mut(&mut self) -> &mut M {
        &mut self.menu_host
    }

    pub fn current_config(&self) -> String {
        let config = self.color.ocio_config();
        info!("Current OCIO config: {config}");
        config
    }

    pub fn current_transforms(&self) -> Transforms {
        Transforms::new(
            self.color.ocio_ics(),
            self.color.ocio_view(),
            self.color.ocio_look(),
        )
    }

    /// Capture the active transforms and store them under a name from the dialog.
    /// The name is stored trimmed of surrounding whitespace, and a blank name is
    /// treated like a dismissed dialog. Returns `Ok(None)` in both of those cases.
    pub fn save_preset(&mut self) -> Result<Option<Preset>> {
        let transforms = self.current_transforms();

        let name = match self.dialog.prompt_preset_name() {
            Ok(Some(raw)) => match normalize_preset_name(&raw) {
                Some(name) => name,
                None => return Ok(None),
            },
            Ok(None) | Err(AppError::Cancelled) => return Ok(None),
            Err(err) => return Err(err),
        };

        let preset = self.store.add_preset(name, transforms).clone();
        info!("Saved preset `{}` (#{})", preset.name, preset.order);
        self.persist();
        self.refresh_menus();
        Ok(Some(preset))
    }

    /// Push a preset's transforms to the host: IDT, then ODT, then Look.
    /// A failing setter stops the sequence and leaves earlier ones applied.
    pub fn apply_preset(&mut self, display_name: &str) -> Result<()> {
        let transforms = self.store.transforms_from_name(display_name)?;

        self.color.set_ocio_ics(&transforms.idt)?;
        self.color.set_ocio_view(&transforms.odt)?;
        self.color.set_ocio_look(&transforms.look)?;

        info!("Applied preset `{display_name}`");
        Ok(())
    }

    /// Remove the first matching preset. The list is persisted and menus refreshed
    /// even when nothing matched.
    pub fn remove_preset(&mut self, display_name: &str) -> Option<Preset> {
        let removed = match self.store.remove_preset(display_name) {
            Ok(preset) => {
                info!("Removed preset `{display_name}`");
                Some(preset)
            }
            Err(err) => {
                warn!("Nothing removed: {err}");
                None
            }
        };

        self.persist();
        self.refresh_menus();
        removed
    }

    pub fn menus(&self) -> Menus {
        Menus::for_presets(&self.store.preset_names())
    }

    pub fn refresh_menus(&mut self) {
        let menus = self.menus();
        self.menu_host.publish(menus);
    }

    /// Run the operation bound to a menu entry.
    pub fn dispatch(&mut self, action: &MenuAction) -> Result<()> {
        match action {
            MenuAction::ApplyPreset(name) => self.apply_preset(name),
            MenuAction::ShowCurrentConfig => {
                self.current_config();
                Ok(())
            }
            MenuAction::SavePreset => self.save_preset().map(|_| ()),
            MenuAction::RemovePreset(name) => {
                self.remove_preset(name);
                Ok(())
            }
        }
    }

    fn persist(&self) {
        if let Err(err) = self.store.save_settings() {
            error!("An error occurred while saving the preset list: {err:#}");
        }
    }
}
