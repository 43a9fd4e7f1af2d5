use log::{error, info};

use crate::app::{controller::PresetsController, state::PresetStore};
use crate::config::PresetsConfig;
use crate::error::Result;
use crate::host::{ColorManagement, ColorSession};
use crate::records::Records;
use crate::ui::{TerminalMenuHost, TerminalPresetDialog};

/// Entry point used by `main`: wire the store to a terminal host and serve menu selections.
pub fn run(config: PresetsConfig) -> Result<()> {
    let records = Records::for_config(&config);
    info!("Using preset settings at {}", records.settings_path().display());

    let mut controller = PresetsController::new(
        PresetStore::new(records),
        ColorSession::from_defaults(&config.session),
        TerminalMenuHost::default(),
        TerminalPresetDialog,
    );
    controller.start();

    loop {
        let config_name = controller.color().ocio_config();
        let transforms = controller.current_transforms();
        let Some(action) = controller
            .menu_host_mut()
            .run_menu(&config_name, &transforms)?
        else {
            return Ok(());
        };

        if let Err(err) = controller.dispatch(&action) {
            error!("{err:#}");
        }
    }
}
