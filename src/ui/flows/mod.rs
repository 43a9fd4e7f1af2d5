pub mod presets_menu;
pub mod save_preset;

pub use presets_menu::TerminalMenuHost;
pub use save_preset::{run_save_preset_dialog, TerminalPresetDialog};
