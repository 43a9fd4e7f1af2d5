pub mod components;
pub mod flows;
pub mod navigation;
pub mod styles;

pub use components::TerminalSession;
pub use flows::{run_save_preset_dialog, TerminalMenuHost, TerminalPresetDialog};
pub use navigation::UiRoute;
