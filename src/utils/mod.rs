pub mod text;

pub use text::{menu_display_name, normalize_preset_name};
