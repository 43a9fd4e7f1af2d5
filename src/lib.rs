pub mod app;
pub mod config;
pub mod error;
pub mod host;
pub mod menu;
pub mod records;
pub mod ui;
pub mod utils;

pub use app::{PresetStore, PresetsController};
pub use error::{AppError, Result};
pub use records::{Preset, Transforms};
