use std::path::PathBuf;
use std::process::ExitCode;

use log::error;

use ocio_presets::config::PresetsConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = PresetsConfig::from_env();
    if let Some(plugin_dir) = std::env::args_os().nth(1) {
        config.plugin_dir = PathBuf::from(plugin_dir);
    }

    match ocio_presets::app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
