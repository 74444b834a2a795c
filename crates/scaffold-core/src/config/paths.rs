//! Locations of the per-user scaffold state

use std::path::PathBuf;

const CONFIG_DIR_NAME: &str = ".scaffold";
const CONFIG_FILE_NAME: &str = "config.json";
const TEMPLATES_DIR_NAME: &str = "templates";

/// `~/.scaffold`, or None when the home directory cannot be determined
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME))
}

/// `~/.scaffold/config.json`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// `~/.scaffold/templates`
pub fn custom_templates_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(TEMPLATES_DIR_NAME))
}
