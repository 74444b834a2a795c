//! User configuration persisted as JSON in `~/.scaffold/config.json`

pub mod paths;

use crate::error::{Result, ScaffoldError};
use crate::templates::placeholders::DEFAULT_MODULE_PREFIX;
use crate::templates::License;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use paths::{config_dir, config_file, custom_templates_dir};

/// Settings read once at startup
///
/// Missing fields fall back to their defaults so older or hand-written files
/// keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub author: String,
    pub default_license: String,
    pub module_prefix: String,
    pub auto_git: bool,
    pub auto_install: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            default_license: License::Mit.display_name().to_string(),
            module_prefix: DEFAULT_MODULE_PREFIX.to_string(),
            auto_git: true,
            auto_install: false,
        }
    }
}

impl UserConfig {
    /// Keys accepted by [`UserConfig::set`]
    pub const KEYS: [&'static str; 5] = [
        "author",
        "default_license",
        "module_prefix",
        "auto_git",
        "auto_install",
    ];

    /// Load from the default location, falling back to defaults on any failure
    pub fn load() -> Self {
        match config_file() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`; a missing, unreadable or malformed file yields defaults
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        let path = config_file().ok_or_else(|| {
            ScaffoldError::io(
                "locate",
                Path::new("~/.scaffold/config.json"),
                std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found"),
            )
        })?;
        self.save_to(&path)
    }

    /// Write pretty-printed JSON to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ScaffoldError::io("create directory", parent, e))?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            ScaffoldError::io("serialize", path, std::io::Error::other(e))
        })?;
        fs::write(path, content).map_err(|e| ScaffoldError::io("write", path, e))
    }

    /// Update one field from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "author" => self.author = value.trim().to_string(),
            "default_license" => {
                let license: License = value.parse()?;
                self.default_license = license.display_name().to_string();
            }
            "module_prefix" => {
                let prefix = value.trim().trim_end_matches('/');
                if prefix.is_empty() {
                    return Err(invalid(key, "must not be empty"));
                }
                self.module_prefix = prefix.to_string();
            }
            "auto_git" => self.auto_git = parse_bool(key, value)?,
            "auto_install" => self.auto_install = parse_bool(key, value)?,
            _ => {
                return Err(invalid(
                    key,
                    &format!("unknown key (expected one of: {})", Self::KEYS.join(", ")),
                ))
            }
        }
        Ok(())
    }

    /// Configured default license; unrecognised values fall back to MIT
    pub fn license(&self) -> License {
        License::parse(&self.default_license).unwrap_or_default()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(
            key,
            &format!("'{}' is not a boolean (use true/false)", value),
        )),
    }
}

fn invalid(key: &str, reason: &str) -> ScaffoldError {
    ScaffoldError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
