//! License choices and their LICENSE file texts

use crate::error::ScaffoldError;
use std::fmt;
use std::str::FromStr;

/// License offered by `init` and the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum License {
    #[default]
    #[value(name = "mit")]
    Mit,
    #[value(name = "apache-2.0")]
    Apache2,
    #[value(name = "gpl-3.0")]
    Gpl3,
    #[value(name = "none")]
    None,
}

impl License {
    /// Wizard order
    pub const ALL: [License; 4] = [License::Mit, License::Apache2, License::Gpl3, License::None];

    /// Canonical spelling, as stored in the config file
    pub fn display_name(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache 2.0",
            License::Gpl3 => "GPL 3.0",
            License::None => "None",
        }
    }

    /// Case-insensitive parse accepting the display name or the short id
    pub fn parse(s: &str) -> Option<License> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "mit" => Some(License::Mit),
            "apache2.0" | "apache2" | "apache" => Some(License::Apache2),
            "gpl3.0" | "gpl3" | "gpl" => Some(License::Gpl3),
            "none" | "" => Some(License::None),
            _ => None,
        }
    }

    /// LICENSE file body with placeholders, or None when no file is written
    pub fn text(&self) -> Option<&'static str> {
        match self {
            License::Mit => Some(include_str!("../../assets/licenses/MIT.tmpl")),
            License::Apache2 => Some(include_str!("../../assets/licenses/Apache-2.0.tmpl")),
            License::Gpl3 => Some(include_str!("../../assets/licenses/GPL-3.0.tmpl")),
            License::None => None,
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for License {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        License::parse(s).ok_or_else(|| ScaffoldError::InvalidSetting {
            key: "default_license".to_string(),
            reason: format!(
                "unknown license '{}' (expected one of: MIT, Apache 2.0, GPL 3.0, None)",
                s
            ),
        })
    }
}
