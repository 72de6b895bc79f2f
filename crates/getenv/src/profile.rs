//! Profile selection for `.env` loading.
//!
//! Responsibilities:
//! - Define the `Profile` selector and its file name mapping.
//! - Parse profile names from strings (e.g. an `APP_PROFILE` variable or CLI flag).
//!
//! Does NOT handle:
//! - Resolving the profile file against a directory (see `loader::builder`).
//!
//! Invariants:
//! - Each profile maps to exactly one file name.
//! - The textual name round-trips through `Display`, `FromStr` and serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_FILE_NAME, DEVELOPMENT_FILE_NAME, PRODUCTION_FILE_NAME};
use crate::loader::LoadError;

/// Named configuration context selecting which file is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// `.env`
    #[default]
    Default,
    /// `.env.development`
    Development,
    /// `.env.production`
    Production,
}

impl Profile {
    /// Every profile, in declaration order.
    pub const ALL: [Profile; 3] = [Profile::Default, Profile::Development, Profile::Production];

    /// Name of the file this profile reads, relative to the base directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Profile::Default => DEFAULT_FILE_NAME,
            Profile::Development => DEVELOPMENT_FILE_NAME,
            Profile::Production => PRODUCTION_FILE_NAME,
        }
    }

    /// Lowercase profile name used by `Display`, `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Default => "default",
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Profile::ALL
            .into_iter()
            .find(|profile| profile.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| LoadError::UnknownProfile(name.to_string()))
    }
}
