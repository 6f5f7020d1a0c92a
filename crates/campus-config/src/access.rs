//! Access policy configuration.
//!
//! # Environment Variables
//!
//! - `CAMPUS_DEFAULT_LANDING`: Resource unauthorized users land on (default: `dashboard`)
//! - `CAMPUS_SETTINGS_ALLOW_ADMIN`: Let administrators open settings (default: `false`)
//! - `CAMPUS_PERMISSIONS_FILE`: Optional TOML file overriding permission entries

use std::path::PathBuf;

use crate::{env_lookup, parse_bool};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    pub default_landing: String,
    pub settings_allow_admin: bool,
    pub permissions_file: Option<PathBuf>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            default_landing: "dashboard".to_string(),
            settings_allow_admin: false,
            permissions_file: None,
        }
    }
}

impl AccessConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            default_landing: lookup("CAMPUS_DEFAULT_LANDING")
                .map(|v| v.trim().trim_start_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.default_landing),
            settings_allow_admin: lookup("CAMPUS_SETTINGS_ALLOW_ADMIN")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.settings_allow_admin),
            permissions_file: lookup("CAMPUS_PERMISSIONS_FILE").map(PathBuf::from),
        }
    }
}
