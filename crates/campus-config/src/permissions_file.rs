//! Permission table overrides loaded from TOML.
//!
//! Each listed resource replaces the built-in entry for that resource. Role
//! names may be written as display names or slugs.
//!
//! ```toml
//! default_landing = "dashboard"
//!
//! [permissions]
//! settings = ["Super Admin", "Administrator"]
//! reports = ["administrator"]
//! ```

use campus_models::Role;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermissionFile {
    pub default_landing: Option<String>,
    #[serde(default)]
    pub permissions: BTreeMap<String, Vec<Role>>,
}

/// Parses permission overrides from a TOML string.
pub fn parse_permission_file(content: &str) -> Result<PermissionFile, ConfigError> {
    let file: PermissionFile = toml::from_str(content)?;

    if let Some(resource) = file.permissions.keys().find(|k| k.trim().is_empty()) {
        return Err(ConfigError::Invalid(format!(
            "resource name must not be blank (got '{}')",
            resource
        )));
    }

    Ok(file)
}

/// Loads permission overrides from a TOML file.
pub fn load_permission_file(path: impl AsRef<Path>) -> Result<PermissionFile, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_permission_file(&content)
}
