//! Wiring from configuration to the core policies.
//!
//! The core crate knows nothing about environment variables or files; this
//! module turns [`AccessConfig`] and [`GradingConfig`] into a ready
//! [`AccessPolicy`] and [`GradeAggregator`].

use campus_config::{
    AccessConfig, ConfigError, GradingConfig, GradingScheme, PermissionFile, load_permission_file,
};
use campus_core::{
    AccessPolicy, GradeAggregator, PermissionTable, SplitWithResit, WeightedMean, permissions,
};
use campus_models::Role;
use tracing::{info, warn};

/// Builds the access policy, loading the permission file named in `config`
/// when there is one.
pub fn build_access_policy(config: &AccessConfig) -> Result<AccessPolicy, ConfigError> {
    let overrides = match &config.permissions_file {
        Some(path) => {
            let file = load_permission_file(path)?;
            info!(
                path = %path.display(),
                entries = file.permissions.len(),
                "Loaded permission overrides"
            );
            Some(file)
        }
        None => None,
    };

    apply_overrides(config, overrides.as_ref())
}

/// Applies config toggles and file overrides on top of the built-in table.
///
/// Entries in the file replace the built-in entry for the same resource,
/// including `settings` when `settings_allow_admin` is also set. A landing
/// page in the file wins over the configured one.
///
/// Every role must be allowed on the landing page, since denied navigation
/// redirects there.
pub fn apply_overrides(
    config: &AccessConfig,
    file: Option<&PermissionFile>,
) -> Result<AccessPolicy, ConfigError> {
    let mut builder = PermissionTable::default_table().to_builder();

    if config.settings_allow_admin {
        builder = builder.extend(permissions::SETTINGS, &[Role::Administrator]);
    }

    let mut landing = config.default_landing.clone();

    if let Some(file) = file {
        for (resource, roles) in &file.permissions {
            builder = builder.allow(resource.trim(), roles);
        }

        if let Some(file_landing) = file
            .default_landing
            .as_deref()
            .map(|v| v.trim().trim_start_matches('/'))
            .filter(|v| !v.is_empty())
        {
            landing = file_landing.to_string();
        }
    }

    let policy = AccessPolicy::new(builder.build()).with_default_landing(landing);

    let landing = policy.default_landing().as_str();
    let denied: Vec<&str> = Role::ALL
        .into_iter()
        .filter(|role| !policy.is_allowed(*role, landing))
        .map(|role| role.name())
        .collect();

    if !denied.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "default landing page '{}' is not open to: {}",
            landing,
            denied.join(", ")
        )));
    }

    Ok(policy)
}

pub fn build_aggregator(config: &GradingConfig) -> GradeAggregator {
    match config.scheme {
        GradingScheme::Split => {
            let sum = config.ca_weight + config.final_weight;
            if (sum - 1.0).abs() > 1e-9 {
                warn!(
                    ca_weight = config.ca_weight,
                    final_weight = config.final_weight,
                    "Grading weights do not sum to 1"
                );
            }
            GradeAggregator::new(SplitWithResit::new(config.ca_weight, config.final_weight))
        }
        GradingScheme::Weighted => GradeAggregator::new(WeightedMean),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_config::parse_permission_file;
    use campus_core::permissions::{DASHBOARD, PROFILE, SETTINGS};
    use campus_models::{AssessmentRecord, CourseId, StudentId};

    #[test]
    fn test_default_config_gives_default_policy() {
        let policy = apply_overrides(&AccessConfig::default(), None).unwrap();
        assert_eq!(policy, AccessPolicy::default());
    }

    #[test]
    fn test_settings_toggle() {
        let config = AccessConfig {
            settings_allow_admin: true,
            ..AccessConfig::default()
        };
        let policy = apply_overrides(&config, None).unwrap();
        assert!(policy.is_allowed(Role::Administrator, SETTINGS));
        assert!(!policy.is_allowed(Role::Instructor, SETTINGS));
    }

    #[test]
    fn test_file_entries_replace_builtin() {
        let file = parse_permission_file(
            r#"
            default_landing = "/profile"

            [permissions]
            dashboard = ["administrator"]
            reports = ["Instructor"]
            "#,
        )
        .unwrap();

        let policy = apply_overrides(&AccessConfig::default(), Some(&file)).unwrap();
        assert!(!policy.is_allowed(Role::Student, DASHBOARD));
        assert!(policy.is_allowed(Role::Administrator, DASHBOARD));
        assert!(policy.is_allowed(Role::Instructor, "reports"));
        assert_eq!(policy.default_landing().as_str(), PROFILE);
    }

    #[test]
    fn test_landing_page_closed_to_some_roles_is_rejected() {
        let file = parse_permission_file(
            r#"
            [permissions]
            dashboard = ["administrator"]
            "#,
        )
        .unwrap();

        let err = apply_overrides(&AccessConfig::default(), Some(&file)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("Student"));
    }

    #[test]
    fn test_landing_page_without_entry_is_rejected() {
        let config = AccessConfig {
            default_landing: "reports".to_string(),
            ..AccessConfig::default()
        };
        assert!(matches!(
            apply_overrides(&config, None),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_permission_file_is_an_error() {
        let config = AccessConfig {
            permissions_file: Some("/nonexistent/campus/permissions.toml".into()),
            ..AccessConfig::default()
        };
        assert!(matches!(
            build_access_policy(&config),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_build_aggregator_by_scheme() {
        let s = StudentId::new(1);
        let c = CourseId::new(1);
        let records = [
            AssessmentRecord::continuous(s, c, 40.0).with_weight(1.0),
            AssessmentRecord::final_exam(s, c, 80.0).with_weight(3.0),
        ];

        let weighted = build_aggregator(&GradingConfig {
            scheme: GradingScheme::Weighted,
            ..GradingConfig::default()
        });
        assert!((weighted.aggregate(&records).weighted_total - 70.0).abs() < 1e-9);

        let even = build_aggregator(&GradingConfig {
            scheme: GradingScheme::Split,
            ca_weight: 0.5,
            final_weight: 0.5,
        });
        assert_eq!(even.aggregate(&records).weighted_total, 60.0);
    }
}
