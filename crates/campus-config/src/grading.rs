//! Grading configuration.
//!
//! # Environment Variables
//!
//! - `CAMPUS_GRADING_SCHEME`: `split` (CA/final split with resit override) or
//!   `weighted` (per-record weighted mean). Default: `split`
//! - `CAMPUS_CA_WEIGHT`: CA share of the split (default: `0.3`)
//! - `CAMPUS_FINAL_WEIGHT`: Final exam share of the split (default: `0.7`)

use std::fmt;
use std::str::FromStr;

use crate::env_lookup;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradingScheme {
    #[default]
    Split,
    Weighted,
}

impl FromStr for GradingScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "split" => Ok(GradingScheme::Split),
            "weighted" => Ok(GradingScheme::Weighted),
            other => Err(format!("unknown grading scheme: '{}'", other)),
        }
    }
}

impl fmt::Display for GradingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradingScheme::Split => f.write_str("split"),
            GradingScheme::Weighted => f.write_str("weighted"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradingConfig {
    pub scheme: GradingScheme,
    pub ca_weight: f64,
    pub final_weight: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            scheme: GradingScheme::Split,
            ca_weight: 0.3,
            final_weight: 0.7,
        }
    }
}

fn parse_weight(value: String) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
}

impl GradingConfig {
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
            scheme: lookup("CAMPUS_GRADING_SCHEME")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.scheme),
            ca_weight: lookup("CAMPUS_CA_WEIGHT")
                .and_then(parse_weight)
                .unwrap_or(defaults.ca_weight),
            final_weight: lookup("CAMPUS_FINAL_WEIGHT")
                .and_then(parse_weight)
                .unwrap_or(defaults.final_weight),
        }
    }
}
