//! Input policy configuration.
//!
//! Angles accept any numeric input by default, including `NaN` and infinities,
//! which simply propagate through the normalization arithmetic. Hosts that
//! prefer to reject such input can switch to [`InputPolicy::RejectNonFinite`],
//! either in code, from a TOML file, or through the
//! `OBSERVATORY_ANGLE_INPUT_POLICY` environment variable.
//!
//! ```toml
//! input_policy = "reject_non_finite"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::angle::{AltitudinalAngle, AzimuthAngle};
use crate::error::{AngleError, AngleResult};

/// Environment variable read by [`AngleConfig::from_env`].
pub const INPUT_POLICY_ENV: &str = "OBSERVATORY_ANGLE_INPUT_POLICY";

/// How constructors treat non-finite input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Accept every value; `NaN`/infinite input yields `NaN` angles.
    #[default]
    Permissive,
    /// Reject `NaN`/infinite input with [`AngleError::NonFinite`].
    RejectNonFinite,
}

impl InputPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputPolicy::Permissive => "permissive",
            InputPolicy::RejectNonFinite => "reject_non_finite",
        }
    }

    /// Apply the policy to a raw input value.
    pub fn check(&self, value: f64) -> AngleResult<f64> {
        match self {
            InputPolicy::Permissive => {
                if !value.is_finite() {
                    log::warn!("Accepting non-finite angle input {}", value);
                }
                Ok(value)
            }
            InputPolicy::RejectNonFinite => AngleError::check_finite(value),
        }
    }
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" | "lenient" => Ok(InputPolicy::Permissive),
            "reject_non_finite" | "strict" => Ok(InputPolicy::RejectNonFinite),
            other => Err(format!(
                "Unknown input policy: {}. Use 'permissive' or 'reject_non_finite'",
                other
            )),
        }
    }
}

/// Angle construction settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleConfig {
    #[serde(default)]
    pub input_policy: InputPolicy,
}

impl AngleConfig {
    pub fn new(input_policy: InputPolicy) -> Self {
        Self { input_policy }
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> AngleResult<Self> {
        let config: AngleConfig = toml::from_str(content).map_err(|e| {
            AngleError::Configuration(format!("Failed to parse config: {}", e))
        })?;

        log::debug!("Loaded angle config: input_policy={}", config.input_policy.as_str());
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(AngleConfig)` if successful
    /// * `Err(AngleError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> AngleResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AngleError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("Reading angle config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Read the input policy from `OBSERVATORY_ANGLE_INPUT_POLICY`.
    ///
    /// Falls back to the default policy when the variable is unset or invalid.
    pub fn from_env() -> Self {
        let input_policy = std::env::var(INPUT_POLICY_ENV)
            .ok()
            .and_then(|s| match InputPolicy::from_str(&s) {
                Ok(policy) => Some(policy),
                Err(e) => {
                    log::warn!("Ignoring {}: {}", INPUT_POLICY_ENV, e);
                    None
                }
            })
            .unwrap_or_default();

        Self { input_policy }
    }

    pub fn altitudinal<V: Into<f64>>(&self, value: V) -> AngleResult<AltitudinalAngle> {
        let value = self.input_policy.check(value.into())?;
        Ok(AltitudinalAngle::new(value))
    }

    pub fn azimuthal<V: Into<f64>>(&self, value: V) -> AngleResult<AzimuthAngle> {
        let value = self.input_policy.check(value.into())?;
        Ok(AzimuthAngle::new(value))
    }
}
