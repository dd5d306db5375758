//! Structured snapshots of an angle's derived values.
//!
//! Field names are the serialized keys and are relied on by callers that
//! export these snapshots (e.g. as JSON), so they must not be renamed.

use serde::{Deserialize, Serialize};

use crate::error::AngleResult;

/// Components of an altitudinal angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudinalAngleComponents {
    /// Decimal degrees, in [-90, 90]
    pub ddegrees: f64,
    /// Radians, in [-pi/2, pi/2]
    pub radians: f64,
    /// Whole degrees, truncated toward zero
    pub degrees: i32,
    /// Whole arcminutes, in [0, 60)
    pub minutes: u32,
    /// Remaining arcseconds
    pub seconds: f64,
}

/// Components of an azimuthal angle, including its hour-angle form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AzimuthalAngleComponents {
    /// Decimal degrees, in [0, 360)
    pub ddegrees: f64,
    /// Decimal hours, in [0, 24)
    pub dhours: f64,
    /// Radians, in [0, 2pi)
    pub radians: f64,
    /// Whole hours, in [0, 24)
    pub hours: i32,
    /// Whole degrees, in [0, 360)
    pub degrees: i32,
    /// Whole arcminutes, in [0, 60)
    pub minutes: u32,
    /// Remaining arcseconds
    pub seconds: f64,
}

impl AltitudinalAngleComponents {
    pub fn to_json(&self) -> AngleResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl AzimuthalAngleComponents {
    pub fn to_json(&self) -> AngleResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
