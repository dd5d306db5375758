use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::components::AltitudinalAngleComponents;
use super::normalize::normalize_altitude;
use super::Angle;
use crate::error::{AngleError, AngleResult};

/// Altitude of a target above the observer's horizon.
///
/// Measured vertically from the horizon, from -90 degrees (directly below the
/// observer) to +90 degrees (directly overhead). The input is folded into
/// that range once, at construction.
///
/// ```
/// use observatory_angle::{AltitudinalAngle, Angle};
///
/// let alt = AltitudinalAngle::new(91.0);
/// assert_eq!(alt.ddegrees(), 89.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct AltitudinalAngle {
    ddegrees: f64,
}

impl AltitudinalAngle {
    /// Create a new altitude from raw decimal degrees.
    ///
    /// Any input is accepted; non-finite values propagate as `NaN`.
    pub fn new<V: Into<f64>>(value: V) -> Self {
        Self {
            ddegrees: normalize_altitude(value.into()),
        }
    }

    /// Create a new altitude, rejecting `NaN` and infinite input.
    pub fn try_new<V: Into<f64>>(value: V) -> AngleResult<Self> {
        let value = AngleError::check_finite(value.into())?;
        Ok(Self::new(value))
    }

    /// Altitude as a `qtty` degree quantity.
    pub fn as_quantity(&self) -> qtty::Degrees {
        qtty::Degrees::new(self.ddegrees)
    }

    pub fn to_components(&self) -> AltitudinalAngleComponents {
        AltitudinalAngleComponents {
            ddegrees: self.ddegrees,
            radians: self.radians(),
            degrees: self.degrees(),
            minutes: self.minutes(),
            seconds: self.seconds(),
        }
    }
}

impl Angle for AltitudinalAngle {
    #[inline]
    fn ddegrees(&self) -> f64 {
        self.ddegrees
    }
}

impl fmt::Display for AltitudinalAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dms())
    }
}

impl FromStr for AltitudinalAngle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse()?;
        Ok(Self::new(value))
    }
}

impl From<f64> for AltitudinalAngle {
    fn from(v: f64) -> Self {
        AltitudinalAngle::new(v)
    }
}

impl From<i32> for AltitudinalAngle {
    fn from(v: i32) -> Self {
        AltitudinalAngle::new(v)
    }
}

impl From<qtty::Degrees> for AltitudinalAngle {
    fn from(v: qtty::Degrees) -> Self {
        AltitudinalAngle::new(v.value())
    }
}

impl From<AltitudinalAngle> for f64 {
    fn from(angle: AltitudinalAngle) -> Self {
        angle.ddegrees
    }
}
