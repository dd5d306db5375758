use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::components::AzimuthalAngleComponents;
use super::normalize::normalize_azimuth;
use super::{format_hms, Angle, DEGREES_PER_HOUR};
use crate::error::{AngleError, AngleResult};

/// Horizontal bearing of a target, measured clockwise from the observer's north.
///
/// Stored in [0, 360). Inputs outside one turn, positive or negative, wrap
/// around. The same value can be read as an hour angle (15 degrees per hour).
///
/// ```
/// use observatory_angle::{Angle, AzimuthAngle};
///
/// let az = AzimuthAngle::new(-45.0);
/// assert_eq!(az.ddegrees(), 315.0);
/// assert_eq!(az.hours(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct AzimuthAngle {
    ddegrees: f64,
}

/// Alias for [`AzimuthAngle`].
pub type AzimuthalAngle = AzimuthAngle;

impl AzimuthAngle {
    /// Create a new azimuth from raw decimal degrees.
    pub fn new<V: Into<f64>>(value: V) -> Self {
        Self {
            ddegrees: normalize_azimuth(value.into()),
        }
    }

    /// Create a new azimuth, rejecting `NaN` and infinite input.
    pub fn try_new<V: Into<f64>>(value: V) -> AngleResult<Self> {
        let value = AngleError::check_finite(value.into())?;
        Ok(Self::new(value))
    }

    /// Decimal hours, in [0, 24).
    #[inline]
    pub fn dhours(&self) -> f64 {
        self.ddegrees / DEGREES_PER_HOUR
    }

    /// Whole hours, taken from the truncated degrees rather than from `dhours`.
    #[inline]
    pub fn hours(&self) -> i32 {
        self.degrees() / DEGREES_PER_HOUR as i32
    }

    pub fn to_decimal_hours(&self) -> f64 {
        self.dhours()
    }

    /// Hours-minutes-seconds, e.g. `03h 47m 60.00s`.
    ///
    /// Minutes and seconds are the arcminute/arcsecond parts of the degree
    /// decomposition, not sidereal time minutes.
    pub fn to_hms(&self) -> String {
        format_hms(self.hours(), self.minutes(), self.seconds())
    }

    pub fn as_quantity(&self) -> qtty::Degrees {
        qtty::Degrees::new(self.ddegrees)
    }

    pub fn as_hour_angle(&self) -> qtty::HourAngles {
        qtty::HourAngles::new(self.dhours())
    }

    pub fn to_components(&self) -> AzimuthalAngleComponents {
        AzimuthalAngleComponents {
            ddegrees: self.ddegrees,
            dhours: self.dhours(),
            radians: self.radians(),
            hours: self.hours(),
            degrees: self.degrees(),
            minutes: self.minutes(),
            seconds: self.seconds(),
        }
    }
}

impl Angle for AzimuthAngle {
    #[inline]
    fn ddegrees(&self) -> f64 {
        self.ddegrees
    }
}

impl fmt::Display for AzimuthAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dms())
    }
}

impl FromStr for AzimuthAngle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse()?;
        Ok(Self::new(value))
    }
}

impl From<f64> for AzimuthAngle {
    fn from(v: f64) -> Self {
        AzimuthAngle::new(v)
    }
}

impl From<i32> for AzimuthAngle {
    fn from(v: i32) -> Self {
        AzimuthAngle::new(v)
    }
}

impl From<qtty::Degrees> for AzimuthAngle {
    fn from(v: qtty::Degrees) -> Self {
        AzimuthAngle::new(v.value())
    }
}

impl From<AzimuthAngle> for f64 {
    fn from(angle: AzimuthAngle) -> Self {
        angle.ddegrees
    }
}
