//! Altitudinal and azimuthal observatory angles.
//!
//! Both angle kinds store a single normalized decimal-degree value and derive
//! everything else from it on demand: radians, truncated degrees, arcminutes,
//! arcseconds and the sexagesimal strings.
//!
//! The shared derivations live on the [`Angle`] trait as provided methods; the
//! concrete types only supply [`Angle::ddegrees`] and their own normalization.
//!
//! # Decomposition
//!
//! - `degrees` truncates toward zero (`-45.8` gives `-45`, not `-46`).
//! - `minutes` is the absolute truncated arcminute part and never negative.
//! - `seconds` is the remaining magnitude in arcseconds. It is not carried
//!   into the minutes, so values near a minute rollover can read `60.00`
//!   once formatted (`45.8` decomposes to `45° 47m 59.99999999999s`).
//!
//! ```
//! use observatory_angle::{AltitudinalAngle, Angle};
//!
//! let alt = AltitudinalAngle::new(45.8);
//! assert_eq!(alt.degrees(), 45);
//! assert_eq!(alt.minutes(), 47);
//! assert_eq!(alt.to_dms(), "+45° 47m 60.00s");
//! ```

mod altitudinal;
mod azimuthal;
mod components;
pub mod normalize;

pub use altitudinal::AltitudinalAngle;
pub use azimuthal::{AzimuthAngle, AzimuthalAngle};
pub use components::{AltitudinalAngleComponents, AzimuthalAngleComponents};

/// Arcminutes per degree.
pub const ARCMINUTES_PER_DEGREE: f64 = 60.0;
/// Arcseconds per degree.
pub const ARCSECONDS_PER_DEGREE: f64 = 3600.0;
/// Degrees per hour of hour angle.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Capability shared by every normalized angle.
pub trait Angle {
    /// Normalized decimal degrees. All other accessors derive from this.
    fn ddegrees(&self) -> f64;

    /// Decimal degrees converted to radians.
    #[inline]
    fn radians(&self) -> f64 {
        self.ddegrees().to_radians()
    }

    /// Whole degrees, truncated toward zero.
    #[inline]
    fn degrees(&self) -> i32 {
        whole_degrees(self.ddegrees())
    }

    /// Whole arcminutes, always non-negative.
    #[inline]
    fn minutes(&self) -> u32 {
        arcminutes(self.ddegrees())
    }

    /// Remaining arcseconds, always taken from the magnitude.
    #[inline]
    fn seconds(&self) -> f64 {
        arcseconds(self.ddegrees())
    }

    fn to_decimal_degrees(&self) -> f64 {
        self.ddegrees()
    }

    fn to_radians(&self) -> f64 {
        self.radians()
    }

    /// Signed degrees-minutes-seconds, e.g. `+45° 47m 60.00s`.
    fn to_dms(&self) -> String {
        format_dms(self.degrees(), self.minutes(), self.seconds())
    }
}

/// Truncate decimal degrees toward zero.
///
/// Non-finite input yields `0` (saturating float-to-int cast).
#[inline]
pub fn whole_degrees(ddegrees: f64) -> i32 {
    ddegrees.trunc() as i32
}

/// Absolute truncated arcminutes of the fractional degree part.
#[inline]
pub fn arcminutes(ddegrees: f64) -> u32 {
    let degrees = f64::from(whole_degrees(ddegrees));
    ((ddegrees - degrees) * ARCMINUTES_PER_DEGREE).trunc().abs() as u32
}

/// Arcseconds left over after removing whole degrees and arcminutes.
#[inline]
pub fn arcseconds(ddegrees: f64) -> f64 {
    let degrees = f64::from(whole_degrees(ddegrees));
    let minutes = f64::from(arcminutes(ddegrees));
    (ddegrees.abs() - degrees.abs() - minutes / ARCMINUTES_PER_DEGREE) * ARCSECONDS_PER_DEGREE
}

pub(crate) fn format_dms(degrees: i32, minutes: u32, seconds: f64) -> String {
    format!("{:+03}° {:02}m {:05.2}s", degrees, minutes, seconds)
}

pub(crate) fn format_hms(hours: i32, minutes: u32, seconds: f64) -> String {
    format!("{:02}h {:02}m {:05.2}s", hours, minutes, seconds)
}
