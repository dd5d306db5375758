//! Observatory angles: altitude and azimuth as normalized value types.
//!
//! - [`AltitudinalAngle`] folds any input into [-90, 90] degrees.
//! - [`AzimuthAngle`] wraps any input into [0, 360) degrees and adds an
//!   hour-angle reading (15 degrees per hour).
//!
//! Both expose the shared [`Angle`] accessors (radians, truncated degrees,
//! arcminutes, arcseconds, DMS string) and a serializable components snapshot.
//!
//! ```
//! use observatory_angle::{Angle, AzimuthAngle};
//!
//! let az = AzimuthAngle::new(405);
//! assert_eq!(az.ddegrees(), 45.0);
//! assert_eq!(az.to_hms(), "03h 00m 00.00s");
//! ```

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod angle;
pub mod config;
pub mod error;
#[cfg(feature = "python")]
pub mod python;

pub use angle::{
    AltitudinalAngle, AltitudinalAngleComponents, Angle, AzimuthAngle, AzimuthalAngle,
    AzimuthalAngleComponents,
};
pub use config::{AngleConfig, InputPolicy};
pub use error::{AngleError, AngleResult};

/// Python extension module
#[cfg(feature = "python")]
#[pymodule]
fn observatory_angle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyAltitudinalAngle>()?;
    m.add_class::<python::PyAzimuthAngle>()?;
    Ok(())
}
