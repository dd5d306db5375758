//! Python bindings for the observatory angle types.
//!
//! Exposes `AltitudinalAngle` and `AzimuthAngle` with the same property and
//! method names as the Rust types. `to_components()` returns a plain `dict`
//! so the result can go straight to `json.dumps`.
//!
//! ```python
//! from observatory_angle import AzimuthAngle
//!
//! az = AzimuthAngle(-45.8)
//! az.to_hms()         # '20h 11m 60.00s'
//! az.to_components()  # {'ddegrees': 314.2, 'dhours': 20.94..., ...}
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::angle::{AltitudinalAngle, Angle, AzimuthAngle};

/// Altitude angle in [-90, 90] degrees.
#[pyclass(name = "AltitudinalAngle", module = "observatory_angle", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyAltitudinalAngle(pub AltitudinalAngle);

#[pymethods]
impl PyAltitudinalAngle {
    #[new]
    pub fn py_new(value: f64) -> Self {
        Self(AltitudinalAngle::new(value))
    }

    #[getter]
    pub fn ddegrees(&self) -> f64 {
        self.0.ddegrees()
    }

    #[getter]
    pub fn radians(&self) -> f64 {
        self.0.radians()
    }

    #[getter]
    pub fn degrees(&self) -> i32 {
        self.0.degrees()
    }

    #[getter]
    pub fn minutes(&self) -> u32 {
        self.0.minutes()
    }

    #[getter]
    pub fn seconds(&self) -> f64 {
        self.0.seconds()
    }

    pub fn to_decimal_degrees(&self) -> f64 {
        self.0.to_decimal_degrees()
    }

    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    pub fn to_dms(&self) -> String {
        self.0.to_dms()
    }

    pub fn to_components<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let components = self.0.to_components();
        let dict = PyDict::new(py);
        dict.set_item("ddegrees", components.ddegrees)?;
        dict.set_item("degrees", components.degrees)?;
        dict.set_item("minutes", components.minutes)?;
        dict.set_item("seconds", components.seconds)?;
        dict.set_item("radians", components.radians)?;
        Ok(dict)
    }

    fn __float__(&self) -> f64 {
        self.0.ddegrees()
    }

    fn __str__(&self) -> String {
        self.0.to_dms()
    }

    fn __repr__(&self) -> String {
        format!("AltitudinalAngle({})", self.0.ddegrees())
    }
}

/// Azimuth angle in [0, 360) degrees.
#[pyclass(name = "AzimuthAngle", module = "observatory_angle", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyAzimuthAngle(pub AzimuthAngle);

#[pymethods]
impl PyAzimuthAngle {
    #[new]
    pub fn py_new(value: f64) -> Self {
        Self(AzimuthAngle::new(value))
    }

    #[getter]
    pub fn ddegrees(&self) -> f64 {
        self.0.ddegrees()
    }

    #[getter]
    pub fn dhours(&self) -> f64 {
        self.0.dhours()
    }

    #[getter]
    pub fn hours(&self) -> i32 {
        self.0.hours()
    }

    #[getter]
    pub fn radians(&self) -> f64 {
        self.0.radians()
    }

    #[getter]
    pub fn degrees(&self) -> i32 {
        self.0.degrees()
    }

    #[getter]
    pub fn minutes(&self) -> u32 {
        self.0.minutes()
    }

    #[getter]
    pub fn seconds(&self) -> f64 {
        self.0.seconds()
    }

    pub fn to_decimal_degrees(&self) -> f64 {
        self.0.to_decimal_degrees()
    }

    pub fn to_decimal_hours(&self) -> f64 {
        self.0.to_decimal_hours()
    }

    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    pub fn to_dms(&self) -> String {
        self.0.to_dms()
    }

    pub fn to_hms(&self) -> String {
        self.0.to_hms()
    }

    pub fn to_components<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let components = self.0.to_components();
        let dict = PyDict::new(py);
        dict.set_item("hours", components.hours)?;
        dict.set_item("ddegrees", components.ddegrees)?;
        dict.set_item("dhours", components.dhours)?;
        dict.set_item("degrees", components.degrees)?;
        dict.set_item("minutes", components.minutes)?;
        dict.set_item("seconds", components.seconds)?;
        dict.set_item("radians", components.radians)?;
        Ok(dict)
    }

    fn __float__(&self) -> f64 {
        self.0.ddegrees()
    }

    fn __str__(&self) -> String {
        self.0.to_dms()
    }

    fn __repr__(&self) -> String {
        format!("AzimuthAngle({})", self.0.ddegrees())
    }
}
