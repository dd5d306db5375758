//! Range normalization for observatory angles.
//!
//! | Angle      | Range         | Function                  |
//! |------------|---------------|---------------------------|
//! | Altitude   | [-90, 90]     | [`normalize_altitude`]    |
//! | Azimuth    | [0, 360)      | [`normalize_azimuth`]     |
//!
//! Both rules are built on [`floor_mod`], a modulo whose result carries the
//! sign of the divisor. Rust's `%` is a remainder (sign of the dividend), so
//! `-45.0 % 360.0 == -45.0` whereas `floor_mod(-45.0, 360.0) == 315.0`.
//!
//! The altitude rule is a reflect-then-modulo sequence, not a clamp: values
//! just past a pole reflect back (`91 -> 89`), but once reflected the result is
//! wrapped with a modulo, so exactly `+90` maps to `0` and the mapping is not
//! monotonic for large magnitudes.

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;
/// Degrees in half a turn.
pub const HALF_TURN: f64 = 180.0;
/// Degrees in a quarter turn.
pub const QUARTER_TURN: f64 = 90.0;

/// Floor-style modulo: the result has the sign of `divisor`.
///
/// A zero remainder takes the sign of the divisor, so
/// `floor_mod(0.0, -90.0)` is `-0.0`.
#[inline]
pub fn floor_mod(value: f64, divisor: f64) -> f64 {
    let rem = value % divisor;
    if rem != 0.0 {
        if (divisor < 0.0) != (rem < 0.0) {
            rem + divisor
        } else {
            rem
        }
    } else {
        0.0_f64.copysign(divisor)
    }
}

/// Fold a raw altitude into [-90, 90].
///
/// Reflections are applied to the running value: a value above 90 becomes
/// `180 - value`, and if that is below -90 it becomes `-180 - value`. The
/// result is then taken modulo 90 (positive) or modulo -90 (zero or negative).
pub fn normalize_altitude(value: f64) -> f64 {
    let mut ddeg = value;

    if ddeg > QUARTER_TURN {
        ddeg = HALF_TURN - ddeg;
    }

    if ddeg < -QUARTER_TURN {
        ddeg = -HALF_TURN - ddeg;
    }

    let normalized = if ddeg > 0.0 {
        floor_mod(ddeg, QUARTER_TURN)
    } else {
        floor_mod(ddeg, -QUARTER_TURN)
    };

    if normalized != value {
        log::trace!("altitude {} normalized to {}", value, normalized);
    }

    normalized
}

/// Wrap a raw azimuth into [0, 360).
pub fn normalize_azimuth(value: f64) -> f64 {
    let mut ddeg = floor_mod(value, FULL_TURN);

    if ddeg < 0.0 {
        ddeg += FULL_TURN;
    }

    // -1e-20 mod 360 rounds up to 360.0
    if ddeg >= FULL_TURN {
        ddeg = 0.0;
    }

    if ddeg != value {
        log::trace!("azimuth {} normalized to {}", value, ddeg);
    }

    ddeg
}
