//! End-to-end scenarios for altitudinal and azimuthal angles.
//!
//! These pin the exact values and strings that downstream display and
//! serialization code depends on, including the minute-rollover artifact
//! where seconds format as `60.00`.

use approx::assert_relative_eq;
use observatory_angle::{
    AltitudinalAngle, AltitudinalAngleComponents, Angle, AzimuthAngle, AzimuthalAngle,
    AzimuthalAngleComponents,
};

// ==================== Altitudinal ====================

#[test]
fn test_altitude_in_range() {
    let angle = AltitudinalAngle::new(45);
    assert_eq!(angle.ddegrees(), 45.0);
    assert_eq!(angle.degrees(), 45);
    assert_eq!(angle.minutes(), 0);
    assert_eq!(angle.seconds(), 0.0);
    assert_eq!(angle.to_dms(), "+45° 00m 00.00s");
}

#[test]
fn test_altitude_reflects_just_past_zenith() {
    assert_eq!(AltitudinalAngle::new(91).ddegrees(), 89.0);
    assert_eq!(AltitudinalAngle::new(-91).ddegrees(), -89.0);
}

#[test]
fn test_altitude_exact_poles() {
    assert_eq!(AltitudinalAngle::new(90).ddegrees(), 0.0);
    assert_eq!(AltitudinalAngle::new(-90).ddegrees(), 0.0);
    assert_eq!(AltitudinalAngle::new(-90).to_dms(), "+00° 00m 00.00s");
}

#[test]
fn test_altitude_negative_truncates_toward_zero() {
    let angle = AltitudinalAngle::new(-45.8);
    assert_eq!(angle.degrees(), -45);
    assert_eq!(angle.minutes(), 47);
    assert_relative_eq!(angle.seconds(), 60.0, epsilon = 1e-6);
    assert_eq!(angle.to_dms(), "-45° 47m 60.00s");
}

#[test]
fn test_altitude_sub_degree_negative_keeps_positive_sign_in_dms() {
    // Truncated degrees are 0, and 0 formats with a '+' sign.
    let angle = AltitudinalAngle::new(-0.5);
    assert_eq!(angle.degrees(), 0);
    assert_eq!(angle.minutes(), 30);
    assert_eq!(angle.to_dms(), "+00° 30m 00.00s");
}

#[test]
fn test_altitude_radians() {
    assert_eq!(AltitudinalAngle::new(30.1506).to_radians(), 0.5262272414518023);
    assert_relative_eq!(
        AltitudinalAngle::new(-60).radians(),
        -std::f64::consts::FRAC_PI_3,
        epsilon = 1e-15
    );
}

#[test]
fn test_altitude_components_json() {
    let components = AltitudinalAngle::new(45).to_components();
    let json: serde_json::Value = serde_json::from_str(&components.to_json().unwrap()).unwrap();

    assert_eq!(json["ddegrees"], 45.0);
    assert_eq!(json["degrees"], 45);
    assert_eq!(json["minutes"], 0);
    assert_eq!(json["seconds"], 0.0);
    assert_eq!(json["radians"], 0.7853981633974483);
    assert!(json.get("hours").is_none());

    let parsed: AltitudinalAngleComponents = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, components);
}

// ==================== Azimuthal ====================

#[test]
fn test_azimuth_wraps_past_full_turn() {
    let angle = AzimuthAngle::new(405);
    assert_eq!(angle.ddegrees(), 45.0);
    assert_eq!(angle.hours(), 3);
    assert_eq!(angle.minutes(), 0);
    assert_eq!(angle.seconds(), 0.0);
}

#[test]
fn test_azimuth_wraps_negative() {
    let angle = AzimuthAngle::new(-45);
    assert_eq!(angle.ddegrees(), 315.0);
    assert_eq!(angle.hours(), 21);
    assert_eq!(angle.degrees(), 315);
    assert_relative_eq!(angle.dhours(), 21.0);
}

#[test]
fn test_azimuth_many_turns() {
    assert_eq!(AzimuthAngle::new(360 * 7 + 10).ddegrees(), 10.0);
    assert_eq!(AzimuthAngle::new(-360 * 7 - 10).ddegrees(), 350.0);
    assert_eq!(AzimuthAngle::new(360).ddegrees(), 0.0);
    assert_eq!(AzimuthAngle::new(-360).ddegrees(), 0.0);
}

#[test]
fn test_azimuth_strings() {
    assert_eq!(AzimuthAngle::new(45.8).to_hms(), "03h 47m 60.00s");
    assert_eq!(AzimuthAngle::new(-45.8).to_hms(), "20h 11m 60.00s");
    assert_eq!(AzimuthAngle::new(45.8).to_dms(), "+45° 47m 60.00s");
    assert_eq!(AzimuthAngle::new(-45.8).to_dms(), "+314° 11m 60.00s");
}

#[test]
fn test_azimuth_components() {
    let components = AzimuthAngle::new(45).to_components();
    assert_eq!(
        components,
        AzimuthalAngleComponents {
            ddegrees: 45.0,
            dhours: 3.0,
            radians: 0.7853981633974483,
            hours: 3,
            degrees: 45,
            minutes: 0,
            seconds: 0.0,
        }
    );

    let json: serde_json::Value = serde_json::to_value(components).unwrap();
    assert_eq!(json["hours"], 3);
    assert_eq!(json["dhours"], 3.0);
}

#[test]
fn test_azimuthal_alias() {
    let angle: AzimuthalAngle = AzimuthAngle::new(90);
    assert_eq!(angle.to_decimal_hours(), 6.0);
}

// ==================== Shared behaviour ====================

#[test]
fn test_to_decimal_degrees_is_identity() {
    assert_eq!(AltitudinalAngle::new(30.1506).to_decimal_degrees(), 30.1506);
    assert_eq!(AzimuthAngle::new(30.1506).to_decimal_degrees(), 30.1506);
}

#[test]
fn test_generic_over_angle_trait() {
    fn describe(angle: &dyn Angle) -> (f64, String) {
        (angle.to_decimal_degrees(), angle.to_dms())
    }

    let alt = AltitudinalAngle::new(12.5);
    let az = AzimuthAngle::new(12.5);
    assert_eq!(describe(&alt), describe(&az));
}

#[test]
fn test_angles_inside_serialized_struct() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Pointing {
        alt: AltitudinalAngle,
        az: AzimuthAngle,
    }

    let pointing: Pointing = serde_json::from_str(r#"{"alt": 91, "az": -45}"#).unwrap();
    assert_eq!(pointing.alt.ddegrees(), 89.0);
    assert_eq!(pointing.az.ddegrees(), 315.0);
    assert_eq!(
        serde_json::to_string(&pointing).unwrap(),
        r#"{"alt":89.0,"az":315.0}"#
    );
}
