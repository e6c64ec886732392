//! Parametric Sections
//!
//! Closed-form area and perimeter formulas for profiles whose full geometry
//! is written in the designation. Inputs are millimeters; bends of
//! cold-formed sections are rounded with an inner radius equal to the
//! thickness, so each 90° bend adds `½·π·t` of developed surface.
//!
//! | Kind | Dimensions | Area (mm²) | Perimeter (mm) |
//! |---|---|---|---|
//! | H | h, b, tw, t | `(h-2t)·tw + 2·b·t` | `2h + 4b - 2t` |
//! | C | h, b, c, t | `(h+2b+2c-4t)·t` | `2·(h+2b+2c-8t) + 2πt + 4t` |
//! | Z | h, b, c, t | `(h+2b+2c-2t-πt/4)·t` | `2·(h+2b+2c-8t+πt+πt/2) + 2t` |
//! | RT | b1, b2, t | `(b1+b2-2t)·2t` | `2·(b1+b2)` |
//! | CT | d, t | `(d-t)·π·t` | `π·d` |
//! | RS | d | `π·(d/2)²` | `π·d` |
//!
//! The Z-section lip cut is fixed at 45°.
//!
//! Dimensions that cannot describe a real section are rejected before any
//! formula runs: flanges must fit inside the depth, tube walls inside half
//! the outer size, and every flat of a cold-formed section must survive
//! its bends.

use std::f64::consts::PI;

use super::{Geometry, SectionProperties};
use crate::designation::parse_dimension;
use crate::errors::{CalcResult, SectionError};
use crate::profiles::ProfileKind;
use crate::units::{Density, Millimeters, SquareMillimeters};

/// Convert exactly `N` dimension tokens to millimeters
fn dimensions<const N: usize>(kind: ProfileKind, tokens: &[String]) -> CalcResult<[f64; N]> {
    if tokens.len() != N {
        return Err(SectionError::dimension_count(kind, N, tokens.len()));
    }
    let mut dims = [0.0; N];
    for (slot, token) in dims.iter_mut().zip(tokens) {
        *slot = parse_dimension(token)?;
    }
    Ok(dims)
}

/// Reject dimensions that fail a shape rule
fn ensure(valid: bool, tokens: &[String], reason: &str) -> CalcResult<()> {
    if valid {
        Ok(())
    } else {
        Err(SectionError::invalid_dimension(tokens.join("*"), reason))
    }
}

/// Each 90° bend of a cold-formed section takes `2t` off the flat it ends
fn ensure_bends_fit(tokens: &[String], h: f64, b: f64, c: f64, t: f64) -> CalcResult<()> {
    ensure(h > 4.0 * t, tokens, "Web is too short for its bends")?;
    ensure(b > 4.0 * t, tokens, "Flange is too short for its bends")?;
    ensure(c > 2.0 * t, tokens, "Lip is too short for its bend")
}

fn geometry(area_mm2: f64, perimeter_mm: f64) -> Geometry {
    Geometry {
        area: SquareMillimeters(area_mm2),
        perimeter: Millimeters(perimeter_mm),
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Welded H-section with independent flanges
pub fn h_section(h: f64, b1: f64, b2: f64, tw: f64, t1: f64, t2: f64) -> Geometry {
    geometry(
        (h - (t1 + t2)) * tw + b1 * t1 + b2 * t2,
        2.0 * h + 2.0 * b1 + 2.0 * b2 - t1 - t2,
    )
}

/// Cold-formed lipped channel
pub fn c_section(h: f64, b: f64, c: f64, t: f64) -> Geometry {
    let flat = h + 2.0 * b + 2.0 * c;
    geometry(
        (flat - 4.0 * t) * t,
        2.0 * (flat - 8.0 * t) + 2.0 * PI * t + 4.0 * t,
    )
}

/// Cold-formed lipped Z-section with 45° lips
pub fn z_section(h: f64, b: f64, c: f64, t: f64) -> Geometry {
    let flat = h + 2.0 * b + 2.0 * c;
    let lip_cut = t * PI * 45.0 / 180.0;
    geometry(
        (flat - 2.0 * t - lip_cut) * t,
        2.0 * (flat - 8.0 * t + 0.5 * PI * t * 2.0 + lip_cut * 2.0) + 2.0 * t,
    )
}

/// Rectangular hollow tube
pub fn rt_section(b1: f64, b2: f64, t: f64) -> Geometry {
    geometry((b1 + b2 - 2.0 * t) * 2.0 * t, 2.0 * (b1 + b2))
}

/// Circular hollow tube
pub fn ct_section(d: f64, t: f64) -> Geometry {
    geometry((d - t) * PI * t, d * PI)
}

/// Solid round bar
pub fn rs_section(d: f64) -> Geometry {
    geometry((d / 2.0).powi(2) * PI, d * PI)
}

// ============================================================================
// Calculators
// ============================================================================

/// `H` - h*b*tw*t, or h*b1*b2*tw*t1*t2 for unequal flanges
pub fn h_beam(tokens: &[String], density: Density) -> CalcResult<SectionProperties> {
    let g = if tokens.len() == 6 {
        let [h, b1, b2, tw, t1, t2] = dimensions::<6>(ProfileKind::HBeam, tokens)?;
        ensure(t1 + t2 < h, tokens, "Flanges are thicker than the section depth")?;
        ensure(tw < b1.min(b2), tokens, "Web is wider than a flange")?;
        h_section(h, b1, b2, tw, t1, t2)
    } else {
        let [h, b, tw, t] = dimensions::<4>(ProfileKind::HBeam, tokens)?;
        ensure(2.0 * t < h, tokens, "Flanges are thicker than the section depth")?;
        ensure(tw < b, tokens, "Web is wider than the flanges")?;
        h_section(h, b, b, tw, t, t)
    };
    SectionProperties::from_geometry(g, density)
}

/// `C` - h*b*c*t
pub fn c_beam(tokens: &[String], density: Density) -> CalcResult<SectionProperties> {
    let [h, b, c, t] = dimensions::<4>(ProfileKind::CBeam, tokens)?;
    ensure_bends_fit(tokens, h, b, c, t)?;
    SectionProperties::from_geometry(c_section(h, b, c, t), density)
}

/// `Z` - h*b*c*t
pub fn z_beam(tokens: &[String], density: Density) -> CalcResult<SectionProperties> {
    let [h, b, c, t] = dimensions::<4>(ProfileKind::ZBeam, tokens)?;
    ensure_bends_fit(tokens, h, b, c, t)?;
    SectionProperties::from_geometry(z_section(h, b, c, t), density)
}

/// `RT` - b1*b2*t
pub fn rt_beam(tokens: &[String], density: Density) -> CalcResult<SectionProperties> {
    let [b1, b2, t] = dimensions::<3>(ProfileKind::RtBeam, tokens)?;
    ensure(2.0 * t < b1.min(b2), tokens, "Wall is thicker than half the tube")?;
    SectionProperties::from_geometry(rt_section(b1, b2, t), density)
}

/// `CT` - d*t
pub fn ct_beam(tokens: &[String], density: Density) -> CalcResult<SectionProperties> {
    let [d, t] = dimensions::<2>(ProfileKind::CtBeam, tokens)?;
    ensure(2.0 * t < d, tokens, "Wall is thicker than half the tube")?;
    SectionProperties::from_geometry(ct_section(d, t), density)
}

/// `RS` - d
pub fn rs_steel(tokens: &[String], density: Density) -> CalcResult<SectionProperties> {
    let [d] = dimensions::<1>(ProfileKind::RsSteel, tokens)?;
    SectionProperties::from_geometry(rs_section(d), density)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn toks(dims: &[&str]) -> Vec<String> {
        dims.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_h_beam() {
        let p = h_beam(&toks(&["300", "200", "6", "8"]), Density::default()).unwrap();
        assert_abs_diff_eq!(p.sectional_area, 0.004904, epsilon = 1e-9);
        assert_abs_diff_eq!(p.theoretical_weight, 0.0384964, epsilon = 1e-9);
        assert_abs_diff_eq!(p.surface_area, 1.384, epsilon = 1e-9);
    }

    #[test]
    fn test_h_beam_unequal_flanges() {
        let p = h_beam(&toks(&["300", "200", "150", "6", "10", "8"]), Density::default()).unwrap();
        // (300 - 18) * 6 + 200 * 10 + 150 * 8
        assert_abs_diff_eq!(p.sectional_area, 0.004892, epsilon = 1e-9);
        // 600 + 400 + 300 - 18
        assert_abs_diff_eq!(p.surface_area, 1.282, epsilon = 1e-9);
    }

    #[test]
    fn test_h_beam_equal_forms_agree() {
        let four = h_beam(&toks(&["300", "200", "6", "8"]), Density::default()).unwrap();
        let six = h_beam(&toks(&["300", "200", "200", "6", "8", "8"]), Density::default()).unwrap();
        assert_eq!(four, six);
    }

    #[test]
    fn test_c_beam() {
        let p = c_beam(&toks(&["160", "60", "20", "2.5"]), Density::default()).unwrap();
        assert_abs_diff_eq!(p.sectional_area, 0.000775, epsilon = 1e-9);
        assert_abs_diff_eq!(p.theoretical_weight, 0.00608375, epsilon = 1e-9);
        assert_abs_diff_eq!(p.surface_area, 0.6257, epsilon = 1e-4);
    }

    #[test]
    fn test_z_beam() {
        let p = z_beam(&toks(&["160", "60", "20", "2.5"]), Density::default()).unwrap();
        assert_abs_diff_eq!(p.sectional_area, 0.000782, epsilon = 1e-6);
        assert_abs_diff_eq!(p.theoretical_weight, 0.00614, epsilon = 1e-5);
        assert_abs_diff_eq!(p.surface_area, 0.6285, epsilon = 1e-3);
    }

    #[test]
    fn test_rt_beam() {
        let p = rt_beam(&toks(&["120", "80", "6"]), Density::default()).unwrap();
        assert_abs_diff_eq!(p.sectional_area, 0.002256, epsilon = 1e-12);
        assert_abs_diff_eq!(p.theoretical_weight, 0.0177096, epsilon = 1e-12);
        assert_abs_diff_eq!(p.surface_area, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_ct_beam() {
        let p = ct_beam(&toks(&["89", "4"]), Density::default()).unwrap();
        assert_relative_eq!(p.sectional_area, 85.0 * PI * 4.0 / 1e6);
        assert_relative_eq!(p.surface_area, 89.0 * PI / 1000.0);
    }

    #[test]
    fn test_rs_steel() {
        let p = rs_steel(&toks(&["32"]), Density::default()).unwrap();
        assert_abs_diff_eq!(p.sectional_area, 0.0008042, epsilon = 1e-7);
        assert_abs_diff_eq!(p.theoretical_weight, 0.006313, epsilon = 1e-6);
        assert_abs_diff_eq!(p.surface_area, 0.1005, epsilon = 1e-4);
    }

    #[test]
    fn test_weight_is_area_times_density() {
        let density = Density::new(7.93).unwrap();
        let cases: [(fn(&[String], Density) -> CalcResult<SectionProperties>, Vec<String>); 6] = [
            (h_beam, toks(&["300", "200", "6", "8"])),
            (c_beam, toks(&["160", "60", "20", "2.5"])),
            (z_beam, toks(&["160", "60", "20", "2.5"])),
            (rt_beam, toks(&["120", "80", "6"])),
            (ct_beam, toks(&["89", "4"])),
            (rs_steel, toks(&["32"])),
        ];
        for (calc, dims) in cases {
            let p = calc(&dims, density).unwrap();
            assert_eq!(p.theoretical_weight, p.sectional_area * 7.93);
        }
    }

    #[test]
    fn test_dimension_count_mismatch() {
        let err = h_beam(&toks(&["300", "200", "6"]), Density::default()).unwrap_err();
        assert_eq!(err, SectionError::dimension_count(ProfileKind::HBeam, 4, 3));

        let err = h_beam(&toks(&["300", "200", "200", "6", "8"]), Density::default()).unwrap_err();
        assert_eq!(err, SectionError::dimension_count(ProfileKind::HBeam, 4, 5));

        let err = rs_steel(&toks(&["32", "2"]), Density::default()).unwrap_err();
        assert_eq!(err, SectionError::dimension_count(ProfileKind::RsSteel, 1, 2));

        let err = rt_beam(&toks(&["120", "80"]), Density::default()).unwrap_err();
        assert_eq!(err, SectionError::dimension_count(ProfileKind::RtBeam, 3, 2));
    }

    #[test]
    fn test_non_numeric_dimension() {
        let err = c_beam(&toks(&["160", "6o", "20", "2.5"]), Density::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");

        let err = ct_beam(&toks(&["89", ""]), Density::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    fn assert_rejected(result: CalcResult<SectionProperties>) {
        match result {
            Err(SectionError::InvalidDimension { .. }) => {}
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_tube_wall_thicker_than_half() {
        // 2t > d but t < d, so the area formula alone would stay positive
        assert_rejected(ct_beam(&toks(&["10", "6"]), Density::default()));
        assert_rejected(ct_beam(&toks(&["10", "5"]), Density::default()));
        assert_rejected(ct_beam(&toks(&["10", "12"]), Density::default()));

        assert_rejected(rt_beam(&toks(&["20", "10", "8"]), Density::default()));
        assert_rejected(rt_beam(&toks(&["20", "10", "5"]), Density::default()));
        assert_rejected(rt_beam(&toks(&["20", "10", "20"]), Density::default()));
        assert!(rt_beam(&toks(&["20", "10", "4.9"]), Density::default()).is_ok());
    }

    #[test]
    fn test_h_flanges_deeper_than_section() {
        assert_rejected(h_beam(&toks(&["10", "200", "6", "8"]), Density::default()));
        assert_rejected(h_beam(&toks(&["16", "200", "6", "8"]), Density::default()));
        assert_rejected(h_beam(
            &toks(&["18", "200", "150", "6", "10", "8"]),
            Density::default(),
        ));
        assert_rejected(h_beam(&toks(&["300", "5", "6", "8"]), Density::default()));
    }

    #[test]
    fn test_cold_formed_bends_must_fit() {
        // Web 10 < 4t
        assert_rejected(c_beam(&toks(&["10", "60", "20", "2.5"]), Density::default()));
        // Flange 8 < 4t
        assert_rejected(c_beam(&toks(&["160", "8", "20", "2.5"]), Density::default()));
        // Lip 4 < 2t
        assert_rejected(z_beam(&toks(&["160", "60", "4", "2.5"]), Density::default()));
        assert!(z_beam(&toks(&["160", "60", "6", "2.5"]), Density::default()).is_ok());
    }

    #[test]
    fn test_shape_rule_reports_designation_dimensions() {
        let err = ct_beam(&toks(&["10", "6"]), Density::default()).unwrap_err();
        assert_eq!(
            err,
            SectionError::invalid_dimension("10*6", "Wall is thicker than half the tube")
        );
    }
}
