//! # Section Calculations
//!
//! One pure function per [`ProfileKind`], selected by an exhaustive match in
//! [`compute`]:
//!
//! - [`parametric`] - closed-form formulas over the dimensions in the
//!   designation (H, C, Z, RT, CT, RS)
//! - [`catalog`] - reference table lookup rescaled to the requested density
//!   (I, HW/HM/HN/HT, channel, angles)
//!
//! Every function returns a complete [`SectionProperties`] or a single
//! [`SectionError`]; nothing partial is ever returned.

pub mod catalog;
pub mod parametric;

use serde::{Deserialize, Serialize};

use crate::designation::ParsedDesignation;
use crate::errors::{CalcResult, SectionError};
use crate::profiles::ProfileKind;
use crate::tables::ReferenceTables;
use crate::units::{Density, Meters, Millimeters, SquareMeters, SquareMillimeters};

/// The three derived quantities for one designation.
///
/// All values are per meter of member length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (m²)
    pub sectional_area: f64,
    /// Mass per unit length at the requested density (t/m)
    pub theoretical_weight: f64,
    /// Developed outer surface per unit length (m²/m)
    pub surface_area: f64,
}

impl SectionProperties {
    /// Properties of a parametric section.
    ///
    /// Weight is exactly `sectional_area * density`. A non-positive or
    /// non-finite area means the dimensions do not describe a real section.
    pub fn from_geometry(geometry: Geometry, density: Density) -> CalcResult<Self> {
        let area: SquareMeters = geometry.area.into();
        let perimeter: Meters = geometry.perimeter.into();

        if !area.0.is_finite() || area.0 <= 0.0 {
            return Err(SectionError::invalid_dimension(
                format!("{} mm²", geometry.area.0),
                "Dimensions give a non-positive sectional area",
            ));
        }

        Ok(SectionProperties {
            sectional_area: area.0,
            theoretical_weight: area.0 * density.value(),
            surface_area: perimeter.0,
        })
    }

    /// `[sectional_area, theoretical_weight, surface_area]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.sectional_area, self.theoretical_weight, self.surface_area]
    }

    /// The enabled quantities, in the usual order
    pub fn select(&self, outputs: &OutputSelection) -> Vec<f64> {
        let enabled = [
            outputs.sectional_area,
            outputs.theoretical_weight,
            outputs.surface_area,
        ];
        self.to_array()
            .into_iter()
            .zip(enabled)
            .filter_map(|(value, on)| on.then_some(value))
            .collect()
    }
}

/// Which of the three quantities a caller wants reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSelection {
    pub sectional_area: bool,
    pub theoretical_weight: bool,
    pub surface_area: bool,
}

impl Default for OutputSelection {
    fn default() -> Self {
        OutputSelection {
            sectional_area: true,
            theoretical_weight: true,
            surface_area: true,
        }
    }
}

impl OutputSelection {
    /// Number of enabled quantities
    pub fn count(&self) -> usize {
        [self.sectional_area, self.theoretical_weight, self.surface_area]
            .iter()
            .filter(|on| **on)
            .count()
    }
}

/// Raw cross-section geometry in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Sectional area (mm²)
    pub area: SquareMillimeters,
    /// Developed perimeter (mm)
    pub perimeter: Millimeters,
}

/// Compute the properties of a resolved designation.
///
/// `tables` is only called for catalog kinds, so parametric profiles work
/// even when no reference data is available.
pub fn compute<'t, F>(
    kind: ProfileKind,
    parsed: &ParsedDesignation,
    density: Density,
    tables: F,
) -> CalcResult<SectionProperties>
where
    F: FnOnce() -> CalcResult<&'t ReferenceTables>,
{
    let dims = &parsed.dimension_tokens;
    match kind {
        ProfileKind::HBeam => parametric::h_beam(dims, density),
        ProfileKind::CBeam => parametric::c_beam(dims, density),
        ProfileKind::ZBeam => parametric::z_beam(dims, density),
        ProfileKind::RtBeam => parametric::rt_beam(dims, density),
        ProfileKind::CtBeam => parametric::ct_beam(dims, density),
        ProfileKind::RsSteel => parametric::rs_steel(dims, density),
        ProfileKind::HxBeam => catalog::hx_beam(parsed, density, tables()?),
        ProfileKind::IBeam => catalog::i_beam(parsed, density, tables()?),
        ProfileKind::CSteel => catalog::c_steel(parsed, density, tables()?),
        ProfileKind::ASteel => catalog::a_steel(parsed, density, tables()?),
        ProfileKind::UaSteel => catalog::ua_steel(parsed, density, tables()?),
    }
}
