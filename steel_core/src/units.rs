//! # Unit Types
//!
//! Lightweight newtype wrappers for the few units the engine works in.
//!
//! ## Conventions
//!
//! - Designations and reference tables give lengths in millimeters (mm)
//!   and areas in square millimeters (mm²).
//! - Results are reported per meter of member length: sectional area in m²,
//!   surface area in m²/m (the developed perimeter in m), and theoretical
//!   weight in t/m (area × density in t/m³).
//! - Reference table weights are kg/m at the reference density 7.85 t/m³.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::units::{Millimeters, Meters, SquareMeters, SquareMillimeters};
//!
//! let perimeter: Meters = Millimeters(1384.0).into();
//! assert_eq!(perimeter.0, 1.384);
//!
//! let area: SquareMeters = SquareMillimeters(4904.0).into();
//! assert!((area.0 - 0.004904).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, SectionError};

/// Density at which reference table weights are tabulated (carbon steel, t/m³)
pub const REFERENCE_DENSITY: f64 = 7.85;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl From<SquareMillimeters> for SquareMeters {
    fn from(mm2: SquareMillimeters) -> Self {
        SquareMeters(mm2.0 / 1_000_000.0)
    }
}

// ============================================================================
// Density
// ============================================================================

/// Material density in t/m³ (numerically equal to g/cm³).
///
/// Always finite and strictly positive; construct with [`Density::new`] or
/// [`Density::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Density(f64);

impl Density {
    /// Validate a density value
    pub fn new(value: f64) -> CalcResult<Self> {
        if !value.is_finite() {
            return Err(SectionError::invalid_density(value, "Density must be finite"));
        }
        if value <= 0.0 {
            return Err(SectionError::invalid_density(value, "Density must be positive"));
        }
        Ok(Density(value))
    }

    /// Use the given density, or the reference density when none is given.
    ///
    /// A supplied zero is rejected rather than replaced by the default.
    ///
    /// ```rust
    /// use steel_core::units::Density;
    ///
    /// assert_eq!(Density::resolve(None).unwrap().value(), 7.85);
    /// assert_eq!(Density::resolve(Some(7.93)).unwrap().value(), 7.93);
    /// assert!(Density::resolve(Some(0.0)).is_err());
    /// ```
    pub fn resolve(value: Option<f64>) -> CalcResult<Self> {
        match value {
            Some(v) => Density::new(v),
            None => Ok(Density::default()),
        }
    }

    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Ratio of this density to the reference density.
    ///
    /// Scales a tabulated weight to this density.
    pub fn reference_ratio(self) -> f64 {
        self.0 / REFERENCE_DENSITY
    }
}

impl Default for Density {
    fn default() -> Self {
        Density(REFERENCE_DENSITY)
    }
}

impl TryFrom<f64> for Density {
    type Error = SectionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Density::new(value)
    }
}

impl From<Density> for f64 {
    fn from(density: Density) -> Self {
        density.0
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} t/m³", self.0)
    }
}
