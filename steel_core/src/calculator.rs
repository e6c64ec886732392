//! # Calculation Facade
//!
//! Parse → resolve → compute for a single designation.
//!
//! Two views of the same pipeline:
//!
//! - [`try_calculate`] returns every failure as a classified
//!   [`SectionError`], together with the resolved kind on success.
//! - [`calculate`] folds the recoverable failures (not a designation,
//!   unknown prefix) into `Ok(None)`, the "no result" outcome a batch
//!   driver skips silently. Dimension, lookup and density problems stay
//!   `Err` so they can be reported.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::calculate;
//!
//! let props = calculate("H300*200*6*8", 7.85).unwrap().unwrap();
//! assert!((props.sectional_area - 0.004904).abs() < 1e-9);
//!
//! // Not a designation: no result, no error
//! assert_eq!(calculate("Total", 7.85).unwrap(), None);
//!
//! // A designation with the wrong shape: an error worth reporting
//! assert!(calculate("H300*200", 7.85).is_err());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::{self, SectionProperties};
use crate::designation::{parse_designation, ParsedDesignation};
use crate::errors::{CalcResult, SectionError};
use crate::profiles::ProfileKind;
use crate::tables::{reference_tables, ReferenceTables};
use crate::units::Density;

/// A successful calculation with the information used to produce it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCalculation {
    /// Input as given
    pub designation: String,
    /// Resolved profile kind
    pub kind: ProfileKind,
    /// Parsed type prefix and dimension tokens
    pub parsed: ParsedDesignation,
    /// Density the weight was computed at (t/m³)
    pub density: Density,
    pub properties: SectionProperties,
}

fn run<'t, F>(
    designation: &str,
    density: Option<f64>,
    tables: F,
) -> CalcResult<SectionCalculation>
where
    F: FnOnce() -> CalcResult<&'t ReferenceTables>,
{
    let parsed = parse_designation(designation)?;
    let kind = ProfileKind::resolve(&parsed.type_token)
        .ok_or_else(|| SectionError::unrecognized(&parsed.type_token))?;
    let density = Density::resolve(density)?;

    let properties = calculations::compute(kind, &parsed, density, tables)?;
    debug!(
        "{} -> {:?}: A={} W={} S={}",
        designation,
        kind,
        properties.sectional_area,
        properties.theoretical_weight,
        properties.surface_area
    );

    Ok(SectionCalculation {
        designation: designation.to_string(),
        kind,
        parsed,
        density,
        properties,
    })
}

fn no_result_on_recoverable(
    designation: &str,
    result: CalcResult<SectionCalculation>,
) -> CalcResult<Option<SectionProperties>> {
    match result {
        Ok(calc) => Ok(Some(calc.properties)),
        Err(e) if e.is_recoverable() => {
            debug!("{:?}: no result ({})", designation, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Calculate against the built-in reference tables, classifying every failure.
pub fn try_calculate(designation: &str, density: f64) -> CalcResult<SectionCalculation> {
    run(designation, Some(density), reference_tables)
}

/// Calculate against caller-supplied reference tables, classifying every failure.
pub fn try_calculate_with(
    tables: &ReferenceTables,
    designation: &str,
    density: f64,
) -> CalcResult<SectionCalculation> {
    run(designation, Some(density), || Ok(tables))
}

/// Calculate the three section properties of a designation.
///
/// Returns `Ok(None)` when the input is not a recognizable designation.
///
/// # Errors
///
/// - [`SectionError::DimensionCountMismatch`] / [`SectionError::InvalidDimension`]
///   when the dimensions do not fit the profile kind
/// - [`SectionError::LookupMiss`] for a catalog size that is not tabulated
/// - [`SectionError::InvalidDensity`] for a zero, negative or non-finite density
pub fn calculate(designation: &str, density: f64) -> CalcResult<Option<SectionProperties>> {
    no_result_on_recoverable(designation, try_calculate(designation, density))
}

/// [`calculate`] against caller-supplied reference tables
pub fn calculate_with(
    tables: &ReferenceTables,
    designation: &str,
    density: f64,
) -> CalcResult<Option<SectionProperties>> {
    no_result_on_recoverable(designation, try_calculate_with(tables, designation, density))
}

/// [`calculate`] with an optional density; `None` means the reference density 7.85.
pub fn calculate_default(
    designation: &str,
    density: Option<f64>,
) -> CalcResult<Option<SectionProperties>> {
    no_result_on_recoverable(designation, run(designation, density, reference_tables))
}
