//! Catalog Sections
//!
//! Hot-rolled profiles whose properties come from the reference tables.
//! The designation is normalized to a table key, the row is found by exact
//! match, and its tabulated values are converted:
//!
//! - area: `SectionalArea / 1_000_000` (mm² → m²)
//! - weight: `TheoreticalWeight / 1000 / 7.85 × density` (kg/m at the
//!   reference density → t/m at the requested density)
//! - surface: a per-family developed perimeter from the tabulated
//!   dimensions, mm → m
//!
//! | Family | Perimeter |
//! |---|---|
//! | I-beam | `2H + 4B` |
//! | HW/HM/HN/HT | `2H + 4B - 2T1` |
//! | Channel | `2H + 4B - 2D - 2T` |
//! | Equal angle | `4B - 2D` |
//! | Unequal angle | `2B1 + 2B2 - 2D` |

use log::trace;

use super::SectionProperties;
use crate::designation::ParsedDesignation;
use crate::errors::{CalcResult, SectionError};
use crate::profiles::ProfileKind;
use crate::tables::{
    AngleRow, CatalogRow, CatalogTable, ChannelRow, HxBeamRow, IBeamRow, ReferenceTables,
    UnequalAngleRow,
};
use crate::units::{Density, Meters, Millimeters, SquareMeters, SquareMillimeters};

/// Catalog row with a developed perimeter
pub trait CatalogSection: CatalogRow {
    /// Number of dimensions in this family's designation
    const DIMENSIONS: usize;

    /// Developed outer perimeter (mm)
    fn developed_perimeter(&self) -> Millimeters;
}

impl CatalogSection for IBeamRow {
    const DIMENSIONS: usize = 1;

    fn developed_perimeter(&self) -> Millimeters {
        Millimeters(2.0 * self.h_mm + 4.0 * self.b_mm)
    }
}

impl CatalogSection for HxBeamRow {
    const DIMENSIONS: usize = 2;

    fn developed_perimeter(&self) -> Millimeters {
        Millimeters(2.0 * self.h_mm + 4.0 * self.b_mm - 2.0 * self.t1_mm)
    }
}

impl CatalogSection for ChannelRow {
    const DIMENSIONS: usize = 1;

    fn developed_perimeter(&self) -> Millimeters {
        Millimeters(2.0 * self.h_mm + 4.0 * self.b_mm - 2.0 * self.d_mm - 2.0 * self.t_mm)
    }
}

impl CatalogSection for AngleRow {
    const DIMENSIONS: usize = 2;

    fn developed_perimeter(&self) -> Millimeters {
        Millimeters(4.0 * self.b_mm - 2.0 * self.d_mm)
    }
}

impl CatalogSection for UnequalAngleRow {
    const DIMENSIONS: usize = 3;

    fn developed_perimeter(&self) -> Millimeters {
        Millimeters(2.0 * self.b1_mm + 2.0 * self.b2_mm - 2.0 * self.d_mm)
    }
}

/// Table key for a designation of a catalog kind.
///
/// The kind's canonical prefix replaces whatever alias was typed, so
/// `工字钢10` and `I10` share the key `I10`. H-beam series keep their own
/// token (`HW100*100`).
///
/// ```rust
/// use steel_core::calculations::catalog::table_key;
/// use steel_core::designation::parse_designation;
/// use steel_core::profiles::ProfileKind;
///
/// let parsed = parse_designation("A50x5").unwrap();
/// assert_eq!(table_key(ProfileKind::ASteel, &parsed), "∟50*5");
/// ```
pub fn table_key(kind: ProfileKind, parsed: &ParsedDesignation) -> String {
    let prefix = kind.catalog_prefix().unwrap_or(parsed.type_token.as_str());
    format!("{}{}", prefix, parsed.joined_dimensions())
}

/// Convert a matched row to section properties
pub fn from_row<R: CatalogSection>(row: &R, density: Density) -> SectionProperties {
    let area: SquareMeters = SquareMillimeters(row.sectional_area_mm2()).into();
    let surface: Meters = row.developed_perimeter().into();

    SectionProperties {
        sectional_area: area.0,
        theoretical_weight: row.theoretical_weight_kg_m() / 1000.0 * density.reference_ratio(),
        surface_area: surface.0,
    }
}

fn lookup<R: CatalogSection>(
    table: &CatalogTable<R>,
    parsed: &ParsedDesignation,
    density: Density,
) -> CalcResult<SectionProperties> {
    if parsed.dimension_count() != R::DIMENSIONS {
        return Err(SectionError::dimension_count(
            R::KIND,
            R::DIMENSIONS,
            parsed.dimension_count(),
        ));
    }
    let key = table_key(R::KIND, parsed);
    let row = table.lookup(&key)?;
    trace!("{} matched row '{}'", R::KIND, row.designation());
    Ok(from_row(row, density))
}

/// `HW`/`HM`/`HN`/`HT` - nominal H*B
pub fn hx_beam(
    parsed: &ParsedDesignation,
    density: Density,
    tables: &ReferenceTables,
) -> CalcResult<SectionProperties> {
    lookup(&tables.h_beams, parsed, density)
}

/// `I` - size number, e.g. `I20a`
pub fn i_beam(
    parsed: &ParsedDesignation,
    density: Density,
    tables: &ReferenceTables,
) -> CalcResult<SectionProperties> {
    lookup(&tables.i_beams, parsed, density)
}

/// `[` - size number, e.g. `[12.6`
pub fn c_steel(
    parsed: &ParsedDesignation,
    density: Density,
    tables: &ReferenceTables,
) -> CalcResult<SectionProperties> {
    lookup(&tables.channels, parsed, density)
}

/// `∟` - leg*thickness
pub fn a_steel(
    parsed: &ParsedDesignation,
    density: Density,
    tables: &ReferenceTables,
) -> CalcResult<SectionProperties> {
    lookup(&tables.angles, parsed, density)
}

/// `UA` - long leg*short leg*thickness
pub fn ua_steel(
    parsed: &ParsedDesignation,
    density: Density,
    tables: &ReferenceTables,
) -> CalcResult<SectionProperties> {
    lookup(&tables.unequal_angles, parsed, density)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designation::parse_designation;
    use crate::tables::reference_tables;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn parsed(input: &str) -> ParsedDesignation {
        parse_designation(input).unwrap()
    }

    #[test]
    fn test_i_beam() {
        let tables = reference_tables().unwrap();
        let p = i_beam(&parsed("I10"), Density::default(), tables).unwrap();
        assert_abs_diff_eq!(p.sectional_area, 0.0014345, epsilon = 1e-12);
        assert_abs_diff_eq!(p.theoretical_weight, 0.011261, epsilon = 1e-12);
        assert_abs_diff_eq!(p.surface_area, 0.472, epsilon = 1e-12);
    }

    #[test]
    fn test_hx_beam() {
        let tables = reference_tables().unwrap();
        let p = hx_beam(&parsed("HW100*100"), Density::default(), tables).unwrap();
        assert_abs_diff_eq!(p.sectional_area, 0.002158, epsilon = 1e-12);
        assert_abs_diff_eq!(p.theoretical_weight, 0.0169, epsilon = 1e-12);
        assert_abs_diff_eq!(p.surface_area, 0.588, epsilon = 1e-12);
    }

    #[test]
    fn test_ua_steel() {
        let tables = reference_tables().unwrap();
        let p = ua_steel(&parsed("UA25*16*3"), Density::default(), tables).unwrap();
        assert_abs_diff_eq!(p.sectional_area, 0.0001162, epsilon = 1e-12);
        assert_abs_diff_eq!(p.theoretical_weight, 0.000912, epsilon = 1e-12);
        assert_abs_diff_eq!(p.surface_area, 0.076, epsilon = 1e-12);
    }

    #[test]
    fn test_c_steel() {
        let tables = reference_tables().unwrap();
        let p = c_steel(&parsed("[10"), Density::default(), tables).unwrap();
        // 200 + 192 - 10.6 - 17
        assert_abs_diff_eq!(p.surface_area, 0.3644, epsilon = 1e-12);
        assert_abs_diff_eq!(p.sectional_area, 0.0012748, epsilon = 1e-12);
    }

    #[test]
    fn test_a_steel() {
        let tables = reference_tables().unwrap();
        let p = a_steel(&parsed("∟50*5"), Density::default(), tables).unwrap();
        // 200 - 10
        assert_abs_diff_eq!(p.surface_area, 0.19, epsilon = 1e-12);
        assert_abs_diff_eq!(p.theoretical_weight, 0.00377, epsilon = 1e-12);
    }

    #[test]
    fn test_aliases_share_rows() {
        let tables = reference_tables().unwrap();
        let d = Density::default();
        assert_eq!(
            i_beam(&parsed("工字钢20a"), d, tables).unwrap(),
            i_beam(&parsed("I20a"), d, tables).unwrap()
        );
        assert_eq!(
            c_steel(&parsed("槽钢12.6"), d, tables).unwrap(),
            c_steel(&parsed("CS12.6"), d, tables).unwrap()
        );
        assert_eq!(
            a_steel(&parsed("A50x5"), d, tables).unwrap(),
            a_steel(&parsed("∟50*5"), d, tables).unwrap()
        );
    }

    #[test]
    fn test_density_scales_weight_linearly() {
        let tables = reference_tables().unwrap();
        let base = i_beam(&parsed("I32b"), Density::new(7.85).unwrap(), tables).unwrap();
        let double = i_beam(&parsed("I32b"), Density::new(15.7).unwrap(), tables).unwrap();
        assert_relative_eq!(double.theoretical_weight, 2.0 * base.theoretical_weight);
        assert_eq!(double.sectional_area, base.sectional_area);
        assert_eq!(double.surface_area, base.surface_area);
    }

    #[test]
    fn test_lookup_miss() {
        let tables = reference_tables().unwrap();
        let err = i_beam(&parsed("I11"), Density::default(), tables).unwrap_err();
        assert_eq!(err, SectionError::lookup_miss(ProfileKind::IBeam, "I11"));

        let err = hx_beam(&parsed("HW100*99"), Density::default(), tables).unwrap_err();
        assert_eq!(err, SectionError::lookup_miss(ProfileKind::HxBeam, "HW100*99"));
    }

    #[test]
    fn test_catalog_dimension_count() {
        let tables = reference_tables().unwrap();
        let err = hx_beam(&parsed("HW100"), Density::default(), tables).unwrap_err();
        assert_eq!(err, SectionError::dimension_count(ProfileKind::HxBeam, 2, 1));

        let err = ua_steel(&parsed("UA25*16"), Density::default(), tables).unwrap_err();
        assert_eq!(err, SectionError::dimension_count(ProfileKind::UaSteel, 3, 2));
    }

    #[test]
    fn test_table_key() {
        assert_eq!(table_key(ProfileKind::IBeam, &parsed("UB25a")), "I25a");
        assert_eq!(table_key(ProfileKind::HxBeam, &parsed("HN200x100")), "HN200*100");
        assert_eq!(table_key(ProfileKind::CSteel, &parsed("槽钢10")), "[10");
        assert_eq!(table_key(ProfileKind::UaSteel, &parsed("不等边角钢25*16*3")), "UA25*16*3");
    }
}
