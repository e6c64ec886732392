//! Reference Table Store
//!
//! Tabulated dimensions and properties for the catalog profile families,
//! per the Chinese hot-rolled section standards (GB/T 706 for I-beams,
//! channels and angles; GB/T 11263 for the HW/HM/HN/HT H-beam series).
//!
//! ## Data Source
//!
//! Five CSV files under `assets/tables/` are embedded in the binary:
//!
//! | File | Columns |
//! |---|---|
//! | `ibeam.csv` | `Type,H,B,D,T,R,R1,SectionalArea,TheoreticalWeight` |
//! | `hxbeam.csv` | `Type,H,B,T1,T2,R,SectionalArea,TheoreticalWeight` |
//! | `csteel.csv` | `Type,H,B,D,T,R,R1,SectionalArea,TheoreticalWeight` |
//! | `asteel.csv` | `Type,B,D,R,SectionalArea,TheoreticalWeight` |
//! | `uasteel.csv` | `Type,B1,B2,D,R,SectionalArea,TheoreticalWeight` |
//!
//! Lengths are mm, `SectionalArea` is mm², `TheoreticalWeight` is kg/m at
//! the reference density 7.85. `Type` is the row key (`I10`, `HW100*100`,
//! `[10`, `∟20*3`, `UA25*16*3`). Column names are matched case-insensitively
//! and column order is free.
//!
//! ## Lifetime
//!
//! The process-wide store is parsed once on first use and never mutated, so
//! it can be shared by any number of threads. Other stores can be built with
//! [`ReferenceTables::load_with`] or [`ReferenceTables::load_from_dir`].
//!
//! ## Example
//!
//! ```rust
//! use steel_core::tables::reference_tables;
//!
//! let tables = reference_tables().unwrap();
//! let i10 = tables.i_beams.lookup("I10").unwrap();
//! assert_eq!(i10.h_mm, 100.0);
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use log::{error, info, trace, warn};
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, SectionError};
use crate::profiles::ProfileKind;

#[derive(RustEmbed)]
#[folder = "assets/tables/"]
struct TableAssets;

static REFERENCE_TABLES: Lazy<CalcResult<ReferenceTables>> = Lazy::new(|| {
    let tables = ReferenceTables::load_embedded();
    match &tables {
        Ok(t) => info!("Loaded {} reference rows from embedded tables", t.len()),
        Err(e) => error!("Embedded reference tables are unusable: {}", e),
    }
    tables
});

/// The process-wide reference tables built from the embedded CSV files.
///
/// A load failure is remembered and returned on every call.
pub fn reference_tables() -> CalcResult<&'static ReferenceTables> {
    Lazy::force(&REFERENCE_TABLES).as_ref().map_err(Clone::clone)
}

// ============================================================================
// CSV Records
// ============================================================================

/// One data line of a table, addressed by header name
pub struct CsvRecord<'a> {
    table: &'a str,
    line: usize,
    headers: &'a [String],
    fields: Vec<&'a str>,
}

impl<'a> CsvRecord<'a> {
    fn field(&self, column: &str) -> CalcResult<&'a str> {
        let idx = self
            .headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| {
                SectionError::table_load(self.table, format!("Missing '{}' column", column))
            })?;
        self.fields.get(idx).map(|f| f.trim()).ok_or_else(|| {
            SectionError::table_load(
                self.table,
                format!("Line {}: no value for '{}'", self.line, column),
            )
        })
    }

    /// Non-empty text field
    pub fn text(&self, column: &str) -> CalcResult<String> {
        let value = self.field(column)?;
        if value.is_empty() {
            return Err(SectionError::table_load(
                self.table,
                format!("Line {}: empty '{}'", self.line, column),
            ));
        }
        Ok(value.to_string())
    }

    /// Numeric field
    pub fn number(&self, column: &str) -> CalcResult<f64> {
        let value = self.field(column)?;
        f64::from_str(value)
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                SectionError::table_load(
                    self.table,
                    format!("Line {}: '{}' is not a number for '{}'", self.line, value, column),
                )
            })
    }
}

// ============================================================================
// Row Types
// ============================================================================

/// A row of one of the catalog tables
pub trait CatalogRow: Sized {
    /// Embedded file name
    const TABLE: &'static str;
    /// Profile kind the table backs
    const KIND: ProfileKind;

    /// Build a row from a CSV record
    fn from_record(record: &CsvRecord<'_>) -> CalcResult<Self>;
    /// Row key
    fn designation(&self) -> &str;
    /// Tabulated sectional area (mm²)
    fn sectional_area_mm2(&self) -> f64;
    /// Tabulated weight at the reference density (kg/m)
    fn theoretical_weight_kg_m(&self) -> f64;
}

/// Hot-rolled I-beam row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IBeamRow {
    pub designation: String,
    /// Depth
    pub h_mm: f64,
    /// Flange width
    pub b_mm: f64,
    /// Web thickness
    pub d_mm: f64,
    /// Mean flange thickness
    pub t_mm: f64,
    /// Inner fillet radius
    pub r_mm: f64,
    /// Flange toe radius
    pub r1_mm: f64,
    pub sectional_area_mm2: f64,
    pub theoretical_weight_kg_m: f64,
}

/// HW/HM/HN/HT H-beam row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HxBeamRow {
    pub designation: String,
    /// Depth
    pub h_mm: f64,
    /// Flange width
    pub b_mm: f64,
    /// Web thickness
    pub t1_mm: f64,
    /// Flange thickness
    pub t2_mm: f64,
    /// Fillet radius
    pub r_mm: f64,
    pub sectional_area_mm2: f64,
    pub theoretical_weight_kg_m: f64,
}

/// Hot-rolled channel row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRow {
    pub designation: String,
    /// Depth
    pub h_mm: f64,
    /// Flange width
    pub b_mm: f64,
    /// Web thickness
    pub d_mm: f64,
    /// Mean flange thickness
    pub t_mm: f64,
    /// Inner fillet radius
    pub r_mm: f64,
    /// Flange toe radius
    pub r1_mm: f64,
    pub sectional_area_mm2: f64,
    pub theoretical_weight_kg_m: f64,
}

/// Equal-leg angle row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleRow {
    pub designation: String,
    /// Leg length
    pub b_mm: f64,
    /// Leg thickness
    pub d_mm: f64,
    /// Inner fillet radius
    pub r_mm: f64,
    pub sectional_area_mm2: f64,
    pub theoretical_weight_kg_m: f64,
}

/// Unequal-leg angle row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnequalAngleRow {
    pub designation: String,
    /// Long leg
    pub b1_mm: f64,
    /// Short leg
    pub b2_mm: f64,
    /// Leg thickness
    pub d_mm: f64,
    /// Inner fillet radius
    pub r_mm: f64,
    pub sectional_area_mm2: f64,
    pub theoretical_weight_kg_m: f64,
}

macro_rules! impl_catalog_row {
    ($row:ty, $table:expr, $kind:expr, |$rec:ident| $build:expr) => {
        impl CatalogRow for $row {
            const TABLE: &'static str = $table;
            const KIND: ProfileKind = $kind;

            fn from_record($rec: &CsvRecord<'_>) -> CalcResult<Self> {
                Ok($build)
            }

            fn designation(&self) -> &str {
                &self.designation
            }

            fn sectional_area_mm2(&self) -> f64 {
                self.sectional_area_mm2
            }

            fn theoretical_weight_kg_m(&self) -> f64 {
                self.theoretical_weight_kg_m
            }
        }
    };
}

impl_catalog_row!(IBeamRow, "ibeam.csv", ProfileKind::IBeam, |rec| IBeamRow {
    designation: rec.text("Type")?,
    h_mm: rec.number("H")?,
    b_mm: rec.number("B")?,
    d_mm: rec.number("D")?,
    t_mm: rec.number("T")?,
    r_mm: rec.number("R")?,
    r1_mm: rec.number("R1")?,
    sectional_area_mm2: rec.number("SectionalArea")?,
    theoretical_weight_kg_m: rec.number("TheoreticalWeight")?,
});

impl_catalog_row!(HxBeamRow, "hxbeam.csv", ProfileKind::HxBeam, |rec| HxBeamRow {
    designation: rec.text("Type")?,
    h_mm: rec.number("H")?,
    b_mm: rec.number("B")?,
    t1_mm: rec.number("T1")?,
    t2_mm: rec.number("T2")?,
    r_mm: rec.number("R")?,
    sectional_area_mm2: rec.number("SectionalArea")?,
    theoretical_weight_kg_m: rec.number("TheoreticalWeight")?,
});

impl_catalog_row!(ChannelRow, "csteel.csv", ProfileKind::CSteel, |rec| ChannelRow {
    designation: rec.text("Type")?,
    h_mm: rec.number("H")?,
    b_mm: rec.number("B")?,
    d_mm: rec.number("D")?,
    t_mm: rec.number("T")?,
    r_mm: rec.number("R")?,
    r1_mm: rec.number("R1")?,
    sectional_area_mm2: rec.number("SectionalArea")?,
    theoretical_weight_kg_m: rec.number("TheoreticalWeight")?,
});

impl_catalog_row!(AngleRow, "asteel.csv", ProfileKind::ASteel, |rec| AngleRow {
    designation: rec.text("Type")?,
    b_mm: rec.number("B")?,
    d_mm: rec.number("D")?,
    r_mm: rec.number("R")?,
    sectional_area_mm2: rec.number("SectionalArea")?,
    theoretical_weight_kg_m: rec.number("TheoreticalWeight")?,
});

impl_catalog_row!(UnequalAngleRow, "uasteel.csv", ProfileKind::UaSteel, |rec| UnequalAngleRow {
    designation: rec.text("Type")?,
    b1_mm: rec.number("B1")?,
    b2_mm: rec.number("B2")?,
    d_mm: rec.number("D")?,
    r_mm: rec.number("R")?,
    sectional_area_mm2: rec.number("SectionalArea")?,
    theoretical_weight_kg_m: rec.number("TheoreticalWeight")?,
});

// ============================================================================
// Tables
// ============================================================================

/// One catalog table, rows in file order with an index by designation
#[derive(Debug, Clone)]
pub struct CatalogTable<R> {
    rows: Vec<R>,
    index: HashMap<String, usize>,
}

impl<R: CatalogRow> CatalogTable<R> {
    /// Parse a table from CSV text.
    ///
    /// The first line is the header. Blank lines are skipped. When a
    /// designation repeats, the first row keeps the key.
    pub fn from_csv(text: &str) -> CalcResult<Self> {
        let mut lines = text.lines().enumerate();

        let (_, header_line) = lines
            .next()
            .ok_or_else(|| SectionError::table_load(R::TABLE, "CSV file is empty"))?;
        let headers: Vec<String> = header_line
            .trim_start_matches('\u{feff}')
            .split(',')
            .map(|h| h.trim().to_string())
            .collect();

        let mut table = CatalogTable {
            rows: Vec::new(),
            index: HashMap::new(),
        };

        for (i, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let record = CsvRecord {
                table: R::TABLE,
                line: i + 1,
                headers: &headers,
                fields: line.split(',').collect(),
            };
            let row = R::from_record(&record)?;

            let key = row.designation().to_string();
            if table.index.contains_key(&key) {
                warn!("{}: duplicate designation '{}' on line {} ignored", R::TABLE, key, i + 1);
                continue;
            }
            table.index.insert(key, table.rows.len());
            table.rows.push(row);
        }

        Ok(table)
    }

    /// Look up a row by exact designation
    pub fn lookup(&self, key: &str) -> CalcResult<&R> {
        trace!("{} lookup '{}'", R::TABLE, key);
        self.index
            .get(key)
            .map(|&i| &self.rows[i])
            .ok_or_else(|| SectionError::lookup_miss(R::KIND, key))
    }

    /// All designations in file order
    pub fn designations(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.designation()).collect()
    }

    /// Designations starting with `prefix`
    pub fn search(&self, prefix: &str) -> Vec<&str> {
        self.rows
            .iter()
            .map(|r| r.designation())
            .filter(|d| d.starts_with(prefix))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All catalog tables, one per catalog profile kind
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub i_beams: CatalogTable<IBeamRow>,
    pub h_beams: CatalogTable<HxBeamRow>,
    pub channels: CatalogTable<ChannelRow>,
    pub angles: CatalogTable<AngleRow>,
    pub unequal_angles: CatalogTable<UnequalAngleRow>,
}

impl ReferenceTables {
    /// Build the tables from any source of CSV text.
    ///
    /// `read` is called once per table file name, e.g. `ibeam.csv`.
    pub fn load_with<F>(mut read: F) -> CalcResult<Self>
    where
        F: FnMut(&'static str) -> CalcResult<String>,
    {
        Ok(ReferenceTables {
            i_beams: CatalogTable::from_csv(&read(IBeamRow::TABLE)?)?,
            h_beams: CatalogTable::from_csv(&read(HxBeamRow::TABLE)?)?,
            channels: CatalogTable::from_csv(&read(ChannelRow::TABLE)?)?,
            angles: CatalogTable::from_csv(&read(AngleRow::TABLE)?)?,
            unequal_angles: CatalogTable::from_csv(&read(UnequalAngleRow::TABLE)?)?,
        })
    }

    /// Build the tables from the CSV files embedded at compile time
    pub fn load_embedded() -> CalcResult<Self> {
        Self::load_with(|name| {
            let file = TableAssets::get(name)
                .ok_or_else(|| SectionError::table_load(name, "Not embedded"))?;
            String::from_utf8(file.data.into_owned())
                .map_err(|e| SectionError::table_load(name, format!("Invalid UTF-8: {}", e)))
        })
    }

    /// Build the tables from a directory holding the five CSV files
    pub fn load_from_dir(dir: &Path) -> CalcResult<Self> {
        Self::load_with(|name| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| {
                SectionError::table_load(name, format!("Failed to read {}: {}", path.display(), e))
            })
        })
    }

    /// Designations available for a catalog kind (empty for parametric kinds)
    pub fn designations(&self, kind: ProfileKind) -> Vec<&str> {
        match kind {
            ProfileKind::IBeam => self.i_beams.designations(),
            ProfileKind::HxBeam => self.h_beams.designations(),
            ProfileKind::CSteel => self.channels.designations(),
            ProfileKind::ASteel => self.angles.designations(),
            ProfileKind::UaSteel => self.unequal_angles.designations(),
            _ => Vec::new(),
        }
    }

    /// Designations of a catalog kind starting with `prefix`
    pub fn search(&self, kind: ProfileKind, prefix: &str) -> Vec<&str> {
        match kind {
            ProfileKind::IBeam => self.i_beams.search(prefix),
            ProfileKind::HxBeam => self.h_beams.search(prefix),
            ProfileKind::CSteel => self.channels.search(prefix),
            ProfileKind::ASteel => self.angles.search(prefix),
            ProfileKind::UaSteel => self.unequal_angles.search(prefix),
            _ => Vec::new(),
        }
    }

    /// Total number of rows across all tables
    pub fn len(&self) -> usize {
        self.i_beams.len()
            + self.h_beams.len()
            + self.channels.len()
            + self.angles.len()
            + self.unequal_angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
