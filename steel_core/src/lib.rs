//! # steel_core - Steel Section Property Engine
//!
//! `steel_core` turns a steel section designation such as `H300*200*6*8`,
//! `I10` or `UA25*16*3` into three quantities per meter of member length:
//! sectional area, theoretical weight and developed surface area.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions; density is an argument, never a global
//! - **Closed set of kinds**: One function per [`ProfileKind`], chosen by an
//!   exhaustive match
//! - **Classified failures**: "not a designation" is distinguishable from
//!   "a designation we cannot compute"
//! - **Immutable reference data**: Catalog tables are parsed once and shared
//!
//! ## Quick Start
//!
//! ```rust
//! use steel_core::calculate;
//!
//! let props = calculate("I10", 7.85).unwrap().expect("a known designation");
//! println!(
//!     "A = {} m², W = {} t/m, S = {} m²/m",
//!     props.sectional_area, props.theoretical_weight, props.surface_area
//! );
//! ```
//!
//! ## Modules
//!
//! - [`designation`] - Designation parser
//! - [`profiles`] - Profile kinds and prefix aliases
//! - [`tables`] - Reference tables for catalog profiles
//! - [`calculations`] - Parametric formulas and catalog lookups
//! - [`calculator`] - The parse → resolve → compute facade
//! - [`units`] - Unit wrappers and the validated [`Density`]
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod calculator;
pub mod designation;
pub mod errors;
pub mod profiles;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{OutputSelection, SectionProperties};
pub use calculator::{
    calculate, calculate_default, calculate_with, try_calculate, try_calculate_with,
    SectionCalculation,
};
pub use designation::{parse_designation, ParsedDesignation};
pub use errors::{CalcResult, SectionError};
pub use profiles::ProfileKind;
pub use tables::{reference_tables, ReferenceTables};
pub use units::{Density, REFERENCE_DENSITY};
