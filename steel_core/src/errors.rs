//! # Error Types
//!
//! Structured error types for steel_core. Every failed calculation ends in
//! exactly one of these variants, so a batch driver can tell a row it should
//! skip silently from a row it should report.
//!
//! ## Classes
//!
//! - **Recoverable**: [`SectionError::ParseFailure`] and
//!   [`SectionError::Unrecognized`]. The facade turns these into "no result".
//! - **Fatal per call**: [`SectionError::DimensionCountMismatch`] and
//!   [`SectionError::LookupMiss`].
//! - **Caller contract**: [`SectionError::InvalidDimension`] and
//!   [`SectionError::InvalidDensity`].
//!
//! ## Example
//!
//! ```rust
//! use steel_core::errors::{CalcResult, SectionError};
//!
//! fn check_thickness(t_mm: f64) -> CalcResult<()> {
//!     if t_mm <= 0.0 {
//!         return Err(SectionError::invalid_dimension(
//!             t_mm.to_string(),
//!             "Thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_thickness(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profiles::ProfileKind;

/// Result type alias for steel_core operations
pub type CalcResult<T> = Result<T, SectionError>;

/// Structured error type for designation parsing and section calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// Input does not split into a type prefix and a numeric suffix
    #[error("Cannot parse designation '{input}'")]
    ParseFailure { input: String },

    /// Type prefix is not a known profile alias
    #[error("Unrecognized profile type '{type_token}'")]
    Unrecognized { type_token: String },

    /// Wrong number of dimensions for the profile kind
    #[error("{kind} expects {expected} dimensions, found {found}")]
    DimensionCountMismatch {
        kind: ProfileKind,
        expected: usize,
        found: usize,
    },

    /// No reference table row matches the designation
    #[error("No {kind} row for '{key}' in the reference table")]
    LookupMiss { kind: ProfileKind, key: String },

    /// A dimension token is not a usable number
    #[error("Invalid dimension '{token}': {reason}")]
    InvalidDimension { token: String, reason: String },

    /// Density is zero, negative, or not finite
    #[error("Invalid density {value}: {reason}")]
    InvalidDensity { value: String, reason: String },

    /// A reference table could not be loaded
    #[error("Reference table '{table}' failed to load: {reason}")]
    TableLoad { table: String, reason: String },
}

impl SectionError {
    /// Create a ParseFailure error
    pub fn parse_failure(input: impl Into<String>) -> Self {
        SectionError::ParseFailure {
            input: input.into(),
        }
    }

    /// Create an Unrecognized error
    pub fn unrecognized(type_token: impl Into<String>) -> Self {
        SectionError::Unrecognized {
            type_token: type_token.into(),
        }
    }

    /// Create a DimensionCountMismatch error
    pub fn dimension_count(kind: ProfileKind, expected: usize, found: usize) -> Self {
        SectionError::DimensionCountMismatch {
            kind,
            expected,
            found,
        }
    }

    /// Create a LookupMiss error
    pub fn lookup_miss(kind: ProfileKind, key: impl Into<String>) -> Self {
        SectionError::LookupMiss {
            kind,
            key: key.into(),
        }
    }

    /// Create an InvalidDimension error
    pub fn invalid_dimension(token: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::InvalidDimension {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidDensity error
    pub fn invalid_density(value: f64, reason: impl Into<String>) -> Self {
        SectionError::InvalidDensity {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a TableLoad error
    pub fn table_load(table: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::TableLoad {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// True for failures that mean "this is not a steel designation".
    ///
    /// The facade reports these as no result instead of an error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SectionError::ParseFailure { .. } | SectionError::Unrecognized { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::ParseFailure { .. } => "PARSE_FAILURE",
            SectionError::Unrecognized { .. } => "UNRECOGNIZED_TYPE",
            SectionError::DimensionCountMismatch { .. } => "DIMENSION_COUNT_MISMATCH",
            SectionError::LookupMiss { .. } => "LOOKUP_MISS",
            SectionError::InvalidDimension { .. } => "INVALID_DIMENSION",
            SectionError::InvalidDensity { .. } => "INVALID_DENSITY",
            SectionError::TableLoad { .. } => "TABLE_LOAD",
        }
    }
}
