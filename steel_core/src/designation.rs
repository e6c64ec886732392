//! Designation Parser
//!
//! Splits a designation such as `H300*200*6*8` or `工字钢20a` into its type
//! prefix and its dimension tokens using nom combinators.
//!
//! ## Grammar
//!
//! ```text
//! designation := type_prefix dimension_run
//! type_prefix := (ASCII letter | CJK ideograph | '[' | '∟')+
//! dimension_run := (digit | '.') (digit | ASCII letter | '.' | '*' | '×')*
//! ```
//!
//! Surrounding whitespace is ignored; anything else left over is a parse
//! failure. The dimension run is split on `*`, `x`, `X` and `×`.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::satisfy,
    combinator::{all_consuming, recognize},
    sequence::pair,
    IResult, Parser,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcResult, SectionError};

/// Characters that separate dimensions
pub const SEPARATORS: [char; 4] = ['*', 'x', 'X', '×'];

/// A designation split into its type prefix and raw dimension tokens.
///
/// Tokens stay strings: parametric calculators convert them to numbers,
/// catalog calculators use them to build a table key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDesignation {
    /// Type prefix, e.g. "H", "HW", "工字钢"
    pub type_token: String,
    /// Dimension tokens in input order, e.g. ["300", "200", "6", "8"]
    pub dimension_tokens: Vec<String>,
}

impl ParsedDesignation {
    /// Number of dimension tokens
    pub fn dimension_count(&self) -> usize {
        self.dimension_tokens.len()
    }

    /// Dimension tokens joined with `*`
    pub fn joined_dimensions(&self) -> String {
        self.dimension_tokens.join("*")
    }
}

impl FromStr for ParsedDesignation {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_designation(s)
    }
}

// ============================================================================
// Parsing Primitives
// ============================================================================

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{4e00}'..='\u{9fa5}').contains(&c) || c == '[' || c == '∟'
}

fn is_dimension_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '*' || c == '×'
}

/// Parse the leading type prefix
fn type_prefix(input: &str) -> IResult<&str, &str> {
    take_while1(is_type_char).parse(input)
}

/// Parse the dimension run; it must open with a digit or decimal point
fn dimension_run(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_ascii_digit() || c == '.'),
        take_while(is_dimension_char),
    ))
    .parse(input)
}

fn designation(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(pair(type_prefix, dimension_run)).parse(input)
}

/// Split a designation into type prefix and dimension tokens.
///
/// # Errors
///
/// [`SectionError::ParseFailure`] when the input has no type prefix, no
/// numeric suffix, or trailing characters outside the grammar.
///
/// # Example
///
/// ```rust
/// use steel_core::designation::parse_designation;
///
/// let parsed = parse_designation("HW100x100").unwrap();
/// assert_eq!(parsed.type_token, "HW");
/// assert_eq!(parsed.dimension_tokens, vec!["100", "100"]);
///
/// assert!(parse_designation("300*200").is_err());
/// ```
pub fn parse_designation(input: &str) -> CalcResult<ParsedDesignation> {
    let (_, (type_token, dims)) =
        designation(input.trim()).map_err(|_| SectionError::parse_failure(input))?;

    Ok(ParsedDesignation {
        type_token: type_token.to_string(),
        dimension_tokens: dims
            .split(|c: char| SEPARATORS.contains(&c))
            .map(str::to_string)
            .collect(),
    })
}

/// Convert one dimension token to millimeters.
///
/// Accepts finite, strictly positive numbers only.
pub fn parse_dimension(token: &str) -> CalcResult<f64> {
    let value = f64::from_str(token.trim())
        .map_err(|_| SectionError::invalid_dimension(token, "Not a number"))?;
    if !value.is_finite() {
        return Err(SectionError::invalid_dimension(token, "Must be finite"));
    }
    if value <= 0.0 {
        return Err(SectionError::invalid_dimension(token, "Must be positive"));
    }
    Ok(value)
}
