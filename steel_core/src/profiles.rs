//! Profile Kinds
//!
//! The closed set of steel profiles the engine understands, and the alias
//! table that maps a designation's type prefix onto one of them.
//!
//! Parametric kinds carry their full geometry in the designation
//! (`H300*200*6*8`). Catalog kinds are looked up by designation in a
//! reference table (`I10`, `HW100*100`).
//!
//! ## Aliases
//!
//! Matching is exact and case-sensitive. Several prefixes map to the same
//! kind, including the Chinese trade names used on drawings:
//!
//! | Kind | Prefixes |
//! |---|---|
//! | `HBeam` | `H`, `H型钢` |
//! | `HxBeam` | `HW`, `HM`, `HN`, `HT` |
//! | `CBeam` | `C`, `C型钢` |
//! | `ZBeam` | `Z`, `Z型钢` |
//! | `IBeam` | `I`, `UB`, `工字钢` |
//! | `CSteel` | `[`, `CS`, `槽钢` |
//! | `ASteel` | `∟`, `A`, `L`, `角钢` |
//! | `UaSteel` | `UA`, `不等边角钢` |
//! | `RtBeam` | `RT`, `矩形管`, `方管` |
//! | `CtBeam` | `CT`, `圆管` |
//! | `RsSteel` | `RS`, `圆钢` |

use serde::{Deserialize, Serialize};

/// Steel profile kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileKind {
    /// Welded H-beam given by h, b, tw, t
    HBeam,
    /// Hot-rolled H-beam series HW/HM/HN/HT (catalog)
    HxBeam,
    /// Cold-formed lipped channel given by h, b, c, t
    CBeam,
    /// Cold-formed lipped Z-section given by h, b, c, t
    ZBeam,
    /// Hot-rolled I-beam (catalog)
    IBeam,
    /// Hot-rolled channel (catalog)
    CSteel,
    /// Equal-leg angle (catalog)
    ASteel,
    /// Unequal-leg angle (catalog)
    UaSteel,
    /// Rectangular hollow tube given by b1, b2, t
    RtBeam,
    /// Circular hollow tube given by d, t
    CtBeam,
    /// Solid round bar given by d
    RsSteel,
}

/// Prefix → kind lookup. Order is irrelevant; every prefix is unique.
const ALIASES: &[(&str, ProfileKind)] = &[
    ("H", ProfileKind::HBeam),
    ("H型钢", ProfileKind::HBeam),
    ("HW", ProfileKind::HxBeam),
    ("HM", ProfileKind::HxBeam),
    ("HN", ProfileKind::HxBeam),
    ("HT", ProfileKind::HxBeam),
    ("C", ProfileKind::CBeam),
    ("C型钢", ProfileKind::CBeam),
    ("Z", ProfileKind::ZBeam),
    ("Z型钢", ProfileKind::ZBeam),
    ("I", ProfileKind::IBeam),
    ("UB", ProfileKind::IBeam),
    ("工字钢", ProfileKind::IBeam),
    ("[", ProfileKind::CSteel),
    ("CS", ProfileKind::CSteel),
    ("槽钢", ProfileKind::CSteel),
    ("∟", ProfileKind::ASteel),
    ("A", ProfileKind::ASteel),
    ("L", ProfileKind::ASteel),
    ("角钢", ProfileKind::ASteel),
    ("UA", ProfileKind::UaSteel),
    ("不等边角钢", ProfileKind::UaSteel),
    ("RT", ProfileKind::RtBeam),
    ("矩形管", ProfileKind::RtBeam),
    ("方管", ProfileKind::RtBeam),
    ("CT", ProfileKind::CtBeam),
    ("圆管", ProfileKind::CtBeam),
    ("RS", ProfileKind::RsSteel),
    ("圆钢", ProfileKind::RsSteel),
];

impl ProfileKind {
    /// All profile kinds for iteration
    pub const ALL: [ProfileKind; 11] = [
        ProfileKind::HBeam,
        ProfileKind::HxBeam,
        ProfileKind::CBeam,
        ProfileKind::ZBeam,
        ProfileKind::IBeam,
        ProfileKind::CSteel,
        ProfileKind::ASteel,
        ProfileKind::UaSteel,
        ProfileKind::RtBeam,
        ProfileKind::CtBeam,
        ProfileKind::RsSteel,
    ];

    /// Resolve a designation type prefix to its profile kind.
    ///
    /// Returns `None` for anything not in the alias table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steel_core::profiles::ProfileKind;
    ///
    /// assert_eq!(ProfileKind::resolve("工字钢"), Some(ProfileKind::IBeam));
    /// assert_eq!(ProfileKind::resolve("h"), None);
    /// ```
    pub fn resolve(type_token: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == type_token)
            .map(|(_, kind)| *kind)
    }

    /// Whether properties come from a reference table rather than a formula
    pub fn is_catalog(&self) -> bool {
        matches!(
            self,
            ProfileKind::HxBeam
                | ProfileKind::IBeam
                | ProfileKind::CSteel
                | ProfileKind::ASteel
                | ProfileKind::UaSteel
        )
    }

    /// Prefix used for reference table keys.
    ///
    /// `HxBeam` has none: its series token (HW, HM, ...) is part of the key.
    pub fn catalog_prefix(&self) -> Option<&'static str> {
        match self {
            ProfileKind::IBeam => Some("I"),
            ProfileKind::CSteel => Some("["),
            ProfileKind::ASteel => Some("∟"),
            ProfileKind::UaSteel => Some("UA"),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileKind::HBeam => "Welded H-beam",
            ProfileKind::HxBeam => "Hot-rolled H-beam",
            ProfileKind::CBeam => "Cold-formed C-channel",
            ProfileKind::ZBeam => "Cold-formed Z-section",
            ProfileKind::IBeam => "I-beam",
            ProfileKind::CSteel => "Channel",
            ProfileKind::ASteel => "Equal angle",
            ProfileKind::UaSteel => "Unequal angle",
            ProfileKind::RtBeam => "Rectangular tube",
            ProfileKind::CtBeam => "Circular tube",
            ProfileKind::RsSteel => "Round bar",
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_latin_prefixes() {
        assert_eq!(ProfileKind::resolve("H"), Some(ProfileKind::HBeam));
        assert_eq!(ProfileKind::resolve("HW"), Some(ProfileKind::HxBeam));
        assert_eq!(ProfileKind::resolve("HT"), Some(ProfileKind::HxBeam));
        assert_eq!(ProfileKind::resolve("UB"), Some(ProfileKind::IBeam));
        assert_eq!(ProfileKind::resolve("["), Some(ProfileKind::CSteel));
        assert_eq!(ProfileKind::resolve("∟"), Some(ProfileKind::ASteel));
        assert_eq!(ProfileKind::resolve("UA"), Some(ProfileKind::UaSteel));
        assert_eq!(ProfileKind::resolve("RT"), Some(ProfileKind::RtBeam));
        assert_eq!(ProfileKind::resolve("CT"), Some(ProfileKind::CtBeam));
        assert_eq!(ProfileKind::resolve("RS"), Some(ProfileKind::RsSteel));
    }

    #[test]
    fn test_resolve_chinese_prefixes() {
        assert_eq!(ProfileKind::resolve("H型钢"), Some(ProfileKind::HBeam));
        assert_eq!(ProfileKind::resolve("工字钢"), Some(ProfileKind::IBeam));
        assert_eq!(ProfileKind::resolve("槽钢"), Some(ProfileKind::CSteel));
        assert_eq!(ProfileKind::resolve("角钢"), Some(ProfileKind::ASteel));
        assert_eq!(ProfileKind::resolve("圆钢"), Some(ProfileKind::RsSteel));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(ProfileKind::resolve("h"), None);
        assert_eq!(ProfileKind::resolve("hw"), None);
        assert_eq!(ProfileKind::resolve("Hw"), None);
        assert_eq!(ProfileKind::resolve(""), None);
        assert_eq!(ProfileKind::resolve("Q"), None);
    }

    #[test]
    fn test_every_kind_has_an_alias() {
        for kind in ProfileKind::ALL {
            assert!(
                ALIASES.iter().any(|(_, k)| *k == kind),
                "{:?} has no alias",
                kind
            );
        }
    }

    #[test]
    fn test_aliases_are_unique() {
        for (i, (a, _)) in ALIASES.iter().enumerate() {
            assert!(
                ALIASES[i + 1..].iter().all(|(b, _)| a != b),
                "duplicate alias {}",
                a
            );
        }
    }

    #[test]
    fn test_catalog_kinds_have_table_keys() {
        for kind in ProfileKind::ALL.iter().filter(|k| k.is_catalog()) {
            if *kind != ProfileKind::HxBeam {
                assert!(kind.catalog_prefix().is_some());
            }
        }
        assert_eq!(ProfileKind::HBeam.catalog_prefix(), None);
        assert_eq!(ProfileKind::HxBeam.catalog_prefix(), None);
    }
}
