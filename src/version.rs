use std::fmt;

/// An MCCS specification version, as reported by a display or a caller.
///
/// `major` is typically `2` or `3`; `minor` is typically `0`, `1` or `2`.
/// The wire encoding is two bytes, `SH = major`, `SL = minor`
/// (spec.md §6, "MCCS version encoding").
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8) -> Self {
        Version { major, minor }
    }

    /// Decode from the wire's `(SH, SL)` byte pair.
    pub const fn from_wire(sh: u8, sl: u8) -> Self {
        Version::new(sh, sl)
    }

    pub const fn to_wire(&self) -> (u8, u8) {
        (self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// One of the four MCCS versions the feature table carries per-version data
/// for. Ordering between these is *not* the usual lexicographic order on
/// `(major, minor)` — v3.0 is not a superset of v2.2 (spec.md §4.1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalVersion {
    V20,
    V21,
    V22,
    V30,
}

impl CanonicalVersion {
    /// Declaration order, used for per-version storage and for the
    /// `valid_versions` carry-forward chain.
    pub const DECLARATION_ORDER: [CanonicalVersion; 4] = [
        CanonicalVersion::V20,
        CanonicalVersion::V21,
        CanonicalVersion::V22,
        CanonicalVersion::V30,
    ];

    /// The odd order `highest_non_deprecated_version` walks in (spec.md
    /// §4.1): newest-practical-first, but V2.2 and V3.0 are siblings
    /// descending from V2.1, so neither is simply "above" the other;
    /// V2.2 is tried before V3.0 by convention only.
    pub const HIGHEST_SEARCH_ORDER: [CanonicalVersion; 4] = [
        CanonicalVersion::V22,
        CanonicalVersion::V30,
        CanonicalVersion::V21,
        CanonicalVersion::V20,
    ];

    /// The fallback-walk order used once a primary candidate slot turns up
    /// empty (spec.md §4.1, "the resolver walks upward").
    pub const FALLBACK_WALK_ORDER: [CanonicalVersion; 3] = [
        CanonicalVersion::V21,
        CanonicalVersion::V30,
        CanonicalVersion::V22,
    ];

    pub const fn as_version(&self) -> Version {
        match self {
            CanonicalVersion::V20 => Version::new(2, 0),
            CanonicalVersion::V21 => Version::new(2, 1),
            CanonicalVersion::V22 => Version::new(2, 2),
            CanonicalVersion::V30 => Version::new(3, 0),
        }
    }
}

impl fmt::Display for CanonicalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_version(), f)
    }
}

/// `v ≤ target`, per the non-monotone rules in spec.md §4.1. Only defined
/// against one of the four canonical versions, since that's all the table
/// ever needs to compare a query version against.
pub fn is_at_most(v: Version, target: CanonicalVersion) -> bool {
    match target {
        CanonicalVersion::V20 => v.major < 2 || (v.major == 2 && v.minor <= 0),
        CanonicalVersion::V21 => v.major < 2 || (v.major == 2 && v.minor <= 1),
        CanonicalVersion::V22 => v.major < 2 || (v.major == 2 && v.minor <= 2),
        // v3.0 does not include v2.2.
        CanonicalVersion::V30 => v.major < 2 || (v.major == 2 && v.minor <= 1) || v.major == 3,
    }
}

/// `v > target` := `¬(v ≤ target)` (spec.md §4.1).
pub fn is_after(v: Version, target: CanonicalVersion) -> bool {
    !is_at_most(v, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CanonicalVersion::*;

    #[test]
    fn non_monotone_ordering() {
        // spec.md §8 property 6.
        assert!(!is_at_most(V22.as_version(), V30));
        assert!(is_at_most(V21.as_version(), V22));
        assert!(is_at_most(V21.as_version(), V30));
        assert!(is_at_most(V22.as_version(), V22));
    }

    #[test]
    fn display_formats_as_major_dot_minor() {
        assert_eq!(Version::new(2, 1).to_string(), "2.1");
        assert_eq!(V30.to_string(), "3.0");
    }

    #[test]
    fn wire_round_trip() {
        let v = Version::from_wire(3, 0);
        assert_eq!(v.to_wire(), (3, 0));
    }
}
