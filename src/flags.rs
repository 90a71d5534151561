use bitflags::bitflags;
use std::fmt;

/// Who may issue `GET`/`SET VCP` for this feature, at this version.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    pub fn is_readable(&self) -> bool {
        matches!(self, Access::ReadOnly | Access::ReadWrite)
    }

    pub fn is_writable(&self) -> bool {
        matches!(self, Access::WriteOnly | Access::ReadWrite)
    }

    fn label(&self) -> &'static str {
        match self {
            Access::ReadOnly => "Read Only",
            Access::WriteOnly => "Write Only",
            Access::ReadWrite => "Read Write",
        }
    }
}

/// How the value bytes of a `GET VCP` reply are to be interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    StandardContinuous,
    ComplexContinuous,
    SimpleNonContinuous,
    ComplexNonContinuous,
    WriteOnlyNonContinuous,
    Table,
    WriteOnlyTable,
}

impl Kind {
    pub fn is_table(&self) -> bool {
        matches!(self, Kind::Table | Kind::WriteOnlyTable)
    }

    pub fn is_non_table(&self) -> bool {
        !self.is_table()
    }

    fn label(&self) -> &'static str {
        match self {
            Kind::StandardContinuous => "Continuous (standard)",
            Kind::ComplexContinuous => "Continuous (complex)",
            Kind::SimpleNonContinuous => "Non-Continuous (simple)",
            Kind::ComplexNonContinuous => "Non-Continuous (complex)",
            Kind::WriteOnlyNonContinuous => "Write-only Non-Continuous",
            Kind::Table => "Table",
            Kind::WriteOnlyTable => "Write-only Table",
        }
    }
}

/// Per-version feature attributes (spec.md §3). `Deprecated` suppresses
/// both `access` and `kind` — unrepresentable as a mistaken combination,
/// unlike the source's single 16-bit flag word with a `DEPRECATED` bit
/// that could in principle coexist with a stale access/kind pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FeatureAttributes {
    Deprecated,
    Defined { access: Access, kind: Kind },
}

impl FeatureAttributes {
    pub fn readable(&self) -> bool {
        match self {
            FeatureAttributes::Deprecated => false,
            FeatureAttributes::Defined { access, .. } => access.is_readable(),
        }
    }

    pub fn writable(&self) -> bool {
        match self {
            FeatureAttributes::Deprecated => false,
            FeatureAttributes::Defined { access, .. } => access.is_writable(),
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        match self {
            FeatureAttributes::Deprecated => None,
            FeatureAttributes::Defined { kind, .. } => Some(*kind),
        }
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, FeatureAttributes::Deprecated)
    }
}

impl fmt::Display for FeatureAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureAttributes::Deprecated => write!(f, "Deprecated"),
            FeatureAttributes::Defined { access, kind } => {
                write!(f, "{}, {}", access.label(), kind.label())
            }
        }
    }
}

/// `interpret_flags` from spec.md §4.3: human text for a resolved
/// attribute set.
pub fn interpret_flags(attrs: &FeatureAttributes) -> String {
    attrs.to_string()
}

bitflags! {
    /// MCCS "spec group" a feature belongs to (spec.md §3).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpecGroups: u16 {
        const PRESET = 1 << 0;
        const IMAGE = 1 << 1;
        const CONTROL = 1 << 2;
        const GEOMETRY = 1 << 3;
        const MISCELLANEOUS = 1 << 4;
        const AUDIO = 1 << 5;
        const DPVL = 1 << 6;
        const MANUFACTURER_SPECIFIC = 1 << 7;
        const WINDOW = 1 << 8;
    }
}

bitflags! {
    /// A finer-grained feature subset a feature belongs to (spec.md §3).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Subsets: u8 {
        const PROFILE = 1 << 0;
        const COLOR = 1 << 1;
        const LUT = 1 << 2;
        const CRT = 1 << 3;
        const TV = 1 << 4;
        const AUDIO = 1 << 5;
        const WINDOW = 1 << 6;
        const DPVL = 1 << 7;
    }
}

bitflags! {
    /// Global, version-independent flags (spec.md §3). Currently a single
    /// bit: whether the entry was fabricated by `lookup_or_synthesize`
    /// rather than drawn from the static table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GlobalFlags: u8 {
        const SYNTHETIC = 1 << 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpret_flags_matches_contract_example() {
        let attrs = FeatureAttributes::Defined {
            access: Access::ReadWrite,
            kind: Kind::StandardContinuous,
        };
        assert_eq!(interpret_flags(&attrs), "Read Write, Continuous (standard)");
    }

    #[test]
    fn deprecated_overrides_access_and_kind() {
        assert_eq!(interpret_flags(&FeatureAttributes::Deprecated), "Deprecated");
        assert!(!FeatureAttributes::Deprecated.readable());
        assert!(!FeatureAttributes::Deprecated.writable());
    }
}
