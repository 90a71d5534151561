use std::fmt;

use thiserror::Error;

use crate::version::CanonicalVersion;

/// One self-validator invariant violation (spec.md §4.4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: u8,
    pub version: Option<CanonicalVersion>,
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(
        code: u8,
        version: Option<CanonicalVersion>,
        message: impl Into<String>,
    ) -> Self {
        ValidationError { code, version, message: message.into() }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature 0x{:02x}", self.code)?;
        if let Some(v) = self.version {
            write!(f, " at v{v}")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The static feature table failed its own self-validation (spec.md §7,
/// `TableLogicError`). Unlike every other error kind spec.md §7 lists —
/// all modeled as `Option`/`(bool, String)`, per the "catalog never
/// throws" rule — this one is never returned to a caller: spec.md §4.4
/// is explicit that "the validator is the one place that terminates the
/// process, because its failure means the source code is inconsistent
/// with itself". `ensure_validated` constructs this value only to format
/// it into a `panic!` payload; there is no code path that hands it back
/// as a `Result::Err`, so a self-inconsistent table can't be shrugged off
/// with `.ok()` and queried anyway.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("VCP feature table failed self-validation: {} error(s)", .0.len())]
    TableLogic(Vec<ValidationError>),
}

impl CatalogError {
    /// A multi-line rendering of every underlying `ValidationError`, used
    /// to build the `panic!` message in `validate::ensure_validated` — the
    /// single-line `Display` impl above stays a short summary so it also
    /// reads well wherever just the count matters.
    pub fn detail(&self) -> String {
        match self {
            CatalogError::TableLogic(errors) => {
                errors.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_version_when_present() {
        let e = ValidationError::new(0x10, Some(CanonicalVersion::V22), "bad flags");
        assert_eq!(e.to_string(), "feature 0x10 at v2.2: bad flags");
    }

    #[test]
    fn display_omits_version_when_absent() {
        let e = ValidationError::new(0x10, None, "no version slot defined");
        assert_eq!(e.to_string(), "feature 0x10: no version slot defined");
    }
}
