//! Self-validation: the static table checks its own internal consistency
//! exactly once, the first time anything asks the catalog a question.
//! There is no `main()` to hook into in a library crate, so this runs
//! lazily behind a `OnceLock` rather than at link time or on first use of
//! a specific function.

use std::sync::OnceLock;

use crate::error::{CatalogError, ValidationError};
use crate::flags::{FeatureAttributes, Kind};
use crate::table::FeatureEntry;
use crate::version::CanonicalVersion;

/// Runs every invariant check against `entries` and returns every
/// violation found, rather than stopping at the first one — a caller
/// fixing up a table wants the whole list in one pass.
pub fn validate_table(entries: &[FeatureEntry]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for entry in entries {
        if entry.versions.iter().all(|slot| slot.flags.is_none()) {
            errors.push(ValidationError::new(
                entry.code,
                None,
                "has no non-empty version slot at all (spec.md §3 invariant 1)",
            ));
        }

        for version in CanonicalVersion::DECLARATION_ORDER {
            let slot = entry.version_slot(version);
            let Some(attrs) = slot.flags else { continue };

            let FeatureAttributes::Defined { kind, .. } = attrs else {
                continue;
            };

            match kind {
                Kind::SimpleNonContinuous => {
                    let has_table = slot.sl_values.is_some() || entry.default_sl_values.is_some();
                    if !has_table {
                        errors.push(ValidationError::new(
                            entry.code,
                            Some(version),
                            "declared Simple Non-Continuous but has no SL value table",
                        ));
                    }
                }
                Kind::ComplexNonContinuous | Kind::ComplexContinuous => {
                    if entry.nontable_formatter.is_none() {
                        errors.push(ValidationError::new(
                            entry.code,
                            Some(version),
                            "declared Complex (Non-)Continuous but has no custom formatter",
                        ));
                    }
                }
                Kind::Table | Kind::WriteOnlyTable => {
                    // Falls back to a hex dump when no custom table formatter
                    // is registered; that's a valid default, not a violation.
                }
                Kind::StandardContinuous | Kind::WriteOnlyNonContinuous => {}
            }
        }

        if entry.nontable_formatter.is_some() {
            let uses_nontable = entry.versions.iter().any(|slot| {
                matches!(
                    slot.flags,
                    Some(FeatureAttributes::Defined { kind, .. }) if kind.is_non_table()
                )
            });
            if !uses_nontable {
                errors.push(ValidationError::new(
                    entry.code,
                    None,
                    "has a non-table formatter but no version is declared non-table",
                ));
            }
        }

        if entry.table_formatter.is_some() {
            let uses_table = entry.versions.iter().any(|slot| {
                matches!(
                    slot.flags,
                    Some(FeatureAttributes::Defined { kind, .. }) if kind.is_table()
                )
            });
            if !uses_table {
                errors.push(ValidationError::new(
                    entry.code,
                    None,
                    "has a table formatter but no version is declared table",
                ));
            }
        }
    }

    errors
}

static VALIDATED: OnceLock<()> = OnceLock::new();

/// Validates `crate::table::FEATURE_TABLE` exactly once. spec.md §4.4: "if
/// any [error] was emitted, the process terminates with a logic-error
/// signal" — §7 repeats that `TableLogicError` is "Fatal at startup; the
/// process must not proceed" and that "the validator is the one place
/// that terminates the process, because its failure means the source
/// code is inconsistent with itself". A library crate has no `main` to
/// abort from, so `panic!` is how that contract is realized here: every
/// public catalog operation calls this first, and a failed self-validation
/// unwinds out of *all* of them rather than being returned as a `Result`
/// a caller could `.ok()` away and keep querying an inconsistent table.
pub(crate) fn ensure_validated() {
    VALIDATED.get_or_init(|| {
        let errors = validate_table(crate::table::FEATURE_TABLE);
        if !errors.is_empty() {
            for e in &errors {
                log::error!("vcp-catalog: {e}");
            }
            let err = CatalogError::TableLogic(errors);
            panic!("vcp-catalog: {err}\n{}", err.detail());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{Access, GlobalFlags, Kind as K, SpecGroups, Subsets};
    use crate::format::NonTableFormatter;
    use crate::table::PerVersionData;

    const EMPTY: PerVersionData = PerVersionData { flags: None, name: None, sl_values: None };

    fn defined(access: Access, kind: K) -> PerVersionData {
        PerVersionData {
            flags: Some(FeatureAttributes::Defined { access, kind }),
            name: None,
            sl_values: None,
        }
    }

    fn bare_entry(code: u8, versions: [PerVersionData; 4]) -> FeatureEntry {
        FeatureEntry {
            code,
            description: "test",
            spec_groups: SpecGroups::empty(),
            subsets: Subsets::empty(),
            global_flags: GlobalFlags::empty(),
            versions,
            default_sl_values: None,
            nontable_formatter: None,
            table_formatter: None,
        }
    }

    #[test]
    fn simple_nc_without_sl_table_is_flagged() {
        let entry = bare_entry(
            0x99,
            [defined(Access::ReadWrite, K::SimpleNonContinuous), EMPTY, EMPTY, EMPTY],
        );
        let errors = validate_table(&[entry]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("SL value table"));
    }

    #[test]
    fn complex_nc_without_formatter_is_flagged() {
        let entry = bare_entry(
            0x99,
            [defined(Access::ReadOnly, K::ComplexNonContinuous), EMPTY, EMPTY, EMPTY],
        );
        let errors = validate_table(&[entry]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("custom formatter"));
    }

    #[test]
    fn complex_nc_with_formatter_passes() {
        let mut entry = bare_entry(
            0x99,
            [defined(Access::ReadOnly, K::ComplexNonContinuous), EMPTY, EMPTY, EMPTY],
        );
        entry.nontable_formatter = Some(NonTableFormatter::Ushort);
        assert!(validate_table(&[entry]).is_empty());
    }

    #[test]
    fn the_real_table_is_internally_consistent() {
        let errors = validate_table(crate::table::FEATURE_TABLE);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn entry_with_no_defined_version_slot_is_flagged() {
        // spec.md §3 invariant 1 / §4.4's closing check: at least one of
        // the four `flags[V]` must be non-empty.
        let entry = bare_entry(0x99, [EMPTY, EMPTY, EMPTY, EMPTY]);
        let errors = validate_table(&[entry]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("no non-empty version slot"));
    }

    #[test]
    fn entry_with_only_deprecated_slots_still_has_a_non_empty_slot() {
        // A `Deprecated` slot is non-empty (it's `Some(Deprecated)`, not
        // `None`), so invariant 1 is satisfied even if every version is
        // deprecated — that's a different (legal) state from no slot
        // being defined at all.
        let entry = bare_entry(
            0x99,
            [
                PerVersionData { flags: Some(FeatureAttributes::Deprecated), name: None, sl_values: None },
                EMPTY,
                EMPTY,
                EMPTY,
            ],
        );
        assert!(validate_table(&[entry]).is_empty());
    }
}
