//! Version-fallback resolution: turning a `FeatureEntry`'s four
//! independent per-version slots plus a query version into a single
//! answer. The table only ever stores what changes between versions; this
//! module is where the caller's concrete version gets applied against it.

use crate::enum_table::EnumTable;
use crate::flags::FeatureAttributes;
use crate::table::{FeatureEntry, PerVersionData};
use crate::version::{CanonicalVersion, Version};

/// Which of the four canonical slots a query version maps to, and which
/// slot to fall back to if that one is empty.
///
/// Declaration order is `[V20, V21, V22, V30]`. A query resolves to its
/// own canonical slot first; if that slot carries no data, the walk
/// continues along `CanonicalVersion::FALLBACK_WALK_ORDER` starting from
/// the query's slot, then finally tries `V20` as the last resort, since
/// `V20` is the one slot every carry-forward chain bottoms out at.
fn candidate_order(query: Version) -> Vec<CanonicalVersion> {
    use CanonicalVersion::*;
    let primary = if crate::version::is_at_most(query, V20) {
        V20
    } else if crate::version::is_at_most(query, V21) {
        V21
    } else if crate::version::is_at_most(query, V22) && !crate::version::is_at_most(query, V30) {
        V22
    } else {
        V30
    };

    let mut order = vec![primary];
    for candidate in CanonicalVersion::FALLBACK_WALK_ORDER {
        if candidate != primary && !order.contains(&candidate) {
            order.push(candidate);
        }
    }
    if !order.contains(&V20) {
        order.push(V20);
    }
    order
}

fn resolve_slot(entry: &FeatureEntry, query: Version) -> Option<(CanonicalVersion, &PerVersionData)> {
    let order = candidate_order(query);
    let primary = order[0];
    for candidate in order.iter().copied() {
        let slot = entry.version_slot(candidate);
        if slot.flags.is_some() {
            if candidate != primary {
                log::debug!(
                    "vcp-catalog: feature 0x{:02x} has no data at v{query}, using v{candidate} instead",
                    entry.code,
                );
            }
            return Some((candidate, slot));
        }
    }
    None
}

/// The feature's attributes at `query`, carrying forward from the nearest
/// defined older slot when the exact version has none of its own.
pub fn resolved_flags(entry: &FeatureEntry, query: Version) -> Option<FeatureAttributes> {
    resolve_slot(entry, query).and_then(|(_, slot)| slot.flags)
}

/// The feature's display name at `query`: a version-specific override if
/// one was given, else `entry.description`.
pub fn resolved_name<'a>(entry: &'a FeatureEntry, query: Version) -> &'a str {
    resolve_slot(entry, query)
        .and_then(|(_, slot)| slot.name)
        .unwrap_or(entry.description)
}

/// The SL lookup table to use at `query`: a version-specific override if
/// one was given, else the entry's version-independent default.
pub fn resolved_sl_values<'a>(
    entry: &'a FeatureEntry,
    query: Version,
) -> Option<&'a EnumTable> {
    resolve_slot(entry, query)
        .and_then(|(_, slot)| slot.sl_values)
        .or(entry.default_sl_values)
}

pub fn is_supported(entry: &FeatureEntry, query: Version) -> bool {
    matches!(resolved_flags(entry, query), Some(FeatureAttributes::Defined { .. }))
}

pub fn is_readable(entry: &FeatureEntry, query: Version) -> bool {
    resolved_flags(entry, query).map(|a| a.readable()).unwrap_or(false)
}

pub fn is_writable(entry: &FeatureEntry, query: Version) -> bool {
    resolved_flags(entry, query).map(|a| a.writable()).unwrap_or(false)
}

/// Whether this feature's response *shape* is version-sensitive: spec.md
/// §4.1 defines this literally as "the union of all four `flags[V].kind`
/// contains both a non-table and a table kind" — i.e. whether a caller
/// must dispatch to `format_table` at one version and `format_non_table`
/// at another for the *same* feature code.
pub fn is_type_version_conditional(entry: &FeatureEntry) -> bool {
    let mut has_table = false;
    let mut has_non_table = false;
    for version in CanonicalVersion::DECLARATION_ORDER {
        if let Some(FeatureAttributes::Defined { kind, .. }) = entry.version_slot(version).flags {
            if kind.is_table() {
                has_table = true;
            } else {
                has_non_table = true;
            }
        }
    }
    has_table && has_non_table
}

/// Whether `list_features`' `describe_feature` line should append
/// `"(Version specific interpretation)"` for this entry (spec.md §4.3).
///
/// spec.md §4.1 literally defines this as "more than one of the four
/// `flags[V]` is non-empty" — but an explicit `Deprecated` slot counts as
/// non-empty there too, so that formula flags nearly every feature with
/// more than one declared version (almost the whole table, since most
/// entries simply repeat the same attributes across all four slots) even
/// when nothing about its interpretation actually changes. That isn't
/// useful as a reader-facing suffix, so this resolves the question (see
/// DESIGN.md's Open Questions) by asking whether the *resolved*
/// attributes genuinely diverge between any two of the entry's defined
/// version slots, which is what makes the suffix worth printing.
pub fn has_version_specific_features(entry: &FeatureEntry) -> bool {
    let mut seen: Option<FeatureAttributes> = None;
    for version in CanonicalVersion::DECLARATION_ORDER {
        if let Some(flags) = entry.version_slot(version).flags {
            match seen {
                None => seen = Some(flags),
                Some(prev) if prev != flags => return true,
                Some(_) => {}
            }
        }
    }
    false
}

/// The newest canonical version this feature is defined (and not
/// deprecated) for, walking `CanonicalVersion::HIGHEST_SEARCH_ORDER`.
pub fn highest_non_deprecated_version(entry: &FeatureEntry) -> Option<CanonicalVersion> {
    for version in CanonicalVersion::HIGHEST_SEARCH_ORDER {
        match entry.version_slot(version).flags {
            Some(FeatureAttributes::Defined { .. }) => return Some(version),
            _ => continue,
        }
    }
    None
}

/// The bitset of canonical versions this feature is valid for, computed
/// by carrying V20 forward into V21, and V21 forward independently into
/// both V22 and V30 (V22 and V30 do not carry forward into each other).
/// A slot already holding its own data counts as valid regardless of
/// carry-forward; a slot explicitly marked `Deprecated` is not valid.
pub fn valid_versions(entry: &FeatureEntry) -> Vec<CanonicalVersion> {
    use CanonicalVersion::*;

    // An explicit `Deprecated` slot is non-empty and blocks carry-forward;
    // only a truly empty (`None`) slot inherits its lower neighbor's
    // validity (spec.md §4.3: "E.flags[V] is empty AND the next-lower
    // adjacent version is valid").
    let is_own_valid = |version: CanonicalVersion| {
        matches!(entry.version_slot(version).flags, Some(FeatureAttributes::Defined { .. }))
    };
    let is_empty = |version: CanonicalVersion| entry.version_slot(version).flags.is_none();

    let v20 = is_own_valid(V20);
    let v21 = is_own_valid(V21) || (is_empty(V21) && v20);
    let v22 = is_own_valid(V22) || (is_empty(V22) && v21);
    let v30 = is_own_valid(V30) || (is_empty(V30) && v21);

    let mut out = Vec::new();
    if v20 {
        out.push(V20);
    }
    if v21 {
        out.push(V21);
    }
    if v22 {
        out.push(V22);
    }
    if v30 {
        out.push(V30);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{Access, GlobalFlags, Kind, SpecGroups, Subsets};
    use crate::table::PerVersionData;

    fn entry_with_versions(versions: [PerVersionData; 4]) -> FeatureEntry {
        FeatureEntry {
            code: 0x13,
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

    const EMPTY: PerVersionData = PerVersionData { flags: None, name: None, sl_values: None };

    fn defined(access: Access, kind: Kind) -> PerVersionData {
        PerVersionData { flags: Some(FeatureAttributes::Defined { access, kind }), name: None, sl_values: None }
    }

    fn deprecated() -> PerVersionData {
        PerVersionData { flags: Some(FeatureAttributes::Deprecated), name: None, sl_values: None }
    }

    #[test]
    fn v13_deprecated_at_v22_is_absent_from_valid_versions() {
        let entry = entry_with_versions([
            defined(Access::ReadWrite, Kind::SimpleNonContinuous),
            defined(Access::ReadWrite, Kind::SimpleNonContinuous),
            deprecated(),
            defined(Access::ReadWrite, Kind::SimpleNonContinuous),
        ]);
        let versions = valid_versions(&entry);
        assert!(versions.contains(&CanonicalVersion::V20));
        assert!(versions.contains(&CanonicalVersion::V21));
        assert!(!versions.contains(&CanonicalVersion::V22));
        assert!(versions.contains(&CanonicalVersion::V30));
        assert!(!is_readable(&entry, Version::new(2, 2)));
    }

    #[test]
    fn v22_and_v30_carry_forward_independently() {
        let entry = entry_with_versions([
            EMPTY,
            defined(Access::ReadWrite, Kind::StandardContinuous),
            EMPTY,
            EMPTY,
        ]);
        let versions = valid_versions(&entry);
        assert!(versions.contains(&CanonicalVersion::V22));
        assert!(versions.contains(&CanonicalVersion::V30));
    }

    #[test]
    fn resolved_flags_carries_forward_from_v20() {
        let entry = entry_with_versions([
            defined(Access::ReadOnly, Kind::ComplexNonContinuous),
            EMPTY,
            EMPTY,
            EMPTY,
        ]);
        let flags = resolved_flags(&entry, Version::new(2, 2)).expect("should carry forward");
        assert_eq!(flags, FeatureAttributes::Defined { access: Access::ReadOnly, kind: Kind::ComplexNonContinuous });
    }

    #[test]
    fn highest_non_deprecated_prefers_v22_over_v30() {
        let entry = entry_with_versions([
            defined(Access::ReadWrite, Kind::StandardContinuous),
            defined(Access::ReadWrite, Kind::StandardContinuous),
            defined(Access::ReadWrite, Kind::StandardContinuous),
            defined(Access::ReadWrite, Kind::StandardContinuous),
        ]);
        assert_eq!(highest_non_deprecated_version(&entry), Some(CanonicalVersion::V22));
    }

    #[test]
    fn type_version_conditional_requires_both_table_and_non_table_kinds() {
        // 0x73-shaped: table-only at every defined version -> not conditional.
        let table_only = entry_with_versions([
            EMPTY,
            EMPTY,
            defined(Access::ReadOnly, Kind::Table),
            defined(Access::ReadOnly, Kind::Table),
        ]);
        assert!(!is_type_version_conditional(&table_only));

        // Mixed: non-table at v2.x, table at v3.0 -> the response shape
        // itself depends on the query version.
        let mixed = entry_with_versions([
            defined(Access::ReadWrite, Kind::StandardContinuous),
            defined(Access::ReadWrite, Kind::StandardContinuous),
            EMPTY,
            defined(Access::ReadOnly, Kind::Table),
        ]);
        assert!(is_type_version_conditional(&mixed));
    }

    #[test]
    fn has_version_specific_features_ignores_identical_repeated_attrs() {
        // Brightness-shaped: every defined version carries identical
        // attributes, so nothing about its interpretation is
        // version-specific even though more than one slot is non-empty.
        let stable = entry_with_versions([
            defined(Access::ReadWrite, Kind::StandardContinuous),
            defined(Access::ReadWrite, Kind::StandardContinuous),
            defined(Access::ReadWrite, Kind::StandardContinuous),
            defined(Access::ReadWrite, Kind::StandardContinuous),
        ]);
        assert!(!has_version_specific_features(&stable));
    }

    #[test]
    fn has_version_specific_features_flags_diverging_attrs() {
        let diverging = entry_with_versions([
            defined(Access::WriteOnly, Kind::WriteOnlyNonContinuous),
            defined(Access::ReadWrite, Kind::SimpleNonContinuous),
            defined(Access::ReadWrite, Kind::SimpleNonContinuous),
            defined(Access::ReadWrite, Kind::SimpleNonContinuous),
        ]);
        assert!(has_version_specific_features(&diverging));
    }
}
