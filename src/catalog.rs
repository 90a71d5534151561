//! The public catalog interface: the one surface consumers are expected
//! to use directly. Everything in `resolve`, `validate`, `table` is
//! implementation detail reachable through here.

use crate::enum_table::EnumTable;
use crate::flags::{FeatureAttributes, GlobalFlags, Kind};
use crate::format::{self, FormatResult, NonTableFormatter};
use crate::resolve;
use crate::response::NonTableResponse;
use crate::table::{FeatureEntry, PerVersionData, FEATURE_TABLE};
use crate::version::{CanonicalVersion, Version};

/// A feature record handed back by the catalog: either a reference into
/// the static table, or one fabricated on the spot for a code the table
/// doesn't carry. Keeping these as distinct variants (rather than always
/// heap-allocating, or always borrowing and panicking on synthesis) lets
/// the type itself say whether a `'static` reference was available.
#[derive(Debug, Clone)]
pub enum CatalogEntry<'a> {
    Static(&'a FeatureEntry),
    Synthetic(Box<FeatureEntry>),
}

impl<'a> CatalogEntry<'a> {
    pub fn entry(&self) -> &FeatureEntry {
        match self {
            CatalogEntry::Static(e) => e,
            CatalogEntry::Synthetic(e) => e,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.entry().global_flags.contains(GlobalFlags::SYNTHETIC)
    }
}

/// Every entry in the static table, in declaration order. Runs
/// self-validation first; self-validation failure is not a value this
/// function can hand back — it `panic!`s, per spec.md §4.4/§7 (see
/// `validate::ensure_validated`).
pub fn list_features() -> &'static [FeatureEntry] {
    crate::validate::ensure_validated();
    FEATURE_TABLE
}

pub fn feature_count() -> usize {
    list_features().len()
}

pub fn get_by_index(index: usize) -> Option<&'static FeatureEntry> {
    list_features().get(index)
}

/// Looks `code` up in the static table only; `None` if it isn't there.
/// Use [`lookup_or_synthesize`] when a best-effort fallback is wanted
/// instead.
pub fn lookup(code: u8) -> Option<&'static FeatureEntry> {
    list_features().iter().find(|e| e.code == code)
}

fn synthesize(code: u8) -> FeatureEntry {
    let description = if code >= 0xE0 { "Manufacturer Specific" } else { "Unknown feature" };
    let defined = PerVersionData {
        flags: Some(FeatureAttributes::Defined {
            access: crate::flags::Access::ReadWrite,
            kind: Kind::StandardContinuous,
        }),
        name: None,
        sl_values: None,
    };
    const EMPTY: PerVersionData = PerVersionData { flags: None, name: None, sl_values: None };
    FeatureEntry {
        code,
        description,
        spec_groups: crate::flags::SpecGroups::empty(),
        subsets: crate::flags::Subsets::empty(),
        global_flags: GlobalFlags::SYNTHETIC,
        versions: [defined, EMPTY, EMPTY, EMPTY],
        default_sl_values: None,
        nontable_formatter: Some(NonTableFormatter::DebugContinuous),
        table_formatter: None,
    }
}

/// Looks `code` up in the static table; if absent, fabricates a
/// best-effort entry (read-write, standard continuous, named by
/// convention from the code range) flagged [`GlobalFlags::SYNTHETIC`] so
/// a caller can tell the difference.
pub fn lookup_or_synthesize(code: u8) -> CatalogEntry<'static> {
    match lookup(code) {
        Some(entry) => CatalogEntry::Static(entry),
        None => CatalogEntry::Synthetic(Box::new(synthesize(code))),
    }
}

pub fn feature_name(entry: &FeatureEntry, version: Version) -> String {
    resolve::resolved_name(entry, version).to_string()
}

pub fn resolved_flags(entry: &FeatureEntry, version: Version) -> Option<FeatureAttributes> {
    resolve::resolved_flags(entry, version)
}

pub fn resolved_sl_values<'a>(entry: &'a FeatureEntry, version: Version) -> Option<&'a EnumTable> {
    resolve::resolved_sl_values(entry, version)
}

pub fn is_readable(entry: &FeatureEntry, version: Version) -> bool {
    resolve::is_readable(entry, version)
}

pub fn is_writable(entry: &FeatureEntry, version: Version) -> bool {
    resolve::is_writable(entry, version)
}

pub fn valid_versions(entry: &FeatureEntry) -> Vec<CanonicalVersion> {
    resolve::valid_versions(entry)
}

pub fn interpret_flags(attrs: &FeatureAttributes) -> String {
    crate::flags::interpret_flags(attrs)
}

/// One line of `list_features`'s output (spec.md §4.3): the
/// version-independent name, the interpreted flags at
/// `highest_non_deprecated_version`, and a `(Version specific
/// interpretation)` suffix iff the entry's attributes differ across its
/// defined version slots.
pub fn describe_feature(entry: &FeatureEntry) -> String {
    let flags_text = match resolve::highest_non_deprecated_version(entry) {
        Some(version) => match entry.version_slot(version).flags {
            Some(attrs) => interpret_flags(&attrs),
            None => "Deprecated".to_string(),
        },
        None => "Deprecated".to_string(),
    };
    let mut line = format!("{} ({})", entry.description, flags_text);
    if resolve::has_version_specific_features(entry) {
        line.push_str(" (Version specific interpretation)");
    }
    line
}

/// `list_features(sink)` (spec.md §4.3): one formatted line per entry, in
/// table declaration order. Returned as a single newline-joined string
/// rather than written directly to a sink, since the catalog has no
/// opinion on where its output goes (spec.md §1, "the catalog returns
/// strings, not side effects") — a caller wanting a `Write` sink joins
/// the lines itself.
pub fn format_feature_listing() -> String {
    list_features().iter().map(describe_feature).collect::<Vec<_>>().join("\n")
}

/// Formats a non-table `GET VCP` reply for `entry` at `version`.
///
/// Dispatch is driven by the *resolved kind at this version* (spec.md
/// §4.2), not merely by whether the entry happens to carry a custom
/// formatter: `StandardContinuous` always uses the generic current/max
/// renderer and `SimpleNonContinuous` always looks `sl` up against the
/// resolved SL table, even for an entry whose custom formatter is only
/// meaningful at a different version. This matters for features like
/// 0x62 (audio speaker volume), which is `StandardContinuous` at v2.x and
/// `ComplexContinuous` (with a custom formatter) only at v3.0 — calling
/// the v3.0 formatter at v2.x would be wrong. `WriteOnlyNonContinuous`
/// has no formatter at all (spec.md §4.2: "any caller that reaches here
/// has a logic error"); it returns `ok=false` rather than panicking,
/// since a query operation must never panic (spec.md §7).
///
/// Synthesized entries (spec.md §4.1) are the one exception: they carry
/// a single `StandardContinuous` slot but want `debug_continuous`'s extra
/// raw-byte dump rather than the plain renderer, since there is no
/// version-specific ambiguity to get wrong for a fabricated entry.
pub fn format_non_table(
    entry: &FeatureEntry,
    version: Version,
    resp: &NonTableResponse,
) -> FormatResult {
    if entry.global_flags.contains(GlobalFlags::SYNTHETIC) {
        if let Some(formatter) = entry.nontable_formatter {
            return formatter.format(version, resp);
        }
    }

    match resolve::resolved_flags(entry, version) {
        Some(FeatureAttributes::Defined { kind: Kind::StandardContinuous, .. }) => {
            format::standard_continuous(resp)
        }
        Some(FeatureAttributes::Defined { kind: Kind::SimpleNonContinuous, .. }) => {
            match resolve::resolved_sl_values(entry, version) {
                Some(table) => format::sl_lookup(table, resp),
                None => format::debug_sl_sh(resp),
            }
        }
        Some(FeatureAttributes::Defined { kind: Kind::WriteOnlyNonContinuous, .. }) => {
            (false, "write-only feature has no readable value".to_string())
        }
        Some(FeatureAttributes::Defined {
            kind: Kind::ComplexContinuous | Kind::ComplexNonContinuous, ..
        }) => match entry.nontable_formatter {
            Some(formatter) => formatter.format(version, resp),
            None => format::debug_bytes(resp),
        },
        _ => match entry.nontable_formatter {
            Some(formatter) => formatter.format(version, resp),
            None => format::debug_bytes(resp),
        },
    }
}

/// Formats a table `GET VCP` reply for `entry`. Falls back to a hex dump
/// when the entry has no registered table formatter.
pub fn format_table(entry: &FeatureEntry, bytes: &[u8]) -> FormatResult {
    match entry.table_formatter {
        Some(formatter) => formatter.format(bytes),
        None => format::hex_dump(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_features_validates_and_is_non_empty() {
        let features = list_features();
        assert!(!features.is_empty());
    }

    #[test]
    fn lookup_finds_a_known_code() {
        let entry = lookup(0x10).expect("brightness is in the table");
        assert_eq!(entry.description, "Brightness");
    }

    #[test]
    fn lookup_or_synthesize_fabricates_manufacturer_specific_entries() {
        // 0xE5 is deliberately absent from the static table.
        assert!(lookup(0xE5).is_none());
        let entry = lookup_or_synthesize(0xE5);
        assert!(entry.is_synthetic());
        assert_eq!(entry.entry().description, "Manufacturer Specific");
    }

    #[test]
    fn lookup_or_synthesize_names_low_codes_unknown() {
        assert!(lookup(0x7F).is_none());
        let entry = lookup_or_synthesize(0x7F);
        assert_eq!(entry.entry().description, "Unknown feature");
    }

    #[test]
    fn x13_backlight_is_deprecated_exactly_at_v22() {
        let entry = lookup(0x13).expect("0x13 is in the table");
        assert!(is_readable(entry, Version::new(2, 1)));
        assert!(!is_readable(entry, Version::new(2, 2)));
        assert!(is_readable(entry, Version::new(3, 0)));
    }

    #[test]
    fn audio_speaker_volume_uses_standard_continuous_below_v30() {
        // 0x62 is StandardContinuous at v2.x and ComplexContinuous (with a
        // custom formatter meant only for v3.0) at v3.0 — the v2.x call
        // must not pick up the v3.0-only formatter.
        let entry = lookup(0x62).expect("0x62 is in the table");
        let resp = NonTableResponse::new(0x62, 0x00, 0xFF, 0x00, 0x00);
        let (ok, text) = format_non_table(entry, Version::new(2, 0), &resp);
        assert!(ok);
        assert_eq!(text, "current value =     0, max value =   255");
    }

    #[test]
    fn audio_speaker_volume_uses_custom_formatter_at_v30() {
        let entry = lookup(0x62).expect("0x62 is in the table");
        let resp = NonTableResponse::new(0x62, 0x00, 0x00, 0x00, 0x00);
        let (ok, text) = format_non_table(entry, Version::new(3, 0), &resp);
        assert!(ok);
        assert_eq!(text, "Fixed (default) level");
    }

    #[test]
    fn synthesized_entry_uses_debug_continuous_not_plain_continuous() {
        let entry = lookup_or_synthesize(0xE5);
        let resp = NonTableResponse::new(0xE5, 0x00, 0xFF, 0x00, 0x10);
        let (ok, text) = format_non_table(entry.entry(), Version::new(2, 0), &resp);
        assert!(ok);
        assert!(text.contains("mh=0x00"), "expected raw byte dump, got {text}");
    }

    #[test]
    fn format_feature_listing_marks_version_specific_entries() {
        let listing = format_feature_listing();
        let line = listing
            .lines()
            .find(|line| line.starts_with("Backlight Control"))
            .expect("0x13 should be listed");
        assert!(line.contains("(Version specific interpretation)"));
    }

    #[test]
    fn format_feature_listing_omits_suffix_for_stable_entries() {
        let listing = format_feature_listing();
        let line = listing
            .lines()
            .find(|line| line.starts_with("Brightness"))
            .expect("0x10 should be listed");
        assert!(!line.contains("Version specific interpretation"));
    }
}
