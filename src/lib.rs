//! Static VCP feature catalog for MCCS/DDC-CI monitor control.
//!
//! This crate answers questions about what a given VCP feature code
//! means, at a given MCCS protocol version, and how to turn a raw
//! `GET VCP` reply into display text for it. It has no opinion on how
//! those bytes got onto the wire — that's a transport concern this crate
//! does not address.

pub mod catalog;
pub mod enum_table;
pub mod error;
pub mod flags;
pub mod format;
pub mod resolve;
pub mod response;
pub mod table;
pub mod validate;
pub mod version;

pub use catalog::{
    describe_feature, feature_count, feature_name, format_feature_listing, format_non_table,
    format_table, get_by_index, interpret_flags, is_readable, is_writable, list_features, lookup,
    lookup_or_synthesize, resolved_flags, resolved_sl_values, valid_versions, CatalogEntry,
};
pub use enum_table::EnumTable;
pub use error::{CatalogError, ValidationError};
pub use flags::{Access, FeatureAttributes, GlobalFlags, Kind, SpecGroups, Subsets};
pub use format::{FormatResult, NonTableFormatter, TableFormatter};
pub use response::NonTableResponse;
pub use table::FeatureEntry;
pub use version::{CanonicalVersion, Version};
