//! End-to-end scenarios from the catalog's contract: each test below
//! corresponds to one row of the concrete scenario table the catalog is
//! specified against, exercised through the public API only.

use vcp_catalog::{
    format_non_table, format_table, lookup, lookup_or_synthesize, resolved_flags, FeatureAttributes,
    NonTableResponse, Version,
};

fn resp(mh: u8, ml: u8, sh: u8, sl: u8) -> NonTableResponse {
    NonTableResponse::new(0x00, mh, ml, sh, sl)
}

#[test]
fn scenario_1_new_control_value_saved() {
    let entry = lookup(0x02).expect("0x02 is in the table");
    let (ok, text) = format_non_table(entry, Version::new(2, 0), &resp(0, 0, 0, 0x02));
    assert!(ok);
    assert_eq!(text, "One or more new control values have been saved (0x02)");
}

#[test]
fn scenario_2_contrast_current_and_max_width_five() {
    let entry = lookup(0x12).expect("0x12 is in the table");
    // cur_value = 128 -> sh=0x00, sl=0x80; max_value = 255 -> mh=0x00, ml=0xFF.
    let (ok, text) = format_non_table(entry, Version::new(2, 2), &resp(0x00, 0xFF, 0x00, 0x80));
    assert!(ok);
    assert_eq!(text, "current value =   128, max value =   255");
}

#[test]
fn scenario_3_select_color_preset_absolute_table_when_mh_zero() {
    let entry = lookup(0x14).expect("0x14 is in the table");
    let (ok, text) = format_non_table(entry, Version::new(3, 0), &resp(0x00, 0, 0, 0x05));
    assert!(ok);
    assert_eq!(text, "Setting: 6500 K (0x05), No tolerance specified (0x00)");
}

#[test]
fn scenario_4_select_color_preset_relative_table_when_mh_nonzero() {
    let entry = lookup(0x14).expect("0x14 is in the table");
    let (ok, text) = format_non_table(entry, Version::new(3, 0), &resp(0x03, 0, 0, 0x05));
    assert!(ok);
    assert_eq!(text, "Setting: -2 relative warmer (0x05), Tolerance: 3% (0x03)");
}

#[test]
fn scenario_5_horizontal_frequency_out_of_range_sentinel() {
    let entry = lookup(0xAC).expect("0xAC is in the table");
    let (ok, text) =
        format_non_table(entry, Version::new(2, 0), &resp(0xFF, 0xFF, 0xFF, 0xFF));
    assert!(ok);
    assert_eq!(text, "Cannot determine frequency or out of range");
}

#[test]
fn scenario_6_display_usage_time_decodes_24_bit_value_at_v30() {
    let entry = lookup(0xC0).expect("0xC0 is in the table");
    let (ok, text) = format_non_table(entry, Version::new(3, 0), &resp(0x00, 0x00, 0x01, 0x2C));
    assert!(ok);
    assert!(text.starts_with("Usage time (hours) = 300 (0x00012c)"));
}

#[test]
fn scenario_7_lut_size_decodes_nine_byte_table_response() {
    let entry = lookup(0x73).expect("0x73 is in the table");
    let buffer = [0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x08, 0x08, 0x08];
    let (ok, text) = format_table(entry, &buffer);
    assert!(ok);
    assert_eq!(
        text,
        "Number of entries: 256 red, 256 green, 256 blue, Bits per entry: 8 red, 8 green, 8 blue"
    );
}

#[test]
fn scenario_8_unrecognized_code_synthesizes_manufacturer_specific_entry() {
    assert!(lookup(0xE5).is_none());
    let entry = lookup_or_synthesize(0xE5);
    assert!(entry.is_synthetic());
    assert_eq!(entry.entry().description, "Manufacturer Specific");
    let flags = resolved_flags(entry.entry(), Version::new(2, 0));
    assert_eq!(
        flags,
        Some(FeatureAttributes::Defined {
            access: vcp_catalog::Access::ReadWrite,
            kind: vcp_catalog::Kind::StandardContinuous,
        })
    );
}

#[test]
fn scenario_9_backlight_control_deprecated_at_v22() {
    let entry = lookup(0x13).expect("0x13 is in the table");
    let flags = resolved_flags(entry, Version::new(2, 2));
    assert_eq!(flags, Some(FeatureAttributes::Deprecated));
    assert!(!vcp_catalog::is_readable(entry, Version::new(2, 2)));
}
