//! The formatter registry (spec.md §4.2): a closed set of pure functions
//! that turn a parsed response plus a resolved feature entry into display
//! text. Modeled as sum types matched on in `format()`/`format_table()`
//! rather than as per-entry function pointers (spec.md §9, "Replacing
//! per-entry function pointers") — there is no "pointer is null but the
//! flag said there should be one" failure mode to catch at runtime,
//! because an absent formatter is simply not a variant that can occur
//! where one is required (checked instead by the self-validator, which
//! confirms the *table* wired the right variant to the right kind).

use crate::enum_table::EnumTable;
use crate::version::Version;
use crate::response::NonTableResponse;

/// `(ok, text)`, as spec.md §4.2/§6 defines every formatter's contract:
/// `ok = false` means the value was out-of-spec but a best-effort string
/// was still produced (`InvalidValue`, spec.md §7).
pub type FormatResult = (bool, String);

fn hex2(b: u8) -> String {
    format!("0x{b:02x}")
}

/// `standard_continuous`: `"current value = N, max value = M"`, integers
/// right-aligned to width 5 (spec.md §8 scenario 2).
pub fn standard_continuous(resp: &NonTableResponse) -> FormatResult {
    (
        true,
        format!(
            "current value = {:>5}, max value = {:>5}",
            resp.cur_value(),
            resp.max_value()
        ),
    )
}

/// `ushort`: `"N (0xNNNN)"`.
pub fn ushort(resp: &NonTableResponse) -> FormatResult {
    let v = resp.cur_value();
    (true, format!("{v} (0x{v:04x})"))
}

/// `debug_bytes`: raw four-byte dump.
pub fn debug_bytes(resp: &NonTableResponse) -> FormatResult {
    (
        true,
        format!(
            "mh={} ml={} sh={} sl={}",
            hex2(resp.mh),
            hex2(resp.ml),
            hex2(resp.sh),
            hex2(resp.sl)
        ),
    )
}

/// `debug_sl_sh`: raw two-byte dump of the bytes a simple feature actually
/// uses.
pub fn debug_sl_sh(resp: &NonTableResponse) -> FormatResult {
    (true, format!("sh={} sl={}", hex2(resp.sh), hex2(resp.sl)))
}

/// `debug_continuous`: like `standard_continuous`, but also dumps the raw
/// bytes — used for synthesized/unrecognized features (spec.md §4.1,
/// `find_or_synthesize`), where showing the caller the raw reply is more
/// useful than trusting a guessed interpretation.
pub fn debug_continuous(resp: &NonTableResponse) -> FormatResult {
    (
        true,
        format!(
            "current value = {:>5}, max value = {:>5} [mh={} ml={} sh={} sl={}]",
            resp.cur_value(),
            resp.max_value(),
            hex2(resp.mh),
            hex2(resp.ml),
            hex2(resp.sh),
            hex2(resp.sl)
        ),
    )
}

/// `sl_byte`: `"Value: 0xNN"`.
pub fn sl_byte(resp: &NonTableResponse) -> FormatResult {
    (true, format!("Value: {}", hex2(resp.sl)))
}

/// `sl_lookup`: the generic `SIMPLE_NC` dispatch target (spec.md §4.2).
/// Looks `sl` up in the already-resolved SL-value table for this
/// `(feature, version)`.
pub fn sl_lookup(sl_values: &EnumTable, resp: &NonTableResponse) -> FormatResult {
    match sl_values.lookup(resp.sl) {
        Some(name) => (true, format!("{name} (sl={})", hex2(resp.sl))),
        None => (false, format!("Invalid value (sl={})", hex2(resp.sl))),
    }
}

/// `new_control_value` (0x02).
pub fn new_control_value(resp: &NonTableResponse) -> FormatResult {
    let text = match resp.sl {
        0x01 => "No new control values",
        0x02 => "One or more new control values have been saved",
        0xff => "No user controls are present",
        _ => return (false, format!("reserved ({})", hex2(resp.sl))),
    };
    (true, format!("{text} ({})", hex2(resp.sl)))
}

/// `color_temperature_increment` (0x0B).
pub fn color_temperature_increment(resp: &NonTableResponse) -> FormatResult {
    let cur = resp.cur_value();
    if cur == 0 || cur > 5000 {
        return (false, format!("Invalid value ({})", hex2(resp.sl)));
    }
    (true, format!("{cur} Kelvin per step"))
}

/// The per-step Kelvin value `color_temperature_request` multiplies SL by.
/// spec.md's formula ("3000 + N * (feature 0B increment) Kelvin") reaches
/// into a *different* feature's resolved value, which the `(parsed,
/// version) -> (ok, text)` formatter signature has no way to do — a
/// formatter only ever sees its own feature's bytes. Rather than widen
/// every formatter's signature for one feature, 0x0C assumes the common
/// 100 K/step increment and documents the simplification; a caller that
/// has also read 0x0B can recompute the exact value itself.
pub const DEFAULT_COLOR_TEMPERATURE_INCREMENT: u32 = 100;

/// `color_temperature_request` (0x0C).
pub fn color_temperature_request(resp: &NonTableResponse) -> FormatResult {
    let kelvin = 3000u32 + resp.cur_value() as u32 * DEFAULT_COLOR_TEMPERATURE_INCREMENT;
    (
        true,
        format!(
            "{kelvin} Kelvin (3000 + {} * {DEFAULT_COLOR_TEMPERATURE_INCREMENT})",
            resp.cur_value()
        ),
    )
}

/// The absolute Kelvin presets `select_color_preset` resolves SL against
/// for MCCS < 3.0, or for 3.0 when `mh == 0`.
pub const ABSOLUTE_COLOR_TEMPERATURE: EnumTable = EnumTable::new(&[
    (0x01, "4000 K"),
    (0x02, "5000 K"),
    (0x03, "5800 K"),
    (0x04, "6200 K"),
    (0x05, "6500 K"),
    (0x06, "7000 K"),
    (0x07, "7500 K"),
    (0x08, "8200 K"),
    (0x09, "9300 K"),
    (0x0A, "10000 K"),
    (0x0B, "11500 K"),
    (0x0C, "User 1"),
    (0x0D, "User 2"),
    (0x0E, "User 3"),
]);

/// The relative warm/cool offsets `select_color_preset` resolves SL
/// against for MCCS >= 3.0 when `mh != 0` (spec.md §4.2).
pub const RELATIVE_COLOR_TEMPERATURE: EnumTable = EnumTable::new(&[
    (0x01, "sRGB"),
    (0x02, "Display Native"),
    (0x03, "-4 relative warmer"),
    (0x04, "-3 relative warmer"),
    (0x05, "-2 relative warmer"),
    (0x06, "-1 relative warmer"),
    (0x07, "+1 relative cooler"),
    (0x08, "+2 relative cooler"),
    (0x09, "+3 relative cooler"),
    (0x0A, "+4 relative cooler"),
    (0x0B, "User 1"),
    (0x0C, "User 2"),
    (0x0D, "User 3"),
]);

/// `select_color_preset` (0x14): two independent lookups (SL against one
/// of two tables depending on version/mh; MH against a tolerance scale),
/// joined per spec.md §4.2's version-dependent output shape.
pub fn select_color_preset(version: Version, resp: &NonTableResponse) -> FormatResult {
    let sl_invalid = resp.sl == 0x00 || resp.sl >= 0xE0;
    let use_absolute = version.major < 3 || resp.mh == 0x00;

    let (sl_ok, sl_label) = if sl_invalid {
        (false, "Invalid value".to_string())
    } else {
        let table = if use_absolute {
            &ABSOLUTE_COLOR_TEMPERATURE
        } else {
            &RELATIVE_COLOR_TEMPERATURE
        };
        match table.lookup(resp.sl) {
            Some(name) => (true, name.to_string()),
            None => (false, "Invalid value".to_string()),
        }
    };

    if version.major < 3 {
        return (sl_ok, format!("Setting: {sl_label} ({})", hex2(resp.sl)));
    }

    let (mh_ok, mh_label) = if resp.mh == 0x00 {
        (true, "No tolerance specified".to_string())
    } else if resp.mh >= 0x0B {
        (false, "Invalid tolerance value".to_string())
    } else {
        (true, format!("Tolerance: {}%", resp.mh))
    };

    (
        sl_ok && mh_ok,
        format!(
            "Setting: {sl_label} ({}), {mh_label} ({})",
            hex2(resp.sl),
            hex2(resp.mh)
        ),
    )
}

/// `audio_speaker_volume_v30` (0x62), only invoked for v >= 3.
pub fn audio_speaker_volume_v30(resp: &NonTableResponse) -> FormatResult {
    match resp.sl {
        0x00 => (true, "Fixed (default) level".to_string()),
        0xFF => (true, "Mute".to_string()),
        n => (true, format!("Volume level: {n}")),
    }
}

/// Which role `audio_treble_bass_v30`/`audio_balance_v30` are reporting —
/// they share identical decode structure but different neutral-point
/// labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AxisRole {
    Treble,
    Bass,
    Balance,
}

impl AxisRole {
    fn labels(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            AxisRole::Treble | AxisRole::Bass => ("Decreased", "Neutral", "Increased"),
            AxisRole::Balance => ("Left of center", "Centered", "Right of center"),
        }
    }
}

/// `audio_treble_bass_v30` (0x8F, 0x91) and `audio_balance_v30` (0x93):
/// identical decode shape around a 0x80 neutral point, differing only in
/// axis labels.
pub fn audio_axis_v30(role: AxisRole, resp: &NonTableResponse) -> FormatResult {
    let (low, mid, high) = role.labels();
    if resp.sl == 0x00 {
        return (false, format!("Invalid value ({})", hex2(resp.sl)));
    }
    if resp.sl < 0x80 {
        let delta = 0x80u16 - resp.sl as u16;
        (true, format!("{delta}: {low} ({}, neutral - {delta})", hex2(resp.sl)))
    } else if resp.sl == 0x80 {
        (true, mid.to_string())
    } else {
        let delta = resp.sl as u16 - 0x80u16;
        (true, format!("{delta}: {high} ({}, neutral + {delta})", hex2(resp.sl)))
    }
}

/// `xac_horizontal_frequency` (0xAC): value in whole Hz.
pub fn xac_horizontal_frequency(resp: &NonTableResponse) -> FormatResult {
    if resp.mh == 0xFF && resp.ml == 0xFF && resp.sh == 0xFF && resp.sl == 0xFF {
        return (true, "Cannot determine frequency or out of range".to_string());
    }
    (true, format!("{} hz", resp.extended_value()))
}

/// `xae_vertical_frequency` (0xAE): value in units of 0.01 Hz.
pub fn xae_vertical_frequency(resp: &NonTableResponse) -> FormatResult {
    if resp.mh == 0xFF && resp.ml == 0xFF && resp.sh == 0xFF && resp.sl == 0xFF {
        return (true, "Cannot determine frequency or out of range".to_string());
    }
    let hundredths = resp.extended_value();
    (true, format!("{}.{:02} hz", hundredths / 100, hundredths % 100))
}

/// `xbe_link_control` (0xBE): bit 0 of SL.
pub fn xbe_link_control(resp: &NonTableResponse) -> FormatResult {
    let label = if resp.sl & 0x01 != 0 { "enabled" } else { "disabled" };
    (true, format!("Link control: {label} ({})", hex2(resp.sl)))
}

/// `xc0_display_usage_time` (0xC0). v < 3 uses `(sh<<8)|sl`; v >= 3 uses
/// `(ml<<16)|(sh<<8)|sl`, and warns if `mh != 0` (reserved, should be
/// zero; spec.md §4.2 flags this as worth surfacing, not silently
/// dropping).
pub fn xc0_display_usage_time(version: Version, resp: &NonTableResponse) -> FormatResult {
    if version.major < 3 {
        let hours = resp.cur_value();
        return (true, format!("Usage time (hours) = {hours} (0x{hours:04x})"));
    }
    let hours = resp.extended_value();
    let mut text = format!("Usage time (hours) = {hours} (0x{hours:06x})");
    if resp.mh != 0 {
        text.push_str(&format!(", note: mh byte {} is non-zero and ignored", hex2(resp.mh)));
    }
    (true, text)
}

/// `application_enable_key` (0xC6): `"0xSHSL"`.
pub fn application_enable_key(resp: &NonTableResponse) -> FormatResult {
    (true, format!("0x{:02x}{:02x}", resp.sh, resp.sl))
}

/// The manufacturer table `display_controller_type` (0xC8) resolves SL
/// against.
pub const DISPLAY_CONTROLLER_MANUFACTURERS: EnumTable = EnumTable::new(&[
    (0x01, "Acer Labs"),
    (0x02, "AMD"),
    (0x03, "Analogix"),
    (0x04, "Chrontel"),
    (0x05, "Genesys Logic"),
    (0x06, "Himax"),
    (0x07, "Intel"),
    (0x08, "Megachips"),
    (0x09, "MStar"),
    (0x0A, "Mythro"),
    (0x0B, "NXP"),
    (0x0C, "Parade Technologies"),
    (0x0D, "Realtek"),
    (0x0E, "Renesas"),
    (0x0F, "Silicon Image"),
    (0x10, "Sitronix"),
    (0x11, "Texas Instruments"),
    (0xFF, "Not specified"),
]);

/// `display_controller_type` (0xC8). The MCCS text describing which bytes
/// carry the controller number is itself inconsistent between ML/SH and
/// MH/ML readings (spec.md §9) — rather than guess, emit the
/// manufacturer name plus every raw byte, labeled.
pub fn display_controller_type(resp: &NonTableResponse) -> FormatResult {
    let mfg = DISPLAY_CONTROLLER_MANUFACTURERS
        .lookup(resp.sl)
        .unwrap_or("Unrecognized manufacturer");
    (
        true,
        format!(
            "{mfg} (controller number ambiguous between mh/ml and ml/sh: mh={} ml={} sh={})",
            hex2(resp.mh),
            hex2(resp.ml),
            hex2(resp.sh)
        ),
    )
}

/// `version` (0xC9, 0xDF): `"SH.SL"`.
pub fn version_formatter(resp: &NonTableResponse) -> FormatResult {
    (true, format!("{}.{}", resp.sh, resp.sl))
}

/// `xce_aux_display_size` (0xCE).
pub fn xce_aux_display_size(resp: &NonTableResponse) -> FormatResult {
    let rows = (resp.sl >> 6) & 0x3;
    let chars_per_row = resp.sl & 0x3F;
    (true, format!("{rows} rows, {chars_per_row} characters per row"))
}

const MUTE_UNMUTE: EnumTable = EnumTable::new(&[(0x01, "Mute"), (0x02, "Unmute")]);
const BLANK_UNBLANK: EnumTable = EnumTable::new(&[(0x01, "Blank"), (0x02, "Unblank")]);

/// `x8d_v22_mute_audio_blank_screen` (0x8D, v2.2 only): independent
/// lookups over SL (mute/unmute) and SH (blank/unblank).
pub fn x8d_v22_mute_audio_blank_screen(resp: &NonTableResponse) -> FormatResult {
    let (sl_ok, sl_label) = match MUTE_UNMUTE.lookup(resp.sl) {
        Some(n) => (true, n.to_string()),
        None => (false, "Invalid value".to_string()),
    };
    let (sh_ok, sh_label) = match BLANK_UNBLANK.lookup(resp.sh) {
        Some(n) => (true, n.to_string()),
        None => (false, "Invalid value".to_string()),
    };
    (
        sl_ok && sh_ok,
        format!(
            "{sl_label} ({}), {sh_label} ({})",
            hex2(resp.sl),
            hex2(resp.sh)
        ),
    )
}

/// The closed set of per-entry custom non-table formatters (spec.md §4.2,
/// §9's "Replacing per-entry function pointers"). Dispatch for
/// `STD_CONT`/`SIMPLE_NC` never goes through this enum — those are
/// resolved directly in `resolve.rs`/`catalog.rs` since they need no
/// per-entry customization beyond the resolved SL table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NonTableFormatter {
    Ushort,
    DebugBytes,
    DebugSlSh,
    DebugContinuous,
    SlByte,
    NewControlValue,
    ColorTemperatureIncrement,
    ColorTemperatureRequest,
    SelectColorPreset,
    AudioSpeakerVolumeV30,
    AudioAxisV30(AxisRole),
    XacHorizontalFrequency,
    XaeVerticalFrequency,
    XbeLinkControl,
    Xc0DisplayUsageTime,
    ApplicationEnableKey,
    DisplayControllerType,
    VersionFormatter,
    XceAuxDisplaySize,
    X8dV22MuteAudioBlankScreen,
}

impl NonTableFormatter {
    pub fn format(&self, version: Version, resp: &NonTableResponse) -> FormatResult {
        match *self {
            NonTableFormatter::Ushort => ushort(resp),
            NonTableFormatter::DebugBytes => debug_bytes(resp),
            NonTableFormatter::DebugSlSh => debug_sl_sh(resp),
            NonTableFormatter::DebugContinuous => debug_continuous(resp),
            NonTableFormatter::SlByte => sl_byte(resp),
            NonTableFormatter::NewControlValue => new_control_value(resp),
            NonTableFormatter::ColorTemperatureIncrement => color_temperature_increment(resp),
            NonTableFormatter::ColorTemperatureRequest => color_temperature_request(resp),
            NonTableFormatter::SelectColorPreset => select_color_preset(version, resp),
            NonTableFormatter::AudioSpeakerVolumeV30 => audio_speaker_volume_v30(resp),
            NonTableFormatter::AudioAxisV30(role) => audio_axis_v30(role, resp),
            NonTableFormatter::XacHorizontalFrequency => xac_horizontal_frequency(resp),
            NonTableFormatter::XaeVerticalFrequency => xae_vertical_frequency(resp),
            NonTableFormatter::XbeLinkControl => xbe_link_control(resp),
            NonTableFormatter::Xc0DisplayUsageTime => xc0_display_usage_time(version, resp),
            NonTableFormatter::ApplicationEnableKey => application_enable_key(resp),
            NonTableFormatter::DisplayControllerType => display_controller_type(resp),
            NonTableFormatter::VersionFormatter => version_formatter(resp),
            NonTableFormatter::XceAuxDisplaySize => xce_aux_display_size(resp),
            NonTableFormatter::X8dV22MuteAudioBlankScreen => x8d_v22_mute_audio_blank_screen(resp),
        }
    }
}

/// Plain space-separated lowercase hex, the default table formatter
/// (spec.md §4.2, "Dispatch rule for table").
pub fn hex_dump(bytes: &[u8]) -> FormatResult {
    let text = bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    (true, text)
}

/// `x73_lut_size` (table, 0x73): three 16-bit entry counts followed by
/// three per-channel bit depths. Falls back to `hex_dump` (still
/// `ok=true`, spec.md §7's `MalformedTableResponse`) if the buffer isn't
/// exactly 9 bytes.
pub fn x73_lut_size(bytes: &[u8]) -> FormatResult {
    if bytes.len() != 9 {
        let (_, dump) = hex_dump(bytes);
        return (
            true,
            format!("{dump} (note: expected 9 bytes for LUT size, got {})", bytes.len()),
        );
    }
    let red_count = u16::from_be_bytes([bytes[0], bytes[1]]);
    let green_count = u16::from_be_bytes([bytes[2], bytes[3]]);
    let blue_count = u16::from_be_bytes([bytes[4], bytes[5]]);
    let red_bits = bytes[6];
    let green_bits = bytes[7];
    let blue_bits = bytes[8];
    (
        true,
        format!(
            "Number of entries: {red_count} red, {green_count} green, {blue_count} blue, \
             Bits per entry: {red_bits} red, {green_bits} green, {blue_bits} blue"
        ),
    )
}

/// The closed set of per-entry custom table formatters (spec.md §4.2).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TableFormatter {
    X73LutSize,
}

impl TableFormatter {
    pub fn format(&self, bytes: &[u8]) -> FormatResult {
        match self {
            TableFormatter::X73LutSize => x73_lut_size(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(mh: u8, ml: u8, sh: u8, sl: u8) -> NonTableResponse {
        NonTableResponse::new(0x00, mh, ml, sh, sl)
    }

    #[test]
    fn standard_continuous_pads_to_width_five() {
        // spec.md §8 scenario 2.
        let (ok, text) = standard_continuous(&resp(0x00, 0xFF, 0x00, 0x80));
        assert!(ok);
        assert_eq!(text, "current value =   128, max value =   255");
    }

    #[test]
    fn new_control_value_scenario_one() {
        // spec.md §8 scenario 1.
        let (ok, text) = new_control_value(&resp(0, 0, 0, 0x02));
        assert!(ok);
        assert_eq!(text, "One or more new control values have been saved (0x02)");
    }

    #[test]
    fn select_color_preset_absolute_when_mh_zero_even_at_v30() {
        // spec.md §8 scenario 3.
        let v30 = Version::new(3, 0);
        let (ok, text) = select_color_preset(v30, &resp(0x00, 0, 0, 0x05));
        assert!(ok);
        assert_eq!(text, "Setting: 6500 K (0x05), No tolerance specified (0x00)");
    }

    #[test]
    fn select_color_preset_relative_when_mh_nonzero_at_v30() {
        // spec.md §8 scenario 4.
        let v30 = Version::new(3, 0);
        let (ok, text) = select_color_preset(v30, &resp(0x03, 0, 0, 0x05));
        assert!(ok);
        assert_eq!(text, "Setting: -2 relative warmer (0x05), Tolerance: 3% (0x03)");
    }

    #[test]
    fn xac_reports_out_of_range_sentinel() {
        // spec.md §8 scenario 5.
        let (ok, text) = xac_horizontal_frequency(&resp(0xFF, 0xFF, 0xFF, 0xFF));
        assert!(ok);
        assert_eq!(text, "Cannot determine frequency or out of range");
    }

    #[test]
    fn xc0_decodes_24_bit_usage_at_v30() {
        // spec.md §8 scenario 6.
        let v30 = Version::new(3, 0);
        let (ok, text) = xc0_display_usage_time(v30, &resp(0x00, 0x00, 0x01, 0x2C));
        assert!(ok);
        assert!(text.starts_with("Usage time (hours) = 300 (0x00012c)"));
    }

    #[test]
    fn x73_decodes_nine_byte_lut_size() {
        // spec.md §8 scenario 7.
        let (ok, text) =
            x73_lut_size(&[0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x08, 0x08, 0x08]);
        assert!(ok);
        assert_eq!(
            text,
            "Number of entries: 256 red, 256 green, 256 blue, Bits per entry: 8 red, 8 green, 8 blue"
        );
    }

    #[test]
    fn x73_falls_back_to_hex_dump_on_malformed_buffer() {
        let (ok, text) = x73_lut_size(&[0x01, 0x02]);
        assert!(ok);
        assert!(text.starts_with("01 02"));
    }

    #[test]
    fn sl_lookup_flags_invalid_value() {
        let table = EnumTable::new(&[(0x01, "Foo")]);
        let (ok, text) = sl_lookup(&table, &resp(0, 0, 0, 0x05));
        assert!(!ok);
        assert_eq!(text, "Invalid value (sl=0x05)");
    }
}
