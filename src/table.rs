//! The static feature table (spec.md §3, §4's component 5): roughly a
//! hundred VCP feature entries, each carrying per-version overrides and a
//! version-independent default. `examples/original_source/` for this spec
//! was filtered down to zero kept files, so this table is not a port of
//! any particular reference implementation's data — it is built to be
//! internally consistent with spec.md §4.2's named formatters and §8's
//! concrete scenarios, and to cover the nine spec groups and eight
//! subsets spec.md §3 defines, not to reproduce a specific vendor's exact
//! byte-for-byte VCP table.

use crate::enum_table::EnumTable;
use crate::flags::{Access, GlobalFlags, Kind, SpecGroups, Subsets};
use crate::flags::FeatureAttributes;
use crate::format::{AxisRole, NonTableFormatter, TableFormatter};
use crate::version::CanonicalVersion;

use Access::{ReadOnly as RO, ReadWrite as RW, WriteOnly as WO};
use Kind::{
    ComplexContinuous as COMPLEX_CONT, ComplexNonContinuous as COMPLEX_NC,
    SimpleNonContinuous as SIMPLE_NC, StandardContinuous as STD_CONT, Table as TABLE,
    WriteOnlyNonContinuous as WO_NC, WriteOnlyTable as WO_TABLE,
};

/// One version slot's worth of overridable data (spec.md §3). `flags:
/// None` means "not defined for this version" — the slot is absent, not
/// a zeroed bit pattern.
#[derive(Debug, Clone, Copy)]
pub struct PerVersionData {
    pub flags: Option<FeatureAttributes>,
    pub name: Option<&'static str>,
    pub sl_values: Option<&'static EnumTable>,
}

const EMPTY: PerVersionData = PerVersionData { flags: None, name: None, sl_values: None };

impl PerVersionData {
    const fn defined(access: Access, kind: Kind) -> Self {
        PerVersionData {
            flags: Some(FeatureAttributes::Defined { access, kind }),
            name: None,
            sl_values: None,
        }
    }

    const fn deprecated() -> Self {
        PerVersionData { flags: Some(FeatureAttributes::Deprecated), name: None, sl_values: None }
    }

    const fn with_name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    const fn with_sl_values(mut self, values: &'static EnumTable) -> Self {
        self.sl_values = Some(values);
        self
    }
}

use PerVersionData::defined as v;
use PerVersionData::deprecated as dep;

/// A single VCP feature's complete version-indexed record (spec.md §3).
#[derive(Debug, Clone, Copy)]
pub struct FeatureEntry {
    pub code: u8,
    pub description: &'static str,
    pub spec_groups: SpecGroups,
    pub subsets: Subsets,
    pub global_flags: GlobalFlags,
    /// Indexed by `CanonicalVersion::DECLARATION_ORDER`: `[V20, V21, V22, V30]`.
    pub versions: [PerVersionData; 4],
    pub default_sl_values: Option<&'static EnumTable>,
    pub nontable_formatter: Option<NonTableFormatter>,
    pub table_formatter: Option<TableFormatter>,
}

impl FeatureEntry {
    pub fn version_slot(&self, version: CanonicalVersion) -> &PerVersionData {
        match version {
            CanonicalVersion::V20 => &self.versions[0],
            CanonicalVersion::V21 => &self.versions[1],
            CanonicalVersion::V22 => &self.versions[2],
            CanonicalVersion::V30 => &self.versions[3],
        }
    }
}

const fn entry(
    code: u8,
    description: &'static str,
    spec_groups: SpecGroups,
    subsets: Subsets,
    versions: [PerVersionData; 4],
) -> FeatureEntry {
    FeatureEntry {
        code,
        description,
        spec_groups,
        subsets,
        global_flags: GlobalFlags::empty(),
        versions,
        default_sl_values: None,
        nontable_formatter: None,
        table_formatter: None,
    }
}

impl FeatureEntry {
    const fn with_default_sl_values(mut self, values: &'static EnumTable) -> Self {
        self.default_sl_values = Some(values);
        self
    }

    const fn with_nontable_formatter(mut self, f: NonTableFormatter) -> Self {
        self.nontable_formatter = Some(f);
        self
    }

    const fn with_table_formatter(mut self, f: TableFormatter) -> Self {
        self.table_formatter = Some(f);
        self
    }
}

// ---- named lookup tables (spec.md §6) --------------------------------

/// 0x60 input source selection.
pub const INPUT_SOURCES: EnumTable = EnumTable::new(&[
    (0x01, "VGA-1"),
    (0x02, "VGA-2"),
    (0x03, "DVI-1"),
    (0x04, "DVI-2"),
    (0x05, "Composite video-1"),
    (0x06, "Composite video-2"),
    (0x07, "S-Video-1"),
    (0x08, "S-Video-2"),
    (0x09, "Tuner-1"),
    (0x0A, "Tuner-2"),
    (0x0B, "Tuner-3"),
    (0x0C, "Component video (YPrPb/YCrCb)-1"),
    (0x0D, "Component video (YPrPb/YCrCb)-2"),
    (0x0E, "Component video (YPrPb/YCrCb)-3"),
    (0x0F, "DisplayPort-1"),
    (0x10, "DisplayPort-2"),
    (0x11, "HDMI-1"),
    (0x12, "HDMI-2"),
]);

/// 0xB6 display technology type.
pub const DISPLAY_TECHNOLOGY_TYPES: EnumTable = EnumTable::new(&[
    (0x01, "CRT (shadow mask)"),
    (0x02, "CRT (aperture grill)"),
    (0x03, "LCD (active matrix)"),
    (0x04, "LCos"),
    (0x05, "Plasma"),
    (0x06, "OLED"),
    (0x07, "EL"),
    (0x08, "MEM"),
]);

/// 0xCC on-screen-display language.
pub const OSD_LANGUAGES: EnumTable = EnumTable::new(&[
    (0x00, "Reserved"),
    (0x01, "Chinese (traditional)"),
    (0x02, "English"),
    (0x03, "French"),
    (0x04, "German"),
    (0x05, "Italian"),
    (0x06, "Japanese"),
    (0x07, "Korean"),
    (0x08, "Portuguese (Portugal)"),
    (0x09, "Russian"),
    (0x0A, "Spanish"),
    (0x0B, "Swedish"),
    (0x0C, "Turkish"),
    (0x0D, "Chinese (simplified)"),
    (0x0E, "Portuguese (Brazil)"),
    (0x0F, "Arabic"),
    (0x10, "Bulgarian"),
    (0x11, "Croatian"),
    (0x12, "Czech"),
    (0x13, "Danish"),
    (0x14, "Dutch"),
    (0x15, "Estonian"),
    (0x16, "Finnish"),
    (0x17, "Greek"),
    (0x18, "Hebrew"),
    (0x19, "Hindi"),
    (0x1A, "Hungarian"),
    (0x1B, "Latvian"),
    (0x1C, "Lithuanian"),
    (0x1D, "Norwegian"),
    (0x1E, "Polish"),
    (0x1F, "Romanian"),
    (0x20, "Serbian"),
    (0x21, "Slovak"),
    (0x22, "Slovenian"),
    (0x23, "Thai"),
    (0x24, "Ukranian"),
    (0x25, "Vietnamese"),
]);

/// 0xD6 power mode.
pub const POWER_MODES: EnumTable = EnumTable::new(&[
    (0x01, "DPM: On, DPMS: Off"),
    (0x02, "DPM: Off, DPMS: Standby"),
    (0x03, "DPM: Off, DPMS: Suspend"),
    (0x04, "DPM: Off, DPMS: Off"),
    (0x05, "Write only value to turn off display"),
]);

const ON_OFF: EnumTable = EnumTable::new(&[(0x00, "Off"), (0x01, "On")]);

const YES_NO: EnumTable = EnumTable::new(&[(0x01, "Yes"), (0x02, "No")]);

const MONO_COLOR: EnumTable = EnumTable::new(&[(0x01, "Color"), (0x02, "Monochrome")]);

const GRAY_SCALE_EXPANSION: EnumTable = EnumTable::new(&[
    (0x01, "No effect"),
    (0x02, "Gray scale expansion 1"),
    (0x03, "Gray scale expansion 2"),
]);

const BACKLIGHT_CONTROL: EnumTable = EnumTable::new(&[
    (0x01, "Manual"),
    (0x02, "Automatic brightness/contrast"),
    (0x03, "Automatic brightness only"),
]);

const AUDIO_JACK_CONNECTION: EnumTable =
    EnumTable::new(&[(0x01, "Not connected"), (0x02, "Connected")]);

const AUDIO_MUTE: EnumTable = EnumTable::new(&[(0x01, "Mute"), (0x02, "Unmute")]);

const DISPLAY_ORIENTATION: EnumTable = EnumTable::new(&[
    (0x01, "Landscape"),
    (0x02, "Portrait (90 degrees clockwise)"),
    (0x03, "Landscape (upside down)"),
    (0x04, "Portrait (90 degrees counterclockwise)"),
]);

const STEREO_VIDEO_MODE: EnumTable = EnumTable::new(&[
    (0x00, "Mono (no stereo)"),
    (0x01, "Stereo hardware mode 1"),
    (0x02, "Stereo hardware mode 2"),
    (0x03, "Stereo software mode"),
]);

const WINDOW_CONTROL_MODE: EnumTable =
    EnumTable::new(&[(0x00, "No effect"), (0x01, "Freeze"), (0x02, "Flash window")]);

/// The complete static table, in declaration order. `list_features`
/// (spec.md §4.3) iterates this slice directly, so its order is this
/// array's order.
pub static FEATURE_TABLE: &[FeatureEntry] = &[
    entry(
        0x01,
        "Degauss",
        SpecGroups::MISCELLANEOUS,
        Subsets::CRT,
        [v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC)],
    ),
    entry(
        0x02,
        "New Control Value",
        SpecGroups::CONTROL,
        Subsets::empty(),
        [v(RW, COMPLEX_NC), v(RW, COMPLEX_NC), v(RW, COMPLEX_NC), v(RW, COMPLEX_NC)],
    )
    .with_nontable_formatter(NonTableFormatter::NewControlValue),
    entry(
        0x03,
        "Soft Controls",
        SpecGroups::CONTROL,
        Subsets::empty(),
        [v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC)],
    ),
    entry(
        0x04,
        "Restore Factory Defaults",
        SpecGroups::CONTROL,
        Subsets::empty(),
        [v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC)],
    ),
    entry(
        0x05,
        "Restore Factory Brightness/Contrast Defaults",
        SpecGroups::IMAGE,
        Subsets::empty(),
        [v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC)],
    ),
    entry(
        0x06,
        "Restore Factory Geometry Defaults",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC)],
    ),
    entry(
        0x08,
        "Restore Color Defaults",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC)],
    ),
    entry(
        0x0A,
        "Restore Factory TV Defaults",
        SpecGroups::IMAGE,
        Subsets::TV,
        [EMPTY, v(WO, WO_NC), v(WO, WO_NC), v(WO, WO_NC)],
    ),
    entry(
        0x0B,
        "Color Temperature Increment",
        SpecGroups::PRESET,
        Subsets::COLOR,
        [v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT)],
    )
    .with_nontable_formatter(NonTableFormatter::ColorTemperatureIncrement),
    entry(
        0x0C,
        "Color Temperature Request",
        SpecGroups::PRESET,
        Subsets::COLOR,
        [v(RW, COMPLEX_CONT), v(RW, COMPLEX_CONT), v(RW, COMPLEX_CONT), v(RW, COMPLEX_CONT)],
    )
    .with_nontable_formatter(NonTableFormatter::ColorTemperatureRequest),
    entry(
        0x0E,
        "Clock",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x10,
        "Brightness",
        SpecGroups::IMAGE,
        Subsets::empty(),
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x12,
        "Contrast",
        SpecGroups::IMAGE,
        Subsets::empty(),
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x13,
        "Backlight Control",
        SpecGroups::IMAGE,
        Subsets::empty(),
        [v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), dep(), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&BACKLIGHT_CONTROL),
    entry(
        0x14,
        "Select Color Preset",
        SpecGroups::PRESET,
        Subsets::COLOR.union(Subsets::PROFILE),
        [v(RW, COMPLEX_NC), v(RW, COMPLEX_NC), v(RW, COMPLEX_NC), v(RW, COMPLEX_NC)],
    )
    .with_nontable_formatter(NonTableFormatter::SelectColorPreset),
    entry(
        0x16,
        "Video Gain (Red)",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x18,
        "Video Gain (Green)",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x1A,
        "Video Gain (Blue)",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x1C,
        "Focus",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x1E,
        "Auto Setup",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [v(RW, SIMPLE_NC), EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&YES_NO),
    entry(
        0x20,
        "Horizontal Position",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x22,
        "Horizontal Size",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x24,
        "Horizontal Pincushion",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x26,
        "Horizontal Pincushion Balance",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x28,
        "Horizontal Convergence R/B",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x2A,
        "Horizontal Linearity",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x30,
        "Vertical Position",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x32,
        "Vertical Size",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x34,
        "Vertical Pincushion",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x38,
        "Vertical Linearity",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x3E,
        "Clock Phase",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x40,
        "Horizontal Parallelogram Distortion",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x42,
        "Horizontal Keystone Distortion",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x44,
        "Rotation",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x46,
        "Top Corner Distortion Control",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x4A,
        "Bottom Corner Distortion Control",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x52,
        "Active Control",
        SpecGroups::CONTROL,
        Subsets::empty(),
        [EMPTY, EMPTY, v(WO, WO_NC), v(WO, WO_NC)],
    ),
    entry(
        0x56,
        "Horizontal Moire",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x58,
        "Vertical Moire",
        SpecGroups::GEOMETRY,
        Subsets::CRT,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x59,
        "6 Axis Saturation Control: Red",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x5A,
        "6 Axis Saturation Control: Yellow",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x5B,
        "6 Axis Saturation Control: Green",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x5C,
        "6 Axis Saturation Control: Cyan",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x5D,
        "6 Axis Saturation Control: Blue",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x5E,
        "6 Axis Saturation Control: Magenta",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x60,
        "Input Source",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&INPUT_SOURCES),
    entry(
        0x62,
        "Audio Speaker Volume",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [
            v(RW, STD_CONT),
            v(RW, STD_CONT),
            v(RW, STD_CONT),
            v(RW, COMPLEX_CONT),
        ],
    )
    .with_nontable_formatter(NonTableFormatter::AudioSpeakerVolumeV30),
    entry(
        0x63,
        "Speaker Select",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&ON_OFF),
    entry(
        0x64,
        "Audio Microphone Volume",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [EMPTY, v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x65,
        "Audio Jack Connection Status",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [EMPTY, v(RO, SIMPLE_NC), v(RO, SIMPLE_NC), v(RO, SIMPLE_NC)],
    )
    .with_default_sl_values(&AUDIO_JACK_CONNECTION),
    entry(
        0x66,
        "Ambient Light Sensor",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&ON_OFF),
    entry(
        0x68,
        "Audio Mute",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&AUDIO_MUTE),
    entry(
        0x6C,
        "Video Black Level (Red)",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x6E,
        "Video Black Level (Green)",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x70,
        "Video Black Level (Blue)",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x73,
        "Lookup Table Size",
        SpecGroups::IMAGE,
        Subsets::LUT,
        [EMPTY, EMPTY, v(RO, TABLE), v(RO, TABLE)],
    )
    .with_table_formatter(TableFormatter::X73LutSize),
    entry(
        0x74,
        "Single Point LUT Operation",
        SpecGroups::IMAGE,
        Subsets::LUT,
        [EMPTY, EMPTY, v(RW, TABLE), v(RW, TABLE)],
    ),
    entry(
        0x75,
        "Block LUT Operation",
        SpecGroups::IMAGE,
        Subsets::LUT,
        [EMPTY, EMPTY, v(WO, WO_TABLE), v(WO, WO_TABLE)],
    ),
    entry(
        0x78,
        "Display Orientation",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [EMPTY, EMPTY, v(RO, SIMPLE_NC), v(RO, SIMPLE_NC)],
    )
    .with_default_sl_values(&DISPLAY_ORIENTATION),
    entry(
        0x82,
        "Horizontal Mirror",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [v(WO, WO_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&ON_OFF),
    entry(
        0x84,
        "Vertical Mirror",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [v(WO, WO_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&ON_OFF),
    entry(
        0x86,
        "Display Scaling",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&YES_NO),
    entry(
        0x8A,
        "Color Saturation",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x8D,
        "Mute Audio / Blank Screen",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [EMPTY, EMPTY, v(RW, COMPLEX_NC), EMPTY],
    )
    .with_nontable_formatter(NonTableFormatter::X8dV22MuteAudioBlankScreen),
    entry(
        0x8F,
        "Audio Treble",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [EMPTY, EMPTY, EMPTY, v(RW, COMPLEX_CONT)],
    )
    .with_nontable_formatter(NonTableFormatter::AudioAxisV30(AxisRole::Treble)),
    entry(
        0x91,
        "Audio Bass",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [EMPTY, EMPTY, EMPTY, v(RW, COMPLEX_CONT)],
    )
    .with_nontable_formatter(NonTableFormatter::AudioAxisV30(AxisRole::Bass)),
    entry(
        0x93,
        "Audio Balance L/R",
        SpecGroups::AUDIO,
        Subsets::AUDIO,
        [EMPTY, EMPTY, EMPTY, v(RW, COMPLEX_CONT)],
    )
    .with_nontable_formatter(NonTableFormatter::AudioAxisV30(AxisRole::Balance)),
    entry(
        0x94,
        "Window Position (Bottom Right Y)",
        SpecGroups::WINDOW,
        Subsets::WINDOW,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x95,
        "Window Position (Top Left X)",
        SpecGroups::WINDOW,
        Subsets::WINDOW,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x96,
        "Window Background",
        SpecGroups::WINDOW,
        Subsets::WINDOW,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x97,
        "Window Position (Top Left Y)",
        SpecGroups::WINDOW,
        Subsets::WINDOW,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x98,
        "Window Select",
        SpecGroups::WINDOW,
        Subsets::WINDOW,
        [EMPTY, EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&EnumTable::new(&[
        (0x00, "Full display image area"),
        (0x01, "Window 1"),
        (0x02, "Window 2"),
    ])),
    entry(
        0x99,
        "Window Position (Bottom Right X)",
        SpecGroups::WINDOW,
        Subsets::WINDOW,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x9A,
        "Window Control On/Off",
        SpecGroups::WINDOW,
        Subsets::WINDOW,
        [EMPTY, EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&WINDOW_CONTROL_MODE),
    entry(
        0x9B,
        "6 Axis Hue Control: Red",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x9C,
        "6 Axis Hue Control: Yellow",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x9D,
        "6 Axis Hue Control: Green",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x9E,
        "6 Axis Hue Control: Cyan",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0x9F,
        "6 Axis Hue Control: Blue",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0xA0,
        "6 Axis Hue Control: Magenta",
        SpecGroups::IMAGE,
        Subsets::COLOR,
        [EMPTY, EMPTY, v(RW, STD_CONT), v(RW, STD_CONT)],
    ),
    entry(
        0xAC,
        "Horizontal Frequency",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT)],
    )
    .with_nontable_formatter(NonTableFormatter::XacHorizontalFrequency),
    entry(
        0xAE,
        "Vertical Frequency",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT), v(RO, COMPLEX_CONT)],
    )
    .with_nontable_formatter(NonTableFormatter::XaeVerticalFrequency),
    entry(
        0xB0,
        "Flat Panel Sub-Pixel Layout",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [EMPTY, v(RO, SIMPLE_NC), v(RO, SIMPLE_NC), v(RO, SIMPLE_NC)],
    )
    .with_default_sl_values(&EnumTable::new(&[
        (0x00, "Sub-pixel layout not defined"),
        (0x01, "Red/Green/Blue vertical stripe"),
        (0x02, "Red/Green/Blue horizontal stripe"),
        (0x03, "Blue/Green/Red vertical stripe"),
        (0x04, "Blue/Green/Red horizontal stripe"),
        (0x05, "Quad pixel, red at top left"),
    ])),
    entry(
        0xB2,
        "Flat Panel Image Scaling",
        SpecGroups::GEOMETRY,
        Subsets::empty(),
        [EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&EnumTable::new(&[
        (0x00, "No scaling"),
        (0x01, "Scaling to full screen image"),
        (0x02, "Scaling to maximum image size with correct aspect ratio"),
    ])),
    entry(
        0xB6,
        "Display Technology Type",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [EMPTY, v(RO, SIMPLE_NC), v(RO, SIMPLE_NC), v(RO, SIMPLE_NC)],
    )
    .with_default_sl_values(&DISPLAY_TECHNOLOGY_TYPES),
    entry(
        0xBE,
        "Link Control",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [EMPTY, EMPTY, EMPTY, v(RW, COMPLEX_NC)],
    )
    .with_nontable_formatter(NonTableFormatter::XbeLinkControl),
    entry(
        0xC0,
        "Display Usage Time",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [
            v(RO, COMPLEX_CONT),
            v(RO, COMPLEX_CONT),
            v(RO, COMPLEX_CONT),
            v(RO, COMPLEX_CONT),
        ],
    )
    .with_nontable_formatter(NonTableFormatter::Xc0DisplayUsageTime),
    entry(
        0xC4,
        "DPVL Dynamic Power Reduction",
        SpecGroups::DPVL,
        Subsets::DPVL,
        [EMPTY, EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&ON_OFF),
    entry(
        0xC6,
        "Application Enable Key",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC)],
    )
    .with_nontable_formatter(NonTableFormatter::ApplicationEnableKey),
    entry(
        0xC8,
        "Display Controller Type",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC)],
    )
    .with_nontable_formatter(NonTableFormatter::DisplayControllerType),
    entry(
        0xC9,
        "Display Firmware Level",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC)],
    )
    .with_nontable_formatter(NonTableFormatter::VersionFormatter),
    entry(
        0xCA,
        "OSD / Button Control",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&EnumTable::new(&[
        (0x01, "OSD Disabled"),
        (0x02, "OSD Enabled"),
    ])),
    entry(
        0xCC,
        "OSD Language",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&OSD_LANGUAGES),
    entry(
        0xCE,
        "Auxiliary Display Size",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC)],
    )
    .with_nontable_formatter(NonTableFormatter::XceAuxDisplaySize),
    entry(
        0xD4,
        "Stereo Video Mode",
        SpecGroups::MISCELLANEOUS.union(SpecGroups::MANUFACTURER_SPECIFIC),
        Subsets::empty(),
        [EMPTY, EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&STEREO_VIDEO_MODE),
    entry(
        0xD6,
        "Power Mode",
        SpecGroups::CONTROL,
        Subsets::empty(),
        [v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&POWER_MODES),
    entry(
        0xD7,
        "Auxiliary Power Output",
        SpecGroups::CONTROL,
        Subsets::empty(),
        [EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&ON_OFF),
    entry(
        0xDA,
        "Scan Mode",
        SpecGroups::GEOMETRY,
        Subsets::TV,
        [EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&EnumTable::new(&[
        (0x00, "Normal operation"),
        (0x01, "Underscan"),
        (0x02, "Overscan"),
    ])),
    entry(
        0xDB,
        "Image Mode",
        SpecGroups::IMAGE,
        Subsets::empty(),
        [EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&MONO_COLOR),
    entry(
        0xDC,
        "Display Mode",
        SpecGroups::PRESET,
        Subsets::empty(),
        [v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&EnumTable::new(&[
        (0x00, "Standard/default mode"),
        (0x01, "Productivity"),
        (0x02, "Mixed"),
        (0x03, "Movie"),
        (0x04, "User-defined"),
        (0x05, "Games"),
        (0x06, "Sports"),
        (0x07, "Professional (e.g. all color calibrated)"),
        (0x08, "Standard/Default with intermediate power consumption"),
        (0x09, "Standard/Default with low power consumption"),
        (0x0A, "Demonstration"),
        (0xF0, "Dynamic contrast"),
    ])),
    entry(
        0xDE,
        "Gray Scale Expansion",
        SpecGroups::IMAGE,
        Subsets::empty(),
        [EMPTY, v(RW, SIMPLE_NC), v(RW, SIMPLE_NC), v(RW, SIMPLE_NC)],
    )
    .with_default_sl_values(&GRAY_SCALE_EXPANSION),
    entry(
        0xDF,
        "VCP Version",
        SpecGroups::MISCELLANEOUS,
        Subsets::empty(),
        [v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC), v(RO, COMPLEX_NC)],
    )
    .with_nontable_formatter(NonTableFormatter::VersionFormatter),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut seen = std::collections::HashSet::new();
        for entry in FEATURE_TABLE {
            assert!(seen.insert(entry.code), "duplicate code 0x{:02x}", entry.code);
        }
    }

    #[test]
    fn table_is_a_dense_decision_table() {
        assert!(FEATURE_TABLE.len() >= 100);
    }
}
