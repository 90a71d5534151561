/// A finite `byte -> name` mapping, used by `SIMPLE_NC` features and by the
/// named lookup tables in spec.md §6 (input sources, controller types,
/// OSD languages, power modes, ...).
///
/// Backed by an ordered slice with an explicit length rather than a
/// sentinel-terminated array — `0x00` is a legal value in several of these
/// tables, so a `{0x00, null}` terminator (as the C original uses) would be
/// ambiguous with a real entry.
#[derive(Debug, Clone, Copy)]
pub struct EnumTable(pub &'static [(u8, &'static str)]);

impl EnumTable {
    pub const fn new(entries: &'static [(u8, &'static str)]) -> Self {
        EnumTable(entries)
    }

    pub fn lookup(&self, byte: u8) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(code, _)| *code == byte)
            .map(|(_, name)| *name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_a_zero_byte_value() {
        const T: EnumTable = EnumTable::new(&[(0x00, "zero"), (0x01, "one")]);
        assert_eq!(T.lookup(0x00), Some("zero"));
        assert_eq!(T.lookup(0x02), None);
    }

    #[test]
    fn byte_values_need_not_be_unique_across_tables() {
        // feature 0x14 reuses the same SL byte range for two different
        // meanings across versions; EnumTable itself has no opinion on
        // that, it's just a mapping.
        const ABS: EnumTable = EnumTable::new(&[(0x05, "6500 K")]);
        const REL: EnumTable = EnumTable::new(&[(0x05, "-2 relative warmer")]);
        assert_eq!(ABS.lookup(0x05), Some("6500 K"));
        assert_eq!(REL.lookup(0x05), Some("-2 relative warmer"));
    }
}
