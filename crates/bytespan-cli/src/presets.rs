//! Built-in interval sets for `reduce --preset`.

use bytespan_core::Interval;

/// A named base set with its exclusions.
pub struct Preset {
    pub name: &'static str,
    pub base: &'static [(u64, u64)],
    pub exclusions: &'static [(u64, u64)],
}

impl Preset {
    pub fn base(&self) -> Vec<Interval> {
        to_intervals(self.base)
    }

    pub fn exclusions(&self) -> Vec<Interval> {
        to_intervals(self.exclusions)
    }
}

fn to_intervals(pairs: &[(u64, u64)]) -> Vec<Interval> {
    pairs
        .iter()
        .filter_map(|&(low, high)| Interval::new(low, high).ok())
        .collect()
}

/// XML 1.0 `Char` minus the compatibility characters.
pub const XML_CHAR: Preset = Preset {
    name: "xml-char",
    base: &[
        (0x000009, 0x000009),
        (0x00000A, 0x00000A),
        (0x00000D, 0x00000D),
        (0x000020, 0x00D7FF),
        (0x00E000, 0x00FFFD),
        (0x010000, 0x10FFFF),
    ],
    exclusions: &[
        (0x00007F, 0x000084),
        (0x000086, 0x00009F),
        (0x00FDD0, 0x00FDEF),
        (0x01FFFE, 0x01FFFF),
        (0x02FFFE, 0x02FFFF),
        (0x03FFFE, 0x03FFFF),
        (0x04FFFE, 0x04FFFF),
        (0x05FFFE, 0x05FFFF),
        (0x06FFFE, 0x06FFFF),
        (0x07FFFE, 0x07FFFF),
        (0x08FFFE, 0x08FFFF),
        (0x09FFFE, 0x09FFFF),
        (0x0AFFFE, 0x0AFFFF),
        (0x0BFFFE, 0x0BFFFF),
        (0x0CFFFE, 0x0CFFFF),
        (0x0DFFFE, 0x0DFFFF),
        (0x0EFFFE, 0x0EFFFF),
        (0x0FFFFE, 0x0FFFFF),
        (0x10FFFE, 0x10FFFF),
    ],
};

pub const ALL: &[Preset] = &[XML_CHAR];

pub fn find(name: &str) -> Option<&'static Preset> {
    ALL.iter().find(|preset| preset.name == name)
}

pub fn names() -> Vec<&'static str> {
    ALL.iter().map(|preset| preset.name).collect()
}
