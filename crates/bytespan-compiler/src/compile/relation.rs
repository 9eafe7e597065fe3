//! Classification of one byte level of the interval.
//!
//! With `a = a_high * 256 + a_low` and `b = b_high * 256 + b_low`, the
//! relation between the four parts decides how the low byte is split into
//! edges. Picture rows as high magnitudes and columns as low bytes:
//!
//! ```text
//! SingleByte   SameHigh     FullSpan     LowAtStart
//! . . . . .    . . . . .    . . . . .    . . . . .
//! . . . . .    . a-->b .    ------->b    --->b . .
//! . a-->b .    . . . . .    a------->    a------->
//!
//! HighAtEnd    Overlapping  WideGap      NarrowGap
//! . . . . .    ----->b .    ->b . . .    . . . . .
//! ------->b    -------->    -------->    ->b . . .
//! . . a--->    . a----->    . . . a->    . . a--->
//! ```

/// How `[a, b]` looks at the current byte.
///
/// Variants are listed in the order they are tested; each one assumes all
/// earlier ones did not apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `b_high == 0`: the rest of the interval fits in this byte.
    SingleByte,
    /// `a_high == b_high`: one band of low bytes, same high magnitude.
    SameHigh,
    /// `a_low == 0x00 && b_low == 0xFF`: every low byte, whole high range.
    FullSpan,
    /// `a_low == 0x00`: low bytes above `b_low` borrow from `b_high`.
    LowAtStart,
    /// `b_low == 0xFF`: low bytes below `a_low` carry into `a_high`.
    HighAtEnd,
    /// `b_low >= a_low`: three bands, middle one keeps both bounds.
    Overlapping,
    /// `b_high > a_high + 1 && b_low < a_low - 1`: three bands around a gap.
    WideGap,
    /// Fallback: two bands, the gap between them holds no values.
    NarrowGap,
}

impl Relation {
    pub fn classify(a_low: u8, a_high: u64, b_low: u8, b_high: u64) -> Self {
        if b_high == 0 {
            Relation::SingleByte
        } else if a_high == b_high {
            Relation::SameHigh
        } else if a_low == 0x00 && b_low == 0xFF {
            Relation::FullSpan
        } else if a_low == 0x00 {
            Relation::LowAtStart
        } else if b_low == 0xFF {
            Relation::HighAtEnd
        } else if b_low >= a_low {
            Relation::Overlapping
        } else if b_high > a_high + 1 && b_low < a_low - 1 {
            // a_low > b_low >= 0 here, so a_low - 1 cannot underflow.
            Relation::WideGap
        } else {
            Relation::NarrowGap
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Relation::SingleByte => "single-byte",
            Relation::SameHigh => "same-high",
            Relation::FullSpan => "full-span",
            Relation::LowAtStart => "low-at-start",
            Relation::HighAtEnd => "high-at-end",
            Relation::Overlapping => "overlapping",
            Relation::WideGap => "wide-gap",
            Relation::NarrowGap => "narrow-gap",
        }
    }
}
