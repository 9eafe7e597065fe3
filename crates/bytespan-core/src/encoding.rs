//! Little-endian byte encodings of unsigned integers.
//!
//! Bytes are ordered least-significant first. Two encodings exist:
//! - **Minimal**: shortest sequence with a non-zero most-significant byte,
//!   except that zero is the single byte `0x00`
//! - **Padded**: every value is widened with most-significant zero bytes to a
//!   fixed width (the width of the compiled upper bound)

use std::ops::Deref;

/// Bytes in the widest supported value (`u64`).
pub const MAX_WIDTH: usize = 8;

/// Encoding policy shared by the compiler and the matcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// No most-significant zero byte, except for zero itself.
    #[default]
    Minimal,
    /// Zero-padded to a fixed width; most-significant zero bytes are valid.
    Padded,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Minimal => "minimal",
            Encoding::Padded => "padded",
        }
    }
}

/// Number of bytes in the minimal encoding of `value`. Zero takes one byte.
#[inline]
pub const fn byte_width(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    if bits == 0 {
        1
    } else {
        bits.div_ceil(8) as usize
    }
}

/// Encoded value held inline, at most `MAX_WIDTH` bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EncodedValue {
    bytes: [u8; MAX_WIDTH],
    len: usize,
}

impl Deref for EncodedValue {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl std::fmt::Debug for EncodedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Encode `value` under `encoding`.
///
/// `width` only matters for `Encoding::Padded`. Returns `None` when the value
/// does not fit in `width` bytes, or when `width` is zero or exceeds
/// `MAX_WIDTH`.
pub fn encode(value: u64, encoding: Encoding, width: usize) -> Option<EncodedValue> {
    let minimal = byte_width(value);
    let len = match encoding {
        Encoding::Minimal => minimal,
        Encoding::Padded => {
            if width == 0 || width > MAX_WIDTH || minimal > width {
                return None;
            }
            width
        }
    };

    Some(EncodedValue {
        bytes: value.to_le_bytes(),
        len,
    })
}
