#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for bytespan.
//!
//! Two independent pieces live here:
//! - **Interval algebra**: `Interval`, pairwise `difference`, and
//!   `reduce_intervals` for folding exclusion lists into a base set
//! - **Byte encodings**: the little-endian value encodings shared by the
//!   automaton compiler and the matcher
//!
//! Plus the `Colors` palette used by every human-readable dump and trace.

mod colors;
mod encoding;
mod interval;
mod reduce;


pub use colors::Colors;
pub use encoding::{EncodedValue, Encoding, MAX_WIDTH, byte_width, encode};
pub use interval::{Interval, IntervalError, difference};
pub use reduce::reduce_intervals;
