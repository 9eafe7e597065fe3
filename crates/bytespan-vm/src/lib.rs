//! Matcher for compiled bytespan automata.
//!
//! Encodes a candidate value the way its automaton was compiled and walks
//! the tree one byte per level.

pub mod engine;

pub use engine::{Matcher, NoopTracer, PrintTracer, Tracer, match_range_automaton};
