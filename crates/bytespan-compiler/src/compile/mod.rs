//! Byte-wise range decomposition.
//!
//! Compiles `[a, b]` into a tree that consumes the value's bytes least
//! significant first. Each level peels one byte off both bounds and recurses
//! on the remaining high magnitudes, borrowing or carrying one unit when the
//! low byte leaves the band between `a_low` and `b_low`.
//!
//! # Module Organization
//!
//! - `relation`: the eight byte-level cases
//! - `compiler`: builder, recursion, memoization
//! - `automaton`: the compiled result and inspection helpers

mod automaton;
mod compiler;
mod error;
mod relation;

#[cfg(test)]
mod relation_tests;

pub use automaton::RangeAutomaton;
pub use compiler::{Compiler, CompilerBuilder, compile_range_automaton};
pub use error::{CompileError, CompileResult};
pub use relation::Relation;
