//! bytespan compiler: interval to byte-range automaton.
//!
//! This crate turns an inclusive integer interval into a tree of nodes whose
//! edges are byte sub-ranges:
//! - `node` - automaton nodes, edges and byte ranges
//! - `compile` - the byte-wise range decomposition
//! - `verify` - edge partition checks
//! - `dump` - text and Graphviz renderings
//! - `trace` - compile-time instrumentation

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod dump;
pub mod node;
pub mod trace;
pub mod verify;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod trace_tests;
#[cfg(test)]
mod verify_tests;

pub use bytespan_core::Encoding;
pub use compile::{
    CompileError, CompileResult, Compiler, CompilerBuilder, RangeAutomaton, Relation,
    compile_range_automaton,
};
pub use dump::{dump, dump_dot};
pub use node::{ByteRange, Edge, Node};
pub use trace::{NoopTracer, PrintTracer, Tracer};
pub use verify::{PartitionError, verify_partition};
