//! Matching engine.
//!
//! The automaton is deterministic: edges at a node are disjoint, so a match
//! is a single pass over the encoded bytes with no backtracking.

mod matcher;
mod trace;


pub use matcher::{Matcher, match_range_automaton};
pub use trace::{NoopTracer, PrintTracer, Tracer};
