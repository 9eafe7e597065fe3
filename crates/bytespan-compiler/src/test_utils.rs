//! Test helpers.

use bytespan_core::{Colors, Encoding};

use crate::{Compiler, PrintTracer, RangeAutomaton, dump};

pub fn compile_with(low: u64, high: u64, encoding: Encoding, memoize: bool) -> RangeAutomaton {
    Compiler::builder()
        .encoding(encoding)
        .memoize(memoize)
        .build()
        .compile(low, high)
        .unwrap()
}

/// Uncolored text dump.
pub fn dump_plain(low: u64, high: u64, encoding: Encoding) -> String {
    dump(&compile_with(low, high, encoding, false), Colors::OFF)
}

/// Uncolored compile trace, one event per line.
pub fn trace_plain(low: u64, high: u64, encoding: Encoding, memoize: bool) -> String {
    let mut compiler = Compiler::builder()
        .encoding(encoding)
        .memoize(memoize)
        .tracer(PrintTracer::new(Colors::OFF))
        .build();
    compiler.compile(low, high).unwrap();
    compiler.into_tracer().lines().join("\n")
}
