//! Walks a compiled automaton against an encoded value.

use bytespan_compiler::{Node, RangeAutomaton};
use bytespan_core::encode;

use super::trace::{NoopTracer, Tracer};

/// Runs values through one automaton.
pub struct Matcher<'a, T: Tracer = NoopTracer> {
    automaton: &'a RangeAutomaton,
    tracer: T,
}

impl<'a> Matcher<'a> {
    pub fn new(automaton: &'a RangeAutomaton) -> Self {
        Self {
            automaton,
            tracer: NoopTracer,
        }
    }
}

impl<'a, T: Tracer> Matcher<'a, T> {
    pub fn with_tracer(automaton: &'a RangeAutomaton, tracer: T) -> Self {
        Self { automaton, tracer }
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// True if `value` lies in the compiled interval.
    ///
    /// The value is encoded with the automaton's encoding. Under
    /// `Encoding::Padded` a value wider than the automaton is rejected
    /// without walking.
    pub fn matches(&mut self, value: u64) -> bool {
        let automaton = self.automaton;
        let Some(bytes) = encode(value, automaton.encoding(), automaton.width()) else {
            self.tracer.trace_unencodable(value, automaton.width());
            return false;
        };
        self.tracer.trace_encoded(value, &bytes);
        self.matches_bytes(&bytes)
    }

    /// True if the automaton accepts exactly this byte sequence.
    ///
    /// Bytes are least significant first. Accepts only canonical encodings:
    /// a trailing zero byte under `Encoding::Minimal` is rejected even when
    /// the value it decodes to is in range.
    pub fn matches_bytes(&mut self, bytes: &[u8]) -> bool {
        let automaton = self.automaton;
        let mut node: &Node = automaton.root();
        for (depth, &byte) in bytes.iter().enumerate() {
            let Some(edge) = node.find_edge(byte) else {
                self.tracer.trace_no_edge(depth, byte);
                return false;
            };
            self.tracer.trace_step(depth, byte, edge.range);
            node = &edge.child;
        }

        self.tracer.trace_end(bytes.len(), node.accept());
        node.accept()
    }
}

/// Match `value` against `automaton` without tracing.
pub fn match_range_automaton(automaton: &RangeAutomaton, value: u64) -> bool {
    Matcher::new(automaton).matches(value)
}
