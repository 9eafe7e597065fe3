//! Compile-time instrumentation.
//!
//! `Compiler` reports every recursion step to a `Tracer`. With `NoopTracer`
//! all calls are empty `#[inline(always)]` functions and vanish from the
//! build; `PrintTracer` turns them into indented lines for `--trace` output.

use bytespan_core::Colors;

use crate::compile::Relation;
use crate::node::ByteRange;

/// Hooks called while the automaton is built.
///
/// - `trace_enter` - a node for `[low, high]` is about to be built
/// - `trace_relation` - the byte-level case chosen for that node
/// - `trace_edge` - an edge whose child covers `[child_low, child_high]`
/// - `trace_leaf` - an edge straight to an accepting leaf
/// - `trace_memo_hit` - a cached subtree was reused
pub trait Tracer {
    fn trace_enter(&mut self, depth: usize, low: u64, high: u64, accept: bool);

    fn trace_relation(&mut self, depth: usize, relation: Relation);

    fn trace_edge(&mut self, depth: usize, range: ByteRange, child_low: u64, child_high: u64);

    fn trace_leaf(&mut self, depth: usize, range: ByteRange);

    fn trace_memo_hit(&mut self, depth: usize, low: u64, high: u64);
}

/// Tracer that compiles away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _depth: usize, _low: u64, _high: u64, _accept: bool) {}

    #[inline(always)]
    fn trace_relation(&mut self, _depth: usize, _relation: Relation) {}

    #[inline(always)]
    fn trace_edge(&mut self, _depth: usize, _range: ByteRange, _child_low: u64, _child_high: u64) {}

    #[inline(always)]
    fn trace_leaf(&mut self, _depth: usize, _range: ByteRange) {}

    #[inline(always)]
    fn trace_memo_hit(&mut self, _depth: usize, _low: u64, _high: u64) {}
}

/// Tracer that collects one line per event.
pub struct PrintTracer {
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write collected lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn push(&mut self, depth: usize, body: String) {
        self.lines.push(format!("{}{body}", "  ".repeat(depth)));
    }

    fn bounds(&self, low: u64, high: u64) -> String {
        let c = &self.colors;
        format!("{}[{low:#x}, {high:#x}]{}", c.dim, c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, depth: usize, low: u64, high: u64, accept: bool) {
        let c = self.colors;
        let mut line = format!("enter {}", self.bounds(low, high));
        if accept {
            line.push(' ');
            line.push_str(&c.paint(c.green, "Acc"));
        }
        self.push(depth, line);
    }

    fn trace_relation(&mut self, depth: usize, relation: Relation) {
        let c = self.colors;
        self.push(depth + 1, format!("case {}", c.paint(c.dim, relation.name())));
    }

    fn trace_edge(&mut self, depth: usize, range: ByteRange, child_low: u64, child_high: u64) {
        let c = self.colors;
        let line = format!(
            "{} -> {}",
            c.paint(c.blue, range),
            self.bounds(child_low, child_high)
        );
        self.push(depth + 1, line);
    }

    fn trace_leaf(&mut self, depth: usize, range: ByteRange) {
        let c = self.colors;
        let line = format!("{} -> {}", c.paint(c.blue, range), c.paint(c.green, "Acc"));
        self.push(depth + 1, line);
    }

    fn trace_memo_hit(&mut self, depth: usize, low: u64, high: u64) {
        let line = format!("reuse {}", self.bounds(low, high));
        self.push(depth, line);
    }
}
