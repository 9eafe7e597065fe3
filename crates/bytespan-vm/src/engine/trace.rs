//! Tracing infrastructure for debugging matches.
//!
//! Same shape as the compile-time tracer: `NoopTracer` methods are empty and
//! inlined away, `PrintTracer` collects lines for display.

use bytespan_compiler::ByteRange;
use bytespan_core::Colors;

/// Hooks called while a value is matched.
pub trait Tracer {
    /// Called once the value has been encoded.
    fn trace_encoded(&mut self, value: u64, bytes: &[u8]);

    /// Called when a padded encoding cannot hold the value.
    fn trace_unencodable(&mut self, value: u64, width: usize);

    /// Called after `byte` at position `depth` selected an edge.
    fn trace_step(&mut self, depth: usize, byte: u8, range: ByteRange);

    /// Called when no edge contains `byte`.
    fn trace_no_edge(&mut self, depth: usize, byte: u8);

    /// Called after the last byte with the final node's accept flag.
    fn trace_end(&mut self, depth: usize, accept: bool);
}

pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_encoded(&mut self, _value: u64, _bytes: &[u8]) {}

    #[inline(always)]
    fn trace_unencodable(&mut self, _value: u64, _width: usize) {}

    #[inline(always)]
    fn trace_step(&mut self, _depth: usize, _byte: u8, _range: ByteRange) {}

    #[inline(always)]
    fn trace_no_edge(&mut self, _depth: usize, _byte: u8) {}

    #[inline(always)]
    fn trace_end(&mut self, _depth: usize, _accept: bool) {}
}

/// Tracer that collects the walk as text.
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

    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn push(&mut self, depth: usize, body: String) {
        self.lines.push(format!("{}{body}", "  ".repeat(depth)));
    }
}

impl Tracer for PrintTracer {
    fn trace_encoded(&mut self, value: u64, bytes: &[u8]) {
        let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
        let c = self.colors;
        self.push(0, format!("{value:#x} {}", c.paint(c.dim, format!("[{}]", hex.join(" ")))));
    }

    fn trace_unencodable(&mut self, value: u64, width: usize) {
        let c = self.colors;
        self.push(
            0,
            format!("{value:#x} {}", c.paint(c.red, format!("does not fit in {width} bytes"))),
        );
    }

    fn trace_step(&mut self, depth: usize, byte: u8, range: ByteRange) {
        let c = self.colors;
        self.push(depth + 1, format!("{byte:02x} in {}", c.paint(c.blue, range)));
    }

    fn trace_no_edge(&mut self, depth: usize, byte: u8) {
        let c = self.colors;
        self.push(depth + 1, format!("{byte:02x} {}", c.paint(c.red, "no edge")));
    }

    fn trace_end(&mut self, depth: usize, accept: bool) {
        let c = self.colors;
        let verdict = if accept {
            c.paint(c.green, "accept")
        } else {
            c.paint(c.red, "reject")
        };
        self.push(depth + 1, verdict);
    }
}
