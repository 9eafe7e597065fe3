//! Core compiler state and entry points.

use std::collections::HashMap;
use std::rc::Rc;

use bytespan_core::{Encoding, Interval, byte_width};

use crate::node::{ByteRange, Node};
use crate::trace::{NoopTracer, Tracer};
use crate::verify::debug_verify_partition;

use super::automaton::RangeAutomaton;
use super::error::CompileResult;
use super::relation::Relation;

/// Memo key: interval bounds plus the depth, which only matters for padded
/// encodings (always 0 otherwise).
type MemoKey = (u64, u64, usize);

/// Compiler state for byte-wise range decomposition.
pub struct Compiler<T: Tracer = NoopTracer> {
    encoding: Encoding,
    /// Subtree cache. `None` when memoization is off.
    memo: Option<HashMap<MemoKey, Rc<Node>>>,
    /// Width of the current upper bound, fixed per `compile` call.
    width: usize,
    tracer: T,
}

/// Builder for `Compiler`.
pub struct CompilerBuilder<T: Tracer = NoopTracer> {
    encoding: Encoding,
    memoize: bool,
    tracer: T,
}

impl Default for CompilerBuilder<NoopTracer> {
    fn default() -> Self {
        Self {
            encoding: Encoding::Minimal,
            memoize: false,
            tracer: NoopTracer,
        }
    }
}

impl<T: Tracer> CompilerBuilder<T> {
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Share identical subtrees instead of building them again.
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Replace the tracer.
    pub fn tracer<U: Tracer>(self, tracer: U) -> CompilerBuilder<U> {
        CompilerBuilder {
            encoding: self.encoding,
            memoize: self.memoize,
            tracer,
        }
    }

    pub fn build(self) -> Compiler<T> {
        Compiler {
            encoding: self.encoding,
            memo: self.memoize.then(HashMap::new),
            width: 0,
            tracer: self.tracer,
        }
    }
}

impl Compiler<NoopTracer> {
    pub fn builder() -> CompilerBuilder<NoopTracer> {
        CompilerBuilder::default()
    }
}

impl Default for Compiler<NoopTracer> {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Compile `[low, high]` with the default options.
pub fn compile_range_automaton(low: u64, high: u64) -> CompileResult<RangeAutomaton> {
    Compiler::default().compile(low, high)
}

impl<T: Tracer> Compiler<T> {
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Compile `[low, high]`.
    ///
    /// Fails with `CompileError::InvalidRange` if `low > high`.
    pub fn compile(&mut self, low: u64, high: u64) -> CompileResult<RangeAutomaton> {
        let interval = Interval::new(low, high)?;
        Ok(self.compile_interval(interval))
    }

    /// Compile an already validated interval. Never fails.
    pub fn compile_interval(&mut self, interval: Interval) -> RangeAutomaton {
        self.width = byte_width(interval.high());
        if let Some(memo) = &mut self.memo {
            memo.clear();
        }

        let root = self.build(interval.low(), interval.high(), true, 0);
        debug_verify_partition(&root);

        RangeAutomaton::new(root, interval, self.encoding, self.width)
    }

    fn memo_key(&self, a: u64, b: u64, depth: usize) -> MemoKey {
        match self.encoding {
            Encoding::Minimal => (a, b, 0),
            Encoding::Padded => (a, b, depth),
        }
    }

    /// Build the node consuming byte number `depth` for values in `[a, b]`.
    fn build(&mut self, a: u64, b: u64, is_root: bool, depth: usize) -> Rc<Node> {
        let key = self.memo_key(a, b, depth);
        if !is_root && let Some(node) = self.memo.as_ref().and_then(|memo| memo.get(&key)) {
            let node = Rc::clone(node);
            self.tracer.trace_memo_hit(depth, a, b);
            return node;
        }

        let node = Rc::new(self.build_uncached(a, b, is_root, depth));

        if !is_root && let Some(memo) = &mut self.memo {
            memo.insert(key, Rc::clone(&node));
        }
        node
    }

    fn build_uncached(&mut self, a: u64, b: u64, is_root: bool, depth: usize) -> Node {
        // The root never accepts: the empty byte sequence encodes nothing.
        // Zero is the single byte 0x00, consumed one level below the root.
        let accept = !is_root
            && match self.encoding {
                Encoding::Minimal => a == 0,
                Encoding::Padded => depth == self.width,
            };
        self.tracer.trace_enter(depth, a, b, accept);

        let mut node = Node::new(accept);
        if self.encoding == Encoding::Padded && accept {
            return node;
        }

        let (mut a_low, a_high) = split(a);
        let (b_low, b_high) = split(b);

        // Minimal encodings forbid a most-significant zero byte. Zero itself is
        // already covered by the accept flag, so edges start at 0x01.
        if accept {
            a_low += 1;
        }

        let relation = Relation::classify(a_low, a_high, b_low, b_high);
        self.tracer.trace_relation(depth, relation);

        match relation {
            Relation::SingleByte => {
                // a == b == 0 below the root leaves nothing after the bump.
                if let Some(range) = ByteRange::try_new(a_low, b_low) {
                    let child = self.single_byte_child(depth, range);
                    node.push_edge(range, child);
                }
            }
            Relation::SameHigh => {
                self.edge(&mut node, depth, (a_low, b_low), (a_high, b_high));
            }
            Relation::FullSpan => {
                self.edge(&mut node, depth, (0x00, 0xFF), (a_high, b_high));
            }
            Relation::LowAtStart => {
                self.edge(&mut node, depth, (0x00, b_low), (a_high, b_high));
                self.edge(&mut node, depth, (b_low + 1, 0xFF), (a_high, b_high - 1));
            }
            Relation::HighAtEnd => {
                self.edge(&mut node, depth, (0x00, a_low - 1), (a_high + 1, b_high));
                self.edge(&mut node, depth, (a_low, 0xFF), (a_high, b_high));
            }
            Relation::Overlapping => {
                self.edge(&mut node, depth, (0x00, a_low - 1), (a_high + 1, b_high));
                self.edge(&mut node, depth, (a_low, b_low), (a_high, b_high));
                self.edge(&mut node, depth, (b_low + 1, 0xFF), (a_high, b_high - 1));
            }
            Relation::WideGap => {
                self.edge(&mut node, depth, (0x00, b_low), (a_high + 1, b_high));
                self.edge(&mut node, depth, (b_low + 1, a_low - 1), (a_high + 1, b_high - 1));
                self.edge(&mut node, depth, (a_low, 0xFF), (a_high, b_high - 1));
            }
            Relation::NarrowGap => {
                self.edge(&mut node, depth, (0x00, b_low), (a_high + 1, b_high));
                self.edge(&mut node, depth, (a_low, 0xFF), (a_high, b_high - 1));
            }
        }

        node
    }

    /// Child of a `SingleByte` edge: the value ends here. Padded encodings
    /// still owe zero bytes up to the fixed width.
    fn single_byte_child(&mut self, depth: usize, range: ByteRange) -> Rc<Node> {
        match self.encoding {
            Encoding::Minimal => {
                self.tracer.trace_leaf(depth, range);
                Rc::new(Node::leaf())
            }
            Encoding::Padded => {
                self.tracer.trace_edge(depth, range, 0, 0);
                self.build(0, 0, false, depth + 1)
            }
        }
    }

    fn edge(&mut self, node: &mut Node, depth: usize, bytes: (u8, u8), child: (u64, u64)) {
        let range = ByteRange::new(bytes.0, bytes.1);
        let (child_low, child_high) = child;
        self.tracer.trace_edge(depth, range, child_low, child_high);
        let child = self.build(child_low, child_high, false, depth + 1);
        node.push_edge(range, child);
    }
}

/// Split into (least significant byte, remaining magnitude).
#[inline]
fn split(value: u64) -> (u8, u64) {
    ((value & 0xFF) as u8, value >> 8)
}
