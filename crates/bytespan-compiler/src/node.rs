//! Automaton nodes.
//!
//! Each node consumes one byte of the encoded value. Outgoing edges carry
//! disjoint byte ranges in ascending order; the accept flag says whether the
//! byte sequence may end at this node.

use std::fmt;
use std::rc::Rc;

/// Non-empty inclusive range of byte values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ByteRange {
    low: u8,
    high: u8,
}

impl ByteRange {
    /// Every byte value.
    pub const FULL: Self = Self {
        low: 0x00,
        high: 0xFF,
    };

    /// # Panics
    /// Panics if `low > high`.
    pub const fn new(low: u8, high: u8) -> Self {
        assert!(low <= high, "ByteRange: low must not exceed high");
        Self { low, high }
    }

    /// Returns `None` instead of panicking on an empty range.
    pub const fn try_new(low: u8, high: u8) -> Option<Self> {
        if low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }

    #[inline]
    pub const fn low(&self) -> u8 {
        self.low
    }

    #[inline]
    pub const fn high(&self) -> u8 {
        self.high
    }

    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.low <= byte && byte <= self.high
    }

    #[inline]
    pub const fn is_single(&self) -> bool {
        self.low == self.high
    }
}

/// Lower-case hex: `2a` for a single byte, `00..ff` for a span.
impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{:02x}", self.low)
        } else {
            write!(f, "{:02x}..{:02x}", self.low, self.high)
        }
    }
}

/// Byte range leading to a child node.
#[derive(Clone, Debug)]
pub struct Edge {
    pub range: ByteRange,
    pub child: Rc<Node>,
}

#[derive(Clone, Debug, Default)]
pub struct Node {
    accept: bool,
    edges: Vec<Edge>,
}

impl Node {
    pub fn new(accept: bool) -> Self {
        Self {
            accept,
            edges: Vec::new(),
        }
    }

    /// Accepting node without edges.
    pub fn leaf() -> Self {
        Self::new(true)
    }

    #[inline]
    pub fn accept(&self) -> bool {
        self.accept
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge whose range contains `byte`.
    pub fn find_edge(&self, byte: u8) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.range.contains(byte))
    }

    pub(crate) fn push_edge(&mut self, range: ByteRange, child: Rc<Node>) {
        self.edges.push(Edge { range, child });
    }
}
