//! Compiled automaton and its inspection helpers.

use std::collections::HashSet;
use std::rc::Rc;

use bytespan_core::{Encoding, Interval};

use crate::node::Node;

/// Result of compiling one interval.
///
/// Holds the root node together with the encoding the tree was built for,
/// since the matcher must encode candidate values the same way.
#[derive(Clone, Debug)]
pub struct RangeAutomaton {
    root: Rc<Node>,
    interval: Interval,
    encoding: Encoding,
    width: usize,
}

impl RangeAutomaton {
    pub(crate) fn new(root: Rc<Node>, interval: Interval, encoding: Encoding, width: usize) -> Self {
        Self {
            root,
            interval,
            encoding,
            width,
        }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Byte width of the upper bound. Padded encodings use exactly this many bytes.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Longest path from the root, in edges.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            node.edges()
                .iter()
                .map(|edge| 1 + walk(&edge.child))
                .max()
                .unwrap_or(0)
        }
        walk(&self.root)
    }

    /// Number of distinct nodes. Shared subtrees are counted once.
    pub fn node_count(&self) -> usize {
        let mut seen = HashSet::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if !seen.insert(Rc::as_ptr(node)) {
                continue;
            }
            stack.extend(node.edges().iter().map(|edge| &edge.child));
        }
        seen.len()
    }
}
