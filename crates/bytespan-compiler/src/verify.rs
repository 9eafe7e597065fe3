//! Edge partition checks.
//!
//! At every node the outgoing byte ranges must be non-empty, pairwise
//! disjoint and listed in ascending order. `ByteRange` already rules out
//! empty ranges, so only ordering and overlap are checked here.

use crate::node::{ByteRange, Node};

/// Edge partition violation found by `verify_partition`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("edges {first} and {second} overlap at depth {depth}")]
    Overlap {
        depth: usize,
        first: ByteRange,
        second: ByteRange,
    },

    #[error("edge {second} precedes {first} at depth {depth}")]
    Unordered {
        depth: usize,
        first: ByteRange,
        second: ByteRange,
    },
}

/// Check the edge partition invariant for every node reachable from `root`.
pub fn verify_partition(root: &Node) -> Result<(), PartitionError> {
    let mut stack = vec![(root, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        for pair in node.edges().windows(2) {
            let (first, second) = (pair[0].range, pair[1].range);
            if second.low() <= first.high() && first.low() <= second.high() {
                return Err(PartitionError::Overlap {
                    depth,
                    first,
                    second,
                });
            }
            if second.low() < first.low() {
                return Err(PartitionError::Unordered {
                    depth,
                    first,
                    second,
                });
            }
        }
        stack.extend(node.edges().iter().map(|edge| (&*edge.child, depth + 1)));
    }
    Ok(())
}

/// Panics with the violation if the partition invariant is broken.
/// No-op in release builds.
#[cfg(debug_assertions)]
pub(crate) fn debug_verify_partition(root: &Node) {
    if let Err(err) = verify_partition(root) {
        panic!("compiled automaton violates the edge partition: {err}");
    }
}

#[cfg(not(debug_assertions))]
#[inline(always)]
pub(crate) fn debug_verify_partition(_root: &Node) {}
