use std::rc::Rc;

use crate::node::{ByteRange, Node};
use crate::{PartitionError, verify_partition};

fn node_with(ranges: &[(u8, u8)]) -> Node {
    let mut node = Node::new(false);
    for &(low, high) in ranges {
        node.push_edge(ByteRange::new(low, high), Rc::new(Node::leaf()));
    }
    node
}

#[test]
fn disjoint_ascending_edges_pass() {
    assert_eq!(verify_partition(&node_with(&[(0, 9), (10, 20), (30, 255)])), Ok(()));
    assert_eq!(verify_partition(&Node::leaf()), Ok(()));
}

#[test]
fn overlap_is_reported() {
    let err = verify_partition(&node_with(&[(0, 10), (10, 20)])).unwrap_err();
    assert_eq!(
        err,
        PartitionError::Overlap {
            depth: 0,
            first: ByteRange::new(0, 10),
            second: ByteRange::new(10, 20),
        }
    );
    assert_eq!(err.to_string(), "edges 00..0a and 0a..14 overlap at depth 0");
}

#[test]
fn descending_order_is_reported() {
    let err = verify_partition(&node_with(&[(10, 20), (0, 5)])).unwrap_err();
    assert!(matches!(err, PartitionError::Unordered { depth: 0, .. }));
}

#[test]
fn nested_violation_reports_depth() {
    let mut root = Node::new(false);
    root.push_edge(ByteRange::FULL, Rc::new(node_with(&[(5, 6), (6, 7)])));
    let err = verify_partition(&root).unwrap_err();
    assert!(matches!(err, PartitionError::Overlap { depth: 1, .. }));
}
