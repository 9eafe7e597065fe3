use bytespan_core::{Colors, Encoding};

use crate::test_utils::compile_with;
use crate::{dump, dump_dot};

#[test]
fn dot_tree() {
    let automaton = compile_with(0, 0x1FF, Encoding::Minimal, false);
    insta::assert_snapshot!(dump_dot(&automaton), @r#"
    digraph automaton {
      node0 [label=""];
      node1 [label="Acc"];
      node2 [label="Acc"];
      node1 -> node2 [label="01"];
      node0 -> node1 [label="00..ff"];
    }
    "#);
}

#[test]
fn dot_emits_shared_nodes_once() {
    let automaton = compile_with(1, 0xFFFFFF, Encoding::Minimal, true);
    insta::assert_snapshot!(dump_dot(&automaton), @r#"
    digraph automaton {
      node0 [label=""];
      node1 [label=""];
      node2 [label=""];
      node3 [label="Acc"];
      node2 -> node3 [label="01..ff"];
      node1 -> node2 [label="00"];
      node4 [label="Acc"];
      node5 [label="Acc"];
      node4 -> node5 [label="01..ff"];
      node1 -> node4 [label="01..ff"];
      node0 -> node1 [label="00"];
      node6 [label="Acc"];
      node6 -> node2 [label="00"];
      node6 -> node4 [label="01..ff"];
      node0 -> node6 [label="01..ff"];
    }
    "#);
}

#[test]
fn text_tree_repeats_shared_nodes() {
    let automaton = compile_with(1, 0xFFFFFF, Encoding::Minimal, true);
    insta::assert_snapshot!(dump(&automaton, Colors::OFF), @r"
    [0x1, 0xffffff] minimal
    root
      00
        00
          01..ff Acc
        01..ff Acc
          01..ff Acc
      01..ff Acc
        00
          01..ff Acc
        01..ff Acc
          01..ff Acc
    ");
}

#[test]
fn colored_dump_wraps_ranges() {
    let automaton = compile_with(0, 0, Encoding::Minimal, false);
    let out = dump(&automaton, Colors::ON);
    assert!(out.contains("\x1b[34m00\x1b[0m"));
    assert!(out.contains("\x1b[32mAcc\x1b[0m"));
}
