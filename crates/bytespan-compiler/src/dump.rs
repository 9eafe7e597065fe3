//! Human-readable automaton renderings.
//!
//! `dump` prints an indented tree, one line per edge:
//!
//! ```text
//! [0x0, 0x1ff] minimal
//! root
//!   00..ff Acc
//!     01 Acc
//! ```
//!
//! `dump_dot` emits Graphviz DOT. Shared subtrees (memoized compilation)
//! appear once in DOT output but are repeated in the text tree.

use std::collections::HashMap;
use std::fmt::Write as _;

use bytespan_core::Colors;

use crate::compile::RangeAutomaton;
use crate::node::Node;

pub fn dump(automaton: &RangeAutomaton, colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();

    writeln!(
        out,
        "{}{} {}{}",
        c.dim,
        automaton.interval(),
        automaton.encoding().name(),
        c.reset
    )
    .unwrap();
    out.push_str("root\n");
    dump_edges(&mut out, automaton.root(), 1, c);

    out
}

fn dump_edges(out: &mut String, node: &Node, depth: usize, c: &Colors) {
    for edge in node.edges() {
        write!(out, "{}{}", "  ".repeat(depth), c.paint(c.blue, edge.range)).unwrap();
        if edge.child.accept() {
            write!(out, " {}", c.paint(c.green, "Acc")).unwrap();
        }
        out.push('\n');
        dump_edges(out, &edge.child, depth + 1, c);
    }
}

pub fn dump_dot(automaton: &RangeAutomaton) -> String {
    let mut out = String::from("digraph automaton {\n");
    let mut ids = HashMap::new();
    dot_node(&mut out, automaton.root(), &mut ids);
    out.push_str("}\n");
    out
}

/// Emit `node` (and everything below it) unless already emitted; returns its id.
fn dot_node(out: &mut String, node: &Node, ids: &mut HashMap<*const Node, usize>) -> usize {
    let key = node as *const Node;
    if let Some(&id) = ids.get(&key) {
        return id;
    }

    let id = ids.len();
    ids.insert(key, id);
    let label = if node.accept() { "Acc" } else { "" };
    writeln!(out, "  node{id} [label=\"{label}\"];").unwrap();

    for edge in node.edges() {
        let child_id = dot_node(out, &edge.child, ids);
        writeln!(out, "  node{id} -> node{child_id} [label=\"{}\"];", edge.range).unwrap();
    }

    id
}
