//! Graphviz dump of a finished tree. Node identity is the arena index, leaf
//! labels are the 1-based suffix offsets, edge labels are the text labels
//! with the sentinel rendered as '$'.

use std::io::{self, Write};

use crate::text::SENTINEL;
use crate::tree::SuffixTree;

pub fn write_dot<W: Write>(tree: &SuffixTree, mut out: W) -> io::Result<()> {
    writeln!(out, "digraph suffixtree {{")?;

    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        let label = match tree.suffix_offset(node) {
            Some(off) => off.to_string(),
            None => String::new(),
        };
        writeln!(out, "\tn{} [label=\"{}\", shape=\"ellipse\"]", node.index(), label)?;
        stack.extend(tree.out_edges(node).map(|e| tree.edge_ends(e).1));
    }

    writeln!(out)?;

    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        for e in tree.out_edges(node) {
            let (from, to) = tree.edge_ends(e);
            writeln!(
                out,
                "\tn{} -> n{} [label=\" {}\"]",
                from.index(),
                to.index(),
                printable(tree.edge_label(e)),
            )?;
            stack.push(to);
        }
    }

    writeln!(out, "}}")
}

fn printable(label: &[u8]) -> String {
    label
        .iter()
        .map(|&b| match b {
            SENTINEL => '$',
            b'"' | b'\\' => '.',
            b if b.is_ascii_graphic() || b == b' ' => b as char,
            _ => '.',
        })
        .collect()
}
