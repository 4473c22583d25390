use std::collections::BTreeSet;

use crate::tree::{NodeId, SuffixTree};

fn nodes_of(t: &SuffixTree) -> Vec<NodeId> {
    let mut res = vec![];
    let mut stack = vec![t.root()];
    while let Some(n) = stack.pop() {
        res.push(n);
        for e in t.out_edges(n) {
            stack.push(t.edge_ends(e).1);
        }
    }
    res
}

fn sorted_leaf_offsets(t: &SuffixTree) -> Vec<usize> {
    let mut res: Vec<usize> = nodes_of(t)
        .into_iter()
        .filter_map(|n| t.suffix_offset(n))
        .collect();
    res.sort_unstable();
    res
}

/// Path-label of every leaf must equal the suffix it claims to start,
/// sentinel included.
fn assert_leaves_spell_suffixes(input: &str) {
    let t = SuffixTree::build(input).unwrap();
    let mut buf = input.as_bytes().to_vec();
    buf.push(0);

    for n in nodes_of(&t) {
        if let Some(off) = t.suffix_offset(n) {
            assert_eq!(
                t.path_label(n),
                &buf[off - 1 ..],
                "leaf at offset {} of {:?}",
                off,
                input,
            );
        }
    }
}

fn assert_well_formed(input: &str) {
    let t = SuffixTree::build(input).unwrap();
    let n = input.len();

    // one leaf per suffix, sentinel suffix included
    assert_eq!(sorted_leaf_offsets(&t), (1 ..= n + 1).collect::<Vec<_>>(), "input {:?}", input);

    for node in nodes_of(&t) {
        if node == t.root() || t.is_leaf(node) {
            continue;
        }

        // fully reduced: no unary interior nodes
        assert!(t.out_degree(node) >= 2, "unary interior node in tree of {:?}", input);

        // suffix link goes from c·alpha to alpha
        let link = t.suffix_link(node).expect("interior node without suffix link");
        assert_eq!(
            t.path_label(link),
            &t.path_label(node)[1 ..],
            "suffix link of {:?} in tree of {:?}",
            node,
            input,
        );
    }
}

#[test]
fn trees_are_well_formed() {
    for input in &["", "a", "aa", "ab", "abab", "aaaa", "banana", "mississippi", "abcabcabc"] {
        assert_well_formed(input);
        assert_leaves_spell_suffixes(input);
    }
}

#[test]
fn empty_text_has_one_leaf() {
    let t = SuffixTree::build("").unwrap();
    assert_eq!(sorted_leaf_offsets(&t), vec![1]);
    assert_eq!(t.node_count(), 2); // root + sentinel leaf
}

#[test]
fn single_char_text_has_two_leaves() {
    let t = SuffixTree::build("a").unwrap();
    assert_eq!(sorted_leaf_offsets(&t), vec![1, 2]);
}

#[test]
fn abab_interior_labels() {
    let t = SuffixTree::build("abab").unwrap();
    let interior: BTreeSet<Vec<u8>> = nodes_of(&t)
        .into_iter()
        .filter(|&n| !t.is_leaf(n))
        .map(|n| t.path_label(n).to_vec())
        .collect();

    let expected: BTreeSet<Vec<u8>> =
        [b"".to_vec(), b"ab".to_vec(), b"b".to_vec()].iter().cloned().collect();
    assert_eq!(interior, expected);
}

#[test]
fn distinct_first_bytes_match_edge_labels() {
    let t = SuffixTree::build("mississippi").unwrap();
    for node in nodes_of(&t) {
        let firsts: Vec<u8> = t.out_edges(node).map(|e| t.edge_label(e)[0]).collect();
        let unique: BTreeSet<u8> = firsts.iter().copied().collect();
        assert_eq!(firsts.len(), unique.len());
    }
}

#[test]
fn rebuild_yields_isomorphic_tree() {
    let a = SuffixTree::build("bananarama").unwrap();
    let b = SuffixTree::build("bananarama").unwrap();

    let labels = |t: &SuffixTree| -> Vec<(Vec<u8>, bool)> {
        let mut v: Vec<_> = nodes_of(t)
            .into_iter()
            .map(|n| (t.path_label(n).to_vec(), t.is_leaf(n)))
            .collect();
        v.sort();
        v
    };
    assert_eq!(labels(&a), labels(&b));
}

#[test]
fn rejects_embedded_sentinel() {
    assert!(SuffixTree::build("ab\0ba").is_err());
}
