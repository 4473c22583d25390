//! Branching tandem repeats via the Stoye-Gusfield subtree test: one
//! post-order pass over the finished tree, numbering leaves as they are
//! visited so that "is this leaf inside the current subtree" becomes a range
//! check. Excluding the largest child subtree at every node keeps the total
//! work near-linear.

use std::collections::BTreeSet;

use tracing::debug;

use crate::tree::{EdgeId, SuffixTree};


/// Two adjacent occurrences of a period-`period` string, the first starting
/// at `offset` (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Repeat {
    pub offset: usize,
    pub period: usize,
}

/// All branching tandem repeats of the tree's text.
pub fn find_tandem_repeats(tree: &SuffixTree) -> BTreeSet<Repeat> {
    let repeats = branching(tree);
    debug!(count = repeats.len(), "branching tandem repeats found");
    repeats
}

/// Branching repeats plus the non-branching ones derived from them by left
/// rotation. Every tandem repeat of the text is one or the other.
pub fn find_tandem_repeats_with_rotations(tree: &SuffixTree) -> BTreeSet<Repeat> {
    let mut repeats = branching(tree);
    let rotated = rotations(tree, &repeats);
    repeats.extend(rotated);
    repeats
}

/// One internal node being visited: its children, the leaf lists the finished
/// children reported back, and the DFS numbers its span started at.
struct Frame {
    depth: usize,
    span_start: usize,
    children: Vec<EdgeId>,
    lists: Vec<Vec<usize>>,
    next: usize,
}

fn branching(tree: &SuffixTree) -> BTreeSet<Repeat> {
    let mut dfs_num = vec![0usize; tree.text_len()];
    let mut next_dfs = 1;
    let mut repeats = BTreeSet::new();

    // post-order with an explicit frame stack; the tree can be as deep as the
    // text is long
    let mut stack = vec![Frame {
        depth: 0,
        span_start: next_dfs,
        children: tree.out_edges(tree.root()).collect(),
        lists: vec![],
        next: 0,
    }];
    let mut returned: Option<Vec<usize>> = None;

    while !stack.is_empty() {
        {
            let top = stack.last_mut().expect("frame stack underflow");
            if let Some(list) = returned.take() {
                top.lists.push(list);
            }
        }

        let pending = {
            let top = stack.last_mut().expect("frame stack underflow");
            if top.next < top.children.len() {
                let via = top.children[top.next];
                top.next += 1;
                Some((via, top.depth))
            } else {
                None
            }
        };

        match pending {
            Some((via, depth)) => {
                let child = tree.edge_ends(via).1;
                if let Some(off) = tree.suffix_offset(child) {
                    let leaf = off - 1; // 0-based from here on
                    dfs_num[leaf] = next_dfs;
                    next_dfs += 1;
                    returned = Some(vec![leaf]);
                } else {
                    stack.push(Frame {
                        depth: depth + tree.edge(via).len,
                        span_start: next_dfs,
                        children: tree.out_edges(child).collect(),
                        lists: vec![],
                        next: 0,
                    });
                }
            }
            None => {
                let frame = stack.pop().expect("frame stack underflow");
                process_node(tree, &frame, next_dfs, &dfs_num, &mut repeats);

                // hand the merged leaf list up, largest child included again
                let mut all = Vec::with_capacity(frame.lists.iter().map(Vec::len).sum());
                for list in &frame.lists {
                    all.extend_from_slice(list);
                }
                returned = Some(all);
            }
        }
    }

    repeats
}

/// The subtree test at one internal node. `span_end` is exclusive: the DFS
/// numbers of this node's leaves are exactly `span_start .. span_end`.
fn process_node(
    tree: &SuffixTree,
    frame: &Frame,
    span_end: usize,
    dfs_num: &[usize],
    repeats: &mut BTreeSet<Repeat>,
) {
    let depth = frame.depth;
    if depth == 0 {
        // the root; a period-0 repeat is meaningless
        return;
    }

    let n = tree.text_len();
    let mut largest = 0;
    for (k, list) in frame.lists.iter().enumerate() {
        if list.len() > frame.lists[largest].len() {
            largest = k;
        }
    }

    let in_span = |leaf: usize| {
        let d = dfs_num[leaf];
        frame.span_start <= d && d < span_end
    };

    for (k, list) in frame.lists.iter().enumerate() {
        if k == largest {
            continue;
        }

        for &i in list {
            let x = i + depth;
            let z = i + 2 * depth;

            // case 1: second half starts at x, inside this subtree, and the
            // pair cannot be extended to the right
            if z < n && in_span(x) && tree.text.at(i) != tree.text.at(z) {
                repeats.insert(Repeat { offset: i + 1, period: depth });
            }

            // case 2: i anchors the second half instead
            if i >= depth && x < n {
                let y = i - depth;
                if in_span(y) && tree.text.at(y) != tree.text.at(x) {
                    repeats.insert(Repeat { offset: y + 1, period: depth });
                }
            }
        }
    }
}

/// Left-rotates every branching repeat while the byte dropping off the right
/// half reappears on the left, yielding the non-branching repeats.
fn rotations(tree: &SuffixTree, branching: &BTreeSet<Repeat>) -> Vec<Repeat> {
    let mut extra = vec![];
    for r in branching {
        let mut idx = r.offset - 1;
        while idx > 0 && tree.text.at(idx - 1) == tree.text.at(idx - 1 + r.period) {
            idx -= 1;
            extra.push(Repeat { offset: idx + 1, period: r.period });
        }
    }
    extra
}
