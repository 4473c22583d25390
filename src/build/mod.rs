//! McCreight's construction. Suffixes of the sentinel-terminated input are
//! inserted longest first; across iterations the builder maintains the
//! `(head, tail)` invariant: `head` is the deepest already-explicit node on
//! the path of the suffix inserted last, `tail` is the part of that suffix
//! hanging below it. Suffix links plus the skip/count trick of `fastscan`
//! make the whole thing amortized linear.

use tracing::{debug, trace};

use crate::text::Error;
use crate::tree::{EdgeId, NodeId, SuffixTree, ROOT};

#[cfg(test)]
mod tests;

/// An `(idx, len)` window into the text buffer. Scan targets are always
/// substrings of the text, so a window is all a scanner ever needs.
#[derive(Clone, Copy)]
struct View {
    idx: usize,
    len: usize,
}

impl View {
    fn empty() -> Self {
        Self { idx: 0, len: 0 }
    }

    fn behead(self) -> Self {
        Self { idx: self.idx + 1, len: self.len - 1 }
    }
}

/// Where a slow scan stopped: exactly on a node, or `offset` bytes into an
/// edge (the caller splits there).
enum ScanEnd {
    OnNode(NodeId),
    InEdge(EdgeId, usize),
}

impl SuffixTree {
    /// Builds the suffix tree over `input` in O(n) amortized time and space.
    ///
    /// The only recoverable failure is an input that already contains the
    /// sentinel byte. Everything else that can go wrong here is a defect in
    /// the scanning logic and panics via the arena's assertions.
    pub fn build(input: &str) -> Result<Self, Error> {
        let mut tree = SuffixTree::with_text(input.as_bytes())?;
        let n = tree.text_len();

        // T_0: the whole string as a single leaf off the root.
        let first = tree.new_node(0, n);
        tree.make_edge(ROOT, first, 0, n);

        let mut head = ROOT;
        let mut tail = View { idx: 0, len: n };

        for i in 0 .. n - 1 {
            // (u, v): head's parent and the label of head's incoming edge.
            let (u, v) = match tree.node(head).parent {
                None => (ROOT, View::empty()),
                Some(pe) => {
                    let e = tree.edge(pe);
                    (e.from, View { idx: e.idx, len: e.len })
                }
            };

            // Locate the end of v starting from u's suffix link. That path is
            // known to exist already, so fastscan never compares characters.
            let (w, w_is_new) = if u != ROOT {
                let sl = tree.node(u).suffix_link.expect("interior node without a suffix link");
                fastscan(&mut tree, sl, v)
            } else if v.len < 2 {
                (ROOT, false)
            } else {
                fastscan(&mut tree, ROOT, v.behead())
            };

            // A split node needs no further comparison; an existing node may
            // extend deeper, so slowscan the remainder character by character.
            let new_head = if w_is_new {
                w
            } else {
                let find = if v.len == 0 {
                    View { idx: i + 1, len: n - (i + 1) }
                } else {
                    tail
                };
                match slowscan(&tree, w, find) {
                    ScanEnd::OnNode(node) => node,
                    ScanEnd::InEdge(edge, offset) => tree.split_edge(edge, offset),
                }
            };

            tree.node_mut(head).suffix_link = Some(w);

            // Attach tail(i+1): the unconsumed remainder of the suffix
            // starting at i+1 becomes a fresh leaf edge.
            let head_len = tree.node(new_head).len;
            let leaf = tree.new_node(i + 1, n - (i + 1));
            tree.make_edge(new_head, leaf, i + 1 + head_len, n - (i + 1) - head_len);
            trace!(suffix = i + 1, head = ?new_head, leaf = ?leaf, "suffix inserted");

            head = new_head;
            tail = View { idx: i + 1 + head_len, len: n - (i + 1) - head_len };
        }

        // Close the suffix-link chain.
        tree.node_mut(head).suffix_link = Some(ROOT);

        debug!(
            text_len = n,
            nodes = tree.node_count(),
            edges = tree.edge_count(),
            "suffix tree built"
        );
        Ok(tree)
    }
}

/// Skip/count scan: `find` is known to spell a path from `start`, so whole
/// edges are consumed by length alone. Lands either exactly on a node, or
/// mid-edge, in which case the edge is split right here and the new node is
/// returned with the `true` flag.
fn fastscan(tree: &mut SuffixTree, start: NodeId, find: View) -> (NodeId, bool) {
    if find.len == 0 {
        return (start, false);
    }

    let mut dist = 0;
    let mut cur = start;
    let mut via;
    loop {
        let first = tree.text.at(find.idx + dist);
        via = tree.edge_at(cur, first).expect("fastscan precondition broken: path not in tree");
        let e = tree.edge(via);
        dist += e.len;
        cur = e.to;
        if dist >= find.len {
            break;
        }
    }

    if dist == find.len {
        (cur, false)
    } else {
        let overshoot = dist - find.len;
        let offset = tree.edge(via).len - overshoot;
        (tree.split_edge(via, offset), true)
    }
}

/// Character-by-character scan for a string not known to be in the tree.
/// Stops at the first mismatch or missing edge; never mutates.
fn slowscan(tree: &SuffixTree, start: NodeId, find: View) -> ScanEnd {
    if find.len == 0 {
        return ScanEnd::OnNode(start);
    }

    let mut cur = start;
    let mut count = 0;
    loop {
        let via = match tree.edge_at(cur, tree.text.at(find.idx + count)) {
            None => return ScanEnd::OnNode(cur),
            Some(e) => e,
        };
        let (e_idx, e_len, e_to) = {
            let e = tree.edge(via);
            (e.idx, e.len, e.to)
        };

        for i in 0 .. e_len {
            if count == find.len || tree.text.at(e_idx + i) != tree.text.at(find.idx + count) {
                return ScanEnd::InEdge(via, i);
            }
            count += 1;
        }

        cur = e_to;
        if count == find.len {
            return ScanEnd::OnNode(cur);
        }
    }
}
