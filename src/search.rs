//! Substring search over a finished tree. The pattern is walked character by
//! character without mutating anything; the subtree below the landing point
//! holds exactly the occurrences.

use crate::tree::{NodeId, SuffixTree};

impl SuffixTree {
    /// All occurrences of `pattern`, as sorted 1-based offsets. The empty
    /// pattern matches at every position `1..=n+1` (the sentinel position
    /// included); a pattern longer than the text matches nowhere.
    pub fn search(&self, pattern: &str) -> Vec<usize> {
        let top = match self.slowscan_no_create(self.root(), pattern.as_bytes()) {
            None => return vec![],
            Some(node) => node,
        };

        let mut res = self.leaf_offsets(top);
        res.sort_unstable();
        res
    }

    /// Read-only cousin of the builder's slowscan: returns the node at or
    /// just below where `find` ends if the whole of it matches, `None` on any
    /// mismatch or missing edge. Every byte of `find` is compared.
    fn slowscan_no_create(&self, start: NodeId, find: &[u8]) -> Option<NodeId> {
        if find.is_empty() {
            return Some(start);
        }

        let mut cur = start;
        let mut count = 0;
        loop {
            let via = self.edge_at(cur, find[count])?;
            let (e_idx, e_len, e_to) = {
                let e = self.edge(via);
                (e.idx, e.len, e.to)
            };

            for i in 0 .. e_len {
                if count == find.len() {
                    return Some(e_to);
                }
                if self.text.at(e_idx + i) != find[count] {
                    return None;
                }
                count += 1;
            }

            cur = e_to;
            if count == find.len() {
                return Some(cur);
            }
        }
    }

    /// 1-based suffix offsets of all leaves below `top`, in no particular
    /// order. Explicit stack; recursion depth would otherwise be bounded only
    /// by the tree height.
    fn leaf_offsets(&self, top: NodeId) -> Vec<usize> {
        let mut res = vec![];
        let mut stack = vec![top];
        while let Some(node) = stack.pop() {
            match self.suffix_offset(node) {
                Some(off) => res.push(off),
                None => stack.extend(self.out_edges(node).map(|e| self.edge_ends(e).1)),
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(text: &str, pattern: &str) -> Vec<usize> {
        SuffixTree::build(text).unwrap().search(pattern)
    }

    #[test]
    fn abab() {
        assert_eq!(hits("abab", "ab"), vec![1, 3]);
        assert_eq!(hits("abab", "ba"), vec![2]);
        assert_eq!(hits("abab", "x"), Vec::<usize>::new());
    }

    #[test]
    fn banana() {
        assert_eq!(hits("banana", "ana"), vec![2, 4]);
        assert_eq!(hits("banana", "a"), vec![2, 4, 6]);
        assert_eq!(hits("banana", "banana"), vec![1]);
        assert_eq!(hits("banana", "nana"), vec![3]);
    }

    #[test]
    fn pattern_longer_than_text() {
        assert_eq!(hits("banana", "bananas"), Vec::<usize>::new());
        assert_eq!(hits("ab", "abc"), Vec::<usize>::new());
    }

    #[test]
    fn empty_pattern_matches_everywhere() {
        assert_eq!(hits("abc", ""), vec![1, 2, 3, 4]);
        assert_eq!(hits("", ""), vec![1]);
    }

    #[test]
    fn mismatch_on_last_pattern_byte_mid_edge() {
        // the landing point is inside the "abc$" edge; the final byte still
        // has to be compared
        assert_eq!(hits("abc", "ax"), Vec::<usize>::new());
        assert_eq!(hits("abc", "ab"), vec![1]);
    }

    #[test]
    fn overlapping_occurrences() {
        assert_eq!(hits("aaaa", "aa"), vec![1, 2, 3]);
        assert_eq!(hits("aaaa", "aaa"), vec![1, 2]);
    }
}
