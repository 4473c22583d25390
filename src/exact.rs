//! Non-tree reference matchers, kept around as oracles for the suffix-tree
//! searcher. Same output contract: sorted 1-based offsets, the empty pattern
//! matching at every position including the one past the end.

use crate::text::SENTINEL;

/// Sliding-window comparison, O(n * m).
pub fn naive(text: &str, pattern: &str) -> Vec<usize> {
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    if p.len() > t.len() {
        return vec![];
    }

    (0 ..= t.len() - p.len())
        .filter(|&i| &t[i .. i + p.len()] == p)
        .map(|i| i + 1)
        .collect()
}

/// Border-array (failure-function) matcher over `pattern ++ 0x00 ++ text`.
/// A border of length |pattern| ending at position i marks a match. Inputs
/// must be free of the sentinel byte, same as the tree itself.
pub fn border_array_search(text: &str, pattern: &str) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 {
        return (1 ..= text.len() + 1).collect();
    }
    if m > text.len() {
        return vec![];
    }

    let mut joined = Vec::with_capacity(m + 1 + text.len());
    joined.extend_from_slice(pattern.as_bytes());
    joined.push(SENTINEL);
    joined.extend_from_slice(text.as_bytes());

    let border = border_array(&joined);
    border
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == m)
        .map(|(i, _)| i + 1 - 2 * m)
        .collect()
}

/// border[i] = length of the longest proper border of x[..=i].
fn border_array(x: &[u8]) -> Vec<usize> {
    let mut border = vec![0; x.len()];
    for i in 0 .. x.len() - 1 {
        let mut b = border[i];
        while b > 0 && x[i + 1] != x[b] {
            b = border[b - 1];
        }
        border[i + 1] = if x[i + 1] == x[b] { b + 1 } else { 0 };
    }
    border
}
