//! Suffix trees built with McCreight's algorithm, plus the two things this
//! crate uses them for: substring-occurrence search and Stoye-Gusfield
//! branching tandem repeat detection.
//!
//! ```
//! use suffixtree::{find_tandem_repeats, SuffixTree};
//!
//! let tree = SuffixTree::build("abab").unwrap();
//! assert_eq!(tree.search("ab"), vec![1, 3]);
//!
//! let repeats = find_tandem_repeats(&tree);
//! assert!(repeats.iter().any(|r| r.offset == 1 && r.period == 2));
//! ```

mod build;
pub mod dot;
pub mod exact;
pub mod gen;
pub mod repeats;
mod search;
mod text;
mod tree;

pub use repeats::{find_tandem_repeats, find_tandem_repeats_with_rotations, Repeat};
pub use text::{Error, Text, SENTINEL};
pub use tree::{EdgeId, NodeId, SuffixTree};
