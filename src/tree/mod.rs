//! The suffix tree graph: an arena of nodes and edges addressed by index
//! handles. Suffix links and parent-edge back-references are plain indices
//! into the arena, so the cyclic references of a suffix tree never turn into
//! ownership cycles. Built once by the builder, read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

use crate::text::{Error, Text};


pub const ROOT: NodeId = NodeId(0);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

pub(crate) struct Node {
    /// Outgoing edges keyed by the first byte of their label. Keys are unique
    /// per node; the map keeps children in byte order, which makes every
    /// traversal in the crate deterministic.
    pub(crate) edges: BTreeMap<u8, EdgeId>,
    /// Incoming edge; `None` only for the root.
    pub(crate) parent: Option<EdgeId>,
    /// Set for the root (itself) and for every interior node once it has
    /// served as a head during construction. Leaves keep `None`.
    pub(crate) suffix_link: Option<NodeId>,
    /// `(idx, len)` view of the path-label, resolved against the text.
    /// For a leaf this is the whole suffix it represents.
    pub(crate) idx: usize,
    pub(crate) len: usize,
}

pub(crate) struct Edge {
    pub(crate) from: NodeId,
    pub(crate) to: NodeId,
    pub(crate) idx: usize,
    pub(crate) len: usize,
}

/// A finished tree plus the text it indexes.
pub struct SuffixTree {
    pub(crate) text: Text,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
}

impl SuffixTree {
    /// An empty tree over `input`: just the root, suffix-linked to itself.
    /// The builder does the rest; see `SuffixTree::build`.
    pub(crate) fn with_text(input: &[u8]) -> Result<Self, Error> {
        let text = Text::new(input)?;
        let root = Node {
            edges: BTreeMap::new(),
            parent: None,
            suffix_link: Some(ROOT),
            idx: 0,
            len: 0,
        };

        Ok(Self { text, nodes: vec![root], edges: vec![] })
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub(crate) fn edge_at(&self, node: NodeId, first: u8) -> Option<EdgeId> {
        self.node(node).edges.get(&first).copied()
    }

    pub(crate) fn new_node(&mut self, idx: usize, len: usize) -> NodeId {
        assert!(idx + len <= self.text.len(), "node view ({}, {}) out of range", idx, len);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            edges: BTreeMap::new(),
            parent: None,
            suffix_link: None,
            idx,
            len,
        });

        id
    }

    /// Registers the edge under the first byte of its label and wires the
    /// destination's parent back-reference.
    pub(crate) fn make_edge(&mut self, from: NodeId, to: NodeId, idx: usize, len: usize) -> EdgeId {
        assert!(len > 0 && idx + len <= self.text.len(), "edge view ({}, {}) out of range", idx, len);
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { from, to, idx, len });
        let first = self.text.at(idx);
        let prev = self.node_mut(from).edges.insert(first, id);
        debug_assert!(prev.is_none(), "two edges from {:?} share first byte {:?}", from, first as char);
        self.node_mut(to).parent = Some(id);
        id
    }

    /// Inserts a new node at distance `offset` along `edge`. The original
    /// destination keeps its identity and ends up below the new node; the
    /// original edge is shortened to `offset` and redirected. Returns the new
    /// node for the caller to attach further children.
    pub(crate) fn split_edge(&mut self, edge: EdgeId, offset: usize) -> NodeId {
        let (from, to, idx, len) = {
            let e = self.edge(edge);
            (e.from, e.to, e.idx, e.len)
        };
        assert!(0 < offset && offset < len, "split at {} outside edge of length {}", offset, len);

        let from_len = self.node(from).len;
        let mid = self.new_node(idx - from_len, from_len + offset);
        self.make_edge(mid, to, idx + offset, len - offset);

        self.node_mut(mid).parent = Some(edge);
        let e = &mut self.edges[edge.0];
        e.to = mid;
        e.len = offset;
        mid
    }

    // Read-only surface, shared by the searcher, the repeat finder and the
    // dot visualizer.

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Length of the underlying buffer, sentinel included.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.node(node).edges.values().copied()
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.node(node).edges.len()
    }

    pub fn edge_ends(&self, edge: EdgeId) -> (NodeId, NodeId) {
        let e = self.edge(edge);
        (e.from, e.to)
    }

    pub fn edge_label(&self, edge: EdgeId) -> &[u8] {
        let e = self.edge(edge);
        self.text.slice(e.idx, e.len)
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.node(node).edges.is_empty()
    }

    /// Path-label length, aka string-depth.
    pub fn string_depth(&self, node: NodeId) -> usize {
        self.node(node).len
    }

    /// Concatenation of edge labels from the root down to `node`.
    pub fn path_label(&self, node: NodeId) -> &[u8] {
        let n = self.node(node);
        self.text.slice(n.idx, n.len)
    }

    /// 1-based starting offset of the suffix a leaf represents.
    pub fn suffix_offset(&self, node: NodeId) -> Option<usize> {
        if self.is_leaf(node) {
            Some(self.node(node).idx + 1)
        } else {
            None
        }
    }

    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).suffix_link
    }
}
