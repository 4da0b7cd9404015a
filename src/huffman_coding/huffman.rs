use log::{debug, trace};

use crate::tools::freq_count::FreqTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::io::{Error, ErrorKind};

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(usize),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Frequency of the leaf, or the sum of both children
    pub weight: usize,
    /// Creation order, used to break ties between equal weights
    pub seq: usize,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: usize, seq: usize, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaves(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaves() + right.leaves(),
            NodeData::Leaf(_) => 1,
        }
    }

    /// Number of internal nodes below (and including) this node.
    pub fn internals(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.internals() + right.internals(),
            NodeData::Leaf(_) => 0,
        }
    }

    /// Distance from this node to its deepest leaf.
    pub fn depth(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.depth().max(right.depth()),
            NodeData::Leaf(_) => 0,
        }
    }
}

impl Ord for Node {
    /// Order Nodes by decreasing weight and decreasing creation order, so the lightest
    /// and oldest node is the greatest and comes off a BinaryHeap first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a huffman tree from the run length frequencies. The root owns the whole tree.
/// An empty table has no meaningful tree and is rejected as InvalidInput.
pub fn build_tree(freqs: &FreqTable) -> Result<Node, Error> {
    // Pull the (run length, count) pairs out of the table. Leaves are created in ascending
    // run length order so ties resolve the same way every time.
    let mut leaves = freqs
        .iter()
        .map(|(&run, &count)| (run, count))
        .collect::<Vec<(usize, usize)>>();
    leaves.sort_unstable();

    // Turn the leaves into a heap. Node ordering is reversed, so the heap top is the lightest
    // (and oldest, on equal weights) node.
    let mut tree: BinaryHeap<Node> = leaves
        .iter()
        .enumerate()
        .map(|(seq, &(run, count))| Node::new(count, seq, NodeData::Leaf(run)))
        .collect();
    // Internal nodes are numbered after all the leaves.
    let mut seq = tree.len();
    debug!("Building huffman tree from {} distinct run lengths", seq);

    // ...then pare it down to one single node with child nodes.
    loop {
        match (tree.pop(), tree.pop()) {
            (Some(left), Some(right)) => {
                trace!(
                    "Merging weights {} and {} into node {}",
                    left.weight,
                    right.weight,
                    seq
                );
                // Pull off the two lightest nodes and make a new parent that owns both
                tree.push(Node::new(
                    left.weight + right.weight,
                    seq,
                    NodeData::Kids(Box::new(left), Box::new(right)),
                ));
                seq += 1;
            }
            // One node left: that is the root. A lone leaf is its own root.
            (Some(root), None) => return Ok(root),
            // Nothing at all: the table was empty.
            (None, _) => {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    "no runs to encode: cannot build a huffman tree from an empty frequency table",
                ))
            }
        }
    }
}
