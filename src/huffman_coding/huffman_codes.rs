//! This helper walks a finished huffman tree and hands each leaf its code.
//!
//! A left branch adds a 0 and a right branch adds a 1. A tree made of a single leaf has no branches to
//! take, so that leaf is given the 1-bit code `0` instead of an empty code; an empty code could not be
//! told apart on decode and would cost a non-empty mask nothing.

use super::huffman::{Node, NodeData};
use rustc_hash::FxHashMap;

/// Code bits, root first. false is a left branch, true a right branch.
pub type HuffCode = Vec<bool>;
/// Run length -> code.
pub type CodeTable = FxHashMap<usize, HuffCode>;

/// Generate the code table for every leaf of the tree.
pub fn generate_codes(root: &Node) -> CodeTable {
    let mut codes = CodeTable::default();
    match &root.node_data {
        NodeData::Leaf(run) => {
            codes.insert(*run, vec![false]);
        }
        NodeData::Kids(..) => walk(root, &mut HuffCode::new(), &mut codes),
    }
    codes
}

/// Recursively walk the tree, recording the accumulated prefix at each leaf.
fn walk(node: &Node, prefix: &mut HuffCode, codes: &mut CodeTable) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            prefix.push(false);
            walk(left, prefix, codes);
            prefix.pop();
            prefix.push(true);
            walk(right, prefix, codes);
            prefix.pop();
        }
        NodeData::Leaf(run) => {
            codes.insert(*run, prefix.clone());
        }
    };
}

/// Render code bits as a string of 0s and 1s, for reporting.
pub fn code_string(code: &[bool]) -> String {
    code.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::{freqs, FreqTable};

    fn codes_for(runs: &[usize]) -> (FreqTable, CodeTable) {
        let f = freqs(runs);
        let codes = generate_codes(&build_tree(&f).unwrap());
        (f, codes)
    }

    #[test]
    fn single_leaf_gets_one_bit_test() {
        let (_, codes) = codes_for(&[8]);
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[&8].len(), 1);
        let (_, codes) = codes_for(&[1; 8]);
        assert_eq!(codes[&1].len(), 1);
    }

    #[test]
    fn two_leaves_test() {
        let (_, codes) = codes_for(&[3, 3, 3, 5]);
        assert_eq!(codes[&5], vec![false]);
        assert_eq!(codes[&3], vec![true]);
    }

    #[test]
    fn every_leaf_coded_test() {
        let (f, codes) = codes_for(&[1, 1, 2, 3, 1, 1, 1, 2]);
        assert_eq!(codes.len(), f.len());
        assert!(f.keys().all(|run| codes.contains_key(run)));
        assert_eq!(code_string(&codes[&1]), "1");
        assert_eq!(code_string(&codes[&3]), "00");
        assert_eq!(code_string(&codes[&2]), "01");
    }

    #[test]
    fn prefix_free_test() {
        let runs: Vec<usize> = (1..=40).flat_map(|r| vec![r; (r * r) % 23 + 1]).collect();
        let (_, codes) = codes_for(&runs);
        let all: Vec<&HuffCode> = codes.values().collect();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn heavier_never_longer_test() {
        let runs: Vec<usize> = (1..=30).flat_map(|r| vec![r; (r * 7) % 19 + 1]).collect();
        let (f, codes) = codes_for(&runs);
        for (a, fa) in f.iter() {
            for (b, fb) in f.iter() {
                if fa > fb {
                    assert!(codes[a].len() <= codes[b].len());
                }
            }
        }
    }

    #[test]
    fn code_string_test() {
        assert_eq!(code_string(&[true, false, true]), "101");
        assert_eq!(code_string(&[]), "");
    }
}
