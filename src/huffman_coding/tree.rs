use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::HuffError;
use crate::huffman_coding::node::HuffNode;
use crate::tools::freq_count::FreqTable;

/// Build the coding tree for every symbol present in `freqs`.
///
/// The two lightest nodes are popped and merged, first popped on the left,
/// until a single root remains. Ties on weight fall to the representative
/// symbol, and since every live node holds the minimum leaf symbol of a
/// disjoint subtree no two entries ever compare equal. Extraction order is
/// therefore fully determined and repeated builds produce identical trees.
pub fn build_tree(freqs: &FreqTable) -> Result<HuffNode, HuffError> {
    let mut queue = freqs
        .present()
        .map(|(symbol, count)| Reverse(HuffNode::leaf(symbol, count)))
        .collect::<BinaryHeap<Reverse<HuffNode>>>();

    loop {
        match (queue.pop(), queue.pop()) {
            (Some(Reverse(a)), Some(Reverse(b))) => queue.push(Reverse(HuffNode::merge(a, b))),
            (Some(Reverse(root)), None) => return Ok(root),
            _ => return Err(HuffError::EmptyAlphabet),
        }
    }
}
