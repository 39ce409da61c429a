use std::fmt::{self, Display, Formatter};

use crate::huffman_coding::node::HuffNode;
use crate::tools::freq_count::ALPHABET_SIZE;

/// One prefix-free code as packed bits, the first step from the root in the
/// most significant position. A tree over u64 counts cannot go deeper than
/// 93 levels, so 128 bits hold any path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    bits: u128,
    len: u8,
}

impl Code {
    /// The empty path at the root.
    pub fn new() -> Self {
        Self { bits: 0, len: 0 }
    }

    /// Append one edge step, 0 for left and 1 for right.
    pub fn push(&mut self, bit: bool) {
        self.bits = (self.bits << 1) | bit as u128;
        self.len += 1;
    }

    /// Number of bits in the code.
    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit at position `i`, counted from the first (root) step. `i` must be
    /// below `len()`.
    pub fn bit(&self, i: u8) -> bool {
        (self.bits >> (self.len - 1 - i)) & 1 == 1
    }

    /// True when `self` matches the leading bits of a strictly longer `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len < other.len && (other.bits >> (other.len - self.len)) == self.bits
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            write!(f, "{}", self.bit(i) as u8)?;
        }
        Ok(())
    }
}

/// Flat map from symbol to its code. Unassigned symbols hold `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    /// Walk the tree and record the path to every leaf, 0 on a left edge and
    /// 1 on a right edge. The walk keeps its own stack since a skewed tree
    /// can run about 90 levels deep. A lone leaf root takes the single bit
    /// `0` rather than an empty code.
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut codes = [None; ALPHABET_SIZE];
        let mut stack = vec![(root, Code::new())];

        while let Some((node, path)) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    let mut left_path = path;
                    left_path.push(false);
                    let mut right_path = path;
                    right_path.push(true);
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
                None => {
                    let mut code = path;
                    if code.is_empty() {
                        code.push(false);
                    }
                    codes[node.symbol as usize] = Some(code);
                }
            }
        }
        Self { codes }
    }

    /// Code for one symbol, when the tree assigned one.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        if (symbol as usize) < ALPHABET_SIZE {
            self.codes[symbol as usize]
        } else {
            None
        }
    }

    /// Iterate `(symbol, code)` over assigned symbols in ascending order.
    pub fn assigned(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u8, c)))
    }
}
