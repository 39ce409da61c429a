use std::cmp::Ordering;

/// One node of the coding tree. A leaf carries its own symbol. An internal
/// node carries the smallest leaf symbol of its subtree, so every live node
/// in the build queue owns a distinct representative and the ordering below
/// never ties.
#[derive(Debug, Clone)]
pub struct HuffNode {
    /// Combined count of every leaf under this node.
    pub weight: u64,
    /// Leaf symbol, or the minimum leaf symbol of the subtree.
    pub symbol: u8,
    /// Left and right children. A leaf has none, an internal node has both.
    children: Option<(Box<HuffNode>, Box<HuffNode>)>,
}

impl HuffNode {
    /// Create a leaf for one counted symbol.
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        Self {
            weight,
            symbol,
            children: None,
        }
    }

    /// Join two nodes under a new parent. The first node popped from the
    /// queue goes on the left, and the parent takes the smaller of the two
    /// representative symbols.
    pub fn merge(a: HuffNode, b: HuffNode) -> Self {
        Self {
            weight: a.weight + b.weight,
            symbol: a.symbol.min(b.symbol),
            children: Some((Box::new(a), Box::new(b))),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Left and right children of an internal node.
    pub fn children(&self) -> Option<(&HuffNode, &HuffNode)> {
        self.children.as_ref().map(|(l, r)| (l.as_ref(), r.as_ref()))
    }
}

/// Nodes compare as (weight, symbol) value pairs. Children never take part,
/// keeping equality consistent with the ordering the build queue sees.
impl PartialEq for HuffNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.symbol == other.symbol
    }
}

impl Eq for HuffNode {}

impl PartialOrd for HuffNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HuffNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.symbol).cmp(&(other.weight, other.symbol))
    }
}

#[cfg(test)]
mod test {
    use super::HuffNode;

    #[test]
    fn weight_orders_first_test() {
        let light = HuffNode::leaf(99, 2);
        let heavy = HuffNode::leaf(97, 3);
        assert!(light < heavy);
    }

    #[test]
    fn symbol_breaks_ties_test() {
        let a = HuffNode::leaf(97, 5);
        let b = HuffNode::leaf(98, 5);
        assert!(a < b);
        assert!(a == a.clone());
    }

    #[test]
    fn merge_test() {
        let parent = HuffNode::merge(HuffNode::leaf(99, 2), HuffNode::leaf(97, 3));
        assert_eq!(parent.weight, 5);
        assert_eq!(parent.symbol, 97);
        assert!(!parent.is_leaf());

        let (left, right) = parent.children().unwrap();
        assert_eq!(left.symbol, 99);
        assert_eq!(right.symbol, 97);
    }
}
