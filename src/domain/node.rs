use super::hash::{Digest, HashMethod};

/// A vertex of the tree. Internal nodes exclusively own both children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        digest: Digest,
    },
    Internal {
        digest: Digest,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf<Method: HashMethod>(record: &[u8]) -> Self {
        Node::Leaf {
            digest: Method::hash_leaf(record),
        }
    }

    pub fn internal<Method: HashMethod>(left: Node, right: Node) -> Self {
        Node::Internal {
            digest: Method::hash_nodes(left.digest(), right.digest()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn digest(&self) -> &Digest {
        match self {
            Node::Leaf { digest } | Node::Internal { digest, .. } => digest,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { right, .. } => Some(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
