use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A node of a propositional logic expression tree.
///
/// Composite nodes own their children, so a tree built from these values is
/// always a strict tree: no sharing, no cycles.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    /// Propositional variable, looked up by name in the model.
    Atom(String),
    /// Negation. Semantically unary, but any number of children may be stored.
    Not(Vec<Node>),
    /// Conjunction over all children.
    And(Vec<Node>),
    /// Disjunction over all children.
    Or(Vec<Node>),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Atom,
    Not,
    And,
    Or,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Atom => "ATOM",
            NodeKind::Not => "NOT",
            NodeKind::And => "AND",
            NodeKind::Or => "OR",
        };
        write!(f, "{}", name)
    }
}

// Constructors
impl Node {
    pub fn atom(name: impl Into<String>) -> Node {
        Node::Atom(name.into())
    }

    pub fn not(child: Node) -> Node {
        Node::Not(vec![child])
    }

    /// Negation over an arbitrary child list.
    ///
    /// Such a node can be built and printed, but evaluating it fails unless it
    /// has exactly one child.
    pub fn not_all(children: impl IntoIterator<Item = Node>) -> Node {
        Node::Not(children.into_iter().collect())
    }

    pub fn and(children: impl IntoIterator<Item = Node>) -> Node {
        Node::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Node>) -> Node {
        Node::Or(children.into_iter().collect())
    }
}

// Getters
impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Atom(_) => NodeKind::Atom,
            Node::Not(_) => NodeKind::Not,
            Node::And(_) => NodeKind::And,
            Node::Or(_) => NodeKind::Or,
        }
    }

    /// Child nodes, in construction order. Atoms have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Atom(_) => &[],
            Node::Not(children) | Node::And(children) | Node::Or(children) => {
                children.as_slice()
            }
        }
    }

    /// First child.
    pub fn l(&self) -> Option<&Node> {
        self.children().first()
    }

    /// Second child.
    pub fn r(&self) -> Option<&Node> {
        self.children().get(1)
    }

    pub fn atom_name(&self) -> Option<&str> {
        match self {
            Node::Atom(name) => Some(name),
            _ => None,
        }
    }
}

// Queries
impl Node {
    /// Names of all atoms referenced by the tree, sorted and deduplicated.
    pub fn atoms(&self) -> BTreeSet<&str> {
        let mut atoms = BTreeSet::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Node::Atom(name) => {
                    atoms.insert(name.as_str());
                }
                _ => stack.extend(node.children()),
            }
        }

        atoms
    }

    /// Height of the tree. A single atom has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Total number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }
}

impl Drop for Node {
    // Children are moved onto a work list so deep trees drop without recursion.
    fn drop(&mut self) {
        let mut stack = match self {
            Node::Atom(_) => return,
            Node::Not(children) | Node::And(children) | Node::Or(children) => {
                std::mem::take(children)
            }
        };

        while let Some(mut node) = stack.pop() {
            match &mut node {
                Node::Atom(_) => {}
                Node::Not(children) | Node::And(children) | Node::Or(children) => {
                    stack.append(children);
                }
            }
        }
    }
}

impl From<&str> for Node {
    fn from(name: &str) -> Self {
        Node::atom(name)
    }
}

impl From<String> for Node {
    fn from(name: String) -> Self {
        Node::Atom(name)
    }
}

impl BitAnd for Node {
    type Output = Node;

    fn bitand(self, rhs: Self) -> Self::Output {
        Node::And(vec![self, rhs])
    }
}

impl BitOr for Node {
    type Output = Node;

    fn bitor(self, rhs: Self) -> Self::Output {
        Node::Or(vec![self, rhs])
    }
}

impl Not for Node {
    type Output = Node;

    fn not(self) -> Self::Output {
        Node::not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom() {
        let a = Node::atom("a");
        assert_eq!(a.kind(), NodeKind::Atom);
        assert_eq!(a.atom_name(), Some("a"));
        assert!(a.children().is_empty());
        assert_eq!(a.l(), None);
        assert_eq!(a.r(), None);
    }

    #[test]
    fn test_children_accessors() {
        let a = Node::atom("a");
        let b = Node::atom("b");
        let c = Node::atom("c");
        let f = Node::and([a.clone(), b.clone(), c.clone()]);
        assert_eq!(f.kind(), NodeKind::And);
        assert_eq!(f.children(), &[a.clone(), b.clone(), c]);
        assert_eq!(f.l(), Some(&a));
        assert_eq!(f.r(), Some(&b));

        let g = Node::not(a.clone());
        assert_eq!(g.l(), Some(&a));
        assert_eq!(g.r(), None);
    }

    #[test]
    fn test_operators() {
        let a = Node::atom("a");
        let b = Node::atom("b");
        assert_eq!(a.clone() & b.clone(), Node::and([a.clone(), b.clone()]));
        assert_eq!(a.clone() | b.clone(), Node::or([a.clone(), b.clone()]));
        assert_eq!(!a.clone(), Node::Not(vec![a.clone()]));
        // No simplification: double negation stays a tree of two NOTs.
        assert_eq!((!!a.clone()).size(), 3);
    }

    #[test]
    fn test_not_all() {
        let f = Node::not_all([Node::atom("a"), Node::atom("b")]);
        assert_eq!(f.kind(), NodeKind::Not);
        assert_eq!(f.children().len(), 2);
    }

    #[test]
    fn test_atoms() {
        let f = (Node::from("b") & Node::from("a")) | !Node::from("b");
        let atoms: Vec<&str> = f.atoms().into_iter().collect();
        assert_eq!(atoms, vec!["a", "b"]);
    }

    #[test]
    fn test_depth_and_size() {
        let a = Node::atom("a");
        assert_eq!(a.depth(), 1);
        assert_eq!(a.size(), 1);

        let f = !(a.clone() & Node::atom("b")) | a;
        assert_eq!(f.depth(), 4);
        assert_eq!(f.size(), 6);
    }

    #[test]
    fn test_drop_deep_tree() {
        let mut f = Node::atom("a");
        for i in 0..200_000 {
            f = match i % 3 {
                0 => Node::not(f),
                1 => Node::and([f, Node::atom("b")]),
                _ => Node::or([Node::atom("c"), f]),
            };
        }
        drop(f);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::Or.to_string(), "OR");
        assert_eq!(NodeKind::Not.to_string(), "NOT");
    }
}
