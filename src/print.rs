//! Indented text rendering of logic trees.
//!
//! Every node is written on its own line, indented by one level per depth,
//! followed by a marker: `&` for AND, `v` for OR, `~` for NOT, or the atom
//! name for leaves.
//!
//! ```text
//! v
//!   ~
//!     &
//!       a
//!       b
//!   ~
//!     v
//!       a
//!       b
//! ```
//!
//! By default AND/OR nodes show only their first two children and NOT shows
//! only its first child, even though evaluation uses all of them. Set
//! [`TreeStyle::all_children`] to render every child instead.

use std::io::{self, Write};

use crate::error::{LogicError, LogicResult};
use crate::node::{Node, NodeKind};

/// Configuration options for tree rendering.
///
/// ```
/// use logic_tree::node::Node;
/// use logic_tree::print::TreeStyle;
///
/// let f = Node::and([Node::atom("a"), Node::atom("b"), Node::atom("c")]);
/// let style = TreeStyle {
///     indent: "    ",
///     and_marker: "AND",
///     or_marker: "OR",
///     not_marker: "NOT",
///     all_children: true,
/// };
///
/// let text = f.to_tree_string_with_style(&style).unwrap();
/// assert_eq!(text, "AND\n    a\n    b\n    c\n");
/// ```
#[derive(Debug, Clone)]
pub struct TreeStyle {
    /// Indentation per depth level (default: two spaces)
    pub indent: &'static str,
    /// Marker for AND nodes (default: "&")
    pub and_marker: &'static str,
    /// Marker for OR nodes (default: "v")
    pub or_marker: &'static str,
    /// Marker for NOT nodes (default: "~")
    pub not_marker: &'static str,
    /// Whether to print every child instead of the first one (NOT) or two (AND/OR) (default: false)
    pub all_children: bool,
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            indent: "  ",
            and_marker: "&",
            or_marker: "v",
            not_marker: "~",
            all_children: false,
        }
    }
}

impl TreeStyle {
    /// Number of leading children of `node` that get rendered.
    fn shown_count(&self, node: &Node) -> usize {
        if self.all_children {
            return node.children().len();
        }
        match node.kind() {
            NodeKind::Atom => 0,
            NodeKind::Not => 1,
            NodeKind::And | NodeKind::Or => 2,
        }
    }

    fn marker<'a>(&self, node: &'a Node) -> &'a str {
        match node {
            Node::Atom(name) => name.as_str(),
            Node::Not(_) => self.not_marker,
            Node::And(_) => self.and_marker,
            Node::Or(_) => self.or_marker,
        }
    }
}

impl Node {
    /// Writes the tree rooted at this node to `out`, starting at `depth`.
    pub fn write_tree<W: Write>(&self, out: &mut W, depth: usize) -> LogicResult<()> {
        self.write_tree_with_style(out, depth, &TreeStyle::default())
    }

    pub fn write_tree_with_style<W: Write>(
        &self,
        out: &mut W,
        depth: usize,
        style: &TreeStyle,
    ) -> LogicResult<()> {
        writeln!(out, "{}{}", style.indent.repeat(depth), style.marker(self))?;
        let children = self.children();
        for index in 0..style.shown_count(self) {
            let child = children.get(index).ok_or(LogicError::MissingChild {
                kind: self.kind(),
                index,
            })?;
            child.write_tree_with_style(out, depth + 1, style)?;
        }
        Ok(())
    }

    /// Prints the tree rooted at this node to stdout.
    pub fn tree_print(&self) -> LogicResult<()> {
        self.tree_print_at(0)
    }

    /// Prints the tree rooted at this node to stdout, indented as if it were `depth` levels deep.
    pub fn tree_print_at(&self, depth: usize) -> LogicResult<()> {
        let mut out = io::stdout().lock();
        self.write_tree(&mut out, depth)?;
        out.flush()?;
        Ok(())
    }

    pub fn to_tree_string(&self) -> LogicResult<String> {
        self.to_tree_string_with_style(&TreeStyle::default())
    }

    pub fn to_tree_string_with_style(&self, style: &TreeStyle) -> LogicResult<String> {
        let mut buf = Vec::new();
        self.write_tree_with_style(&mut buf, 0, style)?;
        let text = String::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms() -> (Node, Node) {
        (Node::atom("a"), Node::atom("b"))
    }

    #[test]
    fn test_print_atom() {
        let (a, _) = atoms();
        assert_eq!(a.to_tree_string().unwrap(), "a\n");
    }

    #[test]
    fn test_print_at_depth() {
        let (a, b) = atoms();
        let f = a & b;
        let mut buf = Vec::new();
        f.write_tree(&mut buf, 2).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "    &\n      a\n      b\n");
    }

    #[test]
    fn test_print_compound() {
        let (a, b) = atoms();
        let f = !(a.clone() & b.clone()) | !(a | b);
        let expected = "\
v
  ~
    &
      a
      b
  ~
    v
      a
      b
";
        assert_eq!(f.to_tree_string().unwrap(), expected);
    }

    #[test]
    fn test_print_only_first_two_children() {
        let f = Node::or([Node::atom("x"), Node::atom("y"), Node::atom("z")]);
        assert_eq!(f.to_tree_string().unwrap(), "v\n  x\n  y\n");
    }

    #[test]
    fn test_print_not_shows_first_child() {
        let f = Node::not_all([Node::atom("x"), Node::atom("y")]);
        assert_eq!(f.to_tree_string().unwrap(), "~\n  x\n");
    }

    #[test]
    fn test_print_all_children() {
        let style = TreeStyle {
            all_children: true,
            ..TreeStyle::default()
        };
        let f = Node::or([Node::atom("x"), Node::atom("y"), Node::atom("z")]);
        assert_eq!(
            f.to_tree_string_with_style(&style).unwrap(),
            "v\n  x\n  y\n  z\n"
        );
        let g = Node::and([Node::atom("x")]);
        assert_eq!(g.to_tree_string_with_style(&style).unwrap(), "&\n  x\n");
    }

    #[test]
    fn test_print_missing_children() {
        let f = Node::and([Node::atom("x")]);
        assert!(matches!(
            f.to_tree_string(),
            Err(LogicError::MissingChild {
                kind: NodeKind::And,
                index: 1
            })
        ));

        // The available child is written before the failure.
        let mut buf = Vec::new();
        let res = f.write_tree(&mut buf, 0);
        assert!(matches!(
            res,
            Err(LogicError::MissingChild {
                kind: NodeKind::And,
                index: 1
            })
        ));
        assert_eq!(String::from_utf8(buf).unwrap(), "&\n  x\n");

        let h = !Node::or([Node::atom("y")]);
        let mut buf = Vec::new();
        assert!(h.write_tree(&mut buf, 0).is_err());
        assert_eq!(String::from_utf8(buf).unwrap(), "~\n  v\n    y\n");

        let g = Node::Not(vec![]);
        assert!(matches!(
            g.to_tree_string(),
            Err(LogicError::MissingChild {
                kind: NodeKind::Not,
                index: 0
            })
        ));
    }

    #[test]
    fn test_print_does_not_alter_tree() {
        let (a, b) = atoms();
        let f = Node::or([!a.clone(), b.clone(), a]);
        let before = f.clone();
        f.to_tree_string().unwrap();
        assert_eq!(f, before);
    }

    #[test]
    fn test_tree_print_stdout() {
        let (a, b) = atoms();
        (a & !b).tree_print().unwrap();
    }
}
