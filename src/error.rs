use thiserror::Error;

use crate::node::NodeKind;

/// Failures raised while evaluating or printing a logic tree.
#[derive(Error, Debug)]
pub enum LogicError {
    /// NOT was evaluated with other than exactly one operand.
    #[error("NOT is undefined for {found} children")]
    NotArity { found: usize },

    /// The model has no truth value for a referenced atom.
    #[error("Atom not found in model: {0}")]
    MissingAtom(String),

    /// A traversal needed a child the node does not have.
    #[error("{kind} node has no child at index {index}")]
    MissingChild { kind: NodeKind, index: usize },

    #[error("Failed to write tree: {0}")]
    Io(#[from] std::io::Error),
}

pub type LogicResult<T> = Result<T, LogicError>;
