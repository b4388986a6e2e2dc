//! Evaluation of logic trees against a model.
//!
//! Two evaluators share the same semantics:
//!
//! - [`Node::eval`] recurses over the tree, one stack frame per level.
//! - [`Node::eval_iterative`] keeps its own stack, so very deep trees do not
//!   exhaust the call stack.
//!
//! Both short-circuit AND/OR from left to right, so a child after the deciding
//! one is never evaluated (and cannot fail). An empty AND is `true`, an empty
//! OR is `false`.
//!
//! ```
//! use std::collections::HashMap;
//! use logic_tree::node::Node;
//!
//! let a = Node::atom("a");
//! let b = Node::atom("b");
//! let model = HashMap::from([("a", true), ("b", false)]);
//!
//! let f = !(a & b);
//! assert!(f.eval(&model).unwrap());
//! ```

use log::{debug, trace};

use crate::error::{LogicError, LogicResult};
use crate::model::Model;
use crate::node::Node;

fn lookup_atom<M: Model + ?Sized>(model: &M, name: &str) -> LogicResult<bool> {
    model
        .value(name)
        .ok_or_else(|| LogicError::MissingAtom(name.to_string()))
}

/// The sole operand of a NOT node.
fn not_operand(children: &[Node]) -> LogicResult<&Node> {
    match children {
        [child] => Ok(child),
        _ => Err(LogicError::NotArity {
            found: children.len(),
        }),
    }
}

impl Node {
    /// Evaluates the tree rooted at this node against `model`.
    pub fn eval<M: Model + ?Sized>(&self, model: &M) -> LogicResult<bool> {
        trace!("eval(root={})", self.kind());
        self.eval_rec(model).inspect_err(|e| debug!("eval failed: {}", e))
    }

    fn eval_rec<M: Model + ?Sized>(&self, model: &M) -> LogicResult<bool> {
        match self {
            Node::Atom(name) => lookup_atom(model, name),
            Node::Not(children) => Ok(!not_operand(children)?.eval_rec(model)?),
            Node::And(children) => {
                for child in children {
                    if !child.eval_rec(model)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Node::Or(children) => {
                for child in children {
                    if child.eval_rec(model)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    /// Evaluates the tree like [`Node::eval`], using an explicit stack instead of recursion.
    pub fn eval_iterative<M: Model + ?Sized>(&self, model: &M) -> LogicResult<bool> {
        trace!("eval_iterative(root={})", self.kind());
        self.eval_stack(model)
            .inspect_err(|e| debug!("eval_iterative failed: {}", e))
    }

    fn eval_stack<M: Model + ?Sized>(&self, model: &M) -> LogicResult<bool> {
        struct Frame<'a> {
            node: &'a Node,
            /// Index of the next child to descend into.
            next: usize,
        }

        enum Step<'a> {
            Descend(&'a Node),
            Finish(bool),
        }

        // Ancestors of `current`, innermost last.
        let mut stack: Vec<Frame> = Vec::new();
        let mut current = Frame { node: self, next: 0 };
        // Value of the most recently finished frame, consumed by its parent.
        let mut result: Option<bool> = None;

        loop {
            let node = current.node;
            let step = match node {
                Node::Atom(name) => Step::Finish(lookup_atom(model, name)?),
                Node::Not(children) => match result.take() {
                    None => Step::Descend(not_operand(children)?),
                    Some(value) => Step::Finish(!value),
                },
                Node::And(children) => match result.take() {
                    Some(false) => Step::Finish(false),
                    _ => match children.get(current.next) {
                        Some(child) => {
                            current.next += 1;
                            Step::Descend(child)
                        }
                        None => Step::Finish(true),
                    },
                },
                Node::Or(children) => match result.take() {
                    Some(true) => Step::Finish(true),
                    _ => match children.get(current.next) {
                        Some(child) => {
                            current.next += 1;
                            Step::Descend(child)
                        }
                        None => Step::Finish(false),
                    },
                },
            };

            match step {
                Step::Descend(child) => {
                    let child = Frame {
                        node: child,
                        next: 0,
                    };
                    stack.push(std::mem::replace(&mut current, child));
                }
                Step::Finish(value) => match stack.pop() {
                    Some(parent) => {
                        current = parent;
                        result = Some(value);
                    }
                    None => return Ok(value),
                },
            }
        }
    }
}
