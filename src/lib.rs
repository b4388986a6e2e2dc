//! # logic-tree: propositional logic expression trees
//!
//! **`logic-tree`** represents sentences of propositional logic as expression trees
//! over four node kinds (AND, OR, NOT, ATOM) and evaluates them against a *model*,
//! an assignment of truth values to atom names.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use logic_tree::node::Node;
//!
//! // 1. Build the tree bottom-up
//! let a = Node::atom("a");
//! let b = Node::atom("b");
//! let f = Node::or([!(a.clone() & b.clone()), !(a | b)]);
//!
//! // 2. Evaluate against a model
//! let model = HashMap::from([("a", true), ("b", false)]);
//! assert!(f.eval(&model).unwrap());
//!
//! // 3. Render it
//! assert_eq!(f.to_tree_string().unwrap(), "v\n  ~\n    &\n      a\n      b\n  ~\n    v\n      a\n      b\n");
//! ```
//!
//! ## Core Components
//!
//! - **[`node`]**: The [`Node`][crate::node::Node] sum type, its constructors and accessors.
//! - **[`model`]**: The [`Model`][crate::model::Model] trait for truth assignments.
//! - **[`eval`]**: Recursive and stack-based evaluators.
//! - **[`print`]**: Indented text rendering.
//! - **[`error`]**: The [`LogicError`][crate::error::LogicError] type.

pub mod error;
pub mod eval;
pub mod model;
pub mod node;
pub mod print;
