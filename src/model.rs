//! Truth-value assignments for atoms.
//!
//! Any map from atom names to `bool` can serve as a model. Lookups go through
//! the [`Model`] trait so that evaluation does not care which map the caller
//! keeps its assignment in.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// An assignment of truth values to atom names.
pub trait Model {
    /// Truth value of `atom`, or `None` if the model does not assign it.
    fn value(&self, atom: &str) -> Option<bool>;
}

impl<M: Model + ?Sized> Model for &M {
    fn value(&self, atom: &str) -> Option<bool> {
        (**self).value(atom)
    }
}

impl<K, S> Model for HashMap<K, bool, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn value(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}

impl<K> Model for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn value(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}
