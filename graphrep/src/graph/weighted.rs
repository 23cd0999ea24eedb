use std::fmt::Debug;
use std::hash::Hash;

/// Trait representing an edge weight in a weighted graph
///
/// Weights take part in edge equality and hashing, so they must be `Eq + Hash`. Integer
/// weights fit, floating point weights don't.
pub trait Weight: Copy + Eq + Hash + Debug {}
impl<T> Weight for T where T: Copy + Eq + Hash + Debug {}
