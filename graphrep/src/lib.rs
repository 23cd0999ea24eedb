//! Directed, weighted graphs behind one interface, with three storage strategies to choose from.

pub mod error;
pub mod graph;
pub mod graph_impl;

mod test_utils;

pub use error::GraphError;
