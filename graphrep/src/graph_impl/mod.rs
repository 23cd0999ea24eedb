//! Graph data structures.
//!
//! The module defines three interchangeable in-memory representations of a directed, weighted
//! graph. They implement the same [`Graph`](crate::graph::Graph) contract but differ in layout and cost:
//! - [`AdjacencyListGraph`] maps every node to its outgoing edges. Queries on a node only look at that node's edges.
//! - [`AdjacencyMatrixGraph`] keeps a square matrix of optional weights. Edge lookups are constant once the node indices are known, but memory grows quadratically and at most one edge exists per pair of nodes.
//! - [`EdgeListGraph`] keeps flat lists of nodes and edges. Cheapest to build, every query scans all edges.
//!
//! None of them is synchronized; share one between threads only behind an external lock.

mod adjacency_list;
mod adjacency_matrix;
mod edge_list;
mod common;

pub use adjacency_list::*;
pub use adjacency_matrix::*;
pub use edge_list::*;
