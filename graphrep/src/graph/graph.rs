use crate::error::GraphError;
use crate::graph::{Edge, Node, Weight};
use std::fmt::Debug;
use std::hash::Hash;

// ====== Basic traits =====

/// Requirements for a node payload
pub trait Identifier: Eq + Hash + Clone + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Clone + Debug {}

/// Defines the payload and weight types stored by a graph representation
pub trait GraphBase {
  type NodeData: Identifier;
  type Weight: Weight;
}

/// Shorthand for the node type of a graph
pub type NodeOf<G> = Node<<G as GraphBase>::NodeData>;

/// Shorthand for the edge type of a graph
pub type EdgeOf<G> = Edge<<G as GraphBase>::NodeData, <G as GraphBase>::Weight>;

// ====== Queries =====

/// Read side of a graph representation.
///
/// The three queries `adjacent`, `neighbors` and `distance` share one policy for nodes the
/// representation does not store: either all of them return an empty answer (`false`, no
/// neighbors, no distance) or all of them fail with [`GraphError::NodeNotFound`]. Which one
/// applies is documented on each representation.
pub trait Adjacency: GraphBase {
  /// Returns `true` if there is a direct edge from `from` to `to`.
  fn adjacent(&self, from: &NodeOf<Self>, to: &NodeOf<Self>) -> Result<bool, GraphError>;

  /// Returns the targets of all outgoing edges of `node`.
  fn neighbors(&self, node: &NodeOf<Self>) -> Result<Vec<NodeOf<Self>>, GraphError>;

  /// Returns the weight of the direct edge from `from` to `to`, if there is one.
  ///
  /// This is the weight of a single edge, not a shortest path distance.
  fn distance(
    &self,
    from: &NodeOf<Self>,
    to: &NodeOf<Self>,
  ) -> Result<Option<Self::Weight>, GraphError>;

  fn contains_node(&self, node: &NodeOf<Self>) -> bool;

  fn number_of_nodes(&self) -> usize;

  fn number_of_edges(&self) -> usize;

  /// All stored nodes in storage order
  fn nodes(&self) -> Vec<NodeOf<Self>>;

  /// All stored edges in storage order
  fn edges(&self) -> Vec<EdgeOf<Self>>;
}

// ====== Mutation =====

/// Write side of a graph representation.
///
/// Every operation reports success with `true`. A `false` result means a precondition did not
/// hold (duplicate insert, missing endpoint, absent target) and the graph was left untouched.
pub trait Mutable: GraphBase {
  /// Adds a node unless an equal node is already stored.
  fn add_node(&mut self, node: NodeOf<Self>) -> bool;

  /// Removes a node together with every edge that starts or ends at it.
  fn remove_node(&mut self, node: &NodeOf<Self>) -> bool;

  fn add_edge(&mut self, edge: EdgeOf<Self>) -> bool;

  fn remove_edge(&mut self, edge: &EdgeOf<Self>) -> bool;
}

/// A full graph representation: queries plus mutation
pub trait Graph: Adjacency + Mutable {}
impl<G> Graph for G where G: Adjacency + Mutable {}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeData = G::NodeData;
  type Weight = G::Weight;
}

impl<'a, G: Adjacency> Adjacency for &'a G {
  fn adjacent(&self, from: &NodeOf<Self>, to: &NodeOf<Self>) -> Result<bool, GraphError> {
    (*self).adjacent(from, to)
  }

  fn neighbors(&self, node: &NodeOf<Self>) -> Result<Vec<NodeOf<Self>>, GraphError> {
    (*self).neighbors(node)
  }

  fn distance(
    &self,
    from: &NodeOf<Self>,
    to: &NodeOf<Self>,
  ) -> Result<Option<Self::Weight>, GraphError> {
    (*self).distance(from, to)
  }

  fn contains_node(&self, node: &NodeOf<Self>) -> bool {
    (*self).contains_node(node)
  }

  fn number_of_nodes(&self) -> usize {
    (*self).number_of_nodes()
  }

  fn number_of_edges(&self) -> usize {
    (*self).number_of_edges()
  }

  fn nodes(&self) -> Vec<NodeOf<Self>> {
    (*self).nodes()
  }

  fn edges(&self) -> Vec<EdgeOf<Self>> {
    (*self).edges()
  }
}
