use super::common::*;
use crate::error::GraphError;
use crate::graph::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::TryFrom;
use tracing::trace;

/// Graph which keeps nodes and edges as two flat lists. Every query scans the edge list.
///
/// Unlike the other representations, `add_edge` does not check that the endpoints were added as
/// nodes. Such edges are stored and answer queries like any other edge. Removing one of their
/// endpoints drops them only if that endpoint was added as a node.
///
/// Queries about absent nodes are answered with `false`, no neighbors, and no distance.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
  try_from = "RawEdgeList<T, W>",
  bound(deserialize = "T: Identifier + Deserialize<'de>, W: Weight + Deserialize<'de>")
)]
pub struct EdgeListGraph<T, W> {
  nodes: Vec<Node<T>>,
  edges: Vec<Edge<T, W>>,
}

/// Serialized form, checked before it becomes a graph
#[derive(Deserialize)]
struct RawEdgeList<T, W> {
  nodes: Vec<Node<T>>,
  edges: Vec<Edge<T, W>>,
}

impl<T: Identifier, W: Weight> TryFrom<RawEdgeList<T, W>> for EdgeListGraph<T, W> {
  type Error = GraphError;

  fn try_from(raw: RawEdgeList<T, W>) -> Result<Self, GraphError> {
    let distinct_nodes: HashSet<&Node<T>> = raw.nodes.iter().collect();
    let distinct_edges: HashSet<&Edge<T, W>> = raw.edges.iter().collect();
    if distinct_nodes.len() != raw.nodes.len() {
      return Err(GraphError::InvalidData(String::from("duplicate nodes")));
    }
    if distinct_edges.len() != raw.edges.len() {
      return Err(GraphError::InvalidData(String::from("duplicate edges")));
    }
    Ok(Self {
      nodes: raw.nodes,
      edges: raw.edges,
    })
  }
}

impl<T: Identifier, W: Weight> EdgeListGraph<T, W> {
  pub fn new() -> Self {
    Self {
      nodes: Vec::new(),
      edges: Vec::new(),
    }
  }

  fn edges_between<'a>(
    &'a self,
    from: &'a Node<T>,
    to: &'a Node<T>,
  ) -> impl Iterator<Item = &'a Edge<T, W>> + 'a {
    self.edges.iter().filter(move |edge| edge.connects(from, to))
  }
}

impl<T: Identifier, W: Weight> Default for EdgeListGraph<T, W> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Identifier, W: Weight> GraphBase for EdgeListGraph<T, W> {
  type NodeData = T;
  type Weight = W;
}

impl<T: Identifier, W: Weight> Adjacency for EdgeListGraph<T, W> {
  fn adjacent(&self, from: &Node<T>, to: &Node<T>) -> Result<bool, GraphError> {
    Ok(self.edges_between(from, to).next().is_some())
  }

  /// Distinct targets in order of their first appearance
  fn neighbors(&self, node: &Node<T>) -> Result<Vec<Node<T>>, GraphError> {
    let mut neighbors = Vec::new();
    for edge in self.edges.iter().filter(|edge| edge.from_node() == node) {
      push_unique(&mut neighbors, edge.to_node().clone());
    }
    Ok(neighbors)
  }

  fn distance(&self, from: &Node<T>, to: &Node<T>) -> Result<Option<W>, GraphError> {
    Ok(self.edges_between(from, to).next().map(|edge| edge.weight()))
  }

  fn contains_node(&self, node: &Node<T>) -> bool {
    self.nodes.contains(node)
  }

  fn number_of_nodes(&self) -> usize {
    self.nodes.len()
  }

  fn number_of_edges(&self) -> usize {
    self.edges.len()
  }

  fn nodes(&self) -> Vec<Node<T>> {
    self.nodes.clone()
  }

  fn edges(&self) -> Vec<Edge<T, W>> {
    self.edges.clone()
  }
}

impl<T: Identifier, W: Weight> Mutable for EdgeListGraph<T, W> {
  fn add_node(&mut self, node: Node<T>) -> bool {
    if self.nodes.contains(&node) {
      trace!(?node, "add_node rejected: node already present");
      return false;
    }
    self.nodes.push(node);
    true
  }

  fn remove_node(&mut self, node: &Node<T>) -> bool {
    if !remove_first(&mut self.nodes, node) {
      trace!(?node, "remove_node rejected: node not present");
      return false;
    }
    self.edges.retain(|edge| !edge.touches(node));
    true
  }

  fn add_edge(&mut self, edge: Edge<T, W>) -> bool {
    if self.edges.contains(&edge) {
      trace!(?edge, "add_edge rejected: edge already present");
      return false;
    }
    self.edges.push(edge);
    true
  }

  fn remove_edge(&mut self, edge: &Edge<T, W>) -> bool {
    let removed = remove_first(&mut self.edges, edge);
    if !removed {
      trace!(?edge, "remove_edge rejected: edge not present");
    }
    removed
  }
}
