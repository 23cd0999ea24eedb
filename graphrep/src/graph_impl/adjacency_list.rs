use super::common::*;
use crate::error::GraphError;
use crate::graph::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;
use tracing::trace;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Entry<T, W> {
  node: Node<T>,
  out_edges: Vec<Edge<T, W>>,
}

/// Graph which maps every node to the sequence of its outgoing edges.
///
/// Parallel edges between the same pair of nodes are allowed as long as their weights differ.
/// Queries about a source node that was never added (or was removed) fail with
/// [`GraphError::NodeNotFound`]; an absent target node just means there is no such edge.
/// This includes `distance`, which fails instead of answering "no distance" so that all three
/// queries treat an absent source the same way.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
  try_from = "RawAdjacencyList<T, W>",
  bound(deserialize = "T: Identifier + Deserialize<'de>, W: Weight + Deserialize<'de>")
)]
pub struct AdjacencyListGraph<T, W> {
  // Entries in insertion order.
  entries: Vec<Entry<T, W>>,
  // Position of every node in `entries`. Must be updated whenever `entries` shifts.
  #[serde(skip)]
  index: HashMap<Node<T>, usize>,
}

/// Serialized form, checked before it becomes a graph
#[derive(Deserialize)]
struct RawAdjacencyList<T, W> {
  entries: Vec<Entry<T, W>>,
}

impl<T: Identifier, W: Weight> TryFrom<RawAdjacencyList<T, W>> for AdjacencyListGraph<T, W> {
  type Error = GraphError;

  fn try_from(raw: RawAdjacencyList<T, W>) -> Result<Self, GraphError> {
    let mut index = HashMap::with_capacity(raw.entries.len());
    for (i, entry) in raw.entries.iter().enumerate() {
      if index.insert(entry.node.clone(), i).is_some() {
        return Err(GraphError::InvalidData(format!(
          "duplicate node {:?}",
          entry.node
        )));
      }
    }

    for entry in raw.entries.iter() {
      for (i, edge) in entry.out_edges.iter().enumerate() {
        if edge.from_node() != &entry.node || !index.contains_key(edge.to_node()) {
          return Err(GraphError::InvalidData(format!(
            "edge {:?} stored under {:?}",
            edge, entry.node
          )));
        }
        if entry.out_edges[..i].contains(edge) {
          return Err(GraphError::InvalidData(format!("duplicate edge {:?}", edge)));
        }
      }
    }

    Ok(Self {
      entries: raw.entries,
      index,
    })
  }
}

impl<T: Identifier, W: Weight> AdjacencyListGraph<T, W> {
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
      index: HashMap::new(),
    }
  }

  fn out_edges(&self, node: &Node<T>) -> Option<&Vec<Edge<T, W>>> {
    self.index.get(node).map(|&i| &self.entries[i].out_edges)
  }

  fn out_edges_mut(&mut self, node: &Node<T>) -> Option<&mut Vec<Edge<T, W>>> {
    let i = *self.index.get(node)?;
    Some(&mut self.entries[i].out_edges)
  }

  fn existing_out_edges(&self, node: &Node<T>) -> Result<&Vec<Edge<T, W>>, GraphError> {
    self
      .out_edges(node)
      .ok_or_else(|| GraphError::node_not_found(node))
  }

  fn has_endpoints(&self, edge: &Edge<T, W>) -> bool {
    self.index.contains_key(edge.from_node()) && self.index.contains_key(edge.to_node())
  }
}

impl<T: Identifier, W: Weight> Default for AdjacencyListGraph<T, W> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Identifier, W: Weight> GraphBase for AdjacencyListGraph<T, W> {
  type NodeData = T;
  type Weight = W;
}

impl<T: Identifier, W: Weight> Adjacency for AdjacencyListGraph<T, W> {
  fn adjacent(&self, from: &Node<T>, to: &Node<T>) -> Result<bool, GraphError> {
    Ok(
      self
        .existing_out_edges(from)?
        .iter()
        .any(|edge| edge.to_node() == to),
    )
  }

  fn neighbors(&self, node: &Node<T>) -> Result<Vec<Node<T>>, GraphError> {
    Ok(
      self
        .existing_out_edges(node)?
        .iter()
        .map(|edge| edge.to_node().clone())
        .collect(),
    )
  }

  fn distance(&self, from: &Node<T>, to: &Node<T>) -> Result<Option<W>, GraphError> {
    Ok(
      self
        .existing_out_edges(from)?
        .iter()
        .find(|edge| edge.to_node() == to)
        .map(|edge| edge.weight()),
    )
  }

  fn contains_node(&self, node: &Node<T>) -> bool {
    self.index.contains_key(node)
  }

  fn number_of_nodes(&self) -> usize {
    self.entries.len()
  }

  fn number_of_edges(&self) -> usize {
    self.entries.iter().map(|entry| entry.out_edges.len()).sum()
  }

  fn nodes(&self) -> Vec<Node<T>> {
    self.entries.iter().map(|entry| entry.node.clone()).collect()
  }

  fn edges(&self) -> Vec<Edge<T, W>> {
    self
      .entries
      .iter()
      .flat_map(|entry| entry.out_edges.iter().cloned())
      .collect()
  }
}

impl<T: Identifier, W: Weight> Mutable for AdjacencyListGraph<T, W> {
  fn add_node(&mut self, node: Node<T>) -> bool {
    if self.index.contains_key(&node) {
      trace!(?node, "add_node rejected: node already present");
      return false;
    }
    self.index.insert(node.clone(), self.entries.len());
    self.entries.push(Entry {
      node,
      out_edges: Vec::new(),
    });
    true
  }

  fn remove_node(&mut self, node: &Node<T>) -> bool {
    let position = match self.index.remove(node) {
      Some(position) => position,
      None => {
        trace!(?node, "remove_node rejected: node not present");
        return false;
      }
    };
    self.entries.remove(position);

    // Entries after the removed one moved down by one.
    for (i, entry) in self.entries.iter().enumerate().skip(position) {
      self.index.insert(entry.node.clone(), i);
    }

    // The node's own outgoing edges left with its entry, only incoming ones remain.
    for entry in self.entries.iter_mut() {
      entry.out_edges.retain(|edge| edge.to_node() != node);
    }
    true
  }

  fn add_edge(&mut self, edge: Edge<T, W>) -> bool {
    if !self.has_endpoints(&edge) {
      trace!(?edge, "add_edge rejected: endpoint not present");
      return false;
    }
    match self.out_edges_mut(edge.from_node()) {
      Some(out_edges) => {
        let added = push_unique(out_edges, edge);
        if !added {
          trace!("add_edge rejected: edge already present");
        }
        added
      }
      None => false,
    }
  }

  fn remove_edge(&mut self, edge: &Edge<T, W>) -> bool {
    if !self.has_endpoints(edge) {
      trace!(?edge, "remove_edge rejected: endpoint not present");
      return false;
    }
    let removed = self
      .out_edges_mut(edge.from_node())
      .map_or(false, |out_edges| remove_first(out_edges, edge));
    if !removed {
      trace!(?edge, "remove_edge rejected: edge not present");
    }
    removed
  }
}
