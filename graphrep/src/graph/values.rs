use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// A graph vertex, identified purely by the value of its payload.
///
/// Nodes are not ordered. Any order a representation stores them in is an artifact of that
/// representation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Node<T>(T);

impl<T> Node<T> {
  pub fn new(data: T) -> Self {
    Node(data)
  }

  pub fn data(&self) -> &T {
    &self.0
  }

  pub fn into_data(self) -> T {
    self.0
  }
}

impl<T> From<T> for Node<T> {
  fn from(data: T) -> Self {
    Node(data)
  }
}

impl<T: Display> Display for Node<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "Node({})", self.0)
  }
}

/// A directed, weighted connection between two nodes.
///
/// `Edge(a, b, w)` and `Edge(b, a, w)` are different edges, and so are two edges between the
/// same pair of nodes with different weights.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Edge<T, W> {
  from_node: Node<T>,
  to_node: Node<T>,
  weight: W,
}

impl<T, W: Copy> Edge<T, W> {
  pub fn new(from_node: Node<T>, to_node: Node<T>, weight: W) -> Self {
    Edge {
      from_node,
      to_node,
      weight,
    }
  }

  pub fn from_node(&self) -> &Node<T> {
    &self.from_node
  }

  pub fn to_node(&self) -> &Node<T> {
    &self.to_node
  }

  pub fn weight(&self) -> W {
    self.weight
  }

  /// Returns true if the edge starts at `from` and ends at `to`, whatever its weight
  pub fn connects(&self, from: &Node<T>, to: &Node<T>) -> bool
  where
    T: PartialEq,
  {
    self.from_node == *from && self.to_node == *to
  }

  /// Returns true if `node` is one of the endpoints
  pub fn touches(&self, node: &Node<T>) -> bool
  where
    T: PartialEq,
  {
    self.from_node == *node || self.to_node == *node
  }

  /// Returns the same edge traveled in the opposite direction
  pub fn reversed(&self) -> Self
  where
    T: Clone,
  {
    Edge::new(self.to_node.clone(), self.from_node.clone(), self.weight)
  }
}

impl<T: Display, W: Display> Display for Edge<T, W> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(
      f,
      "Edge(from {}, to {}, weight {})",
      self.from_node, self.to_node, self.weight
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_node_equality_is_by_value() {
    let a = Node::new(String::from("a"));
    let b = Node::from(String::from("a"));
    assert_eq!(a, b);
    assert_ne!(a, Node::new(String::from("b")));

    let set: HashSet<_> = vec![a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn test_edge_equality_includes_weight_and_direction() {
    let e = Edge::new(Node::new(0), Node::new(1), 5);
    assert_eq!(e, Edge::new(Node::new(0), Node::new(1), 5));
    assert_ne!(e, Edge::new(Node::new(0), Node::new(1), 6));
    assert_ne!(e, e.reversed());
    assert_eq!(e.reversed().reversed(), e);

    assert!(e.connects(&Node::new(0), &Node::new(1)));
    assert!(!e.connects(&Node::new(1), &Node::new(0)));
    assert!(e.touches(&Node::new(1)));
    assert!(!e.touches(&Node::new(2)));
  }

  #[test]
  fn test_display() {
    let e = Edge::new(Node::new(0), Node::new(1), 7);
    assert_eq!(Node::new(3).to_string(), "Node(3)");
    assert_eq!(e.to_string(), "Edge(from Node(0), to Node(1), weight 7)");
  }
}
