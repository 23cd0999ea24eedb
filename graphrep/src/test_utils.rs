#![cfg(test)]

use crate::graph::*;

/// Builds a graph of any representation from node payloads and `(from, to, weight)` triples.
/// Panics if one of the inputs is rejected, so that tests fail early on bad fixtures.
pub fn graph_from_nodes_and_edges<G>(
  nodes: Vec<G::NodeData>,
  edges: Vec<(G::NodeData, G::NodeData, G::Weight)>,
) -> G
where
  G: Graph + Default,
{
  let mut graph = G::default();
  for data in nodes {
    assert!(graph.add_node(Node::new(data)), "duplicate node in fixture");
  }
  for (from, to, weight) in edges {
    assert!(
      graph.add_edge(Edge::new(Node::new(from), Node::new(to), weight)),
      "edge rejected in fixture"
    );
  }
  graph
}

/// Three nodes `0, 1, 2` with the edges `0 -> 1 (5)` and `1 -> 2 (3)`
pub fn small_chain<G>() -> G
where
  G: Graph<NodeData = u32, Weight = i64> + Default,
{
  graph_from_nodes_and_edges(vec![0, 1, 2], vec![(0, 1, 5), (1, 2, 3)])
}

pub fn node(data: u32) -> Node<u32> {
  Node::new(data)
}

pub fn edge(from: u32, to: u32, weight: i64) -> Edge<u32, i64> {
  Edge::new(Node::new(from), Node::new(to), weight)
}
