use crate::error::LoadError;
use graphrep::graph::*;
use graphrep::graph_impl::{AdjacencyListGraph, AdjacencyMatrixGraph, EdgeListGraph};
use graphrep::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Node payload of graphs read from text files
pub type NodeId = u32;
/// Edge weight of graphs read from text files
pub type Cost = i64;

/// Selects one of the graph representations at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
  List,
  Matrix,
  Edges,
}

impl FromStr for Representation {
  type Err = LoadError;

  fn from_str(s: &str) -> Result<Self, LoadError> {
    match s.to_lowercase().as_str() {
      "list" | "adjacency-list" => Ok(Representation::List),
      "matrix" | "adjacency-matrix" => Ok(Representation::Matrix),
      "edges" | "edge-list" | "object-oriented" => Ok(Representation::Edges),
      _ => Err(LoadError::UnknownRepresentation(s.to_string())),
    }
  }
}

impl Display for Representation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Representation::List => "adjacency-list",
      Representation::Matrix => "adjacency-matrix",
      Representation::Edges => "edge-list",
    };
    f.write_str(name)
  }
}

/// Any of the three representations, for callers that pick one at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LoadedGraph {
  List(AdjacencyListGraph<NodeId, Cost>),
  Matrix(AdjacencyMatrixGraph<NodeId, Cost>),
  Edges(EdgeListGraph<NodeId, Cost>),
}

macro_rules! dispatch {
  ($graph:expr, $inner:ident => $call:expr) => {
    match $graph {
      LoadedGraph::List($inner) => $call,
      LoadedGraph::Matrix($inner) => $call,
      LoadedGraph::Edges($inner) => $call,
    }
  };
}

impl LoadedGraph {
  /// Creates an empty graph of the given representation
  pub fn new(representation: Representation) -> Self {
    match representation {
      Representation::List => LoadedGraph::List(AdjacencyListGraph::new()),
      Representation::Matrix => LoadedGraph::Matrix(AdjacencyMatrixGraph::new()),
      Representation::Edges => LoadedGraph::Edges(EdgeListGraph::new()),
    }
  }

  pub fn representation(&self) -> Representation {
    match self {
      LoadedGraph::List(_) => Representation::List,
      LoadedGraph::Matrix(_) => Representation::Matrix,
      LoadedGraph::Edges(_) => Representation::Edges,
    }
  }
}

impl GraphBase for LoadedGraph {
  type NodeData = NodeId;
  type Weight = Cost;
}

impl Adjacency for LoadedGraph {
  fn adjacent(&self, from: &Node<NodeId>, to: &Node<NodeId>) -> Result<bool, GraphError> {
    dispatch!(self, graph => graph.adjacent(from, to))
  }

  fn neighbors(&self, node: &Node<NodeId>) -> Result<Vec<Node<NodeId>>, GraphError> {
    dispatch!(self, graph => graph.neighbors(node))
  }

  fn distance(&self, from: &Node<NodeId>, to: &Node<NodeId>) -> Result<Option<Cost>, GraphError> {
    dispatch!(self, graph => graph.distance(from, to))
  }

  fn contains_node(&self, node: &Node<NodeId>) -> bool {
    dispatch!(self, graph => graph.contains_node(node))
  }

  fn number_of_nodes(&self) -> usize {
    dispatch!(self, graph => graph.number_of_nodes())
  }

  fn number_of_edges(&self) -> usize {
    dispatch!(self, graph => graph.number_of_edges())
  }

  fn nodes(&self) -> Vec<Node<NodeId>> {
    dispatch!(self, graph => graph.nodes())
  }

  fn edges(&self) -> Vec<Edge<NodeId, Cost>> {
    dispatch!(self, graph => graph.edges())
  }
}

impl Mutable for LoadedGraph {
  fn add_node(&mut self, node: Node<NodeId>) -> bool {
    dispatch!(self, graph => graph.add_node(node))
  }

  fn remove_node(&mut self, node: &Node<NodeId>) -> bool {
    dispatch!(self, graph => graph.remove_node(node))
  }

  fn add_edge(&mut self, edge: Edge<NodeId, Cost>) -> bool {
    dispatch!(self, graph => graph.add_edge(edge))
  }

  fn remove_edge(&mut self, edge: &Edge<NodeId, Cost>) -> bool {
    dispatch!(self, graph => graph.remove_edge(edge))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_representation() {
    assert_eq!("list".parse::<Representation>().unwrap(), Representation::List);
    assert_eq!("Adjacency-Matrix".parse::<Representation>().unwrap(), Representation::Matrix);
    assert_eq!("object-oriented".parse::<Representation>().unwrap(), Representation::Edges);
    assert!("tree".parse::<Representation>().is_err());

    for repr in [Representation::List, Representation::Matrix, Representation::Edges].iter() {
      assert_eq!(repr.to_string().parse::<Representation>().unwrap(), *repr);
      assert_eq!(LoadedGraph::new(*repr).representation(), *repr);
    }
  }

  #[test]
  fn test_loaded_graph_delegates() {
    let mut graph = LoadedGraph::new(Representation::Matrix);
    assert!(graph.add_node(Node::new(0)));
    assert!(graph.add_node(Node::new(1)));
    assert!(graph.add_edge(Edge::new(Node::new(0), Node::new(1), 4)));
    assert!(!graph.add_edge(Edge::new(Node::new(0), Node::new(1), 5)));
    assert_eq!(graph.distance(&Node::new(0), &Node::new(1)), Ok(Some(4)));

    assert!(graph.remove_node(&Node::new(0)));
    assert_eq!(graph.number_of_nodes(), 1);
    assert_eq!(graph.number_of_edges(), 0);
  }
}
