//! # Text format
//!
//! The first non-blank line holds the number of nodes `n`. The nodes `Node(0)` to
//! `Node(n - 1)` are added in that order. Every following non-blank line is an edge
//! `from:to:weight` made of three integers.

use crate::error::LoadError;
use crate::representation::{Cost, LoadedGraph, NodeId, Representation};
use graphrep::graph::{Edge, Graph, Node};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Populates graphs from the text format, using only their public `Mutable` interface.
#[derive(Debug, Clone, Default)]
pub struct GraphLoader {
  /// Fail on edges the graph rejects instead of skipping them
  strict: bool,
}

impl GraphLoader {
  pub fn new() -> Self {
    Self::default()
  }

  /// Updates whether rejected edges abort loading
  pub fn strict(mut self, strict: bool) -> Self {
    self.strict = strict;
    self
  }

  /// Reads nodes and edges from `reader` into `graph` and returns the populated graph
  pub fn read_into<G, R>(&self, mut graph: G, reader: R) -> Result<G, LoadError>
  where
    G: Graph<NodeData = NodeId, Weight = Cost>,
    R: BufRead,
  {
    let mut lines = reader
      .lines()
      .enumerate()
      .map(|(i, line)| (i + 1, line))
      .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let header = match lines.next() {
      Some((_, line)) => line?,
      None => return Err(LoadError::MissingHeader),
    };
    let number_of_nodes = parse_header(&header)?;
    for id in 0..number_of_nodes {
      if !graph.add_node(Node::new(id)) {
        debug!(id, "node already present");
      }
    }

    let mut skipped = 0usize;
    for (line_number, line) in lines {
      let line = line?;
      let edge = parse_edge(&line).ok_or_else(|| LoadError::InvalidEdge {
        line_number,
        line: line.clone(),
      })?;
      let description = edge.to_string();
      if graph.add_edge(edge) {
        continue;
      }
      if self.strict {
        return Err(LoadError::RejectedEdge {
          line_number,
          edge: description,
        });
      }
      debug!(line_number, edge = %description, "edge rejected");
      skipped += 1;
    }

    info!(
      nodes = graph.number_of_nodes(),
      edges = graph.number_of_edges(),
      skipped,
      "graph loaded"
    );
    Ok(graph)
  }

  /// Reads the file at `path` into `graph`
  pub fn read_file_into<G, P>(&self, graph: G, path: P) -> Result<G, LoadError>
  where
    G: Graph<NodeData = NodeId, Weight = Cost>,
    P: AsRef<Path>,
  {
    self.read_into(graph, BufReader::new(File::open(path)?))
  }
}

/// Reads the file at `path` into a new graph of the given representation
pub fn load_graph<P: AsRef<Path>>(
  path: P,
  representation: Representation,
) -> Result<LoadedGraph, LoadError> {
  GraphLoader::new().read_file_into(LoadedGraph::new(representation), path)
}

fn parse_header(line: &str) -> Result<NodeId, LoadError> {
  line.trim().parse().map_err(|_| LoadError::InvalidHeader {
    line: line.to_string(),
  })
}

fn parse_edge(line: &str) -> Option<Edge<NodeId, Cost>> {
  lazy_static! {
    static ref EDGE_RE: Regex =
      Regex::new(r"^\s*(?P<from>\d+)\s*:\s*(?P<to>\d+)\s*:\s*(?P<weight>-?\d+)\s*$").unwrap();
  }
  let captures = EDGE_RE.captures(line)?;
  let from = captures["from"].parse().ok()?;
  let to = captures["to"].parse().ok()?;
  let weight = captures["weight"].parse().ok()?;
  Some(Edge::new(Node::new(from), Node::new(to), weight))
}

#[cfg(test)]
mod tests {
  use super::*;
  use graphrep::graph::Adjacency;
  use graphrep::graph_impl::*;
  use std::io::Cursor;

  fn load(text: &str, representation: Representation) -> Result<LoadedGraph, LoadError> {
    GraphLoader::new().read_into(LoadedGraph::new(representation), Cursor::new(text))
  }

  const ALL: [Representation; 3] = [
    Representation::List,
    Representation::Matrix,
    Representation::Edges,
  ];

  #[test]
  fn test_load_single_edge() {
    for repr in ALL.iter() {
      let graph = load("2\n0:1:7", *repr).unwrap();
      assert_eq!(graph.number_of_nodes(), 2);
      assert_eq!(graph.distance(&Node::new(0), &Node::new(1)), Ok(Some(7)));
      assert_eq!(
        graph.edges(),
        vec![Edge::new(Node::new(0), Node::new(1), 7)]
      );
    }
  }

  #[test]
  fn test_load_adds_nodes_in_order() {
    let graph = GraphLoader::new()
      .read_into(EdgeListGraph::<NodeId, Cost>::new(), Cursor::new("\n4\n\n2:3:-1\n 0 : 2 : 6 \n"))
      .unwrap();
    let nodes: Vec<_> = graph.nodes().into_iter().map(Node::into_data).collect();
    assert_eq!(nodes, vec![0, 1, 2, 3]);
    assert_eq!(graph.distance(&Node::new(2), &Node::new(3)), Ok(Some(-1)));
    assert_eq!(graph.neighbors(&Node::new(0)), Ok(vec![Node::new(2)]));
  }

  #[test]
  fn test_rejected_edges_are_skipped_unless_strict() {
    let text = "2\n0:1:1\n0:5:1\n0:1:2\n";

    let matrix = load(text, Representation::Matrix).unwrap();
    assert_eq!(matrix.number_of_edges(), 1);
    assert_eq!(matrix.distance(&Node::new(0), &Node::new(1)), Ok(Some(1)));

    let list = load(text, Representation::List).unwrap();
    assert_eq!(list.number_of_edges(), 2);

    // The flat edge list does not check endpoints.
    let edges = load(text, Representation::Edges).unwrap();
    assert_eq!(edges.number_of_edges(), 3);

    let strict = GraphLoader::new()
      .strict(true)
      .read_into(AdjacencyListGraph::<NodeId, Cost>::new(), Cursor::new(text));
    match strict {
      Err(LoadError::RejectedEdge { line_number, .. }) => assert_eq!(line_number, 3),
      other => panic!("expected a rejected edge, got {:?}", other.map(|_| ())),
    }
  }

  #[test]
  fn test_malformed_input() {
    assert!(matches!(
      load("", Representation::List),
      Err(LoadError::MissingHeader)
    ));
    assert!(matches!(
      load("two\n0:1:1", Representation::List),
      Err(LoadError::InvalidHeader { .. })
    ));
    match load("2\n0:1:1\n0-1-1\n", Representation::List) {
      Err(LoadError::InvalidEdge { line_number, line }) => {
        assert_eq!(line_number, 3);
        assert_eq!(line, "0-1-1");
      }
      other => panic!("expected an invalid edge, got {:?}", other.map(|_| ())),
    }
  }

  #[test]
  fn test_load_graph_from_file() {
    let path = std::env::temp_dir().join(format!("graphrep-loader-{}.txt", std::process::id()));
    std::fs::write(&path, "3\n0:1:5\n1:2:3\n").unwrap();

    let graph = load_graph(&path, Representation::Matrix).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(graph.representation(), Representation::Matrix);
    assert_eq!(graph.neighbors(&Node::new(0)), Ok(vec![Node::new(1)]));
    assert_eq!(graph.adjacent(&Node::new(1), &Node::new(2)), Ok(true));
    assert_eq!(graph.distance(&Node::new(0), &Node::new(2)), Ok(None));

    assert!(matches!(
      load_graph(&path, Representation::List),
      Err(LoadError::Io(_))
    ));
  }
}
