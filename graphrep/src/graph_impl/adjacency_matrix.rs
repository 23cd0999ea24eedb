use super::common::*;
use crate::error::GraphError;
use crate::graph::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::TryFrom;
use tracing::trace;

/// Graph which stores edge weights in a square matrix.
///
/// The position of a node in `nodes` is its row and column index, so indices are positional
/// and shift down when an earlier node is removed. Index lookup is a linear scan over `nodes`.
///
/// A cell holds at most one weight, so edges are unique per `(from, to)` pair: adding a second
/// edge between the same nodes is rejected, whatever its weight. Removing an edge clears the
/// cell without comparing the stored weight.
///
/// Queries about absent nodes are answered with `false`, no neighbors, and no distance.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
  try_from = "RawAdjacencyMatrix<T, W>",
  bound(deserialize = "T: Identifier + Deserialize<'de>, W: Weight + Deserialize<'de>")
)]
pub struct AdjacencyMatrixGraph<T, W> {
  nodes: Vec<Node<T>>,
  // matrix[i][j] is the weight of the edge from nodes[i] to nodes[j]
  matrix: Vec<Vec<Option<W>>>,
}

/// Serialized form, checked before it becomes a graph
#[derive(Deserialize)]
struct RawAdjacencyMatrix<T, W> {
  nodes: Vec<Node<T>>,
  matrix: Vec<Vec<Option<W>>>,
}

impl<T: Identifier, W: Weight> TryFrom<RawAdjacencyMatrix<T, W>> for AdjacencyMatrixGraph<T, W> {
  type Error = GraphError;

  fn try_from(raw: RawAdjacencyMatrix<T, W>) -> Result<Self, GraphError> {
    let size = raw.nodes.len();
    if raw.matrix.len() != size || raw.matrix.iter().any(|row| row.len() != size) {
      return Err(GraphError::InvalidData(format!(
        "matrix is not {} x {}",
        size, size
      )));
    }
    let distinct: HashSet<&Node<T>> = raw.nodes.iter().collect();
    if distinct.len() != size {
      return Err(GraphError::InvalidData(String::from("duplicate nodes")));
    }
    Ok(Self {
      nodes: raw.nodes,
      matrix: raw.matrix,
    })
  }
}

impl<T: Identifier, W: Weight> AdjacencyMatrixGraph<T, W> {
  pub fn new() -> Self {
    Self {
      nodes: Vec::new(),
      matrix: Vec::new(),
    }
  }

  fn index_of(&self, node: &Node<T>) -> Option<usize> {
    position_of(&self.nodes, node)
  }

  /// Row and column of the cell for the edge `from -> to`, if both nodes are present.
  fn cell_of(&self, from: &Node<T>, to: &Node<T>) -> Option<(usize, usize)> {
    Some((self.index_of(from)?, self.index_of(to)?))
  }

  fn cell(&self, from: &Node<T>, to: &Node<T>) -> Option<W> {
    let (row, column) = self.cell_of(from, to)?;
    self.matrix[row][column]
  }

  #[cfg(test)]
  fn is_square(&self) -> bool {
    self.matrix.len() == self.nodes.len()
      && self.matrix.iter().all(|row| row.len() == self.nodes.len())
  }
}

impl<T: Identifier, W: Weight> Default for AdjacencyMatrixGraph<T, W> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Identifier, W: Weight> GraphBase for AdjacencyMatrixGraph<T, W> {
  type NodeData = T;
  type Weight = W;
}

impl<T: Identifier, W: Weight> Adjacency for AdjacencyMatrixGraph<T, W> {
  fn adjacent(&self, from: &Node<T>, to: &Node<T>) -> Result<bool, GraphError> {
    Ok(self.cell(from, to).is_some())
  }

  fn neighbors(&self, node: &Node<T>) -> Result<Vec<Node<T>>, GraphError> {
    let row = match self.index_of(node) {
      Some(row) => &self.matrix[row],
      None => return Ok(Vec::new()),
    };
    Ok(
      row
        .iter()
        .zip(self.nodes.iter())
        .filter(|(cell, _)| cell.is_some())
        .map(|(_, neighbor)| neighbor.clone())
        .collect(),
    )
  }

  fn distance(&self, from: &Node<T>, to: &Node<T>) -> Result<Option<W>, GraphError> {
    Ok(self.cell(from, to))
  }

  fn contains_node(&self, node: &Node<T>) -> bool {
    self.index_of(node).is_some()
  }

  fn number_of_nodes(&self) -> usize {
    self.nodes.len()
  }

  fn number_of_edges(&self) -> usize {
    self
      .matrix
      .iter()
      .map(|row| row.iter().filter(|cell| cell.is_some()).count())
      .sum()
  }

  fn nodes(&self) -> Vec<Node<T>> {
    self.nodes.clone()
  }

  /// Edges rebuilt from the non-empty cells in row-major order
  fn edges(&self) -> Vec<Edge<T, W>> {
    let mut edges = Vec::new();
    for (from, row) in self.nodes.iter().zip(self.matrix.iter()) {
      for (to, cell) in self.nodes.iter().zip(row.iter()) {
        if let Some(weight) = cell {
          edges.push(Edge::new(from.clone(), to.clone(), *weight));
        }
      }
    }
    edges
  }
}

impl<T: Identifier, W: Weight> Mutable for AdjacencyMatrixGraph<T, W> {
  fn add_node(&mut self, node: Node<T>) -> bool {
    if self.contains_node(&node) {
      trace!(?node, "add_node rejected: node already present");
      return false;
    }
    self.nodes.push(node);

    // Grow every existing row by one column, then add the new row.
    for row in self.matrix.iter_mut() {
      row.push(None);
    }
    self.matrix.push(vec![None; self.nodes.len()]);
    true
  }

  fn remove_node(&mut self, node: &Node<T>) -> bool {
    let index = match self.index_of(node) {
      Some(index) => index,
      None => {
        trace!(?node, "remove_node rejected: node not present");
        return false;
      }
    };
    self.nodes.remove(index);
    self.matrix.remove(index);
    for row in self.matrix.iter_mut() {
      row.remove(index);
    }
    true
  }

  fn add_edge(&mut self, edge: Edge<T, W>) -> bool {
    let (row, column) = match self.cell_of(edge.from_node(), edge.to_node()) {
      Some(cell) => cell,
      None => {
        trace!(?edge, "add_edge rejected: endpoint not present");
        return false;
      }
    };
    let cell = &mut self.matrix[row][column];
    if cell.is_some() {
      trace!(?edge, "add_edge rejected: cell already holds a weight");
      return false;
    }
    *cell = Some(edge.weight());
    true
  }

  fn remove_edge(&mut self, edge: &Edge<T, W>) -> bool {
    let (row, column) = match self.cell_of(edge.from_node(), edge.to_node()) {
      Some(cell) => cell,
      None => {
        trace!(?edge, "remove_edge rejected: endpoint not present");
        return false;
      }
    };
    match self.matrix[row][column].take() {
      Some(_) => true,
      None => {
        trace!(?edge, "remove_edge rejected: cell is empty");
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  type MatrixGraph = AdjacencyMatrixGraph<u32, i64>;

  #[test]
  fn test_adjacency_matrix_queries() {
    let graph: MatrixGraph = small_chain();

    assert!(graph.is_square());
    assert_eq!(graph.number_of_nodes(), 3);
    assert_eq!(graph.number_of_edges(), 2);

    assert_eq!(graph.neighbors(&node(0)), Ok(vec![node(1)]));
    assert_eq!(graph.distance(&node(0), &node(2)), Ok(None));
    assert_eq!(graph.adjacent(&node(1), &node(2)), Ok(true));
    assert_eq!(graph.distance(&node(1), &node(2)), Ok(Some(3)));

    // Absent nodes are answered, not reported.
    assert_eq!(graph.adjacent(&node(7), &node(0)), Ok(false));
    assert_eq!(graph.neighbors(&node(7)), Ok(vec![]));
    assert_eq!(graph.distance(&node(0), &node(7)), Ok(None));
  }

  #[test]
  fn test_adjacency_matrix_remove_node_shifts_indices() {
    let mut graph: MatrixGraph = graph_from_nodes_and_edges(
      vec![0, 1, 2, 3],
      vec![(0, 1, 5), (1, 2, 3), (2, 3, 4), (3, 0, 6), (0, 3, 2)],
    );

    assert!(graph.remove_node(&node(1)));
    assert!(!graph.remove_node(&node(1)));
    assert!(graph.is_square());

    assert_eq!(graph.nodes(), vec![node(0), node(2), node(3)]);
    assert_eq!(graph.number_of_edges(), 3);
    assert_eq!(graph.neighbors(&node(0)), Ok(vec![node(3)]));
    assert_eq!(graph.adjacent(&node(1), &node(2)), Ok(false));
    assert_eq!(graph.distance(&node(2), &node(3)), Ok(Some(4)));
    assert_eq!(graph.distance(&node(3), &node(0)), Ok(Some(6)));
    assert_eq!(
      graph.edges(),
      vec![edge(0, 3, 2), edge(2, 3, 4), edge(3, 0, 6)]
    );
  }

  #[test]
  fn test_adjacency_matrix_unique_per_pair() {
    let mut graph: MatrixGraph = small_chain();

    assert!(!graph.add_edge(edge(0, 1, 9)));
    assert_eq!(graph.distance(&node(0), &node(1)), Ok(Some(5)));
    assert!(!graph.add_edge(edge(0, 9, 1)));

    // The stored weight is not compared on removal.
    assert!(graph.remove_edge(&edge(0, 1, 9)));
    assert!(!graph.remove_edge(&edge(0, 1, 5)));
    assert_eq!(graph.adjacent(&node(0), &node(1)), Ok(false));
    assert!(graph.add_edge(edge(0, 1, 9)));
    assert_eq!(graph.distance(&node(0), &node(1)), Ok(Some(9)));
  }

  #[test]
  fn test_adjacency_matrix_neighbors_in_column_order() {
    let graph: MatrixGraph = graph_from_nodes_and_edges(
      vec![0, 1, 2, 3],
      vec![(0, 3, 1), (0, 1, 1), (0, 0, 1), (0, 2, 1)],
    );
    assert_eq!(
      graph.neighbors(&node(0)),
      Ok(vec![node(0), node(1), node(2), node(3)])
    );
  }

  #[test]
  fn test_adjacency_matrix_deserialize_checks_shape() {
    let graph: MatrixGraph = small_chain();
    let restored: MatrixGraph = serde_json::from_str(&serde_json::to_string(&graph).unwrap()).unwrap();
    assert!(restored.is_square());
    assert_eq!(restored.edges(), graph.edges());

    let no_rows = r#"{"nodes":[0,1],"matrix":[]}"#;
    assert!(serde_json::from_str::<MatrixGraph>(no_rows).is_err());

    let short_row = r#"{"nodes":[0,1],"matrix":[[null,5],[null]]}"#;
    assert!(serde_json::from_str::<MatrixGraph>(short_row).is_err());

    let duplicate_node = r#"{"nodes":[0,0],"matrix":[[null,null],[null,null]]}"#;
    assert!(serde_json::from_str::<MatrixGraph>(duplicate_node).is_err());
  }

  #[test]
  fn test_adjacency_matrix_add_node_twice() {
    let mut graph = MatrixGraph::new();
    assert!(graph.add_node(node(0)));
    assert!(!graph.add_node(node(0)));
    assert!(graph.is_square());
    assert_eq!(graph.number_of_nodes(), 1);
  }
}
