use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Header with the number of nodes not found")]
  MissingHeader,

  #[error("Invalid header, expected the number of nodes: {line:?}")]
  InvalidHeader { line: String },

  #[error("Invalid edge on line {line_number}, expected `from:to:weight`: {line:?}")]
  InvalidEdge { line_number: usize, line: String },

  #[error("Edge on line {line_number} was rejected by the graph: {edge}")]
  RejectedEdge { line_number: usize, edge: String },

  #[error("Unknown graph representation: {0:?}")]
  UnknownRepresentation(String),

  #[error("Snapshot error: {0}")]
  Snapshot(#[from] bincode::Error),
}
