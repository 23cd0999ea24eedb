use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
  /// A query was made against a node the representation does not store
  #[error("Node not found: {0}")]
  NodeNotFound(String),

  /// Deserialized data does not describe a consistent graph
  #[error("Invalid graph data: {0}")]
  InvalidData(String),
}

impl GraphError {
  pub fn node_not_found<T: std::fmt::Debug>(node: &T) -> Self {
    GraphError::NodeNotFound(format!("{:?}", node))
  }
}
