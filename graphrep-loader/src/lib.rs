mod error;
mod graph_serde;
mod loader;
mod representation;

pub use error::LoadError;
pub use graph_serde::{load_snapshot, save_snapshot};
pub use loader::*;
pub use representation::*;
