//! Set of traits and value types for defining a graph abstraction.
//!
//! The module contains the [`Node`] and [`Edge`] values and the traits every directed, weighted
//! graph representation implements.
//!
mod graph;
mod values;
mod weighted;

pub use graph::*;
pub use values::*;
pub use weighted::*;
