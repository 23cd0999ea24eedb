use crate::error::LoadError;
use crate::representation::LoadedGraph;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Writes `graph` to `path` as a bincode snapshot
pub fn save_snapshot<P: AsRef<Path>>(graph: &LoadedGraph, path: P) -> Result<(), LoadError> {
  let file = BufWriter::new(File::create(path)?);
  bincode::serialize_into(file, graph)?;
  Ok(())
}

/// Reads a snapshot written by [`save_snapshot`]
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<LoadedGraph, LoadError> {
  let file = BufReader::new(File::open(path)?);
  Ok(bincode::deserialize_from(file)?)
}
