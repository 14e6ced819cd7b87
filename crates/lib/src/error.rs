//! Error types for skcfg-lib

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving build configuration
#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot resolve '{}': {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("no project root two levels above '{}'", .0.display())]
  NoProjectRoot(PathBuf),

  #[error("project root '{}' has no final segment", .0.display())]
  UnnamedRoot(PathBuf),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
