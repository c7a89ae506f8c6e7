//! Output failures.

use std::io;
use std::path::PathBuf;

/// Failure to produce an output file. No partial file is left behind.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("cannot create output file in '{}': {source}", dir.display())]
    Create { dir: PathBuf, source: io::Error },

    #[error("cannot write output file '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot persist output file '{}': {source}", path.display())]
    Persist { path: PathBuf, source: io::Error },
}

impl OutputError {
    /// The destination (or destination directory) that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            OutputError::Create { dir, .. } => dir,
            OutputError::Write { path, .. } | OutputError::Persist { path, .. } => path,
        }
    }
}
