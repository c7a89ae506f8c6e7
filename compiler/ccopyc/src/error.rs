//! Driver failures.

use std::io;
use std::path::PathBuf;

use ccopy_rewrite::OutputError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Bad command line; the message is shown above the usage text.
    #[error("{0}")]
    Usage(String),

    #[error("cannot read source file '{}': {source}", path.display())]
    ReadSource { path: PathBuf, source: io::Error },

    #[error("source file '{}' is too large ({len} bytes)", path.display())]
    SourceTooLarge { path: PathBuf, len: usize },

    #[error(transparent)]
    Output(#[from] OutputError),
}
