//! Source rewriting for ccopy.
//!
//! [`RewriteBuffer`] collects text insertions against the original source and
//! renders the result in memory. [`FileRewriter`] wraps it and, on
//! `finalize`, writes a [`Preamble`] plus the rewritten text to an
//! [`OutputFile`] atomically: either the whole file appears or none of it.

mod buffer;
mod error;
mod output;
mod preamble;

pub use buffer::RewriteBuffer;
pub use error::OutputError;
pub use output::{output_path_for, FileRewriter, OutputFile};
pub use preamble::Preamble;
