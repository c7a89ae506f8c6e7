//! Atomic output files.

use std::io::Write;
use std::path::{Path, PathBuf};

use ccopy_ir::TextEmitter;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{OutputError, Preamble, RewriteBuffer};

/// Derive the output path for `source`: `_out` before the extension.
///
/// `dir/widget.hpp` becomes `dir/widget_out.hpp`; `Makefile` becomes
/// `Makefile_out`. A leading dot (`.hidden`) is not an extension.
pub fn output_path_for(source: &Path) -> PathBuf {
    let Some(name) = source.file_name().and_then(|n| n.to_str()) else {
        return source.with_file_name("out");
    };
    let renamed = match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{}_out{}", &name[..dot], &name[dot..]),
        _ => format!("{name}_out"),
    };
    source.with_file_name(renamed)
}

/// A destination written in one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    path: PathBuf,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        OutputFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `contents` to a temporary file beside the destination, then
    /// rename it into place.
    ///
    /// # Errors
    ///
    /// Returns an [`OutputError`] if the temporary file cannot be created,
    /// written or renamed. The temporary file is removed in every case.
    pub fn write_atomic(&self, contents: &str) -> Result<(), OutputError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|source| OutputError::Create {
            dir: dir.to_path_buf(),
            source,
        })?;
        temp.write_all(contents.as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|source| OutputError::Write {
                path: self.path.clone(),
                source,
            })?;
        temp.persist(&self.path)
            .map_err(|err| OutputError::Persist {
                path: self.path.clone(),
                source: err.error,
            })?;

        debug!(path = %self.path.display(), bytes = contents.len(), "output written");
        Ok(())
    }
}

/// [`TextEmitter`] that writes the preamble and rewritten source to disk.
#[derive(Debug)]
pub struct FileRewriter {
    buffer: RewriteBuffer,
    output: OutputFile,
    preamble: Preamble,
}

impl FileRewriter {
    pub fn new(source: impl Into<String>, output: OutputFile) -> Self {
        FileRewriter {
            buffer: RewriteBuffer::new(source),
            output,
            preamble: Preamble::default(),
        }
    }

    #[must_use]
    pub fn with_preamble(mut self, preamble: Preamble) -> Self {
        self.preamble = preamble;
        self
    }

    pub fn output(&self) -> &OutputFile {
        &self.output
    }

    /// Full text `finalize` would write.
    pub fn contents(&self) -> String {
        format!("{}{}", self.preamble, self.buffer.render())
    }
}

impl TextEmitter for FileRewriter {
    type Error = OutputError;

    fn insert_text_after(&mut self, offset: u32, text: &str) {
        self.buffer.insert(offset, text);
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        debug!(
            path = %self.output.path().display(),
            insertions = self.buffer.insertion_count(),
            "finalizing"
        );
        self.output.write_atomic(&self.contents())
    }
}
