//! Processing a single source file end to end.

use std::path::{Path, PathBuf};

use ccopy_gen::{
    inject, inject_with_progress, ClassReport, InjectConfig, InjectionReport, MarkerMatch,
};
use ccopy_rewrite::{FileRewriter, OutputFile, Preamble, RewriteBuffer};
use tracing::debug;

use crate::{DriverError, Options};

/// Result of processing one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub report: InjectionReport,
    /// File written, unless the run printed to stdout.
    pub output: Option<PathBuf>,
    /// Rewritten unit, preamble included, when printing to stdout.
    pub text: Option<String>,
}

/// Read, scan, inject and write the file named by `options`.
///
/// `progress` sees each class's report as soon as it is decided, so the
/// decisions are visible even when writing the output fails afterwards.
///
/// # Errors
///
/// Fails if the source cannot be read or is larger than 4 GiB, or if the
/// output cannot be written. Nothing is written in any failure case.
pub fn process_file<F>(options: &Options, mut progress: F) -> Result<Outcome, DriverError>
where
    F: FnMut(&ClassReport),
{
    let source = read_source(options.input())?;
    debug!(path = %options.input().display(), bytes = source.len(), "read source");

    let marker_match = if options.marker_suffix {
        MarkerMatch::Suffix
    } else {
        MarkerMatch::Exact
    };
    let config = InjectConfig::with_marker(&options.marker).matching(marker_match);
    let preamble = Preamble::default().with_author(&options.author);

    if options.to_stdout {
        let (report, text) = process_source(&source, &config, &preamble);
        for class in &report {
            progress(class);
        }
        return Ok(Outcome {
            report,
            output: None,
            text: Some(text),
        });
    }

    let output = OutputFile::new(options.output_path());
    let unit = ccopy_parse::scan(&source);
    let mut rewriter = FileRewriter::new(source, output).with_preamble(preamble);
    let report = inject_with_progress(&unit, &mut rewriter, &config, progress)?;

    Ok(Outcome {
        report,
        output: Some(rewriter.output().path().to_path_buf()),
        text: None,
    })
}

/// Rewrite `source` in memory, returning the report and the full output text.
pub fn process_source(
    source: &str,
    config: &InjectConfig,
    preamble: &Preamble,
) -> (InjectionReport, String) {
    let unit = ccopy_parse::scan(source);
    let mut buffer = RewriteBuffer::new(source);
    let report = match inject(&unit, &mut buffer, config) {
        Ok(report) => report,
        Err(never) => match never {},
    };
    let body = buffer
        .rendered()
        .map_or_else(|| buffer.render(), str::to_owned);
    (report, format!("{preamble}{body}"))
}

fn read_source(path: &Path) -> Result<String, DriverError> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    if u32::try_from(source.len()).is_err() {
        return Err(DriverError::SourceTooLarge {
            path: path.to_path_buf(),
            len: source.len(),
        });
    }
    Ok(source)
}
