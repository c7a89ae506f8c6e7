//! Command-line parsing.

use std::path::{Path, PathBuf};

use ccopy_gen::DEFAULT_MARKER;
use ccopy_rewrite::{output_path_for, Preamble};

use crate::DriverError;

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

/// Settings for processing one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    /// Explicit destination; `None` derives `<stem>_out.<ext>` beside the input.
    pub output: Option<PathBuf>,
    pub marker: String,
    pub author: String,
    /// Also accept a qualified base whose last segment is the marker.
    pub marker_suffix: bool,
    /// Print the rewritten unit instead of writing a file.
    pub to_stdout: bool,
}

impl Options {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Options {
            input: input.into(),
            output: None,
            marker: DEFAULT_MARKER.to_string(),
            author: Preamble::DEFAULT_AUTHOR.to_string(),
            marker_suffix: false,
            to_stdout: false,
        }
    }

    /// Where output goes when not printing to stdout.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| output_path_for(&self.input))
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

/// Parse `args` (without the program name).
///
/// # Errors
///
/// Returns [`DriverError::Usage`] for unknown flags, a missing file, a second
/// file, or a flag missing its value.
pub fn parse_args(args: &[String]) -> Result<Command, DriverError> {
    let mut input: Option<PathBuf> = None;
    let mut output = None;
    let mut marker = None;
    let mut author = None;
    let mut to_stdout = false;
    let mut marker_suffix = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" | "help" => return Ok(Command::Help),
            "-V" | "--version" | "version" => return Ok(Command::Version),
            "--stdout" => to_stdout = true,
            "--marker-suffix" => marker_suffix = true,
            "-o" => {
                let Some(path) = args.get(i + 1) else {
                    return Err(usage("-o requires a path"));
                };
                output = Some(PathBuf::from(path));
                i += 1;
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--output=") {
                    output = Some(PathBuf::from(path));
                } else if let Some(name) = arg.strip_prefix("--marker=") {
                    marker = Some(non_empty("--marker", name)?);
                } else if let Some(name) = arg.strip_prefix("--author=") {
                    author = Some(non_empty("--author", name)?);
                } else if arg.starts_with('-') && arg != "-" {
                    return Err(usage(format!("unknown option '{arg}'")));
                } else if input.is_some() {
                    return Err(usage(format!("unexpected argument '{arg}'")));
                } else {
                    input = Some(PathBuf::from(arg));
                }
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        return Err(usage("missing source file"));
    };
    let mut options = Options::new(input);
    options.output = output;
    options.to_stdout = to_stdout;
    options.marker_suffix = marker_suffix;
    if let Some(marker) = marker {
        options.marker = marker;
    }
    if let Some(author) = author {
        options.author = author;
    }
    Ok(Command::Run(options))
}

fn non_empty(flag: &str, value: &str) -> Result<String, DriverError> {
    if value.is_empty() {
        Err(usage(format!("{flag} requires a value")))
    } else {
        Ok(value.to_string())
    }
}

fn usage(message: impl Into<String>) -> DriverError {
    DriverError::Usage(message.into())
}
