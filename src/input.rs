//! Gathering raw input text.
//!
//! Input comes from command-line words, a file, or standard input. Lines are
//! joined with single spaces so that line breaks are removed by `normalize`
//! exactly like spaces are.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Errors that can occur while reading input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Where the raw text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Words given on the command line
    Args(Vec<String>),
    /// A text file
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Picks the source: arguments first, then a file, then stdin.
    pub fn select(words: Vec<String>, file: Option<PathBuf>) -> Self {
        if !words.is_empty() {
            InputSource::Args(words)
        } else if let Some(path) = file {
            InputSource::File(path)
        } else {
            InputSource::Stdin
        }
    }

    /// Reads the raw text from this source.
    pub fn read(&self) -> InputResult<String> {
        match self {
            InputSource::Args(words) => {
                info!(words = words.len(), "reading sequence from arguments");
                Ok(words.join(" "))
            }
            InputSource::File(path) => {
                info!(path = %path.display(), "reading sequence from file");
                read_file(path)
            }
            InputSource::Stdin => {
                info!("reading sequence from standard input");
                let stdin = io::stdin();
                join_lines(stdin.lock()).map_err(InputError::Stdin)
            }
        }
    }
}

/// Reads a file and joins its lines with spaces.
pub fn read_file<P: AsRef<Path>>(path: P) -> InputResult<String> {
    let path = path.as_ref();
    let io_err = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    join_lines(BufReader::new(file)).map_err(io_err)
}

/// Joins all lines from a reader with single spaces.
pub fn join_lines<R: BufRead>(reader: R) -> io::Result<String> {
    let mut joined = String::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(&line);
    }
    Ok(joined)
}
