// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Conditions that abort the parse of one recap file.
///
/// None of these are fatal to a batch: the runner reports them against the
/// file name and moves on.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input ended before any line looked like a date
    #[error("no date line found")]
    MissingDate,

    /// A date was found but no line carried a score
    #[error("no result line found")]
    MissingResult,

    /// Reading the recap failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operator's input stream closed while a prompt was waiting
    #[error("operator input closed while asking for {0}")]
    InputClosed(String),

    /// Something needed a human decision but prompting is disabled
    #[error("{0} needs an operator decision (prompts disabled)")]
    NeedsOperator(String),
}

impl ParseError {
    pub fn input_closed(what: impl Into<String>) -> Self {
        Self::InputClosed(what.into())
    }

    pub fn needs_operator(what: impl Into<String>) -> Self {
        Self::NeedsOperator(what.into())
    }
}

/// Crate-level errors for everything around the parser: roster files,
/// export files, and per-file parse failures tagged with their path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A roster table could not be decoded
    #[error("roster {}: {source}", path.display())]
    Roster {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{}: {source}", file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl Error {
    pub fn parse(file: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse { file: file.into(), source }
    }
}
