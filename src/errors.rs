//! Closed error union for callers of parsing routines.
//!
//! Rather than an open exception hierarchy, failure propagation goes through
//! a single tagged union so it is explicit in function signatures: a caller
//! that reads input and hands it to a parser returns `Result<T>` and uses
//! `?` for both the read and the parse.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, Report, SourceCode};
use thiserror::Error;

use crate::failure::ParseFailure;

/// All failure kinds a parsing caller can observe.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseFailure),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Error::Parse(failure) => failure.code(),
            Error::Io(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Error::Parse(failure) => failure.source_code(),
            Error::Io(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Error::Parse(failure) => failure.labels(),
            Error::Io(_) => None,
        }
    }
}

/// Renders an error with full miette diagnostics.
///
/// Parse failures come out with the input snapshot and a label at the error
/// position. The sink is the caller's choice; most print to stderr.
pub fn render_report(error: Error) -> String {
    let report = Report::new(error);
    format!("{report:?}")
}

#[cfg(test)]
mod errors_tests {
    use super::*;

    #[test]
    fn test_report_shows_snapshot_and_message() {
        let failure = ParseFailure::new("Unexpected char", "2024-13-40", 5);
        let output = render_report(failure.into());
        assert!(output.contains("Unexpected char"));
        assert!(output.contains("2024-13-40"));
        assert!(output.contains("first unparseable element"));
    }

    #[test]
    fn test_report_end_of_input_position() {
        let failure = ParseFailure::new("Unexpected end of input", "2024-", 5);
        let output = render_report(failure.into());
        assert!(output.contains("Unexpected end of input"));
    }

    #[test]
    fn test_report_includes_cause_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad byte");
        let failure = ParseFailure::with_cause("Undecodable input", "abc", 0, io);
        let output = render_report(failure.into());
        assert!(output.contains("Undecodable input"));
        assert!(output.contains("bad byte"));
    }

    #[test]
    fn test_io_variant_renders_without_snapshot() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let output = render_report(io.into());
        assert!(output.contains("no such file"));
    }
}
