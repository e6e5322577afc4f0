//! The `ParseFailure` value type.
//!
//! A `ParseFailure` records everything a reporting layer needs to explain why
//! a parse could not continue: an immutable snapshot of the input that was
//! being parsed, the zero-based byte offset of the first element that could
//! not be interpreted, an optional message, and an optional chained cause.
//!
//! The input is copied at construction, so later mutation of the caller's
//! buffer never changes the recorded value. The type itself never fails; it
//! is the representation of a failure raised by some external parsing
//! routine.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceCode};
use thiserror::Error;

/// Immutable record of a failed parse.
///
/// `error_position` is deliberately not validated: callers may pass an
/// approximate or end-of-input offset, and its interpretation belongs to the
/// parser that raised the failure. The only place this crate interprets the
/// offset is the diagnostic label, which is clamped to the snapshot.
#[derive(Debug, Error)]
pub struct ParseFailure {
    message: Option<String>,
    input: String,
    error_position: usize,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ParseFailure {
    /// Creates a failure with a message. The input is snapshotted at call time.
    pub fn new(
        message: impl Into<String>,
        input: impl AsRef<str>,
        error_position: usize,
    ) -> Self {
        Self {
            message: Some(message.into()),
            input: input.as_ref().to_owned(),
            error_position,
            cause: None,
        }
    }

    /// Creates a failure with a message and a chained underlying cause.
    pub fn with_cause(
        message: impl Into<String>,
        input: impl AsRef<str>,
        error_position: usize,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: Some(message.into()),
            input: input.as_ref().to_owned(),
            error_position,
            cause: Some(cause.into()),
        }
    }

    /// Creates a failure with no message, only a position.
    pub fn at(input: impl AsRef<str>, error_position: usize) -> Self {
        Self {
            message: None,
            input: input.as_ref().to_owned(),
            error_position,
            cause: None,
        }
    }

    /// The input that was being parsed, as captured at construction.
    pub fn parsed_input(&self) -> &str {
        &self.input
    }

    /// The zero-based byte offset of the first unparseable element.
    pub fn error_position(&self) -> usize {
        self.error_position
    }

    /// The optional human-readable description.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The diagnostic label span, clamped to the snapshot.
    ///
    /// An in-bounds position widens to the full character at that offset so
    /// rendering never splits a code point; a position at or past the end of
    /// the input yields a zero-length span at the end. Positions inside a
    /// multi-byte character snap forward to the next boundary.
    fn label_span(&self) -> (usize, usize) {
        if self.error_position >= self.input.len() {
            return (self.input.len(), 0);
        }
        let mut start = self.error_position;
        while !self.input.is_char_boundary(start) {
            start += 1;
        }
        let len = self.input[start..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        (start, len)
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} (at position {})", message, self.error_position),
            None => write!(
                f,
                "could not parse input at position {}",
                self.error_position
            ),
        }
    }
}

impl Diagnostic for ParseFailure {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("parsefail::parse_failure"))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.input)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (start, len) = self.label_span();
        let label = LabeledSpan::new(Some("first unparseable element".to_string()), start, len);
        Some(Box::new(std::iter::once(label)))
    }
}
