use memchr::{memchr_iter, memrchr};
use thiserror::Error as ThisError;

/// The fixed reason behind a codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ErrorKind {
    #[error("Expecting value")]
    ExpectingValue,
    #[error("Expecting property name enclosed in double quotes")]
    ExpectingPropertyName,
    #[error("Expecting {0:?} delimiter")]
    ExpectingDelimiter(char),
    #[error("Unterminated string starting at")]
    UnterminatedString,
    #[error("Invalid control character at")]
    InvalidControlCharacter,
    #[error("Invalid \\escape")]
    InvalidEscape,
    #[error("Invalid \\uXXXX escape")]
    InvalidUnicodeEscape,
    #[error("Invalid \\uXXXX\\uXXXX surrogate pair")]
    InvalidSurrogatePair,
    #[error("Extra data")]
    TrailingCharacters,
    #[error("Maximum nesting depth exceeded")]
    DepthLimitExceeded,
    #[error("Out of range float values are not JSON compliant")]
    NonCompliantFloat,
    #[error("Scan policy error")]
    Custom,
}

/// Position of a decode failure, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Resolve a byte offset into a line/column pair.
    ///
    /// Lines are separated by `\n`; the column counts characters, not bytes,
    /// so multi-byte UTF-8 sequences occupy a single column.
    pub fn locate(input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let prefix = &input.as_bytes()[..offset];
        let line = memchr_iter(b'\n', prefix).count() + 1;
        let line_start = memrchr(b'\n', prefix).map_or(0, |idx| idx + 1);
        let column = input[line_start..offset].chars().count() + 1;
        Self {
            offset,
            line,
            column,
        }
    }
}

#[derive(Debug, Clone, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub(crate) fn positioned(kind: ErrorKind, input: &str, offset: usize) -> Self {
        let location = Location::locate(input, offset);
        Self {
            kind,
            message: format!(
                "{kind}: line {} column {} (char {})",
                location.line, location.column, location.offset
            ),
            location: Some(location),
        }
    }

    pub(crate) fn non_compliant_float(value: f64) -> Self {
        Self {
            kind: ErrorKind::NonCompliantFloat,
            message: format!("{}: {value}", ErrorKind::NonCompliantFloat),
            location: None,
        }
    }

    /// Error raised by a user-supplied scan policy (numeric parser or
    /// constant resolver).
    pub fn custom(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Custom,
            message: message.into(),
            location: None,
        }
    }
}

/// Internal scan failure: a reason plus the offset it happened at.
///
/// Line and column are resolved lazily when the failure leaves the decoder,
/// so the recursive scanners never pay for position tracking.
#[derive(Debug, Clone)]
pub(crate) struct ScanError {
    pub kind: ErrorKind,
    pub offset: usize,
    detail: Option<String>,
}

impl ScanError {
    pub fn at(kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset,
            detail: None,
        }
    }

    pub fn hook(error: Error, offset: usize) -> Self {
        Self {
            kind: error.kind,
            offset,
            detail: Some(error.message),
        }
    }

    pub fn into_error(self, input: &str) -> Error {
        match self.detail {
            None => Error::positioned(self.kind, input, self.offset),
            Some(detail) => {
                let location = Location::locate(input, self.offset);
                Error {
                    kind: self.kind,
                    message: format!(
                        "{detail}: line {} column {} (char {})",
                        location.line, location.column, location.offset
                    ),
                    location: Some(location),
                }
            }
        }
    }
}
