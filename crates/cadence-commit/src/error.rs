//! Commit parsing errors.

use std::borrow::Cow;

use serde::Serialize;
use thiserror::Error;

/// A commit message that does not follow the grammar.
///
/// Every variant keeps the raw message so a diagnostic can be rendered
/// without parsing again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The header names a type that is not enabled.
    #[error("unknown commit type `{commit_type}`")]
    UnknownType {
        /// The raw commit message.
        raw: String,
        /// The unrecognized type token.
        commit_type: String,
    },

    /// The header does not match `type(scope)!: description`.
    #[error("malformed header: {reason}")]
    MalformedHeader {
        /// The raw commit message.
        raw: String,
        /// What is wrong with the header.
        reason: String,
    },

    /// The trailing footer block contains an invalid line.
    #[error("malformed footer at line {line}: {reason}")]
    MalformedFooter {
        /// The raw commit message.
        raw: String,
        /// 1-based line number within the raw message.
        line: usize,
        /// What is wrong with the footer block.
        reason: String,
    },
}

/// The category of a [`ParseError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParseErrorKind {
    /// See [`ParseError::UnknownType`].
    UnknownType,
    /// See [`ParseError::MalformedHeader`].
    MalformedHeader,
    /// See [`ParseError::MalformedFooter`].
    MalformedFooter,
}

impl ParseError {
    pub(crate) fn unknown_type(raw: &str, commit_type: &str) -> Self {
        Self::UnknownType {
            raw: raw.to_string(),
            commit_type: commit_type.to_string(),
        }
    }

    pub(crate) fn malformed_header(raw: &str, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_footer(raw: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedFooter {
            raw: raw.to_string(),
            line,
            reason: reason.into(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::UnknownType { .. } => ParseErrorKind::UnknownType,
            Self::MalformedHeader { .. } => ParseErrorKind::MalformedHeader,
            Self::MalformedFooter { .. } => ParseErrorKind::MalformedFooter,
        }
    }

    /// Returns the raw message that failed to parse.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::UnknownType { raw, .. }
            | Self::MalformedHeader { raw, .. }
            | Self::MalformedFooter { raw, .. } => raw,
        }
    }

    /// Returns the first line of the raw message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.raw().lines().next().unwrap_or("")
    }

    /// Returns a human-readable reason.
    #[must_use]
    pub fn reason(&self) -> Cow<'_, str> {
        match self {
            Self::UnknownType { commit_type, .. } => {
                Cow::Owned(format!("`{commit_type}` is not an enabled commit type"))
            }
            Self::MalformedHeader { reason, .. } | Self::MalformedFooter { reason, .. } => {
                Cow::Borrowed(reason)
            }
        }
    }
}

/// Result type for commit parsing.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_display() {
        let err = ParseError::unknown_type("wip: stuff", "wip");
        insta::assert_snapshot!(err.to_string(), @"unknown commit type `wip`");
        assert_eq!(err.reason(), "`wip` is not an enabled commit type");
    }

    #[test]
    fn test_malformed_header_display() {
        let err = ParseError::malformed_header("feat add", "missing `:` separator after type");
        assert_eq!(
            err.to_string(),
            "malformed header: missing `:` separator after type"
        );
    }

    #[test]
    fn test_malformed_footer_display() {
        let err = ParseError::malformed_footer("x", 5, "bad line");
        insta::assert_snapshot!(err.to_string(), @"malformed footer at line 5: bad line");
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            ParseError::unknown_type("a", "b").kind(),
            ParseErrorKind::UnknownType
        );
        assert_eq!(
            ParseError::malformed_header("a", "b").kind(),
            ParseErrorKind::MalformedHeader
        );
        assert_eq!(
            ParseError::malformed_footer("a", 1, "b").kind(),
            ParseErrorKind::MalformedFooter
        );
    }

    #[test]
    fn test_raw_and_subject() {
        let err = ParseError::malformed_footer("fix: x\n\nbody\nREFS: 1", 4, "bad");
        assert_eq!(err.raw(), "fix: x\n\nbody\nREFS: 1");
        assert_eq!(err.subject(), "fix: x");
    }

    #[test]
    fn test_subject_of_empty_message() {
        let err = ParseError::malformed_header("", "missing commit type");
        assert_eq!(err.subject(), "");
    }
}
