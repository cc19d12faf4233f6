use thiserror::Error;

/// Everything that can stop a parse.
///
/// Every variant is terminal: the parser stops at the first violation and
/// returns no partial value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// The input was not text. Raised by [`parse_bytes`] for bytes that are
    /// not valid UTF-8.
    ///
    /// [`parse_bytes`]: crate::parse_bytes
    #[error("Invalid input parameter")]
    InvalidInput {
        /// Length in bytes of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
    /// A token that cannot appear where it was found.
    #[error("Unexpected token {lexeme} in JSON at position {offset}")]
    UnexpectedToken {
        /// The offending lexeme, verbatim.
        lexeme: String,
        /// Char offset where the lexeme starts.
        offset: usize,
    },
    /// The input ended before one complete top-level object was closed.
    #[error("Unexpected end of JSON input")]
    UnexpectedEndOfInput,
    /// An opening bracket would nest deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("Maximum nesting depth of {limit} exceeded in JSON at position {offset}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
        /// Char offset of the bracket that crossed it.
        offset: usize,
    },
}

impl ParserError {
    /// The char offset the error points at, when it points at one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { offset, .. } | Self::DepthLimitExceeded { offset, .. } => {
                Some(*offset)
            }
            Self::InvalidInput { .. } | Self::UnexpectedEndOfInput => None,
        }
    }

    /// The offending lexeme of an [`UnexpectedToken`](Self::UnexpectedToken).
    #[must_use]
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Self::UnexpectedToken { lexeme, .. } => Some(lexeme),
            _ => None,
        }
    }
}
