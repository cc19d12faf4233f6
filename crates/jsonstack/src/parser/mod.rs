//! The JSON parser: a pushdown automaton driven by the scanner.
//!
//! Overview
//! - [`scanner`] turns the input into a lazy stream of [`Token`]s. It only
//!   classifies; it never fails.
//! - [`Parser`] pulls one token at a time and hands it to the innermost open
//!   container, a [`Frame`]. Each frame carries one [`FrameState`] and decides
//!   on its own whether the token is legal there. The parser handles what a
//!   single frame cannot: descending into a new container, attaching a
//!   finished container to its parent, the depth limit, and what happens
//!   before the first and after the last bracket.
//! - The value tree is built while parsing. Every frame owns its container;
//!   closing a frame moves the finished container into its parent, under the
//!   parent's pending key or at the end of the parent's array.
//!
//! Grammar
//! - The input must be exactly one object. A bare top-level array or scalar
//!   is rejected at its first token, and nothing may follow the closing `}`.
//! - Object keys must be quoted strings.
//! - Strings are taken verbatim: `\"` keeps a quote from ending the string
//!   but is not decoded, and neither is any other escape.
//! - Numbers are decimal, without exponent, and are read as `f64`.
//!
//! State table (innermost frame, token -> effect)
//!
//! | frame  | state                 | accepts                    |
//! |--------|-----------------------|----------------------------|
//! | object | ExpectingKey          | string, `}` if empty       |
//! | object | ExpectingColon        | `:`                        |
//! | object | ExpectingValue        | scalar, `{`, `[`           |
//! | object | ExpectingCommaOrClose | `,`, `}`                   |
//! | array  | ExpectingValue        | scalar, `{`, `[`, `]` if empty |
//! | array  | ExpectingCommaOrClose | `,`, `]`                   |
//!
//! Anything else is [`ParserError::UnexpectedToken`] at the offending token.

mod error;
mod frame;
mod literal;
mod options;
pub(crate) mod scanner;


use bstr::ByteSlice;
use tracing::{debug, instrument, trace};

pub use error::ParserError;
use frame::{Frame, Step};
pub use options::ParserOptions;
pub use scanner::{Token, TokenKind, Tokenizer, tokenize};

use crate::Value;

/// Parses `text` as one JSON object, with default [`ParserOptions`].
///
/// # Errors
///
/// Returns [`ParserError::UnexpectedToken`] at the first token that breaks
/// the grammar, [`ParserError::UnexpectedEndOfInput`] if the input ends
/// before the top-level object is closed, and
/// [`ParserError::DepthLimitExceeded`] for input nested deeper than
/// [`ParserOptions::DEFAULT_MAX_DEPTH`].
///
/// # Examples
///
/// ```rust
/// use jsonstack::{ParserError, Value, parse};
///
/// let value = parse(r#"{"a": [1, 2], "b": null}"#).unwrap();
/// assert_eq!(
///     value.get("a"),
///     Some(&Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]))
/// );
///
/// let err = parse(r#"{"a": [1,2]]}"#).unwrap_err();
/// assert_eq!(err.to_string(), "Unexpected token ] in JSON at position 11");
/// assert_eq!(parse(r#"{"c": {"a": 1}"#), Err(ParserError::UnexpectedEndOfInput));
/// ```
pub fn parse(text: &str) -> Result<Value, ParserError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses `text` as one JSON object.
///
/// # Errors
///
/// See [`parse`]; the depth limit comes from `options`.
#[instrument(level = "debug", skip_all, fields(len = text.len(), max_depth = options.max_depth))]
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, ParserError> {
    let result = Parser::new(options).run(Tokenizer::new(text));
    match &result {
        Ok(_) => debug!("parsed"),
        Err(err) => debug!(error = %err, "parse failed"),
    }
    result
}

/// Parses raw bytes, which must be UTF-8 text.
///
/// # Errors
///
/// Returns [`ParserError::InvalidInput`] when `bytes` is not valid UTF-8,
/// otherwise the same errors as [`parse`].
///
/// ```rust
/// use jsonstack::{ParserError, parse_bytes};
///
/// assert!(parse_bytes(br#"{"ok": true}"#).is_ok());
/// assert_eq!(
///     parse_bytes(b"{\"\xFF\": 1}"),
///     Err(ParserError::InvalidInput { valid_up_to: 2 })
/// );
/// ```
pub fn parse_bytes(bytes: &[u8]) -> Result<Value, ParserError> {
    let text = bytes.to_str().map_err(|err| {
        debug!(valid_up_to = err.valid_up_to(), "input is not UTF-8");
        ParserError::InvalidInput {
            valid_up_to: err.valid_up_to(),
        }
    })?;
    parse(text)
}

/// Single-use parser state for one input.
#[derive(Debug)]
pub(crate) struct Parser {
    /// Open containers, innermost last.
    frames: Vec<Frame>,
    /// The top-level object, once its `}` has been consumed.
    root: Option<Value>,
    /// Kind of the most recently accepted token.
    previous: Option<TokenKind>,
    max_depth: usize,
}

impl Parser {
    pub(crate) fn new(options: ParserOptions) -> Self {
        Self {
            frames: Vec::with_capacity(16),
            root: None,
            previous: None,
            max_depth: options.max_depth,
        }
    }

    pub(crate) fn run(mut self, tokens: Tokenizer<'_>) -> Result<Value, ParserError> {
        for token in tokens {
            self.feed(&token)?;
        }
        self.finish()
    }

    /// Validates one token and applies it to the tree.
    pub(crate) fn feed(&mut self, token: &Token<'_>) -> Result<(), ParserError> {
        trace!(
            kind = ?token.kind,
            offset = token.offset,
            depth = self.frames.len(),
            previous = ?self.previous,
            "token"
        );

        let step = match self.frames.last_mut() {
            Some(frame) => frame.accept(token),
            // Nothing may follow the top-level object.
            None if self.root.is_some() => Step::Reject,
            None if token.kind == TokenKind::BeginObject => Step::Open(Frame::new_object_frame()),
            None => Step::Reject,
        };

        match step {
            Step::Continue => {}
            Step::Open(frame) => self.open(frame, token)?,
            Step::Close => self.close(),
            Step::Reject => return Err(Self::unexpected(token)),
        }

        self.previous = Some(token.kind);
        Ok(())
    }

    /// Consumes the parser once the tokens run out.
    pub(crate) fn finish(self) -> Result<Value, ParserError> {
        match self.root {
            Some(value) if self.frames.is_empty() => Ok(value),
            _ => Err(ParserError::UnexpectedEndOfInput),
        }
    }

    fn open(&mut self, frame: Frame, token: &Token<'_>) -> Result<(), ParserError> {
        if self.frames.len() >= self.max_depth {
            return Err(ParserError::DepthLimitExceeded {
                limit: self.max_depth,
                offset: token.offset,
            });
        }
        self.frames.push(frame);
        Ok(())
    }

    fn close(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let value = frame.into_value();
        match self.frames.last_mut() {
            Some(parent) => parent.commit(value),
            None => self.root = Some(value),
        }
    }

    fn unexpected(token: &Token<'_>) -> ParserError {
        ParserError::UnexpectedToken {
            lexeme: token.lexeme.into(),
            offset: token.offset,
        }
    }

    #[cfg(test)]
    pub(crate) fn previous(&self) -> Option<TokenKind> {
        self.previous
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    #[cfg(test)]
    pub(crate) fn innermost_state(&self) -> Option<frame::FrameState> {
        self.frames.last().map(Frame::state)
    }

    #[cfg(test)]
    pub(crate) fn pending_key(&self) -> Option<&str> {
        self.frames.last().and_then(Frame::pending_key)
    }
}
