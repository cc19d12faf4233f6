//! A small JSON parser built on a tokenizer and a pushdown automaton.
//!
//! `jsonstack` turns one JSON object into a [`Value`] tree in a single pass.
//! A [`Tokenizer`] classifies the input into tokens, and a pushdown automaton
//! with one frame per open container validates each token against the
//! innermost frame's state while building the tree.
//!
//! ```rust
//! use jsonstack::{Value, parse};
//!
//! let value = parse(r#"{"name": "jsonstack", "tags": ["json", "parser"], "stars": 4.5}"#)?;
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("jsonstack"));
//! assert_eq!(value.get("stars").and_then(Value::as_f64), Some(4.5));
//! # Ok::<(), jsonstack::ParserError>(())
//! ```
//!
//! Scope
//! - The input must be a single object; bare arrays and scalars at the top
//!   level are rejected.
//! - Numbers are decimal without exponent and become `f64`.
//! - String contents are kept exactly as written between the quotes. `\"`
//!   does not end a string, but no escape sequence is decoded.
//! - Objects preserve key order.
//!
//! Errors report the char offset of the offending token, e.g.
//! `Unexpected token ] in JSON at position 11`.

mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use parser::{
    ParserError, ParserOptions, Token, TokenKind, Tokenizer, parse, parse_bytes,
    parse_with_options, tokenize,
};
pub use value::{Array, Map, Value};
