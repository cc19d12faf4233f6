//! Decoding of scalar lexemes into values.

use super::scanner::{Token, TokenKind};
use crate::Value;

/// The text strictly between the quotes of a string lexeme. Escapes are kept
/// verbatim.
pub(crate) fn string(lexeme: &str) -> Option<&str> {
    lexeme.strip_prefix('"')?.strip_suffix('"')
}

/// Decimal-only: the scanner never hands over an exponent.
pub(crate) fn number(lexeme: &str) -> Option<f64> {
    lexeme.parse().ok()
}

/// Decodes a scalar token. `None` for structural and invalid tokens.
pub(crate) fn decode(token: &Token<'_>) -> Option<Value> {
    match token.kind {
        TokenKind::Null => Some(Value::Null),
        TokenKind::True => Some(Value::Boolean(true)),
        TokenKind::False => Some(Value::Boolean(false)),
        TokenKind::Number => number(token.lexeme).map(Value::Number),
        TokenKind::String => string(token.lexeme).map(Value::from),
        _ => None,
    }
}
