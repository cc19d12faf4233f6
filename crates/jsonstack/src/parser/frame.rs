//! One stack entry per open container.

use super::{
    literal,
    scanner::{Token, TokenKind},
};
use crate::{Array, Map, Value};

/// What the innermost container will accept next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameState {
    /// A quoted key, or `}` while the object is still empty.
    ExpectingKey,
    /// The `:` after a key.
    ExpectingColon,
    /// A value, or `]` while the array is still empty.
    ExpectingValue,
    /// `,` or the matching close bracket.
    ExpectingCommaOrClose,
}

/// Outcome of feeding one token to the innermost frame.
#[derive(Debug)]
pub(crate) enum Step {
    /// The token was consumed by the frame.
    Continue,
    /// Descend into a new container.
    Open(Frame),
    /// The frame's closing bracket.
    Close,
    /// The token is not legal here.
    Reject,
}

/// Stack entry: an in-progress container and its parse state.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Frame {
    Object {
        state: FrameState,
        pending_key: Option<String>, // key waiting for its value
        members: Map,
    },
    Array {
        state: FrameState,
        items: Array,
    },
}

impl Frame {
    pub(crate) fn new_object_frame() -> Self {
        Frame::Object {
            state: FrameState::ExpectingKey,
            pending_key: None,
            members: Map::new(),
        }
    }

    pub(crate) fn new_array_frame() -> Self {
        Frame::Array {
            state: FrameState::ExpectingValue,
            items: Array::new(),
        }
    }

    pub(crate) fn state(&self) -> FrameState {
        match self {
            Frame::Object { state, .. } | Frame::Array { state, .. } => *state,
        }
    }

    #[cfg(test)]
    pub(crate) fn pending_key(&self) -> Option<&str> {
        match self {
            Frame::Object { pending_key, .. } => pending_key.as_deref(),
            Frame::Array { .. } => None,
        }
    }

    /// Stores a finished value: under the pending key for an object, at the
    /// end for an array. Only valid in [`FrameState::ExpectingValue`].
    pub(crate) fn commit(&mut self, value: Value) {
        debug_assert_eq!(self.state(), FrameState::ExpectingValue);
        match self {
            Frame::Object {
                state,
                pending_key,
                members,
            } => {
                if let Some(key) = pending_key.take() {
                    members.insert(key, value);
                }
                *state = FrameState::ExpectingCommaOrClose;
            }
            Frame::Array { state, items } => {
                items.push(value);
                *state = FrameState::ExpectingCommaOrClose;
            }
        }
    }

    pub(crate) fn into_value(self) -> Value {
        match self {
            Frame::Object { members, .. } => Value::Object(members),
            Frame::Array { items, .. } => Value::Array(items),
        }
    }

    /// Feeds one token to this frame.
    pub(crate) fn accept(&mut self, token: &Token<'_>) -> Step {
        use FrameState::{ExpectingColon, ExpectingCommaOrClose, ExpectingKey, ExpectingValue};

        if self.state() == ExpectingValue {
            match token.kind {
                TokenKind::BeginObject => return Step::Open(Frame::new_object_frame()),
                TokenKind::BeginArray => return Step::Open(Frame::new_array_frame()),
                kind if kind.is_scalar() => {
                    let Some(value) = literal::decode(token) else {
                        return Step::Reject;
                    };
                    self.commit(value);
                    return Step::Continue;
                }
                _ => {}
            }
        }

        match self {
            Frame::Object {
                state,
                pending_key,
                members,
            } => match (*state, token.kind) {
                (ExpectingKey, TokenKind::String) => match literal::string(token.lexeme) {
                    Some(key) => {
                        *pending_key = Some(key.into());
                        *state = ExpectingColon;
                        Step::Continue
                    }
                    None => Step::Reject,
                },
                (ExpectingKey, TokenKind::EndObject) if members.is_empty() => Step::Close,
                (ExpectingColon, TokenKind::Colon) => {
                    *state = ExpectingValue;
                    Step::Continue
                }
                (ExpectingCommaOrClose, TokenKind::Comma) => {
                    *state = ExpectingKey;
                    Step::Continue
                }
                (ExpectingCommaOrClose, TokenKind::EndObject) => Step::Close,
                _ => Step::Reject,
            },
            Frame::Array { state, items } => match (*state, token.kind) {
                (ExpectingValue, TokenKind::EndArray) if items.is_empty() => Step::Close,
                (ExpectingCommaOrClose, TokenKind::Comma) => {
                    *state = ExpectingValue;
                    Step::Continue
                }
                (ExpectingCommaOrClose, TokenKind::EndArray) => Step::Close,
                _ => Step::Reject,
            },
        }
    }
}
