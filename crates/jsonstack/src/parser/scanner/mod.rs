//! Scanner: splits raw input into classified lexical tokens.
//!
//! What it does
//! - Walks the input left to right and yields one [`Token`] per lexeme,
//!   skipping whitespace. Each token borrows its lexeme from the input and
//!   records the character offset where it starts.
//! - Classifies, but never validates: a bare word such as `abc` is a perfectly
//!   good [`TokenKind::Invalid`] token. Rejecting it is the parser's job, so
//!   scanning never fails.
//!
//! Matching order at each position (first match wins)
//! - structural: `{` `}` `[` `]` `:` `,`
//! - keyword: `null` `true` `false`, only when not followed by a word char
//! - number: `-?[0-9]+(\.[0-9]+)?` (no exponent)
//! - string: `"` up to the next unescaped `"`; `\"` is the only escape the
//!   scanner understands, and it leaves it in the lexeme as is. With no
//!   unescaped `"` left, the last `\"` closes the string instead
//! - invalid: the longest run of chars that are not whitespace, not
//!   structural and not `"`
//!
//! A string with no `"` after its opening quote becomes one invalid token
//! that runs to the end of the input, so every non-whitespace char belongs
//! to exactly one token.
//!
//! ```rust
//! use jsonstack::{TokenKind, tokenize};
//!
//! let kinds: Vec<TokenKind> = tokenize(r#"{"a": [1, true]}"#).map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::BeginObject,
//!         TokenKind::String,
//!         TokenKind::Colon,
//!         TokenKind::BeginArray,
//!         TokenKind::Number,
//!         TokenKind::Comma,
//!         TokenKind::True,
//!         TokenKind::EndArray,
//!         TokenKind::EndObject,
//!     ]
//! );
//! ```


use core::{fmt, iter::FusedIterator};

/// The lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A decimal number, optionally negative, without exponent.
    Number,
    /// A `"`-delimited string, quotes included in the lexeme.
    String,
    /// Anything else. Always rejected by the parser.
    Invalid,
}

impl TokenKind {
    /// Returns `true` for the kinds that decode to a scalar [`Value`].
    ///
    /// [`Value`]: crate::Value
    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Null | Self::True | Self::False | Self::Number | Self::String
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BeginObject => "'{'",
            Self::EndObject => "'}'",
            Self::BeginArray => "'['",
            Self::EndArray => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::Number => "number",
            Self::String => "string",
            Self::Invalid => "invalid token",
        })
    }
}

/// A classified lexeme and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// Lexical class.
    pub kind: TokenKind,
    /// The matched text, exactly as it appears in the input.
    pub lexeme: &'src str,
    /// Zero-based position of the first char, counted in chars.
    pub offset: usize,
}

/// Lazy token iterator over a borrowed input.
///
/// Cloning a `Tokenizer` yields an independent cursor; [`Tokenizer::new`] on
/// the same input always rescans from the start.
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    src: &'src str,
    /// Byte index of the next unread char.
    pos: usize,
    /// Char index of the next unread char.
    offset: usize,
}

/// Scans `src` into tokens. Equivalent to [`Tokenizer::new`].
#[must_use]
pub fn tokenize(src: &str) -> Tokenizer<'_> {
    Tokenizer::new(src)
}

#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[inline]
fn is_structural(c: char) -> bool {
    matches!(c, '{' | '}' | '[' | ']' | ':' | ',')
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `src`.
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: 0,
            offset: 0,
        }
    }

    /// The char offset of the next unread char.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        for (idx, c) in self.rest().char_indices() {
            if !is_whitespace(c) {
                self.pos += idx;
                return;
            }
            self.offset += 1;
        }
        self.pos = self.src.len();
    }

    /// Emits a token of `len` bytes spanning `chars` chars at the cursor.
    #[inline]
    fn emit(&mut self, kind: TokenKind, len: usize, chars: usize) -> Token<'src> {
        let token = Token {
            kind,
            lexeme: &self.src[self.pos..self.pos + len],
            offset: self.offset,
        };
        self.pos += len;
        self.offset += chars;
        token
    }

    fn keyword(rest: &str) -> Option<(TokenKind, usize)> {
        let (kind, word) = match rest.as_bytes().first()? {
            b'n' => (TokenKind::Null, "null"),
            b't' => (TokenKind::True, "true"),
            b'f' => (TokenKind::False, "false"),
            _ => return None,
        };
        if !rest.starts_with(word) {
            return None;
        }
        let at_boundary = rest[word.len()..]
            .chars()
            .next()
            .is_none_or(|c| !is_word_char(c));
        at_boundary.then_some((kind, word.len()))
    }

    /// Length in bytes of the number at the start of `rest`, all ASCII.
    fn number(rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        let digits_from = |start: usize| {
            bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
        };

        let sign = usize::from(bytes.first() == Some(&b'-'));
        let integer = digits_from(sign);
        if integer == 0 {
            return None;
        }

        let mut len = sign + integer;
        if bytes.get(len) == Some(&b'.') {
            let fraction = digits_from(len + 1);
            if fraction > 0 {
                len += 1 + fraction;
            }
        }
        Some(len)
    }

    /// Length in bytes and chars of the string at the start of `rest`, or
    /// `None` when no closing quote follows.
    ///
    /// `\"` is an escaped quote. If the input runs out before a bare `"`,
    /// the quote of the last `\"` closes the string instead, with its
    /// backslash as content: `"C:\"` is the two-char string `C:\`.
    fn string(rest: &str) -> Option<(usize, usize)> {
        let mut chars = rest.char_indices().skip(1);
        let mut count = 1;
        let mut last_escaped = None;
        while let Some((idx, c)) = chars.next() {
            count += 1;
            match c {
                '"' => return Some((idx + 1, count)),
                '\\' if rest[idx + 1..].starts_with('"') => {
                    chars.next();
                    count += 1;
                    last_escaped = Some((idx + 2, count));
                }
                _ => {}
            }
        }
        last_escaped
    }

    /// Length in bytes and chars of the run of plain chars at the start of
    /// `rest`.
    fn run(rest: &str) -> (usize, usize) {
        let mut chars = 0;
        for (idx, c) in rest.char_indices() {
            if is_whitespace(c) || is_structural(c) || c == '"' {
                return (idx, chars);
            }
            chars += 1;
        }
        (rest.len(), chars)
    }

    fn scan(&mut self) -> Option<Token<'src>> {
        self.skip_whitespace();
        let rest = self.rest();
        let first = rest.chars().next()?;

        let structural = match first {
            '{' => Some(TokenKind::BeginObject),
            '}' => Some(TokenKind::EndObject),
            '[' => Some(TokenKind::BeginArray),
            ']' => Some(TokenKind::EndArray),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };
        if let Some(kind) = structural {
            return Some(self.emit(kind, 1, 1));
        }

        if let Some((kind, len)) = Self::keyword(rest) {
            return Some(self.emit(kind, len, len));
        }

        if let Some(len) = Self::number(rest) {
            return Some(self.emit(TokenKind::Number, len, len));
        }

        if first == '"' {
            return Some(match Self::string(rest) {
                Some((len, chars)) => self.emit(TokenKind::String, len, chars),
                None => {
                    let chars = rest.chars().count();
                    self.emit(TokenKind::Invalid, rest.len(), chars)
                }
            });
        }

        let (len, chars) = Self::run(rest);
        Some(self.emit(TokenKind::Invalid, len, chars))
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan()
    }
}

impl FusedIterator for Tokenizer<'_> {}
