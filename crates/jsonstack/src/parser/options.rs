/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use jsonstack::{ParserError, ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_depth: 2,
/// };
/// assert!(parse_with_options(r#"{"a": []}"#, options).is_ok());
/// assert_eq!(
///     parse_with_options(r#"{"a": [[]]}"#, options),
///     Err(ParserError::DepthLimitExceeded { limit: 2, offset: 7 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// The deepest container nesting accepted. The top-level object counts as
    /// depth 1.
    ///
    /// Opening a container beyond this depth fails with
    /// [`ParserError::DepthLimitExceeded`](crate::ParserError::DepthLimitExceeded).
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl ParserOptions {
    /// Default for [`max_depth`](Self::max_depth).
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
