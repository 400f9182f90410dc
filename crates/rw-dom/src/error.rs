//! Error types for selector compilation.

/// Error while compiling a [`Selector`](crate::Selector).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SelectorError {
    /// Selector string is empty or only whitespace.
    #[error("empty selector")]
    Empty,

    /// Character not allowed at this position.
    #[error("unexpected '{ch}' at position {pos} in selector `{selector}`")]
    UnexpectedChar {
        /// Full selector text.
        selector: String,
        /// Offending character.
        ch: char,
        /// Byte offset of the character.
        pos: usize,
    },

    /// Input ended inside an attribute matcher or after a `.`.
    #[error("unterminated selector `{0}`")]
    Unterminated(String),
}
