#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// The parser accumulates these in its error log instead of raising them;
/// a statement that fails contributes one entry and parsing resumes at the
/// following token. The `Display` form of each variant is a stable message
/// shape; the source line is available separately via
/// [`ParseError::line`].
pub enum ParseError {
    /// A specific token kind was required and something else was found.
    UnexpectedToken {
        /// Display name of the kind that was required.
        expected: String,
        /// Display name of the kind that was found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token opening an expression has no prefix parse rule: an
    /// operator in prefix position, stray punctuation, or illegal input.
    NoPrefixRule {
        /// Display name of the offending token's kind.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit a signed 64-bit integer.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixRule { line, .. }
            | Self::InvalidIntegerLiteral { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },

            Self::NoPrefixRule { token, .. } => {
                write!(f, "no prefix parse function for {token} found")
            },

            Self::InvalidIntegerLiteral { literal, .. } => {
                write!(f, "could not parse {literal:?} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
