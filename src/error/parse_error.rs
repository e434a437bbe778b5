#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing tokens.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Reached the end of input while a token was still required.
    UnexpectedEndOfInput {
        /// The column just past the last character of the line.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column of the opening parenthesis.
        column: usize,
    },
    /// Found extra tokens after a complete statement.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The column where the extra input starts.
        column: usize,
    },
    /// A number literal could not be converted to a floating-point value.
    InvalidNumber {
        /// The literal text, e.g. `1.2.3`.
        literal: String,
        /// The column where the literal starts.
        column:  usize,
    },
    /// The line nests parentheses or chains operators too deeply.
    NestingTooDeep {
        /// The column of the token that opened one level too many.
        column: usize,
    },
}

impl ParseError {
    /// Returns the column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column }
            | Self::ExpectedClosingParen { column }
            | Self::UnexpectedTrailingTokens { column, .. }
            | Self::InvalidNumber { column, .. }
            | Self::NestingTooDeep { column } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error at column {column}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after expression. Check your input: {token}"),

            Self::InvalidNumber { literal, column } => {
                write!(f, "Error at column {column}: Invalid number literal '{literal}'.")
            },

            Self::NestingTooDeep { column } => {
                write!(f, "Error at column {column}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
