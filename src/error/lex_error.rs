#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Found a character that starts no token.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// The column where the character was found.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, column } => {
                write!(f, "Error at column {column}: Unknown symbol '{symbol}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
