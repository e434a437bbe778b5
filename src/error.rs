/// Lexing errors.
///
/// Raised when a line contains a character that cannot start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building a tree from
/// tokens. Parse errors include unexpected tokens, unbalanced parentheses,
/// extra input after a complete statement, and malformed number literals.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while walking a tree, such as a reference to
/// an unassigned variable or a division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
use thiserror::Error;

/// Any error produced while handling one line of input.
///
/// The variant tells which stage rejected the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid statement.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
