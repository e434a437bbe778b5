#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to use a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// The column of the reference in the source line.
        column: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The column of the `/` operator.
        column: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, column } => {
                write!(f, "Error at column {column}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
