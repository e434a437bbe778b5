/// Core evaluation logic and the session environment.
///
/// Contains the [`Environment`](core::Environment) holding variable
/// bindings, the evaluation result type, and the dispatch over node kinds.
pub mod core;

/// Binary operator evaluation.
///
/// Evaluates both operands in order and applies the arithmetic, checking for
/// division by zero.
pub mod binary;
