/// Core parser entry points.
///
/// Contains the top-level `parse` function, the expression entry point, and
/// the shared result type.
pub mod core;

/// Token cursor.
///
/// Wraps the token slice with a position and provides lookahead and
/// advancing that stop at the end of the input.
pub mod cursor;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Implements number literals, variable references, and parenthesized
/// expressions.
pub mod primary;

/// Statement parsing.
///
/// Decides between an assignment and a plain expression with one token of
/// lookahead.
pub mod statement;
