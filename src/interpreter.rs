/// The evaluator module walks trees and computes results.
///
/// The evaluator visits each node after its children, performs the
/// arithmetic, and reads or writes variables in the session
/// [`Environment`](evaluator::core::Environment).
///
/// # Responsibilities
/// - Evaluates every node variant with one exhaustive match.
/// - Keeps variable bindings alive between lines.
/// - Reports unknown variables and division by zero.
pub mod evaluator;
/// The lexer module tokenizes a line of input.
///
/// The lexer reads the raw text and produces tokens for numbers,
/// identifiers, operators, and parentheses. Each token records the byte span
/// it covers; the text behind a span is converted only by the parser.
///
/// # Responsibilities
/// - Converts the input characters into kinded, spanned tokens.
/// - Skips whitespace.
/// - Rejects the whole line on the first unknown character.
pub mod lexer;
/// The parser module builds the tree from tokens.
///
/// The parser is a recursive-descent parser with one function per grammar
/// rule. It walks the tokens through a cursor which cannot run past the end
/// of the input.
///
/// # Responsibilities
/// - Converts tokens into [`Node`](crate::ast::Node) trees.
/// - Validates the grammar, reporting errors with the column they occur at.
/// - Converts number literals to `f64`.
pub mod parser;
