//! # reckon
//!
//! reckon is an interactive arithmetic evaluator written in Rust.
//! A line of input is tokenized, parsed into an expression tree, and evaluated
//! to a single number. Results can be bound to variables which live for the
//! rest of the session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

/// Defines the structure of parsed input.
///
/// This module declares the `Node` enum that represents a single line of
/// input as a tree. The tree is built by the parser and walked by the
/// evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Each stage has its own error enum carrying the column where the failure
/// was detected. [`Error`] wraps all three so a caller can tell the stages
/// apart.
pub mod error;
/// Orchestrates tokenizing, parsing, and evaluating a line.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Owns the [`Environment`] type that carries variables between lines.
pub mod interpreter;

pub use crate::{
    ast::{BinaryOperator, Node},
    error::{Error, EvalError, LexError, ParseError},
    interpreter::evaluator::core::Environment,
};
use crate::interpreter::{lexer::tokenize, parser::core::parse};

/// Tokenizes and parses one line of input into a tree.
///
/// # Errors
/// Returns [`Error::Lex`] if the line contains an unknown character and
/// [`Error::Parse`] if the tokens do not form a single statement.
///
/// # Examples
/// ```
/// use reckon::tokenize_and_parse;
///
/// let tree = tokenize_and_parse("8 - 4 - 2").unwrap();
/// assert_eq!(tree.to_string(), "((8 - 4) - 2)");
///
/// assert!(tokenize_and_parse("2 +").is_err());
/// ```
pub fn tokenize_and_parse(line: &str) -> Result<Node, Error> {
    let tokens = tokenize(line)?;
    debug!("tokenized {} token(s) from {line:?}", tokens.len());

    let node = parse(&tokens, line)?;
    debug!("parsed tree: {node}");

    Ok(node)
}

/// Evaluates a tree against the session's variables.
///
/// Assignments inside the tree update `env`; the result of an assignment is
/// the value that was assigned.
///
/// # Errors
/// Returns [`Error::Eval`] on a reference to an unassigned variable or on a
/// division by zero.
///
/// # Examples
/// ```
/// use reckon::{Environment, evaluate, tokenize_and_parse};
///
/// let mut env = Environment::new();
/// let tree = tokenize_and_parse("x = 2 + 3 * 4").unwrap();
/// assert_eq!(evaluate(&tree, &mut env).unwrap(), 14.0);
/// assert_eq!(env.get("x"), Some(14.0));
/// ```
pub fn evaluate(node: &Node, env: &mut Environment) -> Result<f64, Error> {
    Ok(env.eval(node)?)
}

/// Tokenizes, parses, and evaluates a line in one step.
///
/// # Examples
/// ```
/// use reckon::{Environment, eval_line};
///
/// let mut env = Environment::new();
/// eval_line("x = 5", &mut env).unwrap();
/// assert_eq!(eval_line("x + 1", &mut env).unwrap(), 6.0);
///
/// // An unknown variable is an error rather than zero.
/// assert!(eval_line("y + 1", &mut env).is_err());
/// ```
pub fn eval_line(line: &str, env: &mut Environment) -> Result<f64, Error> {
    let node = tokenize_and_parse(line)?;
    evaluate(&node, env)
}
