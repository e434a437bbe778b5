use std::collections::BTreeMap;

use log::trace;

use crate::{ast::Node, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the variables of one session.
///
/// ## Usage
///
/// An `Environment` is created once when a session starts and passed by
/// mutable reference to every evaluation. Assignments write to it and
/// variable references read from it. Separate sessions must use separate
/// environments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    /// A mapping from variable names to their last assigned value.
    variables: BTreeMap<String, f64>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// Returns `EvalError::UnknownVariable` if `name` was never assigned.
    /// `column` is the position of the reference, used for the message.
    pub fn lookup(&self, name: &str, column: usize) -> EvalResult<f64> {
        self.get(name)
            .ok_or_else(|| EvalError::UnknownVariable { name: name.to_string(),
                                                        column })
    }

    /// Binds `value` to `name`, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.variables.insert(name.into(), value)
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings, ordered by name.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Children are evaluated
    /// before their parent and the left operand before the right one. The
    /// parser only produces assignments at the root of a tree, but for trees
    /// built by hand an assignment on the left of an operator is visible on
    /// its right.
    ///
    /// # Errors
    /// - `UnknownVariable` when an identifier has no binding.
    /// - `DivisionByZero` when the right operand of `/` is zero.
    pub fn eval(&mut self, node: &Node) -> EvalResult<f64> {
        match node {
            Node::Literal { value } => Ok(*value),
            Node::Identifier { name, column } => self.lookup(name, *column),
            Node::BinaryOp { op,
                             left,
                             right,
                             column, } => self.eval_binary_op(*op, left, right, *column),
            Node::Assignment { name, value } => {
                let value = self.eval(value)?;
                trace!("binding {name} = {value}");
                self.set(name.as_str(), value);
                Ok(value)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    #[test]
    fn literals_evaluate_to_themselves() {
        let mut env = Environment::new();
        assert_eq!(env.eval(&Node::literal(2.5)), Ok(2.5));
        assert!(env.is_empty());
    }

    #[test]
    fn assignment_binds_and_yields_the_value() {
        let mut env = Environment::new();
        let tree = Node::assignment("x", Node::literal(5.0));

        assert_eq!(env.eval(&tree), Ok(5.0));
        assert_eq!(env.get("x"), Some(5.0));
        assert_eq!(env.eval(&Node::identifier("x", 1)), Ok(5.0));
    }

    #[test]
    fn reassignment_overwrites() {
        let mut env = Environment::new();
        env.set("x", 1.0);
        assert_eq!(env.set("x", 2.0), Some(1.0));
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("x"), Some(2.0));
    }

    #[test]
    fn unknown_variable_is_an_error() {
        let mut env = Environment::new();
        assert_eq!(env.eval(&Node::identifier("y", 4)),
                   Err(EvalError::UnknownVariable { name:   "y".to_string(),
                                                    column: 4, }));
        assert!(!env.contains("y"));
    }

    #[test]
    fn left_operand_is_evaluated_first() {
        let mut env = Environment::new();
        // (a = 3) + a
        let tree = Node::binary(BinaryOperator::Add,
                                Node::assignment("a", Node::literal(3.0)),
                                Node::identifier("a", 10),
                                7);
        assert_eq!(env.eval(&tree), Ok(6.0));
    }

    #[test]
    fn failed_evaluation_keeps_earlier_bindings() {
        let mut env = Environment::new();
        let tree = Node::binary(BinaryOperator::Add,
                                Node::assignment("a", Node::literal(3.0)),
                                Node::identifier("missing", 10),
                                7);
        assert!(env.eval(&tree).is_err());
        assert_eq!(env.get("a"), Some(3.0));
    }

    #[test]
    fn variables_are_listed_by_name() {
        let mut env = Environment::new();
        env.set("zeta", 1.0);
        env.set("alpha", 2.0);
        assert_eq!(env.variables().collect::<Vec<_>>(),
                   [("alpha", 2.0), ("zeta", 1.0)]);
    }
}
