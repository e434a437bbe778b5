use crate::{
    ast::{BinaryOperator, Node},
    error::EvalError,
    interpreter::evaluator::core::{Environment, EvalResult},
};

impl Environment {
    /// Evaluates a binary operation node.
    ///
    /// The left operand is evaluated to completion before the right one.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `column`: Column of the operator for error reporting.
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Node,
                                 right: &Node,
                                 column: usize)
                                 -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_arithmetic(op, left, right, column)
    }

    /// Applies an arithmetic operator to two values.
    ///
    /// Division by zero, including negative zero, is reported as an error
    /// instead of producing an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use reckon::{BinaryOperator, Environment};
    ///
    /// let result = Environment::eval_arithmetic(BinaryOperator::Mul, 1.5, 2.0, 1).unwrap();
    /// assert_eq!(result, 3.0);
    ///
    /// assert!(Environment::eval_arithmetic(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: f64,
                           right: f64,
                           column: usize)
                           -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(match op {
               Add => left + right,
               Sub => left - right,
               Mul => left * right,
               Div => {
                   if right == 0.0 {
                       return Err(EvalError::DivisionByZero { column });
                   }
                   left / right
               },
           })
    }
}
