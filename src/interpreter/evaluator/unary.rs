use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a prefix operator applied to an already-evaluated operand.
///
/// `!` negates truthiness and applies to any value. `-` applies only to
/// integers (negation wraps at the type boundary, like the rest of the
/// integer arithmetic) and reports `unknown operator` for anything else.
///
/// # Example
/// ```
/// use capuchin::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Bool(true), 1).unwrap();
/// assert_eq!(v, Value::Bool(false));
///
/// // Integer zero is truthy, so `!0` is false.
/// let v = eval_unary(UnaryOperator::Not, &Value::Integer(0), 1).unwrap();
/// assert_eq!(v, Value::Bool(false));
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
/// assert_eq!(v, Value::Integer(-5));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        UnaryOperator::Negate => match value {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            _ => {
                Err(RuntimeError::UnknownUnaryOperator { op,
                                                         operand: value.type_name(),
                                                         line }.into())
            },
        },
    }
}
