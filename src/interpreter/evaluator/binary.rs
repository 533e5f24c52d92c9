use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operator over two already-evaluated operands.
///
/// Integer pairs get the full operator set: arithmetic, ordering, and
/// equality by numeric value. For any other pairing, `==` and `!=` compare
/// by identity, so `true != null`, `1 == true` is simply false, and two
/// distinct function values are never equal. The remaining operators
/// report `type mismatch` when the operand types differ and `unknown
/// operator` when they match but the operator is not defined for them.
///
/// The integer case is checked first on purpose: integer equality must
/// compare values, not identities.
///
/// # Example
/// ```
/// use capuchin::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let v = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), 1).unwrap();
/// assert_eq!(v, Value::Integer(7));
///
/// let v = eval_binary(BinaryOperator::Equal, &Value::Bool(true), &Value::Null, 1).unwrap();
/// assert_eq!(v, Value::Bool(false));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize)
                   -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary(op, *l, *r, line),
        _ => match op {
            BinaryOperator::Equal => Ok(Value::Bool(left == right)),
            BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                 op,
                                                 right: right.type_name(),
                                                 line }.into())
            },
            _ => {
                Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                         op,
                                                         right: right.type_name(),
                                                         line }.into())
            },
        },
    }
}

/// The integer operator set. Arithmetic wraps on overflow; division
/// truncates toward zero, and a zero divisor is a runtime error rather
/// than an abort.
fn eval_integer_binary(op: BinaryOperator, left: i64, right: i64, line: usize)
                       -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Integer(left.wrapping_add(right))),
        BinaryOperator::Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        BinaryOperator::Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        BinaryOperator::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero { line }.into())
            } else {
                // wrapping_div covers i64::MIN / -1 as well.
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        },
        BinaryOperator::Less => Ok(Value::Bool(left < right)),
        BinaryOperator::Greater => Ok(Value::Bool(left > right)),
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}
