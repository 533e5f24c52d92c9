use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expr},
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{self, Control, EvalResult},
        value::{FunctionValue, Value},
    },
};

/// Builds a function value closing over the environment active at its
/// definition site.
pub fn eval_function_literal(parameters: &[String], body: &BlockStatement, env: &Env) -> Value {
    Value::Function(Rc::new(FunctionValue { parameters: parameters.to_vec(),
                                            body:       body.clone(),
                                            env:        Rc::clone(env), }))
}

/// Evaluates a call expression.
///
/// The callee evaluates first, then each argument left to right; an error
/// anywhere short-circuits the rest. The fully evaluated call is then
/// applied.
///
/// # Example
/// ```
/// use capuchin::{
///     interpret,
///     interpreter::{environment::Environment, value::Value},
/// };
///
/// let env = Environment::new();
/// let source = "let newAdder = fn(x) { fn(y) { x + y } };
///               let addTwo = newAdder(2);
///               addTwo(3);";
///
/// assert_eq!(interpret(source, &env).unwrap(), Some(Value::Integer(5)));
/// ```
pub fn eval_call(callee: &Expr, arguments: &[Expr], line: usize, env: &Env) -> EvalResult<Value> {
    let callee = core::eval_expression(callee, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(core::eval_expression(argument, env)?);
    }

    apply(&callee, args, line)
}

/// Applies a function value to already-evaluated arguments.
///
/// The call frame's outer link is the function's *captured* environment,
/// not the caller's; closures evaluate their free names at the definition
/// site. Parameters bind positionally into the fresh frame. A `return`
/// inside the body is unwrapped here, at its function boundary; a body
/// that produces no value yields `null`.
fn apply(callee: &Value, args: Vec<Value>, line: usize) -> EvalResult<Value> {
    let Value::Function(function) = callee else {
        return Err(RuntimeError::NotCallable { type_name: callee.type_name(),
                                               line }.into());
    };

    if args.len() != function.parameters.len() {
        return Err(RuntimeError::WrongNumberOfArguments { expected: function.parameters.len(),
                                                          found:    args.len(),
                                                          line, }.into());
    }

    let frame = Environment::enclosed(&function.env);
    for (parameter, argument) in function.parameters.iter().zip(args) {
        frame.borrow_mut().set(parameter.clone(), argument);
    }

    match core::eval_block_statement(&function.body, &frame) {
        Ok(value) => Ok(value.unwrap_or(Value::Null)),
        Err(Control::Return(value)) => Ok(value),
        Err(error) => Err(error),
    }
}
