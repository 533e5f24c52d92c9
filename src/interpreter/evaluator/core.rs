use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{binary::eval_binary, function, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// The error channel carries *control*: either a runtime error, or the
/// value of a `return` travelling up to its function boundary. `?` makes
/// both short-circuit every combining construct, which is exactly the
/// propagation the language needs: errors are sticky, and `return`
/// escapes the nearest enclosing function body rather than the block it
/// textually sits in.
pub type EvalResult<T> = Result<T, Control>;

/// A non-local outcome of evaluating a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// A `return` travelling up to the nearest function boundary, where
    /// [`function`] application unwraps it (or to the top level, where
    /// [`eval_program`] does).
    Return(Value),
    /// A runtime error surfacing as the final result of the evaluation.
    Error(RuntimeError),
}

impl From<RuntimeError> for Control {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Evaluates a whole program in `env`.
///
/// Statements run in order; the result is the last statement's value, with
/// a top-level `return` unwrapped to its inner value. A runtime error
/// short-circuits the remaining statements and surfaces as the `Err` arm.
/// `None` means the final statement produced nothing observable (a `let`),
/// which the REPL uses to stay silent.
///
/// # Errors
/// Returns the first runtime error any statement produces.
///
/// # Example
/// ```
/// use capuchin::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     parser::parse,
///     value::Value,
/// };
///
/// let (program, errors) = parse("let a = 5; a * 2;");
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// let result = eval_program(&program, &env).unwrap();
///
/// assert_eq!(result, Some(Value::Integer(10)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> Result<Option<Value>, RuntimeError> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = value,
            Err(Control::Return(value)) => return Ok(Some(value)),
            Err(Control::Error(error)) => return Err(error),
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` evaluates its right-hand side and binds it into the current
/// environment, producing nothing observable. `return` lifts its value
/// into the control channel. An expression statement produces the
/// expression's value.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Err(Control::Return(value))
        },
        Statement::Expression { expr, .. } => Ok(Some(eval_expression(expr, env)?)),
    }
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a `return` is *not* unwrapped here: it keeps
/// travelling outward (as does an error, via `?`) so that it stops at the
/// nearest function boundary and not merely at the end of this block.
pub fn eval_block_statement(block: &BlockStatement, env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates one expression to a value.
///
/// The single dispatch point over the expression variants. Evaluation
/// order is deterministic left-to-right, pre-order over the tree.
pub fn eval_expression(expr: &Expr, env: &Env) -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
        Expr::Identifier { name, line } => eval_identifier(name, *line, env),
        Expr::Prefix { op, right, line } => {
            let right = eval_expression(right, env)?;
            eval_unary(*op, &right, *line)
        },
        Expr::Infix { left,
                      op,
                      right,
                      line, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_binary(*op, &left, &right, *line)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body, .. } => {
            Ok(function::eval_function_literal(parameters, body, env))
        },
        Expr::Call { callee,
                     arguments,
                     line, } => function::eval_call(callee, arguments, *line, env),
        // Macro definitions are collected by the pre-pass before evaluation
        // starts; a literal reaching this point has no runtime meaning.
        Expr::MacroLiteral { .. } => Ok(Value::Null),
    }
}

/// Looks up an identifier in the environment chain.
fn eval_identifier(name: &str, line: usize, env: &Env) -> EvalResult<Value> {
    match env.borrow().get(name) {
        Some(value) => Ok(value),
        None => {
            Err(Control::Error(RuntimeError::IdentifierNotFound { name: name.to_string(),
                                                                  line }))
        },
    }
}

/// Evaluates an `if` expression: the consequence when the condition is
/// truthy, the alternative when present, `null` otherwise. A taken branch
/// that produces no value also yields `null`.
fn eval_if(condition: &Expr,
           consequence: &BlockStatement,
           alternative: Option<&BlockStatement>,
           env: &Env)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        Ok(eval_block_statement(consequence, env)?.unwrap_or(Value::Null))
    } else if let Some(alternative) = alternative {
        Ok(eval_block_statement(alternative, env)?.unwrap_or(Value::Null))
    } else {
        Ok(Value::Null)
    }
}
