use std::rc::Rc;

use crate::{
    ast::{Expr, Program, Statement},
    interpreter::{
        environment::Env,
        value::{MacroValue, Value},
    },
};

/// Collects top-level macro definitions out of `program`.
///
/// Every statement of the form `let <name> = macro(<params>) { <body> };`
/// is removed from the program, and `<name>` is bound in `env` to a macro
/// value closing over `env` itself. Only top-level `let` statements
/// participate; macro literals anywhere else are left in place (and
/// evaluate to `null` if reached).
///
/// Run this before [`eval_program`](crate::interpreter::evaluator::core::eval_program)
/// so that evaluation only ever sees the filtered program.
///
/// # Example
/// ```
/// use capuchin::interpreter::{
///     environment::Environment,
///     evaluator::macros::define_macros,
///     parser::parse,
/// };
///
/// let (mut program, errors) = parse("let twice = macro(x) { x + x }; 1;");
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// define_macros(&mut program, &env);
///
/// assert_eq!(program.statements.len(), 1);
/// assert!(env.borrow().get("twice").is_some());
/// ```
pub fn define_macros(program: &mut Program, env: &Env) {
    let mut kept = Vec::with_capacity(program.statements.len());

    for statement in program.statements.drain(..) {
        if let Statement::Let { name,
                                value: Expr::MacroLiteral { parameters, body, .. },
                                .. } = &statement
        {
            let value = Value::Macro(Rc::new(MacroValue { parameters: parameters.clone(),
                                                          body:       body.clone(),
                                                          env:        Rc::clone(env), }));
            env.borrow_mut().set(name.clone(), value);
        } else {
            kept.push(statement);
        }
    }

    program.statements = kept;
}
