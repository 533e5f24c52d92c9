//! # capuchin
//!
//! capuchin is a tree-walking interpreter for the Capuchin scripting
//! language: a small dynamically typed language with 64-bit integers,
//! booleans, first-class functions with lexical closures, `if`/`else`
//! conditionals, and explicit `return`. Source text is lexed into tokens,
//! parsed into a syntax tree by a Pratt parser, and evaluated recursively
//! against a chain of lexical environments.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    environment::Env,
    evaluator::{core::eval_program, macros::define_macros},
    parser::parse,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree, along with the
/// operator enums and the pretty-printing `Display` implementations. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement, block, and expression types for all language
///   constructs.
/// - Attaches source lines to nodes for error reporting.
/// - Renders nodes back to source form that re-parses equivalently.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// parsing, or evaluating code. Each error carries its source line and
/// renders a stable message shape.
///
/// # Responsibilities
/// - Defines error enums for both failure channels (parser, evaluator).
/// - Keeps message text stable; line numbers travel separately.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the macro pre-pass,
/// evaluation, value representations, and environments to provide a
/// complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for tokenizing, parsing, and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates `source` in `env`.
///
/// Runs the full pipeline: lexing, parsing, the macro-definition pre-pass,
/// and evaluation. The result is the last statement's value, or `None`
/// when that statement produces nothing observable (a `let`). Parsing
/// stops the pipeline at the first recorded parse error; use
/// [`interpreter::parser::parse`] directly to inspect the complete error
/// log.
///
/// # Errors
/// Returns the first parse error when the source is malformed, or the
/// runtime error evaluation produced.
///
/// # Examples
/// ```
/// use capuchin::{
///     interpret,
///     interpreter::{environment::Environment, value::Value},
/// };
///
/// let env = Environment::new();
/// let result = interpret("let a = 2; a * 3;", &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(6)));
///
/// // `b` is never defined, so evaluation reports a runtime error.
/// let env = Environment::new();
/// let error = interpret("b + 1", &env).unwrap_err();
/// assert_eq!(error.to_string(), "identifier not found: b");
/// ```
pub fn interpret(source: &str, env: &Env) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let (mut program, mut errors) = parse(source);
    if !errors.is_empty() {
        return Err(Box::new(errors.remove(0)));
    }

    define_macros(&mut program, env);

    let result = eval_program(&program, env)?;
    Ok(result)
}
