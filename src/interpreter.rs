/// Turns source text into tokens.
///
/// This module declares the `Token` enum and drives the generated lexer
/// over a source string, producing `(token, line)` pairs. Unrecognized
/// input becomes an `Illegal` token rather than a failure, so everything
/// downstream can report it in context.
///
/// # Responsibilities
/// - Defines the closed set of token kinds and their display names.
/// - Tracks source line numbers for diagnostics.
/// - Never interprets literals; integer digits pass through as written.
pub mod lexer;

/// Builds the syntax tree from the token stream.
///
/// This module implements a Pratt parser: expression parsing is driven by
/// a precedence threshold, with one prefix rule per token kind that can
/// open an expression and infix rules for operators and calls. Errors are
/// accumulated in a log so one run reports every malformed statement.
///
/// # Responsibilities
/// - Parses statements, blocks, and the full expression grammar.
/// - Preserves operator precedence and left-associativity.
/// - Accumulates parse errors and recovers at statement granularity.
pub mod parser;

/// Executes the syntax tree.
///
/// This module walks the AST recursively against a chained environment,
/// producing runtime values. Early returns and runtime errors travel
/// through the control channel of the evaluator's result type, which gives
/// error stickiness and function-boundary return semantics by
/// construction.
///
/// # Responsibilities
/// - Evaluates programs, statements, blocks, and expressions.
/// - Applies calls over fresh frames chained onto captured environments.
/// - Runs the macro-definition pre-pass over parsed programs.
pub mod evaluator;

/// Lexically scoped bindings.
///
/// This module defines the environment chain: per-scope binding maps
/// linked outward, shared by reference counting because function values
/// keep their defining environment alive.
///
/// # Responsibilities
/// - Resolves names by walking the scope chain outward.
/// - Writes bindings into the innermost scope only.
/// - Shares scopes between closures and call frames.
pub mod environment;

/// Runtime value representations.
///
/// This module defines the value model: integers, booleans, null, and
/// first-class functions and macros with captured environments, together
/// with their type tags, truthiness, and display forms.
pub mod value;
