/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code: unexpected tokens, tokens with no prefix parse rule, and
/// invalid integer literals. Parse errors are accumulated by the parser
/// rather than raised.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// identifiers, type mismatches, undefined operators, division by zero,
/// and invalid calls. Runtime errors short-circuit evaluation and surface
/// as its final result.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
