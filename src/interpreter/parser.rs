/// Parser state, the precedence ladder, and the Pratt expression loop.
///
/// Holds the current/peek token pair, the accumulated error log, and the
/// expression loop that drives all precedence decisions.
pub mod core;
/// Prefix and infix parse rules for expressions.
///
/// One rule per token kind that can open an expression, plus the infix
/// rules for operators and call argument lists.
pub mod expr;
/// Statement-level parsing.
///
/// `let` and `return` statements, expression statements, and the braced
/// blocks used by conditionals and function bodies.
pub mod statement;

pub use self::core::{Parser, Precedence, parse};
