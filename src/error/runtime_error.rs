use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
///
/// Runtime errors are sticky: any evaluation step receiving one in an
/// operand position yields it unchanged, and it surfaces as the final
/// result of the whole evaluation. The `Display` form of each variant is a
/// stable message shape; the source line is available separately via
/// [`RuntimeError::line`].
pub enum RuntimeError {
    /// A name was looked up that no enclosing scope binds.
    IdentifierNotFound {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type tag of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An infix operator was applied to same-typed operands it is not
    /// defined for, such as `true + false`.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    BinaryOperator,
        /// Type tag of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A prefix operator was applied to an operand it is not defined for,
    /// such as `-true`.
    UnknownUnaryOperator {
        /// The operator.
        op:      UnaryOperator,
        /// Type tag of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer division with a zero divisor.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call applied to a value that is not a function.
    NotCallable {
        /// Type tag of the value that was called.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A call supplied a different number of arguments than the function
    /// declares parameters.
    WrongNumberOfArguments {
        /// The function's parameter count.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl RuntimeError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IdentifierNotFound { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::UnknownInfixOperator { line, .. }
            | Self::UnknownUnaryOperator { line, .. }
            | Self::DivisionByZero { line }
            | Self::NotCallable { line, .. }
            | Self::WrongNumberOfArguments { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name, .. } => {
                write!(f, "identifier not found: {name}")
            },

            Self::TypeMismatch { left, op, right, .. } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },

            Self::UnknownInfixOperator { left, op, right, .. } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },

            Self::UnknownUnaryOperator { op, operand, .. } => {
                write!(f, "unknown operator: {op}{operand}")
            },

            Self::DivisionByZero { .. } => write!(f, "division by zero"),

            Self::NotCallable { type_name, .. } => write!(f, "not a function: {type_name}"),

            Self::WrongNumberOfArguments { expected, found, .. } => {
                write!(f, "wrong number of arguments: expected {expected}, got {found}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
