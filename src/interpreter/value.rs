use std::{fmt, rc::Rc};

use crate::{ast::BlockStatement, interpreter::environment::Env};

/// A user-defined function together with the environment it closed over.
///
/// The captured environment is the one active at the definition site; call
/// frames chain onto it, which is the whole of the closure rule.
#[derive(Debug)]
pub struct FunctionValue {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body, evaluated in a fresh scope per call.
    pub body:       BlockStatement,
    /// The environment captured at the definition site.
    pub env:        Env,
}

/// A macro definition collected by the pre-pass.
///
/// Macros never reach the evaluator; they are gathered out of the program
/// before evaluation starts and kept here with their defining environment.
#[derive(Debug)]
pub struct MacroValue {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The macro body.
    pub body:       BlockStatement,
    /// The environment captured at the definition site.
    pub env:        Env,
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every type an expression can produce: integers,
/// booleans, the null value, and first-class functions. Macros appear only
/// through the pre-pass, never from evaluation itself.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The absence of a value, produced by conditionals whose taken branch
    /// is missing or yields nothing.
    Null,
    /// A first-class function with its captured environment.
    Function(Rc<FunctionValue>),
    /// A macro definition bound by the pre-pass.
    Macro(Rc<MacroValue>),
}

impl PartialEq for Value {
    /// Integers and booleans compare by value, `null` equals `null`, and
    /// functions and macros compare by identity: two separately constructed
    /// function values are never equal, even with identical bodies. Values
    /// of different types are simply unequal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Macro(a), Self::Macro(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// The fixed type tag used in error messages.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Bool(true).type_name(), "BOOLEAN");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Function(_) => "FUNCTION",
            Self::Macro(_) => "MACRO",
        }
    }

    /// Truthiness as conditionals and `!` see it: `null` and `false` are
    /// falsy; every other value, including integer zero, is truthy.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }
}

impl fmt::Display for Value {
    /// Renders the human-readable form: integers in decimal, booleans as
    /// `true`/`false`, null as `null`, and functions and macros with their
    /// parameter list and pretty-printed body.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Function(function) => {
                write!(f, "fn({}) {{\n{}\n}}", function.parameters.join(", "), function.body)
            },
            Self::Macro(definition) => {
                write!(f,
                       "macro({}) {{\n{}\n}}",
                       definition.parameters.join(", "),
                       definition.body)
            },
        }
    }
}
