use std::fmt;

/// A program: the ordered sequence of top-level statements produced by the
/// parser. This is the AST root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// A top-level or block-level statement.
///
/// Statements are the units the program and block walkers iterate over.
/// Only `let` and `return` have dedicated syntax; everything else is an
/// expression in statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding: `let <name> = <value>;`.
    Let {
        /// The bound name.
        name:  String,
        /// The expression producing the bound value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An early return: `return <value>;`. Escapes the nearest enclosing
    /// function body, not merely the current block.
    Return {
        /// The expression producing the returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A bare expression evaluated for its value, with an optional trailing
    /// semicolon.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A braced sequence of statements, as it appears in `if` arms and in
/// function and macro bodies.
///
/// Blocks are walked like programs, but early returns pass through them
/// unwrapped so that `return` stops at a function boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// An abstract syntax tree node representing an expression.
///
/// `Expr` covers all value-producing constructs: literals, identifiers,
/// prefix and infix operations, conditionals, function and macro literals,
/// and calls. Parenthesized groupings do not appear as nodes; they only
/// shape the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A signed 64-bit integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation: `!<expr>` or `-<expr>`.
    Prefix {
        /// The prefix operator.
        op:    UnaryOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An infix operation such as `<left> + <right>`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional: `if (<condition>) { ... }` with an optional
    /// `else { ... }`. Conditionals are expressions; a missing or skipped
    /// branch yields `null`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Optional block evaluated when the condition is falsy.
        alternative: Option<BlockStatement>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal: `fn(<params>) { <body> }`. Evaluating one
    /// captures the environment active at the definition site.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
        /// Line number in the source code.
        line:       usize,
    },
    /// A call: `<callee>(<arguments>)`. The callee is an arbitrary
    /// expression; arguments evaluate left to right.
    Call {
        /// The expression producing the function to call.
        callee:    Box<Self>,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A macro literal: `macro(<params>) { <body> }`. Shaped like a
    /// function literal, but collected by the macro pre-pass before
    /// evaluation starts.
    MacroLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The macro body.
        body:       BlockStatement,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use capuchin::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::MacroLiteral { line, .. } => *line,
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`), defined on any value via truthiness.
    Not,
    /// Arithmetic negation (`-x`), defined on integers only.
    Negate,
}

/// Represents an infix operator.
///
/// Infix operators cover arithmetic, ordering, and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

// The rendered forms below re-parse to an equivalent tree: infix and prefix
// operations print fully grouped, `if` conditions print parenthesized, and
// blocks print braced. Function values reuse them for their display form.

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let statements: Vec<String> = self.statements.iter().map(ToString::to_string).collect();
        write!(f, "{}", statements.join(" "))
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let statements: Vec<String> = self.statements.iter().map(ToString::to_string).collect();
        write!(f, "{}", statements.join(" "))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {{ {body} }}", parameters.join(", "))
            },
            Self::Call { callee, arguments, .. } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{callee}({})", arguments.join(", "))
            },
            Self::MacroLiteral { parameters, body, .. } => {
                write!(f, "macro({}) {{ {body} }}", parameters.join(", "))
            },
        }
    }
}
