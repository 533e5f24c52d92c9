use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Dispatches the prefix-position parse rule for the current token.
    ///
    /// Literals and identifiers stand for themselves; `!` and `-` start
    /// prefix operations; `(` starts a grouping; `if`, `fn`, and `macro`
    /// start their compound forms. Any other token (an operator in prefix
    /// position, stray punctuation, illegal input) has no prefix rule,
    /// which aborts the statement with the corresponding error.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let line = self.current.1;

        match self.current.0.clone() {
            Token::Identifier(name) => Ok(Expr::Identifier { name, line }),
            Token::Int(literal) => Self::parse_integer_literal(&literal, line),
            Token::True => Ok(Expr::BooleanLiteral { value: true, line }),
            Token::False => Ok(Expr::BooleanLiteral { value: false, line }),
            Token::Bang => self.parse_unary(UnaryOperator::Not, line),
            Token::Minus => self.parse_unary(UnaryOperator::Negate, line),
            Token::LParen => self.parse_grouped(),
            Token::If => self.parse_if(line),
            Token::Function => self.parse_function_literal(line),
            Token::Macro => self.parse_macro_literal(line),
            token => {
                Err(ParseError::NoPrefixRule { token: token.kind_name().to_string(),
                                               line })
            },
        }
    }

    /// Converts an integer literal's digits to `i64`.
    ///
    /// The lexer guarantees the text is all digits, so the only possible
    /// failure is a literal too large for the type.
    fn parse_integer_literal(literal: &str, line: usize) -> ParseResult<Expr> {
        match literal.parse::<i64>() {
            Ok(value) => Ok(Expr::IntegerLiteral { value, line }),
            Err(_) => {
                Err(ParseError::InvalidIntegerLiteral { literal: literal.to_string(),
                                                        line })
            },
        }
    }

    /// Parses `!` or `-` in prefix position: advance past the operator,
    /// then bind the operand at `Prefix` strength so that `-a * b` parses
    /// as `((-a) * b)`.
    fn parse_unary(&mut self, op: UnaryOperator, line: usize) -> ParseResult<Expr> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { op,
                          right: Box::new(right),
                          line })
    }

    /// Parses `( <expression> )`.
    ///
    /// The inner expression is returned as-is: grouping only shapes the
    /// tree and leaves no node behind.
    fn parse_grouped(&mut self) -> ParseResult<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        Ok(expr)
    }

    /// Parses `if ( <condition> ) { <block> }` with an optional
    /// `else { <block> }`.
    fn parse_if(&mut self, line: usize) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;

        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek.0 == Token::Else {
            self.next_token();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative,
                      line })
    }

    /// Parses `fn ( <identifier list> ) { <block> }`.
    fn parse_function_literal(&mut self, line: usize) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expr::FunctionLiteral { parameters, body, line })
    }

    /// Parses `macro ( <identifier list> ) { <block> }`; the same shape as
    /// a function literal.
    fn parse_macro_literal(&mut self, line: usize) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expr::MacroLiteral { parameters, body, line })
    }

    /// Parses a comma-separated identifier list terminated by `)`; the
    /// current token is the opening parenthesis. An immediately following
    /// `)` yields an empty list.
    fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek.0 == Token::RParen {
            self.next_token();
            return Ok(parameters);
        }

        parameters.push(self.expect_identifier()?);
        while self.peek.0 == Token::Comma {
            self.next_token();
            parameters.push(self.expect_identifier()?);
        }
        self.expect_peek(&Token::RParen)?;

        Ok(parameters)
    }

    /// Parses the argument list of a call expression; the current token is
    /// the `(` sitting after the callee.
    pub(in crate::interpreter::parser) fn parse_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let line = self.current.1;
        let arguments = self.parse_arguments()?;

        Ok(Expr::Call { callee: Box::new(callee),
                        arguments,
                        line })
    }

    /// Parses a comma-separated expression list terminated by `)`, in the
    /// same shape as a parameter list.
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();

        if self.peek.0 == Token::RParen {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek.0 == Token::Comma {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(&Token::RParen)?;

        Ok(arguments)
    }

    /// Parses the right side of a binary operator; the current token is
    /// the operator itself. Recursing at the operator's own strength is
    /// what keeps same-strength chains left-associative.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                left: Expr,
                                                                op: BinaryOperator)
                                                                -> ParseResult<Expr> {
        let line = self.current.1;
        let precedence = Precedence::of(&self.current.0);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Infix { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line })
    }
}

/// Maps a token to its binary operator, or `None` when the token cannot
/// appear in infix position.
#[must_use]
pub(in crate::interpreter::parser) const fn binary_operator(token: &Token)
                                                            -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Asterisk => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Equal => Some(BinaryOperator::Equal),
        Token::NotEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
