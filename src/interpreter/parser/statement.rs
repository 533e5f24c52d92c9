use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Parses a single statement, dispatching on the current token kind.
    ///
    /// `let` and `return` have dedicated statement forms; anything else is
    /// parsed as an expression statement.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.0 {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression> ;`.
    ///
    /// The right-hand side is a full expression parsed at the lowest
    /// threshold. The trailing semicolon is optional, which keeps
    /// single-expression REPL input pleasant.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.1;

        let name = self.expect_identifier()?;
        self.expect_peek(&Token::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek.0 == Token::Semicolon {
            self.next_token();
        }

        Ok(Statement::Let { name, value, line })
    }

    /// Parses `return <expression> ;`, with the same optional semicolon as
    /// `let`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.1;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek.0 == Token::Semicolon {
            self.next_token();
        }

        Ok(Statement::Return { value, line })
    }

    /// Parses a bare expression in statement position, followed by an
    /// optional semicolon.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.1;

        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek.0 == Token::Semicolon {
            self.next_token();
        }

        Ok(Statement::Expression { expr, line })
    }

    /// Parses the statements of a block; the current token is the opening
    /// brace. Ends on the matching `}` (left as the current token) or at
    /// end of input.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self)
                                                               -> ParseResult<BlockStatement> {
        let line = self.current.1;
        self.next_token();

        let mut statements = Vec::new();
        while self.current.0 != Token::RBrace && self.current.0 != Token::Eof {
            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(BlockStatement { statements, line })
    }
}
