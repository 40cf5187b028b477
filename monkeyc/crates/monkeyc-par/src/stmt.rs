//! Statement parsing.

use monkeyc_lex::TokenKind;

use crate::ast::{Block, Identifier, Statement};
use crate::expr::prec;
use crate::Parser;

impl<'a, 'h> Parser<'a, 'h> {
    /// Dispatches on the current token's kind: `let`/`const` open a
    /// declaration, `return` opens a return, anything else is an
    /// expression statement.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let | TokenKind::Const => self.parse_declaration_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let name = value;` or `const name = value;`.
    ///
    /// Requires an identifier after the keyword and `=` after the name;
    /// the value is parsed at `LOWEST`. One trailing `;` is consumed when
    /// present.
    fn parse_declaration_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }

        let name = Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.advance();
        let value = self.parse_expression(prec::LOWEST);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Declaration { token, name, value })
    }

    /// Parses `return value;`, consuming any number of trailing `;`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.advance();
        let value = self.parse_expression(prec::LOWEST);

        while self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Return { token, value })
    }

    /// Parses a bare expression in statement position, consuming at most
    /// one trailing `;`.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(prec::LOWEST);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Expression { token, expression })
    }

    /// Parses a brace-delimited statement sequence.
    ///
    /// The current token must be `{`. Statements accumulate until the
    /// closing `}` or end of input; a missing `}` simply exhausts the
    /// stream, the block handlers' `expect_peek` calls report the shape
    /// errors before this point.
    pub(crate) fn parse_block(&mut self) -> Block {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.advance();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        Block { token, statements }
    }
}
