//! Expression parsing using Pratt parsing (top-down operator precedence).
//!
//! Each token kind that can start an expression has a prefix handler and
//! each token kind that can continue one has an infix handler; both are
//! dispatched by `match` on the kind. The numeric precedence level passed
//! through [`Parser::parse_expression`] decides how much of the remaining
//! input an operand may swallow.

use monkeyc_lex::TokenKind;

use crate::ast::{Expression, Identifier};
use crate::Parser;

/// Precedence levels, ascending. Higher binds tighter.
pub mod prec {
    /// Entry level; also the level of every non-operator token.
    pub const LOWEST: u8 = 1;
    /// `==`, `!=`
    pub const EQUALS: u8 = 2;
    /// `<`, `>`
    pub const LESS_OR_GREATER: u8 = 3;
    /// `<=`, `>=`
    pub const LESS_GREATER_OR_EQUAL: u8 = 4;
    /// `+`, `-`
    pub const SUM: u8 = 5;
    /// `*`, `/`
    pub const PRODUCT: u8 = 6;
    /// `%`
    pub const REMAINDER: u8 = 7;
    /// Unary `-` and `!`.
    pub const PREFIX: u8 = 8;
    /// `(` as an infix operator, opening an argument list.
    pub const CALL: u8 = 9;
}

/// The precedence a kind has when it appears in operator position.
fn precedence_of(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Equal | TokenKind::NotEqual => prec::EQUALS,
        TokenKind::LessThan | TokenKind::GreaterThan => prec::LESS_OR_GREATER,
        TokenKind::LessOrEqual | TokenKind::GreaterOrEqual => {
            prec::LESS_GREATER_OR_EQUAL
        }
        TokenKind::Plus | TokenKind::Minus => prec::SUM,
        TokenKind::Asterisk | TokenKind::Slash => prec::PRODUCT,
        TokenKind::Percent => prec::REMAINDER,
        TokenKind::LParen => prec::CALL,
        _ => prec::LOWEST,
    }
}

/// True when `kind` has an infix handler.
fn has_infix(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::LessOrEqual
            | TokenKind::GreaterOrEqual
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::LParen
    )
}

impl<'a, 'h> Parser<'a, 'h> {
    /// Pratt core: parses an expression at the given minimum precedence.
    ///
    /// A prefix handler produces the left operand, then the loop folds in
    /// infix operators for as long as the peeked operator binds tighter
    /// than `precedence` and no statement-ending `;` intervenes.
    pub(crate) fn parse_expression(&mut self, precedence: u8) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon)
            && precedence < precedence_of(self.peek.kind)
        {
            if !has_infix(self.peek.kind) {
                return Some(left);
            }
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Prefix dispatch on the current token.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Identifier => Some(Expression::Identifier(Identifier {
                token: self.current.clone(),
                value: self.current.literal.clone(),
            })),
            TokenKind::Integer => self.parse_integer_literal(),
            TokenKind::Float => self.parse_float_literal(),
            TokenKind::True | TokenKind::False => Some(Expression::Boolean {
                token: self.current.clone(),
                value: self.current.kind == TokenKind::True,
            }),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            _ => {
                self.handler.error(format!(
                    "No prefix parse function for '{}' found",
                    self.current.literal,
                ));
                None
            }
        }
    }

    /// Infix dispatch on the current token, with the already-parsed left
    /// operand.
    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.current.kind {
            TokenKind::LParen => self.parse_call_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { token, value }),
            Err(_) => {
                self.handler.error(format!(
                    "Could not parse \"{}\" as integer\n",
                    token.literal,
                ));
                None
            }
        }
    }

    fn parse_float_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        match token.literal.parse::<f64>() {
            Ok(value) => Some(Expression::FloatLiteral { token, value }),
            Err(_) => {
                self.handler.error(format!(
                    "Could not parse \"{}\" as float\n",
                    token.literal,
                ));
                None
            }
        }
    }

    /// Parses `!operand` or `-operand`; the operand binds at `PREFIX`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.advance();
        let right = self.parse_expression(prec::PREFIX)?;

        Some(Expression::Prefix {
            token,
            operator,
            right: Box::new(right),
        })
    }

    /// Parses `left <op> right`; the right operand binds at the
    /// operator's own precedence, which makes the operator
    /// left-associative.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = precedence_of(token.kind);

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Parses `( expression )`, returning the inner expression itself:
    /// grouping leaves no node behind.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();

        let expression = self.parse_expression(prec::LOWEST)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `if (condition) { consequence }` with an optional
    /// `else { alternative }`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        self.advance();
        let condition = self.parse_expression(prec::LOWEST)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expression::IfElse {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// Parses `fn(params) { body }`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let body = self.parse_block();

        Some(Expression::FunctionLiteral {
            token,
            parameters,
            body,
        })
    }

    /// Parses a comma-separated identifier list, zero or more, up to the
    /// closing `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        parameters.push(Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            if !self.expect_peek(TokenKind::Identifier) {
                return None;
            }
            parameters.push(Identifier {
                token: self.current.clone(),
                value: self.current.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses the argument list that `(` opened after a callee.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    /// Parses a comma-separated expression list, zero or more, up to the
    /// closing `)`. Arguments bind at `LOWEST`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(prec::LOWEST)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(prec::LOWEST)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(arguments)
    }
}

// =============================================================================
// TESTS
// =============================================================================
