//! monkeyc-par - Parser (Syntactic Analyzer) for the Monkey language.
//!
//! A recursive descent parser with one-token lookahead over the lexer's
//! stream, using Pratt parsing (top-down operator precedence) for
//! expressions.
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Name | Operators |
//! |-------|------|-----------|
//! | 1 | `LOWEST` | - |
//! | 2 | `EQUALS` | `==`, `!=` |
//! | 3 | `LESS_OR_GREATER` | `<`, `>` |
//! | 4 | `LESS_GREATER_OR_EQUAL` | `<=`, `>=` |
//! | 5 | `SUM` | `+`, `-` |
//! | 6 | `PRODUCT` | `*`, `/` |
//! | 7 | `REMAINDER` | `%` |
//! | 8 | `PREFIX` | unary `-`, `!` |
//! | 9 | `CALL` | `(` opening an argument list |
//!
//! All binary operators are left-associative: the Pratt loop only consumes
//! an operator while the caller's precedence is strictly below the peeked
//! operator's, so `a - b - c` groups as `(a - b) - c`.
//!
//! # Error handling
//!
//! The parser never aborts. Every recoverable miscue appends a diagnostic
//! to the shared [`Handler`] and returns an absent partial result, then
//! parsing resumes at the next token so one pass surfaces every problem.
//! Callers that find errors on the handler must discard the tree.
//!
//! # Example
//!
//! ```
//! use monkeyc_lex::Lexer;
//! use monkeyc_par::Parser;
//! use monkeyc_util::Handler;
//!
//! let mut handler = Handler::new();
//! let mut parser = Parser::new(Lexer::new("1 + 2 * 3"), &mut handler);
//! let program = parser.parse_program();
//!
//! assert!(!handler.has_errors());
//! assert_eq!(program.to_string(), "(1 + (2 * 3))");
//! ```

pub mod ast;
mod edge_cases;
mod expr;
mod stmt;

pub use expr::prec;

use monkeyc_lex::{token, Lexer, Token, TokenKind};
use monkeyc_util::Handler;

use ast::Program;

/// Recursive descent parser with one-token lookahead.
///
/// Construction pulls two tokens so `current` points at the first real
/// token and `peek` at its successor.
pub struct Parser<'a, 'h> {
    /// Token source, pulled on demand.
    lexer: Lexer<'a>,

    /// The token under examination.
    current: Token,

    /// The token after `current`.
    peek: Token,

    /// Diagnostic sink shared with the caller.
    handler: &'h mut Handler,
}

impl<'a, 'h> Parser<'a, 'h> {
    /// Creates a parser over the lexer's token stream.
    pub fn new(mut lexer: Lexer<'a>, handler: &'h mut Handler) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self {
            lexer,
            current,
            peek,
            handler,
        }
    }

    /// Parses the whole input into a [`Program`].
    ///
    /// Statements that fail to parse are dropped from the tree; their
    /// diagnostics stay on the handler. A best-effort tree is returned
    /// either way.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    /// Shifts the lookahead window one token forward.
    fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances past `peek` when it has the expected kind; otherwise
    /// records a diagnostic and leaves the window untouched.
    ///
    /// Both token kinds are spelled via the token catalog, so an expected
    /// identifier reads `'identifier'` and an operator reads itself.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            return true;
        }

        self.handler.error(format!(
            "Expected next token to be '{}', but got '{}' instead.",
            token::literal_of(kind),
            token::literal_of(self.peek.kind),
        ));
        false
    }
}
