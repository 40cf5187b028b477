//! Operator and delimiter scanning.

use crate::token::{self, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a two-character operator: `==`, `!=`, `<=` or `>=`.
    ///
    /// The dispatcher has already verified the pair, so the table lookup
    /// cannot miss; the `Illegal` fallback only guards against the two
    /// going out of sync.
    pub(crate) fn lex_two_char_operator(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();

        let text = self.cursor.slice_from(start);
        match token::two_char_kind(text) {
            Some(kind) => Token::new(kind, text),
            None => Token::illegal(),
        }
    }

    /// Emits the single-character token for `byte` and consumes it.
    pub(crate) fn lex_single_char(&mut self, byte: u8) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();

        match token::single_char_kind(byte) {
            Some(kind) => Token::new(kind, self.cursor.slice_from(start)),
            None => Token::illegal(),
        }
    }
}
