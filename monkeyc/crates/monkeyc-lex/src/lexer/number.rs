//! Number literal scanning.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an integer or float literal.
    ///
    /// The scanner accumulates digits as an integer until it meets a `.`
    /// that is directly followed by a digit, at which point the literal
    /// becomes a float and the fractional digits are consumed. Only the
    /// first such `.` is part of the literal, so `1.2.3` scans as the float
    /// `1.2` followed by the float `.3`.
    ///
    /// A leading `.` is reached only when the dispatcher has already seen a
    /// digit after it, so `.25` scans as a float with its source spelling
    /// intact. Signs are not part of number literals; unary minus belongs
    /// to the parser.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        let mut kind = TokenKind::Integer;

        loop {
            let byte = self.cursor.current_byte();

            if byte.is_ascii_digit() {
                self.cursor.advance();
                continue;
            }

            if kind == TokenKind::Integer
                && byte == b'.'
                && self.cursor.peek_byte(1).is_ascii_digit()
            {
                kind = TokenKind::Float;
                self.cursor.advance();
                continue;
            }

            break;
        }

        Token::new(kind, self.cursor.slice_from(start))
    }
}
