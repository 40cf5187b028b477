//! Identifier and keyword scanning.

use super::is_word_continue;
use crate::token::{self, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a word and classifies it against the keyword table.
    ///
    /// The dispatcher guarantees the first byte is a letter or underscore;
    /// continuation bytes may also be digits. Words that are not reserved
    /// become `Identifier` tokens.
    pub(crate) fn lex_word(&mut self) -> Token {
        let start = self.cursor.position();

        while is_word_continue(self.cursor.current_byte()) {
            self.cursor.advance();
        }

        let word = self.cursor.slice_from(start);
        Token::new(token::lookup_word(word), word)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn lex_one(source: &str) -> (TokenKind, String) {
        let token = Lexer::new(source).next_token();
        (token.kind, token.literal)
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            lex_one("foobar"),
            (TokenKind::Identifier, "foobar".to_string())
        );
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        assert_eq!(
            lex_one("foo_bar_123"),
            (TokenKind::Identifier, "foo_bar_123".to_string())
        );
    }

    #[test]
    fn test_leading_underscore() {
        assert_eq!(lex_one("_x"), (TokenKind::Identifier, "_x".to_string()));
    }

    #[test]
    fn test_every_keyword() {
        let cases = [
            ("fn", TokenKind::Function),
            ("let", TokenKind::Let),
            ("const", TokenKind::Const),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("return", TokenKind::Return),
        ];

        for (word, kind) in cases {
            assert_eq!(lex_one(word), (kind, word.to_string()));
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_one("lettuce"), (TokenKind::Identifier, "lettuce".to_string()));
        assert_eq!(lex_one("iffy"), (TokenKind::Identifier, "iffy".to_string()));
    }
}
