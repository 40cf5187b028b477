//! Edge case tests for monkeyc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0], Token::new(TokenKind::Identifier, "x"));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let t = lex_all(&format!("let {} = 1;", name));
        assert!(t.contains(&Token::new(TokenKind::Identifier, name)));
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("fn let if");
        assert_eq!(t[0].kind, TokenKind::Function);
        assert_eq!(t[1].kind, TokenKind::Let);
        assert_eq!(t[2].kind, TokenKind::If);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Fn fn");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[1].kind, TokenKind::Function);
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| x.kind == TokenKind::LParen).count(), 3);
        assert_eq!(t.iter().filter(|x| x.kind == TokenKind::RParen).count(), 3);
    }

    #[test]
    fn test_edge_bools() {
        let t = lex_all("true false");
        assert_eq!(t[0].kind, TokenKind::True);
        assert_eq!(t[1].kind, TokenKind::False);
    }

    #[test]
    fn test_edge_no_whitespace_needed() {
        let t = lex_all("1+2*3");
        let kinds: Vec<_> = t.iter().map(|x| x.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::Integer,
                TokenKind::Asterisk,
                TokenKind::Integer,
            ]
        );
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("let\tx\r\n=\n1");
        assert_eq!(t[0].kind, TokenKind::Let);
        assert_eq!(t[2].kind, TokenKind::Assign);
        assert_eq!(t[3].kind, TokenKind::Integer);
    }

    #[test]
    fn test_edge_consecutive_operators() {
        let t = lex_all("+++");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|x| x.kind == TokenKind::Plus));
    }

    #[test]
    fn test_edge_max_i64_literal() {
        let t = lex_all("9223372036854775807");
        assert_eq!(t[0], Token::new(TokenKind::Integer, "9223372036854775807"));
    }

    #[test]
    fn test_edge_float_zero_forms() {
        let t = lex_all("0.0 .0");
        assert_eq!(t[0], Token::new(TokenKind::Float, "0.0"));
        assert_eq!(t[1], Token::new(TokenKind::Float, ".0"));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_illegal_run() {
        let t = lex_all("@#$");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|x| x.kind == TokenKind::Illegal));
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let t = lex_all("let x = # 1;");
        assert!(t.iter().any(|x| x.kind == TokenKind::Illegal));
        assert!(t.iter().any(|x| x.kind == TokenKind::Integer));
    }

    #[test]
    fn test_err_trailing_dot_after_float() {
        // `1.2.` is the float `1.2` followed by an illegal dot.
        let t = lex_all("1.2.");
        assert_eq!(t[0], Token::new(TokenKind::Float, "1.2"));
        assert_eq!(t[1].kind, TokenKind::Illegal);
    }
}
