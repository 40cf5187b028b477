//! monkeyc-lex - Lexer (Lexical Analyzer) for the Monkey language.
//!
//! The lexer turns a source string into a stream of tokens, one
//! [`Lexer::next_token`] call at a time. It is the leaf of the pipeline: it
//! depends on nothing and never fails. A byte it cannot classify becomes a
//! single `Illegal` token and lexing continues; the parser surfaces the
//! problem when its dispatch finds no handler for the token.
//!
//! # Token shape
//!
//! Every token is a `(kind, literal)` pair. The literal is the exact source
//! substring that produced the token, which matters downstream: the AST
//! re-serializes literals verbatim, so a float written `.25` stays `.25`.
//! `Eof` and `Illegal` carry an empty literal.
//!
//! # Source surface
//!
//! - Whitespace (space, tab, newline, carriage return) separates tokens and
//!   is otherwise insignificant.
//! - Identifiers: `[A-Za-z_][A-Za-z0-9_]*`; words matching a keyword are
//!   classified by the keyword table.
//! - Integers: one or more ASCII digits.
//! - Floats: digits with an embedded `.` followed by at least one digit, or
//!   a leading `.` followed by at least one digit.
//! - Operators and delimiters per [`token`]; `==` `!=` `<=` `>=` are the
//!   only two-character tokens.

pub mod cursor;
mod edge_cases;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
