//! monkeyc-drv - Pipeline driver for the Monkey interpreter.
//!
//! The driver is the orchestrator for the one-way pipeline:
//!
//! ```text
//! Source text
//!      |
//!      v
//!  [Lexer] --> token stream
//!      |
//!      v
//!  [Parser] --> AST (+ accumulated diagnostics)
//!      |
//!      v
//!  [Evaluator] --> runtime value
//! ```
//!
//! A [`Session`] runs the phases in order and renders the result selected
//! by [`Emit`]: the token stream, the parsed program's canonical text, or
//! the evaluated value. Parse diagnostics are collected across the whole
//! input; when any are present the tree is discarded and the run fails
//! with every message, in order.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use monkeyc_eval::eval_program;
use monkeyc_lex::Lexer;
use monkeyc_par::Parser;
use monkeyc_util::Handler;

/// What a session run should produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emit {
    /// The token stream, one token per line.
    Tokens,
    /// The parsed program's canonical re-serialization.
    Ast,
    /// The evaluated value's rendering.
    #[default]
    Value,
}

/// Driver error.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing recorded at least one diagnostic; the tree was discarded.
    /// The display form lists every message, newline-separated, in the
    /// order the parser recorded them.
    #[error("{}", .messages.join("\n"))]
    Parse { messages: Vec<String> },
}

impl DriverError {
    /// The parse diagnostics carried by this error, if any.
    pub fn parse_messages(&self) -> &[String] {
        match self {
            DriverError::Parse { messages } => messages,
            _ => &[],
        }
    }
}

/// One pipeline invocation's configuration and entry points.
///
/// Sessions are cheap and stateless between runs; the REPL creates one and
/// feeds it a line at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Session {
    emit: Emit,
}

impl Session {
    /// Creates a session producing the given output.
    pub fn new(emit: Emit) -> Self {
        Self { emit }
    }

    /// Runs the pipeline over a file's contents.
    pub fn run_file(&self, path: &Path) -> Result<String, DriverError> {
        let source = fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.run_source(&source)
    }

    /// Runs the pipeline over source text.
    pub fn run_source(&self, source: &str) -> Result<String, DriverError> {
        if self.emit == Emit::Tokens {
            return Ok(render_tokens(source));
        }

        let mut handler = Handler::new();
        let mut parser = Parser::new(Lexer::new(source), &mut handler);
        let program = parser.parse_program();

        if handler.has_errors() {
            return Err(DriverError::Parse {
                messages: handler.errors().map(str::to_string).collect(),
            });
        }

        match self.emit {
            Emit::Tokens => unreachable!("handled above"),
            Emit::Ast => Ok(program.to_string()),
            Emit::Value => Ok(eval_program(&program).inspect()),
        }
    }
}

/// Renders the token stream, one `Kind("literal")` line per token.
fn render_tokens(source: &str) -> String {
    Lexer::new(source)
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
