//! Command handlers for the monkeyt CLI.

pub mod repl;
pub mod run;
pub mod tokens;

use monkeyc_drv::Emit;

use crate::error::{MonkeytError, Result};

/// Resolves a textual emit mode into the driver's [`Emit`].
pub fn parse_emit(mode: &str) -> Result<Emit> {
    match mode {
        "tokens" => Ok(Emit::Tokens),
        "ast" => Ok(Emit::Ast),
        "value" => Ok(Emit::Value),
        other => Err(MonkeytError::Config(format!(
            "unknown emit mode '{}' (expected tokens, ast or value)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_emit_accepts_all_modes() {
        assert_eq!(parse_emit("tokens").unwrap(), Emit::Tokens);
        assert_eq!(parse_emit("ast").unwrap(), Emit::Ast);
        assert_eq!(parse_emit("value").unwrap(), Emit::Value);
    }

    #[test]
    fn test_parse_emit_rejects_unknown() {
        assert!(parse_emit("hir").is_err());
    }
}
