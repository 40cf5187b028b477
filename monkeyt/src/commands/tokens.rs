//! The `tokens` command: dump the token stream for a source snippet.

use monkeyc_drv::{Emit, Session};

use crate::error::Result;

/// Arguments for the tokens command.
pub struct TokensArgs {
    /// The source text to tokenize.
    pub source: String,
}

/// Prints the token stream, one token per line. Lexing is total, so this
/// never fails on the input itself.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let output = Session::new(Emit::Tokens).run_source(&args.source)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
