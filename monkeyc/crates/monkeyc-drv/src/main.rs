//! `monkeyc` - batch entry point for the Monkey pipeline.
//!
//! Usage: `monkeyc [--emit tokens|ast|value] <file>`

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};

use monkeyc_drv::{Emit, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let (emit, path) = parse_args()?;

    let output = Session::new(emit)
        .run_file(&path)
        .with_context(|| format!("while processing {}", path.display()))?;

    println!("{}", output);
    Ok(())
}

fn parse_args() -> Result<(Emit, PathBuf)> {
    let mut emit = Emit::default();
    let mut path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--emit" => {
                let mode = args
                    .next()
                    .context("--emit requires a mode: tokens, ast or value")?;
                emit = match mode.as_str() {
                    "tokens" => Emit::Tokens,
                    "ast" => Emit::Ast,
                    "value" => Emit::Value,
                    other => bail!("unknown emit mode '{}'", other),
                };
            }
            "--help" | "-h" => {
                println!("usage: monkeyc [--emit tokens|ast|value] <file>");
                process::exit(0);
            }
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => bail!("unexpected argument '{}'", other),
        }
    }

    let path = path.context("usage: monkeyc [--emit tokens|ast|value] <file>")?;
    Ok((emit, path))
}
