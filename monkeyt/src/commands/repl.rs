//! The interactive read-eval-print loop.
//!
//! Each line runs through the full pipeline on its own. Parse failures
//! print the diagnostic list, newline-separated; successful lines print
//! the selected rendering followed by a newline. State never carries over
//! between lines.

use std::io::{self, BufRead, Write};

use monkeyc_drv::{Emit, Session};
use tracing::debug;

use crate::error::Result;

/// Arguments for the repl command.
pub struct ReplArgs {
    /// What to print for each successfully parsed line.
    pub emit: Emit,
    /// Prompt printed before each line.
    pub prompt: String,
    /// Whether to print the welcome banner once at start.
    pub banner: bool,
}

/// Runs the REPL until end of input or an `exit` line.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    repl_loop(&args, &mut input, &mut output)
}

/// The loop proper, generic over its streams so tests can drive it.
fn repl_loop<R: BufRead, W: Write>(
    args: &ReplArgs,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let session = Session::new(args.emit);

    if args.banner {
        print_banner(output)?;
    }

    let mut line = String::new();

    loop {
        write!(output, "{}", args.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input.
            break;
        }

        let source = line.trim();
        if source.is_empty() {
            continue;
        }
        if source == "exit" {
            break;
        }

        debug!(emit = ?args.emit, "evaluating repl line");

        match session.run_source(source) {
            Ok(result) => writeln!(output, "{}", result)?,
            Err(error) => writeln!(output, "{}", error)?,
        }
    }

    Ok(())
}

/// Prints the welcome banner once.
fn print_banner<W: Write>(output: &mut W) -> Result<()> {
    writeln!(
        output,
        "Welcome to Monkey {} (monkeyt)",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(output, "Type {:?} or press Ctrl-D to quit.", "exit")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(emit: Emit, banner: bool, input: &str) -> String {
        let args = ReplArgs {
            emit,
            prompt: ">> ".to_string(),
            banner,
        };

        let mut output = Vec::new();
        repl_loop(&args, &mut input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_evaluates_lines() {
        let output = run_lines(Emit::Value, false, "1 + 2\n10.5 % 10\n");
        assert!(output.contains("3\n"));
        assert!(output.contains("0.5\n"));
    }

    #[test]
    fn test_banner_prints_once() {
        let output = run_lines(Emit::Value, true, "");
        assert_eq!(output.matches("Welcome to Monkey").count(), 1);
    }

    #[test]
    fn test_parse_errors_are_listed() {
        let output = run_lines(Emit::Value, false, "let = 5;\n");
        assert!(output.contains("Expected next token to be 'identifier'"));
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let output = run_lines(Emit::Value, false, "\n\n5\n");
        assert!(output.contains("5\n"));
    }

    #[test]
    fn test_exit_stops_the_loop() {
        let output = run_lines(Emit::Value, false, "1\nexit\n2\n");
        assert!(output.contains("1\n"));
        assert!(!output.contains("2\n"));
    }

    #[test]
    fn test_ast_mode_echoes_grouping() {
        let output = run_lines(Emit::Ast, false, "1 + 2 * 3\n");
        assert!(output.contains("(1 + (2 * 3))\n"));
    }
}
