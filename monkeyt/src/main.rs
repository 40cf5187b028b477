//! Monkeyt CLI - the user-facing tool for the Monkey interpreter.
//!
//! This is the main entry point for the monkeyt CLI application. It uses
//! clap for argument parsing and dispatches to the command handlers:
//! an interactive REPL, batch evaluation of a file, and a token dump.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    parse_emit,
    repl::{run_repl, ReplArgs},
    run::{run_run, RunArgs},
    tokens::{run_tokens, TokensArgs},
};
use config::Config;
use error::{MonkeytError, Result};

/// Monkeyt - a CLI tool and REPL for the Monkey language
#[derive(Parser, Debug)]
#[command(name = "monkeyt")]
#[command(author = "Monkey Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool and REPL for the Monkey language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MONKEYT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MONKEYT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MONKEYT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the monkeyt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive read-eval-print loop
    Repl(ReplCommand),

    /// Evaluate a source file and print the result
    Run(RunCommand),

    /// Print the token stream for a source snippet
    Tokens(TokensCommand),
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    /// Echo the parsed program instead of evaluating it
    #[arg(long, conflicts_with = "tokens")]
    ast: bool,

    /// Print the token stream instead of evaluating
    #[arg(long)]
    tokens: bool,

    /// Override the configured prompt
    #[arg(long)]
    prompt: Option<String>,

    /// Suppress the welcome banner
    #[arg(long)]
    no_banner: bool,
}

/// Arguments for the run subcommand.
#[derive(Parser, Debug)]
struct RunCommand {
    /// The source file to evaluate
    file: PathBuf,

    /// Output mode: value, ast or tokens
    #[arg(short, long)]
    emit: Option<String>,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// The source text to tokenize
    source: String,
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MonkeytError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Repl(args) => execute_repl(args, config),
        Commands::Run(args) => execute_run(args, config),
        Commands::Tokens(args) => run_tokens(TokensArgs {
            source: args.source,
        }),
    }
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: Config) -> Result<()> {
    let emit = if args.tokens {
        monkeyc_drv::Emit::Tokens
    } else if args.ast {
        monkeyc_drv::Emit::Ast
    } else {
        parse_emit(&config.emit)?
    };

    run_repl(ReplArgs {
        emit,
        prompt: args.prompt.unwrap_or(config.prompt),
        banner: config.banner && !args.no_banner,
    })
}

/// Execute the run command.
fn execute_run(args: RunCommand, config: Config) -> Result<()> {
    let emit = match args.emit {
        Some(mode) => parse_emit(&mode)?,
        None => parse_emit(&config.emit)?,
    };

    run_run(RunArgs {
        file: args.file,
        emit,
    })
}
