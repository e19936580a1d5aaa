//! icumsg CLI entry point.
//!
//! Provides command-line tools for working with message templates:
//! - `icumsg eval` - Render a template with values
//! - `icumsg check` - Validate template syntax
//! - `icumsg tokens` - Show the lexer output for a template
//! - `icumsg generate` - Print the Rust function compiled from a template

mod commands;
mod error;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_eval, run_generate, run_tokens, CheckArgs, EvalArgs, GenerateArgs, TokensArgs,
};
use tracing_subscriber::EnvFilter;

/// ICU message template tools.
#[derive(Debug, Parser)]
#[command(name = "icumsg")]
#[command(about = "ICU message template tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template with values
    Eval(EvalArgs),
    /// Check template syntax
    Check(CheckArgs),
    /// Show the tokens of a template
    Tokens(TokensArgs),
    /// Print the Rust function generated for a template
    Generate(GenerateArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the log subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Check(args) => run_check(args),
        Commands::Tokens(args) => run_tokens(args),
        Commands::Generate(args) => run_generate(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            exit(code);
        }
    }
}
