//! Implementation of the `icumsg tokens` command.

use icumsg::lex;

use crate::error::CliError;
use crate::output::print_json;
use crate::output::table::{format_token_table, TokenRow};

/// Arguments for the tokens command.
#[derive(Debug, clap::Args)]
pub struct TokensArgs {
    /// Template string to tokenize
    #[arg(long, required = true)]
    pub template: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<i32, CliError> {
    let rows = TokenRow::from_tokens(&lex(&args.template));
    if args.json {
        print_json(&rows)?;
    } else {
        println!("{}", format_token_table(&rows));
    }
    Ok(exitcode::OK)
}
