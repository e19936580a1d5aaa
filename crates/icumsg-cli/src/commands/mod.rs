//! CLI command implementations.

mod check;
mod eval;
mod generate;
mod tokens;

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use generate::{run_generate, GenerateArgs};
pub use tokens::{run_tokens, TokensArgs};
