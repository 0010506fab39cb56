pub mod context;
pub mod commands;
pub mod reader;
pub mod parser;
pub mod executor;
pub mod repl;

use anyhow::Result;
use commands::Signal;
use context::ShellContext;
use executor::execute_command;
use log::trace;
use std::borrow::Cow;
use std::io::Write;


/// Tokenizes one input line and dispatches it.
///
/// Command failures are reported on `stderr` and never surface here; an
/// `Err` means the token buffer could not be grown.
pub fn run_command_line(
    line: &[u8],
    ctx: &ShellContext,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<Signal> {
    let tokens = parser::split_line(line)?;
    trace!(
        "tokens: {:?}",
        tokens.iter().map(|t| String::from_utf8_lossy(t)).collect::<Vec<Cow<str>>>()
    );
    Ok(execute_command(&tokens, ctx, stdout, stderr))
}
