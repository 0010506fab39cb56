use crate::shell::commands::system::SystemCommand;
use crate::shell::commands::{Executable, Signal};
use crate::shell::context::ShellContext;
use colored::*;
use log::debug;
use std::io::{self, IsTerminal, Write};

/// Routes a token sequence to a built-in or to an external program.
///
/// An empty sequence is a no-op. Any command failure is written to `stderr`
/// as a single line and the loop continues.
pub fn execute_command(
    tokens: &[&[u8]],
    ctx: &ShellContext,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Signal {
    let Some(&program) = tokens.first() else {
        return Signal::Continue;
    };

    let result = match ctx.lookup(program) {
        Some(cmd) => {
            debug!("builtin: {}", String::from_utf8_lossy(program));
            cmd.execute(tokens, ctx, stdout)
        }
        None => {
            debug!("external: {}", String::from_utf8_lossy(program));
            SystemCommand.execute(tokens, ctx, stdout)
        }
    };

    match result {
        Ok(signal) => signal,
        Err(e) => {
            report_error(stderr, &e);
            Signal::Continue
        }
    }
}

/// Writes `err` and its causes on one line, prefixed with the shell name.
pub fn report_error(stderr: &mut dyn Write, err: &anyhow::Error) {
    let prefix = diagnostic_prefix(io::stderr().is_terminal());
    writeln!(stderr, "{} {:#}", prefix, err).ok();
}

/// Colour follows the error stream, not stdout, so `2>file` stays plain.
fn diagnostic_prefix(color: bool) -> String {
    if color { "wsh:".red().bold().to_string() } else { "wsh:".to_string() }
}
