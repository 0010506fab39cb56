use crate::shell::commands::Signal;
use crate::shell::context::ShellContext;
use crate::shell::reader::read_line;
use crate::shell::run_command_line;
use crate::utils::select_prompt;
use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

/// Prompts, reads, tokenizes and dispatches until `exit` or end of input.
///
/// Returns `Ok(())` on both of those, and also when the prompt can no longer
/// be written (stdout closed), which ends the session. An `Err` is fatal:
/// the input stream failed or a line/token buffer could not be allocated.
pub fn run_loop<R: BufRead + ?Sized>(
    ctx: &ShellContext,
    input: &mut R,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    show_prompt: bool,
) -> Result<()> {
    loop {
        if show_prompt {
            let written = write!(stdout, "{}", select_prompt()).and_then(|_| stdout.flush());
            if let Err(e) = written {
                debug!("stdout closed, ending session: {}", e);
                return Ok(());
            }
        }

        let Some(line) = read_line(input)? else {
            debug!("end of input");
            return Ok(());
        };

        if run_command_line(&line, ctx, stdout, stderr)? == Signal::Terminate {
            debug!("exit requested");
            return Ok(());
        }
    }
}
