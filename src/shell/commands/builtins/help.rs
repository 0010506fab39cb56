// Help command

use crate::shell::commands::{Executable, Signal};
use crate::shell::context::ShellContext;
use anyhow::Result;
use colored::*;
use std::io::Write;

pub struct HelpCommand;

impl Executable for HelpCommand {
    fn execute(&self, _args: &[&[u8]], ctx: &ShellContext, stdout: &mut dyn Write) -> Result<Signal> {
        writeln!(stdout, "{}", "Wake Shell WSH".bold())?;
        writeln!(stdout, "The following are built in:")?;
        for name in ctx.builtin_names() {
            writeln!(stdout, "  {}", name)?;
        }
        writeln!(stdout, "Use the man command for information on other programs.")?;
        Ok(Signal::Continue)
    }
}
