// Exit command

use crate::shell::commands::{Executable, Signal};
use crate::shell::context::ShellContext;
use anyhow::Result;
use std::io::Write;

pub struct ExitCommand;
impl Executable for ExitCommand {
    fn execute(&self, _args: &[&[u8]], _ctx: &ShellContext, _stdout: &mut dyn Write) -> Result<Signal> {
        Ok(Signal::Terminate)
    }
}
