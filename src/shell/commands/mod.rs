pub mod builtins;
pub mod system;

use crate::shell::context::ShellContext;
use anyhow::Result;
use std::io::Write;

/// Whether the interpreter keeps reading lines after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Terminate,
}

pub trait Executable: Send + Sync {
    /// Runs the command. `args[0]` is the command name itself; arguments
    /// are the raw bytes the user typed.
    fn execute(&self, args: &[&[u8]], ctx: &ShellContext, stdout: &mut dyn Write) -> Result<Signal>;
}
