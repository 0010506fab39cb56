// Cd command

use crate::shell::commands::{Executable, Signal};
use crate::shell::context::ShellContext;
use crate::utils::os_str;
use anyhow::{Context, Result, bail};
use std::env;
use std::io::Write;

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[&[u8]], _ctx: &ShellContext, _stdout: &mut dyn Write) -> Result<Signal> {
        // args[0] is "cd". args[1] is the directory.
        let Some(path) = args.get(1) else {
            bail!("expected argument to \"cd\"");
        };

        env::set_current_dir(os_str(path))
            .with_context(|| format!("cd: {}", String::from_utf8_lossy(path)))?;
        Ok(Signal::Continue)
    }
}
