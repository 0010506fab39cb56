// System command

use crate::shell::commands::{Executable, Signal};
use crate::shell::context::ShellContext;
use crate::utils::os_str;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

/// Runs a program found on `PATH` (or by relative/absolute path) and blocks
/// until it exits or is killed. The child's status never stops the loop.
pub struct SystemCommand;

impl Executable for SystemCommand {
    fn execute(&self, args: &[&[u8]], _ctx: &ShellContext, stdout: &mut dyn Write) -> Result<Signal> {
        let Some((program, cmd_args)) = args.split_first() else {
            return Ok(Signal::Continue);
        };

        // Anything still buffered must land before the child writes.
        stdout.flush().ok();

        let name = String::from_utf8_lossy(program);
        let mut cmd = Command::new(os_str(program));
        cmd.args(cmd_args.iter().map(|arg| os_str(arg)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = cmd.spawn().with_context(|| name.to_string())?;
        let status = child
            .wait()
            .with_context(|| format!("failed to wait for {}", name))?;

        debug!("{} (pid {}) {}", name, child.id(), describe_status(status));
        Ok(Signal::Continue)
    }
}

fn describe_status(status: ExitStatus) -> String {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return format!("terminated by signal {}", sig);
        }
    }
    match status.code() {
        Some(code) => format!("exited with code {}", code),
        None => "terminated".to_string(),
    }
}
