mod cli;
mod shell;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use shell::context::ShellContext;
use std::io;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let ctx = ShellContext::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    shell::repl::run_loop(&ctx, &mut input, &mut io::stdout(), &mut io::stderr(), !cli.no_prompt)
}
