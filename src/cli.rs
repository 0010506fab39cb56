use clap::Parser;

#[derive(Parser)]
#[command(name = "wsh", version, about = "Wake Shell: Minimalist Command Interpreter")]
pub struct Cli {
    /// Do not print a prompt before reading each line (for piped input)
    #[arg(short = 'n', long = "no-prompt")]
    pub no_prompt: bool,
}
