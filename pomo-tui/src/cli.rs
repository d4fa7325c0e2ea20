use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pomo-tui")]
#[command(about = "Terminal focus timer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the timer UI (default)
    Run,
    /// Print config path and create default file if missing
    ConfigPath,
}
