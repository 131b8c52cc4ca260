use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "agenda-tui")]
#[command(about = "Terminal front end for recording daily activities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against a real agenda API server
    Run,
    /// Run in dev mode with local in-memory data
    Dev {
        /// Act as a supervisor instead of an employee
        #[arg(long)]
        supervisor: bool,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}
