pub mod account;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gatehouse")]
#[command(about = "Local account and session store for game saves", long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, default_value = "gatehouse.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and open a session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Close the active session
    Logout,
    /// Show the dashboard for the active session
    Status,
    /// Append one game-data entry (JSON) to the active account
    Record {
        entry: String,
    },
    /// List registered usernames
    List,
}
