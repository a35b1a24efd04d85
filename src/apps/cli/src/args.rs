//! Command-line arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moodmate", version, about = "Mood journaling companion")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the guided wizard and chat with the companion (default)
    Chat,
    /// List saved daily mood logs
    Logs,
    /// Delete the mood log for one date (YYYY-MM-DD)
    Delete { date: String },
}
