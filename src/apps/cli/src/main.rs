//! Moodmate CLI entry point.

mod args;
mod chat_loop;
mod wizard;

use anyhow::Result;
use args::{Cli, Command};
use clap::Parser;
use moodmate_core::MoodLogStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = MoodLogStore::default_location()?;

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => chat_loop::run(&store).await?,
        Command::Logs => print_logs(&store),
        Command::Delete { date } => {
            store.delete_for_date(&date)?;
            println!("已删除 {} 的记录。", date);
        }
    }
    Ok(())
}

fn print_logs(store: &MoodLogStore) {
    let logs = store.load_all();
    if logs.is_empty() {
        println!("还没有记录。");
        return;
    }
    for log in logs {
        println!("{}  {}  强度 {}/10  {}", log.date, log.mood, log.intensity, log.note);
    }
}
