pub mod account;
pub mod calendar;
pub mod init;
pub mod note;
pub mod overview;
pub mod water;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage free-text notes")]
    Note(note::NoteArgs),
    #[command(about = "Per-day marks, notes and tasks")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Track daily water intake")]
    Water(water::WaterArgs),
    #[command(about = "Daily overview and activity streak")]
    Overview,
    #[command(about = "Username and placeholder sign-in")]
    Account(account::AccountArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Note(args) => note::cmd(args),
            Commands::Calendar(args) => calendar::cmd(args),
            Commands::Water(args) => water::cmd(args),
            Commands::Overview => overview::cmd(),
            Commands::Account(args) => account::cmd(args),
        }
    }
}
