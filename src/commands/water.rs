use crate::{
    db::water::WaterIntake,
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct WaterArgs {
    #[command(subcommand)]
    command: Option<WaterCommand>,
}

#[derive(Debug, Subcommand)]
enum WaterCommand {
    /// Log one or more glasses
    Add {
        /// Number of glasses to add
        #[arg(default_value_t = 1)]
        count: i64,
    },
    /// Remove the last logged glass
    Remove,
    /// Reset today's count to zero
    Reset,
    /// Show today's intake and goal progress
    Status,
}

pub fn cmd(args: WaterArgs) -> Result<()> {
    match args.command {
        Some(WaterCommand::Add { count }) => handle_add(count),
        Some(WaterCommand::Remove) => handle_remove(),
        Some(WaterCommand::Reset) => handle_reset(),
        Some(WaterCommand::Status) | None => handle_status(),
    }
}

fn handle_add(count: i64) -> Result<()> {
    let water = WaterIntake::new()?;
    let added = count.max(0);
    let mut total = water.current();
    for _ in 0..added {
        total = water.add_glass()?;
    }
    msg_success!(Message::WaterGlassAdded(total));

    let goal = Config::read_or_default().daily_goal();
    if total >= goal && total - added < goal {
        msg_print!(Message::WaterGoalReached(goal));
    }
    Ok(())
}

fn handle_remove() -> Result<()> {
    let water = WaterIntake::new()?;
    if water.current() == 0 {
        msg_info!(Message::WaterAtZero);
        return Ok(());
    }

    let total = water.remove_glass()?;
    msg_success!(Message::WaterGlassRemoved(total));
    Ok(())
}

fn handle_reset() -> Result<()> {
    WaterIntake::new()?.reset()?;
    msg_success!(Message::WaterReset);
    Ok(())
}

fn handle_status() -> Result<()> {
    let config = Config::read_or_default();
    let count = WaterIntake::new()?.current();
    View::water(count, config.daily_goal(), config.theme_palette());
    Ok(())
}
