use crate::{
    db::calendar::Calendar,
    libs::{config::Config, messages::Message, view::View},
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct CalendarArgs {
    #[command(subcommand)]
    command: Option<CalendarCommand>,
}

#[derive(Debug, Subcommand)]
enum CalendarCommand {
    /// List every day with recorded data
    List,
    /// Show one day in detail
    Show {
        /// Date as YYYY-MM-DD, today when omitted
        date: Option<String>,
    },
    /// Toggle the mark for a day
    Mark {
        /// Date as YYYY-MM-DD, today when omitted
        date: Option<String>,
    },
    /// Set the note for a day
    Note {
        /// Date as YYYY-MM-DD, today when omitted
        date: Option<String>,
        /// Note text, prompted for when omitted
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Append a task to a day's task list
    AddTask {
        /// Task text
        task: String,
        /// Date as YYYY-MM-DD, today when omitted
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove a task from a day's task list by index
    RemoveTask {
        /// Task index as shown by `show`
        index: usize,
        /// Date as YYYY-MM-DD, today when omitted
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Drop all data recorded for a day
    Clear {
        /// Date as YYYY-MM-DD, today when omitted
        date: Option<String>,
    },
}

pub fn cmd(args: CalendarArgs) -> Result<()> {
    match args.command {
        Some(CalendarCommand::List) | None => handle_list(),
        Some(CalendarCommand::Show { date }) => handle_show(date),
        Some(CalendarCommand::Mark { date }) => handle_mark(date),
        Some(CalendarCommand::Note { date, text }) => handle_note(date, text),
        Some(CalendarCommand::AddTask { task, date }) => handle_add_task(date, task),
        Some(CalendarCommand::RemoveTask { index, date }) => handle_remove_task(date, index),
        Some(CalendarCommand::Clear { date }) => handle_clear(date),
    }
}

/// Defaults to today and rejects anything that is not a calendar date.
fn resolve_date(date: Option<String>) -> Result<String> {
    let date = match date {
        Some(date) => date,
        None => return Ok(Local::now().date_naive().to_string()),
    };
    if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        msg_bail_anyhow!(Message::InvalidDate(date));
    }
    Ok(date)
}

fn handle_list() -> Result<()> {
    let data = Calendar::new()?.fetch();
    if data.is_empty() {
        msg_info!(Message::NoCalendarData);
        return Ok(());
    }

    msg_print!(Message::CalendarHeader, true);
    View::days(&data, Config::read_or_default().theme_palette());
    Ok(())
}

fn handle_show(date: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    match Calendar::new()?.entry(&date) {
        Some(entry) => View::day(&date, &entry, Config::read_or_default().theme_palette()),
        None => msg_info!(Message::NoDayData(date)),
    }
    Ok(())
}

fn handle_mark(date: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let entry = Calendar::new()?.toggle_mark(&date)?;
    if entry.marked {
        msg_success!(Message::DayMarked(date));
    } else {
        msg_success!(Message::DayUnmarked(date));
    }
    Ok(())
}

fn handle_note(date: Option<String>, text: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let text: String = match text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDayNote.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    Calendar::new()?.set_note(&date, &text)?;
    msg_success!(Message::DayNoteSaved(date));
    Ok(())
}

fn handle_add_task(date: Option<String>, task: String) -> Result<()> {
    let date = resolve_date(date)?;
    let task = task.trim();
    if task.is_empty() {
        msg_error!(Message::TaskEmpty);
        return Ok(());
    }

    Calendar::new()?.add_task(&date, task)?;
    msg_success!(Message::DayTaskAdded(date));
    Ok(())
}

fn handle_remove_task(date: Option<String>, index: usize) -> Result<()> {
    let date = resolve_date(date)?;
    Calendar::new()?.remove_task(&date, index)?;
    msg_success!(Message::DayTaskRemoved(date));
    Ok(())
}

fn handle_clear(date: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmClearDay(date.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if Calendar::new()?.clear(&date)? {
        msg_success!(Message::DayCleared(date));
    } else {
        msg_info!(Message::NoDayData(date));
    }
    Ok(())
}
