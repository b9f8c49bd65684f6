//! Aggregated daily overview. Visiting it is what counts as activity for
//! the streak, so the streak transition runs before anything is shown.

use crate::{
    db::{calendar::Calendar, notes::Notes, streak::Streak, water::WaterIntake},
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::{Datelike, Local, Timelike};

/// One quote per weekday, Sunday first.
const QUOTES: [&str; 7] = [
    "Small steps every day lead to big changes.",
    "Progress, not perfection.",
    "You're doing great! Keep going.",
    "Every day is a fresh start.",
    "Consistency is key to success.",
    "Believe in your journey.",
    "One day at a time.",
];

pub fn cmd() -> Result<()> {
    let config = Config::read_or_default();
    let now = Local::now();

    let greeting = match now.hour() {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    };
    let date_line = now.format("%A, %B %-d").to_string();
    msg_print!(Message::Greeting(greeting.to_string(), date_line), true);

    let streak = Streak::new()?.update();
    msg_print!(Message::StreakDays(streak));

    let today = now.date_naive().to_string();
    let glasses = WaterIntake::new()?.current();
    let tasks_today = Calendar::new()?.entry(&today).map(|entry| entry.tasks.len()).unwrap_or(0);
    let notes_written = Notes::new()?.fetch().len();
    View::overview(glasses, tasks_today, notes_written, config.theme_palette());

    let quote = QUOTES[now.weekday().num_days_from_sunday() as usize];
    msg_print!(Message::DailyQuote(quote.to_string()), true);

    let active_days = streak.min(7);
    View::week(active_days);
    msg_print!(Message::WeekActivity(active_days));
    Ok(())
}
