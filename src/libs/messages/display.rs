//! Text for every [`Message`] variant. Keeping it in one place means the
//! wording can change without touching call sites.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigUnreadable(error) => {
                format!("Configuration could not be read ({}), using defaults", error)
            }
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptThemePalette => "Theme palette".to_string(),
            Message::PromptDailyGoal => "Daily water goal (glasses)".to_string(),

            // === NOTE MESSAGES ===
            Message::NoteCreated(title) => format!("Note '{}' created", title),
            Message::NoteUpdated(title) => format!("Note '{}' updated", title),
            Message::NoteDeleted => "Note deleted".to_string(),
            Message::NoteNotFound(id) => format!("No note with id {}", id),
            Message::NoteEmpty => "Please write something before saving".to_string(),
            Message::NoteSaveFailed => "Failed to save notes".to_string(),
            Message::NoNotesFound => "No notes yet".to_string(),
            Message::NotesHeader => "📝 Notes".to_string(),
            Message::ConfirmDeleteNote(title) => format!("Delete note '{}'?", title),
            Message::PromptNoteTitle => "Title".to_string(),
            Message::PromptNoteContent => "Content".to_string(),

            // === CALENDAR MESSAGES ===
            Message::DayMarked(date) => format!("{} marked", date),
            Message::DayUnmarked(date) => format!("{} unmarked", date),
            Message::DayNoteSaved(date) => format!("Note saved for {}", date),
            Message::DayTaskAdded(date) => format!("Task added for {}", date),
            Message::DayTaskRemoved(date) => format!("Task removed from {}", date),
            Message::DayCleared(date) => format!("Cleared all data for {}", date),
            Message::NoDayData(date) => format!("No data recorded for {}", date),
            Message::TaskIndexOutOfRange(index) => format!("No task at index {}", index),
            Message::TaskEmpty => "Task text cannot be empty".to_string(),
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD", date),
            Message::NoCalendarData => "No calendar entries yet".to_string(),
            Message::CalendarHeader => "📅 Calendar".to_string(),
            Message::CalendarSaveFailed => "Failed to save calendar data".to_string(),
            Message::ConfirmClearDay(date) => format!("Clear all data for {}?", date),
            Message::PromptDayNote => "Note".to_string(),

            // === WATER MESSAGES ===
            Message::WaterGlassAdded(count) => format!("Glass added, {} today", count),
            Message::WaterGlassRemoved(count) => format!("Glass removed, {} today", count),
            Message::WaterAtZero => "Water count is already at zero".to_string(),
            Message::WaterReset => "Water count reset to zero".to_string(),
            Message::WaterGoalReached(goal) => format!("Daily goal of {} glasses reached! 💧", goal),
            Message::WaterSaveFailed => "Failed to save water intake".to_string(),

            // === OVERVIEW MESSAGES ===
            Message::Greeting(greeting, date) => format!("{}! Today is {}", greeting, date),
            Message::StreakDays(days) => {
                format!("🔥 {} day{} streak! Keep the momentum going", days, plural(*days))
            }
            Message::DailyQuote(quote) => format!("\"{}\"", quote),
            Message::WeekActivity(days) => format!("{} day{} active this week", days, plural(*days)),

            // === ACCOUNT MESSAGES ===
            Message::UsernameSaved(name) => format!("Username '{}' saved", name),
            Message::UsernameEmpty => "Username cannot be empty".to_string(),
            Message::UsernameSaveFailed => "Failed to save username".to_string(),
            Message::NoUsernameSet => "No username set".to_string(),
            Message::CurrentUsername(name) => format!("Username: {}", name),
            Message::LoginSuccess(email) => format!("Signed in as {}", email),
            Message::LoginMissingFields => "Please fill in all the fields".to_string(),
            Message::LoginPasswordTooShort => "Password must be at least 6 characters long".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),

            // === COMMON MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
