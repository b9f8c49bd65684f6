use crate::db::calendar::{DayData, DayEntry};
use crate::db::water::GLASS_ML;
use crate::libs::formatter::{format_relative, progress_percent};
use crate::libs::note::Note;
use crate::libs::theme::ThemePalette;
use prettytable::{row, Attr, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn notes(notes: &[Note], palette: ThemePalette) {
        let mut table = Table::new();

        table.add_row(Self::header(&["ID", "TITLE", "CONTENT", "UPDATED"], palette));
        for note in notes {
            table.add_row(row![note.id, note.title, preview(&note.content), format_relative(&note.updated_at)]);
        }
        table.printstd();
    }

    pub fn note(note: &Note, palette: ThemePalette) {
        let mut table = Table::new();

        table.add_row(Self::header(&["ID", "CREATED", "UPDATED"], palette));
        table.add_row(row![note.id, format_relative(&note.created_at), format_relative(&note.updated_at)]);
        table.printstd();

        println!("{}", note.title);
        println!("{}", note.content);
    }

    pub fn days(data: &DayData, palette: ThemePalette) {
        let mut table = Table::new();

        table.add_row(Self::header(&["DATE", "MARKED", "NOTE", "TASKS"], palette));
        for (date, entry) in data {
            table.add_row(row![
                date,
                if entry.marked { "*" } else { "" },
                preview(&entry.note),
                entry.tasks.len()
            ]);
        }
        table.printstd();
    }

    pub fn day(date: &str, entry: &DayEntry, palette: ThemePalette) {
        let mut table = Table::new();

        table.add_row(Self::header(&["DATE", "MARKED", "NOTE"], palette));
        table.add_row(row![date, if entry.marked { "yes" } else { "no" }, entry.note]);
        table.printstd();

        if !entry.tasks.is_empty() {
            let mut tasks = Table::new();
            tasks.add_row(Self::header(&["#", "TASK"], palette));
            for (index, task) in entry.tasks.iter().enumerate() {
                tasks.add_row(row![index, task]);
            }
            tasks.printstd();
        }
    }

    pub fn water(count: i64, goal: i64, palette: ThemePalette) {
        let mut table = Table::new();

        table.add_row(Self::header(&["GLASSES", "TOTAL", "GOAL", "PROGRESS"], palette));
        table.add_row(row![
            count,
            format!("{} ml", count * GLASS_ML),
            format!("{} glasses", goal),
            format!("{}%", progress_percent(count, goal))
        ]);
        table.printstd();
    }

    pub fn overview(glasses: i64, tasks_today: usize, notes_written: usize, palette: ThemePalette) {
        let mut table = Table::new();

        table.add_row(Self::header(&["WATER", "TASKS", "NOTES"], palette));
        table.add_row(row![format!("{} glasses", glasses), tasks_today, notes_written]);
        table.printstd();
    }

    /// Mon to Sun activity strip, one dot per day, filled for the first
    /// `active_days` days.
    pub fn week(active_days: i64) {
        let labels = ["M", "T", "W", "T", "F", "S", "S"];
        let dots: Vec<&str> = (0..7).map(|day| if (day as i64) < active_days { "●" } else { "○" }).collect();
        println!("  {}", labels.join(" "));
        println!("  {}", dots.join(" "));
    }

    fn header(titles: &[&str], palette: ThemePalette) -> Row {
        Row::new(
            titles
                .iter()
                .map(|title| {
                    Cell::new(title)
                        .with_style(Attr::Bold)
                        .with_style(Attr::ForegroundColor(palette.accent()))
                })
                .collect(),
        )
    }
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(MAX_CHARS).collect();
        format!("{}...", truncated)
    }
}
