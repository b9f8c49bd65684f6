use crate::db::kv::Kv;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const KEY_CALENDAR_DAY_DATA: &str = "calendar_day_data";

/// Per-date record of mark, note and tasks. An all-default entry displays
/// the same as a missing one, but only an explicit clear removes it from
/// the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub marked: bool,
    pub note: String,
    pub tasks: Vec<String>,
}

impl DayEntry {
    pub fn is_empty(&self) -> bool {
        !self.marked && self.note.is_empty() && self.tasks.is_empty()
    }
}

/// The whole calendar, keyed by `YYYY-MM-DD`. Stored under a single
/// composite key, so every operation rewrites the full map.
pub type DayData = BTreeMap<String, DayEntry>;

pub struct Calendar {
    kv: Kv,
}

impl Calendar {
    pub fn new() -> Result<Self> {
        Ok(Self { kv: Kv::new()? })
    }

    pub fn fetch(&self) -> DayData {
        self.kv.get(KEY_CALENDAR_DAY_DATA).unwrap_or_default()
    }

    pub fn entry(&self, date: &str) -> Option<DayEntry> {
        self.fetch().get(date).cloned()
    }

    /// Flips the mark for a date, creating the entry when absent.
    pub fn toggle_mark(&self, date: &str) -> Result<DayEntry> {
        self.modify(date, |entry| entry.marked = !entry.marked)
    }

    pub fn set_note(&self, date: &str, note: &str) -> Result<DayEntry> {
        self.modify(date, |entry| entry.note = note.to_string())
    }

    pub fn add_task(&self, date: &str, task: &str) -> Result<DayEntry> {
        self.modify(date, |entry| entry.tasks.push(task.to_string()))
    }

    /// Removes the task at `index`, keeping the order of the rest.
    pub fn remove_task(&self, date: &str, index: usize) -> Result<DayEntry> {
        let mut data = self.fetch();
        let entry = data.entry(date.to_string()).or_default();
        if index >= entry.tasks.len() {
            return Err(msg_error_anyhow!(Message::TaskIndexOutOfRange(index)));
        }
        entry.tasks.remove(index);
        let entry = entry.clone();
        self.store(&data)?;
        Ok(entry)
    }

    /// Drops the whole entry for a date. Returns whether one existed.
    pub fn clear(&self, date: &str) -> Result<bool> {
        let mut data = self.fetch();
        let existed = data.remove(date).is_some();
        self.store(&data)?;
        Ok(existed)
    }

    fn modify(&self, date: &str, apply: impl FnOnce(&mut DayEntry)) -> Result<DayEntry> {
        let mut data = self.fetch();
        let entry = data.entry(date.to_string()).or_default();
        apply(entry);
        let entry = entry.clone();
        self.store(&data)?;
        Ok(entry)
    }

    fn store(&self, data: &DayData) -> Result<()> {
        if !self.kv.save(KEY_CALENDAR_DAY_DATA, data) {
            return Err(msg_error_anyhow!(Message::CalendarSaveFailed));
        }
        Ok(())
    }
}
