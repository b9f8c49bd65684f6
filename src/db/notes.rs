use crate::db::kv::Kv;
use crate::libs::messages::Message;
use crate::libs::note::Note;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Utc;

const KEY_NOTES: &str = "notes";

/// Note collection accessor. The whole list is the unit of storage, so
/// every mutation is a read-modify-write of the full collection.
pub struct Notes {
    kv: Kv,
}

impl Notes {
    pub fn new() -> Result<Self> {
        Ok(Self { kv: Kv::new()? })
    }

    /// All notes, newest-created first. Empty when nothing is stored or
    /// the stored value is unreadable.
    pub fn fetch(&self) -> Vec<Note> {
        self.kv.get(KEY_NOTES).unwrap_or_default()
    }

    /// Replaces the entire collection.
    pub fn save(&self, notes: &[Note]) -> bool {
        self.kv.save(KEY_NOTES, &notes)
    }

    /// Creates a note and prepends it to the collection.
    pub fn create(&self, title: &str, content: &str) -> Result<Note> {
        let note = Note::new(title, content);
        let mut notes = self.fetch();
        notes.insert(0, note.clone());
        if !self.save(&notes) {
            return Err(msg_error_anyhow!(Message::NoteSaveFailed));
        }
        Ok(note)
    }

    pub fn get(&self, id: &str) -> Option<Note> {
        self.fetch().into_iter().find(|note| note.id == id)
    }

    /// Rewrites title and content of an existing note. The id and creation
    /// time never change; `updated_at` is refreshed.
    pub fn update(&self, id: &str, title: &str, content: &str) -> Result<Note> {
        let mut notes = self.fetch();
        let note = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| msg_error_anyhow!(Message::NoteNotFound(id.to_string())))?;

        let title = title.trim();
        note.title = if title.is_empty() {
            Note::DEFAULT_TITLE.to_string()
        } else {
            title.to_string()
        };
        note.content = content.to_string();
        note.updated_at = Utc::now().to_rfc3339();
        let updated = note.clone();

        if !self.save(&notes) {
            return Err(msg_error_anyhow!(Message::NoteSaveFailed));
        }
        Ok(updated)
    }

    /// Removes a note by id and returns it.
    pub fn delete(&self, id: &str) -> Result<Note> {
        let mut notes = self.fetch();
        let position = notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| msg_error_anyhow!(Message::NoteNotFound(id.to_string())))?;
        let note = notes.remove(position);
        if !self.save(&notes) {
            return Err(msg_error_anyhow!(Message::NoteSaveFailed));
        }
        Ok(note)
    }
}
