#[cfg(test)]
mod tests {
    use allio::db::notes::Notes;
    use allio::libs::note::Note;
    use std::sync::{Mutex, MutexGuard};
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct NotesTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for NotesTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            NotesTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    /// Ids come from the creation timestamp in milliseconds, so back-to-back
    /// creations need a nudge apart to get distinct ids.
    fn next_millisecond() {
        thread::sleep(Duration::from_millis(2));
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_fetch_defaults_to_empty(_ctx: &mut NotesTestContext) {
        let notes = Notes::new().unwrap();
        assert!(notes.fetch().is_empty());
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_create_single_note(_ctx: &mut NotesTestContext) {
        let notes = Notes::new().unwrap();

        let note = notes.create("A", "B").unwrap();
        let stored = notes.fetch();

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], note);
        assert_eq!(stored[0].title, "A");
        assert_eq!(stored[0].content, "B");
        assert!(!stored[0].id.is_empty());
        assert!(!stored[0].created_at.is_empty());
        assert!(!stored[0].updated_at.is_empty());
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_save_and_fetch_round_trip(_ctx: &mut NotesTestContext) {
        let notes = Notes::new().unwrap();
        let list = vec![Note::new("first", "one"), Note::new("second", "two")];

        assert!(notes.save(&list));
        assert_eq!(notes.fetch(), list);
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_newest_note_comes_first(_ctx: &mut NotesTestContext) {
        let notes = Notes::new().unwrap();

        notes.create("older", "").unwrap();
        next_millisecond();
        notes.create("newer", "").unwrap();

        let stored = notes.fetch();
        assert_eq!(stored[0].title, "newer");
        assert_eq!(stored[1].title, "older");
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_empty_title_falls_back_to_untitled(_ctx: &mut NotesTestContext) {
        let notes = Notes::new().unwrap();

        let note = notes.create("   ", "some content").unwrap();
        assert_eq!(note.title, Note::DEFAULT_TITLE);
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_update_refreshes_updated_at_only(_ctx: &mut NotesTestContext) {
        let notes = Notes::new().unwrap();
        let note = notes.create("title", "content").unwrap();

        next_millisecond();
        let updated = notes.update(&note.id, "new title", "new content").unwrap();

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.created_at, note.created_at);
        assert_eq!(updated.title, "new title");
        assert_eq!(updated.content, "new content");
        assert_ne!(updated.updated_at, note.updated_at);
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_update_unknown_id_fails(_ctx: &mut NotesTestContext) {
        let notes = Notes::new().unwrap();
        assert!(notes.update("12345", "t", "c").is_err());
    }

    #[test_context(NotesTestContext)]
    #[test]
    fn test_delete_removes_only_that_note(_ctx: &mut NotesTestContext) {
        let notes = Notes::new().unwrap();

        let first = notes.create("first", "").unwrap();
        next_millisecond();
        let second = notes.create("second", "").unwrap();
        next_millisecond();
        let third = notes.create("third", "").unwrap();

        notes.delete(&second.id).unwrap();

        let stored = notes.fetch();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, third.id);
        assert_eq!(stored[1].id, first.id);
    }

    #[test]
    fn test_blank_detection() {
        assert!(Note::is_blank("", ""));
        assert!(Note::is_blank("   ", "\t"));
        assert!(!Note::is_blank("title", ""));
        assert!(!Note::is_blank("", "content"));
    }
}
