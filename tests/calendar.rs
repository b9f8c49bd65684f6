#[cfg(test)]
mod tests {
    use allio::db::calendar::{Calendar, DayEntry};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct CalendarTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for CalendarTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            CalendarTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    const DATE: &str = "2026-08-04";

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_toggle_mark_creates_entry(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();

        let entry = calendar.toggle_mark(DATE).unwrap();

        assert!(entry.marked);
        assert_eq!(entry.note, "");
        assert!(entry.tasks.is_empty());
        assert_eq!(calendar.entry(DATE), Some(entry));
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_toggle_twice_keeps_unmarked_entry(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();

        calendar.toggle_mark(DATE).unwrap();
        let entry = calendar.toggle_mark(DATE).unwrap();

        // Equivalent to absent for display, but not pruned.
        assert!(!entry.marked);
        assert!(entry.is_empty());
        assert!(calendar.fetch().contains_key(DATE));
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_set_note_keeps_other_fields(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();

        calendar.toggle_mark(DATE).unwrap();
        calendar.add_task(DATE, "stretch").unwrap();
        let entry = calendar.set_note(DATE, "went for a run").unwrap();

        assert!(entry.marked);
        assert_eq!(entry.note, "went for a run");
        assert_eq!(entry.tasks, vec!["stretch".to_string()]);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_add_tasks_preserves_order(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();

        calendar.add_task(DATE, "one").unwrap();
        calendar.add_task(DATE, "two").unwrap();
        let entry = calendar.add_task(DATE, "three").unwrap();

        assert_eq!(entry.tasks, vec!["one".to_string(), "two".to_string(), "three".to_string()]);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_remove_task_by_index(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();

        calendar.add_task(DATE, "one").unwrap();
        calendar.add_task(DATE, "two").unwrap();
        calendar.add_task(DATE, "three").unwrap();

        let entry = calendar.remove_task(DATE, 1).unwrap();
        assert_eq!(entry.tasks, vec!["one".to_string(), "three".to_string()]);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_remove_task_out_of_range_fails(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();

        calendar.add_task(DATE, "only").unwrap();
        assert!(calendar.remove_task(DATE, 1).is_err());
        assert!(calendar.remove_task("2026-01-01", 0).is_err());
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_clear_removes_entry_entirely(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();

        calendar.toggle_mark(DATE).unwrap();
        calendar.set_note(DATE, "note").unwrap();

        assert!(calendar.clear(DATE).unwrap());
        assert!(!calendar.fetch().contains_key(DATE));
        assert_eq!(calendar.entry(DATE), None);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_clear_absent_date_reports_nothing_removed(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();
        assert!(!calendar.clear(DATE).unwrap());
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_entries_are_kept_per_date(_ctx: &mut CalendarTestContext) {
        let calendar = Calendar::new().unwrap();

        calendar.toggle_mark("2026-08-01").unwrap();
        calendar.add_task("2026-08-02", "task").unwrap();

        let data = calendar.fetch();
        assert_eq!(data.len(), 2);
        assert!(data["2026-08-01"].marked);
        assert!(!data["2026-08-02"].marked);
    }

    #[test]
    fn test_default_entry_is_empty() {
        assert!(DayEntry::default().is_empty());
    }
}
