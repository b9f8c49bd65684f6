#[cfg(test)]
mod tests {
    use allio::db::db::Db;
    use allio::db::kv::Kv;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the application data directory at a fresh temp dir. The lock
    /// serializes tests in this binary, since the directory comes from
    /// process-global environment variables.
    struct StorageTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            StorageTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_and_get_round_trip(_ctx: &mut StorageTestContext) {
        let kv = Kv::new().unwrap();

        assert!(kv.save("answer", &42i64));
        assert_eq!(kv.get::<i64>("answer"), Some(42));

        assert!(kv.save("list", &vec!["a".to_string(), "b".to_string()]));
        assert_eq!(kv.get::<Vec<String>>("list"), Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_get_missing_key_returns_none(_ctx: &mut StorageTestContext) {
        let kv = Kv::new().unwrap();
        assert_eq!(kv.get::<i64>("missing"), None);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_overwrites_existing_value(_ctx: &mut StorageTestContext) {
        let kv = Kv::new().unwrap();

        assert!(kv.save("counter", &1i64));
        assert!(kv.save("counter", &2i64));
        assert_eq!(kv.get::<i64>("counter"), Some(2));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_remove_deletes_key(_ctx: &mut StorageTestContext) {
        let kv = Kv::new().unwrap();

        assert!(kv.save("doomed", &"value".to_string()));
        assert!(kv.remove("doomed"));
        assert_eq!(kv.get::<String>("doomed"), None);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_remove_absent_key_is_success(_ctx: &mut StorageTestContext) {
        let kv = Kv::new().unwrap();
        assert!(kv.remove("never_existed"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_corrupted_value_reads_as_none(_ctx: &mut StorageTestContext) {
        // Plant a value that is not valid JSON behind the adapter's back.
        let db = Db::new().unwrap();
        db.conn
            .execute("INSERT INTO kv (key, value) VALUES ('bad', 'not json at all')", [])
            .unwrap();

        let kv = Kv::new().unwrap();
        assert_eq!(kv.get::<Vec<String>>("bad"), None);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_keys_are_independent(_ctx: &mut StorageTestContext) {
        let kv = Kv::new().unwrap();

        assert!(kv.save("one", &1i64));
        assert!(kv.save("two", &2i64));
        assert!(kv.remove("one"));

        assert_eq!(kv.get::<i64>("one"), None);
        assert_eq!(kv.get::<i64>("two"), Some(2));
    }
}
