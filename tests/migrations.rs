#[cfg(test)]
mod tests {
    use pomo::db::db::Db;
    use pomo::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.temp_dir.path().join("pomo.db")).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test]
    fn test_fresh_connection_needs_migration() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)", [])
            .unwrap();
        assert!(needs_migration(&conn).unwrap());
    }

    #[test]
    fn test_migration_history_in_order() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_tasks", "create_session_records", "add_session_record_indices"]);
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
    }

    #[test]
    fn test_migration_idempotency() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        manager.run_migrations(&mut conn).unwrap();

        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 3);
        assert!(manager.is_migration_applied(&conn, 2).unwrap());
        assert!(!manager.is_migration_applied(&conn, 4).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopen_keeps_data(ctx: &mut MigrationTestContext) {
        let path = ctx.temp_dir.path().join("pomo.db");
        {
            let db = Db::open(&path).unwrap();
            db.conn
                .execute(
                    "INSERT INTO tasks (id, title, created_at, updated_at) VALUES ('t1', 'Kept', '2025-01-01 00:00:00', '2025-01-01 00:00:00')",
                    [],
                )
                .unwrap();
        }

        let db = Db::open(&path).unwrap();
        let title: String = db.conn.query_row("SELECT title FROM tasks WHERE id = 't1'", [], |row| row.get(0)).unwrap();
        assert_eq!(title, "Kept");
    }
}
