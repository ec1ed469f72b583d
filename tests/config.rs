#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use pomo::libs::config::{Config, CONFIG_FILE_NAME};
    use pomo::libs::data_storage::DataStorage;
    use pomo::libs::settings::Settings;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Tests in this file share the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a temporary home for each test.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settings().unwrap(), Settings::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            pomodoro: Some(Settings::new(50, 10, 30, 3).unwrap()),
            active_task: Some("task-1".to_string()),
        };
        config.save().unwrap();

        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_uses_camel_case_settings(_ctx: &mut ConfigTestContext) {
        Config {
            pomodoro: Some(Settings::default()),
            active_task: None,
        }
        .save()
        .unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["pomodoro"]["workMinutes"], 25);
        assert_eq!(json["pomodoro"]["longBreakInterval"], 4);
        assert!(json.get("active_task").is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_out_of_range_file_values_are_rejected(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(
            path,
            r#"{"pomodoro":{"workMinutes":90,"shortBreakMinutes":5,"longBreakMinutes":15,"longBreakInterval":4}}"#,
        )
        .unwrap();

        let config = Config::read().unwrap();
        let error = config.settings().unwrap_err();
        assert!(error.to_string().contains("between 1 and 60"));
    }
}
