use fintrack_core::{init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("temp dir");
    let other_dir = tempfile::tempdir().expect("temp dir");
    let log_dir_str = log_dir.path().to_str().expect("utf-8 temp dir").to_string();
    let other_dir_str = other_dir.path().to_str().expect("utf-8 temp dir").to_string();

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).expect_err("level conflict");
    assert!(matches!(level_error, LoggingError::Conflict { .. }));
    assert!(level_error.to_string().contains("refusing to switch"));

    let dir_error = init_logging("info", &other_dir_str).expect_err("directory conflict");
    assert!(matches!(dir_error, LoggingError::Conflict { .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());
}
