//! Logging setup tests
//!
//! A global tracing subscriber can only be installed once per process, so
//! `init_logging` is exercised by a single test in this binary.

use std::io::Write;

use serde_json::Value;
use tempfile::TempDir;

use userql::config::LoggingConfig;
use userql::system::init_logging;
use userql::system::logging::build_writer;

fn file_config(dir: &TempDir, name: &str, enable_rotation: bool) -> LoggingConfig {
    LoggingConfig {
        file: Some(dir.path().join(name).to_string_lossy().into_owned()),
        enable_rotation,
        ..LoggingConfig::default()
    }
}

#[test]
fn test_init_logging_writes_json_to_file() {
    let dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        format: "json".to_string(),
        ..file_config(&dir, "userql.log", false)
    };

    let guard = init_logging(&config).expect("logging should initialize");
    tracing::info!("logging to a file works");
    // 第二次安装订阅者应当失败
    assert!(init_logging(&config).is_err());
    drop(guard);

    let contents = std::fs::read_to_string(dir.path().join("userql.log")).unwrap();
    let line = contents
        .lines()
        .find(|l| l.contains("logging to a file works"))
        .expect("event should be written to the log file");
    let event: Value = serde_json::from_str(line).expect("each line should be JSON");
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "logging to a file works");
}

#[test]
fn test_rotating_writer_creates_dated_file() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir, "app.log", true);

    let mut writer = build_writer(&config).expect("rolling appender should build");
    writer.write_all(b"hello\n").unwrap();
    writer.flush().unwrap();
    drop(writer);

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        names
            .iter()
            .any(|n| n.starts_with("app.") && n.ends_with(".log") && n != "app.log"),
        "{:?}",
        names
    );
}

#[test]
fn test_plain_writer_appends_to_file() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir, "plain.log", false);

    for line in ["first\n", "second\n"] {
        let mut writer = build_writer(&config).unwrap();
        writer.write_all(line.as_bytes()).unwrap();
        writer.flush().unwrap();
    }

    let contents = std::fs::read_to_string(dir.path().join("plain.log")).unwrap();
    assert_eq!(contents, "first\nsecond\n");
}

#[test]
fn test_plain_writer_fails_for_missing_directory() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir, "missing/plain.log", false);
    assert!(build_writer(&config).is_err());
}
