use quizterm::config::{Config, ConfigError};
use quizterm::trivia::Difficulty;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.provider.base_url, "https://opentdb.com");
    assert_eq!(config.quiz.amount, 10);
}

#[test]
fn full_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[provider]
base_url = "http://127.0.0.1:8080/"
timeout_seconds = 3
connect_timeout_seconds = 2

[quiz]
category = "history"
amount = 2
difficulty = "easy"

[logging]
level = "debug"
file = "/tmp/quizterm-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.provider.base_url, "http://127.0.0.1:8080/");
    assert_eq!(config.provider.timeout_seconds, 3);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/quizterm-test.log"))
    );

    let request = config.default_request().unwrap();
    assert_eq!(request.category.id, 23);
    assert_eq!(request.amount, 2);
    assert_eq!(request.difficulty, Difficulty::Easy);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[quiz]\namount = 25\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.quiz.amount, 25);
    assert_eq!(config.quiz.category, "General Knowledge");
    assert_eq!(config.provider.timeout_seconds, 10);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[quiz\namount = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn out_of_range_amount_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[quiz]\namount = 0\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("between 1 and 50"));
}

#[test]
fn unknown_category_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[quiz]\ncategory = \"Astrology\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("unknown category 'Astrology'"));
}

#[test]
fn non_http_base_url_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[provider]\nbase_url = \"ftp://opentdb.com\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[provider]\ntimeout_seconds = 0\n");

    assert!(Config::load_from(&path).is_err());
}
