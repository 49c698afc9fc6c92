//! Drives `mcp-course` commands end to end through `course_cli::run`.

#![allow(clippy::unwrap_used)]

use clap::Parser;
use course_cli::cli::Cli;
use course_core::CourseConfig;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["mcp-course"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[tokio::test]
async fn test_config_init_then_tools() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("config.toml");
    let file = file.to_str().unwrap();

    course_cli::run(parse(&["config", "init", "--file", file]))
        .await
        .unwrap();
    assert_eq!(
        CourseConfig::from_file(std::path::Path::new(file)).unwrap(),
        CourseConfig::default()
    );

    course_cli::run(parse(&["--config", file, "tools", "weather"]))
        .await
        .unwrap();
    course_cli::run(parse(&["--config", file, "config", "show"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = course_cli::run(parse(&["--config", missing.to_str().unwrap(), "tools", "text"]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[tokio::test]
async fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.toml");
    std::fs::write(&file, "[events]\nmax_events = 0\n").unwrap();

    let result = course_cli::run(parse(&["--config", file.to_str().unwrap(), "tools", "text"])).await;
    assert!(result.is_err());
}
