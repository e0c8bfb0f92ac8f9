//! Configuration loading tests

use std::fs;

use tempfile::TempDir;
use termpaint::prompt::PromptSize;
use termpaint::Config;

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn file_values_override_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[prompt]\nrows = 10\ncols = 50\n\n[log]\nlevel = \"termpaint=debug\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.prompt, PromptSize { rows: 10, cols: 50 });
    assert_eq!(config.log.level, "termpaint=debug");
}

#[test]
fn malformed_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[prompt]\nrows = \"eight\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("config.toml"));
}

#[test]
fn defaults_serialize_to_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert!(text.contains("[prompt]"));
    assert_eq!(Config::from_toml(&text).unwrap(), Config::default());
}
