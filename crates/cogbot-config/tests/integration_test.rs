//! Integration tests for cogbot-config crate.

use cogbot_common::test_utils::{create_temp_dir, status_fixtures, CogTreeBuilder};
use cogbot_config::{ensure_options, is_active, read_status_lines, read_token, Config, ConfigLoader};

#[test]
fn test_default_config_layout() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.paths.token_file.to_str(), Some("secret.txt"));
    assert_eq!(config.paths.cogs_dir.to_str(), Some("Cogs"));
    assert_eq!(config.paths.status_file.to_str(), Some("Data/mainfiles/list.txt"));
    assert_eq!(config.status.interval_seconds, 60);
}

#[test]
fn test_ensure_options_is_idempotent() {
    let temp = create_temp_dir();
    let root = CogTreeBuilder::new(temp.path().join("Cogs")).cog("Music").build();
    let cog_dir = root.join("Music");

    let first = ensure_options(&cog_dir, "options.json").unwrap();
    let before = std::fs::read_to_string(&first).unwrap();
    let second = ensure_options(&cog_dir, "options.json").unwrap();
    let after = std::fs::read_to_string(&second).unwrap();

    assert_eq!(first, second);
    assert_eq!(before, after);
    let value: serde_json::Value = serde_json::from_str(&after).unwrap();
    assert_eq!(value, serde_json::json!({ "active": true }));
}

#[test]
fn test_user_edited_options_survive_ensure() {
    let temp = create_temp_dir();
    let root = CogTreeBuilder::new(temp.path().join("Cogs"))
        .cog_with_options("Admin", r#"{"active": false}"#)
        .build();

    let path = ensure_options(&root.join("Admin"), "options.json").unwrap();
    assert!(!is_active(&path));
}

#[test]
fn test_malformed_options_never_raise() {
    let temp = create_temp_dir();
    let root = CogTreeBuilder::new(temp.path().join("Cogs"))
        .cog_with_options("Broken", "not json at all")
        .cog_with_options("Wrong", r#"{"active": "yes"}"#)
        .build();

    assert!(!is_active(&root.join("Broken").join("options.json")));
    assert!(!is_active(&root.join("Wrong").join("options.json")));
}

#[test]
fn test_status_fixture_is_read_without_blank_lines() {
    let temp = create_temp_dir();
    let path =
        status_fixtures::write_status_file(temp.path(), status_fixtures::mixed_status_list());

    let lines = read_status_lines(&path).unwrap();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "Custom Status");
}

#[test]
fn test_token_and_config_from_disk() {
    let temp = create_temp_dir();
    let config_path = temp.path().join("cogbot.toml");
    let token_path = temp.path().join("token.txt");
    std::fs::write(
        &config_path,
        format!("[paths]\ntoken_file = {:?}\n", token_path.to_string_lossy()),
    )
    .unwrap();
    std::fs::write(&token_path, "my-token\n").unwrap();

    let config = ConfigLoader::new(&config_path).load().unwrap();
    assert_eq!(config.paths.token_file, token_path);
    assert_eq!(read_token(&config.paths.token_file).unwrap(), "my-token");
}
