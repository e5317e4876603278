// Copyright (c) 2025 Veintiuna Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for configuration loading and validation.

use std::io::Write;

use crate::config::{ConfigLoader, Validate, VeintiunaConfig};
use crate::error::config::ConfigError;

/// Writes content into a named temporary file with the given extension.
fn temp_config_file(extension: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write temp config");
    file
}

#[test]
fn test_defaults_load_without_a_file() {
    let loader = ConfigLoader::new(None::<&str>, "VEINTIUNA_TEST");
    let config = loader.load().expect("defaults should load");

    assert_eq!(config.game.player_name, "Player");
    assert_eq!(config.game.dealer_name, "Dealer");
    assert_eq!(config.game.opening_hand, 2);
    assert_eq!(config.log.level, "info");
}

#[test]
fn test_load_from_toml_file() {
    let file = temp_config_file(
        "toml",
        r#"
[game]
player_name = "Ana"
opening_hand = 3

[log]
level = "debug"
"#,
    );

    let loader = ConfigLoader::new(Some(file.path()), "VEINTIUNA_TEST");
    let config = loader.load().expect("file should load");

    assert_eq!(config.game.player_name, "Ana");
    assert_eq!(config.game.opening_hand, 3);
    assert_eq!(config.log.level, "debug");
    // Values absent from the file keep their defaults
    assert_eq!(config.game.dealer_name, "Dealer");
}

#[test]
fn test_missing_file_is_reported() {
    let loader = ConfigLoader::new(Some("/definitely/not/here.toml"), "VEINTIUNA_TEST");
    let result = loader.load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let file = temp_config_file("ini", "[game]\n");
    let loader = ConfigLoader::new(Some(file.path()), "VEINTIUNA_TEST");
    let result = loader.load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let file = temp_config_file(
        "toml",
        r#"
[log]
level = "loud"
"#,
    );

    let loader = ConfigLoader::new(Some(file.path()), "VEINTIUNA_TEST");
    let result = loader.load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_blank_player_name_fails_validation() {
    let mut config = VeintiunaConfig::default();
    config.game.player_name = "   ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_colliding_seat_names_fail_validation() {
    let mut config = VeintiunaConfig::default();
    config.game.player_name = "Dealer".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_zero_opening_hand_fails_validation() {
    let mut config = VeintiunaConfig::default();
    config.game.opening_hand = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_oversized_opening_hand_fails_validation() {
    let mut config = VeintiunaConfig::default();
    config.game.opening_hand = 30;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}
