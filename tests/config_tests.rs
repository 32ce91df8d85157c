//! Integration tests for configuration management

use nu_advisor::config::{Config, ConfigOverrides};
use nu_advisor::core::engine::DEFAULT_LIMIT;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.data.store_file.is_empty(),
        "Default store_file should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.engine.limit(), 10);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[data]
store_file = "/srv/learning/store.toml"

[paths]
reports_dir = "./reports"

[engine]
default_limit = 3
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.data.store_file, "/srv/learning/store.toml");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.engine.default_limit, 3);
    assert_eq!(config.engine.limit(), 3);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.data.store_file, "");
    // Zero falls back to the built-in limit
    assert_eq!(config.engine.default_limit, 0);
    let limit: i64 = config.engine.limit();
    assert_eq!(limit, DEFAULT_LIMIT);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$NU_ADVISOR/test.log"

[data]
store_file = "$NU_ADVISOR/store.toml"

[paths]
reports_dir = "$NU_ADVISOR/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    for value in [
        &config.logging.file,
        &config.data.store_file,
        &config.paths.reports_dir,
    ] {
        assert!(value.contains("nuadvisor"), "not expanded: {value}");
        assert!(!value.contains("$NU_ADVISOR"));
    }
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("store-file", "/data/store.toml")
        .expect("Failed to set store file");
    assert_eq!(config.get("store_file").as_deref(), Some("/data/store.toml"));

    config
        .set("default_limit", "25")
        .expect("Failed to set default limit");
    assert_eq!(config.engine.limit(), 25);

    assert!(config.set("default_limit", "-1").is_err());
    assert!(config.set("verbose", "sometimes").is_err());
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    config.set("reports_dir", "/elsewhere").expect("Failed to set dir");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("reports-dir", &defaults)
        .expect("Failed to unset reports dir");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_serialized_round_trip_through_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("default_limit", "4").expect("Failed to set limit");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.engine.default_limit, 4);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        store_file: Some("/custom/store.toml".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        default_limit: Some(7),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.data.store_file, "/custom/store.toml");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.engine.limit(), 7);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.data.store_file.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.data.store_file, before);
}

#[test]
fn test_config_display_format() {
    let display_str = format!("{}", Config::from_defaults());

    for section in ["[logging]", "[data]", "[paths]", "[engine]"] {
        assert!(display_str.contains(section), "missing {section}");
    }
    assert!(display_str.contains("store_file"));
    assert!(display_str.contains("default_limit"));
}

#[test]
fn test_merge_defaults_fills_empty_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[data]
store_file = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.data.store_file, defaults.data.store_file);
    assert_eq!(config.engine.default_limit, defaults.engine.default_limit);

    // A second merge has nothing left to add
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_get_nuadvisor_dir() {
    let dir = Config::get_nuadvisor_dir();
    assert!(dir.to_string_lossy().contains("nuadvisor"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path_str = Config::get_config_file_path().to_string_lossy().to_string();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
