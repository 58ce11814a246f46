// Settings loading - defaults, validation errors and environment overrides.

use inspectkit_core::config::{ConfigError, Settings};
use inspectkit_core::LogLevel;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_settings(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("inspectkit.toml");
    fs::write(&path, content).expect("Failed to write settings");
    path
}

#[test]
#[serial]
fn explicit_missing_path_is_not_found() {
    let result = Settings::load(Some(Path::new("/nonexistent/inspectkit.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn empty_document_uses_defaults() {
    let settings = Settings::from_toml_str("").expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.program, "npx");
    assert_eq!(settings.program_args, vec!["@modelcontextprotocol/inspector"]);
    assert_eq!(settings.default_timeout_secs, 30);
    assert_eq!(settings.comprehensive_timeout_secs, 60);
}

#[test]
fn rejects_zero_timeouts_and_unknown_levels() {
    assert!(matches!(
        Settings::from_toml_str("default_timeout_secs = 0"),
        Err(ConfigError::InvalidTimeout {
            field: "default_timeout_secs"
        })
    ));
    assert!(matches!(
        Settings::from_toml_str("comprehensive_timeout_secs = 0"),
        Err(ConfigError::InvalidTimeout {
            field: "comprehensive_timeout_secs"
        })
    ));
    assert!(matches!(
        Settings::from_toml_str(r#"log_level = "chatty""#),
        Err(ConfigError::InvalidLogLevel { .. })
    ));
    assert!(matches!(
        Settings::from_toml_str(r#"program = "  ""#),
        Err(ConfigError::EmptyProgram)
    ));
}

#[test]
fn unknown_keys_are_parse_errors() {
    assert!(matches!(
        Settings::from_toml_str("retries = 3"),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
#[serial]
fn file_values_are_loaded() {
    let dir = tempdir().expect("tempdir");
    let path = write_settings(
        dir.path(),
        r#"
program = "mcp-inspector"
program_args = []
default_timeout_secs = 10
comprehensive_timeout_secs = 90
config_dir = "saved"
log_level = "warning"
"#,
    );

    let settings = Settings::load(Some(&path)).expect("settings");
    assert_eq!(settings.program, "mcp-inspector");
    assert!(settings.program_args.is_empty());
    assert_eq!(settings.default_timeout_secs, 10);
    assert_eq!(settings.comprehensive_timeout_secs, 90);
    assert_eq!(settings.config_dir, PathBuf::from("saved"));
    assert_eq!(settings.log_level, LogLevel::Warning);
}

#[test]
#[serial]
fn environment_overrides_program_and_config_dir() {
    let dir = tempdir().expect("tempdir");
    let path = write_settings(dir.path(), r#"program = "npx""#);

    // SAFETY: serialized with every other test that touches these variables.
    unsafe {
        std::env::set_var("INSPECTKIT_PROGRAM", "/opt/inspector/bin/inspector");
        std::env::set_var("INSPECTKIT_CONFIG_DIR", "/var/lib/inspectkit");
    }
    let settings = Settings::load(Some(&path));
    unsafe {
        std::env::remove_var("INSPECTKIT_PROGRAM");
        std::env::remove_var("INSPECTKIT_CONFIG_DIR");
    }

    let settings = settings.expect("settings");
    assert_eq!(settings.program, "/opt/inspector/bin/inspector");
    assert_eq!(settings.config_dir, PathBuf::from("/var/lib/inspectkit"));
}
