/*!
 * Tests for application configuration functionality
 */

use subalign::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.language, "en");
    assert_eq!(config.aligner.python, "python3");
    assert_eq!(config.aligner.timeout_secs, 300);
    assert!(config.aligner.temp_dir.is_none());
    assert!(!config.aligner.keep_temp_files);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid language code
    config.language = "zz".to_string();
    assert!(config.validate().is_err());
    config.language = "en".to_string();

    // Empty python interpreter
    config.aligner.python = "  ".to_string();
    assert!(config.validate().is_err());
    config.aligner.python = "python3".to_string();

    // Zero timeout
    config.aligner.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.aligner.timeout_secs = 300;

    assert!(config.validate().is_ok());
}

/// Test that a minimal JSON document deserializes to the defaults
#[test]
fn test_config_deserialization_withEmptyJson_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.language, "en");
    assert_eq!(config.aligner.python, "python3");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a partial aligner section keeps the remaining defaults
#[test]
fn test_config_deserialization_withPartialAligner_shouldKeepOtherDefaults() {
    let json = r#"{
        "language": "fr",
        "aligner": { "timeout_secs": 60 },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.language, "fr");
    assert_eq!(config.aligner.timeout_secs, 60);
    assert_eq!(config.aligner.python, "python3");
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Test serialization round trip
#[test]
fn test_config_serialization_withDefaults_shouldRoundTrip() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.language, config.language);
    assert_eq!(parsed.aligner.python, config.aligner.python);
    assert_eq!(parsed.aligner.timeout_secs, config.aligner.timeout_secs);
    assert_eq!(parsed.log_level, config.log_level);
}
