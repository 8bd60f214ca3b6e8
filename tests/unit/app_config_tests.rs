/*!
 * Tests for application configuration functionality
 */

use std::str::FromStr;

use subrelay::app_config::{Config, FailureMode, LogLevel, UploadPolicy};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "nl");
    assert_eq!(config.target_languages, vec!["en", "de", "fr"]);
    assert_eq!(config.output_dir, ".");
    assert_eq!(config.upload_policy, UploadPolicy::Skip);
    assert_eq!(config.failure_mode, FailureMode::Abort);
    assert_eq!(config.log_level, LogLevel::Info);

    assert_eq!(config.hosting.window_days, 7);
    assert_eq!(config.hosting.max_results, 10);
    assert_eq!(config.hosting.api_base, "https://www.googleapis.com/youtube/v3");

    assert_eq!(config.translator.region, "westeurope");
    assert_eq!(
        config.translator.endpoint,
        "https://api.cognitive.microsofttranslator.com"
    );
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    config.hosting.api_key = "key".to_string();
    config.hosting.channel_id = "UC123".to_string();
    config.translator.api_key = "key".to_string();
    assert!(config.validate().is_ok());

    // Missing hosting key
    config.hosting.api_key = String::new();
    assert!(config.validate().is_err());
    config.hosting.api_key = "key".to_string();

    // Missing channel
    config.hosting.channel_id = String::new();
    assert!(config.validate().is_err());
    config.hosting.channel_id = "UC123".to_string();

    // Missing translator key
    config.translator.api_key = String::new();
    assert!(config.validate().is_err());
    config.translator.api_key = "key".to_string();

    // Invalid source language
    config.source_language = "xx".to_string();
    assert!(config.validate().is_err());
    config.source_language = "nl".to_string();

    // Empty target list
    config.target_languages = Vec::new();
    assert!(config.validate().is_err());

    // Duplicate target
    config.target_languages = vec!["en".to_string(), "en".to_string()];
    assert!(config.validate().is_err());

    // Target equals source
    config.target_languages = vec!["nl".to_string()];
    assert!(config.validate().is_err());

    // Non-positive window
    config.target_languages = vec!["en".to_string()];
    config.hosting.window_days = 0;
    assert!(config.validate().is_err());
    config.hosting.window_days = 7;

    // Broken translator endpoint
    config.translator.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_upload_policy_withStringConversions_shouldRoundTrip() {
    assert_eq!(UploadPolicy::from_str("skip").unwrap(), UploadPolicy::Skip);
    assert_eq!(UploadPolicy::from_str("Replace").unwrap(), UploadPolicy::Replace);
    assert_eq!(UploadPolicy::from_str("DUPLICATE").unwrap(), UploadPolicy::Duplicate);
    assert!(UploadPolicy::from_str("overwrite").is_err());

    assert_eq!(UploadPolicy::Skip.to_string(), "skip");
    assert_eq!(UploadPolicy::Replace.to_string(), "replace");
}

#[test]
fn test_failure_mode_withStringConversions_shouldRoundTrip() {
    assert_eq!(FailureMode::from_str("abort").unwrap(), FailureMode::Abort);
    assert_eq!(FailureMode::from_str("continue").unwrap(), FailureMode::Continue);
    assert!(FailureMode::from_str("retry").is_err());

    assert_eq!(FailureMode::Abort.to_string(), "abort");
}

/// Partial config files fill the gaps from serde defaults
#[test]
fn test_config_deserialization_withPartialJson_shouldApplyDefaults() {
    let json = r#"{
        "hosting": { "api_key": "k", "channel_id": "UC1" },
        "translator": { "api_key": "t" }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.source_language, "nl");
    assert_eq!(config.target_languages, vec!["en", "de", "fr"]);
    assert_eq!(config.hosting.window_days, 7);
    assert_eq!(config.hosting.max_results, 10);
    assert_eq!(config.upload_policy, UploadPolicy::Skip);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization_withDefaults_shouldRoundTrip() {
    let mut config = Config::default();
    config.hosting.api_key = "k".to_string();
    config.hosting.channel_id = "UC1".to_string();
    config.translator.api_key = "t".to_string();
    config.upload_policy = UploadPolicy::Replace;
    config.failure_mode = FailureMode::Continue;

    let json = serde_json::to_string_pretty(&config).unwrap();
    assert!(json.contains("\"replace\""));
    assert!(json.contains("\"continue\""));

    let reloaded: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.upload_policy, UploadPolicy::Replace);
    assert_eq!(reloaded.failure_mode, FailureMode::Continue);
    assert_eq!(reloaded.target_languages, config.target_languages);
}
