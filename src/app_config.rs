use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code of the channel's native subtitle tracks (ISO 639-1)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language codes to translate into, in upload order
    #[serde(default = "default_target_languages")]
    pub target_languages: Vec<String>,

    /// Directory where subtitle files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Video-hosting service config
    pub hosting: HostingConfig,

    /// Translation service config
    pub translator: TranslatorConfig,

    /// What to do when a same-language caption track already exists on upload
    #[serde(default)]
    pub upload_policy: UploadPolicy,

    /// What to do when one video in the batch fails
    #[serde(default)]
    pub failure_mode: FailureMode,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Video-hosting service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HostingConfig {
    // @field: API key for the hosting service data API
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Channel whose recent videos are processed
    #[serde(default = "String::new")]
    pub channel_id: String,

    // @field: Data API base URL
    #[serde(default = "default_hosting_api_base")]
    pub api_base: String,

    // @field: Media upload base URL (caption insert)
    #[serde(default = "default_hosting_upload_base")]
    pub upload_base: String,

    // @field: Trailing publish window in days
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    // @field: Max videos per run
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            channel_id: String::new(),
            api_base: default_hosting_api_base(),
            upload_base: default_hosting_upload_base(),
            window_days: default_window_days(),
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    // @field: Subscription key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service endpoint URL
    #[serde(default = "default_translator_endpoint")]
    pub endpoint: String,

    // @field: Subscription region
    #[serde(default = "default_translator_region")]
    pub region: String,

    // @field: Max subtitle entries per request
    #[serde(default = "default_max_entries_per_request")]
    pub max_entries_per_request: usize,

    // @field: Max subtitle characters per request
    #[serde(default = "default_max_chars_per_request")]
    pub max_chars_per_request: usize,

    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_translator_endpoint(),
            region: default_translator_region(),
            max_entries_per_request: default_max_entries_per_request(),
            max_chars_per_request: default_max_chars_per_request(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Policy applied when a caption track in the target language already exists
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UploadPolicy {
    /// Leave the existing track alone and skip the upload
    #[default]
    Skip,
    /// Delete the existing track, then insert the new one
    Replace,
    /// Always insert, even if that creates a duplicate track
    Duplicate,
}

impl UploadPolicy {
    // @returns: Lowercase policy identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Skip => "skip".to_string(),
            Self::Replace => "replace".to_string(),
            Self::Duplicate => "duplicate".to_string(),
        }
    }
}

impl std::fmt::Display for UploadPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for UploadPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "replace" => Ok(Self::Replace),
            "duplicate" => Ok(Self::Duplicate),
            _ => Err(anyhow!("Invalid upload policy: {}", s)),
        }
    }
}

/// Policy applied when processing one video fails partway through the batch
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Stop the whole run on the first fatal error
    #[default]
    Abort,
    /// Record the failure and continue with the remaining videos
    Continue,
}

impl FailureMode {
    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Abort => "abort".to_string(),
            Self::Continue => "continue".to_string(),
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for FailureMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "continue" => Ok(Self::Continue),
            _ => Err(anyhow!("Invalid failure mode: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "nl".to_string()
}

fn default_target_languages() -> Vec<String> {
    vec!["en".to_string(), "de".to_string(), "fr".to_string()]
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_hosting_api_base() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_hosting_upload_base() -> String {
    "https://www.googleapis.com/upload/youtube/v3".to_string()
}

fn default_window_days() -> i64 {
    7
}

fn default_max_results() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_translator_endpoint() -> String {
    "https://api.cognitive.microsofttranslator.com".to_string()
}

fn default_translator_region() -> String {
    "westeurope".to_string()
}

fn default_max_entries_per_request() -> usize {
    50
}

fn default_max_chars_per_request() -> usize {
    5000
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        crate::language_utils::validate_language_code(&self.source_language)?;

        if self.target_languages.is_empty() {
            return Err(anyhow!("At least one target language is required"));
        }
        for lang in &self.target_languages {
            crate::language_utils::validate_language_code(lang)?;
            if lang == &self.source_language {
                return Err(anyhow!(
                    "Target language '{}' equals the source language",
                    lang
                ));
            }
        }

        // Target languages map one-to-one onto output files and caption tracks
        let mut seen = std::collections::HashSet::new();
        for lang in &self.target_languages {
            if !seen.insert(lang.as_str()) {
                return Err(anyhow!("Duplicate target language: {}", lang));
            }
        }

        if self.hosting.api_key.is_empty() {
            return Err(anyhow!("Hosting service API key is required"));
        }
        if self.hosting.channel_id.is_empty() {
            return Err(anyhow!("Channel id is required"));
        }
        if self.hosting.window_days <= 0 {
            return Err(anyhow!("Publish window must be at least one day"));
        }

        if self.translator.api_key.is_empty() {
            return Err(anyhow!("Translator subscription key is required"));
        }
        url::Url::parse(&self.translator.endpoint)
            .map_err(|e| anyhow!("Invalid translator endpoint: {}", e))?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_languages: default_target_languages(),
            output_dir: default_output_dir(),
            hosting: HostingConfig::default(),
            translator: TranslatorConfig::default(),
            upload_policy: UploadPolicy::default(),
            failure_mode: FailureMode::default(),
            log_level: LogLevel::default(),
        }
    }
}
