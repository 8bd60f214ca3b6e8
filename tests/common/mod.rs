/*!
 * Common test utilities for the subrelay test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use subrelay::app_config::Config;


/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small Dutch SRT document used as the source subtitle fixture
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:04,000
Hallo allemaal.

2
00:00:05,000 --> 00:00:09,000
Welkom bij deze video.

3
00:00:10,000 --> 00:00:14,000
Tot de volgende keer.
";

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}

/// A configuration pointed at a temp output directory, with credentials
/// filled so validation passes and mock clients can be substituted
pub fn test_config(output_dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.hosting.api_key = "test-hosting-key".to_string();
    config.hosting.channel_id = "UC-test-channel".to_string();
    config.translator.api_key = "test-translator-key".to_string();
    config.output_dir = output_dir.to_string_lossy().to_string();
    config
}
