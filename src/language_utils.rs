use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The hosting and translation services both identify languages with short
/// ISO 639-1 tags (e.g. "nl", "en"). Configured codes are validated here
/// before the pipeline issues any network request.
/// Validate that a language code is a known ISO 639-1 (2-letter) code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim();

    // Caption track matching is case-sensitive, reject codes that would
    // never match a track the service reports in lowercase
    if normalized_code != normalized_code.to_lowercase() {
        return Err(anyhow!("Language code must be lowercase: {}", code));
    }

    if normalized_code.len() == 2 && Language::from_639_1(normalized_code).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English language name from a code (e.g. "nl" -> "Dutch")
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();
    let lang = Language::from_639_1(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}
