/*!
 * Tests for language code utilities
 */

use subrelay::language_utils::{get_language_name, validate_language_code};

#[test]
fn test_validate_language_code_withValidCodes_shouldAccept() {
    assert!(validate_language_code("nl").is_ok());
    assert!(validate_language_code("en").is_ok());
    assert!(validate_language_code("de").is_ok());
    assert!(validate_language_code("fr").is_ok());
}

#[test]
fn test_validate_language_code_withInvalidCodes_shouldReject() {
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("").is_err());
    assert!(validate_language_code("dutch").is_err());
    // Track matching is case-sensitive, uppercase codes never match
    assert!(validate_language_code("NL").is_err());
}

#[test]
fn test_get_language_name_withKnownCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("nl").unwrap(), "Dutch");
    assert_eq!(get_language_name("de").unwrap(), "German");
    assert!(get_language_name("zz").is_err());
}
