/*!
 * Tests for file naming and IO helpers
 */

use std::path::Path;

use subrelay::file_utils::FileManager;

use crate::common;

#[test]
fn test_source_subtitle_path_withDutchSource_shouldMatchHistoricNaming() {
    let path = FileManager::source_subtitle_path(".", "nl", "abc123");
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "dutch_subtitles_abc123.srt"
    );
}

#[test]
fn test_source_subtitle_path_withUnknownCode_shouldFallBackToCode() {
    let path = FileManager::source_subtitle_path("/tmp", "qq", "v1");
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "qq_subtitles_v1.srt"
    );
}

#[test]
fn test_translated_subtitle_path_withSourceBasename_shouldPrefixLanguage() {
    let source = Path::new("/out/dutch_subtitles_abc123.srt");
    let path = FileManager::translated_subtitle_path("/out", "de", source);

    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "translated_de_dutch_subtitles_abc123.srt"
    );
    assert_eq!(path.parent().unwrap(), Path::new("/out"));
}

#[test]
fn test_write_bytes_withExistingFile_shouldOverwrite() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("file.srt");

    FileManager::write_bytes(&path, b"first").unwrap();
    FileManager::write_bytes(&path, b"second").unwrap();

    assert_eq!(FileManager::read_to_string(&path).unwrap(), "second");
}

#[test]
fn test_write_bytes_withMissingParent_shouldCreateDirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("nested/dir/file.srt");

    FileManager::write_bytes(&path, b"content").unwrap();

    assert!(FileManager::file_exists(&path));
}
