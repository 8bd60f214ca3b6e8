use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};

use crate::language_utils;

// @module: File and path utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence - used by tests and external consumers
    #[allow(dead_code)]
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write raw bytes to a file, overwriting any existing file
    pub fn write_bytes<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    // @generates: Path for a downloaded source subtitle file
    // @example: nl + "abc123" -> "dutch_subtitles_abc123.srt"
    pub fn source_subtitle_path<P: AsRef<Path>>(
        output_dir: P,
        source_language: &str,
        video_id: &str,
    ) -> PathBuf {
        // The language name keeps the filename readable; fall back to the
        // raw code when the name is unknown
        let label = language_utils::get_language_name(source_language)
            .map(|name| name.to_lowercase())
            .unwrap_or_else(|_| source_language.to_string());

        output_dir
            .as_ref()
            .join(format!("{}_subtitles_{}.srt", label, video_id))
    }

    // @generates: Path for a translated subtitle file
    // @example: "de" + "dutch_subtitles_abc123.srt" -> "translated_de_dutch_subtitles_abc123.srt"
    pub fn translated_subtitle_path<P: AsRef<Path>>(
        output_dir: P,
        target_language: &str,
        source_file: &Path,
    ) -> PathBuf {
        let basename = source_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        output_dir
            .as_ref()
            .join(format!("translated_{}_{}", target_language, basename))
    }
}
