use anyhow::{Result, Context};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::{Config, FailureMode, UploadPolicy};
use crate::file_utils::FileManager;
use crate::hosting::HostingClient;
use crate::language_utils;
use crate::subtitle_processor::SubtitleCollection;
use crate::translator::TranslationClient;

// @module: Application controller driving the weekly subtitle workflow

/// A translated subtitle file, explicitly tied to its target language
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedSubtitle {
    /// Target language code
    pub language: String,

    /// Path of the translated SRT file on disk
    pub path: PathBuf,
}

/// How processing of one video ended
#[derive(Debug, Clone, PartialEq)]
pub enum VideoOutcome {
    /// Fetched, translated, and uploaded; `uploaded` counts inserted tracks
    Completed { uploaded: usize },

    /// No caption track in the source language, nothing downstream ran
    SkippedNoSubtitles,

    /// A fatal step error, recorded when the failure mode allows continuing
    Failed { error: String },
}

/// Per-video outcomes of one pipeline run
#[derive(Debug, Default)]
pub struct RunReport {
    /// (video id, outcome) pairs in processing order
    pub outcomes: Vec<(String, VideoOutcome)>,
}

impl RunReport {
    /// Number of videos that completed
    pub fn completed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, VideoOutcome::Completed { .. }))
            .count()
    }

    /// Number of videos skipped for lack of a source subtitle
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, VideoOutcome::SkippedNoSubtitles))
            .count()
    }

    /// Number of videos that failed
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, VideoOutcome::Failed { .. }))
            .count()
    }
}

/// Main application controller for the subtitle relay workflow
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Hosting-service client, shared by every step that needs it
    hosting: Arc<dyn HostingClient>,

    // @field: Translation-service client
    translator: Arc<dyn TranslationClient>,
}

impl Controller {
    // @method: Create a new controller with the given configuration and clients
    pub fn with_clients(
        config: Config,
        hosting: Arc<dyn HostingClient>,
        translator: Arc<dyn TranslationClient>,
    ) -> Self {
        Self {
            config,
            hosting,
            translator,
        }
    }

    /// Lower bound of the trailing publish window, formatted in UTC with a
    /// single trailing "Z"
    pub fn window_start(now: DateTime<Utc>, window_days: i64) -> String {
        let start = now - Duration::days(window_days);
        start.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// List videos published on the configured channel within the trailing
    /// window, newest first, capped at the configured maximum
    pub async fn list_recent_videos(&self) -> Result<Vec<String>> {
        let published_after = Self::window_start(Utc::now(), self.config.hosting.window_days);
        debug!("Searching videos published after {}", published_after);

        let videos = self.hosting
            .search_videos(
                &self.config.hosting.channel_id,
                &published_after,
                self.config.hosting.max_results,
            )
            .await
            .context("Failed to list recent videos")?;

        info!(
            "Found {} video(s) published in the last {} day(s)",
            videos.len(),
            self.config.hosting.window_days
        );
        Ok(videos)
    }

    /// Download the source-language subtitle track of one video
    ///
    /// Returns `Ok(None)` when the video has no caption track whose language
    /// exactly equals the configured source language; the caller skips the
    /// video in that case.
    pub async fn fetch_source_subtitles(&self, video_id: &str) -> Result<Option<PathBuf>> {
        let tracks = self.hosting
            .list_caption_tracks(video_id)
            .await
            .with_context(|| format!("Failed to list caption tracks for video {}", video_id))?;

        // Exact match only, no fallback to related locales
        let track = tracks
            .iter()
            .find(|t| t.language == self.config.source_language);

        let Some(track) = track else {
            info!(
                "No {} subtitles found for video {}",
                self.config.source_language, video_id
            );
            return Ok(None);
        };

        let content = self.hosting
            .download_caption(&track.id)
            .await
            .with_context(|| format!("Failed to download caption track {}", track.id))?;

        let path = FileManager::source_subtitle_path(
            &self.config.output_dir,
            &self.config.source_language,
            video_id,
        );
        FileManager::write_bytes(&path, &content)?;

        info!("Downloaded subtitles for video {} to {:?}", video_id, path);
        Ok(Some(path))
    }

    /// Translate a subtitle file into every configured target language
    ///
    /// Only the text payload of each caption entry is sent to the translation
    /// service; indices and timestamps are rebuilt locally. The result maps
    /// each target language to its output file, in configured order.
    pub async fn translate_subtitles(&self, subtitle_file: &Path) -> Result<Vec<TranslatedSubtitle>> {
        let subtitles = SubtitleCollection::load_from_file(subtitle_file, &self.config.source_language)?;
        debug!(
            "Translating {} entries from {:?}",
            subtitles.entries.len(),
            subtitle_file
        );

        let chunks = subtitles.split_into_chunks(
            self.config.translator.max_entries_per_request,
            self.config.translator.max_chars_per_request,
        );

        let mut translated_files = Vec::with_capacity(self.config.target_languages.len());
        for lang in &self.config.target_languages {
            let mut translated_texts = Vec::with_capacity(subtitles.entries.len());
            for chunk in &chunks {
                let texts: Vec<String> = chunk.iter().map(|e| e.text.clone()).collect();
                let mut translations = self.translator
                    .translate(&texts, lang)
                    .await
                    .with_context(|| format!("Failed to translate into '{}'", lang))?;
                translated_texts.append(&mut translations);
            }

            let translated = subtitles.with_translated_texts(&translated_texts, lang)?;
            let path = FileManager::translated_subtitle_path(
                &self.config.output_dir,
                lang,
                subtitle_file,
            );
            translated.write_to_srt(&path)?;

            info!("Translated {:?} into '{}' -> {:?}", subtitle_file, lang, path);
            translated_files.push(TranslatedSubtitle {
                language: lang.clone(),
                path,
            });
        }

        Ok(translated_files)
    }

    /// Upload one translated subtitle file as a new caption track
    ///
    /// Returns whether a track was actually inserted; the configured upload
    /// policy decides what happens when a same-language track already exists.
    pub async fn upload_subtitles(
        &self,
        video_id: &str,
        translated: &TranslatedSubtitle,
    ) -> Result<bool> {
        if self.config.upload_policy != UploadPolicy::Duplicate {
            let tracks = self.hosting
                .list_caption_tracks(video_id)
                .await
                .with_context(|| format!("Failed to list caption tracks for video {}", video_id))?;

            if let Some(existing) = tracks.iter().find(|t| t.language == translated.language) {
                if self.config.upload_policy == UploadPolicy::Skip {
                    warn!(
                        "Video {} already has a '{}' caption track, skipping upload",
                        video_id, translated.language
                    );
                    return Ok(false);
                }

                // Replace: drop the existing track before inserting the new one
                info!(
                    "Replacing existing '{}' caption track {} on video {}",
                    translated.language, existing.id, video_id
                );
                self.hosting
                    .delete_caption(&existing.id)
                    .await
                    .with_context(|| {
                        format!("Failed to delete caption track {}", existing.id)
                    })?;
            }
        }

        let content = FileManager::read_to_string(&translated.path)?;
        let track_name = Self::caption_track_name(&translated.language);

        self.hosting
            .insert_caption(
                video_id,
                &translated.language,
                &track_name,
                content.into_bytes(),
            )
            .await
            .with_context(|| {
                format!(
                    "Failed to upload '{}' subtitles for video {}",
                    translated.language, video_id
                )
            })?;

        info!(
            "Uploaded '{}' subtitles for video {}",
            translated.language, video_id
        );
        Ok(true)
    }

    /// Human-readable caption track name embedding the language code
    fn caption_track_name(language: &str) -> String {
        match language_utils::get_language_name(language) {
            Ok(name) => format!("{} ({})", name, language),
            Err(_) => format!("Subtitles ({})", language),
        }
    }

    /// Run the full fetch -> translate -> upload sequence for one video
    async fn process_video(&self, video_id: &str) -> Result<VideoOutcome> {
        let Some(subtitle_file) = self.fetch_source_subtitles(video_id).await? else {
            return Ok(VideoOutcome::SkippedNoSubtitles);
        };

        let translated_files = self.translate_subtitles(&subtitle_file).await?;

        let mut uploaded = 0;
        for translated in &translated_files {
            if self.upload_subtitles(video_id, translated).await? {
                uploaded += 1;
            }
        }

        Ok(VideoOutcome::Completed { uploaded })
    }

    /// Run the weekly workflow: list recent videos, then fetch, translate,
    /// and upload for each in sequence
    pub async fn run(&self) -> Result<RunReport> {
        let start_time = std::time::Instant::now();
        let videos = self.list_recent_videos().await?;

        let mut report = RunReport::default();
        if videos.is_empty() {
            info!(
                "No videos published in the last {} day(s), nothing to do",
                self.config.hosting.window_days
            );
            return Ok(report);
        }

        let progress = ProgressBar::new(videos.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        for video_id in &videos {
            progress.set_message(format!("video {}", video_id));

            let outcome = match self.process_video(video_id).await {
                Ok(outcome) => outcome,
                Err(e) => match self.config.failure_mode {
                    FailureMode::Abort => {
                        // No per-video isolation in abort mode: the first
                        // fatal error ends the whole batch
                        progress.finish_and_clear();
                        return Err(e.context(format!("Aborting run at video {}", video_id)));
                    }
                    FailureMode::Continue => {
                        error!("Video {} failed: {:#}", video_id, e);
                        VideoOutcome::Failed {
                            error: format!("{:#}", e),
                        }
                    }
                },
            };

            report.outcomes.push((video_id.clone(), outcome));
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            "Run finished in {:.1}s: {} completed, {} skipped, {} failed",
            start_time.elapsed().as_secs_f64(),
            report.completed(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }
}
