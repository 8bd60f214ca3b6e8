/*!
 * # subrelay - weekly channel subtitle relay
 *
 * A Rust library that automates a weekly subtitle workflow for a video
 * channel: find recently published videos, download their native-language
 * subtitle track, machine-translate it into several target languages, and
 * push the translations back as new caption tracks.
 *
 * ## Features
 *
 * - List a channel's videos published in a trailing window (default 7 days)
 * - Download the source-language SRT caption track of each video
 * - Translate only the caption text payload, preserving timing and indices
 * - Upload one published caption track per target language
 * - Configurable policy for pre-existing same-language tracks
 * - Configurable per-video failure isolation for the batch
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: SRT parsing and reassembly
 * - `hosting`: Video-hosting service client:
 *   - `hosting::youtube`: YouTube Data API v3 client
 * - `translator`: Translation service client:
 *   - `translator::azure`: Azure Translator v3 client
 * - `file_utils`: File system operations and output naming
 * - `app_controller`: Main workflow driver
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod hosting;
pub mod translator;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use app_controller::{Controller, RunReport, TranslatedSubtitle, VideoOutcome};
pub use hosting::{CaptionTrack, HostingClient};
pub use translator::TranslationClient;
pub use errors::{AppError, HostingError, SubtitleError, TranslatorError};
