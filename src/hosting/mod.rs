/*!
 * Video-hosting service client.
 *
 * This module defines the interface the pipeline uses to talk to the
 * video-hosting platform's data API, plus the concrete implementation:
 * - YouTube: YouTube Data API v3 integration
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;

use crate::errors::HostingError;

/// One caption resource attached to a video on the hosting service
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionTrack {
    /// Opaque track identifier assigned by the service
    pub id: String,

    /// Language code the track is tagged with
    pub language: String,
}

/// Common trait for hosting-service clients
///
/// The driver holds one client value constructed at startup and passes it to
/// every step that needs it, so a fake client can be substituted in tests.
#[async_trait]
pub trait HostingClient: Send + Sync + Debug {
    /// List video ids on a channel published after the given UTC instant,
    /// newest first, capped at `max_results`
    async fn search_videos(
        &self,
        channel_id: &str,
        published_after: &str,
        max_results: usize,
    ) -> Result<Vec<String>, HostingError>;

    /// List all caption tracks attached to a video
    async fn list_caption_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, HostingError>;

    /// Download a caption track's content in SRT format
    async fn download_caption(&self, track_id: &str) -> Result<Bytes, HostingError>;

    /// Create a new caption track on a video, published immediately
    /// (isDraft=false)
    async fn insert_caption(
        &self,
        video_id: &str,
        language: &str,
        name: &str,
        content: Vec<u8>,
    ) -> Result<(), HostingError>;

    /// Delete an existing caption track
    async fn delete_caption(&self, track_id: &str) -> Result<(), HostingError>;
}

pub mod youtube;
