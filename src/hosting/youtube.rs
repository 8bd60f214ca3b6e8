use std::time::Duration;
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Serialize, Deserialize};
use reqwest::{Client, Response};
use log::error;

use crate::app_config::HostingConfig;
use crate::errors::HostingError;
use crate::hosting::{CaptionTrack, HostingClient};

/// YouTube Data API v3 client
#[derive(Debug)]
pub struct YouTubeClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Data API base URL
    api_base: String,
    /// Media upload base URL
    upload_base: String,
}

/// Search response body (search.list)
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Caption list response body (captions.list)
#[derive(Debug, Deserialize)]
struct CaptionListResponse {
    #[serde(default)]
    items: Vec<CaptionItem>,
}

#[derive(Debug, Deserialize)]
struct CaptionItem {
    id: String,
    snippet: CaptionItemSnippet,
}

#[derive(Debug, Deserialize)]
struct CaptionItemSnippet {
    language: String,
}

/// Caption insert metadata (captions.insert)
#[derive(Debug, Serialize)]
struct CaptionInsertBody<'a> {
    snippet: CaptionInsertSnippet<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CaptionInsertSnippet<'a> {
    video_id: &'a str,
    language: &'a str,
    name: &'a str,
    is_draft: bool,
}

impl YouTubeClient {
    /// Create a new YouTube client from the hosting config
    pub fn new(config: &HostingConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            upload_base: config.upload_base.trim_end_matches('/').to_string(),
        }
    }

    /// Map a non-success response to a hosting error
    async fn check_status(response: Response) -> Result<Response, HostingError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        error!("Hosting API error ({}): {}", status, message);

        match status.as_u16() {
            401 => Err(HostingError::AuthenticationError(message)),
            403 | 429 => Err(HostingError::QuotaExceeded(message)),
            code => Err(HostingError::ApiError { status_code: code, message }),
        }
    }
}

#[async_trait]
impl HostingClient for YouTubeClient {
    async fn search_videos(
        &self,
        channel_id: &str,
        published_after: &str,
        max_results: usize,
    ) -> Result<Vec<String>, HostingError> {
        let api_url = format!("{}/search", self.api_base);

        let response = self.client.get(&api_url)
            .query(&[
                ("part", "snippet"),
                ("channelId", channel_id),
                ("type", "video"),
                ("order", "date"),
                ("publishedAfter", published_after),
                ("maxResults", &max_results.to_string()),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| HostingError::RequestFailed(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let search_response = response.json::<SearchResponse>().await
            .map_err(|e| HostingError::ParseError(e.to_string()))?;

        // The API already orders by date and caps at maxResults; the
        // truncation here guards against a misbehaving response
        Ok(search_response.items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .take(max_results)
            .collect())
    }

    async fn list_caption_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, HostingError> {
        let api_url = format!("{}/captions", self.api_base);

        let response = self.client.get(&api_url)
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| HostingError::RequestFailed(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let list_response = response.json::<CaptionListResponse>().await
            .map_err(|e| HostingError::ParseError(e.to_string()))?;

        Ok(list_response.items
            .into_iter()
            .map(|item| CaptionTrack {
                id: item.id,
                language: item.snippet.language,
            })
            .collect())
    }

    async fn download_caption(&self, track_id: &str) -> Result<Bytes, HostingError> {
        let api_url = format!("{}/captions/{}", self.api_base, track_id);

        let response = self.client.get(&api_url)
            .query(&[
                ("tfmt", "srt"),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| HostingError::RequestFailed(e.to_string()))?;

        let response = Self::check_status(response).await?;
        response.bytes().await
            .map_err(|e| HostingError::ParseError(e.to_string()))
    }

    async fn insert_caption(
        &self,
        video_id: &str,
        language: &str,
        name: &str,
        content: Vec<u8>,
    ) -> Result<(), HostingError> {
        let api_url = format!("{}/captions", self.upload_base);

        let metadata = serde_json::to_string(&CaptionInsertBody {
            snippet: CaptionInsertSnippet {
                video_id,
                language,
                name,
                is_draft: false,
            },
        })
        .map_err(|e| HostingError::RequestFailed(e.to_string()))?;

        // captions.insert takes a multipart/related body: a JSON metadata
        // part followed by the subtitle media part
        let boundary = "subrelay_caption_boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{metadata}\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!("--{boundary}\r\nContent-Type: application/octet-stream\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(&content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let response = self.client.post(&api_url)
            .query(&[
                ("part", "snippet"),
                ("uploadType", "multipart"),
                ("key", &self.api_key),
            ])
            .header(
                "Content-Type",
                format!("multipart/related; boundary={boundary}"),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| HostingError::RequestFailed(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete_caption(&self, track_id: &str) -> Result<(), HostingError> {
        let api_url = format!("{}/captions", self.api_base);

        let response = self.client.delete(&api_url)
            .query(&[
                ("id", track_id),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| HostingError::RequestFailed(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }
}
