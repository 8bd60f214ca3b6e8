use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use reqwest::Client;
use log::error;

use crate::app_config::TranslatorConfig;
use crate::errors::TranslatorError;
use crate::translator::TranslationClient;

/// API version sent with every translation request
const API_VERSION: &str = "3.0";

/// Azure Translator client
#[derive(Debug)]
pub struct AzureTranslator {
    /// HTTP client for API requests
    client: Client,
    /// Subscription key for authentication
    api_key: String,
    /// Service endpoint URL
    endpoint: String,
    /// Subscription region
    region: String,
}

/// One input item in a translation request body
#[derive(Debug, Serialize)]
pub struct TranslateRequestItem {
    /// Text to translate
    pub text: String,
}

/// One output item in a translation response body
#[derive(Debug, Deserialize)]
pub struct TranslateResponseItem {
    /// Translation results for the corresponding input item
    pub translations: Vec<Translation>,
}

/// A single translation result
#[derive(Debug, Deserialize)]
pub struct Translation {
    /// The translated text
    pub text: String,
}

impl AzureTranslator {
    /// Create a new Azure Translator client from the translator config
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            region: config.region.clone(),
        }
    }
}

#[async_trait]
impl TranslationClient for AzureTranslator {
    async fn translate(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<String>, TranslatorError> {
        let api_url = format!("{}/translate", self.endpoint);

        let body: Vec<TranslateRequestItem> = texts
            .iter()
            .map(|text| TranslateRequestItem { text: text.clone() })
            .collect();

        let response = self.client.post(&api_url)
            .query(&[
                ("api-version", API_VERSION),
                ("to", target_language),
            ])
            .header("Content-Type", "application/json")
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslatorError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translator API error ({}): {}", status, message);
            return Err(match status.as_u16() {
                401 | 403 => TranslatorError::AuthenticationError(message),
                429 => TranslatorError::RateLimitExceeded(message),
                code => TranslatorError::ApiError { status_code: code, message },
            });
        }

        let items = response.json::<Vec<TranslateResponseItem>>().await
            .map_err(|e| TranslatorError::ParseError(e.to_string()))?;

        if items.len() != texts.len() {
            return Err(TranslatorError::ItemCountMismatch {
                sent: texts.len(),
                received: items.len(),
            });
        }

        // Read the first translation result of every input item
        items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                item.translations
                    .into_iter()
                    .next()
                    .map(|t| t.text)
                    .ok_or_else(|| {
                        TranslatorError::ParseError(format!(
                            "Response item {} carried no translations",
                            idx
                        ))
                    })
            })
            .collect()
    }
}
