/*!
 * Translation service client.
 *
 * This module defines the interface the pipeline uses to machine-translate
 * subtitle text, plus the concrete implementation:
 * - Azure: Azure Translator v3 API integration
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::TranslatorError;

/// Common trait for translation-service clients
///
/// Implementations must return exactly one translated string per input
/// string, in the same order, so callers can re-associate translations with
/// the subtitle entries they came from.
#[async_trait]
pub trait TranslationClient: Send + Sync + Debug {
    /// Translate a batch of text items into the target language
    async fn translate(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<String>, TranslatorError>;
}

pub mod azure;
