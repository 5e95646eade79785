//! Drupal JSON:API client
//!
//! The core never depends on the store's native object model; it sees only
//! the [`ArticleSource`] trait and the [`SourceRecord`]s it yields.

use crate::adapters::drupal::models::{self, JsonApiDocument};
use crate::config::DrupalConfig;
use crate::domain::{DrupalError, PorticoError, Result, SourceRecord};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Read-only interface onto the source content store.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetches published items of `content_type`, at most `limit` when
    /// given, in the store's natural ordering.
    async fn find_published(
        &self,
        content_type: &str,
        limit: Option<u32>,
    ) -> Result<Vec<SourceRecord>>;
}

/// JSON:API client for a Drupal site
pub struct DrupalClient {
    base_url: String,
    client: Client,
    config: DrupalConfig,
}

impl DrupalClient {
    /// Creates a new client from configuration.
    pub fn new(config: DrupalConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                PorticoError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            client,
            config,
        })
    }
}

#[async_trait]
impl ArticleSource for DrupalClient {
    async fn find_published(
        &self,
        content_type: &str,
        limit: Option<u32>,
    ) -> Result<Vec<SourceRecord>> {
        let url = format!("{}/jsonapi/node/{}", self.base_url, content_type);

        let mut query: Vec<(&str, String)> = vec![
            ("filter[status]", "1".to_string()),
            ("include", "field_image,field_tags,uid".to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("page[limit]", limit.to_string()));
        }

        tracing::debug!(url = %url, limit = ?limit, "Querying published articles");

        let mut request = self
            .client
            .get(&url)
            .query(&query)
            .header("Accept", "application/vnd.api+json");

        if let Some(username) = &self.config.username {
            request = request.basic_auth(
                username,
                self.config
                    .password
                    .as_ref()
                    .map(|p| p.expose_secret().as_ref().to_string()),
            );
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DrupalError::Timeout(e.to_string())
            } else {
                DrupalError::ConnectionFailed(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(DrupalError::QueryFailed { status, message }.into());
        }

        let doc: JsonApiDocument = response
            .json()
            .await
            .map_err(|e| DrupalError::InvalidResponse(e.to_string()))?;

        let records = models::records_from_document(&doc);

        tracing::info!(
            count = records.len(),
            content_type = content_type,
            "Fetched published articles"
        );

        Ok(records)
    }
}

/// Maps a Drupal stream-wrapper URI onto the configured files directory.
///
/// Only the `public://` scheme is handled; anything else yields `None` and
/// the caller treats the asset as unuploadable.
pub fn local_file_path(files_dir: &Path, uri: &str) -> Option<PathBuf> {
    let relative = uri.strip_prefix("public://")?;
    Some(files_dir.join(relative))
}
