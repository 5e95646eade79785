//! Storyblok Management API client
//!
//! Implements the three operations the orchestrator consumes. Asset upload
//! is the platform's three-phase handshake (request signed target, transfer
//! bytes, confirm) collapsed behind a single call; the orchestrator only
//! sees one success/failure outcome.

use crate::adapters::storyblok::models::{
    DatasourceEntry, DatasourceEntryRequest, NewAssetRequest, SignedUploadResponse,
    StoryCreatedResponse, StoryRequest,
};
use crate::config::StoryblokConfig;
use crate::domain::{PorticoError, Result, StoryId, StoryPayload, StoryblokError, UploadedAsset};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use std::path::Path;
use std::time::Duration;

/// Destination operations the orchestrator consumes.
///
/// Every operation returns a typed result; callers pattern-match instead of
/// relying on thrown-error control flow.
#[async_trait]
pub trait StoryblokApi: Send + Sync {
    /// Uploads the file at `local_path`, registering it under `filename`.
    async fn upload_asset(
        &self,
        local_path: &Path,
        filename: &str,
    ) -> std::result::Result<UploadedAsset, StoryblokError>;

    /// Registers `label` as a datasource entry. Idempotency is the
    /// destination's responsibility; this is called unconditionally for
    /// every tag on every item.
    async fn create_datasource_entry(
        &self,
        label: &str,
    ) -> std::result::Result<(), StoryblokError>;

    /// Creates one story from the payload.
    async fn create_story(
        &self,
        payload: &StoryPayload,
    ) -> std::result::Result<StoryId, StoryblokError>;
}

/// HTTP client for one Storyblok space
pub struct StoryblokClient {
    client: Client,
    space_url: String,
    config: StoryblokConfig,
}

impl StoryblokClient {
    /// Creates a new client from configuration.
    pub fn new(config: StoryblokConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                PorticoError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        let space_url = format!(
            "{}/spaces/{}",
            config.base_url.trim_end_matches('/'),
            config.space_id
        );

        Ok(Self {
            client,
            space_url,
            config,
        })
    }

    fn token(&self) -> &str {
        self.config.oauth_token.expose_secret().as_ref()
    }

    async fn expect_status(
        response: Response,
        expected: StatusCode,
    ) -> std::result::Result<Response, StoryblokError> {
        let status = response.status();
        if status != expected {
            let message = response.text().await.unwrap_or_default();
            return Err(StoryblokError::UnexpectedStatus {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Phase one: request a signed upload target for `filename`.
    async fn request_signed_upload(
        &self,
        filename: &str,
    ) -> std::result::Result<SignedUploadResponse, StoryblokError> {
        let response = self
            .client
            .post(format!("{}/assets", self.space_url))
            .header("Authorization", self.token())
            .json(&NewAssetRequest {
                filename,
                validate_upload: 1,
            })
            .send()
            .await
            .map_err(|e| StoryblokError::ConnectionFailed(e.to_string()))?;

        let response = Self::expect_status(response, StatusCode::OK).await?;

        response
            .json::<SignedUploadResponse>()
            .await
            .map_err(|e| StoryblokError::InvalidResponse(e.to_string()))
    }

    /// Phase two: transfer the bytes to the signed target.
    async fn transfer_bytes(
        &self,
        signed: &SignedUploadResponse,
        local_path: &Path,
        filename: &str,
    ) -> std::result::Result<(), StoryblokError> {
        let bytes = tokio::fs::read(local_path).await.map_err(|e| {
            StoryblokError::AssetRead(format!("{}: {}", local_path.display(), e))
        })?;

        // The signed fields go ahead of the file part; the target rejects
        // any other ordering.
        let mut form = Form::new();
        for (name, value) in &signed.fields {
            form = form.text(name.clone(), value.clone());
        }
        form = form.part("file", Part::bytes(bytes).file_name(filename.to_string()));

        let response = self
            .client
            .post(&signed.post_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StoryblokError::ConnectionFailed(e.to_string()))?;

        Self::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// Phase three: confirm the upload so the asset becomes usable.
    async fn finish_upload(&self, asset_id: u64) -> std::result::Result<(), StoryblokError> {
        let response = self
            .client
            .get(format!("{}/assets/{}/finish_upload", self.space_url, asset_id))
            .header("Authorization", self.token())
            .send()
            .await
            .map_err(|e| StoryblokError::ConnectionFailed(e.to_string()))?;

        Self::expect_status(response, StatusCode::OK).await?;
        Ok(())
    }
}

#[async_trait]
impl StoryblokApi for StoryblokClient {
    async fn upload_asset(
        &self,
        local_path: &Path,
        filename: &str,
    ) -> std::result::Result<UploadedAsset, StoryblokError> {
        let signed = self.request_signed_upload(filename).await?;
        self.transfer_bytes(&signed, local_path, filename).await?;
        self.finish_upload(signed.id).await?;

        tracing::debug!(
            asset_id = signed.id,
            filename = filename,
            "Uploaded asset"
        );

        Ok(UploadedAsset {
            id: signed.id,
            filename: signed.pretty_url,
        })
    }

    async fn create_datasource_entry(
        &self,
        label: &str,
    ) -> std::result::Result<(), StoryblokError> {
        let response = self
            .client
            .post(format!("{}/datasource_entries", self.space_url))
            .header("Authorization", self.token())
            .json(&DatasourceEntryRequest {
                datasource_entry: DatasourceEntry {
                    name: label,
                    value: label,
                    datasource_id: self.config.datasource_id,
                },
            })
            .send()
            .await
            .map_err(|e| StoryblokError::ConnectionFailed(e.to_string()))?;

        Self::expect_status(response, StatusCode::CREATED).await?;
        Ok(())
    }

    async fn create_story(
        &self,
        payload: &StoryPayload,
    ) -> std::result::Result<StoryId, StoryblokError> {
        let response = self
            .client
            .post(format!("{}/stories", self.space_url))
            .header("Authorization", self.token())
            .json(&StoryRequest { story: payload })
            .send()
            .await
            .map_err(|e| StoryblokError::ConnectionFailed(e.to_string()))?;

        let response = Self::expect_status(response, StatusCode::CREATED).await?;

        let created = response
            .json::<StoryCreatedResponse>()
            .await
            .map_err(|e| StoryblokError::InvalidResponse(e.to_string()))?;

        Ok(StoryId::new(created.story.id))
    }
}
