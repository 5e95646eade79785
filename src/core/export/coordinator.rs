//! Export orchestration
//!
//! Drives one run: fetch published records, project them, and migrate each
//! item into the destination. Per-item failures are recorded and the run
//! carries on; only the initial fetch can fail the run as a whole.

use crate::adapters::drupal::{self, ArticleSource, DrupalClient};
use crate::adapters::storyblok::{StoryblokApi, StoryblokClient};
use crate::config::PorticoConfig;
use crate::core::export::summary::{ExportSummary, MigrationStage};
use crate::core::project::project;
use crate::core::slug::slugify;
use crate::domain::{ExportItem, Result, StoryPayload, UploadedAsset};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Coordinates one export run from source to destination
pub struct ExportCoordinator {
    source: Arc<dyn ArticleSource>,
    storyblok: Arc<dyn StoryblokApi>,
    content_type: String,
    files_dir: PathBuf,
}

impl ExportCoordinator {
    /// Creates a coordinator with explicit source and destination handles.
    pub fn new(
        source: Arc<dyn ArticleSource>,
        storyblok: Arc<dyn StoryblokApi>,
        content_type: String,
        files_dir: PathBuf,
    ) -> Self {
        Self {
            source,
            storyblok,
            content_type,
            files_dir,
        }
    }

    /// Builds the coordinator with live HTTP clients from configuration.
    pub fn from_config(config: &PorticoConfig) -> Result<Self> {
        let source = DrupalClient::new(config.drupal.clone())?;
        let storyblok = StoryblokClient::new(config.storyblok.clone())?;

        Ok(Self::new(
            Arc::new(source),
            Arc::new(storyblok),
            config.export.content_type.clone(),
            PathBuf::from(&config.drupal.files_dir),
        ))
    }

    /// Runs one export, migrating at most `limit` items when given.
    pub async fn execute_export(&self, limit: Option<u32>) -> Result<ExportSummary> {
        let start = Instant::now();

        tracing::info!(
            content_type = %self.content_type,
            limit = ?limit,
            "Starting export"
        );

        let records = self.source.find_published(&self.content_type, limit).await?;

        let mut summary = ExportSummary::new(records.len());

        for record in &records {
            let item = project(record);
            self.migrate_item(&item, &mut summary).await;
        }

        summary.duration = start.elapsed();
        summary.log_summary();

        Ok(summary)
    }

    async fn migrate_item(&self, item: &ExportItem, summary: &mut ExportSummary) {
        let asset = self.upload_image(item, summary).await;

        for tag in &item.tags {
            if let Err(e) = self.storyblok.create_datasource_entry(tag).await {
                tracing::warn!(
                    title = %item.title,
                    tag = %tag,
                    error = %e,
                    "Failed to register tag"
                );
                summary.add_error(&item.title, MigrationStage::DatasourceEntry, e.to_string());
            }
        }

        let payload = StoryPayload::from_export(item, asset.as_ref(), slugify(&item.title));

        match self.storyblok.create_story(&payload).await {
            Ok(story_id) => {
                summary.migrated += 1;
                tracing::info!(title = %item.title, story_id = %story_id, "Created story");
            }
            Err(e) => {
                summary.failed += 1;
                tracing::error!(title = %item.title, error = %e, "Failed to create story");
                summary.add_error(&item.title, MigrationStage::StoryCreation, e.to_string());
            }
        }
    }

    /// Uploads the item's image when it has one that maps to a local file.
    ///
    /// Any failure here degrades the item to an imageless story rather than
    /// blocking it.
    async fn upload_image(
        &self,
        item: &ExportItem,
        summary: &mut ExportSummary,
    ) -> Option<UploadedAsset> {
        let image = item.image.as_ref()?;

        let Some(local_path) = drupal::local_file_path(&self.files_dir, &image.source_uri) else {
            tracing::warn!(
                title = %item.title,
                uri = %image.source_uri,
                "Image URI has no local mapping"
            );
            summary.add_error(
                &item.title,
                MigrationStage::AssetUpload,
                format!("no local mapping for {}", image.source_uri),
            );
            return None;
        };

        match self.storyblok.upload_asset(&local_path, &image.filename).await {
            Ok(asset) => {
                summary.assets_uploaded += 1;
                Some(asset)
            }
            Err(e) => {
                tracing::warn!(
                    title = %item.title,
                    filename = %image.filename,
                    error = %e,
                    "Asset upload failed"
                );
                summary.add_error(&item.title, MigrationStage::AssetUpload, e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        DrupalError, ExportImage, FileEntity, FileRef, SourceRecord, StoryId, StoryblokError,
        TagRef,
    };
    use async_trait::async_trait;
    use chrono::DateTime;
    use std::path::Path;
    use std::sync::Mutex;

    struct FakeSource {
        records: Vec<SourceRecord>,
        fail: bool,
        seen_limit: Mutex<Option<Option<u32>>>,
    }

    impl FakeSource {
        fn with_records(records: Vec<SourceRecord>) -> Self {
            Self {
                records,
                fail: false,
                seen_limit: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ArticleSource for FakeSource {
        async fn find_published(
            &self,
            _content_type: &str,
            limit: Option<u32>,
        ) -> Result<Vec<SourceRecord>> {
            *self.seen_limit.lock().unwrap() = Some(limit);
            if self.fail {
                return Err(DrupalError::ConnectionFailed("refused".to_string()).into());
            }
            Ok(self.records.clone())
        }
    }

    #[derive(Default)]
    struct FakeStoryblok {
        fail_upload: bool,
        fail_story_titled: Option<String>,
        uploads: Mutex<Vec<String>>,
        tags: Mutex<Vec<String>>,
        stories: Mutex<Vec<StoryPayload>>,
    }

    #[async_trait]
    impl StoryblokApi for FakeStoryblok {
        async fn upload_asset(
            &self,
            _local_path: &Path,
            filename: &str,
        ) -> std::result::Result<UploadedAsset, StoryblokError> {
            if self.fail_upload {
                return Err(StoryblokError::UnexpectedStatus {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            self.uploads.lock().unwrap().push(filename.to_string());
            Ok(UploadedAsset {
                id: 42,
                filename: format!("https://a.storyblok.com/f/1/{filename}"),
            })
        }

        async fn create_datasource_entry(
            &self,
            label: &str,
        ) -> std::result::Result<(), StoryblokError> {
            self.tags.lock().unwrap().push(label.to_string());
            Ok(())
        }

        async fn create_story(
            &self,
            payload: &StoryPayload,
        ) -> std::result::Result<StoryId, StoryblokError> {
            if self.fail_story_titled.as_deref() == Some(payload.name.as_str()) {
                return Err(StoryblokError::UnexpectedStatus {
                    status: 422,
                    message: "invalid".to_string(),
                });
            }
            self.stories.lock().unwrap().push(payload.clone());
            Ok(StoryId::new(1000 + self.stories.lock().unwrap().len() as u64))
        }
    }

    fn record(title: &str) -> SourceRecord {
        SourceRecord {
            title: title.to_string(),
            body: "<p>Body</p>".to_string(),
            created: DateTime::parse_from_rfc3339("2024-05-01T10:30:00+00:00").unwrap(),
            author: "admin".to_string(),
            image: None,
            tags: Vec::new(),
        }
    }

    fn record_with_image_and_tags(title: &str) -> SourceRecord {
        let mut record = record(title);
        record.image = Some(FileRef {
            id: "f1".to_string(),
            entity: Some(FileEntity {
                uri: "public://cover.jpg".to_string(),
                filename: "cover.jpg".to_string(),
            }),
        });
        record.tags = vec![TagRef {
            id: "t1".to_string(),
            label: Some("news".to_string()),
        }];
        record
    }

    fn coordinator(source: FakeSource, storyblok: Arc<FakeStoryblok>) -> ExportCoordinator {
        ExportCoordinator::new(
            Arc::new(source),
            storyblok,
            "article".to_string(),
            PathBuf::from("/var/www/files"),
        )
    }

    #[tokio::test]
    async fn test_plain_items_export_without_side_calls() {
        let source = FakeSource::with_records(vec![
            record("One"),
            record("Two"),
            record("Three"),
        ]);
        let storyblok = Arc::new(FakeStoryblok::default());
        let coordinator = coordinator(source, storyblok.clone());

        let summary = coordinator.execute_export(None).await.unwrap();

        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.migrated, 3);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.assets_uploaded, 0);
        assert!(summary.is_successful());
        assert!(storyblok.uploads.lock().unwrap().is_empty());
        assert!(storyblok.tags.lock().unwrap().is_empty());
        assert_eq!(storyblok.stories.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_upload_failure_degrades_to_imageless_story() {
        let source = FakeSource::with_records(vec![record_with_image_and_tags("Breaking")]);
        let storyblok = Arc::new(FakeStoryblok {
            fail_upload: true,
            ..FakeStoryblok::default()
        });
        let coordinator = coordinator(source, storyblok.clone());

        let summary = coordinator.execute_export(None).await.unwrap();

        assert_eq!(summary.migrated, 1);
        assert_eq!(summary.assets_uploaded, 0);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].stage, MigrationStage::AssetUpload);

        // Tag registration still ran and the story went out without an image.
        assert_eq!(*storyblok.tags.lock().unwrap(), vec!["news".to_string()]);
        let stories = storyblok.stories.lock().unwrap();
        assert_eq!(stories.len(), 1);
        assert!(stories[0].content.image.id.is_none());
        assert!(stories[0].content.image.filename.is_none());
    }

    #[tokio::test]
    async fn test_successful_upload_populates_story_image() {
        let source = FakeSource::with_records(vec![record_with_image_and_tags("Covered")]);
        let storyblok = Arc::new(FakeStoryblok::default());
        let coordinator = coordinator(source, storyblok.clone());

        let summary = coordinator.execute_export(None).await.unwrap();

        assert_eq!(summary.assets_uploaded, 1);
        assert_eq!(*storyblok.uploads.lock().unwrap(), vec!["cover.jpg".to_string()]);

        let stories = storyblok.stories.lock().unwrap();
        assert_eq!(stories[0].content.image.id, Some(42));
        assert_eq!(
            stories[0].content.image.filename.as_deref(),
            Some("https://a.storyblok.com/f/1/cover.jpg")
        );
        assert_eq!(stories[0].slug, "covered");
    }

    #[tokio::test]
    async fn test_mixed_outcomes_counted_separately() {
        let source = FakeSource::with_records(vec![
            record("Good"),
            record("Bad"),
            record("Also Good"),
        ]);
        let storyblok = Arc::new(FakeStoryblok {
            fail_story_titled: Some("Bad".to_string()),
            ..FakeStoryblok::default()
        });
        let coordinator = coordinator(source, storyblok.clone());

        let summary = coordinator.execute_export(None).await.unwrap();

        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.migrated, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.is_successful());
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].item_title, "Bad");
        assert_eq!(summary.errors[0].stage, MigrationStage::StoryCreation);
    }

    #[tokio::test]
    async fn test_limit_is_forwarded_to_source() {
        let source = Arc::new(FakeSource::with_records(Vec::new()));
        let coordinator = ExportCoordinator::new(
            source.clone(),
            Arc::new(FakeStoryblok::default()),
            "article".to_string(),
            PathBuf::from("/files"),
        );

        let summary = coordinator.execute_export(Some(5)).await.unwrap();
        assert_eq!(summary.total_items, 0);
        assert!(summary.is_successful());
        assert_eq!(*source.seen_limit.lock().unwrap(), Some(Some(5)));
    }

    #[tokio::test]
    async fn test_fetch_failure_fails_the_run() {
        let source = FakeSource {
            records: Vec::new(),
            fail: true,
            seen_limit: Mutex::new(None),
        };
        let coordinator = coordinator(source, Arc::new(FakeStoryblok::default()));

        assert!(coordinator.execute_export(None).await.is_err());
    }

    #[tokio::test]
    async fn test_unmappable_image_uri_is_recorded() {
        let mut record = record("Remote");
        record.image = Some(FileRef {
            id: "f1".to_string(),
            entity: Some(FileEntity {
                uri: "private://secret.jpg".to_string(),
                filename: "secret.jpg".to_string(),
            }),
        });
        let source = FakeSource::with_records(vec![record]);
        let storyblok = Arc::new(FakeStoryblok::default());
        let coordinator = coordinator(source, storyblok.clone());

        let summary = coordinator.execute_export(None).await.unwrap();

        assert_eq!(summary.migrated, 1);
        assert_eq!(summary.assets_uploaded, 0);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].stage, MigrationStage::AssetUpload);
        assert!(storyblok.uploads.lock().unwrap().is_empty());
    }

    #[test]
    fn test_project_into_payload_uses_export_image() {
        let record = record_with_image_and_tags("Shaped");
        let item = project(&record);
        assert_eq!(
            item.image,
            Some(ExportImage {
                source_uri: "public://cover.jpg".to_string(),
                filename: "cover.jpg".to_string(),
            })
        );
    }
}
