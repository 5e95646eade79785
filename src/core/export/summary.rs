//! Export run summary

use std::time::Duration;

/// Outcome of one export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Items fetched from the source
    pub total_items: usize,

    /// Stories created in the destination
    pub migrated: usize,

    /// Items whose story creation failed
    pub failed: usize,

    /// Assets uploaded successfully
    pub assets_uploaded: usize,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Per-item errors, in the order they occurred
    pub errors: Vec<MigrationError>,
}

/// One recorded failure during a run
#[derive(Debug, Clone)]
pub struct MigrationError {
    pub item_title: String,
    pub stage: MigrationStage,
    pub message: String,
}

/// Where in an item's migration a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStage {
    AssetUpload,
    DatasourceEntry,
    StoryCreation,
}

impl std::fmt::Display for MigrationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetUpload => write!(f, "asset upload"),
            Self::DatasourceEntry => write!(f, "datasource entry"),
            Self::StoryCreation => write!(f, "story creation"),
        }
    }
}

impl ExportSummary {
    pub fn new(total_items: usize) -> Self {
        Self {
            total_items,
            migrated: 0,
            failed: 0,
            assets_uploaded: 0,
            duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, item_title: &str, stage: MigrationStage, message: String) {
        self.errors.push(MigrationError {
            item_title: item_title.to_string(),
            stage,
            message,
        });
    }

    /// True when every item produced a story.
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    /// Migrated items as a share of the total, 100.0 for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.total_items == 0 {
            return 100.0;
        }
        (self.migrated as f64 / self.total_items as f64) * 100.0
    }

    pub fn log_summary(&self) {
        tracing::info!(
            total_items = self.total_items,
            migrated = self.migrated,
            failed = self.failed,
            assets_uploaded = self.assets_uploaded,
            duration_secs = self.duration.as_secs_f64(),
            success_rate = self.success_rate(),
            "Export complete"
        );

        for error in &self.errors {
            tracing::warn!(
                item = %error.item_title,
                stage = %error.stage,
                message = %error.message,
                "Recorded migration error"
            );
        }
    }
}
