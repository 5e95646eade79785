//! Domain models and types for Portico.
//!
//! This module contains the core domain models, error types, and the shapes
//! that travel through the export pipeline:
//!
//! - **Source shapes** ([`SourceRecord`], [`FileRef`], [`TagRef`]): raw
//!   records as the source adapter read them, references possibly dangling
//! - **Export shapes** ([`ExportItem`], [`ExportImage`]): store-agnostic
//!   items produced by projection
//! - **Destination shapes** ([`StoryPayload`], [`UploadedAsset`],
//!   [`StoryId`]): what the Storyblok Management API consumes and returns
//! - **Error types** ([`PorticoError`], [`DrupalError`], [`StoryblokError`])
//!   and the [`Result`] alias
//!
//! No entity is mutated after creation and nothing here is persisted
//! locally; the destination platform is the system of record once a call
//! succeeds.

pub mod article;
pub mod errors;
pub mod result;
pub mod story;

// Re-export commonly used types for convenience
pub use article::{ExportImage, ExportItem, FileEntity, FileRef, SourceRecord, TagRef};
pub use errors::{DrupalError, PorticoError, StoryblokError};
pub use result::Result;
pub use story::{ImageField, StoryContent, StoryId, StoryPayload, UploadedAsset};
