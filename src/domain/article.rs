//! Article models for the export pipeline
//!
//! Two shapes travel through the pipeline: [`SourceRecord`], the raw record
//! as the source adapter read it (references may be dangling), and
//! [`ExportItem`], the store-agnostic shape the projector produces once
//! references are resolved.

use chrono::{DateTime, FixedOffset};

/// One published article as read from the source store.
///
/// Constructed fresh per query and discarded after projection; never
/// persisted by this system.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// Article title
    pub title: String,

    /// Article body (HTML/markup as stored)
    pub body: String,

    /// Creation time in the store's configured timezone
    pub created: DateTime<FixedOffset>,

    /// Display name of the authoring user
    pub author: String,

    /// Image attachment reference, `None` when the field is empty
    pub image: Option<FileRef>,

    /// Taxonomy tag references in field order, duplicates included
    pub tags: Vec<TagRef>,
}

/// A reference to a file entity.
///
/// `entity` is `None` when the reference is dangling, i.e. the referenced
/// file no longer exists in the store. A dangling reference is a normal
/// outcome, never an error.
#[derive(Debug, Clone)]
pub struct FileRef {
    /// Identifier of the referenced file entity
    pub id: String,

    /// The resolved file entity, if it exists
    pub entity: Option<FileEntity>,
}

/// A resolved file entity.
#[derive(Debug, Clone)]
pub struct FileEntity {
    /// Store URI of the file, e.g. `public://images/cover.jpg`
    pub uri: String,

    /// Bare filename, e.g. `cover.jpg`
    pub filename: String,
}

/// A reference to a taxonomy term.
///
/// `label` is `None` when the reference is dangling.
#[derive(Debug, Clone)]
pub struct TagRef {
    /// Identifier of the referenced term
    pub id: String,

    /// The resolved term label, if the term exists
    pub label: Option<String>,
}

/// The export-ready shape produced by projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportItem {
    /// Article title
    pub title: String,

    /// Article body
    pub body: String,

    /// Creation time formatted `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,

    /// Display name of the authoring user
    pub author: String,

    /// Resolved image, present only when the attachment resolved to a file
    pub image: Option<ExportImage>,

    /// Resolved tag labels in original order, duplicates preserved
    pub tags: Vec<String>,
}

/// A resolved image attachment ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportImage {
    /// Store URI the asset bytes can be resolved from
    pub source_uri: String,

    /// Filename to register the asset under
    pub filename: String,
}
