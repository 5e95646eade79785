//! Record projection
//!
//! Flattens a source record into the export shape: resolved references are
//! kept, dangling ones drop out silently.

use crate::domain::{ExportImage, ExportItem, SourceRecord};

/// Projects one source record into an export item.
///
/// An image reference without a resolved file entity projects to no image;
/// tag references without a resolved label are skipped. Resolved tags keep
/// their source order, duplicates included.
pub fn project(record: &SourceRecord) -> ExportItem {
    let image = record.image.as_ref().and_then(|file_ref| {
        file_ref.entity.as_ref().map(|entity| ExportImage {
            source_uri: entity.uri.clone(),
            filename: entity.filename.clone(),
        })
    });

    let tags = record
        .tags
        .iter()
        .filter_map(|tag| tag.label.clone())
        .collect();

    ExportItem {
        title: record.title.clone(),
        body: record.body.clone(),
        created_at: record.created.format("%Y-%m-%d %H:%M:%S").to_string(),
        author: record.author.clone(),
        image,
        tags,
    }
}
