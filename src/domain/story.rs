//! Storyblok story payload types
//!
//! These types serialize bit-for-bit into the shape the Storyblok
//! Management API expects for story creation. Fields the contract wants as
//! explicit `null` are modeled as `Option` without `skip_serializing_if`.

use crate::domain::article::ExportItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier Storyblok assigned to a created story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(u64);

impl StoryId {
    /// Creates a new StoryId
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric identifier
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An asset the destination accepted during an item's migration.
///
/// Ephemeral: exists only for the duration of one item's migration and is
/// never cached or reused across items, even when two items share a source
/// file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    /// Destination-assigned asset identifier
    pub id: u64,

    /// Destination-assigned path/URL for the asset
    pub filename: String,
}

/// The story creation payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryPayload {
    pub name: String,
    pub created_at: String,
    pub slug: String,
    pub content: StoryContent,
    pub is_folder: bool,
    pub parent_id: i64,
    pub disable_fe_editor: bool,
    pub path: Option<String>,
    pub is_startpage: bool,
    /// Always false: exported content lands unpublished by design.
    pub publish: bool,
}

/// The `content` object of a story payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryContent {
    pub component: String,
    pub title: String,
    pub body: String,
    pub image: ImageField,
    pub tags: Vec<String>,
}

/// The asset sub-object inside the story content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageField {
    pub id: Option<u64>,
    pub alt: Option<String>,
    pub name: String,
    pub focus: String,
    pub title: Option<String>,
    pub source: Option<String>,
    pub filename: Option<String>,
    pub copyright: Option<String>,
    pub fieldtype: String,
    pub meta_data: serde_json::Map<String, serde_json::Value>,
    pub is_external_url: bool,
}

impl ImageField {
    /// An image field carrying no asset (all nullable fields null).
    pub fn absent() -> Self {
        Self {
            id: None,
            alt: None,
            name: String::new(),
            focus: String::new(),
            title: None,
            source: None,
            filename: None,
            copyright: None,
            fieldtype: "asset".to_string(),
            meta_data: serde_json::Map::new(),
            is_external_url: false,
        }
    }
}

impl StoryPayload {
    /// Builds the payload for one export item.
    ///
    /// `asset` is the outcome of the item's upload step: `None` either when
    /// the item has no image or when the upload failed, in which case the
    /// image sub-object carries null id/filename and the story is created
    /// without an image.
    pub fn from_export(item: &ExportItem, asset: Option<&UploadedAsset>, slug: String) -> Self {
        let mut image = ImageField::absent();
        if let Some(asset) = asset {
            image.id = Some(asset.id);
            image.filename = Some(asset.filename.clone());
        }

        Self {
            name: item.title.clone(),
            created_at: item.created_at.clone(),
            slug,
            content: StoryContent {
                component: "article".to_string(),
                title: item.title.clone(),
                body: item.body.clone(),
                image,
                tags: item.tags.clone(),
            },
            is_folder: false,
            parent_id: 0,
            disable_fe_editor: false,
            path: None,
            is_startpage: false,
            publish: false,
        }
    }
}
