//! Storyblok Management API request/response shapes

use crate::domain::StoryPayload;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request body for `POST /spaces/{id}/assets`
#[derive(Debug, Serialize)]
pub struct NewAssetRequest<'a> {
    pub filename: &'a str,
    pub validate_upload: u8,
}

/// The signed upload target returned by `POST /spaces/{id}/assets`
///
/// `fields` must be forwarded verbatim as multipart form fields ahead of
/// the file part when transferring the bytes to `post_url`.
#[derive(Debug, Deserialize)]
pub struct SignedUploadResponse {
    pub id: u64,
    pub post_url: String,
    pub pretty_url: String,

    #[serde(default)]
    pub fields: HashMap<String, String>,
}

/// Request body for `POST /spaces/{id}/datasource_entries`
#[derive(Debug, Serialize)]
pub struct DatasourceEntryRequest<'a> {
    pub datasource_entry: DatasourceEntry<'a>,
}

#[derive(Debug, Serialize)]
pub struct DatasourceEntry<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub datasource_id: i64,
}

/// Request body for `POST /spaces/{id}/stories`
#[derive(Debug, Serialize)]
pub struct StoryRequest<'a> {
    pub story: &'a StoryPayload,
}

/// Response body of a successful story creation
#[derive(Debug, Deserialize)]
pub struct StoryCreatedResponse {
    pub story: CreatedStory,
}

#[derive(Debug, Deserialize)]
pub struct CreatedStory {
    pub id: u64,
}
