//! JSON:API wire types and record mapping
//!
//! Drupal's JSON:API returns nodes under `data` with relationship references
//! into an `included` set. A reference whose target is absent from
//! `included` (the file was deleted, the term no longer exists) is carried
//! into the domain as a dangling reference, not an error.

use crate::domain::{FileEntity, FileRef, SourceRecord, TagRef};
use chrono::DateTime;
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level JSON:API document
#[derive(Debug, Deserialize)]
pub struct JsonApiDocument {
    pub data: Vec<Resource>,

    #[serde(default)]
    pub included: Vec<Resource>,
}

/// One JSON:API resource object
#[derive(Debug, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,

    pub id: String,

    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,

    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

/// A relationship field; `data` is null, one identifier, or a list
#[derive(Debug, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    Many(Vec<ResourceIdentifier>),
    One(ResourceIdentifier),
}

/// Reference to a resource by type and id
#[derive(Debug, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,

    pub id: String,
}

impl Relationship {
    /// All referenced identifiers, in document order.
    pub fn identifiers(&self) -> &[ResourceIdentifier] {
        match &self.data {
            Some(RelationshipData::Many(many)) => many,
            Some(RelationshipData::One(one)) => std::slice::from_ref(one),
            None => &[],
        }
    }

    pub fn first(&self) -> Option<&ResourceIdentifier> {
        self.identifiers().first()
    }
}

/// Maps a JSON:API document into source records.
///
/// Records with an unusable title or created time are skipped with a
/// warning; dangling image/tag references are preserved as unresolved.
pub fn records_from_document(doc: &JsonApiDocument) -> Vec<SourceRecord> {
    let included: HashMap<(&str, &str), &Resource> = doc
        .included
        .iter()
        .map(|r| ((r.kind.as_str(), r.id.as_str()), r))
        .collect();

    doc.data
        .iter()
        .filter_map(|resource| record_from_resource(resource, &included))
        .collect()
}

fn record_from_resource(
    resource: &Resource,
    included: &HashMap<(&str, &str), &Resource>,
) -> Option<SourceRecord> {
    let title = resource.attributes.get("title")?.as_str()?.to_string();

    let created_raw = resource.attributes.get("created").and_then(|v| v.as_str());
    let created = match created_raw.map(DateTime::parse_from_rfc3339) {
        Some(Ok(created)) => created,
        _ => {
            tracing::warn!(
                node = %resource.id,
                title = %title,
                "Skipping record with missing or unparsable created time"
            );
            return None;
        }
    };

    let body = resource
        .attributes
        .get("body")
        .and_then(|b| b.get("value"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let author = resource
        .relationships
        .get("uid")
        .and_then(Relationship::first)
        .and_then(|ident| included.get(&(ident.kind.as_str(), ident.id.as_str())))
        .and_then(|user| {
            user.attributes
                .get("display_name")
                .or_else(|| user.attributes.get("name"))
        })
        .and_then(|v| v.as_str())
        .unwrap_or("Anonymous")
        .to_string();

    let image = resource
        .relationships
        .get("field_image")
        .and_then(Relationship::first)
        .map(|ident| FileRef {
            id: ident.id.clone(),
            entity: included
                .get(&(ident.kind.as_str(), ident.id.as_str()))
                .and_then(|file| file_entity(file)),
        });

    let tags = resource
        .relationships
        .get("field_tags")
        .map(|rel| {
            rel.identifiers()
                .iter()
                .map(|ident| TagRef {
                    id: ident.id.clone(),
                    label: included
                        .get(&(ident.kind.as_str(), ident.id.as_str()))
                        .and_then(|term| term.attributes.get("name"))
                        .and_then(|v| v.as_str())
                        .map(str::to_string),
                })
                .collect()
        })
        .unwrap_or_default();

    Some(SourceRecord {
        title,
        body,
        created,
        author,
        image,
        tags,
    })
}

fn file_entity(resource: &Resource) -> Option<FileEntity> {
    let uri = resource
        .attributes
        .get("uri")?
        .get("value")?
        .as_str()?
        .to_string();
    let filename = resource.attributes.get("filename")?.as_str()?.to_string();
    Some(FileEntity { uri, filename })
}
