//! Drupal source adapter
//!
//! Reads published article nodes over the site's JSON:API endpoint and maps
//! them into domain [`SourceRecord`](crate::domain::SourceRecord)s.

pub mod client;
pub mod models;

pub use client::{local_file_path, ArticleSource, DrupalClient};
