//! Storyblok destination adapter
//!
//! Talks to the Management API of one space: asset uploads, datasource
//! entries, and story creation.

pub mod client;
pub mod models;

pub use client::{StoryblokApi, StoryblokClient};
