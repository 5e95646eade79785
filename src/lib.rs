// Portico - Drupal to Storyblok ETL Tool
// Copyright (c) 2026 Portico Contributors
// Licensed under the MIT License

//! # Portico - Drupal to Storyblok ETL
//!
//! Portico is an ETL tool built in Rust that exports published Drupal
//! articles to the Storyblok headless CMS, including cover image assets
//! and tag datasource entries.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** published article nodes from Drupal via JSON:API
//! - **Transforming** nodes into flat export items (title, body, author,
//!   created time, image, tags)
//! - **Loading** items into a Storyblok space as stories, with the cover
//!   image uploaded as an asset and each tag registered in a datasource
//!
//! ## Architecture
//!
//! Portico follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (projection, slugs, export orchestration)
//! - [`adapters`] - External integrations (Drupal, Storyblok)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portico::config::load_config;
//! use portico::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("portico.toml")?;
//!
//!     let coordinator = ExportCoordinator::from_config(&config)?;
//!     let summary = coordinator.execute_export(None).await?;
//!
//!     println!("Exported {} articles", summary.migrated);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Portico uses the [`domain::PorticoError`] type for all errors. Source
//! and destination failures carry their own typed variants
//! ([`domain::DrupalError`], [`domain::StoryblokError`]) so callers can
//! distinguish connection problems from API rejections.
//!
//! ## Failure Isolation
//!
//! One article failing to migrate never aborts the run. Asset upload and
//! tag registration failures degrade the affected story (it goes out
//! without an image); only the initial source query can fail the whole
//! export.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
