//! Export command implementation
//!
//! This module implements the `export` command for exporting published
//! Drupal articles to Storyblok.

use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Maximum number of articles to export (zero or negative means all)
    #[arg(short, long)]
    pub limit: Option<i64>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // A non-positive limit means export everything.
        let limit = self
            .limit
            .filter(|n| *n > 0)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX));

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Export Configuration:");
            println!("  Source: {}", config.drupal.base_url);
            println!("  Content type: {}", config.export.content_type);
            println!("  Storyblok space: {}", config.storyblok.space_id);
            println!(
                "  Limit: {}",
                limit.map_or("All".to_string(), |n| n.to_string())
            );
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        // Create export coordinator
        tracing::info!("Creating export coordinator");
        let coordinator = match ExportCoordinator::from_config(&config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        println!("🚀 Starting export...");
        println!();

        let summary = match coordinator.execute_export(limit).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Display summary
        println!();
        println!("📊 Export Summary:");
        println!("  Total Articles: {}", summary.total_items);
        println!("  Migrated: {}", summary.migrated);
        println!("  Failed: {}", summary.failed);
        println!("  Assets Uploaded: {}", summary.assets_uploaded);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        if !summary.errors.is_empty() {
            println!("⚠️  Errors encountered:");
            for error in &summary.errors {
                println!(
                    "  - {} ({}): {}",
                    error.item_title, error.stage, error.message
                );
            }
            println!();
        }

        let exit_code = if summary.is_successful() {
            println!(
                "✅ Exported {} articles to Storyblok!",
                summary.migrated
            );
            0
        } else {
            println!("⚠️  Export completed with failures");
            1 // Partial success
        };

        Ok(exit_code)
    }
}
