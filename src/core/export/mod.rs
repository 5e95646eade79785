//! Export run orchestration and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use summary::{ExportSummary, MigrationError, MigrationStage};
