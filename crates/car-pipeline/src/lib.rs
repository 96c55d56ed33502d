//! Car Catalog Pipeline
//!
//! Loads a manufacturer catalog, drops malformed cars, filters the rest
//! against fixed thresholds and writes the survivors to a new catalog file.

mod config;
mod pipeline;

pub use config::PipelineConfig;
pub use pipeline::{process_catalog, run_pipeline, PipelineReport};

use car_catalog::CatalogError;
use data_validator::ValidationError;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Manufacturer {manufacturer:?}: {source}")]
    Validation {
        manufacturer: String,
        #[source]
        source: ValidationError,
    },
}

impl PipelineError {
    /// Whether the input file or the output directory is missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PipelineError::Catalog(CatalogError::NotFound(_))
                | PipelineError::Catalog(CatalogError::DirectoryNotFound(_))
        )
    }
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set");
    }
}
