//! Car Catalog Filter - Main Entry Point

use car_catalog::CatalogError;
use car_pipeline::{init_logging, run_pipeline, PipelineConfig, PipelineError};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Car Catalog Filter v{} ===", env!("CARGO_PKG_VERSION"));
    let config = PipelineConfig::default();

    match run_pipeline(&config) {
        Ok(_) => Ok(()),
        // Missing files are reported, not fatal
        Err(PipelineError::Catalog(CatalogError::NotFound(path))) => {
            warn!("Input catalog {} does not exist", path.display());
            println!("File not found!");
            Ok(())
        }
        Err(PipelineError::Catalog(CatalogError::DirectoryNotFound(path))) => {
            warn!("Output directory {} does not exist", path.display());
            println!("Directory not found!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
