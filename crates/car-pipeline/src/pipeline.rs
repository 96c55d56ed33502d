//! Catalog Filtering Pipeline

use crate::{PipelineConfig, PipelineError};
use car_catalog::{load_catalog, write_catalog, Manufacturer};
use data_validator::{remove_invalid_cars, remove_invalid_manufacturers, CarFilter, FilterThresholds};
use serde::Serialize;
use tracing::{debug, info};

/// Counts collected over one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub manufacturers_read: usize,
    pub manufacturers_written: usize,
    pub cars_read: usize,
    /// Cars dropped by structural validation
    pub cars_invalid: usize,
    /// Cars dropped by the thresholds
    pub cars_filtered: usize,
    pub cars_written: usize,
}

/// Validate and filter an in-memory catalog
///
/// Each manufacturer's models are replaced by the cars that pass validation
/// and the thresholds, then manufacturers left blank or empty are dropped.
pub fn process_catalog(
    manufacturers: Vec<Manufacturer>,
    thresholds: &FilterThresholds,
) -> Result<(Vec<Manufacturer>, PipelineReport), PipelineError> {
    let filter = CarFilter::new(thresholds.clone());
    let mut report = PipelineReport {
        manufacturers_read: manufacturers.len(),
        ..Default::default()
    };

    let mut processed = Vec::with_capacity(manufacturers.len());
    for mut manufacturer in manufacturers {
        let total = manufacturer.models.len();
        let valid = remove_invalid_cars(std::mem::take(&mut manufacturer.models));
        let valid_count = valid.len();

        manufacturer.models = filter
            .filter(valid)
            .map_err(|source| PipelineError::Validation {
                manufacturer: manufacturer.name.clone(),
                source,
            })?;

        debug!(
            "{}: {} cars, {} valid, {} kept",
            manufacturer.name,
            total,
            valid_count,
            manufacturer.models.len()
        );

        report.cars_read += total;
        report.cars_invalid += total - valid_count;
        report.cars_filtered += valid_count - manufacturer.models.len();
        processed.push(manufacturer);
    }

    let processed = remove_invalid_manufacturers(processed);
    report.manufacturers_written = processed.len();
    report.cars_written = processed.iter().map(|m| m.models.len()).sum();

    Ok((processed, report))
}

/// Run the full pipeline: load, validate, filter, write
///
/// Nothing is written unless every stage before the writer succeeds.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport, PipelineError> {
    info!(
        "Filtering {} into {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let catalog = load_catalog(&config.input_path, config.encoding)?;
    let (catalog, report) = process_catalog(catalog, &config.thresholds)?;
    write_catalog(&config.output_path, &catalog, config.encoding)?;

    info!(
        "Kept {}/{} manufacturers and {}/{} cars ({} invalid, {} below thresholds)",
        report.manufacturers_written,
        report.manufacturers_read,
        report.cars_written,
        report.cars_read,
        report.cars_invalid,
        report.cars_filtered
    );
    Ok(report)
}
