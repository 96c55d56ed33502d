//! Pipeline configuration

use car_catalog::TextEncoding;
use data_validator::FilterThresholds;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Catalog file to read
    pub input_path: PathBuf,

    /// Catalog file to write
    pub output_path: PathBuf,

    /// Encoding for both files
    pub encoding: TextEncoding,

    /// Car filter thresholds
    pub thresholds: FilterThresholds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("cars.json"),
            output_path: PathBuf::from("carsResult.json"),
            encoding: TextEncoding::Utf8Sig,
            thresholds: FilterThresholds::default(),
        }
    }
}
