//! Car Catalog
//!
//! Manufacturer and car records plus JSON loading and writing of catalog files.

mod io;
mod model;

pub use io::{load_catalog, parse_catalog, write_catalog, TextEncoding};
pub use model::{Car, Manufacturer, Weight};

use std::path::PathBuf;
use thiserror::Error;

/// Catalog I/O errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
