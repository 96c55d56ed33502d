//! Catalog File Loading and Writing

use crate::{CatalogError, Manufacturer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, info};

const UTF8_BOM: &str = "\u{feff}";

/// Text encoding used for catalog files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    /// Plain UTF-8
    Utf8,
    /// UTF-8 with byte-order mark: stripped on read, written on output
    #[default]
    Utf8Sig,
}

/// Parse catalog JSON text
pub fn parse_catalog(text: &str, encoding: TextEncoding) -> Result<Vec<Manufacturer>, CatalogError> {
    let text = match encoding {
        TextEncoding::Utf8Sig => text.strip_prefix(UTF8_BOM).unwrap_or(text),
        TextEncoding::Utf8 => text,
    };
    Ok(serde_json::from_str(text)?)
}

/// Load a catalog file
pub fn load_catalog(path: &Path, encoding: TextEncoding) -> Result<Vec<Manufacturer>, CatalogError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    let manufacturers = parse_catalog(&text, encoding)?;
    info!(
        "Loaded {} manufacturers from {}",
        manufacturers.len(),
        path.display()
    );
    Ok(manufacturers)
}

/// Write a catalog file as 2-space indented JSON, replacing any existing content
pub fn write_catalog(
    path: &Path,
    manufacturers: &[Manufacturer],
    encoding: TextEncoding,
) -> Result<(), CatalogError> {
    let io_err = |e: std::io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::DirectoryNotFound(
            path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| path.to_path_buf()),
        ),
        _ => io_err(e),
    })?;

    let mut writer = BufWriter::new(file);
    if encoding == TextEncoding::Utf8Sig {
        writer.write_all(UTF8_BOM.as_bytes()).map_err(io_err)?;
    }
    serde_json::to_writer_pretty(&mut writer, manufacturers)?;
    writer.flush().map_err(io_err)?;

    info!(
        "Wrote {} manufacturers to {}",
        manufacturers.len(),
        path.display()
    );
    Ok(())
}
