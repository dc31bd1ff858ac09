//! File-backed product snapshot loader.
//!
//! Stands in for the storefront's storage layer when the engine is driven
//! from the command line. The snapshot is read once and handed to the engine
//! as an immutable [`Product`].

use std::path::{Path, PathBuf};

use crate::catalog::Product;
use crate::error::SnapshotError;

const EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Load a product snapshot from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns `SnapshotError` if the file cannot be read, has an unknown
/// extension, or does not parse as a [`Product`].
pub fn load_product(path: &Path) -> Result<Product, SnapshotError> {
    let display = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: display.clone(),
        source: e,
    })?;

    let product: Product = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| SnapshotError::Json {
            path: display,
            source: e,
        })?,
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&content).map_err(|e| SnapshotError::Yaml {
                path: display,
                source: e,
            })?
        }
        _ => return Err(SnapshotError::UnsupportedFormat { path: display }),
    };

    tracing::debug!(
        product = %product.id,
        variants = product.variants.len(),
        attributes = product.attributes.len(),
        "loaded product snapshot"
    );

    Ok(product)
}

/// Resolve a product reference to a snapshot file.
///
/// An existing path is used as-is. Anything else is treated as a product id
/// and looked up as `<catalog_dir>/<id>.yaml`, `.yml`, then `.json`.
///
/// # Errors
///
/// Returns `SnapshotError::NotFound` if no candidate file exists.
pub fn resolve_snapshot_path(reference: &str, catalog_dir: &Path) -> Result<PathBuf, SnapshotError> {
    let direct = PathBuf::from(reference);
    if direct.is_file() {
        return Ok(direct);
    }

    EXTENSIONS
        .iter()
        .map(|ext| catalog_dir.join(format!("{reference}.{ext}")))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| SnapshotError::NotFound {
            id: reference.to_string(),
            dir: catalog_dir.display().to_string(),
        })
}
