//! Manifest loading.
//!
//! The manifest is a CSV table with one row per protein-ligand pair. The
//! four required columns are `protein`, `ligand`, `key` and `pk`; extra
//! columns are ignored. Relative structure paths are resolved against the
//! caller-supplied data directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PlicError, PlicResult};

const REQUIRED_COLUMNS: &[&str] = &["protein", "ligand", "key", "pk"];

#[derive(Debug, Deserialize)]
struct RawRecord {
    protein: String,
    ligand: String,
    key: String,
    pk: f64,
}

#[derive(Clone, Debug)]
pub struct ManifestRecord {
    pub key: String,
    pub protein_path: PathBuf,
    pub ligand_path: PathBuf,
    pub pk: f64,
}

/// Load a manifest, preserving row order.
///
/// Fails with `ManifestIo` when the file cannot be read and with
/// `ManifestFormat` on missing columns, malformed rows or duplicate keys.
pub fn load_manifest(csv_file: &Path, data_dir: &Path) -> PlicResult<Vec<ManifestRecord>> {
    let mut reader = csv::Reader::from_path(csv_file).map_err(|e| match e.kind() {
        csv::ErrorKind::Io(_) => {
            PlicError::ManifestIo(format!("{}: {e}", csv_file.display()))
        }
        _ => PlicError::ManifestFormat(format!("{}: {e}", csv_file.display())),
    })?;

    let headers = reader
        .headers()
        .map_err(|e| PlicError::ManifestFormat(format!("{}: {e}", csv_file.display())))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(PlicError::ManifestFormat(format!(
                "{}: missing required column '{column}'",
                csv_file.display()
            )));
        }
    }

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.map_err(|e| {
            PlicError::ManifestFormat(format!("{} row {}: {e}", csv_file.display(), row + 2))
        })?;
        if !seen.insert(raw.key.clone()) {
            return Err(PlicError::ManifestFormat(format!(
                "{}: duplicate key '{}'",
                csv_file.display(),
                raw.key
            )));
        }
        records.push(ManifestRecord {
            key: raw.key,
            protein_path: resolve(data_dir, &raw.protein),
            ligand_path: resolve(data_dir, &raw.ligand),
            pk: raw.pk,
        });
    }
    Ok(records)
}

fn resolve(data_dir: &Path, file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}
