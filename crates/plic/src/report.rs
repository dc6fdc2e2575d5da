//! Result table persistence.
//!
//! One CSV row per manifest record, in manifest order, columns
//! `key,total,hbonds,hydrophobic,pk`. Failed records (skip-and-record
//! policy) serialize with empty count fields as the failure marker; the
//! affinity label is still carried through.

use std::path::{Path, PathBuf};

use crate::batch::{RecordOutcome, ResultTable};
use crate::error::{PlicError, PlicResult};

/// Output path derived from the manifest file name:
/// `<results_dir>/<manifest_stem>_count_interactions.csv`.
pub fn results_path(results_dir: &Path, manifest: &Path) -> PathBuf {
    let stem = manifest
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("manifest");
    results_dir.join(format!("{stem}_count_interactions.csv"))
}

pub fn write_results(table: &ResultTable, path: &Path) -> PlicResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| PlicError::ReportWrite(format!("{}: {e}", path.display())))?;
    let io_err = |e: csv::Error| PlicError::ReportWrite(format!("{}: {e}", path.display()));

    writer
        .write_record(["key", "total", "hbonds", "hydrophobic", "pk"])
        .map_err(io_err)?;
    for (key, outcome) in table.rows() {
        let row: [String; 5] = match outcome {
            RecordOutcome::Summary(s) => [
                key.clone(),
                s.total.to_string(),
                s.hbonds.to_string(),
                s.hydrophobic.to_string(),
                s.pk.to_string(),
            ],
            RecordOutcome::Failed { pk, .. } => {
                [key.clone(), String::new(), String::new(), String::new(), pk.to_string()]
            }
        };
        writer.write_record(&row).map_err(io_err)?;
    }
    writer
        .flush()
        .map_err(|e| PlicError::ReportWrite(format!("{}: {e}", path.display())))?;
    Ok(())
}
