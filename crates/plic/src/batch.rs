//! Batch orchestration.
//!
//! Records are processed strictly in manifest order. Each record combines
//! its structures, persists the complex through a `TempComplex` guard,
//! analyzes it, and lets the guard remove the file whether analysis
//! succeeded or not. The failure policy decides whether the first error
//! aborts the batch or is recorded as a marker row.

use std::path::PathBuf;
use std::time::Instant;

use crate::analyze::{analyze_complex, InteractionSummary, SitePolicy};
use crate::complex::{combine_structures, TempComplex};
use crate::error::PlicResult;
use crate::manifest::{load_manifest, ManifestRecord};
use crate::streaming::StreamEmitter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the batch on the first failing record.
    #[default]
    FailFast,
    /// Record the failure and continue with the next record.
    SkipAndRecord,
}

#[derive(Clone, Debug)]
pub enum RecordOutcome {
    Summary(InteractionSummary),
    Failed { reason: String, pk: f64 },
}

/// Result table keyed by record identifier, in manifest order.
#[derive(Clone, Debug, Default)]
pub struct ResultTable {
    rows: Vec<(String, RecordOutcome)>,
}

impl ResultTable {
    pub fn push(&mut self, key: String, outcome: RecordOutcome) {
        self.rows.push((key, outcome));
    }

    pub fn rows(&self) -> &[(String, RecordOutcome)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn failures(&self) -> usize {
        self.rows
            .iter()
            .filter(|(_, o)| matches!(o, RecordOutcome::Failed { .. }))
            .count()
    }

    pub fn get(&self, key: &str) -> Option<&RecordOutcome> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, o)| o)
    }
}

#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub manifest: PathBuf,
    pub data_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub site_policy: SitePolicy,
    pub failure_policy: FailurePolicy,
}

impl BatchConfig {
    pub fn new(manifest: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            data_dir: data_dir.into(),
            temp_dir: PathBuf::from("temp_files"),
            site_policy: SitePolicy::default(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Load the manifest and run the batch. `tick` is called once per
/// completed record with the record key, for progress observation.
pub fn run_batch<F: FnMut(&str)>(
    config: &BatchConfig,
    emitter: &StreamEmitter,
    tick: F,
) -> PlicResult<ResultTable> {
    let records = load_manifest(&config.manifest, &config.data_dir)?;
    run_batch_records(config, &records, emitter, tick)
}

/// Run the batch over already-loaded manifest records, so a caller that
/// needs the record count up front does not parse the manifest twice.
pub fn run_batch_records<F: FnMut(&str)>(
    config: &BatchConfig,
    records: &[ManifestRecord],
    emitter: &StreamEmitter,
    mut tick: F,
) -> PlicResult<ResultTable> {
    let started = Instant::now();
    let total = records.len();

    let mut table = ResultTable::default();
    for (index, record) in records.iter().enumerate() {
        match process_record(config, record) {
            Ok(summary) => {
                table.push(record.key.clone(), RecordOutcome::Summary(summary));
                emitter.emit_record_complete(index, total, &record.key, true);
            }
            Err(err) => {
                emitter.emit_error("record_failed", &format!("{}: {err}", record.key));
                match config.failure_policy {
                    FailurePolicy::FailFast => return Err(err),
                    FailurePolicy::SkipAndRecord => {
                        table.push(
                            record.key.clone(),
                            RecordOutcome::Failed {
                                reason: err.to_string(),
                                pk: record.pk,
                            },
                        );
                        emitter.emit_record_complete(index, total, &record.key, false);
                    }
                }
            }
        }
        tick(&record.key);
    }

    let elapsed_ms = started.elapsed().as_millis().try_into().unwrap_or(u64::MAX);
    emitter.emit_batch_complete(total, table.failures(), elapsed_ms);
    Ok(table)
}

fn process_record(config: &BatchConfig, record: &ManifestRecord) -> PlicResult<InteractionSummary> {
    let complex = combine_structures(&record.protein_path, &record.ligand_path)?;
    let temp = TempComplex::create(&config.temp_dir, &record.key, &complex)?;
    // The guard drops here on both arms, removing the temp file even when
    // analysis fails.
    analyze_complex(temp.path(), &record.key, record.pk, config.site_policy)
}
