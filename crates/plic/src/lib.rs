//! plic: batch protein-ligand interaction counting.
//!
//! For each record of a CSV manifest, merges a protein and a ligand
//! structure into a temporary complex, detects typed interactions at each
//! binding site, and tabulates per-record counts alongside the affinity
//! label carried through from the manifest.

#![forbid(unsafe_code)]

pub mod analyze;
pub mod batch;
pub mod complex;
pub mod detect;
pub mod error;
pub mod manifest;
pub mod mode;
pub mod report;
pub mod streaming;

pub use analyze::{analyze_complex, site_reports, InteractionSummary, SitePolicy};
pub use batch::{
    run_batch, run_batch_records, BatchConfig, FailurePolicy, RecordOutcome, ResultTable,
};
pub use complex::{combine_structures, TempComplex};
pub use detect::{detect_interactions, Interaction, InteractionKind, SiteReport};
pub use error::{PlicError, PlicResult};
pub use manifest::{load_manifest, ManifestRecord};
pub use mode::{select_mode, Mode};
