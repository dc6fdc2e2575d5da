//! Per-record interaction summaries.

use std::path::Path;

use plic_core::{read_pdb, PdbParseOptions};

use crate::detect::{detect_interactions, SiteReport};
use crate::error::{PlicError, PlicResult};

/// How to reduce multiple binding sites to one summary.
///
/// `First` replicates the historical behavior of taking the first reported
/// site, which is ambiguous for multi-ligand complexes; `Aggregate` sums
/// the counts across every site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SitePolicy {
    #[default]
    First,
    Aggregate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionSummary {
    /// Count of all typed interaction entries.
    pub total: usize,
    /// Ligand-donor plus protein-donor hydrogen bonds.
    pub hbonds: usize,
    pub hydrophobic: usize,
    /// Affinity label carried through from the manifest, unchanged.
    pub pk: f64,
}

/// Load a combined structure and report every binding site.
pub fn site_reports(complex_file: &Path) -> PlicResult<Vec<SiteReport>> {
    let complex = read_pdb(complex_file, &PdbParseOptions::default())
        .map_err(|e| PlicError::StructureLoad(format!("{}: {e}", complex_file.display())))?;
    Ok(detect_interactions(&complex))
}

/// Summarize one combined-structure file.
///
/// Fails with `NoInteractionSite` when the detector reports no binding
/// site at all (no recognizable ligand in the complex).
pub fn analyze_complex(
    complex_file: &Path,
    key: &str,
    pk: f64,
    policy: SitePolicy,
) -> PlicResult<InteractionSummary> {
    let reports = site_reports(complex_file)?;
    if reports.is_empty() {
        return Err(PlicError::NoInteractionSite(key.to_string()));
    }
    let selected: &[SiteReport] = match policy {
        SitePolicy::First => &reports[..1],
        SitePolicy::Aggregate => &reports[..],
    };
    let mut summary = InteractionSummary {
        total: 0,
        hbonds: 0,
        hydrophobic: 0,
        pk,
    };
    for site in selected {
        summary.total += site.total();
        summary.hbonds += site.hbonds_ligand_donor() + site.hbonds_protein_donor();
        summary.hydrophobic += site.hydrophobic_contacts();
    }
    Ok(summary)
}
