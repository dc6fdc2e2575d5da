//! Protein-ligand complex assembly.
//!
//! Each record gets its own value-scoped structures; no named global
//! workspace exists, so nothing has to be cleared between records and
//! distinct records can never observe each other's atoms.

use std::fs;
use std::path::{Path, PathBuf};

use plic_core::{read_pdb, save_pdb, PdbParseOptions, RecordKind, Structure};

use crate::error::{PlicError, PlicResult};

/// Merge a protein file and a ligand file into one combined structure.
///
/// Ligand atoms are coerced to HETATM records so the detector can identify
/// the binding site, and the ligand is moved to a chain id unused by the
/// protein when it would collide.
pub fn combine_structures(protein_file: &Path, ligand_file: &Path) -> PlicResult<Structure> {
    let options = PdbParseOptions::default();
    let mut protein = read_pdb(protein_file, &options)
        .map_err(|e| PlicError::StructureLoad(format!("{}: {e}", protein_file.display())))?;
    let mut ligand = read_pdb(ligand_file, &options)
        .map_err(|e| PlicError::StructureLoad(format!("{}: {e}", ligand_file.display())))?;

    let taken = protein.chain_ids();
    let ligand_chains = ligand.chain_ids();
    for atom in &mut ligand.atoms {
        atom.kind = RecordKind::HetAtom;
        if atom.resname.is_empty() {
            atom.resname = "LIG".to_string();
        }
        if atom.chain == ' ' || (taken.contains(&atom.chain) && ligand_chains.len() == 1) {
            atom.chain = free_chain_id(&taken);
        }
    }

    protein.merge(ligand);
    Ok(protein)
}

fn free_chain_id(taken: &[char]) -> char {
    // Ligand chains are conventionally labelled from the end of the
    // alphabet; fall back to 'Z' if everything is somehow taken.
    ('A'..='Z').rev().find(|c| !taken.contains(c)).unwrap_or('Z')
}

/// Scoped temporary complex file.
///
/// The file name is derived from the record key, so concurrent batches over
/// distinct records never collide. Dropping the guard removes the file on
/// every exit path, successful or not.
#[derive(Debug)]
pub struct TempComplex {
    path: PathBuf,
}

impl TempComplex {
    /// Persist `structure` to `<temp_dir>/<key>_complex.pdb`.
    pub fn create(temp_dir: &Path, key: &str, structure: &Structure) -> PlicResult<Self> {
        let path = temp_dir.join(format!("{key}_complex.pdb"));
        save_pdb(structure, &path)
            .map_err(|e| PlicError::StructureWrite(format!("{}: {e}", path.display())))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempComplex {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
