//! In-memory structure model.
//!
//! A `Structure` is a flat atom list with chain-break markers, enough to
//! represent one protein, one ligand, or their union. There is no global
//! registry: every structure is an owned value, so two structures can be
//! merged without touching shared state.

use crate::geom::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Atom,
    HetAtom,
}

#[derive(Clone, Debug)]
pub struct Atom {
    pub kind: RecordKind,
    pub serial: i32,
    pub name: String,
    pub resname: String,
    pub chain: char,
    pub resid: i32,
    pub element: String,
    pub position: Vec3,
}

#[derive(Clone, Debug, Default)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    /// Atom indices after which a TER record is written.
    pub ter_after: Vec<usize>,
}

impl Structure {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self {
            atoms,
            ter_after: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Chain identifiers present, in order of first appearance.
    pub fn chain_ids(&self) -> Vec<char> {
        let mut ids = Vec::new();
        for atom in &self.atoms {
            if !ids.contains(&atom.chain) {
                ids.push(atom.chain);
            }
        }
        ids
    }

    /// Append all atoms of `other`, renumbering serials sequentially and
    /// inserting a chain break between the two parts.
    pub fn merge(&mut self, other: Structure) {
        if !self.atoms.is_empty() {
            let last = self.atoms.len() - 1;
            if !self.ter_after.contains(&last) {
                self.ter_after.push(last);
            }
        }
        let offset = self.atoms.len();
        for shift in &other.ter_after {
            self.ter_after.push(shift + offset);
        }
        self.atoms.extend(other.atoms);
        for (i, atom) in self.atoms.iter_mut().enumerate() {
            atom.serial = (i + 1) as i32;
        }
        self.ter_after.sort_unstable();
        self.ter_after.dedup();
    }
}
