//! Geometric interaction detection between a ligand and its receptor.
//!
//! Binding sites are the non-water HETATM residues of the complex, in file
//! order. For each site, ligand-receptor atom pairs are screened with
//! distance criteria for hydrogen bonds (split by donor orientation),
//! hydrophobic contacts, and salt bridges. Detection is purely geometric:
//! no angle terms, no water bridges, no aromatic systems.

use plic_core::{RecordKind, Structure};

/// Donor-acceptor distance window for hydrogen bonds, in Å.
const HBOND_DIST_MAX: f32 = 3.5;
const HBOND_DIST_MIN: f32 = 2.0;
/// Carbon-carbon cutoff for hydrophobic contacts, in Å.
const HYDROPH_DIST_MAX: f32 = 4.0;
/// Charged-group cutoff for salt bridges, in Å.
const SALTBRIDGE_DIST_MAX: f32 = 5.5;
/// Covalent X-H bond cutoff used to find explicit hydrogens, in Å.
const COVALENT_H_MAX: f32 = 1.3;

const WATER_RESNAMES: &[&str] = &["HOH", "WAT", "DOD", "TIP", "TIP3", "SOL"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    /// Hydrogen bond with the donor atom on the ligand.
    HBondLigandDonor,
    /// Hydrogen bond with the donor atom on the receptor.
    HBondProteinDonor,
    Hydrophobic,
    SaltBridge,
}

#[derive(Clone, Copy, Debug)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Index of the ligand atom in the complex atom list.
    pub ligand_atom: usize,
    /// Index of the receptor atom in the complex atom list.
    pub protein_atom: usize,
    pub distance: f32,
}

/// All typed interactions detected for one binding site.
#[derive(Clone, Debug)]
pub struct SiteReport {
    /// Site identity as `RESNAME:CHAIN:RESID`.
    pub site_id: String,
    pub interactions: Vec<Interaction>,
}

impl SiteReport {
    pub fn total(&self) -> usize {
        self.interactions.len()
    }

    pub fn hbonds_ligand_donor(&self) -> usize {
        self.count(InteractionKind::HBondLigandDonor)
    }

    pub fn hbonds_protein_donor(&self) -> usize {
        self.count(InteractionKind::HBondProteinDonor)
    }

    pub fn hydrophobic_contacts(&self) -> usize {
        self.count(InteractionKind::Hydrophobic)
    }

    pub fn salt_bridges(&self) -> usize {
        self.count(InteractionKind::SaltBridge)
    }

    fn count(&self, kind: InteractionKind) -> usize {
        self.interactions.iter().filter(|i| i.kind == kind).count()
    }
}

/// Detect interactions for every binding site of a combined structure.
///
/// Returns one report per non-water hetero residue, in order of first
/// appearance. An empty vec means the complex carries no recognizable
/// ligand.
pub fn detect_interactions(complex: &Structure) -> Vec<SiteReport> {
    let receptor: Vec<usize> = complex
        .atoms
        .iter()
        .enumerate()
        .filter(|(_, a)| a.kind == RecordKind::Atom)
        .map(|(i, _)| i)
        .collect();

    let mut sites: Vec<(String, Vec<usize>)> = Vec::new();
    for (i, atom) in complex.atoms.iter().enumerate() {
        if atom.kind != RecordKind::HetAtom || is_water(&atom.resname) {
            continue;
        }
        let site_id = format!("{}:{}:{}", atom.resname, atom.chain, atom.resid);
        match sites.iter_mut().find(|(id, _)| *id == site_id) {
            Some((_, atoms)) => atoms.push(i),
            None => sites.push((site_id, vec![i])),
        }
    }

    let hydrogens: Vec<usize> = complex
        .atoms
        .iter()
        .enumerate()
        .filter(|(_, a)| a.element == "H")
        .map(|(i, _)| i)
        .collect();

    sites
        .into_iter()
        .map(|(site_id, ligand_atoms)| SiteReport {
            interactions: detect_site(complex, &ligand_atoms, &receptor, &hydrogens),
            site_id,
        })
        .collect()
}

fn detect_site(
    complex: &Structure,
    ligand_atoms: &[usize],
    receptor: &[usize],
    hydrogens: &[usize],
) -> Vec<Interaction> {
    let mut found = Vec::new();
    for &li in ligand_atoms {
        let lig = &complex.atoms[li];
        if lig.element == "H" {
            continue;
        }
        for &pi in receptor {
            let rec = &complex.atoms[pi];
            if rec.element == "H" {
                continue;
            }
            let dist_sq = lig.position.distance_squared(rec.position);
            if dist_sq > SALTBRIDGE_DIST_MAX * SALTBRIDGE_DIST_MAX {
                continue;
            }
            let dist = dist_sq.sqrt();

            if dist <= HBOND_DIST_MAX && dist >= HBOND_DIST_MIN {
                if is_donor(complex, li, hydrogens) && is_acceptor(&rec.element) {
                    found.push(Interaction {
                        kind: InteractionKind::HBondLigandDonor,
                        ligand_atom: li,
                        protein_atom: pi,
                        distance: dist,
                    });
                }
                if is_donor(complex, pi, hydrogens) && is_acceptor(&lig.element) {
                    found.push(Interaction {
                        kind: InteractionKind::HBondProteinDonor,
                        ligand_atom: li,
                        protein_atom: pi,
                        distance: dist,
                    });
                }
            }

            if dist <= HYDROPH_DIST_MAX && lig.element == "C" && rec.element == "C" {
                found.push(Interaction {
                    kind: InteractionKind::Hydrophobic,
                    ligand_atom: li,
                    protein_atom: pi,
                    distance: dist,
                });
            }

            if dist <= SALTBRIDGE_DIST_MAX && is_salt_bridge_pair(complex, li, pi) {
                found.push(Interaction {
                    kind: InteractionKind::SaltBridge,
                    ligand_atom: li,
                    protein_atom: pi,
                    distance: dist,
                });
            }
        }
    }
    found
}

fn is_water(resname: &str) -> bool {
    WATER_RESNAMES.contains(&resname)
}

fn is_acceptor(element: &str) -> bool {
    element == "N" || element == "O"
}

/// Donor capability: nitrogen always counts; oxygen only donates when an
/// explicit covalent hydrogen is present (hydroxyl). Without deposited
/// hydrogens an oxygen cannot be told apart from a pure acceptor.
fn is_donor(complex: &Structure, idx: usize, hydrogens: &[usize]) -> bool {
    let atom = &complex.atoms[idx];
    match atom.element.as_str() {
        "N" => true,
        "O" => hydrogens.iter().any(|&hi| {
            let h = &complex.atoms[hi];
            h.chain == atom.chain
                && h.resid == atom.resid
                && h.position.distance_squared(atom.position) <= COVALENT_H_MAX * COVALENT_H_MAX
        }),
        _ => false,
    }
}

/// Receptor sidechain atoms carrying formal charge at physiological pH,
/// paired against oppositely chargeable ligand atoms.
fn is_salt_bridge_pair(complex: &Structure, ligand_idx: usize, protein_idx: usize) -> bool {
    let lig = &complex.atoms[ligand_idx];
    let rec = &complex.atoms[protein_idx];
    let rec_positive = matches!(
        (rec.resname.as_str(), rec.name.as_str()),
        ("ARG", "NH1") | ("ARG", "NH2") | ("LYS", "NZ")
    );
    let rec_negative = matches!(
        (rec.resname.as_str(), rec.name.as_str()),
        ("ASP", "OD1") | ("ASP", "OD2") | ("GLU", "OE1") | ("GLU", "OE2")
    );
    (rec_positive && lig.element == "O") || (rec_negative && lig.element == "N")
}
