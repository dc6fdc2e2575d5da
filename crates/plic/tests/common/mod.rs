#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn temp_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let label_path = Path::new(label);
    let stem = label_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(label);
    let ext = label_path.extension().and_then(|s| s.to_str());
    let filename = if let Some(ext) = ext {
        format!("plic_test_{stem}_{}_{}.{}", std::process::id(), nanos, ext)
    } else {
        format!("plic_test_{label}_{}_{}", std::process::id(), nanos)
    };
    path.push(filename);
    path
}

/// Create a unique empty directory under the system temp dir.
pub fn temp_dir(label: &str) -> PathBuf {
    let path = temp_path(label);
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn write_text(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write temp file");
}

/// Minimal receptor: a backbone carbonyl oxygen at the origin and a
/// sidechain carbon 20 Å away, so ligand fixtures can target one of the
/// two without cross terms.
pub const PROTEIN_PDB: &str = "\
ATOM      1  O   ALA A   1       0.000   0.000   0.000  1.00  0.00           O
ATOM      2  CB  ALA A   1      20.000   0.000   0.000  1.00  0.00           C
END
";

/// Ligand giving exactly one ligand-donor hydrogen bond (N1 at 3.0 Å from
/// the carbonyl oxygen) and one hydrophobic contact (C1 at 3.8 Å from CB).
pub const LIGAND_PDB: &str = "\
HETATM    1  N1  LIG B   1       3.000   0.000   0.000  1.00  0.00           N
HETATM    2  C1  LIG B   1      23.800   0.000   0.000  1.00  0.00           C
END
";

/// A lone water: coerced to HETATM but never a binding site.
pub const WATER_PDB: &str = "\
HETATM    1  O   HOH W   1       3.000   0.000   0.000  1.00  0.00           O
END
";

pub fn write_protein(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    write_text(&path, PROTEIN_PDB);
    path
}

pub fn write_ligand(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    write_text(&path, LIGAND_PDB);
    path
}
