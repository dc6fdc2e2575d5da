//! Element symbol handling for PDB atoms.
//!
//! The element column (77-78) is optional in practice; when it is blank or
//! junk the element is inferred from the atom name.

/// Elements that appear with two-letter symbols in protein-ligand files.
const TWO_LETTER: &[&str] = &[
    "CL", "BR", "ZN", "MG", "FE", "NA", "CA", "MN", "CU", "NI", "CO", "SE", "CD", "HG",
];

/// Normalize a raw element field to canonical capitalization.
///
/// Returns `None` for empty or non-alphabetic input.
pub fn normalize_element(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let upper = trimmed.to_ascii_uppercase();
    if upper.len() > 2 {
        return None;
    }
    Some(upper)
}

/// Infer the element from a PDB atom name.
///
/// Two-letter elements are only matched when the name starts in column 13
/// (i.e. the caller passes the trimmed name of a heteroatom like "CL1" or
/// "ZN"). Leading digits (hydrogen names like "1HB") are skipped.
pub fn infer_element_from_atom_name(name: &str) -> Option<String> {
    let stripped: String = name
        .trim()
        .chars()
        .skip_while(|c| c.is_ascii_digit())
        .collect();
    if stripped.is_empty() {
        return None;
    }
    let upper = stripped.to_ascii_uppercase();
    for sym in TWO_LETTER {
        // "CA" as an atom name is a protein alpha-carbon, not calcium, and
        // names like "CD2" are carbons; require an exact match.
        if upper == *sym && upper != "CA" {
            return Some((*sym).to_string());
        }
    }
    let first = upper.chars().next()?;
    if first.is_ascii_alphabetic() {
        Some(first.to_string())
    } else {
        None
    }
}
