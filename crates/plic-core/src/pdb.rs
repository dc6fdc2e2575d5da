//! PDB reading and writing.
//!
//! Fixed-column ATOM/HETATM parsing with altloc filtering and MODEL
//! handling. The lenient mode fills defaults for sloppy columns instead of
//! failing, which matters for ligand files exported by docking tools.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::elements::{infer_element_from_atom_name, normalize_element};
use crate::error::{CoreError, CoreResult};
use crate::geom::Vec3;
use crate::model::{Atom, RecordKind, Structure};

#[derive(Clone, Debug)]
pub struct PdbParseOptions {
    pub strict: bool,
    pub only_first_model: bool,
}

impl Default for PdbParseOptions {
    fn default() -> Self {
        Self {
            strict: false,
            only_first_model: true,
        }
    }
}

pub fn read_pdb(path: &Path, options: &PdbParseOptions) -> CoreResult<Structure> {
    let file = File::open(path)?;
    parse_pdb_reader(BufReader::new(file), options)
}

pub fn parse_pdb_reader<R: BufRead>(
    reader: R,
    options: &PdbParseOptions,
) -> CoreResult<Structure> {
    let mut atoms = Vec::new();
    let mut ter_after = Vec::new();
    let mut saw_model = false;
    let mut in_model = false;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with("MODEL") {
            if options.only_first_model && saw_model {
                break;
            }
            saw_model = true;
            in_model = true;
            continue;
        }
        if line.starts_with("ENDMDL") {
            if options.only_first_model {
                break;
            }
            in_model = false;
            continue;
        }
        if saw_model && !in_model {
            continue;
        }
        if line.starts_with("TER") {
            if !atoms.is_empty() {
                ter_after.push(atoms.len() - 1);
            }
            continue;
        }
        if !(line.starts_with("ATOM") || line.starts_with("HETATM")) {
            continue;
        }
        let alt_loc = line.chars().nth(16).unwrap_or(' ');
        if alt_loc != ' ' && alt_loc != 'A' {
            continue;
        }

        let kind = if line.starts_with("HETATM") {
            RecordKind::HetAtom
        } else {
            RecordKind::Atom
        };
        let serial = parse_int(field(&line, 6, 11), "serial", options.strict)?
            .unwrap_or((atoms.len() + 1) as i32);
        let name = required(&line, 12, 16, "name", options.strict)?;
        let resname = required(&line, 17, 20, "resname", options.strict)?;
        let chain = line.chars().nth(21).unwrap_or(' ');
        let resid = parse_int(field(&line, 22, 26), "resid", options.strict)?.unwrap_or(1);
        let x = parse_float(field(&line, 30, 38), "x")?;
        let y = parse_float(field(&line, 38, 46), "y")?;
        let z = parse_float(field(&line, 46, 54), "z")?;
        let element = field(&line, 76, 78)
            .as_deref()
            .and_then(normalize_element)
            .or_else(|| infer_element_from_atom_name(&name))
            .unwrap_or_default();

        atoms.push(Atom {
            kind,
            serial,
            name,
            resname,
            chain,
            resid,
            element,
            position: Vec3::new(x, y, z),
        });
    }

    if atoms.is_empty() {
        return Err(CoreError::Parse("no atoms found in PDB".into()));
    }
    ter_after.sort_unstable();
    ter_after.dedup();
    Ok(Structure { atoms, ter_after })
}

pub fn save_pdb(structure: &Structure, path: &Path) -> CoreResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pdb(structure, &mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn write_pdb<W: Write>(structure: &Structure, out: &mut W) -> CoreResult<()> {
    let mut ter_iter = structure.ter_after.iter().copied().peekable();
    for (i, atom) in structure.atoms.iter().enumerate() {
        let record = match atom.kind {
            RecordKind::Atom => "ATOM  ",
            RecordKind::HetAtom => "HETATM",
        };
        // Names shorter than four chars are indented one column per the
        // PDB convention.
        let name = if atom.name.len() < 4 {
            format!(" {:<3}", atom.name)
        } else {
            atom.name.clone()
        };
        writeln!(
            out,
            "{record}{serial:>5} {name} {resname:>3} {chain}{resid:>4}    {x:>8.3}{y:>8.3}{z:>8.3}  1.00  0.00          {element:>2}",
            record = record,
            serial = atom.serial,
            name = name,
            resname = atom.resname,
            chain = atom.chain,
            resid = atom.resid,
            x = atom.position.x,
            y = atom.position.y,
            z = atom.position.z,
            element = atom.element,
        )?;
        if matches!(ter_iter.peek(), Some(next) if *next == i) {
            writeln!(out, "TER")?;
            ter_iter.next();
        }
    }
    writeln!(out, "END")?;
    Ok(())
}

fn field(line: &str, start: usize, end: usize) -> Option<String> {
    if line.len() < start {
        return None;
    }
    let end = end.min(line.len());
    // Offsets are byte positions; a multibyte character straddling a column
    // boundary yields None rather than panicking mid-char.
    line.get(start..end).map(|s| s.trim().to_string())
}

fn required(
    line: &str,
    start: usize,
    end: usize,
    label: &str,
    strict: bool,
) -> CoreResult<String> {
    match field(line, start, end) {
        Some(value) if !value.is_empty() || !strict => Ok(value),
        None if !strict => Ok(String::new()),
        _ => Err(CoreError::Parse(format!("missing {label} field"))),
    }
}

fn parse_int(value: Option<String>, label: &str, strict: bool) -> CoreResult<Option<i32>> {
    let Some(raw) = value else {
        return if strict {
            Err(CoreError::Parse(format!("missing {label} field")))
        } else {
            Ok(None)
        };
    };
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<i32>() {
        Ok(v) => Ok(Some(v)),
        Err(_) if !strict => Ok(None),
        Err(_) => Err(CoreError::Parse(format!("invalid {label} '{raw}'"))),
    }
}

fn parse_float(value: Option<String>, label: &str) -> CoreResult<f32> {
    let Some(raw) = value else {
        return Err(CoreError::Parse(format!("missing {label} field")));
    };
    raw.parse::<f32>()
        .map_err(|_| CoreError::Parse(format!("invalid {label} '{raw}'")))
}
