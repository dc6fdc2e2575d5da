#![forbid(unsafe_code)]

pub mod elements;
pub mod error;
pub mod geom;
pub mod model;
pub mod pdb;

pub use elements::{infer_element_from_atom_name, normalize_element};
pub use error::{CoreError, CoreResult};
pub use geom::Vec3;
pub use model::{Atom, RecordKind, Structure};
pub use pdb::{parse_pdb_reader, read_pdb, save_pdb, write_pdb, PdbParseOptions};
