//! XYZ coordinate file reader.
//!
//! Line 1 holds the atom count and line 2 a free-form comment; both are
//! skipped. Every following non-blank line is `symbol x y z`, with any
//! trailing columns ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{MolError, Result};
use crate::molecule::{BondPolicy, Molecule};

/// Number of header lines before the first atom record.
const HEADER_LINES: usize = 2;

/// A single parsed atom record.
#[derive(Debug, Clone, PartialEq)]
pub struct XyzRecord {
    /// Element symbol as written in the file.
    pub symbol: String,
    /// Cartesian coordinates.
    pub position: [f32; 3],
}

/// Read all atom records from an XYZ stream.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<XyzRecord>> {
    let reader = BufReader::new(reader);
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;
        if line_number <= HEADER_LINES || line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(&line, line_number)?);
    }

    Ok(records)
}

fn parse_record(line: &str, line_number: usize) -> Result<XyzRecord> {
    let mut fields = line.split_whitespace();
    let symbol = fields
        .next()
        .ok_or_else(|| MolError::parse(line_number, "missing element symbol"))?;

    let mut position = [0.0f32; 3];
    for (axis, slot) in ["x", "y", "z"].iter().zip(position.iter_mut()) {
        let field = fields
            .next()
            .ok_or_else(|| MolError::parse(line_number, format!("missing {axis} coordinate")))?;
        *slot = field.parse().map_err(|_| {
            MolError::parse(line_number, format!("invalid {axis} coordinate: {field}"))
        })?;
    }

    Ok(XyzRecord {
        symbol: symbol.to_string(),
        position,
    })
}

/// Read an XYZ stream into a centered, bonded molecule.
pub fn read_xyz<R: Read>(reader: R, policy: BondPolicy) -> Result<Molecule> {
    let records = read_records(reader)?;
    Molecule::from_records(
        records.into_iter().map(|r| (r.symbol, r.position)),
        policy,
    )
}

/// Load an XYZ file from disk.
pub fn load_xyz(path: impl AsRef<Path>, policy: BondPolicy) -> Result<Molecule> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mol = read_xyz(file, policy)?;
    log::info!(
        "{}: {} atoms, {} bonds",
        path.display(),
        mol.atoms().len(),
        mol.bonds().len()
    );
    Ok(mol)
}
