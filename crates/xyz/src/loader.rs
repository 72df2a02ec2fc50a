// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::f64::DVec3;

use crate::{AtomTable, LabeledAtom, XyzError};

/// Number of header lines in front of the atom rows.
const HEADER_LINES: usize = 2;

/// Reads the atom table from an XYZ file.
pub fn read_xyz(path: impl AsRef<Path>) -> Result<AtomTable, XyzError> {
    let file = File::open(path)?;
    read_atoms(BufReader::new(file))
}

/// Parses the atom table from the contents of an XYZ file.
pub fn parse_xyz(content: &str) -> Result<AtomTable, XyzError> {
    read_atoms(content.as_bytes())
}

fn read_atoms(reader: impl BufRead) -> Result<AtomTable, XyzError> {
    let mut lines = reader.lines();

    // The atom count and comment lines are not trusted; rows are counted instead.
    for line in 1..=HEADER_LINES {
        lines.next().ok_or_else(|| XyzError::Parse {
            line,
            message: "missing header line".to_string(),
        })??;
    }

    let mut atoms = AtomTable::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        let line_number = index + HEADER_LINES + 1;
        if line.trim().is_empty() {
            continue;
        }
        atoms.push(parse_row(&line, line_number)?);
    }

    Ok(atoms)
}

fn parse_row(line: &str, line_number: usize) -> Result<LabeledAtom, XyzError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [label, x, y, z] = parts[..] else {
        return Err(XyzError::Parse {
            line: line_number,
            message: format!("expected `<label> <x> <y> <z>`, found `{}`", line.trim()),
        });
    };

    let coordinate = |field: &str| {
        field.parse::<f64>().map_err(|source| XyzError::FloatParse {
            line: line_number,
            source,
        })
    };

    Ok(LabeledAtom::new(
        label,
        DVec3::new(coordinate(x)?, coordinate(y)?, coordinate(z)?),
    ))
}


// End of File
