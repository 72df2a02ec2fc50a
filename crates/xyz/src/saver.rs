// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{LabeledAtom, XyzError};

/// One header plus the atom rows that follow it.
#[derive(Debug, Clone, Copy)]
pub struct XyzFrame<'a> {
    /// Written verbatim on the first line.  Not required to match `atoms.len()`.
    pub atom_count: usize,
    pub comment: &'a str,
    pub atoms: &'a [LabeledAtom],
}

impl XyzFrame<'_> {
    /// Checks that the frame reads back row for row: a single-line comment, and labels that are
    /// non-empty with no whitespace.
    pub fn validate(&self) -> Result<(), String> {
        if self.comment.contains(|c| c == '\n' || c == '\r') {
            return Err("XYZ comment must fit on a single line".to_string());
        }
        for (index, atom) in self.atoms.iter().enumerate() {
            if atom.label.is_empty() || atom.label.contains(char::is_whitespace) {
                return Err(format!(
                    "atom {} has label {:?}; labels must be non-empty without whitespace",
                    index, atom.label
                ));
            }
        }
        Ok(())
    }
}

/// Writes `frame` without a trailing newline after the last line.
///
/// Coordinates use the shortest representation that reads back to the same `f64`.
pub fn write_frame<W: Write>(writer: &mut W, frame: &XyzFrame) -> io::Result<()> {
    frame
        .validate()
        .map_err(|message| io::Error::new(io::ErrorKind::InvalidInput, message))?;

    write!(writer, "{}\n{}", frame.atom_count, frame.comment)?;
    for atom in frame.atoms {
        write!(
            writer,
            "\n{} {} {} {}",
            atom.label, atom.position.x, atom.position.y, atom.position.z
        )?;
    }
    Ok(())
}

/// Appends `frame` to the file at `path`, creating it if needed.
///
/// A file that already has content gets a line break first, so the new header starts on its
/// own line.  An invalid frame is rejected before the file is touched.
pub fn append_xyz(path: impl AsRef<Path>, frame: &XyzFrame) -> Result<(), XyzError> {
    frame.validate().map_err(XyzError::InvalidFrame)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let has_content = file.metadata()?.len() > 0;

    let mut writer = BufWriter::new(file);
    if has_content {
        writeln!(writer)?;
    }
    write_frame(&mut writer, frame)?;
    writer.flush()?;
    Ok(())
}


// End of File
