// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::path::Path;

use geometry::{build_tetrahedron, measure, Point3, Tetrahedron};
use xyz::{append_xyz, read_xyz, AtomTable, LabeledAtom, XyzFrame};

use crate::SubstitutionError;

/// Row of the input table holding the atom being functionalized.
pub const HEAVY_ATOM_ROW: usize = 0;
/// Row of the input table holding the atom that gets replaced.
pub const BONDED_ATOM_ROW: usize = 1;
/// Atom count written in the output header: the heavy atom plus three substituents.  The bonded
/// atom is still written as a row after it.
pub const OUTPUT_ATOM_COUNT: usize = 4;

/// A single functionalization: the first atom of a table grows three substituents in place of the
/// second.
#[derive(Debug, Clone)]
pub struct Substitution {
    table: AtomTable,
}

impl Substitution {
    /// Loads the atom table from an XYZ file.
    pub fn from_xyz(path: impl AsRef<Path>) -> Result<Self, SubstitutionError> {
        let path = path.as_ref();
        let table = read_xyz(path)?;
        log::info!("Loaded {} atoms from {}", table.len(), path.display());
        Self::from_table(table)
    }

    /// Wraps an atom table whose first two rows are the heavy atom and its bonded atom.
    pub fn from_table(table: AtomTable) -> Result<Self, SubstitutionError> {
        if table.len() <= BONDED_ATOM_ROW {
            return Err(SubstitutionError::InputFormat(format!(
                "expected at least {} atom rows, found {}",
                BONDED_ATOM_ROW + 1,
                table.len()
            )));
        }
        let substitution = Self { table };
        log::info!(
            "Replacing {} (row {}) on {} (row {}) of a {}-atom table, bond length {:.4}",
            substitution.bonded_atom().label,
            BONDED_ATOM_ROW,
            substitution.heavy_atom().label,
            HEAVY_ATOM_ROW,
            substitution.table().len(),
            substitution.bond_length()
        );
        Ok(substitution)
    }

    pub fn table(&self) -> &[LabeledAtom] {
        &self.table
    }

    pub fn heavy_atom(&self) -> &LabeledAtom {
        &self.table[HEAVY_ATOM_ROW]
    }

    pub fn bonded_atom(&self) -> &LabeledAtom {
        &self.table[BONDED_ATOM_ROW]
    }

    pub fn bond_length(&self) -> f64 {
        measure::distance(self.heavy_atom().position, self.bonded_atom().position)
    }

    pub fn tetrahedron(&self) -> Result<Tetrahedron, SubstitutionError> {
        let heavy = self.heavy_atom().position;
        let bonded = self.bonded_atom().position;
        let tetrahedron = build_tetrahedron(heavy, bonded)?;
        log::debug!(
            "{}-{} bond of {:.4}, face center {}, substituent angle to old bond {:.2}°, flipped: {}",
            self.heavy_atom().label,
            self.bonded_atom().label,
            tetrahedron.bond_length,
            tetrahedron.face_center,
            measure::bond_angle(heavy, bonded, tetrahedron.substituents[0]).unwrap_or(f64::NAN),
            tetrahedron.flipped
        );
        Ok(tetrahedron)
    }

    pub fn substituent_positions(&self) -> Result<[Point3; 3], SubstitutionError> {
        Ok(self.tetrahedron()?.substituents)
    }

    /// Output rows: heavy atom, bonded atom, then the three substituents labeled in order.
    pub fn substituted_atoms(&self, labels: [&str; 3]) -> Result<AtomTable, SubstitutionError> {
        let positions = self.substituent_positions()?;
        let mut atoms = Vec::with_capacity(5);
        atoms.push(self.heavy_atom().clone());
        atoms.push(self.bonded_atom().clone());
        atoms.extend(
            labels
                .into_iter()
                .zip(positions)
                .map(|(label, position)| LabeledAtom::new(label, position)),
        );
        Ok(atoms)
    }

    /// Appends the substituted fragment to `path` as one XYZ frame.
    pub fn write_xyz(
        &self,
        path: impl AsRef<Path>,
        labels: [&str; 3],
    ) -> Result<(), SubstitutionError> {
        let path = path.as_ref();
        let atoms = self.substituted_atoms(labels)?;
        append_xyz(
            path,
            &XyzFrame {
                atom_count: OUTPUT_ATOM_COUNT,
                comment: "",
                atoms: &atoms,
            },
        )?;
        log::info!("Wrote {} rows to {}", atoms.len(), path.display());
        Ok(())
    }
}


// End of File
