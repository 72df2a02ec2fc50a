// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Replaces the bonded atom of an XYZ fragment with three substituents arranged as a regular
//! tetrahedron on the heavy atom.  See [`Substitution`].

mod error;
mod substitution;

pub use error::SubstitutionError;
pub use substitution::{Substitution, BONDED_ATOM_ROW, HEAVY_ATOM_ROW, OUTPUT_ATOM_COUNT};

pub use geometry::{Point3, Tetrahedron};
pub use xyz::{AtomTable, LabeledAtom};

pub const APP_NAME: &str = "tetrasub";

// End of File
