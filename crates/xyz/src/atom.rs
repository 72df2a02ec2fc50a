// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::f64::DVec3;

/// One row of an XYZ file.  The label is usually an element symbol but is never checked.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledAtom {
    pub label: String,
    pub position: DVec3,
}

impl LabeledAtom {
    pub fn new(label: impl Into<String>, position: DVec3) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// Atoms in file order.
pub type AtomTable = Vec<LabeledAtom>;

// End of File
