// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use thiserror::Error;

use crate::Point3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The heavy atom and the bonded atom share a position, so there is no bond axis.
    #[error("heavy atom and bonded atom coincide at {0}; the bond has zero length")]
    DegenerateBond(Point3),

    #[error("non-finite coordinate in {0}")]
    NonFiniteCoordinate(Point3),

    /// The bond or the resulting positions are too large to represent.
    #[error("coordinates too large: the bond length or a substituent position overflows")]
    Overflow,
}

// End of File
