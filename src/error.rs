// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::io;

use geometry::GeometryError;
use thiserror::Error;
use xyz::XyzError;

#[derive(Debug, Error)]
pub enum SubstitutionError {
    /// The input table is malformed or has too few rows.
    #[error("invalid input table: {0}")]
    InputFormat(String),

    #[error("heavy atom and bonded atom coincide; the bond has zero length")]
    DegenerateBond,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<XyzError> for SubstitutionError {
    fn from(error: XyzError) -> Self {
        match error {
            XyzError::Io(error) => Self::Io(error),
            other => Self::InputFormat(other.to_string()),
        }
    }
}

impl From<GeometryError> for SubstitutionError {
    fn from(error: GeometryError) -> Self {
        match error {
            GeometryError::DegenerateBond(_) => Self::DegenerateBond,
            other => Self::InputFormat(other.to_string()),
        }
    }
}

// End of File
