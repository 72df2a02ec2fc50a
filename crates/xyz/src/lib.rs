// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # XYZ atom tables
//!
//! Reading and appending the plain-text XYZ format:
//!
//! ```text
//! <atom count>
//! <comment>
//! <label> <x> <y> <z>
//! ...
//! ```
//!
//! The reader ignores both header lines.  The writer appends a whole frame and never leaves a
//! trailing newline behind the last row.

mod atom;
mod loader;
mod saver;

use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

pub use atom::{AtomTable, LabeledAtom};
pub use loader::{parse_xyz, read_xyz};
pub use saver::{append_xyz, write_frame, XyzFrame};

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid XYZ format on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("frame cannot be written as XYZ: {0}")]
    InvalidFrame(String),

    #[error("invalid floating point number on line {line}: {source}")]
    FloatParse {
        line: usize,
        #[source]
        source: ParseFloatError,
    },
}

// End of File
