// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Tetrahedral substituent geometry
//!
//! Given a heavy atom and the atom bonded to it, this crate places three new atoms so that the
//! heavy atom and the three new atoms form a regular tetrahedron whose edge length is the
//! original bond length.  The tetrahedron opens away from the bonded atom.
//!
//! The construction works in three stages:
//!
//! 1. an equilateral triangle [`template`] in the z = 0 plane is scaled to the circumradius of a
//!    tetrahedron face,
//! 2. the face center is placed one tetrahedron height from the heavy atom along the bond axis,
//! 3. the template normal is rotated onto the bond axis ([`orientation`]) and the rotated
//!    triangle is moved onto the face center.
//!
//! Everything here is a pure function over [`Point3`] values.  Nothing is logged.

mod error;
pub mod measure;
pub mod orientation;
pub mod template;
mod tetrahedron;

pub use error::GeometryError;
pub use tetrahedron::{build_tetrahedron, compute_substituents, Tetrahedron};

/// A position in 3D space, in the units of the input coordinates (normally ångströms).
pub type Point3 = glam::f64::DVec3;

// End of File
