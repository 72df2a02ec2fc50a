// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::error::GeometryError;
use crate::orientation::align_normal;
use crate::template::scaled_triangle;
use crate::Point3;

/// Height of a regular tetrahedron per unit edge length, apex to opposite face: √(2/3).
fn height(edge: f64) -> f64 {
    edge * (2.0_f64 / 3.0).sqrt()
}

/// Distance from a vertex of a regular tetrahedron to its centroid, per unit edge: √6/4.
fn circumradius(edge: f64) -> f64 {
    edge * 6.0_f64.sqrt() / 4.0
}

/// A regular tetrahedron grown from a heavy atom, opening away from the atom it was bonded to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetrahedron {
    /// The apex: the atom being functionalized.
    pub heavy_atom: Point3,
    /// Edge length, equal to the original heavy atom to bonded atom distance.
    pub bond_length: f64,
    /// Unit vector from the bonded atom toward the heavy atom.
    pub axis: Point3,
    /// Average of the four vertices.
    pub centroid: Point3,
    /// Average of the three substituents.
    pub face_center: Point3,
    /// The three new vertices, in template order.
    pub substituents: [Point3; 3],
    /// Whether the bond pointed exactly against the template normal, so the fixed half turn was
    /// used instead of Rodrigues' formula.
    pub flipped: bool,
}

impl Tetrahedron {
    /// All four vertices, heavy atom first.
    pub fn vertices(&self) -> [Point3; 4] {
        let [a, b, c] = self.substituents;
        [self.heavy_atom, a, b, c]
    }
}

fn check_finite(point: Point3) -> Result<(), GeometryError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteCoordinate(point))
    }
}

/// Builds the regular tetrahedron that replaces `bonded_atom` with three substituents on
/// `heavy_atom`.
pub fn build_tetrahedron(
    heavy_atom: Point3,
    bonded_atom: Point3,
) -> Result<Tetrahedron, GeometryError> {
    check_finite(heavy_atom)?;
    check_finite(bonded_atom)?;

    let bond = heavy_atom - bonded_atom;
    let bond_length = bond.length();
    if !bond_length.is_finite() {
        return Err(GeometryError::Overflow);
    }
    // Bonds so short that their length underflows have no usable direction either.
    let axis = bond / bond_length;
    if bond_length == 0.0 || !axis.is_normalized() {
        return Err(GeometryError::DegenerateBond(heavy_atom));
    }

    let triangle = scaled_triangle(bond_length);
    let face_center = heavy_atom + axis * height(bond_length);
    let centroid = heavy_atom + axis * circumradius(bond_length);

    let alignment = align_normal(axis);
    let substituents = triangle.map(|vertex| face_center + alignment.rotation * vertex);
    if !substituents.iter().all(|s| s.is_finite()) {
        return Err(GeometryError::Overflow);
    }

    Ok(Tetrahedron {
        heavy_atom,
        bond_length,
        axis,
        centroid,
        face_center,
        substituents,
        flipped: alignment.flipped,
    })
}

/// Positions of the three substituents, each one bond length from `heavy_atom` and from each
/// other.
pub fn compute_substituents(
    heavy_atom: Point3,
    bonded_atom: Point3,
) -> Result<[Point3; 3], GeometryError> {
    build_tetrahedron(heavy_atom, bonded_atom).map(|tetrahedron| tetrahedron.substituents)
}


// End of File
