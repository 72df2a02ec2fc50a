// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! The equilateral triangle that the three substituents are cut from.

use glam::f64::DVec3;

/// Normal of the plane the template lives in.
pub const TEMPLATE_NORMAL: DVec3 = DVec3::Z;

/// Vertices of an equilateral triangle with circumradius 1, centered on the origin in the z = 0
/// plane, at 90°, 210° and 330°.  Order is significant: substituents come out in this order.
pub const UNIT_TRIANGLE: [DVec3; 3] = [
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(-0.866_025_403_784_438_6, -0.5, 0.0),
    DVec3::new(0.866_025_403_784_438_6, -0.5, 0.0),
];

/// Circumradius of one face of a regular tetrahedron, per unit edge length (1/√3).
pub fn face_circumradius(edge: f64) -> f64 {
    edge / 3.0_f64.sqrt()
}

/// Returns the template scaled so that its edges have length `edge`.
pub fn scaled_triangle(edge: f64) -> [DVec3; 3] {
    let radius = face_circumradius(edge);
    UNIT_TRIANGLE.map(|vertex| vertex * radius)
}


// End of File
