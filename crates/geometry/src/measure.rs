// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Distances and angles between atom positions.

use crate::Point3;

/// Euclidean distance between two positions.
pub fn distance(a: Point3, b: Point3) -> f64 {
    a.distance(b)
}

/// Angle `a`–`vertex`–`b` in degrees, or `None` when either arm has zero length.
pub fn bond_angle(vertex: Point3, a: Point3, b: Point3) -> Option<f64> {
    let (u, v) = (a - vertex, b - vertex);
    let norms = u.length() * v.length();
    if norms == 0.0 {
        return None;
    }
    // Rounding can push the cosine just past ±1.
    let cos_theta = (u.dot(v) / norms).clamp(-1.0, 1.0);
    Some(cos_theta.acos().to_degrees())
}


// End of File
