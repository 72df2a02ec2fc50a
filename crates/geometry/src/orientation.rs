// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Rotations that carry the template normal onto a bond direction.

use glam::f64::{DMat3, DVec3};

use crate::template::TEMPLATE_NORMAL;

/// Half turn about the x axis.  Maps the template normal `+z` onto `-z` and leaves the template
/// plane in place.
pub const HALF_TURN_X: DMat3 = DMat3::from_cols(
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(0.0, -1.0, 0.0),
    DVec3::new(0.0, 0.0, -1.0),
);

/// Skew-symmetric cross-product matrix of `v`, so that `skew(v) * w == v.cross(w)`.
pub fn skew(v: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

/// Below this value of `1 + cosθ` the rotation axis is lost to rounding and the direction is
/// treated as anti-parallel.  Corresponds to about 1.4e-12 rad from the opposite vector.
pub const ANTI_PARALLEL_EPSILON: f64 = 1e-24;

/// Rodrigues' rotation from unit vector `from` onto unit vector `to`:
/// `R = I + K + K² / (1 + cosθ)` with `K = skew(from × to)`.
///
/// Returns `None` when the vectors are anti-parallel (to within [`ANTI_PARALLEL_EPSILON`]), where
/// the denominator vanishes.  For `cosθ < 0` the denominator is evaluated as
/// `|from × to|² / (1 - cosθ)`, which equals `1 + cosθ` for unit vectors without the cancellation.
pub fn rotation_between(from: DVec3, to: DVec3) -> Option<DMat3> {
    let axis = from.cross(to);
    let cos_theta = from.dot(to);
    let one_plus_cos = if cos_theta >= 0.0 {
        1.0 + cos_theta
    } else {
        axis.length_squared() / (1.0 - cos_theta)
    };
    if one_plus_cos <= ANTI_PARALLEL_EPSILON {
        return None;
    }
    let k = skew(axis);
    Some(DMat3::IDENTITY + k + (k * k) * (1.0 / one_plus_cos))
}

/// Rotation carrying the template normal onto a unit bond direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pub rotation: DMat3,
    /// The direction was anti-parallel to the template normal and [`HALF_TURN_X`] was used.
    pub flipped: bool,
}

/// Builds the rotation taking [`TEMPLATE_NORMAL`] onto `direction`, which must be a unit vector.
///
/// Rodrigues' formula is used for every direction except the anti-parallel one, which gets the
/// fixed half turn about the x axis.
pub fn align_normal(direction: DVec3) -> Alignment {
    match rotation_between(TEMPLATE_NORMAL, direction) {
        Some(rotation) => Alignment {
            rotation,
            flipped: false,
        },
        None => Alignment {
            rotation: HALF_TURN_X,
            flipped: true,
        },
    }
}


// End of File
