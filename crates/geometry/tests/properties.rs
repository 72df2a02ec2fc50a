// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::f64::{DMat3, DQuat, DVec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tetrasub_geometry::measure::{bond_angle, distance};
use tetrasub_geometry::{build_tetrahedron, compute_substituents, GeometryError, Point3};

const SAMPLES: usize = 500;

fn random_point(rng: &mut StdRng, extent: f64) -> Point3 {
    DVec3::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

fn random_unit(rng: &mut StdRng) -> DVec3 {
    loop {
        let v = random_point(rng, 1.0);
        if v.length_squared() > 1e-6 {
            return v.normalize();
        }
    }
}

fn random_rotation(rng: &mut StdRng) -> DMat3 {
    let axis = random_unit(rng);
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    DMat3::from_quat(DQuat::from_axis_angle(axis, angle))
}

/// A heavy atom somewhere in a molecule-sized box, bonded at a typical bond length.
fn random_bond(rng: &mut StdRng) -> (Point3, Point3) {
    let heavy = random_point(rng, 20.0);
    let length = rng.gen_range(0.7..3.0);
    (heavy, heavy + random_unit(rng) * length)
}

#[test]
fn all_six_edges_equal_bond_length() {
    let mut rng = StdRng::seed_from_u64(0x7e7a);
    for _ in 0..SAMPLES {
        let (heavy, bonded) = random_bond(&mut rng);
        let bond = distance(heavy, bonded);
        let tetrahedron = build_tetrahedron(heavy, bonded).unwrap();
        let vertices = tetrahedron.vertices();
        for i in 0..4 {
            for j in (i + 1)..4 {
                let edge = distance(vertices[i], vertices[j]);
                assert!(
                    (edge - bond).abs() <= 1e-9 * bond,
                    "edge {i}-{j} = {edge}, bond = {bond}, heavy = {heavy}, bonded = {bonded}"
                );
            }
        }
    }
}

#[test]
fn substituents_keep_bond_length_to_heavy_atom() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let (heavy, bonded) = random_bond(&mut rng);
        let bond = distance(heavy, bonded);
        for substituent in compute_substituents(heavy, bonded).unwrap() {
            assert!((distance(heavy, substituent) - bond).abs() <= 1e-9 * bond);
        }
    }
}

#[test]
fn centroid_sits_on_bond_axis_away_from_bonded_atom() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let (heavy, bonded) = random_bond(&mut rng);
        let tetrahedron = build_tetrahedron(heavy, bonded).unwrap();
        let bond = tetrahedron.bond_length;

        let offset = tetrahedron.centroid - heavy;
        assert!((offset.length() - bond * 6.0_f64.sqrt() / 4.0).abs() < 1e-9 * bond);
        assert!(offset.normalize().abs_diff_eq((heavy - bonded).normalize(), 1e-9));

        // Every substituent makes the same angle with the old bond.
        let angles = tetrahedron
            .substituents
            .map(|s| bond_angle(heavy, bonded, s).unwrap());
        for angle in angles {
            assert!((angle - angles[0]).abs() < 1e-6);
            assert!(angle > 90.0);
        }
    }
}

#[test]
fn commutes_with_translation() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..SAMPLES {
        let (heavy, bonded) = random_bond(&mut rng);
        let shift = random_point(&mut rng, 100.0);
        let original = compute_substituents(heavy, bonded).unwrap();
        let shifted = compute_substituents(heavy + shift, bonded + shift).unwrap();
        for (a, b) in original.iter().zip(shifted.iter()) {
            assert!((*a + shift).abs_diff_eq(*b, 1e-9), "{} != {}", *a + shift, b);
        }
    }
}

#[test]
fn commutes_with_rotation_up_to_twist_about_bond() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let (heavy, bonded) = random_bond(&mut rng);
        let rotation = random_rotation(&mut rng);
        let original = build_tetrahedron(heavy, bonded).unwrap();
        let rotated = build_tetrahedron(rotation * heavy, rotation * bonded).unwrap();

        assert!((rotation * original.face_center).abs_diff_eq(rotated.face_center, 1e-9));
        assert!((rotation * original.centroid).abs_diff_eq(rotated.centroid, 1e-9));

        // Both triangles lie on the same circle around the same axis.
        let radius = original.bond_length / 3.0_f64.sqrt();
        for substituent in rotated.substituents {
            let arm = substituent - rotated.face_center;
            assert!((arm.length() - radius).abs() < 1e-9);
            assert!(arm.dot(rotated.axis).abs() < 1e-9);
        }
    }
}

#[test]
fn third_turns_about_template_normal_permute_substituents() {
    let mut rng = StdRng::seed_from_u64(5);
    let turn = DMat3::from_rotation_z(std::f64::consts::TAU / 3.0);
    for _ in 0..SAMPLES {
        let (heavy, bonded) = random_bond(&mut rng);
        let original = compute_substituents(heavy, bonded).unwrap();
        let rotated = compute_substituents(turn * heavy, turn * bonded).unwrap();
        for substituent in original {
            let expected = turn * substituent;
            assert!(
                rotated.iter().any(|s| s.abs_diff_eq(expected, 1e-9)),
                "{expected} not found in {rotated:?}"
            );
        }
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..SAMPLES {
        let (heavy, bonded) = random_bond(&mut rng);
        let first = compute_substituents(heavy, bonded).unwrap();
        let second = compute_substituents(heavy, bonded).unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.to_array().map(f64::to_bits), b.to_array().map(f64::to_bits));
        }
    }
}

#[test]
fn near_anti_parallel_bonds_stay_regular() {
    let heavy = DVec3::new(0.25, -1.0, 3.0);
    for tilt in [0.0, 1e-9, 1e-6, 1e-3] {
        for sign in [-1.0, 1.0] {
            // Bond direction (heavy - bonded) is almost exactly -z.
            let bonded = heavy + DVec3::new(tilt, sign * tilt, 1.0).normalize() * 1.54;
            let tetrahedron = build_tetrahedron(heavy, bonded).unwrap();
            assert_eq!(tetrahedron.flipped, tilt == 0.0);
            for vertex in tetrahedron.vertices() {
                assert!(vertex.is_finite());
            }
            for substituent in tetrahedron.substituents {
                assert!((distance(heavy, substituent) - 1.54).abs() < 1e-9);
            }
            let [a, b, c] = tetrahedron.substituents;
            assert!((distance(a, b) - 1.54).abs() < 1e-9);
            assert!((distance(b, c) - 1.54).abs() < 1e-9);
            assert!((distance(c, a) - 1.54).abs() < 1e-9);
        }
    }
}

#[test]
fn substituents_move_continuously_with_bond() {
    let heavy = DVec3::new(-2.0, 0.5, 1.0);
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..SAMPLES {
        let direction = random_unit(&mut rng);
        let nudge = random_unit(&mut rng) * 1e-12;
        let a = compute_substituents(heavy, heavy + direction * 1.5).unwrap();
        let b = compute_substituents(heavy, heavy + (direction + nudge).normalize() * 1.5).unwrap();
        for (p, q) in a.iter().zip(b.iter()) {
            assert!(distance(*p, *q) < 1e-9, "jump of {} near {direction}", distance(*p, *q));
        }
    }
}

#[test]
fn bond_across_equator_does_not_jump() {
    let heavy = DVec3::ZERO;
    let above = compute_substituents(heavy, DVec3::new(1.0, 0.0, 1e-12)).unwrap();
    let below = compute_substituents(heavy, DVec3::new(1.0, 0.0, -1e-12)).unwrap();
    for (p, q) in above.iter().zip(below.iter()) {
        assert!(distance(*p, *q) < 1e-9);
    }
}

#[test]
fn huge_bond_is_rejected_instead_of_nan() {
    assert!(matches!(
        compute_substituents(DVec3::new(1e200, 0.0, 0.0), DVec3::ZERO),
        Err(GeometryError::Overflow)
    ));
    assert!(matches!(
        compute_substituents(DVec3::new(f64::MAX, 0.0, 0.0), DVec3::new(f64::MAX / 2.0, 0.0, 0.0)),
        Err(GeometryError::Overflow)
    ));
}

#[test]
fn coincident_atoms_fail() {
    let p = DVec3::new(1.0, 1.0, 1.0);
    assert_eq!(
        build_tetrahedron(p, p),
        Err(GeometryError::DegenerateBond(p))
    );
}

// End of File
