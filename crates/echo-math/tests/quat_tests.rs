// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f64::consts::{FRAC_PI_2, PI};

use echo_math::{deg_to_rad, rotate, Mat4, Quat, Quatd, Quatf, Tolerance, Vec3, Vec4};
use proptest::prelude::*;

fn tol(eps: f64) -> Tolerance<f64> {
    Tolerance::absolute(eps)
}

// Full Hamilton sandwich q * (v, 0) * q⁻¹, vector part.
fn sandwich(q: Quatd, v: Vec3<f64>) -> Vec3<f64> {
    let rotated = q * Quat::from_vector_scalar(v, 0.0) * q.inverse();
    rotated.vector()
}

#[test]
fn constructors_and_accessors() {
    let q = Quatf::default();
    assert_eq!(q, Quat::identity());
    assert_eq!(q.to_array(), [0.0, 0.0, 0.0, 1.0]);

    // The xyz and vector constructors imply w = 1.
    assert_eq!(Quatf::from_xyz(1.0, 2.0, 3.0).w(), 1.0);
    let v = Quatf::from_vector(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 1.0]);

    let q = Quatf::from_vector_scalar(Vec3::new(1.0, 2.0, 3.0), 4.0);
    assert_eq!((q.x(), q.y(), q.z(), q.w()), (1.0, 2.0, 3.0, 4.0));
    assert_eq!(q.scalar(), 4.0);
    assert_eq!(q.vector(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(Quat::from([1.0, 2.0, 3.0, 4.0]), q);
}

#[test]
fn length_dot_and_conjugate() {
    let q = Quatf::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.length_squared(), 30.0);
    assert!((q.length() - 30.0_f32.sqrt()).abs() < 1e-6);
    assert_eq!(q.dot(&Quat::new(1.0, 0.0, 0.0, 1.0)), 5.0);
    assert_eq!(q.conjugate().to_array(), [-1.0, -2.0, -3.0, 4.0]);
}

#[test]
fn normalize_produces_unit_length_and_is_idempotent() {
    let mut q = Quatd::new(1.0, 2.0, 3.0, 4.0);
    q.normalize();
    assert!((q.length() - 1.0).abs() < 1e-12);
    assert!(q.normalized().approx_eq(&q, tol(1e-15)));
}

#[test]
fn normalize_degenerate_resets_to_identity() {
    let mut zero = Quatf::new(0.0, 0.0, 0.0, 0.0);
    zero.normalize();
    assert_eq!(zero, Quat::identity());
    // Squared length 1e-8 is under the threshold.
    let tiny = Quatf::new(1e-4, 0.0, 0.0, 0.0);
    assert_eq!(tiny.normalized(), Quat::identity());
}

#[test]
fn inverse_undoes_non_unit_quaternion() {
    let q = Quatd::new(1.0, 2.0, 3.0, 4.0);
    assert!((q * q.inverse()).approx_eq(&Quat::identity(), tol(1e-12)));
    assert!((q.inverse() * q).approx_eq(&Quat::identity(), tol(1e-12)));
}

#[test]
fn angle_axis_round_trips_through_angle_and_axis() {
    let axis = Vec3::new(1.0, 2.0, 2.0).normalized();
    let q = Quatd::angle_axis(axis, 1.0);
    assert!((q.angle() - 1.0).abs() < 1e-12);
    assert!(q.axis().approx_eq(&axis, tol(1e-12)));
    assert!((q.length() - 1.0).abs() < 1e-12);
}

#[test]
fn angle_axis_keeps_non_unit_axis() {
    let q = Quatd::angle_axis(Vec3::new(0.0, 0.0, 2.0), PI);
    assert!((q.z() - 2.0).abs() < 1e-12);
    assert!(q.w().abs() < 1e-12);
}

#[test]
fn identity_has_zero_angle_and_axis() {
    let q = Quatf::identity();
    assert_eq!(q.angle(), 0.0);
    assert_eq!(q.axis(), Vec3::zero());
    // Rounding drift past 1 is clamped instead of producing NaN.
    let drifted = Quatf::new(0.0, 0.0, 0.0, 1.000_000_1);
    assert_eq!(drifted.angle(), 0.0);
}

#[test]
fn rotate_vector_quarter_turn() {
    let q = Quatd::angle_axis(Vec3::unit_z(), FRAC_PI_2);
    let v = q.rotate_vector(Vec3::unit_x());
    assert!(v.approx_eq(&Vec3::unit_y(), tol(1e-12)), "{v}");
    assert_eq!(q * Vec3::unit_x(), v);
    // Vector on the left rotates by the inverse.
    let back = Vec3::unit_x() * q;
    let down = Vec3::new(0.0, -1.0, 0.0);
    assert!(back.approx_eq(&down, tol(1e-12)), "{back}");
}

#[test]
fn rotate_quaternion_is_sandwich() {
    let q = Quatd::angle_axis(Vec3::unit_y(), 0.7);
    let v = Vec3::new(1.0, -2.0, 0.5);
    let r = q.rotate(&Quat::from_vector_scalar(v, 0.0));
    assert!(r.vector().approx_eq(&q.rotate_vector(v), tol(1e-12)));
    assert!(r.w().abs() < 1e-12);
}

#[test]
fn to_mat4_is_transposed_rotate() {
    let axis = Vec3::new(0.0, 0.6, 0.8);
    let q = Quatd::angle_axis(axis, deg_to_rad(40.0));
    let expected = rotate(40.0, axis).transposed();
    assert!(q.to_mat4().approx_eq(&expected, tol(1e-12)));
    assert_eq!(Mat4::from_quat(&q), q.to_mat4());
    assert_eq!(Quatd::identity().to_mat4(), Mat4::identity());
}

#[test]
fn from_mat4_handles_half_turns() {
    let axes = [
        Vec3::unit_x(),
        Vec3::unit_y(),
        Vec3::unit_z(),
        Vec3::new(0.0, 0.6, 0.8),
    ];
    for axis in axes {
        let m = rotate(180.0_f64, axis);
        let q = Quat::from_mat4(&m);
        assert!(q.to_array().iter().all(|c| c.is_finite()), "{axis}: {q}");
        assert!((q.length() - 1.0).abs() < 1e-9, "{axis}: {q}");
        assert!(q.to_mat4().approx_eq(&m, tol(1e-9)), "{axis}: {q}");
        assert!(q.w().abs() < 1e-9);
    }
}

#[test]
fn euler_round_trip_known_angles() {
    let q = Quatd::from_euler_angles(10.0, 20.0, 30.0);
    assert!((q.length() - 1.0).abs() < 1e-12);
    let e = q.euler_angles();
    assert!(e.approx_eq(&Vec3::new(10.0, 20.0, 30.0), tol(1e-9)), "{e}");
    assert_eq!(Quatd::from_euler_angles(0.0, 0.0, 0.0), Quat::identity());
}

#[test]
fn euler_single_axes_match_angle_axis() {
    let cases = [
        (Vec3::new(30.0, 0.0, 0.0), Vec3::unit_x()),
        (Vec3::new(0.0, 30.0, 0.0), Vec3::unit_y()),
        (Vec3::new(0.0, 0.0, 30.0), Vec3::unit_z()),
    ];
    for (euler, axis) in cases {
        let q = Quatd::from_euler_angles(euler.x(), euler.y(), euler.z());
        let expected = Quat::angle_axis(axis, deg_to_rad(30.0));
        assert!(q.approx_eq(&expected, tol(1e-12)), "{q}");
    }
}

#[test]
fn euler_gimbal_lock_folds_roll_into_yaw() {
    let e = Quatd::from_euler_angles(0.0, 90.0, 30.0).euler_angles();
    assert!(e.approx_eq(&Vec3::new(0.0, 90.0, 30.0), tol(1e-6)), "{e}");

    // Roll and yaw are indistinguishable at +90 pitch; yaw - roll survives.
    let e = Quatd::from_euler_angles(10.0, 90.0, 30.0).euler_angles();
    assert!(e.approx_eq(&Vec3::new(0.0, 90.0, 20.0), tol(1e-6)), "{e}");

    let e = Quatd::from_euler_angles(0.0, -90.0, 30.0).euler_angles();
    assert!(e.approx_eq(&Vec3::new(0.0, -90.0, 30.0), tol(1e-6)), "{e}");
}

#[test]
fn hamilton_product_composes_rotations() {
    let a = Quatd::angle_axis(Vec3::unit_z(), 0.3);
    let b = Quatd::angle_axis(Vec3::unit_z(), 0.4);
    let ab = Quat::angle_axis(Vec3::unit_z(), 0.7);
    assert!((a * b).approx_eq(&ab, tol(1e-12)));
    assert_eq!(a.multiply(&b), a * b);

    let c = Quatd::angle_axis(Vec3::unit_x(), 1.1);
    let v = Vec3::new(0.2, 1.0, -3.0);
    let composed = (a * c).rotate_vector(v);
    let stepwise = a.rotate_vector(c.rotate_vector(v));
    assert!(composed.approx_eq(&stepwise, tol(1e-12)));
}

#[test]
fn add_scaled_vector_integrates_half_spin() {
    let mut q = Quatf::identity();
    q.add_scaled_vector(Vec3::new(0.0, 0.0, 1.0), 0.1);
    let expected = Quat::new(0.0, 0.0, 0.05, 1.0);
    assert!(q.approx_eq(&expected, Tolerance::absolute(1e-7)), "{q}");
}

#[test]
fn arithmetic_operators() {
    let a = Quatf::new(1.0, 2.0, 3.0, 4.0);
    let b = Quatf::new(0.5, 0.5, 0.5, 0.5);
    assert_eq!((a + b).to_array(), [1.5, 2.5, 3.5, 4.5]);
    assert_eq!((a - b).to_array(), [0.5, 1.5, 2.5, 3.5]);
    assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0, 8.0]);
    assert_eq!((a / 2.0).to_array(), [0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn display_labels_components() {
    let q = Quatf::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.to_string(), "x[1], y[2], z[3], w[4]");
}

fn unit_axis() -> impl Strategy<Value = Vec3<f64>> {
    prop::array::uniform3(-1.0f64..1.0)
        .prop_map(Vec3::from)
        .prop_filter("degenerate axis", |v| v.length_squared() > 0.01)
        .prop_map(|v| v.normalized())
}

fn vector() -> impl Strategy<Value = Vec3<f64>> {
    prop::array::uniform3(-10.0f64..10.0).prop_map(Vec3::from)
}

proptest! {
    #[test]
    fn matrix_round_trip_recovers_rotation(axis in unit_axis(), angle in -2.0 * PI..2.0 * PI) {
        let q = Quatd::angle_axis(axis, angle);
        let back = Quat::from_mat4(&q.to_mat4());
        prop_assert!(back.approx_eq_rotation(&q, tol(1e-9)), "{} vs {}", back, q);
    }

    #[test]
    fn euler_round_trip_away_from_gimbal_lock(
        roll in -179.0f64..179.0,
        pitch in -89.0f64..89.0,
        yaw in -179.0f64..179.0,
    ) {
        let e = Quatd::from_euler_angles(roll, pitch, yaw).euler_angles();
        prop_assert!(e.approx_eq(&Vec3::new(roll, pitch, yaw), tol(1e-6)), "{}", e);
    }

    #[test]
    fn vector_rotation_paths_agree(axis in unit_axis(), angle in -PI..PI, v in vector()) {
        let q = Quatd::angle_axis(axis, angle);
        let direct = q.rotate_vector(v);
        let via_matrix = (Vec4::from_vec3(v, 0.0) * q.to_mat4()).truncated();
        prop_assert!(direct.approx_eq(&via_matrix, tol(1e-9)), "{} vs {}", direct, via_matrix);
        prop_assert!(direct.approx_eq(&sandwich(q, v), tol(1e-9)));
        prop_assert!((direct.length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn normalize_is_idempotent(c in prop::array::uniform4(-10.0f64..10.0)) {
        let q = Quat::from(c).normalized();
        prop_assert!(q.normalized().approx_eq(&q, tol(1e-12)));
    }
}
