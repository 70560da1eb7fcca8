// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Free functions that build canonical [`Mat4`] transforms.
//!
//! Angle units are part of each function's contract and are not unified:
//! [`rotate`] and [`perspective`] take **degrees**, [`axis_angle`] takes
//! **radians**. Likewise [`rotate`] normalizes its axis while [`axis_angle`]
//! uses the axis exactly as given.

use tracing::debug;

use crate::mat4::{determinant_from_minors, Mat4};
use crate::scalar::{deg_to_rad, two, Scalar};
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// Translation matrix: identity with slot 3 set to `(x, y, z, 1)`.
pub fn translate<T: Scalar>(position: Vec3<T>) -> Mat4<T> {
    let mut result = Mat4::identity();
    result[3] = Vec4::from_vec3(position, T::one());
    result
}

/// Rotation of `angle_degrees` **degrees** about a normalized copy of `axis`
/// (Rodrigues' formula).
///
/// Only the upper 3×3 block is written; the 4th element of slots 0–2 and
/// slot 3 keep their identity values. A zero-length axis normalizes to the
/// zero vector and the result is then `cos(angle)` on the diagonal.
///
/// # Examples
/// ```
/// use echo_math::{rotate, Vec3, Vec4};
/// // 90° about +Z maps +X onto +Y.
/// let r = rotate(90.0_f32, Vec3::unit_z());
/// let v = r * Vec4::new(1.0, 0.0, 0.0, 0.0);
/// assert!((v.y() - 1.0).abs() < 1e-6 && v.x().abs() < 1e-6);
/// ```
pub fn rotate<T: Scalar>(angle_degrees: T, axis: Vec3<T>) -> Mat4<T> {
    let radians = deg_to_rad(angle_degrees);
    let (s, c) = radians.sin_cos();
    let a = axis.normalized();
    let tmp = a * (T::one() - c);

    let mut rotated = Mat4::identity();
    rotated[0][0] = c + tmp[0] * a[0];
    rotated[0][1] = tmp[0] * a[1] + s * a[2];
    rotated[0][2] = tmp[0] * a[2] - s * a[1];

    rotated[1][0] = tmp[1] * a[0] - s * a[2];
    rotated[1][1] = c + tmp[1] * a[1];
    rotated[1][2] = tmp[1] * a[2] + s * a[0];

    rotated[2][0] = tmp[2] * a[0] + s * a[1];
    rotated[2][1] = tmp[2] * a[1] - s * a[0];
    rotated[2][2] = c + tmp[2] * a[2];
    rotated
}

/// Non-uniform scale: diagonal `(x, y, z, 1)`.
pub fn scale<T: Scalar>(size: Vec3<T>) -> Mat4<T> {
    let mut scaled = Mat4::identity();
    scaled[0][0] = size.x();
    scaled[1][1] = size.y();
    scaled[2][2] = size.z();
    scaled
}

/// Orthographic projection.
///
/// Maps `[left, right] × [bottom, top]` to `[-1, 1]²` and view-space
/// `z = -near .. -far` to `0 .. 1`.
pub fn orthographic<T: Scalar>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
    let mut ortho = Mat4::identity();
    ortho[0][0] = two::<T>() / (right - left);
    ortho[1][1] = two::<T>() / (top - bottom);
    ortho[2][2] = -T::one() / (far - near);
    ortho[3][0] = -(right + left) / (right - left);
    ortho[3][1] = -(top + bottom) / (top - bottom);
    ortho[3][2] = -near / (far - near);
    ortho
}

/// Off-axis perspective frustum; after the divide by `w` the near plane maps
/// to NDC `z = -1` and the far plane to `z = 1`.
pub fn frustum<T: Scalar>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
    let two = two::<T>();
    let mut frust = Mat4::from_scalar(T::zero());
    frust[0][0] = (two * near) / (right - left);
    frust[1][1] = (two * near) / (top - bottom);
    frust[2][0] = (right + left) / (right - left);
    frust[2][1] = (top + bottom) / (top - bottom);
    frust[2][2] = -(far + near) / (far - near);
    frust[2][3] = -T::one();
    frust[3][2] = -(two * far * near) / (far - near);
    frust
}

/// Symmetric perspective projection with a vertical field of view in
/// **degrees**.
///
/// Equivalent to [`frustum`] with `right = tan(fov_y / 2) * near * aspect`,
/// `top = tan(fov_y / 2) * near`, `left = -right` and `bottom = -top`.
pub fn perspective<T: Scalar>(fov_y_degrees: T, aspect: T, near: T, far: T) -> Mat4<T> {
    let two = two::<T>();
    let range = deg_to_rad(fov_y_degrees / two).tan() * near;
    let left = -range * aspect;
    let right = range * aspect;
    let bottom = -range;
    let top = range;

    let mut persp = Mat4::from_scalar(T::zero());
    persp[0][0] = (two * near) / (right - left);
    persp[1][1] = (two * near) / (top - bottom);
    persp[2][2] = -(far + near) / (far - near);
    persp[2][3] = -T::one();
    persp[3][2] = -(two * far * near) / (far - near);
    persp
}

/// Right-handed view matrix looking from `eye` toward `target`.
///
/// Builds `f = normalize(target - eye)`, `s = normalize(f × normalize(up))`,
/// `u = s × f`. The view maps `eye` to the origin and `target` onto the
/// negative Z axis. `up` parallel to the view direction is degenerate and
/// yields a zero side vector.
pub fn look_at<T: Scalar>(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Mat4<T> {
    let f = (target - eye).normalized();
    let s = f.cross(&up.normalized()).normalized();
    let u = s.cross(&f);

    let mut look = Mat4::identity();
    look[0][0] = s.x();
    look[1][0] = s.y();
    look[2][0] = s.z();
    look[0][1] = u.x();
    look[1][1] = u.y();
    look[2][1] = u.z();
    look[0][2] = -f.x();
    look[1][2] = -f.y();
    look[2][2] = -f.z();
    look[3][0] = -s.dot(&eye);
    look[3][1] = -u.dot(&eye);
    look[3][2] = f.dot(&eye);
    look
}

/// General 4×4 inverse by cofactor expansion over 2×2 sub-determinants.
///
/// When `|det| <= EPSILON` the identity is returned instead. Callers that must
/// tell singular input apart check [`Mat4::determinant`] themselves.
pub fn inverse<T: Scalar>(mat: &Mat4<T>) -> Mat4<T> {
    let (a, b) = mat.minors();
    let det = determinant_from_minors(&a, &b);
    if det.abs() <= T::EPSILON {
        debug!(det = ?det, "singular matrix; inverse falls back to identity");
        return Mat4::identity();
    }

    let m = |r: usize, c: usize| mat.at(r, c);
    let cofactors = [
        [
            m(1, 1) * b[5] - m(1, 2) * b[4] + m(1, 3) * b[3],
            -m(0, 1) * b[5] + m(0, 2) * b[4] - m(0, 3) * b[3],
            m(3, 1) * a[5] - m(3, 2) * a[4] + m(3, 3) * a[3],
            -m(2, 1) * a[5] + m(2, 2) * a[4] - m(2, 3) * a[3],
        ],
        [
            -m(1, 0) * b[5] + m(1, 2) * b[2] - m(1, 3) * b[1],
            m(0, 0) * b[5] - m(0, 2) * b[2] + m(0, 3) * b[1],
            -m(3, 0) * a[5] + m(3, 2) * a[2] - m(3, 3) * a[1],
            m(2, 0) * a[5] - m(2, 2) * a[2] + m(2, 3) * a[1],
        ],
        [
            m(1, 0) * b[4] - m(1, 1) * b[2] + m(1, 3) * b[0],
            -m(0, 0) * b[4] + m(0, 1) * b[2] - m(0, 3) * b[0],
            m(3, 0) * a[4] - m(3, 1) * a[2] + m(3, 3) * a[0],
            -m(2, 0) * a[4] + m(2, 1) * a[2] - m(2, 3) * a[0],
        ],
        [
            -m(1, 0) * b[3] + m(1, 1) * b[1] - m(1, 2) * b[0],
            m(0, 0) * b[3] - m(0, 1) * b[1] + m(0, 2) * b[0],
            -m(3, 0) * a[3] + m(3, 1) * a[1] - m(3, 2) * a[0],
            m(2, 0) * a[3] - m(2, 1) * a[1] + m(2, 2) * a[0],
        ],
    ];

    Mat4::from_rows(cofactors) * (T::one() / det)
}

/// Rotation of `angle_radians` **radians** about `axis`, used as given.
///
/// Unlike [`rotate`] the axis is not normalized; a non-unit axis produces a
/// matrix that is not a pure rotation. The 4th row and column are written as
/// identity.
pub fn axis_angle<T: Scalar>(axis: Vec3<T>, angle_radians: T) -> Mat4<T> {
    let (s, c) = angle_radians.sin_cos();
    let inv_c = T::one() - c;
    let (x, y, z) = (axis.x(), axis.y(), axis.z());
    let (xy, xz, yz) = (x * y * inv_c, x * z * inv_c, y * z * inv_c);
    let (xs, ys, zs) = (x * s, y * s, z * s);
    let o = T::zero();

    Mat4::from_rows([
        [c + x * x * inv_c, xy + zs, xz - ys, o],
        [xy - zs, c + y * y * inv_c, yz + xs, o],
        [xz + ys, yz - xs, c + z * z * inv_c, o],
        [o, o, o, T::one()],
    ])
}
