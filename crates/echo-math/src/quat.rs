// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use tracing::{debug, trace};

use crate::mat4::Mat4;
use crate::scalar::{clamp, deg_to_rad, half, rad_to_deg, two, Scalar, Tolerance};
use crate::vec3::Vec3;

/// Quaternion stored as `(x, y, z, w)`; `w` is the scalar part.
///
/// * `Default` is the identity rotation `(0, 0, 0, 1)`.
/// * Unit length is not enforced. Operations that assume a unit quaternion
///   ([`Quat::angle`], [`Quat::axis`], [`Quat::rotate_vector`],
///   [`Quat::euler_angles`]) say so; normalize first.
/// * Units: [`Quat::angle_axis`] and [`Quat::angle`] use **radians**, the
///   Euler conversions use **degrees**.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat<T: Scalar> {
    data: [T; 4],
}

impl<T: Scalar> Quat<T> {
    /// Creates a quaternion from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates `(x, y, z, 1)`.
    ///
    /// Note the implicit `w` is **one**, not zero: this is not a pure vector
    /// quaternion.
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::one())
    }

    /// Creates `(v.x, v.y, v.z, 1)`; `w` is **one** as in [`Quat::from_xyz`].
    pub fn from_vector(v: Vec3<T>) -> Self {
        Self::from_vector_scalar(v, T::one())
    }

    /// Creates `(v.x, v.y, v.z, w)`.
    pub fn from_vector_scalar(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Returns the identity quaternion.
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// X component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// W (scalar) component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// The scalar part, `w`.
    pub fn scalar(&self) -> T {
        self.data[3]
    }

    /// The vector part, `(x, y, z)`.
    pub fn vector(&self) -> Vec3<T> {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// Four-component dot product.
    pub fn dot(&self, rhs: &Self) -> T {
        self.data[0] * rhs.data[0]
            + self.data[1] * rhs.data[1]
            + self.data[2] * rhs.data[2]
            + self.data[3] * rhs.data[3]
    }

    /// Squared length.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], self.data[3])
    }

    /// Returns a unit-length copy; identity when the squared length is
    /// `<= EPSILON`.
    pub fn normalized(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= T::EPSILON {
            debug!(len_sq = ?len_sq, "zero-length quaternion normalized to identity");
            return Self::identity();
        }
        *self * (T::one() / len_sq.sqrt())
    }

    /// Normalizes in place; see [`Quat::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Rotation angle in **radians**, `2 * acos(w)`.
    ///
    /// Assumes a unit quaternion. `w` is clamped to `[-1, 1]` first so rounding
    /// drift cannot push `acos` out of its domain.
    pub fn angle(&self) -> T {
        two::<T>() * clamp(self.data[3], -T::one(), T::one()).acos()
    }

    /// Rotation axis: the normalized vector part, or the zero vector when its
    /// magnitude is `<= EPSILON` (near-identity rotations have no axis).
    pub fn axis(&self) -> Vec3<T> {
        let v = self.vector();
        let m = v.length();
        if m <= T::EPSILON {
            return Vec3::zero();
        }
        v / m
    }

    /// Hamilton product (`self * other`).
    ///
    /// Applying the result to a vector applies `other` first, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by + ay * bw + az * bx - ax * bz,
            aw * bz + az * bw + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates another quaternion by this one: `self * rhs * conjugate(self)`.
    pub fn rotate(&self, rhs: &Self) -> Self {
        self.multiply(rhs).multiply(&self.conjugate())
    }

    /// Rotates `v` by this (unit) quaternion.
    ///
    /// This is the sandwich product `q * (v, 0) * q⁻¹`, evaluated as
    /// `v + 2w(q×v) + 2q×(q×v)`. It agrees with
    /// `Vec4::from_vec3(v, 0) * self.to_mat4()`.
    pub fn rotate_vector(&self, v: Vec3<T>) -> Vec3<T> {
        let two = two::<T>();
        let q = self.vector();
        let uv = q.cross(&v);
        let uuv = q.cross(&uv);
        v + uv * (two * self.data[3]) + uuv * two
    }

    /// `conjugate() / dot(self, self)`.
    ///
    /// Valid for non-unit quaternions; a zero quaternion yields non-finite
    /// components and is the caller's responsibility.
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.dot(self)
    }

    /// Integrates an angular change: `self += 0.5 * (Quat(v * scale, 0) * self)`.
    ///
    /// The result is not renormalized.
    pub fn add_scaled_vector(&mut self, v: Vec3<T>, scale: T) {
        let spin = Self::from_vector_scalar(v * scale, T::zero()) * *self;
        *self = *self + spin * half::<T>();
    }

    /// Rotation of `angle_radians` **radians** about `axis`:
    /// `w = cos(a/2)`, vector part `axis * sin(a/2)`.
    ///
    /// The axis is used as given; pass a unit vector to get a unit quaternion.
    pub fn angle_axis(axis: Vec3<T>, angle_radians: T) -> Self {
        let (s, c) = (angle_radians * half::<T>()).sin_cos();
        Self::from_vector_scalar(axis * s, c)
    }

    /// Builds a quaternion from Euler angles in **degrees**:
    /// `x` = roll, `y` = pitch, `z` = yaw.
    ///
    /// The rotation is yaw about Z, then pitch about Y, then roll about X
    /// (`q = q_yaw * q_pitch * q_roll`).
    pub fn from_euler_angles(x: T, y: T, z: T) -> Self {
        let h = half::<T>();
        let (s_roll, c_roll) = (deg_to_rad(x) * h).sin_cos();
        let (s_pitch, c_pitch) = (deg_to_rad(y) * h).sin_cos();
        let (s_yaw, c_yaw) = (deg_to_rad(z) * h).sin_cos();

        let cy_cp = c_yaw * c_pitch;
        let sy_sp = s_yaw * s_pitch;
        let cy_sp = c_yaw * s_pitch;
        let sy_cp = s_yaw * c_pitch;

        Self::new(
            cy_cp * s_roll - sy_sp * c_roll,
            cy_sp * c_roll + sy_cp * s_roll,
            sy_cp * c_roll - cy_sp * s_roll,
            cy_cp * c_roll + sy_sp * s_roll,
        )
    }

    /// Extracts Euler angles in **degrees** as `(roll, pitch, yaw)`.
    ///
    /// Assumes a unit quaternion. When `|r31| > 0.999999` (pitch within about
    /// 0.08° of ±90°) roll and yaw are indistinguishable: roll is reported as
    /// `0` and the combined rotation is folded into yaw.
    pub fn euler_angles(&self) -> Vec3<T> {
        let [x, y, z, w] = self.data;
        let two = two::<T>();
        let q00 = w * w;
        let q11 = x * x;
        let q22 = y * y;
        let q33 = z * z;

        let r11 = q00 + q11 - q22 - q33;
        let r21 = two * (x * y + w * z);
        let r31 = two * (x * z - w * y);
        let r32 = two * (y * z + w * x);
        let r33 = q00 - q11 - q22 + q33;

        let abs_r31 = r31.abs();
        if abs_r31 > T::GIMBAL_LOCK_THRESHOLD {
            trace!(r31 = ?r31, "gimbal lock branch in Euler extraction");
            let r12 = two * (x * y - w * z);
            let r13 = two * (x * z + w * y);
            return Vec3::new(
                T::zero(),
                rad_to_deg(-T::FRAC_PI_2() * r31 / abs_r31),
                rad_to_deg((-r12).atan2(-r31 * r13)),
            );
        }

        Vec3::new(
            rad_to_deg(r32.atan2(r33)),
            rad_to_deg((-r31).asin()),
            rad_to_deg(r21.atan2(r11)),
        )
    }

    /// Recovers a quaternion from the rotation block of `m`.
    ///
    /// For a positive trace `m00 + m11 + m22` this is `w = sqrt(1 + trace) / 2`
    /// with the vector part from the off-diagonal differences over `4w`.
    /// Otherwise `|w| <= 1/2` and the largest diagonal element selects which
    /// component to recover first, so rotations near 180° stay finite and
    /// accurate instead of dividing by a vanishing `w`.
    pub fn from_mat4(m: &Mat4<T>) -> Self {
        let one = T::one();
        let two = two::<T>();
        let four = two * two;
        let (m00, m11, m22) = (m.at(0, 0), m.at(1, 1), m.at(2, 2));
        let trace = m00 + m11 + m22;

        if trace > T::zero() {
            let w = (one + trace).sqrt() / two;
            let w4 = four * w;
            return Self::new(
                (m.at(2, 1) - m.at(1, 2)) / w4,
                (m.at(0, 2) - m.at(2, 0)) / w4,
                (m.at(1, 0) - m.at(0, 1)) / w4,
                w,
            );
        }

        if m00 >= m11 && m00 >= m22 {
            let s = (one + m00 - m11 - m22).sqrt() * two;
            Self::new(
                s / four,
                (m.at(0, 1) + m.at(1, 0)) / s,
                (m.at(0, 2) + m.at(2, 0)) / s,
                (m.at(2, 1) - m.at(1, 2)) / s,
            )
        } else if m11 >= m22 {
            let s = (one + m11 - m00 - m22).sqrt() * two;
            Self::new(
                (m.at(0, 1) + m.at(1, 0)) / s,
                s / four,
                (m.at(1, 2) + m.at(2, 1)) / s,
                (m.at(0, 2) - m.at(2, 0)) / s,
            )
        } else {
            let s = (one + m22 - m00 - m11).sqrt() * two;
            Self::new(
                (m.at(0, 2) + m.at(2, 0)) / s,
                (m.at(1, 2) + m.at(2, 1)) / s,
                s / four,
                (m.at(1, 0) - m.at(0, 1)) / s,
            )
        }
    }

    /// Rotation matrix for this quaternion: the 3×3 block below, element
    /// `j` of slot `i` at row `i` column `j`, in an otherwise identity matrix.
    ///
    /// ```text
    /// 1-2y²-2z²   2xy-2wz    2xz+2wy
    /// 2xy+2wz    1-2x²-2z²   2yz-2wx
    /// 2xz-2wy     2yz+2wx   1-2x²-2y²
    /// ```
    pub fn to_mat4(&self) -> Mat4<T> {
        let [x, y, z, r] = self.data;
        let one = T::one();
        let two = two::<T>();
        let o = T::zero();
        Mat4::from_rows([
            [
                one - two * y * y - two * z * z,
                two * x * y - two * r * z,
                two * x * z + two * r * y,
                o,
            ],
            [
                two * x * y + two * r * z,
                one - two * x * x - two * z * z,
                two * y * z - two * r * x,
                o,
            ],
            [
                two * x * z - two * r * y,
                two * y * z + two * r * x,
                one - two * x * x - two * y * y,
                o,
            ],
            [o, o, o, one],
        ])
    }

    /// Component-wise comparison under `tolerance`.
    ///
    /// `q` and `-q` describe the same rotation but do not compare equal here.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance<T>) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| tolerance.matches(a, b))
    }

    /// Like [`Quat::approx_eq`] but also accepts `-other`.
    pub fn approx_eq_rotation(&self, other: &Self, tolerance: Tolerance<T>) -> bool {
        self.approx_eq(other, tolerance) || self.approx_eq(&-*other, tolerance)
    }
}

impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts `(x, y, z, w)` verbatim; normalization is not enforced.
impl<T: Scalar> From<[T; 4]> for Quat<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> Add for Quat<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
            self.data[3] + rhs.data[3],
        )
    }
}

impl<T: Scalar> Sub for Quat<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
            self.data[3] - rhs.data[3],
        )
    }
}

impl<T: Scalar> Neg for Quat<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], -self.data[3])
    }
}

impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(
            self.data[0] * rhs,
            self.data[1] * rhs,
            self.data[2] * rhs,
            self.data[3] * rhs,
        )
    }
}

impl<T: Scalar> Div<T> for Quat<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(
            self.data[0] / rhs,
            self.data[1] / rhs,
            self.data[2] / rhs,
            self.data[3] / rhs,
        )
    }
}

impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

/// Rotates the vector; same as [`Quat::rotate_vector`].
impl<T: Scalar> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.rotate_vector(rhs)
    }
}

/// Rotates the vector by the inverse quaternion.
impl<T: Scalar> Mul<Quat<T>> for Vec3<T> {
    type Output = Vec3<T>;
    fn mul(self, rhs: Quat<T>) -> Vec3<T> {
        rhs.inverse().rotate_vector(self)
    }
}

impl<T: Scalar> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x[{}], y[{}], z[{}], w[{}]",
            self.data[0], self.data[1], self.data[2], self.data[3]
        )
    }
}
