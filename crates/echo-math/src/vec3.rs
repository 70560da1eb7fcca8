// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::scalar::{Scalar, Tolerance};

/// Three-component vector used for positions, directions, axes and scale.
///
/// * Whether a value is a point or a direction depends on the caller; use
///   [`crate::Vec4::from_vec3`] with `w = 1` or `w = 0` to make that explicit
///   before multiplying by a [`crate::Mat4`].
/// * `Default` is the zero vector.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3<T: Scalar> {
    data: [T; 3],
}

impl<T: Scalar> Vec3<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Unit vector along +X.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along +Y.
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along +Z.
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
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

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 3] {
        self.data
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> T {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product (`self × other`).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Squared magnitude.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns a unit-length copy, or the zero vector if `length <= EPSILON`.
    ///
    /// [`crate::rotate`] relies on this for a zero axis.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len <= T::EPSILON {
            return Self::zero();
        }
        *self / len
    }

    /// Normalizes in place; see [`Vec3::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Component-wise linear interpolation.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    /// Component-wise comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance<T>) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| tolerance.matches(a, b))
    }
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    fn from(value: [T; 3]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> From<Vec3<T>> for [T; 3] {
    fn from(value: Vec3<T>) -> Self {
        value.data
    }
}

impl<T: Scalar> Index<usize> for Vec3<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
        )
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        )
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2])
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.data[0] * rhs, self.data[1] * rhs, self.data[2] * rhs)
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.data[0] / rhs, self.data[1] / rhs, self.data[2] / rhs)
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vec3<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vec3<$t>> for $t {
            type Output = Vec3<$t>;
            fn mul(self, rhs: Vec3<$t>) -> Vec3<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Scalar> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.data[0], self.data[1], self.data[2])
    }
}
