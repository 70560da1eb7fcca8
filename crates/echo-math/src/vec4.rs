// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use crate::scalar::{Scalar, Tolerance};
use crate::vec3::Vec3;

/// Four-component vector: homogeneous points/directions and [`crate::Mat4`] slots.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec4<T: Scalar> {
    data: [T; 4],
}

impl<T: Scalar> Vec4<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// The zero vector (including `w`).
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Extends a [`Vec3`] with an explicit `w` (`1` for points, `0` for directions).
    pub fn from_vec3(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
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

    /// W component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// Drops `w`.
    pub fn truncated(&self) -> Vec3<T> {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Perspective divide: `(x/w, y/w, z/w, w)`.
    ///
    /// No guard against `w == 0`; the result is then non-finite.
    pub fn standardized(&self) -> Self {
        let w = self.data[3];
        Self::new(self.data[0] / w, self.data[1] / w, self.data[2] / w, w)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Four-component length.
    pub fn length(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Product of all four components.
    pub fn product(&self) -> T {
        self.data[0] * self.data[1] * self.data[2] * self.data[3]
    }

    /// Component-wise comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance<T>) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| tolerance.matches(a, b))
    }
}

impl<T: Scalar> From<[T; 4]> for Vec4<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Scalar> Index<usize> for Vec4<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vec4<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar> Add for Vec4<T> {
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

impl<T: Scalar> Sub for Vec4<T> {
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

impl<T: Scalar> Neg for Vec4<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], -self.data[3])
    }
}

impl<T: Scalar> Mul<T> for Vec4<T> {
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

impl<T: Scalar> AddAssign for Vec4<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec4<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.data[0], self.data[1], self.data[2], self.data[3]
        )
    }
}
