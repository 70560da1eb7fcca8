// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::quat::Quat;
use crate::scalar::{Scalar, Tolerance};
use crate::transform;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// 4×4 transform stored as four [`Vec4`] slots.
///
/// - `m[i]` / [`Mat4::row`] address slot `i`; [`Mat4::at`] addresses
///   element `j` of slot `i`. [`Mat4::new`] takes 16 values slot by slot.
/// - Slot 3 carries the translation (see [`crate::translate`]); slots 0–2
///   carry the scaled basis axes.
/// - The contractions are fixed algebraic rules, not the textbook
///   "row times column" forms:
///   - `m * v`: `r[i] = Σ_j m[j][i] * v[j]`
///   - `v * m`: `r[i] = Σ_j m[i][j] * v[j]`
///   - `a * b`: slot `c` of the result is `Σ_k a[k] * b[c][k]`
///
///   With these rules `translate(t) * rotate(..) * scale(s)` applied to a
///   point scales first, then rotates, then translates.
///
/// # Examples
/// ```
/// use echo_math::{translate, Mat4, Vec3, Vec4};
/// let t: Mat4<f32> = translate(Vec3::new(5.0, -3.0, 2.0));
/// let p = t * Vec4::new(2.0, 4.0, -1.0, 1.0);
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4<T: Scalar> {
    rows: [Vec4<T>; 4],
}

impl<T: Scalar> Mat4<T> {
    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::from_scalar(T::one())
    }

    /// Diagonal matrix with `value` on the diagonal and zero elsewhere.
    pub fn from_scalar(value: T) -> Self {
        let o = T::zero();
        Self::from_rows([
            [value, o, o, o],
            [o, value, o, o],
            [o, o, value, o],
            [o, o, o, value],
        ])
    }

    /// Creates a matrix from 16 values, slot-major: the first four values
    /// become slot 0.
    pub fn new(data: [T; 16]) -> Self {
        let mut rows = [[T::zero(); 4]; 4];
        for (row, chunk) in rows.iter_mut().zip(data.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Self::from_rows(rows)
    }

    /// Creates a matrix from four slots.
    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self {
            rows: rows.map(Vec4::from),
        }
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat<T>) -> Self {
        q.to_mat4()
    }

    /// Returns the four slots as nested arrays.
    pub fn to_rows(self) -> [[T; 4]; 4] {
        self.rows.map(Vec4::to_array)
    }

    /// Returns the matrix as 16 values, slot-major (inverse of [`Mat4::new`]).
    pub fn to_array(self) -> [T; 16] {
        let mut out = [T::zero(); 16];
        for (i, row) in self.rows.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&row.to_array());
        }
        out
    }

    /// Slot `index`.
    ///
    /// # Panics
    /// Panics when `index >= 4`.
    pub fn row(&self, index: usize) -> &Vec4<T> {
        &self.rows[index]
    }

    /// Mutable slot `index`.
    ///
    /// # Panics
    /// Panics when `index >= 4`.
    pub fn row_mut(&mut self, index: usize) -> &mut Vec4<T> {
        &mut self.rows[index]
    }

    /// Element `col` of slot `row`.
    ///
    /// # Panics
    /// Panics when `row >= 4 || col >= 4`; out-of-range access is a
    /// programming error. Use [`Mat4::get`] for a checked read.
    pub fn at(&self, row: usize, col: usize) -> T {
        assert!(
            row < 4 && col < 4,
            "Mat4 index out of range: ({row}, {col})"
        );
        self.rows[row][col]
    }

    /// Mutable element `col` of slot `row`.
    ///
    /// # Panics
    /// Panics when `row >= 4 || col >= 4`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert!(
            row < 4 && col < 4,
            "Mat4 index out of range: ({row}, {col})"
        );
        &mut self.rows[row][col]
    }

    /// Checked element read; `None` when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        (row < 4 && col < 4).then(|| self.rows[row][col])
    }

    /// Composes two matrices (`self * rhs`); see the type docs for the rule.
    ///
    /// # Examples
    /// ```
    /// use echo_math::{scale, Mat4, Vec3};
    /// let a = Mat4::<f32>::identity();
    /// let b = scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let combine = |weights: &Vec4<T>| {
            self.rows[0] * weights[0]
                + self.rows[1] * weights[1]
                + self.rows[2] * weights[2]
                + self.rows[3] * weights[3]
        };
        Self {
            rows: [
                combine(&rhs.rows[0]),
                combine(&rhs.rows[1]),
                combine(&rhs.rows[2]),
                combine(&rhs.rows[3]),
            ],
        }
    }

    /// Swaps elements across the diagonal in place.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Returns the transposed matrix.
    pub fn transposed(&self) -> Self {
        let m = &self.rows;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// Determinant, expanded over 2×2 sub-determinants of slots 0/1 and 2/3.
    pub fn determinant(&self) -> T {
        let (a, b) = self.minors();
        determinant_from_minors(&a, &b)
    }

    /// The twelve 2×2 sub-determinants shared by [`Mat4::determinant`] and
    /// [`crate::inverse`]: `a` from slots 0/1, `b` from slots 2/3.
    pub(crate) fn minors(&self) -> ([T; 6], [T; 6]) {
        let m = &self.rows;
        let pair = |r0: &Vec4<T>, r1: &Vec4<T>| {
            [
                r0[0] * r1[1] - r0[1] * r1[0],
                r0[0] * r1[2] - r0[2] * r1[0],
                r0[0] * r1[3] - r0[3] * r1[0],
                r0[1] * r1[2] - r0[2] * r1[1],
                r0[1] * r1[3] - r0[3] * r1[1],
                r0[2] * r1[3] - r0[3] * r1[2],
            ]
        };
        (pair(&m[0], &m[1]), pair(&m[2], &m[3]))
    }

    /// Inverts in place. Singular matrices become the identity, exactly as
    /// [`crate::inverse`] documents.
    pub fn invert(&mut self) {
        *self = transform::inverse(self);
    }

    /// Slot 0: the local +X axis.
    pub fn right(&self) -> Vec4<T> {
        self.rows[0]
    }

    /// Negated slot 0.
    pub fn left(&self) -> Vec4<T> {
        -self.rows[0]
    }

    /// Slot 1: the local +Y axis.
    pub fn up(&self) -> Vec4<T> {
        self.rows[1]
    }

    /// Negated slot 1.
    pub fn down(&self) -> Vec4<T> {
        -self.rows[1]
    }

    /// Slot 2: the local +Z axis, which points backward in a right-handed
    /// view.
    pub fn backward(&self) -> Vec4<T> {
        self.rows[2]
    }

    /// Negated slot 2.
    pub fn forward(&self) -> Vec4<T> {
        -self.rows[2]
    }

    /// Slot 3: the translation.
    pub fn translation(&self) -> Vec4<T> {
        self.rows[3]
    }

    /// Stores `value` into slot 0.
    pub fn set_right(&mut self, value: Vec4<T>) {
        self.rows[0] = value;
    }

    /// Stores `-value` into slot 0.
    pub fn set_left(&mut self, value: Vec4<T>) {
        self.rows[0] = -value;
    }

    /// Stores `value` into slot 1.
    pub fn set_up(&mut self, value: Vec4<T>) {
        self.rows[1] = value;
    }

    /// Stores `-value` into slot 1.
    pub fn set_down(&mut self, value: Vec4<T>) {
        self.rows[1] = -value;
    }

    /// Stores `value` into slot 2.
    pub fn set_backward(&mut self, value: Vec4<T>) {
        self.rows[2] = value;
    }

    /// Stores `-value` into slot 2.
    pub fn set_forward(&mut self, value: Vec4<T>) {
        self.rows[2] = -value;
    }

    /// Stores `value` into slot 3.
    pub fn set_translation(&mut self, value: Vec4<T>) {
        self.rows[3] = value;
    }

    /// Applies the matrix to a point (`w = 1`) without a perspective divide.
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        (*self * Vec4::from_vec3(point, T::one())).truncated()
    }

    /// Applies the matrix to a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: Vec3<T>) -> Vec3<T> {
        (*self * Vec4::from_vec3(direction, T::zero())).truncated()
    }

    /// Element-wise comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance<T>) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

/// Laplace expansion of the determinant from the minors returned by
/// [`Mat4::minors`]; `a` pairs slots 0/1, `b` pairs slots 2/3.
pub(crate) fn determinant_from_minors<T: Scalar>(a: &[T; 6], b: &[T; 6]) -> T {
    a[0] * b[5] - a[1] * b[4] + a[2] * b[3] + a[3] * b[2] - a[4] * b[1] + a[5] * b[0]
}

impl<T: Scalar> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> From<[[T; 4]; 4]> for Mat4<T> {
    fn from(value: [[T; 4]; 4]) -> Self {
        Self::from_rows(value)
    }
}

impl<T: Scalar> Index<usize> for Mat4<T> {
    type Output = Vec4<T>;
    fn index(&self, index: usize) -> &Vec4<T> {
        &self.rows[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Mat4<T> {
    fn index_mut(&mut self, index: usize) -> &mut Vec4<T> {
        &mut self.rows[index]
    }
}

impl<T: Scalar> Mul for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> Mul<&Mat4<T>> for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self {
        self.multiply(rhs)
    }
}

impl<T: Scalar> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> MulAssign<&Mat4<T>> for Mat4<T> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

/// Scales every element.
impl<T: Scalar> Mul<T> for Mat4<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self {
            rows: self.rows.map(|row| row * rhs),
        }
    }
}

/// `r[i] = Σ_j m[j][i] * v[j]`: the slots are weighted by the vector.
impl<T: Scalar> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;
    fn mul(self, rhs: Vec4<T>) -> Vec4<T> {
        self.rows[0] * rhs[0]
            + self.rows[1] * rhs[1]
            + self.rows[2] * rhs[2]
            + self.rows[3] * rhs[3]
    }
}

/// `r[i] = Σ_j m[i][j] * v[j]`: each slot is dotted with the vector.
impl<T: Scalar> Mul<Mat4<T>> for Vec4<T> {
    type Output = Vec4<T>;
    fn mul(self, rhs: Mat4<T>) -> Vec4<T> {
        Vec4::new(
            rhs.rows[0].dot(&self),
            rhs.rows[1].dot(&self),
            rhs.rows[2].dot(&self),
            rhs.rows[3].dot(&self),
        )
    }
}

impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
