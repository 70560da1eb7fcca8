// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::scalar::{Scalar, Tolerance};
use crate::vec3::Vec3;

/// Orthonormal basis `(u, v, w)`.
///
/// The `from_*` constructors take one or two seed vectors and complete a
/// right-handed basis with cross products. The first named seed keeps its
/// direction exactly; the second only fixes the plane. Seeds need not be
/// unit length. Parallel seed pairs are degenerate and produce zero vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Onb<T: Scalar> {
    u: Vec3<T>,
    v: Vec3<T>,
    w: Vec3<T>,
}

impl<T: Scalar> Onb<T> {
    /// Wraps three vectors as given; orthonormality is not checked.
    pub const fn new(u: Vec3<T>, v: Vec3<T>, w: Vec3<T>) -> Self {
        Self { u, v, w }
    }

    /// Replaces all three vectors.
    pub fn set(&mut self, u: Vec3<T>, v: Vec3<T>, w: Vec3<T>) {
        *self = Self::new(u, v, w);
    }

    /// First basis vector.
    pub fn u(&self) -> Vec3<T> {
        self.u
    }

    /// Second basis vector.
    pub fn v(&self) -> Vec3<T> {
        self.v
    }

    /// Third basis vector.
    pub fn w(&self) -> Vec3<T> {
        self.w
    }

    /// Basis whose `u` points along `u`.
    pub fn from_u(u: Vec3<T>) -> Self {
        let u = u.normalized();
        let v = perpendicular(u);
        let w = u.cross(&v);
        Self::new(u, v, w)
    }

    /// Basis whose `v` points along `v`.
    pub fn from_v(v: Vec3<T>) -> Self {
        let v = v.normalized();
        let u = perpendicular(v);
        let w = u.cross(&v);
        Self::new(u, v, w)
    }

    /// Basis whose `w` points along `w`.
    pub fn from_w(w: Vec3<T>) -> Self {
        let w = w.normalized();
        let u = perpendicular(w);
        let v = w.cross(&u);
        Self::new(u, v, w)
    }

    /// `u` along `u`, `v` in the `u`/`v` plane.
    pub fn from_uv(u: Vec3<T>, v: Vec3<T>) -> Self {
        let n = u.normalized();
        let w = u.cross(&v).normalized();
        Self::new(n, w.cross(&n), w)
    }

    /// `v` along `v`, `u` in the `u`/`v` plane.
    pub fn from_vu(v: Vec3<T>, u: Vec3<T>) -> Self {
        let n = v.normalized();
        let w = u.cross(&v).normalized();
        Self::new(n.cross(&w), n, w)
    }

    /// `u` along `u`, `w` in the `u`/`w` plane.
    pub fn from_uw(u: Vec3<T>, w: Vec3<T>) -> Self {
        let n = u.normalized();
        let v = w.cross(&u).normalized();
        Self::new(n, v, n.cross(&v))
    }

    /// `w` along `w`, `u` in the `u`/`w` plane.
    pub fn from_wu(w: Vec3<T>, u: Vec3<T>) -> Self {
        let n = w.normalized();
        let v = w.cross(&u).normalized();
        Self::new(v.cross(&n), v, n)
    }

    /// `v` along `v`, `w` in the `v`/`w` plane.
    pub fn from_vw(v: Vec3<T>, w: Vec3<T>) -> Self {
        let n = v.normalized();
        let u = v.cross(&w).normalized();
        Self::new(u, n, u.cross(&n))
    }

    /// `w` along `w`, `v` in the `v`/`w` plane.
    pub fn from_wv(w: Vec3<T>, v: Vec3<T>) -> Self {
        let n = w.normalized();
        let u = v.cross(&w).normalized();
        Self::new(u, n.cross(&u), n)
    }

    /// Vector-wise comparison under `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance<T>) -> bool {
        self.u.approx_eq(&other.u, tolerance)
            && self.v.approx_eq(&other.v, tolerance)
            && self.w.approx_eq(&other.w, tolerance)
    }
}

// Unit vector orthogonal to `n`: `n × X`, or `n × Y` when `n` is (anti)parallel to X.
fn perpendicular<T: Scalar>(n: Vec3<T>) -> Vec3<T> {
    let candidate = n.cross(&Vec3::unit_x());
    if candidate.length() < T::EPSILON {
        n.cross(&Vec3::unit_y()).normalized()
    } else {
        candidate.normalized()
    }
}

impl<T: Scalar> fmt::Display for Onb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u: {}, v: {}, w: {}", self.u, self.v, self.w)
    }
}
