// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstraction and the small numeric helpers shared by every type in
//! this crate.
//!
//! All vector, matrix and quaternion types are generic over [`Scalar`], which
//! is implemented for `f32` and `f64`. The trait pins the two thresholds the
//! rest of the crate depends on:
//!
//! - [`Scalar::EPSILON`] (`1e-6` for both widths) is a degeneracy threshold,
//!   not machine precision. Lengths, determinants and scale factors at or
//!   below it are treated as zero and routed to the documented fallbacks.
//! - [`Scalar::GIMBAL_LOCK_THRESHOLD`] (`0.999999`) is the `|sin(pitch)|`
//!   above which Euler extraction switches to the gimbal-lock branch.

use core::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// Floating-point scalar used by all echo-math value types.
///
/// Arithmetic, comparison and transcendental functions come from
/// [`num_traits::Float`]; `π` and friends from [`num_traits::FloatConst`].
pub trait Scalar: Float + FloatConst + Debug + Display + Default + Send + Sync + 'static {
    /// Degeneracy threshold used when detecting zero-length or singular input.
    const EPSILON: Self;

    /// `|r31|` above which Euler extraction treats a rotation as gimbal-locked.
    const GIMBAL_LOCK_THRESHOLD: Self;

    /// Converts an `f64` literal into this scalar type.
    ///
    /// Used for constants inside generic code; narrowing to `f32` rounds to
    /// nearest.
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f32 {
    const EPSILON: Self = 1e-6;
    const GIMBAL_LOCK_THRESHOLD: Self = 0.999_999;

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    const EPSILON: Self = 1e-6;
    const GIMBAL_LOCK_THRESHOLD: Self = 0.999_999;

    fn from_f64(value: f64) -> Self {
        value
    }
}

#[inline]
pub(crate) fn two<T: Scalar>() -> T {
    T::one() + T::one()
}

#[inline]
pub(crate) fn half<T: Scalar>() -> T {
    T::one() / two::<T>()
}

/// Converts degrees to radians (`degrees * π / 180`).
pub fn deg_to_rad<T: Scalar>(degrees: T) -> T {
    degrees * T::PI() / T::from_f64(180.0)
}

/// Converts radians to degrees (`radians * 180 / π`).
pub fn rad_to_deg<T: Scalar>(radians: T) -> T {
    radians * T::from_f64(180.0) / T::PI()
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics when `min > max`.
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Linear interpolation `a + (b - a) * t`; `t` is not clamped.
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Returns `-1` for negative input and `+1` otherwise (zero counts as positive).
pub fn sign<T: Scalar>(value: T) -> T {
    if value < T::zero() {
        -T::one()
    } else {
        T::one()
    }
}

/// `true` when `|value| <= EPSILON`.
pub fn approx_zero<T: Scalar>(value: T) -> bool {
    value.abs() <= T::EPSILON
}

/// `true` when `|a - b| <= EPSILON`.
pub fn approx_eq<T: Scalar>(a: T, b: T) -> bool {
    approx_zero(a - b)
}

/// Absolute/relative tolerance used by the `approx_eq` methods on the value
/// types.
///
/// Two values match when `|a - b| <= max(absolute, relative * max(|a|, |b|))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T: Scalar> {
    /// Absolute floor of the accepted difference.
    pub absolute: T,
    /// Accepted difference relative to the larger magnitude.
    pub relative: T,
}

impl<T: Scalar> Tolerance<T> {
    /// Creates a tolerance from explicit absolute and relative bounds.
    pub const fn new(absolute: T, relative: T) -> Self {
        Self { absolute, relative }
    }

    /// Purely absolute tolerance.
    pub fn absolute(absolute: T) -> Self {
        Self::new(absolute, T::zero())
    }

    /// Returns `true` when `a` and `b` are within this tolerance.
    pub fn matches(&self, a: T, b: T) -> bool {
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.absolute.max(self.relative * scale)
    }
}

impl<T: Scalar> Default for Tolerance<T> {
    fn default() -> Self {
        Self::new(T::EPSILON, T::EPSILON)
    }
}
