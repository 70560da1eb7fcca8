// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Affine decomposition of a [`Mat4`] into translation, rotation and signed
//! per-axis scale.

use thiserror::Error;
use tracing::debug;

use crate::mat4::Mat4;
use crate::quat::Quat;
use crate::scalar::{approx_zero, sign, Scalar};
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// Components recovered from an affine transform.
///
/// Recomposing as `translate(translation) * orientation.to_mat4() *
/// scale(scale)` reproduces the input up to rounding, for inputs built that
/// way with non-zero scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Decomposition<T: Scalar> {
    /// First three components of slot 3.
    pub translation: Vec3<T>,
    /// Rotation with the scale divided out of slots 0–2.
    pub orientation: Quat<T>,
    /// Signed length of the first three components of slots 0–2.
    pub scale: Vec3<T>,
}

/// Failure modes of [`decompose`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DecomposeError<T: Scalar> {
    /// A scale component is within `EPSILON` of zero, so no rotation can be
    /// recovered.
    ///
    /// Translation and scale had already been extracted and are carried here.
    #[error("degenerate scale {scale}: cannot recover rotation")]
    DegenerateScale {
        /// Translation extracted before the failure.
        translation: Vec3<T>,
        /// Scale extracted before the failure; at least one component is ~0.
        scale: Vec3<T>,
    },
}

impl<T: Scalar> DecomposeError<T> {
    /// Orientation reported alongside a failed decomposition: always identity.
    pub fn orientation(&self) -> Quat<T> {
        Quat::identity()
    }

    /// The partial result: extracted translation and scale with an identity
    /// orientation.
    pub fn into_partial(self) -> Decomposition<T> {
        match self {
            Self::DegenerateScale { translation, scale } => Decomposition {
                translation,
                orientation: Quat::identity(),
                scale,
            },
        }
    }
}

/// Splits `mat` into translation, rotation and signed scale.
///
/// - translation: the first three components of slot 3;
/// - scale: for each of slots 0–2, the length of its first three components,
///   negated when the product of all four of its entries is negative;
/// - orientation: [`Quat::from_mat4`] of slots 0–2 divided by their scale.
///
/// The sign rule inspects the slot's 4th entry too, so for affine input
/// (4th entry zero) the sign is always positive. Reflections are not
/// detected from the determinant.
///
/// # Errors
/// [`DecomposeError::DegenerateScale`] when any scale component satisfies
/// `|s| <= EPSILON`.
///
/// # Examples
/// ```
/// use echo_math::{decompose, scale, translate, Vec3};
/// let m = translate(Vec3::new(1.0_f32, 2.0, 3.0)) * scale(Vec3::new(2.0, 3.0, 4.0));
/// let d = decompose(&m).unwrap();
/// assert_eq!(d.translation, Vec3::new(1.0, 2.0, 3.0));
/// assert!((d.scale.y() - 3.0).abs() < 1e-6);
/// ```
pub fn decompose<T: Scalar>(mat: &Mat4<T>) -> Result<Decomposition<T>, DecomposeError<T>> {
    let translation = mat.translation().truncated();

    let axis_scale = |slot: &Vec4<T>| sign(slot.product()) * slot.truncated().length();
    let scale = Vec3::new(
        axis_scale(mat.row(0)),
        axis_scale(mat.row(1)),
        axis_scale(mat.row(2)),
    );

    if approx_zero(scale.x()) || approx_zero(scale.y()) || approx_zero(scale.z()) {
        debug!(%scale, %translation, "decompose: degenerate scale");
        return Err(DecomposeError::DegenerateScale { translation, scale });
    }

    let axis = |i: usize| Vec4::from_vec3(mat.row(i).truncated() / scale[i], T::zero());
    let o = T::zero();
    let mut rotation = Mat4::identity();
    rotation[0] = axis(0);
    rotation[1] = axis(1);
    rotation[2] = axis(2);
    rotation[3] = Vec4::new(o, o, o, T::one());

    Ok(Decomposition {
        translation,
        orientation: Quat::from_mat4(&rotation),
        scale,
    })
}
