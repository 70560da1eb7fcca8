// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-math: generic 4×4 transforms and quaternions for graphics and game code.
//!
//! Value types ([`Vec3`], [`Vec4`], [`Mat4`], [`Quat`], [`Onb`]) are generic
//! over [`Scalar`] (`f32` or `f64`) and are all `Copy`. Transforms are built
//! with the free functions in [`transform`] (re-exported at the crate root),
//! split back into parts with [`decompose()`], and bridged to quaternions with
//! [`Quat::from_mat4`] / [`Quat::to_mat4`].
//!
//! Degenerate input never produces an error except in [`decompose()`]: singular
//! inverses fall back to identity, zero-length vectors normalize to zero and
//! zero-length quaternions to identity. The inverse, quaternion and
//! decomposition fallbacks emit `tracing` events at `debug` level; the crate
//! never installs a subscriber.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::missing_panics_doc
)]

mod decompose;
mod mat4;
mod onb;
mod quat;
/// Scalar trait, tolerances and numeric helpers.
pub mod scalar;
/// Free functions building translation, rotation, scale, projection and view matrices.
pub mod transform;
mod vec3;
mod vec4;

pub use decompose::{decompose, DecomposeError, Decomposition};
pub use mat4::Mat4;
pub use onb::Onb;
pub use quat::Quat;
pub use scalar::{
    approx_eq, approx_zero, clamp, deg_to_rad, lerp, rad_to_deg, sign, Scalar, Tolerance,
};
pub use transform::{
    axis_angle, frustum, inverse, look_at, orthographic, perspective, rotate, scale, translate,
};
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Single-precision [`Vec3`].
pub type Vec3f = Vec3<f32>;
/// Double-precision [`Vec3`].
pub type Vec3d = Vec3<f64>;
/// Single-precision [`Vec4`].
pub type Vec4f = Vec4<f32>;
/// Double-precision [`Vec4`].
pub type Vec4d = Vec4<f64>;
/// Single-precision [`Mat4`].
pub type Mat4f = Mat4<f32>;
/// Double-precision [`Mat4`].
pub type Mat4d = Mat4<f64>;
/// Single-precision [`Quat`].
pub type Quatf = Quat<f32>;
/// Double-precision [`Quat`].
pub type Quatd = Quat<f64>;
/// Single-precision [`Onb`].
pub type Onbf = Onb<f32>;
/// Double-precision [`Onb`].
pub type Onbd = Onb<f64>;
