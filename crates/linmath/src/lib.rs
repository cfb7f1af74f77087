// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-size vector and matrix types generated by `linmath-gen`.
//!
//! Vectors come in `f32` (`Vec2`..`Vec4`), `i32` (`IVec2`..`IVec4`) and `f64`
//! (`DVec2`..`DVec4`) families; matrices in `f32` (`Mat2`..`Mat4`, `Mat2x3`, ...)
//! and `f64` (`DMat2`..`DMat4`, ...). Each type also lives in its own module
//! (`linmath::vec3`, `linmath::mat4`) next to its `math` helpers.
//!
//! Widening scalar conversions are `From` impls (`Vec3::from(IVec3::new(1, 2, 3))`);
//! narrowing ones are explicit `as_*` methods (`v.as_ivec3()`).

use thiserror::Error;

/// Index passed to a generated accessor was out of range for the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for {type_name}")]
pub struct IndexOutOfRange {
    /// Offending index.
    pub index: usize,
    /// Name of the vector or matrix type that rejected it.
    pub type_name: &'static str,
}

impl IndexOutOfRange {
    /// Builds the error for `index` on `type_name`.
    pub const fn new(index: usize, type_name: &'static str) -> Self {
        Self { index, type_name }
    }
}

#[allow(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::panic
)]
mod generated {
    use crate::IndexOutOfRange;

    include!(concat!(env!("OUT_DIR"), "/vec2.rs"));
    include!(concat!(env!("OUT_DIR"), "/vec3.rs"));
    include!(concat!(env!("OUT_DIR"), "/vec4.rs"));
    include!(concat!(env!("OUT_DIR"), "/ivec2.rs"));
    include!(concat!(env!("OUT_DIR"), "/ivec3.rs"));
    include!(concat!(env!("OUT_DIR"), "/ivec4.rs"));
    include!(concat!(env!("OUT_DIR"), "/dvec2.rs"));
    include!(concat!(env!("OUT_DIR"), "/dvec3.rs"));
    include!(concat!(env!("OUT_DIR"), "/dvec4.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat2.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat2x3.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat2x4.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat3x2.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat3.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat3x4.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat4x2.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat4x3.rs"));
    include!(concat!(env!("OUT_DIR"), "/mat4.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat2.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat2x3.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat2x4.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat3x2.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat3.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat3x4.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat4x2.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat4x3.rs"));
    include!(concat!(env!("OUT_DIR"), "/dmat4.rs"));

    pub use dmat2::DMat2;
    pub use dmat2x3::DMat2x3;
    pub use dmat2x4::DMat2x4;
    pub use dmat3::DMat3;
    pub use dmat3x2::DMat3x2;
    pub use dmat3x4::DMat3x4;
    pub use dmat4::DMat4;
    pub use dmat4x2::DMat4x2;
    pub use dmat4x3::DMat4x3;
    pub use dvec2::DVec2;
    pub use dvec3::DVec3;
    pub use dvec4::DVec4;
    pub use ivec2::IVec2;
    pub use ivec3::IVec3;
    pub use ivec4::IVec4;
    pub use mat2::Mat2;
    pub use mat2x3::Mat2x3;
    pub use mat2x4::Mat2x4;
    pub use mat3::Mat3;
    pub use mat3x2::Mat3x2;
    pub use mat3x4::Mat3x4;
    pub use mat4::Mat4;
    pub use mat4x2::Mat4x2;
    pub use mat4x3::Mat4x3;
    pub use vec2::Vec2;
    pub use vec3::Vec3;
    pub use vec4::Vec4;
}

pub use generated::{
    DMat2, DMat2x3, DMat2x4, DMat3, DMat3x2, DMat3x4, DMat4, DMat4x2, DMat4x3, DVec2, DVec3, DVec4,
    IVec2, IVec3, IVec4, Mat2, Mat2x3, Mat2x4, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x2, Mat4x3, Vec2,
    Vec3, Vec4,
};
pub use generated::{
    dmat2, dmat2x3, dmat2x4, dmat3, dmat3x2, dmat3x4, dmat4, dmat4x2, dmat4x3, dvec2, dvec3, dvec4,
    ivec2, ivec3, ivec4, mat2, mat2x3, mat2x4, mat3, mat3x2, mat3x4, mat4, mat4x2, mat4x3, vec2,
    vec3, vec4,
};
