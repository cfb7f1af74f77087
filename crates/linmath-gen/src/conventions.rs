// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar-type table and the numeric promotion graph.
//!
//! Every generator asks this module how a scalar is spelled in Rust, which family
//! prefix its vectors and matrices use, and whether converting between two scalar
//! types is implicit (widening, emitted as `From`) or explicit (narrowing, emitted as
//! an `as_*` method).

use std::fmt;
use std::str::FromStr;

use crate::error::GenError;

/// Component names used by every generated vector family, in order.
///
/// A family of size `n` uses the first `n` names; matrices address their row and
/// column vectors through the same names.
pub const COMPONENTS: [&str; 4] = ["x", "y", "z", "w"];

/// Scalar element types the generators understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarType {
    /// 32-bit signed integer.
    Int,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
}

impl ScalarType {
    /// All scalar types, narrowest first.
    pub const ALL: [Self; 3] = [Self::Int, Self::Float, Self::Double];

    /// Descriptor-facing name (`int`, `float`, `double`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Rust primitive spelling.
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::Float => "f32",
            Self::Double => "f64",
        }
    }

    /// Size of one scalar in bytes.
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Int | Self::Float => 4,
            Self::Double => 8,
        }
    }

    /// Vector family prefix (`ivec`, `vec`, `dvec`).
    pub const fn vector_prefix(self) -> &'static str {
        match self {
            Self::Int => "ivec",
            Self::Float => "vec",
            Self::Double => "dvec",
        }
    }

    /// Matrix family prefix; integers have none.
    pub const fn matrix_prefix(self) -> Option<&'static str> {
        match self {
            Self::Int => None,
            Self::Float => Some("mat"),
            Self::Double => Some("dmat"),
        }
    }

    /// `true` for the integer scalar.
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Int)
    }

    /// Type returned by `length()`; integer vectors measure in `f64`.
    pub const fn length_type(self) -> &'static str {
        match self {
            Self::Int | Self::Double => "f64",
            Self::Float => "f32",
        }
    }

    /// Formats a small integer constant as a literal of this type.
    pub fn literal(self, value: i32) -> String {
        if self.is_integral() {
            value.to_string()
        } else {
            format!("{value}.0")
        }
    }

    /// Promotion rank; converting to a higher rank is widening.
    const fn rank(self) -> u8 {
        match self {
            Self::Int => 0,
            Self::Float => 1,
            Self::Double => 2,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarType {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scalar| scalar.name() == s)
            .ok_or_else(|| GenError::UnknownScalar(s.to_owned()))
    }
}

/// Whether a scalar conversion happens silently or must be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// Widening, lossless in intent; emitted as `impl From`.
    Implicit,
    /// Narrowing, potentially lossy; emitted as an `as_*` method.
    Explicit,
}

/// One directed edge of the promotion graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionEdge {
    /// Source scalar type.
    pub from: ScalarType,
    /// Target scalar type.
    pub to: ScalarType,
    /// Conversion kind.
    pub kind: ConversionKind,
}

/// Looks up the conversion from `from` to `to`; `None` when they are the same type.
pub fn conversion(from: ScalarType, to: ScalarType) -> Option<ConversionKind> {
    if from == to {
        None
    } else if from.rank() < to.rank() {
        Some(ConversionKind::Implicit)
    } else {
        Some(ConversionKind::Explicit)
    }
}

/// Every edge of the promotion graph, ordered by source then target.
pub fn conversion_edges() -> Vec<ConversionEdge> {
    ScalarType::ALL
        .into_iter()
        .flat_map(|from| {
            ScalarType::ALL.into_iter().filter_map(move |to| {
                conversion(from, to).map(|kind| ConversionEdge { from, to, kind })
            })
        })
        .collect()
}

/// Pascal-cases a family prefix: `vec` → `Vec`, `ivec` → `IVec`, `dmat` → `DMat`.
pub fn pascal_family(family: &str) -> String {
    let mut out = String::with_capacity(family.len());
    let mut chars = family.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    let rest: String = chars.collect();
    let single_letter_prefix = ["vec", "mat"]
        .iter()
        .any(|base| rest.starts_with(base) && family.len() == base.len() + 1);
    if single_letter_prefix {
        let mut rest_chars = rest.chars();
        if let Some(second) = rest_chars.next() {
            out.extend(second.to_uppercase());
        }
        out.extend(rest_chars);
    } else {
        out.push_str(&rest);
    }
    out
}

/// Artifact name of a vector: `{prefix}{n}`.
pub fn vector_artifact(prefix: &str, n: usize) -> String {
    format!("{prefix}{n}")
}

/// Rust type name of a vector: `Vec3`, `IVec2`.
pub fn vector_type(prefix: &str, n: usize) -> String {
    format!("{}{n}", pascal_family(prefix))
}

/// Artifact name of a matrix: `{prefix}{r}` when square, else `{prefix}{r}x{c}`.
pub fn matrix_artifact(prefix: &str, rows: usize, cols: usize) -> String {
    if rows == cols {
        format!("{prefix}{rows}")
    } else {
        format!("{prefix}{rows}x{cols}")
    }
}

/// Rust type name of a matrix: `Mat4`, `DMat2x3`.
pub fn matrix_type(prefix: &str, rows: usize, cols: usize) -> String {
    format!("{}{}", pascal_family(prefix), matrix_artifact("", rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_are_antisymmetric() {
        for a in ScalarType::ALL {
            assert_eq!(conversion(a, a), None);
            for b in ScalarType::ALL.into_iter().filter(|b| *b != a) {
                let forward = conversion(a, b);
                let backward = conversion(b, a);
                assert!(forward.is_some() && backward.is_some());
                assert_ne!(forward, backward, "{a} <-> {b}");
            }
        }
    }

    #[test]
    fn widening_edges_are_implicit() {
        use ScalarType::{Double, Float, Int};
        assert_eq!(conversion(Int, Float), Some(ConversionKind::Implicit));
        assert_eq!(conversion(Int, Double), Some(ConversionKind::Implicit));
        assert_eq!(conversion(Float, Double), Some(ConversionKind::Implicit));
        assert_eq!(conversion(Float, Int), Some(ConversionKind::Explicit));
        assert_eq!(conversion_edges().len(), 6);
    }

    #[test]
    fn scalar_names_parse() {
        assert_eq!("float".parse::<ScalarType>().ok(), Some(ScalarType::Float));
        assert!(matches!(
            "half".parse::<ScalarType>(),
            Err(GenError::UnknownScalar(name)) if name == "half"
        ));
    }

    #[test]
    fn type_names_follow_family_prefix() {
        assert_eq!(vector_type("vec", 3), "Vec3");
        assert_eq!(vector_type("ivec", 4), "IVec4");
        assert_eq!(vector_type("dvec", 2), "DVec2");
        assert_eq!(matrix_artifact("mat", 4, 4), "mat4");
        assert_eq!(matrix_artifact("dmat", 3, 4), "dmat3x4");
        assert_eq!(matrix_type("mat", 4, 4), "Mat4");
        assert_eq!(matrix_type("mat", 2, 3), "Mat2x3");
        assert_eq!(matrix_type("dmat", 3, 4), "DMat3x4");
    }

    #[test]
    fn literals_match_scalar_kind() {
        assert_eq!(ScalarType::Int.literal(2), "2");
        assert_eq!(ScalarType::Float.literal(-1), "-1.0");
    }
}
