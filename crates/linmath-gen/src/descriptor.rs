// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable generator inputs, validated on construction.

use std::collections::HashSet;

use crate::conventions::{self, ScalarType};
use crate::error::GenError;
use crate::vector::swizzles;

/// Component counts a vector descriptor may have.
pub const VECTOR_SIZES: std::ops::RangeInclusive<usize> = 2..=4;

/// Row/column counts a matrix descriptor may have.
pub const MATRIX_SIZES: std::ops::RangeInclusive<usize> = 2..=4;

/// Input to one [`VectorGenerator`](crate::vector::VectorGenerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorDescriptor {
    family: String,
    scalar: ScalarType,
    components: Vec<String>,
}

impl VectorDescriptor {
    /// Validates and builds a vector descriptor.
    ///
    /// The family must be the scalar's vector prefix, every component must be a Rust
    /// identifier, and there must be 2 to 4 of them. Components must stay distinct
    /// once uppercased (they name `UNIT_*` constants) and no two component
    /// sequences may concatenate to the same swizzle name.
    pub fn new<I, S>(family: &str, scalar: ScalarType, components: I) -> Result<Self, GenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_ident(family)?;
        check_family(family, scalar, scalar.vector_prefix())?;
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        if !VECTOR_SIZES.contains(&components.len()) {
            return Err(GenError::ComponentCount {
                family: family.to_owned(),
                count: components.len(),
            });
        }
        for (i, name) in components.iter().enumerate() {
            check_ident(name)?;
            let upper = name.to_uppercase();
            if components[..i].iter().any(|prev| prev.to_uppercase() == upper) {
                return Err(GenError::DuplicateComponent(name.clone()));
            }
        }
        check_swizzle_names(&components)?;
        Ok(Self {
            family: family.to_owned(),
            scalar,
            components,
        })
    }

    /// Family prefix, e.g. `vec`.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Scalar element type.
    pub fn scalar(&self) -> ScalarType {
        self.scalar
    }

    /// Component names in declaration order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Number of components.
    pub fn size(&self) -> usize {
        self.components.len()
    }

    /// Artifact name, e.g. `ivec3`.
    pub fn artifact_name(&self) -> String {
        conventions::vector_artifact(&self.family, self.size())
    }

    /// Generated type name, e.g. `IVec3`.
    pub fn type_name(&self) -> String {
        conventions::vector_type(&self.family, self.size())
    }

    /// Type name of the same-family vector with `n` components.
    pub fn sibling_type(&self, n: usize) -> String {
        conventions::vector_type(&self.family, n)
    }
}

/// Input to one [`MatrixGenerator`](crate::matrix::MatrixGenerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixDescriptor {
    family: String,
    scalar: ScalarType,
    rows: usize,
    cols: usize,
}

impl MatrixDescriptor {
    /// Validates and builds a matrix descriptor.
    ///
    /// The family must be the scalar's matrix prefix; integers have none.
    pub fn new(
        family: &str,
        scalar: ScalarType,
        rows: usize,
        cols: usize,
    ) -> Result<Self, GenError> {
        check_ident(family)?;
        let Some(expected) = scalar.matrix_prefix() else {
            return Err(GenError::UnsupportedMatrixScalar(scalar.name()));
        };
        check_family(family, scalar, expected)?;
        if !MATRIX_SIZES.contains(&rows) || !MATRIX_SIZES.contains(&cols) {
            return Err(GenError::MatrixDimensions {
                family: family.to_owned(),
                rows,
                cols,
            });
        }
        Ok(Self {
            family: family.to_owned(),
            scalar,
            rows,
            cols,
        })
    }

    /// Family prefix, e.g. `dmat`.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Scalar element type.
    pub fn scalar(&self) -> ScalarType {
        self.scalar
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` when rows equal columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Artifact name, e.g. `mat2x3`.
    pub fn artifact_name(&self) -> String {
        conventions::matrix_artifact(&self.family, self.rows, self.cols)
    }

    /// Generated type name, e.g. `Mat2x3`.
    pub fn type_name(&self) -> String {
        conventions::matrix_type(&self.family, self.rows, self.cols)
    }

    /// Type name of a same-family matrix with other dimensions.
    pub fn sibling_type(&self, rows: usize, cols: usize) -> String {
        conventions::matrix_type(&self.family, rows, cols)
    }

    /// Type name of the scalar's vector with `n` components.
    pub fn vector_type(&self, n: usize) -> String {
        conventions::vector_type(self.scalar.vector_prefix(), n)
    }
}

fn check_ident(name: &str) -> Result<(), GenError> {
    // Parsing as `syn::Ident` also rejects keywords.
    syn::parse_str::<syn::Ident>(name)
        .map(|_| ())
        .map_err(|_| GenError::InvalidIdentifier(name.to_owned()))
}

fn check_family(family: &str, scalar: ScalarType, expected: &'static str) -> Result<(), GenError> {
    // Cross-scalar conversions and row vectors are named from the scalar's prefix.
    if family == expected {
        Ok(())
    } else {
        Err(GenError::FamilyMismatch {
            family: family.to_owned(),
            scalar: scalar.name(),
            expected,
        })
    }
}

/// Every index sequence of length `1..=n` must spell a distinct accessor name.
fn check_swizzle_names(components: &[String]) -> Result<(), GenError> {
    let mut seen: HashSet<String> = components.iter().cloned().collect();
    for entry in swizzles(components.len()) {
        let name = entry.name(components);
        if !seen.insert(name.clone()) {
            return Err(GenError::AmbiguousSwizzle(name));
        }
    }
    Ok(())
}
