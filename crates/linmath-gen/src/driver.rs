// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The standard descriptor set and the registry built from it.

use tracing::info;

use crate::artifact::GeneratedArtifact;
use crate::config::GenConfig;
use crate::conventions::{ScalarType, COMPONENTS};
use crate::descriptor::{MatrixDescriptor, VectorDescriptor, MATRIX_SIZES, VECTOR_SIZES};
use crate::error::GenError;
use crate::manifest::Manifest;
use crate::matrix::MatrixGenerator;
use crate::registry::Registry;
use crate::sink::FsSink;
use crate::vector::VectorGenerator;

/// Scalar types that get vector families, in registration order.
pub const VECTOR_SCALARS: [ScalarType; 3] =
    [ScalarType::Float, ScalarType::Int, ScalarType::Double];

/// Scalar types that get matrix families, in registration order.
pub const MATRIX_SCALARS: [ScalarType; 2] = [ScalarType::Float, ScalarType::Double];

/// Vector descriptors: every family in [`VECTOR_SCALARS`] at every size, using the
/// first `n` of [`COMPONENTS`].
pub fn vector_descriptors() -> Result<Vec<VectorDescriptor>, GenError> {
    let mut out = Vec::new();
    for scalar in VECTOR_SCALARS {
        for n in VECTOR_SIZES {
            out.push(VectorDescriptor::new(
                scalar.vector_prefix(),
                scalar,
                COMPONENTS[..n].iter().copied(),
            )?);
        }
    }
    Ok(out)
}

/// Matrix descriptors: every family in [`MATRIX_SCALARS`], rows then columns.
pub fn matrix_descriptors() -> Result<Vec<MatrixDescriptor>, GenError> {
    let mut out = Vec::new();
    for scalar in MATRIX_SCALARS {
        let family = scalar
            .matrix_prefix()
            .ok_or_else(|| GenError::UnsupportedMatrixScalar(scalar.name()))?;
        for rows in MATRIX_SIZES {
            for cols in MATRIX_SIZES {
                out.push(MatrixDescriptor::new(family, scalar, rows, cols)?);
            }
        }
    }
    Ok(out)
}

/// Registry holding every standard generator: vectors first, then matrices.
///
/// Descriptor errors surface here, before anything is generated.
pub fn standard_registry() -> Result<Registry, GenError> {
    let mut registry = Registry::new();
    for desc in vector_descriptors()? {
        registry.register(VectorGenerator::new(desc))?;
    }
    for desc in matrix_descriptors()? {
        registry.register(MatrixGenerator::new(desc))?;
    }
    info!(generators = registry.len(), "built standard registry");
    Ok(registry)
}

/// Full rebuild into `config.out_dir`: every standard artifact, then the manifest.
pub fn run(config: &GenConfig) -> Result<Vec<GeneratedArtifact>, GenError> {
    let registry = standard_registry()?;
    let mut sink = FsSink::new(&config.out_dir);
    let artifacts = registry.run_all(&mut sink, config.run_options())?;
    if config.write_manifest {
        Manifest::from_artifacts(&artifacts).write(&sink)?;
    }
    Ok(artifacts)
}
