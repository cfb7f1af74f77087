// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Source generator for fixed-size vector and matrix types.
//!
//! Descriptors ([`VectorDescriptor`], [`MatrixDescriptor`]) feed generators that
//! write Rust into an [`EmissionBuffer`]. A [`Registry`] runs the generators in
//! registration order and hands the materialized [`GeneratedArtifact`]s to an
//! [`ArtifactSink`]. [`driver::standard_registry`] builds the full set shipped by the
//! `linmath` crate.

pub mod artifact;
pub mod config;
pub mod conventions;
pub mod descriptor;
pub mod driver;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod matrix;
pub mod registry;
pub mod sink;
pub mod vector;

pub use artifact::GeneratedArtifact;
pub use config::GenConfig;
pub use conventions::{ConversionEdge, ConversionKind, ScalarType};
pub use descriptor::{MatrixDescriptor, VectorDescriptor};
pub use emit::EmissionBuffer;
pub use error::GenError;
pub use manifest::{Manifest, ManifestEntry, MANIFEST_FILE};
pub use matrix::MatrixGenerator;
pub use registry::{Generator, Registry, RunOptions};
pub use sink::{ArtifactSink, FsSink, MemorySink};
pub use vector::{SwizzleEntry, VectorGenerator};
