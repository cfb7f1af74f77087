// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for descriptor validation, generation, and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by `linmath-gen`.
///
/// Descriptor variants are raised while the driver builds the registry, i.e. before
/// anything is generated or written. The remaining variants abort a run at the point
/// they occur; nothing is retried.
#[derive(Debug, Error)]
pub enum GenError {
    /// Scalar type name outside the supported set.
    #[error("unknown scalar type `{0}` (expected one of: int, float, double)")]
    UnknownScalar(String),

    /// Vector descriptor with a component count outside `2..=4`.
    #[error("vector family `{family}` has {count} components; expected 2 to 4")]
    ComponentCount {
        /// Family name of the offending descriptor.
        family: String,
        /// Number of components supplied.
        count: usize,
    },

    /// Family or component name that is not a plain Rust identifier.
    #[error("`{0}` is not a valid Rust identifier")]
    InvalidIdentifier(String),

    /// Component name listed twice in one descriptor.
    #[error("component `{0}` appears more than once")]
    DuplicateComponent(String),

    /// Two distinct component sequences spell the same accessor name.
    #[error("components concatenate ambiguously: `{0}` names more than one swizzle")]
    AmbiguousSwizzle(String),

    /// Family prefix that does not belong to the descriptor's scalar type.
    #[error("family `{family}` does not match scalar type `{scalar}`; expected `{expected}`")]
    FamilyMismatch {
        /// Family name of the offending descriptor.
        family: String,
        /// Scalar type of the descriptor.
        scalar: &'static str,
        /// Family the scalar type generates under.
        expected: &'static str,
    },

    /// Matrix descriptor with rows or columns outside `2..=4`.
    #[error("matrix family `{family}` has dimensions {rows}x{cols}; expected 2 to 4 each")]
    MatrixDimensions {
        /// Family name of the offending descriptor.
        family: String,
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Matrix descriptor over a scalar type without a matrix family.
    #[error("scalar type `{0}` has no matrix family")]
    UnsupportedMatrixScalar(&'static str),

    /// Two generators would write the same artifact.
    #[error("artifact `{0}` is registered twice")]
    DuplicateArtifact(String),

    /// A generator produced text that does not parse as Rust.
    #[error("artifact `{name}` is not valid Rust: {source}")]
    Syntax {
        /// Artifact name.
        name: String,
        /// Parser diagnostic.
        #[source]
        source: syn::Error,
    },

    /// Filesystem failure while reading or writing artifacts.
    #[error("i/o error at `{}`: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON config or manifest.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
