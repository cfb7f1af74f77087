// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `manifest.json`: what a run wrote, with content digests.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::artifact::GeneratedArtifact;
use crate::error::GenError;
use crate::sink::FsSink;

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// One persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Artifact name.
    pub name: String,
    /// File name relative to the output directory.
    pub file: String,
    /// Size of the file in bytes.
    pub bytes: usize,
    /// BLAKE3 digest of the file, lowercase hex.
    pub blake3: String,
}

impl From<&GeneratedArtifact> for ManifestEntry {
    fn from(artifact: &GeneratedArtifact) -> Self {
        Self {
            name: artifact.name().to_owned(),
            file: artifact.file_name(),
            bytes: artifact.text().len(),
            blake3: artifact.digest(),
        }
    }
}

/// Record of a complete run, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Generator crate name.
    pub generator: String,
    /// Generator crate version.
    pub version: String,
    /// Artifacts written.
    pub artifacts: Vec<ManifestEntry>,
}

impl Manifest {
    /// Builds a manifest stamped with this crate's name and version.
    pub fn from_artifacts(artifacts: &[GeneratedArtifact]) -> Self {
        Self {
            generator: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            artifacts: artifacts.iter().map(ManifestEntry::from).collect(),
        }
    }

    /// Writes the manifest as pretty JSON into the sink's root.
    pub fn write(&self, sink: &FsSink) -> Result<(), GenError> {
        let mut json = serde_json::to_vec_pretty(self)?;
        json.push(b'\n');
        let path = sink.root().join(MANIFEST_FILE);
        sink.write_atomic(&path, &json)?;
        info!(path = %path.display(), artifacts = self.artifacts.len(), "wrote manifest");
        Ok(())
    }

    /// Reads `manifest.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, GenError> {
        let path = dir.join(MANIFEST_FILE);
        let bytes = fs::read(&path).map_err(|e| GenError::io(&path, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `true` when `dir` holds a manifest whose entries describe `artifacts`.
    ///
    /// A missing manifest is out of date; an unreadable or malformed one is an error.
    pub fn is_current(dir: &Path, artifacts: &[GeneratedArtifact]) -> Result<bool, GenError> {
        let loaded = match Self::load(dir) {
            Ok(manifest) => manifest,
            Err(GenError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        Ok(loaded.artifacts == Self::from_artifacts(artifacts).artifacts)
    }
}
