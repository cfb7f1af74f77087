// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persistence port for generated artifacts.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::artifact::GeneratedArtifact;
use crate::error::GenError;

/// Destination that persists artifacts one at a time.
pub trait ArtifactSink {
    /// Persist one artifact in full, or fail without leaving partial output behind.
    fn persist(&mut self, artifact: &GeneratedArtifact) -> Result<(), GenError>;
}

/// Writes artifacts as `{root}/{name}.rs`.
///
/// Each file is written to a temporary sibling first and then renamed over the
/// target, so readers see either the old file or the complete new one.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create a sink rooted at `root`; the directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an artifact is persisted to.
    pub fn path_for(&self, artifact: &GeneratedArtifact) -> PathBuf {
        self.root.join(artifact.file_name())
    }

    /// Writes `bytes` to `path` through a temporary sibling.
    pub fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<(), GenError> {
        fs::create_dir_all(&self.root).map_err(|e| GenError::io(&self.root, e))?;
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, bytes).map_err(|e| GenError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| GenError::io(path, e))
    }

    /// Names of artifacts whose file is missing or differs from `artifacts`.
    pub fn stale(&self, artifacts: &[GeneratedArtifact]) -> Result<Vec<String>, GenError> {
        let mut stale = Vec::new();
        for artifact in artifacts {
            let path = self.path_for(artifact);
            let current = match fs::read_to_string(&path) {
                Ok(text) => Some(text),
                Err(err) if err.kind() == ErrorKind::NotFound => None,
                Err(err) => return Err(GenError::io(&path, err)),
            };
            if current.as_deref() != Some(artifact.text()) {
                warn!(artifact = artifact.name(), path = %path.display(), "artifact is stale");
                stale.push(artifact.name().to_owned());
            }
        }
        Ok(stale)
    }
}

impl ArtifactSink for FsSink {
    fn persist(&mut self, artifact: &GeneratedArtifact) -> Result<(), GenError> {
        let path = self.path_for(artifact);
        self.write_atomic(&path, artifact.text().as_bytes())?;
        debug!(artifact = artifact.name(), path = %path.display(), "wrote artifact");
        Ok(())
    }
}

/// Keeps persisted artifacts in memory, in persistence order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    artifacts: Vec<GeneratedArtifact>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifacts persisted so far.
    pub fn artifacts(&self) -> &[GeneratedArtifact] {
        &self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn persist(&mut self, artifact: &GeneratedArtifact) -> Result<(), GenError> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn fs_sink_writes_and_detects_staleness() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FsSink::new(dir.path().join("out"));
        let a = GeneratedArtifact::new("vec2", "pub mod vec2 {}\n");
        let b = GeneratedArtifact::new("vec3", "pub mod vec3 {}\n");

        sink.persist(&a).unwrap();
        let written = fs::read_to_string(sink.path_for(&a)).unwrap();
        assert_eq!(written, a.text());
        assert!(!dir.path().join("out/vec2.rs.tmp").exists());

        let stale = sink.stale(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(stale, vec!["vec3".to_owned()]);

        sink.persist(&b).unwrap();
        assert!(sink.stale(&[a, b]).unwrap().is_empty());
    }

    #[test]
    fn memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.persist(&GeneratedArtifact::new("b", "")).unwrap();
        sink.persist(&GeneratedArtifact::new("a", "")).unwrap();
        let names: Vec<_> = sink
            .artifacts()
            .iter()
            .map(GeneratedArtifact::name)
            .collect();
        assert_eq!(names, ["b", "a"]);
    }
}
