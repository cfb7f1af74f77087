// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Run configuration loaded from JSON; every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::registry::RunOptions;

/// Generator run settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Directory artifacts are written to.
    pub out_dir: PathBuf,
    /// Parse every artifact with `syn` before writing.
    pub verify_syntax: bool,
    /// Reformat artifacts with `prettyplease`.
    pub pretty: bool,
    /// Write `manifest.json` after the artifacts.
    pub write_manifest: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("generated"),
            verify_syntax: true,
            pretty: false,
            write_manifest: true,
        }
    }
}

impl GenConfig {
    /// Reads a config file.
    pub fn load(path: &Path) -> Result<Self, GenError> {
        let bytes = fs::read(path).map_err(|e| GenError::io(path, e))?;
        Self::from_json(&bytes)
    }

    /// Parses a config from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, GenError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Post-processing options for [`Registry::generate_all`](crate::Registry::generate_all).
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            verify_syntax: self.verify_syntax,
            pretty: self.pretty,
        }
    }
}
