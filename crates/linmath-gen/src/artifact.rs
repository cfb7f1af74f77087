// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Materialized generator output.

use crate::error::GenError;

/// One generator's complete output: a name and the Rust source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    name: String,
    text: String,
}

impl GeneratedArtifact {
    /// Wraps materialized text under `name`.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Artifact name, e.g. `vec3`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// File name the artifact is persisted under.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name)
    }

    /// BLAKE3 digest of the text, lowercase hex.
    pub fn digest(&self) -> String {
        blake3::hash(self.text.as_bytes()).to_hex().to_string()
    }

    /// Parses the text as a Rust file.
    pub fn verify_syntax(&self) -> Result<syn::File, GenError> {
        syn::parse_file(&self.text).map_err(|source| GenError::Syntax {
            name: self.name.clone(),
            source,
        })
    }

    /// Re-renders the text with `prettyplease`.
    ///
    /// Plain `//` comments do not survive; doc comments do.
    pub fn prettified(&self) -> Result<Self, GenError> {
        let file = self.verify_syntax()?;
        Ok(Self::new(self.name.clone(), prettyplease::unparse(&file)))
    }
}
