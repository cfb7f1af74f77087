// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered collection of generators and the batch run over them.
//!
//! The registry is an explicit value handed to the driver rather than a global
//! list: registration order is invocation and persistence order, and a fresh
//! registry starts every run empty.

use tracing::{debug, info};

use crate::artifact::GeneratedArtifact;
use crate::emit::EmissionBuffer;
use crate::error::GenError;
use crate::sink::ArtifactSink;

/// A component that emits exactly one artifact.
pub trait Generator {
    /// Deterministic artifact name derived from the descriptor.
    fn artifact_name(&self) -> String;

    /// Emits the artifact into a fresh buffer.
    ///
    /// Takes `&self` so two calls cannot observe each other; output is byte-identical
    /// across calls.
    fn generate(&self) -> Result<EmissionBuffer, GenError>;
}

/// Post-processing applied to each materialized artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Parse every artifact with `syn` and fail the run on the first error.
    pub verify_syntax: bool,
    /// Re-render every artifact with `prettyplease`.
    pub pretty: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            verify_syntax: true,
            pretty: false,
        }
    }
}

/// Ordered list of generators.
#[derive(Default)]
pub struct Registry {
    generators: Vec<Box<dyn Generator>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a generator; its artifact name must not already be registered.
    pub fn register(&mut self, generator: impl Generator + 'static) -> Result<(), GenError> {
        let name = generator.artifact_name();
        if self.generators.iter().any(|g| g.artifact_name() == name) {
            return Err(GenError::DuplicateArtifact(name));
        }
        debug!(artifact = %name, position = self.generators.len(), "registered generator");
        self.generators.push(Box::new(generator));
        Ok(())
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Artifact names in registration order.
    pub fn artifact_names(&self) -> Vec<String> {
        self.generators.iter().map(|g| g.artifact_name()).collect()
    }

    /// Runs every generator once and materializes the results.
    ///
    /// Stops at the first failing generator; no artifact is returned in that case.
    pub fn generate_all(&self, options: RunOptions) -> Result<Vec<GeneratedArtifact>, GenError> {
        let mut artifacts = Vec::with_capacity(self.generators.len());
        for generator in &self.generators {
            let name = generator.artifact_name();
            let buffer = generator.generate()?;
            let mut artifact = GeneratedArtifact::new(name, buffer.materialize());
            if options.pretty {
                artifact = artifact.prettified()?;
            } else if options.verify_syntax {
                artifact.verify_syntax()?;
            }
            debug!(
                artifact = artifact.name(),
                fragments = buffer.len(),
                bytes = artifact.text().len(),
                "generated"
            );
            artifacts.push(artifact);
        }
        Ok(artifacts)
    }

    /// Generates everything, then persists each artifact through `sink` in order.
    ///
    /// Nothing reaches the sink unless every generator succeeded.
    pub fn run_all<S>(
        &self,
        sink: &mut S,
        options: RunOptions,
    ) -> Result<Vec<GeneratedArtifact>, GenError>
    where
        S: ArtifactSink + ?Sized,
    {
        let artifacts = self.generate_all(options)?;
        for artifact in &artifacts {
            sink.persist(artifact)?;
        }
        info!(count = artifacts.len(), "persisted artifacts");
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::sink::MemorySink;

    struct Fixed(&'static str, &'static str);

    impl Generator for Fixed {
        fn artifact_name(&self) -> String {
            self.0.to_owned()
        }

        fn generate(&self) -> Result<EmissionBuffer, GenError> {
            let mut buf = EmissionBuffer::new();
            buf.write_line(self.1);
            Ok(buf)
        }
    }

    struct Failing;

    impl Generator for Failing {
        fn artifact_name(&self) -> String {
            "failing".to_owned()
        }

        fn generate(&self) -> Result<EmissionBuffer, GenError> {
            Err(GenError::UnknownScalar("quad".to_owned()))
        }
    }

    #[test]
    fn runs_in_registration_order() {
        let mut registry = Registry::new();
        registry.register(Fixed("second", "pub struct B;")).unwrap();
        registry.register(Fixed("first", "pub struct A;")).unwrap();
        let mut sink = MemorySink::new();
        registry.run_all(&mut sink, RunOptions::default()).unwrap();
        let names: Vec<_> = sink
            .artifacts()
            .iter()
            .map(GeneratedArtifact::name)
            .collect();
        assert_eq!(names, ["second", "first"]);
        assert_eq!(registry.artifact_names(), ["second", "first"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = Registry::new();
        registry.register(Fixed("vec2", "pub struct A;")).unwrap();
        let err = registry.register(Fixed("vec2", "pub struct B;")).unwrap_err();
        assert!(matches!(err, GenError::DuplicateArtifact(name) if name == "vec2"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn one_failure_stops_the_batch_before_persisting() {
        let mut registry = Registry::new();
        registry.register(Fixed("ok", "pub struct A;")).unwrap();
        registry.register(Failing).unwrap();
        let mut sink = MemorySink::new();
        assert!(registry.run_all(&mut sink, RunOptions::default()).is_err());
        assert!(sink.artifacts().is_empty());
    }

    #[test]
    fn invalid_rust_fails_verification() {
        let mut registry = Registry::new();
        registry.register(Fixed("bad", "pub struct {")).unwrap();
        let err = registry.generate_all(RunOptions::default()).unwrap_err();
        assert!(matches!(err, GenError::Syntax { .. }));

        let lenient = RunOptions {
            verify_syntax: false,
            pretty: false,
        };
        assert_eq!(registry.generate_all(lenient).unwrap().len(), 1);
    }
}
