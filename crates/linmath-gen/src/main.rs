// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `linmath-gen`: writes the standard vector and matrix artifacts to a directory.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use linmath_gen::{driver, FsSink, GenConfig, Manifest, MANIFEST_FILE};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate linmath vector and matrix types")]
struct Args {
    /// Output directory (overrides the config file; default `generated`)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Compare generated output with the files on disk instead of writing
    #[arg(long, conflicts_with = "list")]
    check: bool,
    /// Print artifact names in registration order and exit
    #[arg(long)]
    list: bool,
    /// Reformat artifacts with prettyplease
    #[arg(long)]
    pretty: bool,
    /// Skip parsing artifacts with syn
    #[arg(long)]
    no_verify: bool,
    /// Do not write manifest.json
    #[arg(long)]
    no_manifest: bool,
}

impl Args {
    fn config(&self) -> Result<GenConfig> {
        let mut config = match &self.config {
            Some(path) => GenConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GenConfig::default(),
        };
        if let Some(dir) = &self.out_dir {
            config.out_dir.clone_from(dir);
        }
        config.pretty |= self.pretty;
        config.verify_syntax &= !self.no_verify;
        config.write_manifest &= !self.no_manifest;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let config = args.config()?;

    if args.list {
        let registry = driver::standard_registry()?;
        let mut out = io::stdout().lock();
        for name in registry.artifact_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    if args.check {
        let registry = driver::standard_registry()?;
        let artifacts = registry.generate_all(config.run_options())?;
        let mut stale = FsSink::new(&config.out_dir)
            .stale(&artifacts)
            .with_context(|| format!("checking {}", config.out_dir.display()))?;
        if config.write_manifest
            && !Manifest::is_current(&config.out_dir, &artifacts)
                .with_context(|| format!("reading {MANIFEST_FILE}"))?
        {
            warn!(path = %config.out_dir.join(MANIFEST_FILE).display(), "manifest is stale");
            stale.push(MANIFEST_FILE.to_owned());
        }
        if !stale.is_empty() {
            bail!(
                "{} artifact(s) out of date in {}: {}",
                stale.len(),
                config.out_dir.display(),
                stale.join(", ")
            );
        }
        info!(count = artifacts.len(), "all artifacts up to date");
        return Ok(());
    }

    let artifacts = driver::run(&config)
        .with_context(|| format!("generating into {}", config.out_dir.display()))?;
    info!(
        count = artifacts.len(),
        out_dir = %config.out_dir.display(),
        "generation complete"
    );
    Ok(())
}
