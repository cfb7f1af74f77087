// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generates every vector and matrix module into `OUT_DIR`.

#![allow(clippy::print_stdout)]

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use linmath_gen::{driver, GenConfig};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR not set")?);
    let config = GenConfig {
        out_dir,
        write_manifest: false,
        ..GenConfig::default()
    };
    driver::run(&config).context("generating linmath artifacts")?;
    Ok(())
}
