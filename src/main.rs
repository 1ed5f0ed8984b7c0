//! mtl-shader-gen CLI.
//!
//! # Usage
//!
//! ```bash
//! # Regenerate every artifact
//! mtl-shader-gen
//!
//! # Dependency lists for the build orchestrator (touches no files)
//! mtl-shader-gen inputs
//! mtl-shader-gen outputs
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use mtl_shader_gen::sources;

/// Generates the Metal backend's pixel-format enum and combined internal
/// shader source.
#[derive(Parser)]
#[command(name = "mtl-shader-gen")]
#[command(about = "Generates the Metal backend's internal shader artifacts")]
#[command(version)]
struct Cli {
    /// Print a declared file list instead of generating
    #[arg(value_enum)]
    query: Option<QueryMode>,

    /// Directory holding the shader fragments and the format table
    /// (defaults to the shaders/ directory next to this crate)
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// Directory the artifacts are written to (defaults to the source
    /// directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Root the bundled llvm-build toolchain lives under
    #[arg(long)]
    third_party_dir: Option<PathBuf>,

    /// Explicit compiler to use instead of searching for one
    #[arg(long)]
    compiler: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum QueryMode {
    /// Every file the generation pipeline reads
    Inputs,
    /// Every file the generation pipeline writes
    Outputs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Query mode short-circuits everything else and must not touch any
    // file, so it runs before logging or path setup.
    if let Some(query) = cli.query {
        match query {
            QueryMode::Inputs => println!("{}", sources::declared_inputs()),
            QueryMode::Outputs => println!("{}", sources::declared_outputs()),
        }
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let source_dir = cli
        .source_dir
        .unwrap_or_else(|| manifest_dir().join("shaders"));
    let out_dir = cli.out_dir.unwrap_or_else(|| source_dir.clone());
    let third_party_dir = cli
        .third_party_dir
        .unwrap_or_else(|| manifest_dir().join("third_party"));

    mtl_shader_gen::generate(
        &source_dir,
        &out_dir,
        &third_party_dir,
        cli.compiler.as_deref(),
    )?;

    tracing::info!("Generation complete");
    Ok(())
}

fn manifest_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}
