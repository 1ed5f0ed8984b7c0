//! mtl-shader-gen - build-time generator for the Metal backend's internal
//! shaders.
//!
//! Produces the pixel-format enum header and the combined internal shader
//! source (embedded string constant plus a standalone `.metal` copy) that
//! the backend compiles in. The build orchestrator runs the binary with no
//! arguments to regenerate everything, or with `inputs` / `outputs` to read
//! the declared dependency lists without generating anything.
//!
//! Every invocation regenerates all artifacts from scratch; there is no
//! caching and no partial regeneration.

pub mod combine;
pub mod emit;
pub mod formats;
pub mod sources;
pub mod toolchain;

use anyhow::Result;
use std::path::Path;

use combine::Preprocessor;

/// Run the full generation pipeline, resolving a real toolchain.
///
/// `source_dir` holds the format table and the shader fragments;
/// `third_party_dir` is the root a bundled toolchain would live under.
pub fn generate(
    source_dir: &Path,
    out_dir: &Path,
    third_party_dir: &Path,
    compiler_override: Option<&Path>,
) -> Result<()> {
    let enum_code = render_format_enum(source_dir)?;

    let handle = toolchain::resolve(toolchain::host_strategy(), third_party_dir, compiler_override)?;
    let preprocessor = combine::ClangPreprocessor::new(handle);

    combine_and_emit(source_dir, out_dir, &enum_code, &preprocessor)
}

/// Same pipeline with a caller-supplied preprocessor.
///
/// This is the seam tests use to run the pipeline without a toolchain.
pub fn generate_with(
    source_dir: &Path,
    out_dir: &Path,
    preprocessor: &dyn Preprocessor,
) -> Result<()> {
    let enum_code = render_format_enum(source_dir)?;
    combine_and_emit(source_dir, out_dir, &enum_code, preprocessor)
}

fn render_format_enum(source_dir: &Path) -> Result<String> {
    let table_path = source_dir.join(sources::FORMAT_TABLE);
    let formats = formats::load_format_table(&table_path)?;
    tracing::info!("Loaded {} formats from {}", formats.len(), table_path.display());
    Ok(formats::generate_format_enum(&formats))
}

// Artifact writes come after every fallible step, so a failed run leaves
// no output file behind.
fn combine_and_emit(
    source_dir: &Path,
    out_dir: &Path,
    enum_code: &str,
    preprocessor: &dyn Preprocessor,
) -> Result<()> {
    let combined = combine::combine_fragments(source_dir, sources::SHADER_FRAGMENTS, preprocessor)?;
    tracing::info!("Combined {} shader fragments", sources::SHADER_FRAGMENTS.len());

    emit::write_enum_header(out_dir, enum_code)?;
    emit::write_embedded_source(out_dir, &combined)?;
    emit::write_standalone_source(out_dir, &combined)?;
    Ok(())
}
