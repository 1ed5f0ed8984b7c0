//! Final artifact emission with generated-file boilerplate.

use anyhow::{Context, Result};
use std::path::Path;

use crate::sources::{EMBEDDED_SOURCE, ENUM_HEADER, STANDALONE_SOURCE};

/// Symbol the embedded artifact binds the combined source to.
pub const EMBED_SYMBOL: &str = "gInternalShadersSrc";

/// Header comment prepended to every generated artifact.
pub fn boilerplate() -> String {
    format!(
        "// GENERATED FILE - DO NOT EDIT.\n\
         // Generated by {}.\n\
         //\n\
         // Copyright 2026 the project authors. Licensed MIT OR Apache-2.0.\n\
         //\n",
        env!("CARGO_PKG_NAME")
    )
}

/// Write the pixel-format enum header.
pub fn write_enum_header(out_dir: &Path, enum_code: &str) -> Result<()> {
    let path = out_dir.join(ENUM_HEADER);
    let mut contents = boilerplate();
    contents.push_str(enum_code);

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Write the combined source as a raw string literal, ready for direct
/// inclusion into the backend's compiled unit.
pub fn write_embedded_source(out_dir: &Path, combined: &str) -> Result<()> {
    let path = out_dir.join(EMBEDDED_SOURCE);
    let mut contents = boilerplate();
    contents.push('\n');
    contents.push_str("// String embedding of the combined internal shader source.\n\n");
    contents.push_str("\n\nstatic char ");
    contents.push_str(EMBED_SYMBOL);
    contents.push_str("[] = R\"(\n");
    contents.push_str(combined);
    contents.push_str("\n)\";\n");

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Write the combined source unwrapped, for direct tooling consumption.
pub fn write_standalone_source(out_dir: &Path, combined: &str) -> Result<()> {
    let path = out_dir.join(STANDALONE_SOURCE);
    let mut contents = boilerplate();
    contents.push('\n');
    contents.push_str("// Combined internal shader source.\n\n");
    contents.push_str(combined);

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
