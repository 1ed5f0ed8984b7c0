//! Combining shader fragments through real macro preprocessing.
//!
//! The fragments are concatenated by writing one `#include` per fragment
//! into a temporary aggregate file and running the compiler in
//! preprocess-only mode, so macros expand exactly as a later compilation
//! stage would see them. Directives the fragment authors protect with the
//! `@@` sentinel survive preprocessing verbatim and the sentinel is
//! stripped afterwards.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::toolchain::ToolchainHandle;

/// Marker fragment authors place inside directives that must reach the
/// final output unexpanded (e.g. `#@@include` left for a later stage).
pub const SENTINEL: &str = "@@";

/// Temporary aggregate filename, written next to the fragments so their
/// quoted includes resolve without extra include paths.
pub const AGGREGATE_FILE: &str = "temp_master_source.metal";

/// Narrow seam over the preprocess-only compiler invocation so tests can
/// substitute a fake without a real toolchain installed.
pub trait Preprocessor {
    /// Preprocess `aggregate` and return the expanded text. A nonzero
    /// compiler exit is an error carrying the captured diagnostics.
    fn preprocess(&self, aggregate: &Path) -> Result<String>;
}

/// Runs the resolved clang in preprocess-only mode, capturing stdout.
pub struct ClangPreprocessor {
    handle: ToolchainHandle,
}

impl ClangPreprocessor {
    pub fn new(handle: ToolchainHandle) -> Self {
        Self { handle }
    }
}

impl Preprocessor for ClangPreprocessor {
    fn preprocess(&self, aggregate: &Path) -> Result<String> {
        let mut cmd = Command::new(&self.handle.compiler);
        if self.handle.strategy.force_cxx {
            cmd.arg("-xc++");
        }
        cmd.arg("-E").arg(aggregate);

        // Blocks until the compiler returns; there is no timeout.
        let output = cmd
            .output()
            .with_context(|| format!("Failed to run {}", self.handle.compiler.display()))?;

        if !output.status.success() {
            bail!(
                "Preprocessing failed (exit code: {}):\n{}",
                output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Combine `fragments`, in order, into one preprocessed source text.
///
/// Fragments are never deduplicated or reordered; a fragment listed twice
/// contributes its content twice, in place. The aggregate file is removed
/// once the combined text is captured; a failed preprocessor run leaves it
/// behind.
pub fn combine_fragments(
    source_dir: &Path,
    fragments: &[&str],
    preprocessor: &dyn Preprocessor,
) -> Result<String> {
    let aggregate = source_dir.join(AGGREGATE_FILE);

    let mut includes = String::new();
    for fragment in fragments {
        includes.push_str("#include \"");
        includes.push_str(fragment);
        includes.push_str("\" \n");
    }
    std::fs::write(&aggregate, includes)
        .with_context(|| format!("Failed to write {}", aggregate.display()))?;

    let combined = preprocessor.preprocess(&aggregate)?;
    let combined = combined.replace(SENTINEL, "");

    std::fs::remove_file(&aggregate)
        .with_context(|| format!("Failed to remove {}", aggregate.display()))?;

    Ok(combined)
}
