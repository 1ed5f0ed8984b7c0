//! Locating a preprocessor-capable clang toolchain.
//!
//! Resolution order: an explicit override, then the bundled `llvm-build`
//! checkout under the third-party directory, then the system binary locator.
//! The bundled copy wins so trees that ship their own toolchain produce the
//! same output on every machine.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Which compiler binary to look for and how it wants the aggregate fed to
/// it, decided once per run from the host platform.
#[derive(Debug, Clone, Copy)]
pub struct ToolchainStrategy {
    /// Compiler binary name searched for in both locations.
    pub binary: &'static str,
    /// clang++ needs `-xc++` to preprocess the aggregate as C++ source;
    /// clang-cl already assumes it.
    pub force_cxx: bool,
}

/// Strategy for the host platform.
pub fn host_strategy() -> ToolchainStrategy {
    if cfg!(windows) {
        ToolchainStrategy {
            binary: "clang-cl.exe",
            force_cxx: false,
        }
    } else {
        ToolchainStrategy {
            binary: "clang++",
            force_cxx: true,
        }
    }
}

/// A resolved compiler executable plus the strategy that selected it.
///
/// Valid only as long as the file keeps existing; nothing is cached across
/// runs.
#[derive(Debug, Clone)]
pub struct ToolchainHandle {
    pub compiler: PathBuf,
    pub strategy: ToolchainStrategy,
}

/// Resolve a usable compiler or fail with a "toolchain not found" error.
pub fn resolve(
    strategy: ToolchainStrategy,
    third_party_dir: &Path,
    override_path: Option<&Path>,
) -> Result<ToolchainHandle> {
    if let Some(path) = override_path {
        if !path.is_file() {
            bail!("toolchain not found: {} does not exist", path.display());
        }
        tracing::debug!("Using compiler override {}", path.display());
        return Ok(ToolchainHandle {
            compiler: path.to_path_buf(),
            strategy,
        });
    }

    let bundled = third_party_dir
        .join("llvm-build")
        .join("Release+Asserts")
        .join("bin")
        .join(strategy.binary);
    if bundled.is_file() {
        tracing::debug!("Using bundled compiler {}", bundled.display());
        return Ok(ToolchainHandle {
            compiler: bundled,
            strategy,
        });
    }

    if let Some(found) = locate_system_binary(strategy.binary) {
        if found.is_file() {
            tracing::debug!("Using system compiler {}", found.display());
            return Ok(ToolchainHandle {
                compiler: found,
                strategy,
            });
        }
    }

    bail!(
        "toolchain not found: no bundled {} under {} and no system copy",
        strategy.binary,
        third_party_dir.display()
    );
}

/// Ask the system binary locator for `binary`.
///
/// A missing or failing locator counts as no result, not an error; the
/// caller decides whether running out of candidates is fatal.
fn locate_system_binary(binary: &str) -> Option<PathBuf> {
    let output = Command::new("xcrun").args(["-f", binary]).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
