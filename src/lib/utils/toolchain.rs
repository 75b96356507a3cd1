//! Locates the external tools on the system path
//!
//! Probed once, before any target is resolved, so a missing toolchain is reported
//! before the program touches the filesystem.

use std::path::PathBuf;

use color_eyre::Result;

use crate::error::BuildError;

/// Returns the full path of *program*. A *program* that already holds a path
/// separator is checked as given instead of searched on `PATH`
pub fn locate(program: &str, guidance: &'static str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {program} at {path:?}");
            Ok(path)
        }
        Err(e) => {
            log::trace!("Lookup of {program} failed: {e}");
            Err(BuildError::ToolchainMissing {
                program: program.to_string(),
                guidance,
            }
            .into())
        }
    }
}
