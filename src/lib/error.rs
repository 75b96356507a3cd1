//! The failures that the build orchestration reports to the operator
//!
//! Every fallible step of the program returns a [`color_eyre::Report`]. The failures
//! that callers (and tests) need to tell apart are raised as a [`BuildError`] and wrapped
//! in the report, so they can be recovered with [`color_eyre::Report::downcast_ref`].

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Could not find `{program}` on the system path. {guidance}")]
    ToolchainMissing {
        program: String,
        guidance: &'static str,
    },

    #[error("Unknown build target: {name}\n{listing}")]
    UnknownTarget { name: String, listing: String },

    #[error("Missing asset {asset:?} while packaging {platform}")]
    AssetMissing { asset: PathBuf, platform: String },

    #[error("The compiler exited with {status} running: {command}")]
    CompilerFailure { command: String, status: ExitStatus },

    #[error("The formatter exited with {status} on {file:?}")]
    FormatterFailure { file: PathBuf, status: ExitStatus },

    #[error("The platform {identifier} is declared more than once in the packaging matrix")]
    DuplicatePlatform { identifier: String },
}
