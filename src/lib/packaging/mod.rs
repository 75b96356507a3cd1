//! The release packaging pipeline of the `pack` target
//!
//! The platforms of the matrix are processed one after the other, in matrix order:
//! the compiler is invoked with the release flags and an output inside the artifact
//! directory of the platform, the assets are copied next to the binary, and the
//! directory is archived. Whatever was written for the platforms processed before a
//! failure stays on disk. Artifact directories are never purged, so only the
//! binary and the assets are refreshed on a re-run.
pub mod archive;

use std::path::{Path, PathBuf};

use color_eyre::{eyre::Context, Result};

use crate::cli::output::executors::{self, Invoker};
use crate::domain::commands::command_lines::{CompilerCommand, Verb};
use crate::domain::flags::FlagSet;
use crate::domain::platform::PlatformEntry;
use crate::error::BuildError;
use crate::utils;

pub const TAR_GZ_EXTENSION: &str = "tar.gz";
pub const ZIP_EXTENSION: &str = "zip";

/// Everything the packaging pipeline reads
#[derive(Debug, Clone, Copy)]
pub struct PackContext<'a> {
    pub driver: &'a Path,
    pub source_root: &'a Path,
    pub project_root: &'a Path,
    pub output_dir: &'a Path,
    pub program: &'a str,
    pub version: &'a str,
    pub flags: &'a FlagSet,
    pub assets: &'a [String],
    pub platforms: &'a [PlatformEntry],
}

/// What was produced for a single platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPlatform {
    pub identifier: String,
    pub artifact_dir: PathBuf,
    pub archives: Vec<PathBuf>,
}

/// Runs the whole packaging pipeline, stopping at the first failing platform
pub fn package<I: Invoker>(ctx: &PackContext<'_>, invoker: &mut I) -> Result<Vec<PackedPlatform>> {
    log::info!(
        "Packaging {} v{} for {} platforms",
        ctx.program,
        ctx.version,
        ctx.platforms.len()
    );

    ctx.platforms
        .iter()
        .map(|platform| {
            package_platform(ctx, platform, invoker)
                .with_context(|| format!("Failed to package {platform}"))
        })
        .collect()
}

fn package_platform<I: Invoker>(
    ctx: &PackContext<'_>,
    platform: &PlatformEntry,
    invoker: &mut I,
) -> Result<PackedPlatform> {
    let artifact_dir = ctx.output_dir.join(&platform.identifier);
    utils::fs::create_directory(&artifact_dir)?;

    let command = CompilerCommand::new(
        ctx.driver,
        Verb::Build,
        ctx.source_root,
        ctx.flags,
        artifact_dir.join(platform.binary_name(ctx.program)),
    );
    executors::run_compiler(invoker, &command)?;

    copy_assets(ctx, platform, &artifact_dir)?;

    let mut archives = Vec::with_capacity(2);

    let tar_gz = ctx
        .output_dir
        .join(platform.archive_name(ctx.version, TAR_GZ_EXTENSION));
    archive::write_tar_gz(&artifact_dir, &tar_gz)?;
    archives.push(tar_gz);

    if platform.zip {
        let zip = ctx
            .output_dir
            .join(platform.archive_name(ctx.version, ZIP_EXTENSION));
        archive::write_zip(&artifact_dir, &zip)?;
        archives.push(zip);
    }

    log::info!("Packaged {platform} into {archives:?}");

    Ok(PackedPlatform {
        identifier: platform.identifier.clone(),
        artifact_dir,
        archives,
    })
}

fn copy_assets(ctx: &PackContext<'_>, platform: &PlatformEntry, artifact_dir: &Path) -> Result<()> {
    for asset in ctx.assets {
        let source = ctx.project_root.join(asset);
        if !source.is_file() {
            return Err(BuildError::AssetMissing {
                asset: source,
                platform: platform.identifier.clone(),
            }
            .into());
        }

        let dest = artifact_dir.join(asset);
        if let Some(parent) = dest.parent() {
            utils::fs::create_directory(parent)?;
        }

        log::debug!("Copying {asset} into {artifact_dir:?}");
        utils::fs::copy_file(&source, &dest)?;
    }

    Ok(())
}
