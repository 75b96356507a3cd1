//! Writes the compressed archives of an artifact directory
//!
//! Both formats store the entries relative to the parent of the archived directory,
//! so extracting any of them yields a single top level directory named like it.

use std::fs::File;
use std::io;
use std::path::Path;

use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use flate2::{write::GzEncoder, Compression};
use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

/// Creates (or replaces) the gzip compressed tarball *dest* holding the whole *dir*
pub fn write_tar_gz(dir: &Path, dest: &Path) -> Result<()> {
    let root_name = dir
        .file_name()
        .ok_or_else(|| eyre!("Can't archive a directory without name: {dir:?}"))?;

    let file = File::create(dest).with_context(|| format!("Could not create {dest:?}"))?;
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

    builder
        .append_dir_all(root_name, dir)
        .with_context(|| format!("Could not add {dir:?} to {dest:?}"))?;

    builder
        .into_inner()
        .and_then(|encoder| encoder.finish())
        .with_context(|| format!("Could not finish the archive {dest:?}"))?;

    log::debug!("Written {dest:?}");
    Ok(())
}

/// Creates (or replaces) the DEFLATE compressed zip archive *dest* holding the whole *dir*
pub fn write_zip(dir: &Path, dest: &Path) -> Result<()> {
    let base = dir
        .parent()
        .ok_or_else(|| eyre!("Can't archive a directory without parent: {dir:?}"))?;

    let file = File::create(dest).with_context(|| format!("Could not create {dest:?}"))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Could not walk {dir:?}"))?;
        let path = entry.path();
        let name = path
            .strip_prefix(base)
            .with_context(|| format!("{path:?} is not below {base:?}"))?
            .to_string_lossy()
            .replace('\\', "/");

        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name, with_permissions(options, &entry)?)?;
            let mut source = File::open(path).with_context(|| format!("Could not open {path:?}"))?;
            io::copy(&mut source, &mut zip)
                .with_context(|| format!("Could not add {path:?} to {dest:?}"))?;
        }
    }

    zip.finish()
        .with_context(|| format!("Could not finish the archive {dest:?}"))?;

    log::debug!("Written {dest:?}");
    Ok(())
}

#[cfg(unix)]
fn with_permissions(options: FileOptions, entry: &walkdir::DirEntry) -> Result<FileOptions> {
    use std::os::unix::fs::PermissionsExt;
    let mode = entry.metadata()?.permissions().mode();
    Ok(options.unix_permissions(mode))
}

#[cfg(not(unix))]
fn with_permissions(options: FileOptions, _entry: &walkdir::DirEntry) -> Result<FileOptions> {
    Ok(options)
}
