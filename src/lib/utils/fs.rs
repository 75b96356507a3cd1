use std::{
    fs::{self, DirBuilder},
    path::Path,
};

use color_eyre::{eyre::Context, Result};

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Copies *from* into *to*, replacing the destination if it already exists
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .with_context(|| format!("Could not copy {from:?} into {to:?}"))
}

pub fn get_project_root_absolute_path(project_root: &Path) -> Result<std::path::PathBuf> {
    let canonical = fs::canonicalize(project_root)
        .with_context(|| format!("Could not resolve the absolute path of {project_root:?}"))?;
    log::debug!("Project root resolved to: {canonical:?}");
    Ok(canonical)
}
