use std::path::PathBuf;

use crate::domain::platform::PlatformEntry;

#[derive(Debug, PartialEq, Eq)]
pub struct PackModel {
    pub output_dir: PathBuf,
    pub assets: Vec<String>,
    pub platforms: Vec<PlatformEntry>,
}
