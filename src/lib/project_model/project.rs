use std::path::PathBuf;

use crate::utils::constants::BINARY_EXTENSION;

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectModel {
    pub name: String,
    pub version: String,
    /// Absolute path of the project root. Every other path of the model is below it
    pub root: PathBuf,
    pub source_dir: PathBuf,
}

impl ProjectModel {
    /// The binary file name for the ordinary targets, built for the host
    pub fn host_binary_name(&self) -> String {
        match BINARY_EXTENSION {
            "" => self.name.clone(),
            extension => format!("{}.{extension}", self.name),
        }
    }
}
