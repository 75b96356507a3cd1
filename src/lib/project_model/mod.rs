//! The read only model of the project, built once from the defaults and the
//! optional configuration file
pub mod build;
pub mod compiler;
pub mod pack;
pub mod project;

use self::{build::BuildModel, compiler::CompilerModel, pack::PackModel, project::ProjectModel};

#[derive(Debug, PartialEq, Eq)]
pub struct QixModel {
    pub project: ProjectModel,
    pub compiler: CompilerModel,
    pub build: BuildModel,
    pub pack: PackModel,
}
