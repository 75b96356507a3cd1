use crate::{
    config_file::{
        build::BuildAttribute, compiler::CompilerAttribute, pack::PackAttribute,
        project::ProjectAttribute, QixConfigFile,
    },
    domain::{commands::arguments::Argument, platform::PlatformEntry},
    error::BuildError,
    project_model::{
        build::BuildModel, compiler::CompilerModel, pack::PackModel, project::ProjectModel,
        QixModel,
    },
    utils::constants::{self, assets, dir_names},
};
use color_eyre::Result;
use indexmap::IndexSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::error_messages;
use color_eyre::eyre::Context;

/// Reads the configuration file of the project, if there's any.
///
/// *explicit* is the path received through the `--config` command line argument,
/// relative to the project root. When given, the file must exist. Otherwise, the
/// `qix-build.toml` at the project root is read if present, and its absence
/// just means that the built-in defaults are used
pub fn read_config_file(project_root: &Path, explicit: Option<&str>) -> Result<Option<String>> {
    let (path, required) = match explicit {
        Some(path) => (project_root.join(path), true),
        None => (project_root.join(constants::CONFIG_FILE_NAME), false),
    };

    if !required && !path.is_file() {
        log::debug!("No configuration file found at {path:?}, using the defaults");
        return Ok(None);
    }

    log::debug!("Reading the configuration file: {path:?}");
    fs::read_to_string(&path)
        .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, path))
        .map(Some)
}

pub fn build_model(config: QixConfigFile<'_>, absolute_project_root: &Path) -> Result<QixModel> {
    let project = assemble_project_model(config.project, absolute_project_root);
    let compiler = assemble_compiler_model(config.compiler);
    let build = assemble_build_model(config.build, absolute_project_root);
    let pack = assemble_pack_model(&project.name, config.pack, absolute_project_root)?;

    Ok(QixModel {
        project,
        compiler,
        build,
        pack,
    })
}

fn assemble_project_model(config: Option<ProjectAttribute>, project_root: &Path) -> ProjectModel {
    let config = config.unwrap_or_default();

    ProjectModel {
        name: config.name.unwrap_or(constants::PROJECT_NAME).to_string(),
        version: config
            .version
            .unwrap_or(constants::RELEASE_VERSION)
            .to_string(),
        root: project_root.to_path_buf(),
        source_dir: relative_to_root(project_root, config.source_dir, constants::SOURCE_DIR),
    }
}

fn assemble_compiler_model(config: Option<CompilerAttribute>) -> CompilerModel {
    let config = config.unwrap_or_default();

    let extra_args = config
        .extra_args
        .map(|args| args.into_iter().map(Argument::from).collect())
        .unwrap_or_default();

    CompilerModel {
        driver: config
            .driver
            .unwrap_or(constants::COMPILER_DRIVER)
            .to_string(),
        formatter: config.formatter.unwrap_or(constants::FORMATTER).to_string(),
        extra_args,
    }
}

fn assemble_build_model(config: Option<BuildAttribute>, project_root: &Path) -> BuildModel {
    let output_dir = config.and_then(|build| build.output_dir);

    BuildModel {
        output_dir: relative_to_root(project_root, output_dir, dir_names::BIN),
    }
}

fn assemble_pack_model(
    project_name: &str,
    config: Option<PackAttribute>,
    project_root: &Path,
) -> Result<PackModel> {
    let config = config.unwrap_or_default();

    let assets = config
        .assets
        .unwrap_or_else(|| assets::ALL.to_vec())
        .into_iter()
        .map(str::to_string)
        .collect();

    let platforms: Vec<PlatformEntry> = match config.platforms {
        Some(platforms) => {
            let platforms: Vec<PlatformEntry> = platforms
                .iter()
                .map(|p| platform_entry(project_name, p.target, p.zip.unwrap_or_default()))
                .collect();
            let zip_entries = zip_entries(&platforms);
            if zip_entries != 1 {
                log::warn!(
                    "The configured packaging matrix marks {zip_entries} platforms for zip archives, \
                    while only the Windows one usually gets them"
                );
            }
            platforms
        }
        None => constants::PACK_PLATFORMS
            .iter()
            .map(|(target, zip)| platform_entry(project_name, target, *zip))
            .collect(),
    };

    let mut seen = IndexSet::with_capacity(platforms.len());
    for platform in &platforms {
        if !seen.insert(platform.identifier.as_str()) {
            return Err(BuildError::DuplicatePlatform {
                identifier: platform.identifier.clone(),
            }
            .into());
        }
    }

    Ok(PackModel {
        output_dir: relative_to_root(project_root, config.output_dir, dir_names::PACK),
        assets,
        platforms,
    })
}

fn zip_entries(platforms: &[PlatformEntry]) -> usize {
    platforms.iter().filter(|platform| platform.zip).count()
}

fn platform_entry(project_name: &str, target: &str, zip: bool) -> PlatformEntry {
    PlatformEntry::new(format!("{project_name}-{target}"), zip)
}

fn relative_to_root(project_root: &Path, declared: Option<&str>, default: &str) -> PathBuf {
    let dir = declared
        .map(|dir| dir.strip_prefix("./").unwrap_or(dir))
        .unwrap_or(default);
    project_root.join(dir)
}
