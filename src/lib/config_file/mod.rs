//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod build;
pub mod compiler;
pub mod pack;
pub mod project;

use serde::{Deserialize, Serialize};

use self::{
    build::BuildAttribute, compiler::CompilerAttribute, pack::PackAttribute,
    project::ProjectAttribute,
};

/// ```rust
/// use qix_build::config_file::QixConfigFile;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [project]
///     name = 'qix'
///     version = '0.2.0'
///
///     [compiler]
///     extra_args = [ '-define:TRACY=true' ]
///
///     [pack]
///     platforms = [
///         { target = 'windows_amd64', zip = true },
///         { target = 'linux_amd64' },
///     ]
/// "#;
///
/// let config: QixConfigFile = toml::from_str(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the qix-build toml file");
///
/// let project = config.project.expect("The [project] table was declared");
/// assert_eq!(project.name, Some("qix"));
/// assert_eq!(project.version, Some("0.2.0"));
/// assert_eq!(project.source_dir, None);
///
/// let compiler = config.compiler.expect("The [compiler] table was declared");
/// assert_eq!(compiler.extra_args, Some(vec!["-define:TRACY=true"]));
/// assert!(compiler.driver.is_none());
///
/// assert!(config.build.is_none());
///
/// let platforms = config.pack.and_then(|pack| pack.platforms).unwrap();
/// assert_eq!(platforms.len(), 2);
/// assert_eq!(platforms[0].target, "windows_amd64");
/// assert_eq!(platforms[0].zip, Some(true));
/// assert_eq!(platforms[1].zip, None);
/// ```
/// The [`QixConfigFile`] is the type that holds
/// the whole hierarchy of the optional `qix-build.toml`
/// attributes and properties. Every table may be left out,
/// in which case the built-in defaults of the project apply
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct QixConfigFile<'a> {
    #[serde(borrow)]
    pub project: Option<ProjectAttribute<'a>>,
    #[serde(borrow)]
    pub compiler: Option<CompilerAttribute<'a>>,
    #[serde(borrow)]
    pub build: Option<BuildAttribute<'a>>,
    #[serde(borrow)]
    pub pack: Option<PackAttribute<'a>>,
}

pub fn qix_cfg_from_file(cfg: &'_ str) -> Result<QixConfigFile<'_>, toml::de::Error> {
    <QixConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}
