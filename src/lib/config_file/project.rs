//! Metadata about the project being built
use serde::*;

/// [`ProjectAttribute`] - Metadata about the project being built
/// * `name` - The program name. Names the compiled binary, prefixes the
/// platform identifiers of the packaging matrix and scopes the `-vet-packages` flag
/// * `version` - The release version embedded on the archive names
/// * `source_dir` - The directory, relative to the project root, handed to the compiler
///
/// ### Tests
///
/// ```rust
/// use qix_build::config_file::project::ProjectAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[project]
///     name = 'qix'
///     version = '1.0.0'
///     source_dir = 'source'
///"#;
///
/// let config: ProjectAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the qix-build toml file");
///
/// assert_eq!(config.name, Some("qix"));
/// assert_eq!(config.version, Some("1.0.0"));
/// assert_eq!(config.source_dir, Some("source"));
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectAttribute<'a> {
    #[serde(borrow)]
    pub name: Option<&'a str>,
    #[serde(borrow)]
    pub version: Option<&'a str>,
    #[serde(borrow)]
    pub source_dir: Option<&'a str>,
}
