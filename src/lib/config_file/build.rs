//! file that contains the configuration options available
//! for the ordinary (non packaging) build targets
use serde::*;

/// [`BuildAttribute`] - Stores build process specific configuration
///
/// * `output_dir` - An string representing a relative to the root path
/// where the per configuration directories (`debug`, `release`...) are created.
/// If isn't specified, a `./bin/...` folder is used by default
///
/// ```rust
/// use qix_build::config_file::build::BuildAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[build]
///     output_dir = 'out'
///"#;
///
/// let config: BuildAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the qix-build toml file");
///
/// assert_eq!(config.output_dir, Some("out"));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BuildAttribute<'a> {
    #[serde(borrow)]
    pub output_dir: Option<&'a str>,
}
