//! file for represent the available configuration properties
//! for the external tools driven by qix-build
use serde::*;

/// [`CompilerAttribute`] - The external tools invoked by the build
/// * `driver` - The compiler executable, looked up on the system path
/// * `formatter` - The source formatter executable used by the `fmt` target
/// * `extra_args` - Flags appended to the standard flags of every configuration
///
/// ```rust
/// use qix_build::config_file::compiler::CompilerAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[compiler]
///     driver = 'odin'
///     extra_args = [ '-thread-count:4', '-show-timings' ]
///"#;
///
/// let config: CompilerAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the qix-build toml file");
///
/// assert_eq!(config.driver, Some("odin"));
/// assert_eq!(config.formatter, None);
/// assert_eq!(config.extra_args, Some(vec!["-thread-count:4", "-show-timings"]));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CompilerAttribute<'a> {
    #[serde(borrow)]
    pub driver: Option<&'a str>,
    #[serde(borrow)]
    pub formatter: Option<&'a str>,
    #[serde(borrow)]
    pub extra_args: Option<Vec<&'a str>>,
}
