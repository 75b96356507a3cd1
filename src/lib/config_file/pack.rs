//! The configuration of the release packaging
use serde::*;

/// [`PackAttribute`] - Configures the `pack` target
///
/// * `output_dir` - Relative to the project root. Holds one artifact directory per
/// platform plus the archives. Defaults to `./pack`
/// * `assets` - Files of the project root copied next to every packaged binary
/// * `platforms` - The packaging matrix, in the order it is processed
///
/// ```rust
/// use qix_build::config_file::pack::PackAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[pack]
///     output_dir = 'dist'
///     assets = [ 'README.md' ]
///     platforms = [
///         { target = 'windows_amd64', zip = true },
///         { target = 'darwin_arm64', zip = false },
///     ]
///"#;
///
/// let config: PackAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the qix-build toml file");
///
/// assert_eq!(config.output_dir, Some("dist"));
/// assert_eq!(config.assets, Some(vec!["README.md"]));
///
/// let platforms = config.platforms.unwrap();
/// assert_eq!(platforms[0].target, "windows_amd64");
/// assert_eq!(platforms[0].zip, Some(true));
/// assert_eq!(platforms[1].target, "darwin_arm64");
/// assert_eq!(platforms[1].zip, Some(false));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct PackAttribute<'a> {
    #[serde(borrow)]
    pub output_dir: Option<&'a str>,
    #[serde(borrow)]
    pub assets: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub platforms: Option<Vec<PlatformAttribute<'a>>>,
}

/// [`PlatformAttribute`] - A row of the packaging matrix
///
/// * `target` - The platform in `os_arch` form, as the compiler names them
/// * `zip` - Whether a zip archive is produced besides the tar.gz one
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct PlatformAttribute<'a> {
    #[serde(borrow)]
    pub target: &'a str,
    pub zip: Option<bool>,
}
