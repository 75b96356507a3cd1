use clap::Parser;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use qix_build::cli::input::CliArgs;
///
/// let parser = CliArgs::parse_from(["", "-vv"]);
/// assert_eq!(2, parser.verbose);
/// assert_eq!(parser.target, None);
/// assert_eq!(parser.target_name(), "debug");
///
/// let parser = CliArgs::parse_from(["", "--root", "../qix", "test-asan"]);
/// assert_eq!(parser.target_name(), "test-asan");
/// assert_eq!(parser.root.as_deref(), Some("../qix"));
///
/// let parser = CliArgs::parse_from(["", "--list"]);
/// assert!(parser.list);
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "qix-build")]
#[command(author = "Qix Developers")]
#[command(version, about = "Builds, tests and packages the qix project with the Odin compiler")]
pub struct CliArgs {
    /// The build target to run. Defaults to `debug`. Use `--list` to see them all
    pub target: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "qix-build maximum allowed verbosity level is: '-vv'")]
    pub verbose: u8,

    #[arg(short, long, help = "The project root. Defaults to the current directory")]
    pub root: Option<String>,

    #[arg(short, long, help = "A configuration file, relative to the project root")]
    pub config: Option<String>,

    #[arg(short, long, help = "Prints the available build targets and exits")]
    pub list: bool,
}

impl CliArgs {
    pub fn target_name(&self) -> &str {
        self.target
            .as_deref()
            .unwrap_or(crate::utils::constants::DEFAULT_TARGET)
    }
}
