use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::flags::FlagSet;

/// The first argument received by the compiler driver, selecting what it does with the sources
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Verb {
    #[default]
    Build,
    Run,
    Test,
}

impl AsRef<str> for Verb {
    fn as_ref(&self) -> &str {
        match *self {
            Verb::Build => "build",
            Verb::Run => "run",
            Verb::Test => "test",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Type for representing the command line that will be sent to the compiler, and
/// store its different components
///
/// * driver*: the compiler executable, as found on the system path
/// * verb*: the [`Verb`] that goes first on the command line
/// * source_root*: the directory holding the sources of the package being compiled
/// * flags*: the configuration [`FlagSet`], passed verbatim in its composed order
/// * output*: the path where the compiler must dump the binary, already carrying the
///     executable suffix of the platform it is built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerCommand<'a> {
    pub driver: &'a Path,
    pub verb: Verb,
    pub source_root: &'a Path,
    pub flags: &'a FlagSet,
    pub output: PathBuf,
}

impl<'a> CompilerCommand<'a> {
    pub fn new(
        driver: &'a Path,
        verb: Verb,
        source_root: &'a Path,
        flags: &'a FlagSet,
        output: PathBuf,
    ) -> Self {
        Self {
            driver,
            verb,
            source_root,
            flags,
            output,
        }
    }

    /// The `-out:<path>` argument
    pub fn output_arg(&self) -> Argument {
        Argument::from(format!("-out:{}", self.output.display()))
    }

    /// Every argument after the driver, in the order the compiler receives them
    pub fn args(&self) -> Arguments {
        let mut args = Arguments::with_capacity(self.flags.len() + 3);
        args.push(Argument::from(self.verb.to_string()));
        args.create_and_push(self.source_root);
        args.extend(self.flags.iter().cloned());
        args.push(self.output_arg());
        args
    }
}

impl<'a> fmt::Display for CompilerCommand<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.driver.display(), self.args())
    }
}
