//! The named build configurations that the user selects from the command line

use std::borrow::{Borrow, Cow};
use std::path::{Path, PathBuf};

use crate::domain::commands::command_lines::Verb;
use crate::domain::flags::FlagSet;

/// A named build configuration: how the compiler is called and where its output lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    pub identifier: TargetIdentifier,
    pub description: &'static str,
    pub verb: Verb,
    pub flags: FlagSet,
    pub output_root: PathBuf,
    pub kind: TargetKind,
}

impl BuildTarget {
    pub fn name(&self) -> &str {
        self.identifier.name()
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}

/// Strong type for storing the target unique identifier, used as the key of the
/// [`crate::compiler::registry::TargetRegistry`]
#[derive(Debug, PartialEq, Eq, Default, Hash, Clone)]
pub struct TargetIdentifier(pub Cow<'static, str>);

impl From<&'static str> for TargetIdentifier {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl Borrow<str> for TargetIdentifier {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

impl TargetIdentifier {
    pub fn name(&self) -> &str {
        self.0.as_ref()
    }
}

/// What happens once a target is resolved
#[derive(Debug, PartialEq, Eq, Default, Copy, Clone)]
pub enum TargetKind {
    /// A single compiler invocation
    #[default]
    Compile,
    /// One release invocation per platform of the packaging matrix, plus archival
    Package,
}
