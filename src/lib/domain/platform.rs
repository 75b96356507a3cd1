use std::fmt;

/// One row of the packaging matrix
///
/// The identifier names the artifact directory and prefixes the archives, so it
/// must be unique within a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformEntry {
    pub identifier: String,
    pub zip: bool,
}

impl PlatformEntry {
    pub fn new<S: Into<String>>(identifier: S, zip: bool) -> Self {
        Self {
            identifier: identifier.into(),
            zip,
        }
    }

    pub fn is_windows(&self) -> bool {
        self.identifier.contains("windows")
    }

    /// The name of the compiled binary inside the artifact directory of this platform
    pub fn binary_name(&self, program: &str) -> String {
        if self.is_windows() {
            format!("{program}.exe")
        } else {
            program.to_string()
        }
    }

    /// The archive file name for the given extension, like `qix-linux_amd64-0.1.0.tar.gz`
    pub fn archive_name(&self, version: &str, extension: &str) -> String {
        format!("{}-{version}.{extension}", self.identifier)
    }
}

impl fmt::Display for PlatformEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}
