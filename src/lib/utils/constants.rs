//! Constant value definitions to use across the whole program

pub const PROJECT_NAME: &str = "qix";
pub const RELEASE_VERSION: &str = "0.1.0";
pub const SOURCE_DIR: &str = "src";

pub const COMPILER_DRIVER: &str = "odin";
pub const FORMATTER: &str = "odinfmt";

pub const CONFIG_FILE_NAME: &str = "qix-build.toml";

pub const DEFAULT_TARGET: &str = "debug";
pub const PACK_TARGET: &str = "pack";
pub const FORMAT_TARGET: &str = "fmt";

pub const BINARY_EXTENSION: &str = if cfg!(target_os = "windows") {
    "exe"
} else {
    ""
};

/// The names of the output directories, not their paths
pub mod dir_names {
    pub const BIN: &str = "bin";
    pub const PACK: &str = "pack";
    pub const DEBUG: &str = "debug";
    pub const RELEASE: &str = "release";
    pub const TEST: &str = "test";
    pub const ASAN: &str = "asan";
    pub const MSAN: &str = "msan";
}

/// The files copied next to every packaged binary
pub mod assets {
    pub const README: &str = "README.md";
    pub const CHANGELOG: &str = "CHANGELOG.md";
    pub const LICENSE: &str = "LICENSE";

    pub const ALL: [&str; 3] = [README, CHANGELOG, LICENSE];
}

/// The `os_arch` half of the identifiers of the default packaging matrix, and
/// whether they get a zip archive
pub const PACK_PLATFORMS: [(&str, bool); 10] = [
    ("windows_amd64", true),
    ("linux_amd64", false),
    ("linux_arm64", false),
    ("darwin_arm64", false),
    ("darwin_amd64", false),
    ("freebsd_amd64", false),
    ("freebsd_arm64", false),
    ("netbsd_amd64", false),
    ("netbsd_arm64", false),
    ("openbsd_amd64", false),
];

pub mod guidance {
    pub const COMPILER: &str =
        "Please download odin and add it to your path: https://odin-lang.org/docs/install/";
    pub const FORMATTER: &str =
        "Please download ols, build odinfmt, and add it to your path: https://github.com/DanielGavin/ols";
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const PROJECT_MODEL_MAPPING: &str = "Error building the project model";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the current project root";
    pub const FAILURE_CREATING_OUTPUT_DIR: &str = "Could not create the output directory";
    pub const FAILURE_PACKAGING: &str = "Failed to package the release artifacts";
    pub const FAILURE_FORMATTING: &str = "Failed to format the project sources";
}

pub const CONFIG_FILE_MOCK: &str = r#"
[project]
name = "mock"
version = "2.3.4"
source_dir = "code"

[compiler]
driver = "odin-nightly"
formatter = "odinfmt"
extra_args = [ "-define:MOCK=true", "-vet" ]

[build]
output_dir = "out"

[pack]
output_dir = "dist"
assets = [ "README.md", "LICENSE" ]
platforms = [
    { target = "linux_amd64" },
    { target = "windows_amd64", zip = true },
]
"#;
