//! The flag tables of every build configuration
//!
//! Each configuration layers its own table over the standard one (and the sanitizers
//! layer theirs over the debug configuration). [`FlagSet`] composition drops the
//! repeated entries, keeping the position of their first occurrence.

use crate::domain::flags::FlagSet;
use crate::project_model::QixModel;

/// Flags shared by every configuration. `-vet-packages:<project>` is appended
/// at runtime, right after `-vet-unused-imports`
pub const STANDARD: [&str; 17] = [
    "-keep-executable",
    "-strict-style",
    "-vet",
    "-vet-style",
    "-vet-semicolon",
    "-vet-cast",
    "-vet-semicolon",
    "-vet-shadowing",
    "-vet-style",
    "-vet-tabs",
    "-vet-unused",
    "-vet-unused-imports",
    "-vet-unused-procedures",
    "-vet-unused-variables",
    "-vet-using-param",
    "-vet-using-stmt",
    "-warnings-as-errors",
];

pub const DEBUG: [&str; 2] = ["-o:none", "-debug"];
pub const RELEASE: [&str; 3] = ["-o:speed", "-disable-assert", "-no-bounds-check"];
pub const ADDRESS_SANITIZER: [&str; 1] = ["-sanitize:address"];
pub const MEMORY_SANITIZER: [&str; 1] = ["-sanitize:memory"];

/// The composed [`FlagSet`] of every build configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagTables {
    pub debug: FlagSet,
    pub test: FlagSet,
    pub release: FlagSet,
    pub asan: FlagSet,
    pub msan: FlagSet,
}

impl FlagTables {
    pub fn new(model: &QixModel) -> Self {
        let vet_packages = format!("-vet-packages:{}", model.project.name);
        let (head, tail) = STANDARD.split_at(12);

        let standard = FlagSet::compose(
            head.iter().copied(),
            [
                vec![vet_packages.as_str()],
                tail.to_vec(),
                model
                    .compiler
                    .extra_args
                    .iter()
                    .map(|arg| arg.value.as_str())
                    .collect(),
            ],
        );

        let debug = standard.layered(DEBUG);
        let test = standard.layered(debug.iter().map(|flag| flag.value.as_str()));
        let release = standard.layered(RELEASE);
        let asan = debug.layered(ADDRESS_SANITIZER);
        let msan = debug.layered(MEMORY_SANITIZER);

        Self {
            debug,
            test,
            release,
            asan,
            msan,
        }
    }
}
