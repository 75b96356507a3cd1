//! The build targets the user selects from the command line

use std::path::Path;

use indexmap::IndexMap;

use crate::compiler::flags::FlagTables;
use crate::domain::commands::command_lines::Verb;
use crate::domain::flags::FlagSet;
use crate::domain::target::{BuildTarget, TargetIdentifier, TargetKind};
use crate::error::BuildError;
use crate::project_model::QixModel;
use crate::utils::constants::{dir_names, PACK_TARGET};

/// Maps every target name to its [`BuildTarget`], keeping the order they are registered in
#[derive(Debug, Clone)]
pub struct TargetRegistry {
    targets: IndexMap<TargetIdentifier, BuildTarget>,
}

impl TargetRegistry {
    pub fn new(model: &QixModel) -> Self {
        let flags = FlagTables::new(model);
        let bin = model.build.output_dir.as_path();

        let mut registry = Self {
            targets: IndexMap::with_capacity(11),
        };

        let debug_dir = bin.join(dir_names::DEBUG);
        let release_dir = bin.join(dir_names::RELEASE);
        let test_dir = bin.join(dir_names::TEST);
        let asan_dir = bin.join(dir_names::ASAN);
        let msan_dir = bin.join(dir_names::MSAN);

        #[rustfmt::skip]
        let targets = [
            ("build", "Builds the debug configuration", Verb::Build, &flags.debug, &debug_dir),
            ("run", "Builds and runs the debug configuration", Verb::Run, &flags.debug, &debug_dir),
            ("debug", "Builds the debug configuration", Verb::Build, &flags.debug, &debug_dir),
            ("release", "Builds the release (Optimized) configuration", Verb::Build, &flags.release, &release_dir),
            ("run-release", "Builds and runs the release (Optimized) configuration", Verb::Run, &flags.release, &release_dir),
            ("test", "Builds and runs the projects tests", Verb::Test, &flags.test, &test_dir),
            ("asan", "Builds the debug configuration with address sanitizer", Verb::Build, &flags.asan, &asan_dir),
            ("test-asan", "Builds the test configuration with address sanitizer", Verb::Test, &flags.asan, &asan_dir),
            ("msan", "Builds the debug configuration with memory sanitizer", Verb::Build, &flags.msan, &msan_dir),
            ("test-msan", "Builds the test configuration with memory sanitizer", Verb::Test, &flags.msan, &msan_dir),
        ];

        for (name, description, verb, flag_set, output_root) in targets {
            registry.register(name, description, verb, flag_set, output_root, TargetKind::Compile);
        }

        registry.register(
            PACK_TARGET,
            "Builds and packages all platform artifacts",
            Verb::Build,
            &flags.release,
            &model.pack.output_dir,
            TargetKind::Package,
        );

        registry
    }

    fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        verb: Verb,
        flags: &FlagSet,
        output_root: &Path,
        kind: TargetKind,
    ) {
        let identifier = TargetIdentifier::from(name);
        self.targets.insert(
            identifier.clone(),
            BuildTarget {
                identifier,
                description,
                verb,
                flags: flags.clone(),
                output_root: output_root.to_path_buf(),
                kind,
            },
        );
    }

    /// Looks up the [`BuildTarget`] registered as *name*. On a miss, the returned
    /// [`BuildError::UnknownTarget`] carries the [`TargetRegistry::listing`]
    pub fn resolve(&self, name: &str) -> Result<&BuildTarget, BuildError> {
        self.targets
            .get(name)
            .ok_or_else(|| BuildError::UnknownTarget {
                name: name.to_string(),
                listing: self.listing(),
            })
    }

    /// One line per target, in registration order, with the names padded to the longest one
    pub fn listing(&self) -> String {
        let width = self
            .targets
            .keys()
            .map(|identifier| identifier.name().len())
            .max()
            .unwrap_or_default();

        self.targets
            .values()
            .map(|target| format!("  {:<width$} : {}", target.name(), target.description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(TargetIdentifier::name)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_file::QixConfigFile;
    use crate::utils::reader::build_model;
    use color_eyre::Result;

    const REGISTERED: [&str; 11] = [
        "build",
        "run",
        "debug",
        "release",
        "run-release",
        "test",
        "asan",
        "test-asan",
        "msan",
        "test-msan",
        "pack",
    ];

    fn registry(root: &Path) -> Result<(QixModel, TargetRegistry)> {
        let model = build_model(QixConfigFile::default(), root)?;
        let registry = TargetRegistry::new(&model);
        Ok((model, registry))
    }

    #[test]
    fn test_every_registered_target_resolves() -> Result<()> {
        let (_, registry) = registry(Path::new("."))?;

        assert_eq!(registry.names().collect::<Vec<_>>(), REGISTERED);
        for name in REGISTERED {
            assert_eq!(registry.resolve(name)?.name(), name);
        }
        Ok(())
    }

    #[test]
    fn test_targets_configuration() -> Result<()> {
        let root = Path::new("/qix");
        let (model, registry) = registry(root)?;
        let tables = FlagTables::new(&model);

        let run_release = registry.resolve("run-release")?;
        assert_eq!(run_release.verb, Verb::Run);
        assert_eq!(run_release.flags, tables.release);
        assert_eq!(run_release.output_root(), root.join("bin").join("release"));
        assert_eq!(run_release.kind, TargetKind::Compile);

        let test_msan = registry.resolve("test-msan")?;
        assert_eq!(test_msan.verb, Verb::Test);
        assert_eq!(test_msan.flags, tables.msan);
        assert_eq!(test_msan.output_root(), root.join("bin").join("msan"));

        let test = registry.resolve("test")?;
        assert_eq!(test.flags, tables.test);
        assert_eq!(test.output_root(), root.join("bin").join("test"));

        let pack = registry.resolve("pack")?;
        assert_eq!(pack.kind, TargetKind::Package);
        assert_eq!(pack.flags, tables.release);
        assert_eq!(pack.output_root(), root.join("pack"));
        Ok(())
    }

    #[test]
    fn test_unknown_target_lists_every_target_once() -> Result<()> {
        let (_, registry) = registry(Path::new("."))?;

        let err = registry.resolve("relase").unwrap_err();
        let BuildError::UnknownTarget { name, listing } = &err else {
            panic!("Unexpected error: {err:?}");
        };
        assert_eq!(name, "relase");
        assert!(err.to_string().starts_with("Unknown build target: relase\n"));

        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), REGISTERED.len());
        for (line, name) in lines.iter().zip(REGISTERED) {
            let (listed, _) = line.split_once(" : ").unwrap();
            assert_eq!(listed.trim(), name);
            // aligned to `run-release`, the longest name
            assert_eq!(listed.len(), 2 + "run-release".len());
        }
        assert_eq!(
            lines[10],
            "  pack        : Builds and packages all platform artifacts"
        );
        Ok(())
    }

    #[test]
    fn test_targets_are_matched_exactly() -> Result<()> {
        let (_, registry) = registry(Path::new("."))?;

        assert!(registry.resolve("").is_err());
        assert!(registry.resolve("Debug").is_err());
        assert!(registry.resolve("fmt").is_err());
        Ok(())
    }
}
