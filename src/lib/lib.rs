pub mod cli;
pub mod compiler;
pub mod config_file;
pub mod domain;
pub mod error;
pub mod packaging;
pub mod project_model;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use color_eyre::{eyre::Context, Result};
    use walkdir::WalkDir;

    use crate::{
        cli::{
            input::CliArgs,
            output::executors::{self, Invoker, ProcessInvoker},
        },
        compiler::registry::TargetRegistry,
        config_file::{self, QixConfigFile},
        domain::{commands::command_lines::CompilerCommand, target::TargetKind},
        packaging::{self, PackContext},
        project_model::QixModel,
        utils::{
            self,
            constants::{error_messages, guidance, FORMAT_TARGET},
            toolchain,
        },
    };

    /// The main work of the project. Runs the target requested in the CLI
    pub fn run_qix_build(cli_args: &CliArgs) -> Result<()> {
        let abs_project_root = determine_absolute_path_of_the_project_root(cli_args)?;

        let raw_file = utils::reader::read_config_file(&abs_project_root, cli_args.config.as_deref())?;
        let config: QixConfigFile<'_> = match raw_file.as_deref() {
            Some(raw) => {
                config_file::qix_cfg_from_file(raw).with_context(|| error_messages::PARSE_CFG_FILE)?
            }
            None => QixConfigFile::default(),
        };

        let model = utils::reader::build_model(config, &abs_project_root)
            .with_context(|| error_messages::PROJECT_MODEL_MAPPING)?;

        if cli_args.list {
            println!("{}", TargetRegistry::new(&model).listing());
            return Ok(());
        }

        let driver = toolchain::locate(&model.compiler.driver, guidance::COMPILER)?;

        if cli_args.target_name() == FORMAT_TARGET {
            return format_sources(&model).with_context(|| error_messages::FAILURE_FORMATTING);
        }

        let mut invoker = ProcessInvoker::new(&abs_project_root);
        perform_main_work(cli_args, &model, &driver, &mut invoker)
    }

    /// Resolves the target named on the [`CliArgs`] and runs it through *invoker*
    pub fn perform_main_work<I: Invoker>(
        cli_args: &CliArgs,
        model: &QixModel,
        driver: &Path,
        invoker: &mut I,
    ) -> Result<()> {
        let registry = TargetRegistry::new(model);
        let target = registry.resolve(cli_args.target_name())?;
        log::debug!("Running the target: {} ({})", target.name(), target.description);

        let start = Instant::now();

        match target.kind {
            TargetKind::Compile => {
                utils::fs::create_directory(target.output_root())
                    .with_context(|| error_messages::FAILURE_CREATING_OUTPUT_DIR)?;

                let command = CompilerCommand::new(
                    driver,
                    target.verb,
                    &model.project.source_dir,
                    &target.flags,
                    target
                        .output_root()
                        .join(model.project.host_binary_name()),
                );
                executors::run_compiler(invoker, &command)?;
            }
            TargetKind::Package => {
                let ctx = PackContext {
                    driver,
                    source_root: &model.project.source_dir,
                    project_root: &model.project.root,
                    output_dir: target.output_root(),
                    program: &model.project.name,
                    version: &model.project.version,
                    flags: &target.flags,
                    assets: &model.pack.assets,
                    platforms: &model.pack.platforms,
                };
                packaging::package(&ctx, invoker).with_context(|| error_messages::FAILURE_PACKAGING)?;
            }
        }

        log::debug!(
            "The target {} took a total of {:?} ms",
            target.name(),
            start.elapsed().as_millis()
        );

        Ok(())
    }

    /// Rewrites in place every file under the source directory with the formatter
    fn format_sources(model: &QixModel) -> Result<()> {
        let formatter = toolchain::locate(&model.compiler.formatter, guidance::FORMATTER)?;

        for entry in WalkDir::new(&model.project.source_dir).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() {
                executors::run_formatter(&formatter, entry.path())?;
            }
        }

        Ok(())
    }

    /// Resolves the full path of the location of the project's root on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it will be used as the project root path, otherwise, we will
    /// assume that the project root is exactly in the same directory from where the binary
    /// was invoked by the user
    fn determine_absolute_path_of_the_project_root(cli_args: &CliArgs) -> Result<PathBuf> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(Path::new)
            .unwrap_or(Path::new("."));

        utils::fs::get_project_root_absolute_path(project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

}
