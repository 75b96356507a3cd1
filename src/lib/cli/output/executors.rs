//! Contains the procedures that launch the external tools driven by qix-build

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use color_eyre::{eyre::Context, Result};

use crate::domain::commands::arguments::Argument;
use crate::domain::commands::command_lines::CompilerCommand;
use crate::error::BuildError;

/// Runs a [`CompilerCommand`] to completion, returning how the compiler exited
pub trait Invoker {
    fn invoke(&mut self, command: &CompilerCommand) -> Result<ExitStatus>;
}

/// The [`Invoker`] that spawns the compiler as a child process.
///
/// The child inherits the standard streams, so the compiler diagnostics reach
/// the operator as they are produced. There's no timeout.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    working_dir: PathBuf,
}

impl ProcessInvoker {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&mut self, command: &CompilerCommand) -> Result<ExitStatus> {
        log::trace!("Spawning the compiler from {:?}", self.working_dir);

        Command::new(command.driver)
            .args(&command.args())
            .current_dir(&self.working_dir)
            .spawn()
            .with_context(|| format!("Could not launch: {command}"))?
            .wait()
            .with_context(|| format!("Command {command} failed!"))
    }
}

/// Logs and runs *command*, turning an unsuccessful exit into a [`BuildError::CompilerFailure`]
pub fn run_compiler<I: Invoker>(invoker: &mut I, command: &CompilerCommand) -> Result<()> {
    log::info!("{command}");

    let status = invoker.invoke(command)?;
    log::debug!("The compiler exited with: {status}");

    if status.success() {
        Ok(())
    } else {
        Err(BuildError::CompilerFailure {
            command: command.to_string(),
            status,
        }
        .into())
    }
}

/// Rewrites *file* in place with the source formatter
pub fn run_formatter(formatter: &Path, file: &Path) -> Result<()> {
    let path_arg = Argument::from(format!("-path:{}", file.display()));
    log::info!("{} {path_arg} -w", formatter.display());

    let status = Command::new(formatter)
        .arg(&path_arg)
        .arg("-w")
        .spawn()
        .with_context(|| format!("Could not launch the formatter on {file:?}"))?
        .wait()
        .with_context(|| format!("The formatter failed on {file:?}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(BuildError::FormatterFailure {
            file: file.to_path_buf(),
            status,
        }
        .into())
    }
}
