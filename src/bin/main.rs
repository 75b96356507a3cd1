use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use qix_build::{
    cli::input::CliArgs, error::BuildError, utils::logger::config_logger,
    worker::run_qix_build,
};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stdout)?;
    log::debug!("Launching qix-build for the target: {}", cli_args.target_name());

    if let Err(report) = run_qix_build(&cli_args) {
        if let Some(unknown @ BuildError::UnknownTarget { .. }) = report.downcast_ref::<BuildError>() {
            eprintln!("{unknown}");
            std::process::exit(1);
        }
        return Err(report);
    }

    log::info!("Tasks successfully finished");
    Ok(())
}
