use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// [`config_logger`] The configuration for `env_logger`
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    match verbose_level {
        0 => builder.filter(None, LevelFilter::Info),
        1 => builder.filter(None, LevelFilter::Debug),
        2 => builder.filter(None, LevelFilter::Trace),
        _ => return Err(eyre!("qix-build maximum allowed verbosity level is: '-vv'")),
    };

    builder
        .try_init()
        .with_context(|| "qix-build wasn't able to set up the logger")
}
