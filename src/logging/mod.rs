use env_logger::{Builder, Target};
use log::{LevelFilter, SetLoggerError};

// Logs go to stderr so stdout only ever carries the password.
pub fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(Target::Stderr);

    // RUST_LOG wins over the configured level
    builder.parse_default_env();
    builder
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    builder(level).try_init()?;
    log::debug!("Logging initialised at {}", level);
    Ok(())
}
