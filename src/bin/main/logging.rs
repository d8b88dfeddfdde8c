use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Route `log` output into `path`. Without a path nothing is installed, so
/// log macros cost a level check and never touch the terminal.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to install logger")?;

    Ok(())
}
