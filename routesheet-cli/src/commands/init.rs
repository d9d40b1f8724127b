//! Init command - write the default configuration file.

use std::path::Path;

use routesheet::config::ConfigFile;

use crate::error::CliError;

/// Outcome of [`write_defaults`].
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Written,
    AlreadyExists,
}

pub fn run(path: &Path, force: bool) -> Result<(), CliError> {
    match write_defaults(path, force)? {
        InitOutcome::Written => {
            println!("Configuration file: {}", path.display());
            println!();
            println!("Edit this file to customize the sheet, services and map style.");
        }
        InitOutcome::AlreadyExists => {
            println!("Configuration file already exists: {}", path.display());
            println!("Use --force to overwrite it with defaults.");
        }
    }
    Ok(())
}

/// Write a default config to `path` unless one exists and `force` is unset.
pub fn write_defaults(path: &Path, force: bool) -> Result<InitOutcome, CliError> {
    if path.exists() && !force {
        return Ok(InitOutcome::AlreadyExists);
    }
    ConfigFile::default().save_to(path)?;
    Ok(InitOutcome::Written)
}
