//! CLI mode
//!
//! One-shot commands that exit without starting the server.

use std::path::Path;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::errors::{Result, UserqlError};

/// Print a sample configuration, or write it to `output`.
///
/// An existing file is only replaced when `force` is set.
pub fn run_config_gen(output: Option<&str>, force: bool) -> Result<()> {
    let Some(path) = output else {
        print!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    };

    if !force && Path::new(path).exists() {
        return Err(UserqlError::file_operation(format!(
            "{} already exists, pass --force to overwrite",
            path
        )));
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );
    StaticConfig::default().save_to_file(path)?;
    println!(
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    Ok(())
}
