//! Reading the two input files.

use std::fs::File;
use std::path::Path;

use athena_executor_core::{parse_script, Configuration, Statement};
use tracing::debug;

use crate::error::RunError;

/// Check that both inputs exist and can be opened, SQL file first.
pub fn validate_input_files(sql_file: &Path, config_file: &Path) -> Result<(), RunError> {
    if !sql_file.exists() {
        return Err(RunError::Validation(format!(
            "SQL file not found: {}",
            sql_file.display()
        )));
    }
    if !config_file.exists() {
        return Err(RunError::Validation(format!(
            "Configuration file not found: {}",
            config_file.display()
        )));
    }
    if File::open(sql_file).is_err() {
        return Err(RunError::Validation(format!(
            "SQL file not readable: {}",
            sql_file.display()
        )));
    }
    if File::open(config_file).is_err() {
        return Err(RunError::Validation(format!(
            "Configuration file not readable: {}",
            config_file.display()
        )));
    }
    Ok(())
}

/// Read and validate the TOML configuration.
pub fn load_configuration(path: &Path) -> Result<Configuration, RunError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        RunError::Validation(format!(
            "Cannot read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(Configuration::from_toml_str(&text)?)
}

/// Read the SQL file and decompose it into statements.
pub fn read_script(path: &Path) -> Result<Vec<Statement>, RunError> {
    debug!(path = %path.display(), "Reading SQL file");
    let content = std::fs::read_to_string(path)?;
    Ok(parse_script(&content))
}
