//! Engine settings loading.
//!
//! Settings come from an optional JSON file; command-line flags override
//! whatever the file says.

use crate::error::{CliError, Result};
use calc_core::operators::AngleMode;
use calc_core::settings::EngineSettings;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn load_settings(path: Option<&Path>, angle_mode: Option<AngleMode>) -> Result<EngineSettings> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => EngineSettings::default(),
    };

    if let Some(mode) = angle_mode {
        debug!("Angle mode overridden on the command line: {}", mode);
        settings.default_angle_mode = mode;
    }

    validate(&settings)?;
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<EngineSettings> {
    info!("Loading settings from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}

fn validate(settings: &EngineSettings) -> Result<()> {
    if settings.display_width < 2 {
        return Err(CliError::Config(format!(
            "display_width must be at least 2, got {}",
            settings.display_width
        )));
    }
    if settings.result_precision > 15 {
        return Err(CliError::Config(format!(
            "result_precision must be at most 15, got {}",
            settings.result_precision
        )));
    }
    Ok(())
}
