//! Configuration loading.
//!
//! This module handles parsing the `timeline.toml` settings file that tells
//! the loader where the tracker lives and where the timeline is written.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::TimelineConfig;

use std::path::Path;
use tracing::info;

/// Loads settings from `path`, or builds defaults around `base_url` when no
/// file is given.
///
/// A `base_url` passed alongside a file overrides the file's value.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be loaded, if neither a file nor
/// a base URL is provided, or if the resulting settings fail validation.
pub fn load_config(
    path: Option<&Path>,
    base_url: Option<&str>,
) -> Result<TimelineConfig, ConfigError> {
    let (mut config, origin) = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading settings file");
            (TimelineConfig::read(path)?, path.display().to_string())
        }
        None => (TimelineConfig::new(""), "<command line>".to_string()),
    };

    if let Some(base_url) = base_url {
        config.base_url = base_url.to_string();
    }

    if path.is_none() && base_url.is_none() {
        return Err(ConfigError::ValidationError {
            path: origin,
            message: "either a settings file or a base URL is required".to_string(),
        });
    }

    config.validate(Path::new(&origin))?;
    Ok(config)
}
