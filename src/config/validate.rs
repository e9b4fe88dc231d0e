// src/config/validate.rs

use crate::config::model::DemucsConfig;
use crate::errors::{DemucsError, Result};

/// Pre-flight checks run before any command is assembled or process started.
pub fn validate_config(cfg: &DemucsConfig) -> Result<()> {
    ensure_has_input(cfg)?;
    Ok(())
}

fn ensure_has_input(cfg: &DemucsConfig) -> Result<()> {
    if cfg.input.to_string_lossy().trim().is_empty() {
        return Err(DemucsError::InputNotSpecified);
    }
    Ok(())
}
