// src/config/mod.rs

//! Invocation settings for the separation tool.
//!
//! - [`model`] holds [`DemucsConfig`] and its defaults.
//! - [`validate`] holds the pre-flight checks run before anything is spawned.

pub mod model;
pub mod validate;

pub use model::{ClipMode, DemucsConfig, Engine, DEFAULT_DEVICE, DEFAULT_EXECUTABLE, DEFAULT_MODEL};
pub use validate::validate_config;
