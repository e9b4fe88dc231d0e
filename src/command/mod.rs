// src/command/mod.rs

//! Command-line assembly.
//!
//! - [`flags`] holds the ordered field-to-flag table.
//! - [`line`] holds [`CommandLine`], the program + argv pair handed to a runner.
//! - [`builder`] turns a [`crate::config::DemucsConfig`] into a local or
//!   containerized [`CommandLine`].

pub mod builder;
pub mod flags;
pub mod line;

pub use builder::{
    build_command, CONTAINER_INPUT_ROOT, CONTAINER_WORKDIR, DEFAULT_CONTAINER_RUNTIME,
    DEFAULT_IMAGE,
};
pub use flags::{collect_flags, FlagSpec, FlagValue, FLAG_TABLE};
pub use line::CommandLine;
