// src/command/builder.rs

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::command::flags::collect_flags;
use crate::command::line::CommandLine;
use crate::config::model::{non_empty, DemucsConfig, Engine};
use crate::config::validate::validate_config;
use crate::errors::{DemucsError, Result};

/// Image used for [`Engine::Docker`] when no override is configured.
pub const DEFAULT_IMAGE: &str = "vox-demucs:ubuntu";

/// Container runtime used for [`Engine::Docker`] when none is configured.
pub const DEFAULT_CONTAINER_RUNTIME: &str = "docker";

/// Working directory inside the container.
pub const CONTAINER_WORKDIR: &str = "/app";

/// Where the host directory holding the input is mounted in the container.
pub const CONTAINER_INPUT_ROOT: &str = "/data/input";

/// Validate `cfg` and assemble the command line for its engine.
///
/// - `Local`: `demucs <flags...> <input>`, input exactly as configured.
/// - `Docker`: the input is made absolute, its directory bind-mounted at
///   [`CONTAINER_INPUT_ROOT`], and the track argument rewritten to the
///   container-side path.
pub fn build_command(cfg: &DemucsConfig) -> Result<CommandLine> {
    validate_config(cfg)?;

    let input = match cfg.engine {
        Engine::Local => cfg.input.clone(),
        Engine::Docker => absolute_input(&cfg.input)?,
    };

    let mut args = collect_flags(cfg);
    args.push(input.to_string_lossy().into_owned());

    let command = match cfg.engine {
        Engine::Local => local_command(cfg, args),
        Engine::Docker => docker_command(cfg, args, &input)?,
    };

    debug!(engine = ?cfg.engine, argc = command.args.len(), "assembled command line");
    Ok(command)
}

/// Absolute form of `input` with `.` and `..` folded away lexically; the
/// filesystem is never consulted.
fn absolute_input(input: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(input)?;
    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `pop` is a no-op at the root, so `/..` stays `/`.
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn local_command(cfg: &DemucsConfig, args: Vec<String>) -> CommandLine {
    CommandLine::new(cfg.executable(), args)
}

/// `args` must end with the host input path; it is replaced by the
/// container-side path.
fn docker_command(cfg: &DemucsConfig, mut args: Vec<String>, input: &Path) -> Result<CommandLine> {
    let file_name = input
        .file_name()
        .ok_or_else(|| {
            DemucsError::InvalidInput(format!("{} has no file name", input.display()))
        })?
        .to_string_lossy()
        .into_owned();
    let input_dir = input
        .parent()
        .ok_or_else(|| {
            DemucsError::InvalidInput(format!("{} has no parent directory", input.display()))
        })?
        .to_string_lossy()
        .into_owned();

    args.pop();

    let runtime = non_empty(cfg.container_runtime.as_deref()).unwrap_or(DEFAULT_CONTAINER_RUNTIME);
    let image = non_empty(cfg.image.as_deref()).unwrap_or(DEFAULT_IMAGE);

    let mut docker_args = vec![String::from("run"), String::from("--rm")];
    if cfg.wants_gpu() {
        docker_args.push(String::from("--gpus"));
        docker_args.push(String::from("all"));
    }
    docker_args.push(String::from("-w"));
    docker_args.push(CONTAINER_WORKDIR.to_string());
    docker_args.push(String::from("-v"));
    docker_args.push(format!("{input_dir}:{CONTAINER_INPUT_ROOT}"));
    docker_args.push(image.to_string());
    docker_args.push(cfg.executable().to_string());
    docker_args.extend(args);
    docker_args.push(format!("{CONTAINER_INPUT_ROOT}/{file_name}"));

    Ok(CommandLine::new(runtime, docker_args))
}
