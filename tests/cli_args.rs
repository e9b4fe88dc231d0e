// tests/cli_args.rs

use clap::Parser;

use vox_demucs::cli::{CliArgs, LogLevel};
use vox_demucs::config::{ClipMode, DemucsConfig, Engine};
use vox_demucs::logging::resolve_level;

#[test]
fn minimal_arguments_produce_default_config() {
    let args = CliArgs::try_parse_from(["vox-demucs", "-o", "out", "song.mp3"]).unwrap();

    assert_eq!(args.to_config(), DemucsConfig::new("song.mp3", "out"));
    assert!(!args.dry_run);
}

#[test]
fn flags_map_onto_config_fields() {
    let args = CliArgs::try_parse_from([
        "vox-demucs",
        "--out", "separated",
        "-n", "mdx_extra_q",
        "-d", "cuda",
        "--two-stems", "vocals",
        "--shifts", "2",
        "--overlap", "0.5",
        "--clip-mode", "clamp",
        "--mp3", "--mp3-bitrate", "256", "--mp3-preset", "3",
        "-j", "4",
        "--tool-help",
        "--engine", "docker",
        "--image", "my/demucs:latest",
        "--runtime", "podman",
        "--stream",
        "track.wav",
    ])
    .unwrap();

    let cfg = args.to_config();

    assert_eq!(cfg.input.to_str(), Some("track.wav"));
    assert_eq!(cfg.out, "separated");
    assert_eq!(cfg.name.as_deref(), Some("mdx_extra_q"));
    assert_eq!(cfg.device.as_deref(), Some("cuda"));
    assert_eq!(cfg.two_stems.as_deref(), Some("vocals"));
    assert_eq!(cfg.shifts, Some(2));
    assert_eq!(cfg.overlap, Some(0.5));
    assert_eq!(cfg.clip_mode, Some(ClipMode::Clamp));
    assert!(cfg.mp3);
    assert_eq!(cfg.mp3_bitrate, Some(256));
    assert_eq!(cfg.mp3_preset, Some(3));
    assert_eq!(cfg.jobs, Some(4));
    assert!(cfg.help);
    assert_eq!(cfg.engine, Engine::Docker);
    assert_eq!(cfg.image.as_deref(), Some("my/demucs:latest"));
    assert_eq!(cfg.container_runtime.as_deref(), Some("podman"));
    assert!(!cfg.silent);
}

#[test]
fn out_is_required() {
    assert!(CliArgs::try_parse_from(["vox-demucs", "song.mp3"]).is_err());
}

#[test]
fn mp3_preset_outside_encoder_range_is_rejected() {
    let res = CliArgs::try_parse_from(["vox-demucs", "-o", "out", "--mp3-preset", "9", "a.mp3"]);
    assert!(res.is_err());
}

#[test]
fn log_level_priority_flag_then_env_then_info() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), tracing::Level::TRACE);
    assert_eq!(resolve_level(None, Some(" Warning ")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("nonsense")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}

#[test]
fn exit_code_passes_through_only_in_unix_range() {
    use vox_demucs::errors::DemucsError;
    use vox_demucs::exit_code_for;

    let failed = |code| {
        anyhow::Error::from(DemucsError::ProcessFailed {
            code,
            stderr: String::new(),
        })
    };

    assert_eq!(exit_code_for(&failed(7)), 7);
    assert_eq!(exit_code_for(&failed(255)), 255);
    assert_eq!(exit_code_for(&failed(256)), 1);
    assert_eq!(exit_code_for(&failed(-1)), 1);
    assert_eq!(exit_code_for(&anyhow::Error::from(DemucsError::InputNotSpecified)), 1);
}
