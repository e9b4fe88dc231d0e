// tests/invoker.rs

use std::error::Error;

use vox_demucs::config::DemucsConfig;
use vox_demucs::errors::DemucsError;
use vox_demucs::exec::{CapturePolicy, ProcessOutput};
use vox_demucs::Demucs;
use vox_demucs_test_utils::builders::DemucsConfigBuilder;
use vox_demucs_test_utils::capture_logs;
use vox_demucs_test_utils::recording_runner::RecordingRunner;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn blank_input_fails_before_anything_runs() {
    for input in ["", "   ", "\t\n"] {
        let runner = RecordingRunner::new();
        let demucs = Demucs::with_runner(DemucsConfig::new(input, "output-folder"), runner.clone());

        match demucs.run().await {
            Err(err @ DemucsError::InputNotSpecified) => {
                assert_eq!(err.to_string(), "Input file not specified in configuration.");
            }
            other => panic!("Expected InputNotSpecified for {input:?}, got: {:?}", other),
        }
        assert!(runner.calls().is_empty(), "runner was called for {input:?}");
    }
}

#[tokio::test]
async fn local_run_returns_runner_output() -> TestResult {
    let runner = RecordingRunner::new();
    let cfg = DemucsConfigBuilder::new("track.mp3", "out").device("cpu").build();
    let demucs = Demucs::with_runner(cfg, runner.clone());

    let recorded = demucs.run().await?;

    assert!(recorded.contains("demucs"));
    assert!(recorded.contains("track.mp3"));
    assert!(!recorded.contains("docker"));
    assert_eq!(runner.calls().len(), 1);

    Ok(())
}

#[tokio::test]
async fn docker_run_passes_container_command_to_runner() -> TestResult {
    let runner = RecordingRunner::new();
    let cfg = DemucsConfigBuilder::new("/audio/song.mp3", "out")
        .docker()
        .device("cuda")
        .name("mdx_extra")
        .build();

    let recorded = Demucs::with_runner(cfg, runner.clone()).run().await?;

    assert!(recorded.starts_with("docker"));
    assert!(recorded.contains("--gpus all"));
    assert!(recorded.contains("/data/input/song.mp3"));

    let cmd = runner.last_command().expect("no command recorded");
    assert_eq!(cmd.value_of("-n"), Some("mdx_extra"));

    Ok(())
}

#[tokio::test]
async fn model_name_follows_n_flag_in_both_engines() -> TestResult {
    for docker in [false, true] {
        let runner = RecordingRunner::new();
        let mut builder = DemucsConfigBuilder::new("song.mp3", "out").name("mdx_extra_q");
        if docker {
            builder = builder.docker();
        }

        Demucs::with_runner(builder.build(), runner.clone()).run().await?;

        let cmd = runner.last_command().expect("no command recorded");
        assert_eq!(cmd.value_of("-n"), Some("mdx_extra_q"), "docker = {docker}");
    }

    Ok(())
}

#[tokio::test]
async fn silent_flag_selects_capture_policy() -> TestResult {
    for (silent, policy) in [(true, CapturePolicy::Buffer), (false, CapturePolicy::Stream)] {
        let runner = RecordingRunner::new();
        let cfg = DemucsConfigBuilder::new("song.mp3", "out").silent(silent).build();

        Demucs::with_runner(cfg, runner.clone()).run().await?;

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, policy, "silent = {silent}");
    }

    Ok(())
}

#[tokio::test]
async fn non_zero_exit_is_an_error_with_code_and_stderr() {
    let runner = RecordingRunner::failing(2, "RuntimeError: model not found\n");
    let demucs = Demucs::with_runner(DemucsConfig::new("song.mp3", "out"), runner);

    let err = demucs.run().await.expect_err("non-zero exit must fail");

    assert_eq!(err.exit_code(), Some(2));
    let msg = err.to_string();
    assert!(msg.contains("exit code 2"), "message: {msg}");
    assert!(msg.contains("RuntimeError: model not found"), "message: {msg}");
    assert!(!msg.contains("partial stdout"), "message: {msg}");
}

#[tokio::test]
async fn success_joins_stdout_before_stderr() -> TestResult {
    let runner = RecordingRunner::with_output(ProcessOutput {
        code: 0,
        stdout: "Separated tracks will be stored in out/htdemucs\n".to_string(),
        stderr: "100%|##########|\n".to_string(),
    });

    let text = Demucs::with_runner(DemucsConfig::new("song.mp3", "out"), runner)
        .run()
        .await?;

    assert_eq!(
        text,
        "Separated tracks will be stored in out/htdemucs\n100%|##########|\n"
    );

    Ok(())
}

#[tokio::test]
async fn silent_run_emits_no_command_trace() -> TestResult {
    let (logs, _guard) = capture_logs();

    let cfg = DemucsConfigBuilder::new("song.mp3", "out").silent(true).build();
    Demucs::with_runner(cfg, RecordingRunner::new()).run().await?;

    assert!(
        !logs.contents().contains("Executing command"),
        "logs: {}",
        logs.contents()
    );

    Ok(())
}

#[tokio::test]
async fn non_silent_run_traces_the_command() -> TestResult {
    let (logs, _guard) = capture_logs();

    let cfg = DemucsConfigBuilder::new("song.mp3", "out").silent(false).build();
    Demucs::with_runner(cfg, RecordingRunner::new()).run().await?;

    let contents = logs.contents();
    assert!(
        contents.contains("Executing command: demucs -n htdemucs -o out -d cpu song.mp3"),
        "logs: {contents}"
    );

    Ok(())
}

#[test]
fn init_applies_defaults() {
    let demucs = Demucs::init(DemucsConfig::new("song.mp3", "out"));
    let cfg = demucs.config();

    assert_eq!(cfg.name.as_deref(), Some("htdemucs"));
    assert_eq!(cfg.device.as_deref(), Some("cpu"));
    assert!(cfg.silent);
    assert_eq!(cfg.engine, vox_demucs::Engine::Local);
}
