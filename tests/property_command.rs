// tests/property_command.rs

use proptest::prelude::*;
use vox_demucs::command::{build_command, CONTAINER_INPUT_ROOT};
use vox_demucs::config::{DemucsConfig, Engine};

fn file_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_][a-zA-Z0-9_ .-]{0,20}\\.(mp3|wav|flac)"
}

fn device_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("cpu".to_string())),
        Just(Some("cuda".to_string())),
        Just(Some("mps".to_string())),
        "[a-z]{1,6}".prop_map(Some),
    ]
}

fn config_strategy() -> impl Strategy<Value = DemucsConfig> {
    (
        proptest::collection::vec("[a-z0-9_]{1,8}", 0..3),
        file_name_strategy(),
        device_strategy(),
        proptest::option::of("[a-z_]{1,12}"),
        proptest::option::of(0u32..10),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(dirs, file, device, name, shifts, mp3, docker)| {
            let mut input = dirs.join("/");
            if !input.is_empty() {
                input.push('/');
            }
            input.push_str(&file);

            DemucsConfig {
                device,
                name,
                shifts,
                mp3,
                engine: if docker { Engine::Docker } else { Engine::Local },
                ..DemucsConfig::new(input, "separated")
            }
        })
}

proptest! {
    #[test]
    fn local_commands_end_with_untouched_input(cfg in config_strategy()) {
        prop_assume!(cfg.engine == Engine::Local);
        let cmd = build_command(&cfg).unwrap();

        prop_assert_eq!(cmd.last_arg(), Some(cfg.input.to_str().unwrap()));
        prop_assert!(!cmd.tokens().any(|t| t == "docker" || t == "--rm"));
    }

    #[test]
    fn docker_commands_mount_input_dir_and_rewrite_track(cfg in config_strategy()) {
        prop_assume!(cfg.engine == Engine::Docker);
        let cmd = build_command(&cfg).unwrap();

        let absolute = std::path::absolute(&cfg.input).unwrap();
        let file_name = absolute.file_name().unwrap().to_string_lossy().into_owned();
        let dir = absolute.parent().unwrap().to_string_lossy().into_owned();

        let expected_last = format!("{}/{}", CONTAINER_INPUT_ROOT, file_name);
        prop_assert_eq!(cmd.last_arg(), Some(expected_last.as_str()));
        let expected_mount = format!("{}:{}", dir, CONTAINER_INPUT_ROOT);
        prop_assert_eq!(cmd.value_of("-v"), Some(expected_mount.as_str()));
    }

    #[test]
    fn gpu_flag_iff_cuda_in_docker(cfg in config_strategy()) {
        let cmd = build_command(&cfg).unwrap();
        let has_gpus = cmd.args.iter().any(|a| a == "--gpus");
        let expected = cfg.engine == Engine::Docker && cfg.device.as_deref() == Some("cuda");
        prop_assert_eq!(has_gpus, expected);
    }

    #[test]
    fn name_follows_n_flag(cfg in config_strategy()) {
        let cmd = build_command(&cfg).unwrap();
        prop_assert_eq!(cmd.value_of("-n"), cfg.name.as_deref());
    }
}
