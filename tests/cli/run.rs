//! Tests for `keyward run`.

use crate::support::*;

#[test]
fn test_run_without_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("run").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no command specified");
}

#[test]
fn test_run_unknown_program_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["run", "--", "keyward-test-no-such-program"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "command not found");
}

#[cfg(unix)]
mod unix {
    use crate::support::*;

    #[test]
    fn test_run_rejected_never_starts_command() {
        let t = Test::new();

        let output = t
            .cmd()
            .args(["run", "--", "sh", "-c", "touch started"])
            .env("CI", "true")
            .output()
            .unwrap();
        assert_failure(&output);
        assert_stderr_contains(&output, "keystore not found");
        assert!(!t.dir.path().join("started").exists());
    }

    #[test]
    fn test_run_unsigned_exports_debug_mode() {
        let t = Test::new();

        let output = t
            .cmd()
            .args(["run", "--", "sh", "-c", "echo mode=$KEYWARD_SIGNING"])
            .output()
            .unwrap();
        assert_success(&output);
        assert_stdout_contains(&output, "mode=debug");
    }

    #[test]
    fn test_run_resolved_exports_release_mode() {
        let t = Test::new();
        let keystore = t.keystore("k.jks");

        let output = t
            .cmd()
            .args(["run", "--", "sh", "-c", "echo mode=$KEYWARD_SIGNING alias=$KEY_ALIAS"])
            .envs(credentials(keystore.to_str().unwrap()))
            .env("CI", "true")
            .output()
            .unwrap();
        assert_success(&output);
        assert_stdout_contains(&output, "mode=release");
        assert_stdout_contains(&output, "alias=upload");
    }

    #[test]
    fn test_run_passes_env_file_to_child() {
        let t = Test::new();
        let keystore = t.keystore("k.jks");
        t.env_file(
            "signing.env",
            &format!(
                "KEYSTORE_PATH={}\nSTORE_PASSWORD=p\nKEY_ALIAS=from-file\nKEY_PASSWORD=q\n",
                keystore.display()
            ),
        );

        let output = t
            .cmd()
            .args([
                "--env-file",
                "signing.env",
                "run",
                "--",
                "sh",
                "-c",
                "echo alias=$KEY_ALIAS",
            ])
            .output()
            .unwrap();
        assert_success(&output);
        assert_stdout_contains(&output, "alias=from-file");
    }

    #[test]
    fn test_run_propagates_exit_code() {
        let t = Test::new();

        let output = t
            .cmd()
            .args(["run", "--", "sh", "-c", "exit 3"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(3));
    }
}
