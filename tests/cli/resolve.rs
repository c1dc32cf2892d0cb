//! Tests for `keyward resolve`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_local_without_keystore_is_unsigned() {
    let t = Test::new();

    let output = t.resolve(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "debug-signed");
}

#[test]
fn test_ci_without_keystore_fails() {
    let t = Test::new();

    t.cmd()
        .arg("resolve")
        .env("CI", "true")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("keystore not found"))
        .stderr(predicate::str::contains("KEYSTORE_PATH"));
}

#[test]
fn test_ci_empty_value_still_fails() {
    let t = Test::new();

    let output = t.resolve(&[("CI", "")]);
    assert_failure(&output);
}

#[test]
fn test_absent_keystore_file_is_unsigned() {
    let t = Test::new();

    let output = t.resolve(&[("KEYSTORE_PATH", "none.jks")]);
    assert_success(&output);
    assert_stdout_contains(&output, "debug-signed");
}

#[test]
fn test_full_identity_resolves_without_leaking() {
    let t = Test::new();
    let keystore = t.keystore("k.jks");

    let output = t.resolve(&credentials(keystore.to_str().unwrap()));
    assert_success(&output);
    assert_stdout_contains(&output, "resolved");
    assert_stdout_contains(&output, "from KEYSTORE_PATH");
    assert_not_leaked(&output, keystore.to_str().unwrap());
    assert_not_leaked(&output, "k.jks");
    assert_not_leaked(&output, KEY_ALIAS);
    assert_not_leaked(&output, STORE_PASSWORD);
    assert_not_leaked(&output, KEY_PASSWORD);
}

#[test]
fn test_android_names_resolve_under_ci() {
    let t = Test::new();
    let keystore = t.keystore("k.jks");

    let output = t.resolve(&[
        ("ANDROID_KEYSTORE_PATH", keystore.to_str().unwrap()),
        ("ANDROID_STORE_PASSWORD", STORE_PASSWORD),
        ("ANDROID_KEY_ALIAS", KEY_ALIAS),
        ("ANDROID_KEY_PASSWORD", KEY_PASSWORD),
        ("CI", "true"),
    ]);
    assert_success(&output);
    assert_stdout_contains(&output, "from ANDROID_KEYSTORE_PATH");
    assert_not_leaked(&output, keystore.to_str().unwrap());
}

#[test]
fn test_android_empty_key_password_hint_names_android_variable() {
    let t = Test::new();
    let keystore = t.keystore("k.jks");

    t.cmd()
        .arg("resolve")
        .env("ANDROID_KEYSTORE_PATH", &keystore)
        .env("ANDROID_STORE_PASSWORD", "p")
        .env("ANDROID_KEY_ALIAS", "a")
        .env("ANDROID_KEY_PASSWORD", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("key password missing"))
        .stderr(predicate::str::contains("set ANDROID_KEY_PASSWORD"));
}

#[test]
fn test_relative_keystore_path() {
    let t = Test::new();
    t.keystore("upload.jks");

    let output = t.resolve(&credentials("upload.jks"));
    assert_success(&output);
    assert_stdout_contains(&output, "resolved");
}

#[test]
fn test_empty_store_password_rejected_locally() {
    let t = Test::new();
    let keystore = t.keystore("k.jks");

    t.cmd()
        .arg("resolve")
        .env("KEYSTORE_PATH", &keystore)
        .env("STORE_PASSWORD", "")
        .env("KEY_ALIAS", "a")
        .env("KEY_PASSWORD", "q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("store password missing"))
        .stderr(predicate::str::contains("set STORE_PASSWORD"));
}

#[test]
fn test_json_outcomes() {
    let t = Test::new();
    let keystore = t.keystore("k.jks");

    let json = t.resolve_json(&[]);
    assert_eq!(json["status"], "unsigned");
    assert_eq!(json["ci"], false);
    assert!(json["reason"].is_null());

    let json = t.resolve_json(&[("CI", "1")]);
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["reason"], "keystore not found");

    let mut vars = credentials(keystore.to_str().unwrap());
    vars.push(("CI", "1"));
    let json = t.resolve_json(&vars);
    assert_eq!(json["status"], "resolved");
    assert_eq!(json["ci"], true);
}

#[test]
fn test_env_file_overrides_process_env() {
    let t = Test::new();
    let keystore = t.keystore("k.jks");
    t.env_file(
        "signing.env",
        &format!(
            "KEYSTORE_PATH={}\nSTORE_PASSWORD=p\nKEY_ALIAS=a\nKEY_PASSWORD=q\n",
            keystore.display()
        ),
    );

    let output = t
        .cmd()
        .args(["--env-file", "signing.env", "resolve"])
        .env("CI", "true")
        .env("KEYSTORE_PATH", "wrong.jks")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "resolved");
}
