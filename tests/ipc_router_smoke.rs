
use serde_json::json;
use test_support::{request_err, request_ok, spawn_sidecar};

#[test]
fn health_reports_version_and_seed_counts() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let health = request_ok(&mut stdin, &mut reader, "1", "health", json!({}));
    assert_eq!(
        health.get("version").and_then(|v| v.as_str()),
        Some(env!("CARGO_PKG_VERSION"))
    );
    assert_eq!(health["dataset"]["students"], 5);
    assert_eq!(health["dataset"]["attendance"], 10);
    assert_eq!(health["dataset"]["grades"], 6);
}

#[test]
fn unknown_methods_return_not_implemented() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let error = request_err(&mut stdin, &mut reader, "1", "no.such.method", json!({}));
    assert_eq!(error.get("code").and_then(|v| v.as_str()), Some("not_implemented"));
}

#[test]
fn user_current_returns_the_seeded_header_user() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let user = request_ok(&mut stdin, &mut reader, "1", "user.current", json!({}));
    assert_eq!(user["name"], "Alex Rodriguez");
    assert_eq!(user["role"], "admin");
    assert_eq!(user["initials"], "AR");
}
