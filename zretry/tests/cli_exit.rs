//! Exit behaviour of the built `zmq-subscribe` binary.

#![cfg(feature = "zmq")]

use std::process::{Command, Output};

use zretry::cli::EXIT_FATAL;

fn zmq_subscribe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zmq-subscribe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn zmq-subscribe")
}

#[test]
fn test_bad_endpoint_is_fatal() {
    let out = zmq_subscribe(&["not-an-endpoint"]);

    assert_eq!(out.status.code(), Some(EXIT_FATAL));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("Fatal: Could not connect to endpoint not-an-endpoint: "),
        "unexpected stderr: {stderr}"
    );
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn test_missing_endpoint_is_usage_error() {
    let out = zmq_subscribe(&["--text"]);

    assert_eq!(out.status.code(), Some(EXIT_FATAL));
    assert!(out.stdout.is_empty());
    assert!(!String::from_utf8_lossy(&out.stderr).starts_with("Fatal: "));
}

#[test]
fn test_non_bool_block_is_usage_error() {
    let out = zmq_subscribe(&["--block=maybe", "tcp://127.0.0.1:1"]);

    assert_eq!(out.status.code(), Some(EXIT_FATAL));
}
