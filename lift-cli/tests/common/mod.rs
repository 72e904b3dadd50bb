#![allow(dead_code)]

use assert_cmd::prelude::*;
use rand::{distributions::Alphanumeric, Rng};
use std::process::Command;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("lift-cli").expect("binary exists");
    cmd.env(
        "LIFTBRIDGE_ADDRESS",
        std::env::var("LIFTBRIDGE_ADDRESS").unwrap_or_else(|_| "127.0.0.1:9292".into()),
    );
    cmd.env_remove("LIFTBRIDGE_TLS_CA");
    cmd.env_remove("RUST_LOG");
    cmd
}

// Nothing listens on port 1, connections are refused right away.
pub fn cli_without_broker() -> Command {
    let mut cmd = Command::cargo_bin("lift-cli").expect("binary exists");
    cmd.env("LIFTBRIDGE_ADDRESS", "127.0.0.1:1");
    cmd.env_remove("LIFTBRIDGE_TLS_CA");
    cmd.env_remove("RUST_LOG");
    cmd
}

// Kills the process once `timeout` elapses, for commands that never return on their own.
pub fn timed_cli(timeout: Duration) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from_std(cli());
    cmd.timeout(timeout);
    cmd
}

pub fn unique_stream() -> String {
    let ts = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
    let rand: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("stream-{}-{}", ts, rand.to_lowercase())
}

pub fn create_stream(stream: &str) {
    let mut cmd = cli();
    cmd.args(["create", "--stream", stream]).assert().success();
}

pub fn delete_stream(stream: &str) {
    let mut cmd = cli();
    let _ = cmd.args(["delete", "--stream", stream]).output();
}
