//! External process invocation.
//!
//! Every stage of the pipeline talks to the OS through textual tool output
//! (`ifconfig`, `fping`, `arp`). This module is the only place a process is
//! actually spawned; the rest of the core depends on the [`CommandRunner`]
//! abstraction so tests can feed captured fixtures instead.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Runs an external tool and captures its stdout.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Invokes `program` with `args`, bounded by `timeout`.
    ///
    /// A non-zero exit status is not an error: the ping-sweep tool exits
    /// non-zero whenever some targets are down but still prints the alive
    /// ones. Only spawn failures and timeouts error out.
    async fn run(&self, program: &str, args: &[&str], timeout: Duration) -> anyhow::Result<String>;
}

/// Production runner backed by `tokio::process`.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str], timeout: Duration) -> anyhow::Result<String> {
        debug!("running {program} {}", args.join(" "));

        let output = tokio::time::timeout(
            timeout,
            Command::new(program)
                .args(args)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .with_context(|| format!("{program} timed out after {timeout:?}"))?
        .with_context(|| format!("failed to invoke {program}"))?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
