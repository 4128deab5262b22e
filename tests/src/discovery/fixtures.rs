//! Scripted stand-ins for the external tools the pipeline shells out to.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use hostscout_core::system::CommandRunner;

/// Maps a program name to canned stdout; unknown programs error like a
/// missing binary would.
#[derive(Default)]
pub struct FixtureRunner {
    outputs: HashMap<String, String>,
}

impl FixtureRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, program: &str, stdout: &str) -> Self {
        self.outputs.insert(program.to_string(), stdout.to_string());
        self
    }
}

#[async_trait]
impl CommandRunner for FixtureRunner {
    async fn run(&self, program: &str, _args: &[&str], _timeout: Duration) -> anyhow::Result<String> {
        self.outputs
            .get(program)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such tool: {program}"))
    }
}
