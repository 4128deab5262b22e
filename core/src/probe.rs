//! # Prober
//!
//! Drives the external ping-sweep tool (`fping`) over every target range,
//! one invocation per CIDR per enabled address family. Each responding
//! address comes back as one output line.
//!
//! Besides the collected lines, the sweep has an externally observable side
//! effect the detailed path depends on: it populates the OS neighbor cache.
//!
//! Targets are independent, so invocations fan out concurrently. A failed
//! or timed-out sweep contributes zero lines for its target and the rest
//! carry on.

use std::sync::Arc;
use std::time::Duration;

use hostscout_common::config::ProtocolSet;
use hostscout_common::network::target::TargetSet;
use tokio::task::JoinSet;
use tracing::warn;

use crate::system::CommandRunner;

const SWEEP_TOOL: &str = "fping";

/// Sweeps every enabled target and returns the responding addresses,
/// ordered by target.
pub async fn probe(
    runner: Arc<dyn CommandRunner>,
    targets: &TargetSet,
    protocols: ProtocolSet,
    timeout: Duration,
) -> Vec<String> {
    let mut sweeps: Vec<Vec<String>> = Vec::new();

    if protocols.ipv4 {
        for cidr in &targets.ipv4 {
            // -g expands the CIDR, -a keeps alive hosts, -q drops stats
            sweeps.push(vec![
                "-4".into(),
                "-g".into(),
                cidr.clone(),
                "-a".into(),
                "-q".into(),
            ]);
        }
    }
    if protocols.ipv6 {
        for target in &targets.ipv6 {
            sweeps.push(vec!["-6".into(), target.clone(), "-a".into(), "-q".into()]);
        }
    }

    let mut join_set = JoinSet::new();
    for (idx, args) in sweeps.into_iter().enumerate() {
        let runner = runner.clone();
        join_set.spawn(async move {
            let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
            let lines = match runner.run(SWEEP_TOOL, &arg_refs, timeout).await {
                Ok(output) => output.lines().map(str::to_string).collect(),
                Err(e) => {
                    warn!("sweep of {} failed: {e}", args.join(" "));
                    Vec::new()
                }
            };
            (idx, lines)
        });
    }

    let mut results: Vec<(usize, Vec<String>)> = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok(pair) => results.push(pair),
            Err(e) => warn!("sweep task panicked: {e}"),
        }
    }

    results.sort_by_key(|(idx, _)| *idx);
    results.into_iter().flat_map(|(_, lines)| lines).collect()
}
