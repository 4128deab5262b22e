//! # Discovery Orchestrator
//!
//! Sequences the pipeline stages according to run mode and detail flag:
//!
//! ```text
//! Idle -> InventoryCollected -> TargetsResolved -> Probed
//!      -> (Done | NeighborsCollected -> VendorsResolved -> Done)
//! ```
//!
//! The inventory stage only runs in local mode. The probe always runs —
//! even when the detailed path discards its output, the sweep is what
//! populates the neighbor cache the next stage reads. Every stage receives
//! immutable input and produces fresh output; aborting between stages
//! leaves nothing behind except the optional vendor-database cache file.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use hostscout_common::config::{Config, RunMode};
use hostscout_common::error::DiscoveryError;
use hostscout_common::network::target::{self, TargetSet};
use hostscout_common::report::{DiscoveryReport, ReportBody};
use tracing::info;

use crate::system::CommandRunner;
use crate::{inventory, neighbors, probe, vendors};

/// Owns one discovery run end to end.
pub struct Orchestrator {
    config: Config,
    runner: Arc<dyn CommandRunner>,
}

impl Orchestrator {
    pub fn new(config: Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    /// Executes the full pipeline and emits the terminal report.
    pub async fn run(&self) -> Result<DiscoveryReport, DiscoveryError> {
        self.config.validate()?;

        let started_at = Utc::now();
        let stopwatch = Instant::now();

        let targets = self.resolve_targets().await;
        info!("probing {} target ranges", targets.len());

        let reachable = probe::probe(
            self.runner.clone(),
            &targets,
            self.config.protocols,
            self.config.probe_timeout,
        )
        .await;

        let body = if self.config.mode == RunMode::Local && self.config.detailed {
            // The sweep was only the stimulus; the neighbor cache it
            // populated is the real source now.
            self.collect_neighbors().await?
        } else {
            ReportBody::Reachable(reachable)
        };

        Ok(DiscoveryReport::new(
            started_at,
            stopwatch.elapsed().as_secs_f64(),
            body,
        ))
    }

    async fn resolve_targets(&self) -> TargetSet {
        match self.config.mode {
            RunMode::Local => {
                let subnets = inventory::scan_interfaces(
                    self.runner.as_ref(),
                    self.config.probe_timeout,
                )
                .await;
                target::from_subnets(&subnets)
            }
            RunMode::Remote => {
                target::from_strings(&self.config.targets, self.config.default_v4_prefix)
            }
        }
    }

    async fn collect_neighbors(&self) -> Result<ReportBody, DiscoveryError> {
        let db_text = vendors::fetch_database(&self.config)
            .await
            .map_err(DiscoveryError::VendorDatabase)?;
        let db = vendors::parse_database(&db_text);

        let records = neighbors::read_neighbors(
            self.runner.as_ref(),
            self.config.platform,
            self.config.neighbor_timeout,
        )
        .await
        .map_err(DiscoveryError::NeighborTable)?;

        let enriched = vendors::resolve_vendors(&db, records);
        Ok(ReportBody::Neighbors(enriched))
    }
}
