use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::network::neighbor::NeighborRecord;

/// What a run actually produced.
///
/// Plain reachability sweeps report the raw responding addresses; detailed
/// local runs report enriched neighbor records instead.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReportBody {
    Reachable(Vec<String>),
    Neighbors(Vec<NeighborRecord>),
}

impl ReportBody {
    pub fn len(&self) -> usize {
        match self {
            Self::Reachable(addrs) => addrs.len(),
            Self::Neighbors(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Terminal artifact of a discovery run. Serialized once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryReport {
    pub started_at: DateTime<Utc>,
    pub elapsed_secs: f64,
    pub host_count: usize,
    pub hosts: ReportBody,
}

impl DiscoveryReport {
    pub fn new(started_at: DateTime<Utc>, elapsed_secs: f64, hosts: ReportBody) -> Self {
        Self {
            started_at,
            elapsed_secs,
            host_count: hosts.len(),
            hosts,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
