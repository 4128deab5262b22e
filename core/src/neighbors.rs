//! # Neighbor Table Reader
//!
//! Invokes the OS neighbor-cache tool (`arp -an`) and normalizes its output
//! into [`NeighborRecord`]s. This is the portability crux of the pipeline:
//! the tool prints a different whitespace-separated column layout per OS,
//! so each known platform maps to one [`NeighborLayout`] variant — a pure
//! line-to-record function with fixed column indices — selected once per
//! run.
//!
//! Unlike the prober, a failed invocation here is fatal: the detailed
//! report is meaningless without the neighbor cache.

use std::time::Duration;

use anyhow::Context;
use hostscout_common::network::mac::{LinkType, MacAddr};
use hostscout_common::network::neighbor::NeighborRecord;
use hostscout_common::platform::Platform;

use crate::system::CommandRunner;

const NEIGHBOR_TOOL: &str = "arp";

/// Column positions of one neighbor-table output format.
///
/// Two layouts are known:
/// * BSD/Darwin, 8 fields: `? (ip) at mac on iface ifscope [type]`
/// * Linux, 7 fields: `? (ip) at mac [type] on iface`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborLayout {
    Bsd,
    Linux,
}

impl From<Platform> for NeighborLayout {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Darwin => Self::Bsd,
            Platform::Linux => Self::Linux,
        }
    }
}

impl NeighborLayout {
    const IP_FIELD: usize = 1;
    const MAC_FIELD: usize = 3;

    fn interface_field(&self) -> usize {
        match self {
            Self::Bsd => 5,
            Self::Linux => 6,
        }
    }

    fn link_type_field(&self) -> usize {
        match self {
            Self::Bsd => 7,
            Self::Linux => 4,
        }
    }

    /// Parses one raw neighbor-table line.
    ///
    /// Returns `None` for rows the OS marks incomplete and for rows with
    /// too few columns for this layout; both are filtered, not errors.
    pub fn parse_line(&self, line: &str) -> Option<NeighborRecord> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let needed = self.interface_field().max(self.link_type_field()) + 1;
        if fields.len() < needed {
            return None;
        }

        let mac_field = fields[Self::MAC_FIELD];
        if mac_field.contains("incomplete") {
            return None;
        }

        let ip = fields[Self::IP_FIELD]
            .trim_matches(|c| c == '(' || c == ')')
            .to_string();
        let mac = MacAddr::canonicalize(mac_field.trim_matches(|c| c == '(' || c == ')'));
        let interface = fields[self.interface_field()].to_string();

        let raw_token = fields[self.link_type_field()].trim_matches(|c| c == '[' || c == ']');
        let link_type = LinkType::classify(&mac, raw_token);

        Some(NeighborRecord::new(ip, 4, mac, interface, link_type))
    }
}

/// Reads and normalizes the neighbor cache.
///
/// The invocation itself failing (or timing out) is a hard error;
/// individual malformed rows are silently skipped.
pub async fn read_neighbors(
    runner: &dyn CommandRunner,
    platform: Platform,
    timeout: Duration,
) -> anyhow::Result<Vec<NeighborRecord>> {
    let output = runner
        .run(NEIGHBOR_TOOL, &["-an"], timeout)
        .await
        .context("collecting the neighbor table")?;

    let layout = NeighborLayout::from(platform);
    Ok(parse_neighbor_table(&output, layout))
}

/// Applies the layout to every line of raw tool output.
pub fn parse_neighbor_table(raw: &str, layout: NeighborLayout) -> Vec<NeighborRecord> {
    raw.lines()
        .filter_map(|line| layout.parse_line(line))
        .collect()
}
