use serde::Serialize;

use super::mac::{LinkType, MacAddr};

/// One canonical neighbor-cache entry.
///
/// Built from a single raw `arp -an` line; the vendor field is filled in
/// once by vendor resolution and the record is immutable after that.
/// Entries the OS marks incomplete are never materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborRecord {
    pub ip: String,
    pub family: u8,
    pub mac: MacAddr,
    pub interface: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub vendor: Option<String>,
}

impl NeighborRecord {
    pub fn new(ip: String, family: u8, mac: MacAddr, interface: String, link_type: LinkType) -> Self {
        Self {
            ip,
            family,
            mac,
            interface,
            link_type,
            vendor: None,
        }
    }

    pub fn is_ethernet(&self) -> bool {
        self.link_type == LinkType::Ethernet
    }
}
