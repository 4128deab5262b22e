//! Canonical MAC address handling.
//!
//! Neighbor-cache tools print MACs with unpadded, colon-delimited octets
//! (`0:1a:2:b3:4:5`). Everything downstream — vendor lookups in particular —
//! keys on the canonical form: six zero-padded uppercase hex octets joined
//! by hyphens.

use std::fmt;

use serde::Serialize;

/// A MAC address in canonical `XX-XX-XX-XX-XX-XX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MacAddr(String);

impl MacAddr {
    /// Canonicalizes a raw MAC string.
    ///
    /// Accepts colon- or hyphen-delimited octets, pads single-digit octets
    /// with a leading zero, and uppercases. Idempotent on already-canonical
    /// input.
    pub fn canonicalize(raw: &str) -> Self {
        let sep = if raw.contains(':') { ':' } else { '-' };
        let canonical = raw
            .split(sep)
            .map(|octet| format!("{octet:0>2}"))
            .collect::<Vec<_>>()
            .join("-")
            .to_uppercase();
        Self(canonical)
    }

    /// The first octet, used to spot multicast/broadcast entries.
    pub fn first_octet(&self) -> &str {
        &self.0[..2.min(self.0.len())]
    }

    /// The three-octet vendor prefix, e.g. `AA-BB-CC`.
    pub fn oui(&self) -> String {
        self.0
            .split('-')
            .take(3)
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Link-layer classification of a neighbor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Multicast,
    Broadcast,
    Ethernet,
    /// Whatever raw token the OS reported, when it is none of the above.
    #[serde(untagged)]
    Other(String),
}

impl LinkType {
    /// Classifies an entry from its MAC plus the raw link-type token.
    ///
    /// The MAC wins: `01-...` is multicast and `FF-...` broadcast no matter
    /// what the type column says. The token `ether` normalizes to ethernet.
    pub fn classify(mac: &MacAddr, raw_token: &str) -> Self {
        match mac.first_octet() {
            "01" => Self::Multicast,
            "FF" => Self::Broadcast,
            _ => match raw_token {
                "ether" | "ethernet" => Self::Ethernet,
                other => Self::Other(other.to_string()),
            },
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_pads_and_uppercases() {
        let mac = MacAddr::canonicalize("0:1a:2:B3:4:5");
        assert_eq!(mac.as_str(), "00-1A-02-B3-04-05");
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let once = MacAddr::canonicalize("a4:2b:b0:c9:1d:2e");
        let twice = MacAddr::canonicalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn oui_is_first_three_octets() {
        let mac = MacAddr::canonicalize("aa:bb:cc:11:22:33");
        assert_eq!(mac.oui(), "AA-BB-CC");
    }

    #[test]
    fn classify_multicast_and_broadcast_by_first_octet() {
        let mcast = MacAddr::canonicalize("01:00:5e:00:00:fb");
        assert_eq!(LinkType::classify(&mcast, "ether"), LinkType::Multicast);

        let bcast = MacAddr::canonicalize("ff:ff:ff:ff:ff:ff");
        assert_eq!(LinkType::classify(&bcast, "ether"), LinkType::Broadcast);
    }

    #[test]
    fn classify_normalizes_ether_token() {
        let mac = MacAddr::canonicalize("a4:2b:b0:c9:1d:2e");
        assert_eq!(LinkType::classify(&mac, "ether"), LinkType::Ethernet);
        assert_eq!(LinkType::classify(&mac, "ethernet"), LinkType::Ethernet);
        assert_eq!(
            LinkType::classify(&mac, "firewire"),
            LinkType::Other("firewire".into())
        );
    }
}
