//! # Probe Target Resolution
//!
//! Turns either the local interface inventory or user-supplied range
//! strings into the final set of CIDR targets, bucketed by address family.
//!
//! Classification is done with explicit tokenizers rather than pattern
//! matching: a target is IPv4 only if it is a real dotted quad with an
//! in-range prefix, IPv6 only if it has a colon-and-hex shape. Anything
//! else is dropped from the set with a warning.

use tracing::warn;

use super::subnet::SubnetDescriptor;

/// The ranges a run will probe, bucketed by family.
///
/// Insertion order is preserved; duplicates are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    fn add_ipv4(&mut self, cidr: String) {
        if !self.ipv4.contains(&cidr) {
            self.ipv4.push(cidr);
        }
    }

    fn add_ipv6(&mut self, cidr: String) {
        if !self.ipv6.contains(&cidr) {
            self.ipv6.push(cidr);
        }
    }
}

/// Flattens the interface inventory into a target set, CIDRs verbatim.
pub fn from_subnets(subnets: &[SubnetDescriptor]) -> TargetSet {
    let mut set = TargetSet::new();
    for descriptor in subnets {
        for cidr in &descriptor.ipv4 {
            set.add_ipv4(cidr.clone());
        }
        for cidr in &descriptor.ipv6 {
            set.add_ipv6(cidr.clone());
        }
    }
    set
}

/// Classifies user-supplied range strings into a target set.
///
/// A bare IPv4 address gets `default_v4_prefix` appended; strings that fit
/// neither family are dropped.
pub fn from_strings(targets: &[String], default_v4_prefix: u8) -> TargetSet {
    let mut set = TargetSet::new();
    for raw in targets {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        if let Some(cidr) = classify_ipv4(raw, default_v4_prefix) {
            set.add_ipv4(cidr);
        } else if classify_ipv6(raw) {
            set.add_ipv6(raw.to_string());
        } else {
            warn!("dropping unclassifiable target '{raw}'");
        }
    }
    set
}

/// Validates a dotted-quad with optional `/prefix`, returning the CIDR to
/// probe (the default prefix is applied when none was given).
fn classify_ipv4(s: &str, default_prefix: u8) -> Option<String> {
    let (addr, prefix) = match s.split_once('/') {
        Some((addr, prefix_str)) => {
            let prefix: u8 = prefix_str.parse().ok()?;
            (addr, prefix)
        }
        None => (s, default_prefix),
    };

    if prefix > 32 {
        return None;
    }

    let octets: Vec<&str> = addr.split('.').collect();
    if octets.len() != 4 {
        return None;
    }
    for octet in octets {
        octet.parse::<u8>().ok()?;
    }

    Some(format!("{addr}/{prefix}"))
}

/// Checks for an IPv6 shape: hex-and-colon address, optional `/prefix`.
fn classify_ipv6(s: &str) -> bool {
    let (addr, prefix) = match s.split_once('/') {
        Some((addr, prefix_str)) => match prefix_str.parse::<u8>() {
            Ok(p) => (addr, p),
            Err(_) => return false,
        },
        None => (s, 128),
    };

    if prefix > 128 || !addr.contains(':') {
        return false;
    }

    addr.chars().all(|c| c.is_ascii_hexdigit() || c == ':')
}
