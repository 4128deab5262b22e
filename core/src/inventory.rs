//! # Interface Inventory
//!
//! Parses the local interface listing into [`SubnetDescriptor`]s, one per
//! interface. The listing format is line-oriented: an unindented
//! `name: ...` header opens an interface block, and the indented `inet` /
//! `inet6` lines that follow contribute its addresses.
//!
//! Netmasks arrive in two encodings depending on the platform: dotted
//! decimal (`255.255.255.0`) or hex (`0xffffff00`). Both reduce to a prefix
//! length by counting set bits, so the encoding is detected from the value
//! itself rather than from the OS.

use std::time::Duration;

use hostscout_common::network::subnet::SubnetDescriptor;
use tracing::warn;

use crate::system::CommandRunner;

const INTERFACE_TOOL: &str = "ifconfig";

/// Collects the local subnet inventory.
///
/// Soft failure: if the interface-listing tool cannot be invoked the
/// inventory is simply empty — the run continues with whatever else it has.
pub async fn scan_interfaces(
    runner: &dyn CommandRunner,
    timeout: Duration,
) -> Vec<SubnetDescriptor> {
    match runner.run(INTERFACE_TOOL, &[], timeout).await {
        Ok(output) => parse_interfaces(&output),
        Err(e) => {
            warn!("interface listing unavailable, continuing without local subnets: {e}");
            Vec::new()
        }
    }
}

/// Parses the raw interface listing.
pub fn parse_interfaces(raw: &str) -> Vec<SubnetDescriptor> {
    let mut descriptors: Vec<SubnetDescriptor> = Vec::new();
    let mut current: Option<SubnetDescriptor> = None;

    for line in raw.lines() {
        if line.chars().next().is_some_and(|c| !c.is_whitespace()) {
            if let Some(done) = current.take() {
                descriptors.push(done);
            }
            let name = line.split(':').next().unwrap_or(line).trim();
            current = Some(SubnetDescriptor::new(name));
            continue;
        }

        let Some(descriptor) = current.as_mut() else {
            continue;
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(&"inet") => {
                if let Some(cidr) = parse_inet_line(&tokens) {
                    descriptor.ipv4.push(cidr);
                }
            }
            Some(&"inet6") => {
                if let Some(cidr) = parse_inet6_line(&tokens) {
                    descriptor.ipv6.push(cidr);
                }
            }
            _ => {}
        }
    }

    if let Some(done) = current.take() {
        descriptors.push(done);
    }

    descriptors
}

/// `inet <addr> netmask <mask> ...` → `addr/prefix`, skipping loopback.
fn parse_inet_line(tokens: &[&str]) -> Option<String> {
    let addr = tokens.get(1)?;
    if addr.starts_with("127.") {
        return None;
    }

    let mask_pos = tokens.iter().position(|t| *t == "netmask")?;
    let mask = tokens.get(mask_pos + 1)?;
    let prefix = prefix_length(mask)?;

    Some(format!("{addr}/{prefix}"))
}

/// `inet6 <addr> ... prefixlen <n> ...` → `addr/n`, skipping link-local
/// and the loopback address.
fn parse_inet6_line(tokens: &[&str]) -> Option<String> {
    let addr = tokens.get(1)?.split('%').next()?;
    if addr.to_ascii_lowercase().starts_with("fe80:") || addr == "::1" {
        return None;
    }

    let prefix_pos = tokens.iter().position(|t| *t == "prefixlen")?;
    let prefix: u8 = tokens.get(prefix_pos + 1)?.parse().ok()?;

    Some(format!("{addr}/{prefix}"))
}

/// Converts a netmask to its prefix length by counting set bits.
///
/// Dotted-decimal masks are converted octet by octet; `0x`-prefixed masks
/// as a whole 32-bit value. Unparseable masks yield `None` and the address
/// line is dropped.
pub fn prefix_length(mask: &str) -> Option<u8> {
    if let Some(hex) = mask.strip_prefix("0x").or_else(|| mask.strip_prefix("0X")) {
        let value = u32::from_str_radix(hex, 16).ok()?;
        return Some(value.count_ones() as u8);
    }

    let mut bits = 0u8;
    let mut octets = 0;
    for octet_str in mask.split('.') {
        let octet: u8 = octet_str.parse().ok()?;
        bits += octet.count_ones() as u8;
        octets += 1;
    }
    (octets == 4).then_some(bits)
}
