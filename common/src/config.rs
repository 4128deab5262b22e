use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::platform::Platform;

/// Where probe targets come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Sweep every subnet attached to a local interface.
    Local,
    /// Sweep user-supplied ranges only.
    Remote,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(format!("wrong operations mode '{other}', must be local or remote")),
        }
    }
}

/// Which address families get probed.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolSet {
    pub ipv4: bool,
    pub ipv6: bool,
}

impl ProtocolSet {
    /// Applies the default: if neither family was requested, probe IPv4.
    pub fn with_default(ipv4: bool, ipv6: bool) -> Self {
        if !ipv4 && !ipv6 {
            Self { ipv4: true, ipv6: false }
        } else {
            Self { ipv4, ipv6 }
        }
    }
}

/// Everything a discovery run needs, resolved up front.
///
/// There is deliberately no process-wide configuration state; the
/// orchestrator receives one of these at construction and nothing else.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RunMode,
    /// Raw user-supplied ranges, remote mode only.
    pub targets: Vec<String>,
    /// Enrich local results with neighbor-table and vendor data.
    pub detailed: bool,
    pub protocols: ProtocolSet,
    pub platform: Platform,
    /// Prefix length assumed for bare remote IPv4 addresses.
    pub default_v4_prefix: u8,
    /// Flat-file OUI database location.
    pub vendor_db_url: String,
    /// Downloaded files are kept here, keyed by filename, and reused
    /// without a freshness check.
    pub cache_dir: PathBuf,
    pub probe_timeout: Duration,
    pub neighbor_timeout: Duration,
}

impl Config {
    /// Rejects invocations that cannot produce a meaningful run. Runs
    /// before any external process is spawned.
    pub fn validate(&self) -> Result<(), crate::error::DiscoveryError> {
        if self.mode == RunMode::Remote && self.targets.is_empty() {
            return Err(crate::error::DiscoveryError::Config(
                "the remote mode is chosen, but no ranges provided".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RunMode::Local,
            targets: Vec::new(),
            detailed: false,
            protocols: ProtocolSet::with_default(false, false),
            platform: Platform::detect().unwrap_or(Platform::Linux),
            default_v4_prefix: 24,
            vendor_db_url: "https://standards-oui.ieee.org/oui.txt".into(),
            cache_dir: PathBuf::from(".cache"),
            probe_timeout: Duration::from_secs(60),
            neighbor_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_default_falls_back_to_ipv4() {
        let p = ProtocolSet::with_default(false, false);
        assert!(p.ipv4);
        assert!(!p.ipv6);

        let p = ProtocolSet::with_default(false, true);
        assert!(!p.ipv4);
        assert!(p.ipv6);
    }

    #[test]
    fn remote_without_targets_is_rejected() {
        let cfg = Config {
            mode: RunMode::Remote,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = Config {
            mode: RunMode::Remote,
            targets: vec!["10.0.0.0/24".into()],
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("LOCAL".parse::<RunMode>(), Ok(RunMode::Local));
        assert_eq!("remote".parse::<RunMode>(), Ok(RunMode::Remote));
        assert!("sideways".parse::<RunMode>().is_err());
    }
}
