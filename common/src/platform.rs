//! Host platform identification.
//!
//! The neighbor-cache tool prints a different column layout per OS, so the
//! platform is detected (or declared) exactly once per run and threaded
//! through the pipeline instead of branching on OS strings everywhere.

use std::fmt;
use std::str::FromStr;

/// The closed set of platforms with a known neighbor-table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS / BSD-style tooling.
    Darwin,
    Linux,
}

impl Platform {
    /// Detects the platform the process is running on.
    pub fn detect() -> Option<Self> {
        match std::env::consts::OS {
            "macos" => Some(Self::Darwin),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Darwin => write!(f, "darwin"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "darwin" | "macos" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            other => Err(format!("unsupported platform: {other}")),
        }
    }
}
