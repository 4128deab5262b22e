use thiserror::Error;

/// Failures that terminate a discovery run.
///
/// Soft failures (a single probe target erroring out, an unavailable
/// interface listing) are handled in place and never surface here.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Bad invocation, detected before any external process runs.
    #[error("configuration error: {0}")]
    Config(String),

    /// The neighbor-cache tool could not be invoked. Detailed output is
    /// meaningless without it, so the run dies.
    #[error("neighbor table collection failed: {0}")]
    NeighborTable(#[source] anyhow::Error),

    /// Vendor database could not be fetched or read from cache.
    #[error("vendor database unavailable: {0}")]
    VendorDatabase(#[source] anyhow::Error),
}
