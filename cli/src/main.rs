mod terminal;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use hostscout_common::config::{Config, ProtocolSet, RunMode};
use hostscout_common::platform::Platform;
use hostscout_core::discovery::Orchestrator;
use hostscout_core::system::SystemRunner;
use terminal::{logging, print};

#[derive(Parser)]
#[command(name = "hostscout")]
#[command(about = "Collect the live hosts in your network, locally or remotely.")]
struct CommandLine {
    /// Execution mode: local or remote
    #[arg(long, default_value = "local")]
    mode: RunMode,

    /// Comma-separated IP ranges to check (remote mode)
    #[arg(long, value_delimiter = ',')]
    targets: Vec<String>,

    /// Enrich local results with neighbor-table and vendor data
    #[arg(long)]
    detailed: bool,

    /// Check IPv4 reachability
    #[arg(long)]
    ipv4: bool,

    /// Check IPv6 reachability
    #[arg(long)]
    ipv6: bool,

    /// Override the detected platform (darwin or linux)
    #[arg(long)]
    platform: Option<Platform>,

    /// Vendor database URL
    #[arg(long)]
    vendor_db: Option<String>,

    /// Directory for the cached vendor database
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

impl CommandLine {
    fn into_config(self) -> anyhow::Result<Config> {
        let platform = match self.platform.or_else(Platform::detect) {
            Some(p) => p,
            None => anyhow::bail!("unsupported platform, pass --platform to override"),
        };

        let mut config = Config::default();
        config.mode = self.mode;
        config.targets = self.targets;
        config.detailed = self.detailed;
        config.protocols = ProtocolSet::with_default(self.ipv4, self.ipv6);
        config.platform = platform;
        if let Some(url) = self.vendor_db {
            config.vendor_db_url = url;
        }
        if let Some(dir) = self.cache_dir {
            config.cache_dir = dir;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();

    logging::init();

    let config = commands.into_config()?;
    config.validate()?;

    print::header("host discovery");

    let orchestrator = Orchestrator::new(config, Arc::new(SystemRunner));
    let report = orchestrator.run().await?;

    print::separator();
    print::report(&report)?;

    Ok(())
}
