#![cfg(test)]
use std::sync::Arc;

use hostscout_common::config::{Config, ProtocolSet, RunMode};
use hostscout_common::network::mac::LinkType;
use hostscout_common::platform::Platform;
use hostscout_common::report::ReportBody;
use hostscout_core::discovery::Orchestrator;

use super::fixtures::FixtureRunner;

/// One interface, one non-loopback IPv4 subnet.
const IFCONFIG_DARWIN: &str = "\
lo0: flags=8049<UP,LOOPBACK,RUNNING,MULTICAST> mtu 16384
\tinet 127.0.0.1 netmask 0xff000000
\tinet6 ::1 prefixlen 128
en0: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500
\tinet6 fe80::1c67:9aff:fe2e:1%en0 prefixlen 64 secured scopeid 0xb
\tinet 10.1.2.3 netmask 0xffffff00 broadcast 10.1.2.255
";

/// Two complete ethernet entries plus one incomplete entry.
const ARP_DARWIN: &str = "\
? (10.1.2.1) at aa:bb:cc:11:22:33 on en0 ifscope [ethernet]
? (10.1.2.44) at 11:22:33:44:55:66 on en0 ifscope [ethernet]
? (10.1.2.77) at (incomplete) on en0 ifscope [ethernet]
";

/// Covers exactly one of the two MACs above.
const VENDOR_DB: &str = "AA-BB-CC\t\tExampleCorp\n";

fn detailed_config(platform: Platform, cache_dir: &std::path::Path) -> Config {
    Config {
        mode: RunMode::Local,
        detailed: true,
        protocols: ProtocolSet::with_default(true, false),
        platform,
        vendor_db_url: "http://invalid.invalid/oui.txt".into(),
        cache_dir: cache_dir.to_path_buf(),
        ..Config::default()
    }
}

/// The full local+detailed scenario: fixture interface listing, fixture
/// neighbor cache, fixture vendor database, assertions over the final
/// report shape.
#[tokio::test]
async fn local_detailed_end_to_end() {
    let cache = tempfile::tempdir().unwrap();
    std::fs::write(cache.path().join("oui.txt"), VENDOR_DB).unwrap();

    let runner = Arc::new(
        FixtureRunner::new()
            .with_output("ifconfig", IFCONFIG_DARWIN)
            .with_output("fping", "10.1.2.1\n10.1.2.44\n")
            .with_output("arp", ARP_DARWIN),
    );

    let orchestrator = Orchestrator::new(detailed_config(Platform::Darwin, cache.path()), runner);
    let report = orchestrator.run().await.expect("detailed local run failed");

    assert_eq!(report.host_count, 2);

    let ReportBody::Neighbors(records) = &report.hosts else {
        panic!("expected neighbor records, got raw reachability output");
    };

    let gateway = records.iter().find(|r| r.ip == "10.1.2.1").unwrap();
    assert_eq!(gateway.mac.as_str(), "AA-BB-CC-11-22-33");
    assert_eq!(gateway.interface, "en0");
    assert_eq!(gateway.link_type, LinkType::Ethernet);
    assert_eq!(gateway.vendor.as_deref(), Some("ExampleCorp"));

    let unknown = records.iter().find(|r| r.ip == "10.1.2.44").unwrap();
    assert_eq!(unknown.vendor, None);

    assert!(
        records.iter().all(|r| r.ip != "10.1.2.77"),
        "incomplete entry leaked into the report"
    );
}

/// The same scenario through the Linux neighbor-table layout.
#[tokio::test]
async fn local_detailed_linux_layout() {
    const IFCONFIG_LINUX: &str = "\
eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 192.168.1.15  netmask 255.255.255.0  broadcast 192.168.1.255
";
    const ARP_LINUX: &str = "\
? (192.168.1.1) at aa:bb:cc:11:22:33 [ether] on eth0
? (192.168.1.77) at <incomplete> on eth0
";

    let cache = tempfile::tempdir().unwrap();
    std::fs::write(cache.path().join("oui.txt"), VENDOR_DB).unwrap();

    let runner = Arc::new(
        FixtureRunner::new()
            .with_output("ifconfig", IFCONFIG_LINUX)
            .with_output("fping", "192.168.1.1\n")
            .with_output("arp", ARP_LINUX),
    );

    let orchestrator = Orchestrator::new(detailed_config(Platform::Linux, cache.path()), runner);
    let report = orchestrator.run().await.expect("detailed local run failed");

    let ReportBody::Neighbors(records) = &report.hosts else {
        panic!("expected neighbor records");
    };
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].interface, "eth0");
    assert_eq!(records[0].vendor.as_deref(), Some("ExampleCorp"));
}

#[tokio::test]
async fn remote_mode_reports_reachable_addresses() {
    let runner = Arc::new(FixtureRunner::new().with_output("fping", "203.0.113.5\n203.0.113.9\n"));

    let config = Config {
        mode: RunMode::Remote,
        targets: vec!["203.0.113.0/24".into(), "not-an-ip".into()],
        protocols: ProtocolSet::with_default(true, false),
        ..Config::default()
    };

    let report = Orchestrator::new(config, runner).run().await.unwrap();

    assert_eq!(report.host_count, 2);
    let ReportBody::Reachable(addrs) = &report.hosts else {
        panic!("expected raw reachability output");
    };
    assert_eq!(addrs, &vec!["203.0.113.5".to_string(), "203.0.113.9".to_string()]);
}

#[tokio::test]
async fn report_serializes_to_json() {
    let runner = Arc::new(FixtureRunner::new().with_output("fping", "203.0.113.5\n"));

    let config = Config {
        mode: RunMode::Remote,
        targets: vec!["203.0.113.0/24".into()],
        protocols: ProtocolSet::with_default(true, false),
        ..Config::default()
    };

    let report = Orchestrator::new(config, runner).run().await.unwrap();
    let json = report.to_json().unwrap();

    assert!(json.contains("\"host_count\": 1"));
    assert!(json.contains("203.0.113.5"));
}
