//! # Vendor Resolver
//!
//! Joins ethernet neighbor records against the IEEE OUI database: a flat
//! text file where each vendor line starts with a three-octet prefix
//! (`AA-BB-CC`) and carries the vendor name after a double-tab separator.
//!
//! The database file is fetched once and cached on disk keyed by filename;
//! an existing cache file is reused verbatim with no freshness check, so a
//! stale database degrades lookups gracefully rather than failing the run.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use hostscout_common::config::Config;
use hostscout_common::network::neighbor::NeighborRecord;
use rayon::prelude::*;
use tracing::{debug, info};

/// Returns the raw database text, preferring the on-disk cache.
///
/// Fetch failures propagate as-is; there is no retry.
pub async fn fetch_database(config: &Config) -> anyhow::Result<String> {
    let filename = config
        .vendor_db_url
        .rsplit('/')
        .next()
        .filter(|f| !f.is_empty())
        .context("vendor database URL has no filename component")?;
    let cached: PathBuf = config.cache_dir.join(filename);

    if cached.exists() {
        info!("using cached vendor database at {}", cached.display());
        return tokio::fs::read_to_string(&cached)
            .await
            .with_context(|| format!("reading {}", cached.display()));
    }

    info!("fetching vendor database from {}", config.vendor_db_url);
    let body = reqwest::get(&config.vendor_db_url)
        .await
        .context("fetching vendor database")?
        .text()
        .await
        .context("reading vendor database body")?;

    tokio::fs::create_dir_all(&config.cache_dir)
        .await
        .with_context(|| format!("creating {}", config.cache_dir.display()))?;
    tokio::fs::write(&cached, &body)
        .await
        .with_context(|| format!("writing {}", cached.display()))?;

    Ok(body)
}

/// Parses the flat-file database into an OUI → vendor map.
///
/// A line is a vendor entry only if it opens with uppercase alphanumerics
/// followed by a hyphen; the OUI is the first whitespace token and the
/// vendor name follows a double tab. Duplicate OUIs resolve
/// first-match-wins, so the result is stable regardless of how many times
/// the file repeats a prefix. Everything else is filtered, not an error.
pub fn parse_database(raw: &str) -> HashMap<String, String> {
    let mut db: HashMap<String, String> = HashMap::new();

    for line in raw.lines() {
        if !has_oui_prefix(line) {
            continue;
        }
        let Some(oui) = line.split_whitespace().next() else {
            continue;
        };
        let Some((_, vendor)) = line.split_once("\t\t") else {
            continue;
        };
        let vendor = vendor.trim();
        if vendor.is_empty() {
            continue;
        }

        db.entry(oui.to_string())
            .or_insert_with(|| vendor.to_string());
    }

    debug!("vendor database holds {} prefixes", db.len());
    db
}

/// One or more uppercase alphanumerics immediately followed by a hyphen.
fn has_oui_prefix(line: &str) -> bool {
    let head: &str = line.split('-').next().unwrap_or("");
    !head.is_empty()
        && line.len() > head.len()
        && head
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Annotates ethernet records with their vendor, returning the records.
///
/// Lookups are pure and independent, so they run in parallel. Records that
/// are not ethernet always come back with `vendor = None`, whatever their
/// MAC resolves to.
pub fn resolve_vendors(
    db: &HashMap<String, String>,
    mut records: Vec<NeighborRecord>,
) -> Vec<NeighborRecord> {
    records.par_iter_mut().for_each(|record| {
        record.vendor = if record.is_ethernet() {
            db.get(&record.mac.oui()).cloned()
        } else {
            None
        };
    });
    records
}
