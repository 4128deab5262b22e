use colored::*;
use hostscout_common::report::DiscoveryReport;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Centered `⟦ HEADER ⟧` line between dashes.
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    println!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );
}

/// The serialized report body plus a one-line colored summary.
pub fn report(report: &DiscoveryReport) -> anyhow::Result<()> {
    println!("{}", report.to_json()?);

    let hosts: ColoredString = format!("{} live hosts", report.host_count).bold().green();
    let elapsed: ColoredString = format!("{:.2}s", report.elapsed_secs).bold().yellow();
    println!();
    println!("Validation complete: {hosts} identified in {elapsed}");

    Ok(())
}

pub fn separator() {
    println!("{}", "─".repeat(TOTAL_WIDTH).bright_black());
}
