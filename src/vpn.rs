use std::process::Command;

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// VPN agent probe
// ---------------------------------------------------------------------------

/// Whether the VPN agent process (e.g. `PanGPA.exe`, the GlobalProtect
/// agent) is currently running. The export share is only reachable while
/// the agent is up, so the app refuses to touch the filesystem otherwise.
///
/// A failed probe counts as "not connected" — better to show the
/// remediation message than to hang on an unreachable share.
pub fn vpn_connected(process_name: &str) -> bool {
    match process_listing() {
        Ok(listing) => listing_contains(&listing, process_name),
        Err(e) => {
            log::warn!("VPN process probe failed: {e:#}");
            false
        }
    }
}

/// One line (or CSV row) per running process, straight from the platform
/// process lister.
#[cfg(windows)]
fn process_listing() -> Result<String> {
    let output = Command::new("tasklist")
        .output()
        .context("running tasklist")?;
    anyhow::ensure!(output.status.success(), "tasklist exited with {}", output.status);
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(not(windows))]
fn process_listing() -> Result<String> {
    let output = Command::new("ps")
        .args(["-A", "-o", "comm="])
        .output()
        .context("running ps")?;
    anyhow::ensure!(output.status.success(), "ps exited with {}", output.status);
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Case-insensitive substring check over the raw listing.
fn listing_contains(listing: &str, process_name: &str) -> bool {
    if process_name.is_empty() {
        return false;
    }
    listing
        .to_lowercase()
        .contains(&process_name.to_lowercase())
}
