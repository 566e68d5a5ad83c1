//! Achievement operations.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use steam_client::SteamApi;

use super::{poll, POLL_INTERVAL};

#[derive(Debug, Serialize)]
pub struct AchievementReport {
    pub name: String,
    pub achieved: bool,
    pub changed: bool,
}

impl fmt::Display for AchievementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.achieved { "unlocked" } else { "locked" };
        if self.changed {
            write!(f, "{}: now {}", self.name, state)
        } else {
            write!(f, "{}: {}", self.name, state)
        }
    }
}

/// Request stats and wait until `name` can be read.
fn load(api: &dyn SteamApi, name: &str, timeout: Duration) -> Result<bool> {
    let stats = api.user_stats();
    if !stats.request_current_stats() {
        anyhow::bail!("RequestCurrentStats failed. Is a user logged on?");
    }
    poll(api, timeout, POLL_INTERVAL, || {
        let (achieved, ok) = stats.get_achievement(name);
        ok.then_some(achieved)
    })
    .with_context(|| {
        format!(
            "Could not read {} within {} ms (unknown achievement?)",
            name,
            timeout.as_millis()
        )
    })
}

/// Run `achievement get`.
pub fn get(api: &dyn SteamApi, name: &str, timeout: Duration) -> Result<AchievementReport> {
    let achieved = load(api, name, timeout)?;
    Ok(AchievementReport {
        name: name.to_string(),
        achieved,
        changed: false,
    })
}

/// Run `achievement set` (`unlock = true`) or `achievement clear`.
pub fn set(
    api: &dyn SteamApi,
    name: &str,
    unlock: bool,
    timeout: Duration,
) -> Result<AchievementReport> {
    let before = load(api, name, timeout)?;
    let stats = api.user_stats();

    let ok = if unlock {
        stats.set_achievement(name)
    } else {
        stats.clear_achievement(name)
    };
    if !ok {
        anyhow::bail!("Failed to update {}", name);
    }
    if !stats.store_stats() {
        anyhow::bail!("StoreStats failed after updating {}", name);
    }

    Ok(AchievementReport {
        name: name.to_string(),
        achieved: unlock,
        changed: before != unlock,
    })
}
