//! CLI command implementations.
//!
//! Commands take a `&dyn SteamApi` and return a report; `main` decides
//! how to print it.

pub mod achievement;
pub mod check;
pub mod info;
pub mod restart;
pub mod storage;
pub mod symbols;
pub mod ticket;

use anyhow::Result;
use std::time::{Duration, Instant};
use steam_client::{SteamApi, SteamConfig};
use steam_types::AppId;

/// Delay between polls while waiting on the SDK.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the configured restart check, then `SteamAPI_Init`.
pub fn start(api: &dyn SteamApi, config: &SteamConfig) -> Result<()> {
    if config.app.restart_if_necessary {
        if let Some(id) = config.app.id.map(AppId::new) {
            if api.restart_app_if_necessary(id) {
                anyhow::bail!("App {} was not launched through Steam; start it from Steam", id);
            }
        }
    }

    if !api.init() {
        anyhow::bail!("SteamAPI_Init failed. Is Steam running, and is the app id set?");
    }
    tracing::info!("Steam initialized");
    Ok(())
}

/// Pump `run_callbacks()` on this thread until `ready` yields a value or
/// `timeout` passes.
pub fn poll<T>(
    api: &dyn SteamApi,
    timeout: Duration,
    interval: Duration,
    mut ready: impl FnMut() -> Option<T>,
) -> Option<T> {
    let deadline = Instant::now() + timeout;
    loop {
        api.run_callbacks();
        if let Some(value) = ready() {
            return Some(value);
        }
        if Instant::now() >= deadline {
            return None;
        }
        std::thread::sleep(interval);
    }
}
