//! Backend abstraction for the flat API.
//!
//! This module provides the seam between callers and whatever answers the
//! calls: the native SDK library, or an in-memory mock for testing.
//!
//! # Design
//!
//! [`SteamApi`] carries the three global entry points and hands out the
//! six interface objects:
//! - `restart_app_if_necessary()`, `init()`, `run_callbacks()`
//! - `apps()`, `input()`, `remote_storage()`, `user()`, `user_stats()`, `utils()`
//!
//! # Example
//!
//! ```ignore
//! let steam = MockSteam::new();
//! assert!(steam.init());
//! steam.remote_storage().file_write("save.bin", b"\x01\x02");
//! ```

mod mock;
mod native;

pub use mock::{MockSteam, MOCK_LANGUAGE, MOCK_STEAM_ID};
pub use native::NativeSteam;

use crate::interfaces::{
    SteamApps, SteamInput, SteamRemoteStorage, SteamUser, SteamUserStats, SteamUtils,
};
use steam_types::AppId;

/// Entry points and interface accessors of the flat API.
///
/// Implementations forward calls and return the answering side's values
/// unchanged.
pub trait SteamApi: Send + Sync {
    /// `SteamAPI_RestartAppIfNecessary`. `true` means the process was not
    /// launched through Steam and should exit so Steam can relaunch it.
    fn restart_app_if_necessary(&self, app_id: AppId) -> bool;

    /// `SteamAPI_Init`.
    fn init(&self) -> bool;

    /// `SteamAPI_RunCallbacks`. Call from the thread that polls
    /// asynchronous results.
    fn run_callbacks(&self);

    /// `ISteamApps`
    fn apps(&self) -> &dyn SteamApps;

    /// `ISteamInput`
    fn input(&self) -> &dyn SteamInput;

    /// `ISteamRemoteStorage`
    fn remote_storage(&self) -> &dyn SteamRemoteStorage;

    /// `ISteamUser`
    fn user(&self) -> &dyn SteamUser;

    /// `ISteamUserStats`
    fn user_stats(&self) -> &dyn SteamUserStats;

    /// `ISteamUtils`
    fn utils(&self) -> &dyn SteamUtils;
}

/// File name of the SDK shared library on this platform.
pub fn library_file_name() -> &'static str {
    if cfg!(target_os = "windows") {
        if cfg!(target_pointer_width = "64") {
            "steam_api64.dll"
        } else {
            "steam_api.dll"
        }
    } else if cfg!(target_os = "macos") {
        "libsteam_api.dylib"
    } else {
        "libsteam_api.so"
    }
}
