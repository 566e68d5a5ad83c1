//! # steam-client
//!
//! Dynamic binding to the Steamworks flat C API.
//!
//! ## Features
//!
//! - **Interface traits**: [`SteamApps`], [`SteamInput`], [`SteamRemoteStorage`],
//!   [`SteamUser`], [`SteamUserStats`], [`SteamUtils`], mirroring the native
//!   sub-interfaces call for call
//! - **Pluggable backend**: [`SteamApi`] is implemented by [`NativeSteam`]
//!   (the real shared library) and [`MockSteam`] (in-memory, for tests)
//! - **Resolve once**: every symbol is looked up when the library loads;
//!   a missing export fails the load, not a later call
//!
//! Native return values are surfaced unchanged. The binding starts no
//! threads and takes no locks; asynchronous calls are polled through
//! [`SteamUtils`] on the thread that drives [`SteamApi::run_callbacks`].
//!
//! ## Example
//!
//! ```ignore
//! use steam_client::{NativeSteam, SteamApi};
//!
//! let steam = NativeSteam::load("libsteam_api.so")?;
//! if !steam.init() {
//!     return Err("SteamAPI_Init failed".into());
//! }
//!
//! let call = steam.user().request_encrypted_app_ticket(b"");
//! loop {
//!     steam.run_callbacks();
//!     let (completed, failed) = steam.utils().is_api_call_completed(call);
//!     if completed || failed {
//!         break;
//!     }
//! }
//! let (ticket, ok) = steam.user().get_encrypted_app_ticket();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod error;
pub mod interfaces;

pub use backend::{
    library_file_name, MockSteam, NativeSteam, SteamApi, MOCK_LANGUAGE, MOCK_STEAM_ID,
};
pub use config::{AppConfig, ConfigError, LibraryConfig, SteamConfig, LIBRARY_ENV_VAR};
pub use error::LoadError;
pub use interfaces::{
    SteamApps, SteamInput, SteamRemoteStorage, SteamUser, SteamUserStats, SteamUtils,
    MAX_APP_INSTALL_DIR_SIZE, MAX_ENCRYPTED_APP_TICKET_SIZE,
};

pub use steam_types::{
    ApiCallFailure, ApiCallHandle, ApiCallResult, AppId, CallbackId, EncryptedAppTicketResponse,
    FlatSymbol, InputHandle, Interface, SteamId, SteamInputType, STEAM_INPUT_MAX_COUNT,
};
