//! # steam-types
//!
//! Types mirrored from the Steamworks flat C API.
//!
//! This crate is the compatibility contract every other flatsteam crate
//! builds on:
//! - [`AppId`], [`SteamId`], [`InputHandle`], [`ApiCallHandle`] - opaque native handles
//! - [`SteamInputType`], [`ApiCallFailure`], [`ApiCallResult`] - native enumerations
//! - [`symbols`] - exported symbol names, version suffixes included
//! - [`callbacks`] - callback ids and completed-call payloads
//!
//! Nothing here performs I/O. Widths and integer values must match the
//! native SDK exactly; add names, never renumber.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod callbacks;
mod enums;
mod error;
mod ids;
pub mod symbols;

pub use callbacks::{CallbackId, EncryptedAppTicketResponse};
pub use enums::{ApiCallFailure, ApiCallResult, SteamInputType, STEAM_INPUT_MAX_COUNT};
pub use error::TypesError;
pub use ids::{ApiCallHandle, AppId, InputHandle, SteamId};
pub use symbols::{FlatSymbol, Interface};
