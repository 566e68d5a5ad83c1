//! Opaque handle types issued by the native SDK.
//!
//! Each type keeps the exact width of its native counterpart. The binding
//! never looks inside a handle; it only carries the raw integer across the
//! call boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An application id (`AppId_t`, 32-bit).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AppId(u32);

impl AppId {
    /// Wrap a raw native app id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw native value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for AppId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppId({})", self.0)
    }
}

/// A Steam user or entity id (`CSteamID`, 64-bit).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SteamId(u64);

impl SteamId {
    /// Wrap a raw native Steam id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw native value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for SteamId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SteamId({})", self.0)
    }
}

/// A connected input device (`InputHandle_t`, 64-bit).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct InputHandle(u64);

impl InputHandle {
    /// Wrap a raw native input handle.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw native value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputHandle {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for InputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for InputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InputHandle({})", self.0)
    }
}

/// An in-flight asynchronous call.
///
/// Pairs the native `SteamAPICall_t` with the callback id of the result it
/// will produce; both are needed to read the result back through
/// `GetAPICallResult`. A handle is returned by exactly one request and
/// consumed by polling; it has no lifecycle of its own.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct ApiCallHandle {
    handle: u64,
    callback_id: i32,
}

impl ApiCallHandle {
    /// `k_uAPICallInvalid`.
    pub const INVALID_RAW: u64 = 0;

    /// Pair a raw call handle with the callback id of its result.
    pub const fn new(handle: u64, callback_id: i32) -> Self {
        Self {
            handle,
            callback_id,
        }
    }

    /// The raw `SteamAPICall_t`.
    pub const fn raw(self) -> u64 {
        self.handle
    }

    /// The callback id expected when reading the result.
    pub const fn callback_id(self) -> i32 {
        self.callback_id
    }

    /// Whether the native side returned `k_uAPICallInvalid`.
    pub const fn is_invalid(self) -> bool {
        self.handle == Self::INVALID_RAW
    }
}

impl fmt::Display for ApiCallHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.handle, self.callback_id)
    }
}

impl fmt::Debug for ApiCallHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiCallHandle(handle={}, callback_id={})",
            self.handle, self.callback_id
        )
    }
}
