//! Enumerations mirrored from the native SDK.
//!
//! Each enumeration is a transparent newtype over the native integer with
//! one associated constant per known member. The native side may return
//! values this crate does not name; they are carried through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the out-array passed to `GetConnectedControllers`
/// (`STEAM_INPUT_MAX_COUNT`).
pub const STEAM_INPUT_MAX_COUNT: usize = 16;

macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr => $native:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                #[doc = concat!("`", $native, "`")]
                $(#[$vmeta])*
                pub const $variant: Self = Self($value);
            )*

            /// Every member this crate names, in declaration order.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),*];

            /// The raw native value.
            pub const fn raw(self) -> $repr {
                self.0
            }

            /// The SDK name of this value, if it is a known member.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($native), )*
                    _ => None,
                }
            }
        }

        impl From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}", self.0),
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}::{}", stringify!($name), name),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }
    };
}

native_enum! {
    /// Kind of controller behind an [`InputHandle`](crate::InputHandle)
    /// (`ESteamInputType`).
    SteamInputType(i32) {
        Unknown = 0 => "k_ESteamInputType_Unknown",
        SteamController = 1 => "k_ESteamInputType_SteamController",
        XBox360Controller = 2 => "k_ESteamInputType_XBox360Controller",
        XBoxOneController = 3 => "k_ESteamInputType_XBoxOneController",
        GenericXInput = 4 => "k_ESteamInputType_GenericGamepad",
        PS4Controller = 5 => "k_ESteamInputType_PS4Controller",
        /// Unused by the SDK.
        AppleMFiController = 6 => "k_ESteamInputType_AppleMFiController",
        /// Unused by the SDK.
        AndroidController = 7 => "k_ESteamInputType_AndroidController",
        /// Unused by the SDK.
        SwitchJoyConPair = 8 => "k_ESteamInputType_SwitchJoyConPair",
        /// Unused by the SDK.
        SwitchJoyConSingle = 9 => "k_ESteamInputType_SwitchJoyConSingle",
        SwitchProController = 10 => "k_ESteamInputType_SwitchProController",
        MobileTouch = 11 => "k_ESteamInputType_MobileTouch",
        PS3Controller = 12 => "k_ESteamInputType_PS3Controller",
        PS5Controller = 13 => "k_ESteamInputType_PS5Controller",
        SteamDeckController = 14 => "k_ESteamInputType_SteamDeckController",
        Count = 15 => "k_ESteamInputType_Count",
        MaximumPossibleValue = 255 => "k_ESteamInputType_MaximumPossibleValue",
    }
}

native_enum! {
    /// Why an asynchronous call failed (`ESteamAPICallFailure`).
    ApiCallFailure(i32) {
        /// No failure.
        None = -1 => "k_ESteamAPICallFailureNone",
        /// The local Steam process went away.
        SteamGone = 0 => "k_ESteamAPICallFailureSteamGone",
        /// Network connection to the Steam servers was lost.
        NetworkFailure = 1 => "k_ESteamAPICallFailureNetworkFailure",
        /// The call handle is not known to the SDK.
        InvalidHandle = 2 => "k_ESteamAPICallFailureInvalidHandle",
        /// The result was read with the wrong callback id.
        MismatchedCallback = 3 => "k_ESteamAPICallFailureMismatchedCallback",
    }
}

native_enum! {
    /// Result code carried inside completed-call payloads (`EResult`).
    ///
    /// The SDK defines far more codes than are named here; see
    /// `steamclientpublic.h`.
    ApiCallResult(i32) {
        None = 0 => "k_EResultNone",
        OK = 1 => "k_EResultOK",
        Fail = 2 => "k_EResultFail",
        NoConnection = 3 => "k_EResultNoConnection",
        InvalidPassword = 5 => "k_EResultInvalidPassword",
        LoggedInElsewhere = 6 => "k_EResultLoggedInElsewhere",
        InvalidProtocolVer = 7 => "k_EResultInvalidProtocolVer",
        InvalidParam = 8 => "k_EResultInvalidParam",
        FileNotFound = 9 => "k_EResultFileNotFound",
        Busy = 10 => "k_EResultBusy",
        InvalidState = 11 => "k_EResultInvalidState",
        InvalidName = 12 => "k_EResultInvalidName",
        InvalidEmail = 13 => "k_EResultInvalidEmail",
        DuplicateName = 14 => "k_EResultDuplicateName",
        AccessDenied = 15 => "k_EResultAccessDenied",
        Timeout = 16 => "k_EResultTimeout",
        Banned = 17 => "k_EResultBanned",
        AccountNotFound = 18 => "k_EResultAccountNotFound",
        InvalidSteamID = 19 => "k_EResultInvalidSteamID",
        ServiceUnavailable = 20 => "k_EResultServiceUnavailable",
        NotLoggedOn = 21 => "k_EResultNotLoggedOn",
        Pending = 22 => "k_EResultPending",
        EncryptionFailure = 23 => "k_EResultEncryptionFailure",
        InsufficientPrivilege = 24 => "k_EResultInsufficientPrivilege",
        LimitExceeded = 25 => "k_EResultLimitExceeded",
        Revoked = 26 => "k_EResultRevoked",
        Expired = 27 => "k_EResultExpired",
        AlreadyRedeemed = 28 => "k_EResultAlreadyRedeemed",
        DuplicateRequest = 29 => "k_EResultDuplicateRequest",
        AlreadyOwned = 30 => "k_EResultAlreadyOwned",
    }
}
