//! Callback ids and completed-call payloads.
//!
//! A completed asynchronous call is read back through `GetAPICallResult`
//! into a buffer the size of the native result struct. The callback id
//! identifies which struct that is.

use crate::enums::ApiCallResult;
use crate::error::TypesError;

/// Callback-class identifiers (`k_iCallback`).
pub struct CallbackId;

impl CallbackId {
    /// `k_iSteamUserCallbacks`
    pub const STEAM_USER: i32 = 100;
    /// `EncryptedAppTicketResponse_t::k_iCallback`
    pub const ENCRYPTED_APP_TICKET_RESPONSE: i32 = Self::STEAM_USER + 54;
}

/// Result of `RequestEncryptedAppTicket` (`EncryptedAppTicketResponse_t`).
///
/// Once this reports [`ApiCallResult::OK`] the ticket can be fetched with
/// `GetEncryptedAppTicket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct EncryptedAppTicketResponse {
    /// `m_eResult`
    pub result: ApiCallResult,
}

impl EncryptedAppTicketResponse {
    /// Callback id of this payload.
    pub const CALLBACK_ID: i32 = CallbackId::ENCRYPTED_APP_TICKET_RESPONSE;

    /// Size of the native struct.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Decode from a `GetAPICallResult` buffer (native byte order).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypesError> {
        let raw: [u8; 4] = bytes
            .get(..Self::SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or(TypesError::InvalidCallbackPayload {
                expected: Self::SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self {
            result: ApiCallResult(i32::from_ne_bytes(raw)),
        })
    }

    /// Encode in native byte order.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.result.raw().to_ne_bytes()
    }

    /// Check that a call handle's callback id refers to this payload.
    pub fn expect_callback(callback_id: i32) -> Result<(), TypesError> {
        if callback_id == Self::CALLBACK_ID {
            Ok(())
        } else {
            Err(TypesError::UnexpectedCallback {
                expected: Self::CALLBACK_ID,
                actual: callback_id,
            })
        }
    }
}
