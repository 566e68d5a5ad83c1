//! Request an encrypted app ticket and wait for it.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use steam_client::SteamApi;
use steam_types::{ApiCallHandle, ApiCallResult, EncryptedAppTicketResponse};

use super::poll;

#[derive(Debug, Serialize)]
pub struct TicketReport {
    pub call: ApiCallHandle,
    pub result: String,
    pub len: usize,
    pub ticket_hex: String,
}

impl fmt::Display for TicketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Call {}: {} ({} bytes)", self.call, self.result, self.len)?;
        write!(f, "{}", self.ticket_hex)
    }
}

/// Run the ticket command. Everything happens on the calling thread:
/// `run_callbacks()` is pumped between polls of `IsAPICallCompleted`.
pub fn run(
    api: &dyn SteamApi,
    data: &[u8],
    timeout: Duration,
    interval: Duration,
) -> Result<TicketReport> {
    let call = api.user().request_encrypted_app_ticket(data);
    if call.is_invalid() {
        anyhow::bail!("RequestEncryptedAppTicket returned an invalid call handle");
    }
    tracing::info!("Requested encrypted app ticket, call {}", call);
    wait(api, call, timeout, interval)
}

/// Poll an issued ticket request to completion and fetch the ticket.
pub fn wait(
    api: &dyn SteamApi,
    call: ApiCallHandle,
    timeout: Duration,
    interval: Duration,
) -> Result<TicketReport> {
    let utils = api.utils();
    let failed = poll(api, timeout, interval, || {
        let (completed, failed) = utils.is_api_call_completed(call);
        (completed || failed).then_some(failed)
    })
    .with_context(|| {
        format!(
            "Call {} did not complete within {} ms",
            call,
            timeout.as_millis()
        )
    })?;
    if failed {
        anyhow::bail!(
            "Call {} failed: {}",
            call,
            utils.get_api_call_failure_reason(call)
        );
    }

    EncryptedAppTicketResponse::expect_callback(call.callback_id())?;
    let mut payload = [0u8; EncryptedAppTicketResponse::SIZE];
    let (completed, failed) = utils.get_api_call_result(call, &mut payload);
    if !completed || failed {
        anyhow::bail!(
            "GetAPICallResult failed for call {}: {}",
            call,
            utils.get_api_call_failure_reason(call)
        );
    }
    let response = EncryptedAppTicketResponse::from_bytes(&payload)?;
    if response.result != ApiCallResult::OK {
        anyhow::bail!("Ticket request returned {}", response.result);
    }

    let (ticket, ok) = api.user().get_encrypted_app_ticket();
    if !ok {
        anyhow::bail!("GetEncryptedAppTicket failed after a successful response");
    }

    Ok(TicketReport {
        call,
        result: response.result.to_string(),
        len: ticket.len(),
        ticket_hex: hex::encode(&ticket),
    })
}
