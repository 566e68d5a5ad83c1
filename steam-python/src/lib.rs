//! # steam-python
//!
//! Python bindings for the Steamworks flat API via PyO3.
//!
//! Wraps a [`steam_client::SteamApi`] backend into a `Steam` class whose
//! methods mirror the native calls one for one. Everything runs on the
//! calling Python thread; asynchronous calls are polled with
//! `run_callbacks()` and `is_api_call_completed()`.

#![warn(clippy::all)]

use std::path::PathBuf;

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use steam_client::{
    ApiCallHandle as CallHandle, AppId, CallbackId, EncryptedAppTicketResponse, FlatSymbol,
    InputHandle, LoadError, MockSteam, NativeSteam, SteamApi, SteamConfig,
};

// ============================================================
// Error conversion
// ============================================================

fn to_py_err(err: LoadError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}

// ============================================================
// FFI types
// ============================================================

/// An in-flight asynchronous call.
#[pyclass(frozen)]
#[derive(Clone, Copy)]
pub struct ApiCallHandle {
    /// The raw `SteamAPICall_t`.
    #[pyo3(get)]
    handle: u64,
    /// Callback id of the result struct.
    #[pyo3(get)]
    callback_id: i32,
}

#[pymethods]
impl ApiCallHandle {
    #[new]
    fn new(handle: u64, callback_id: i32) -> Self {
        Self {
            handle,
            callback_id,
        }
    }

    /// Whether the native side returned `k_uAPICallInvalid`.
    fn is_invalid(&self) -> bool {
        self.native().is_invalid()
    }

    fn __repr__(&self) -> String {
        format!(
            "ApiCallHandle(handle={}, callback_id={})",
            self.handle, self.callback_id
        )
    }
}

impl ApiCallHandle {
    fn native(&self) -> CallHandle {
        CallHandle::new(self.handle, self.callback_id)
    }
}

impl From<CallHandle> for ApiCallHandle {
    fn from(call: CallHandle) -> Self {
        Self {
            handle: call.raw(),
            callback_id: call.callback_id(),
        }
    }
}

// ============================================================
// Internal helpers
// ============================================================

fn load_native(library_path: Option<PathBuf>) -> Result<Box<dyn SteamApi>, LoadError> {
    let path = SteamConfig::default().library_path(library_path.as_deref());
    Ok(Box::new(NativeSteam::load(path)?))
}

fn mock_backend() -> Box<dyn SteamApi> {
    let steam = MockSteam::new();
    steam.set_complete_on_run_callbacks(true);
    Box::new(steam)
}

// Sizes come from Python; anything the native `int` length cannot carry
// gets the failure value before a buffer is allocated.

fn read_file(api: &dyn SteamApi, name: &str, size: usize) -> (i32, Vec<u8>) {
    if i32::try_from(size).is_err() {
        return (0, Vec::new());
    }
    let mut data = vec![0u8; size];
    let read = api.remote_storage().file_read(name, &mut data);
    data.truncate(usize::try_from(read).unwrap_or(0).min(size));
    (read, data)
}

fn read_call_result(api: &dyn SteamApi, call: CallHandle, size: usize) -> (bool, bool, Vec<u8>) {
    if i32::try_from(size).is_err() {
        return (false, true, Vec::new());
    }
    let mut response = vec![0u8; size];
    let (completed, failed) = api.utils().get_api_call_result(call, &mut response);
    (completed, failed, response)
}

fn symbol_names() -> Vec<&'static str> {
    FlatSymbol::ALL.iter().map(|s| s.name()).collect()
}

// ============================================================
// Steam: the main pyclass
// ============================================================

/// A loaded Steamworks SDK (or the in-memory mock).
///
/// Create with `Steam.load()` or `Steam.mock()`. Methods return the native
/// values unchanged; tuples keep success flags next to out-values.
#[pyclass(frozen)]
pub struct Steam {
    api: Box<dyn SteamApi>,
}

#[pymethods]
impl Steam {
    /// Load the SDK library. Without a path, `STEAM_API_LIBRARY` and then
    /// the platform's file name are tried.
    #[staticmethod]
    #[pyo3(signature = (library_path=None))]
    fn load(library_path: Option<PathBuf>) -> PyResult<Self> {
        let api = load_native(library_path).map_err(to_py_err)?;
        Ok(Self { api })
    }

    /// An in-memory backend. Asynchronous calls complete on the next
    /// `run_callbacks()`.
    #[staticmethod]
    fn mock() -> Self {
        Self {
            api: mock_backend(),
        }
    }

    // --- Global entry points ---

    fn restart_app_if_necessary(&self, app_id: u32) -> bool {
        self.api.restart_app_if_necessary(AppId::new(app_id))
    }

    fn init(&self) -> bool {
        self.api.init()
    }

    fn run_callbacks(&self) {
        self.api.run_callbacks()
    }

    // --- ISteamApps ---

    fn get_app_install_dir(&self, app_id: u32) -> String {
        self.api.apps().get_app_install_dir(AppId::new(app_id))
    }

    fn get_current_game_language(&self) -> String {
        self.api.apps().get_current_game_language()
    }

    // --- ISteamInput ---

    fn get_connected_controllers(&self) -> Vec<u64> {
        self.api
            .input()
            .get_connected_controllers()
            .into_iter()
            .map(InputHandle::raw)
            .collect()
    }

    fn get_input_type_for_handle(&self, handle: u64) -> i32 {
        self.api
            .input()
            .get_input_type_for_handle(InputHandle::new(handle))
            .raw()
    }

    #[pyo3(signature = (explicitly_call_run_frame=false))]
    fn input_init(&self, explicitly_call_run_frame: bool) -> bool {
        self.api.input().init(explicitly_call_run_frame)
    }

    fn input_run_frame(&self) {
        self.api.input().run_frame()
    }

    // --- ISteamRemoteStorage ---

    fn file_write(&self, name: &str, data: Vec<u8>) -> bool {
        self.api.remote_storage().file_write(name, &data)
    }

    /// Read up to `size` bytes. Returns `(bytes_read, data)`.
    fn file_read(&self, name: &str, size: usize) -> (i32, Vec<u8>) {
        read_file(self.api.as_ref(), name, size)
    }

    fn file_delete(&self, name: &str) -> bool {
        self.api.remote_storage().file_delete(name)
    }

    fn get_file_size(&self, name: &str) -> i32 {
        self.api.remote_storage().get_file_size(name)
    }

    // --- ISteamUser ---

    fn get_steam_id(&self) -> u64 {
        self.api.user().get_steam_id().raw()
    }

    #[pyo3(signature = (data=Vec::new()))]
    fn request_encrypted_app_ticket(&self, data: Vec<u8>) -> ApiCallHandle {
        self.api.user().request_encrypted_app_ticket(&data).into()
    }

    /// Returns `(ticket, ok)`.
    fn get_encrypted_app_ticket(&self) -> (Vec<u8>, bool) {
        self.api.user().get_encrypted_app_ticket()
    }

    // --- ISteamUserStats ---

    fn request_current_stats(&self) -> bool {
        self.api.user_stats().request_current_stats()
    }

    /// Returns `(achieved, ok)`.
    fn get_achievement(&self, name: &str) -> (bool, bool) {
        self.api.user_stats().get_achievement(name)
    }

    fn set_achievement(&self, name: &str) -> bool {
        self.api.user_stats().set_achievement(name)
    }

    fn clear_achievement(&self, name: &str) -> bool {
        self.api.user_stats().clear_achievement(name)
    }

    fn store_stats(&self) -> bool {
        self.api.user_stats().store_stats()
    }

    // --- ISteamUtils ---

    fn is_steam_running_on_steam_deck(&self) -> bool {
        self.api.utils().is_steam_running_on_steam_deck()
    }

    /// Returns `(completed, failed)`.
    fn is_api_call_completed(&self, call: &ApiCallHandle) -> (bool, bool) {
        self.api.utils().is_api_call_completed(call.native())
    }

    fn get_api_call_failure_reason(&self, call: &ApiCallHandle) -> i32 {
        self.api
            .utils()
            .get_api_call_failure_reason(call.native())
            .raw()
    }

    /// Read a completed call's result struct of `size` bytes.
    /// Returns `(completed, failed, data)`.
    fn get_api_call_result(&self, call: &ApiCallHandle, size: usize) -> (bool, bool, Vec<u8>) {
        read_call_result(self.api.as_ref(), call.native(), size)
    }

    fn __repr__(&self) -> String {
        "Steam()".to_string()
    }
}

// ============================================================
// Standalone functions
// ============================================================

/// Every flat export the binding resolves, in resolution order.
#[pyfunction]
fn symbols() -> Vec<&'static str> {
    symbol_names()
}

// ============================================================
// Module definition
// ============================================================

#[pymodule]
fn _flatsteam(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Steam>()?;
    m.add_class::<ApiCallHandle>()?;
    m.add_function(wrap_pyfunction!(symbols, m)?)?;
    m.add("ENCRYPTED_APP_TICKET_RESPONSE", CallbackId::ENCRYPTED_APP_TICKET_RESPONSE)?;
    m.add("ENCRYPTED_APP_TICKET_RESPONSE_SIZE", EncryptedAppTicketResponse::SIZE)?;
    Ok(())
}

// ============================================================
// Tests: backend-level only (no Python interpreter in tests)
// ============================================================
