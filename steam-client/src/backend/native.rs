//! Native backend: the Steamworks shared library.
//!
//! Every export in [`FlatSymbol::ALL`] is resolved once, when the library
//! loads. Calls fetch the interface pointer through its versioned accessor
//! and forward their arguments in native order.
//!
//! A null interface pointer (SDK not initialized, Steam not running) is
//! never dereferenced; the call returns the native failure value instead.

use std::ffi::{c_char, c_int, c_void, CStr, CString};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::Library;
use steam_types::{
    ApiCallFailure, ApiCallHandle, AppId, CallbackId, FlatSymbol, InputHandle, SteamId,
    SteamInputType, STEAM_INPUT_MAX_COUNT,
};

use super::SteamApi;
use crate::config::SteamConfig;
use crate::error::LoadError;
use crate::interfaces::{
    SteamApps, SteamInput, SteamRemoteStorage, SteamUser, SteamUserStats, SteamUtils,
    MAX_APP_INSTALL_DIR_SIZE, MAX_ENCRYPTED_APP_TICKET_SIZE,
};

type Iface = *mut c_void;

type AccessorFn = unsafe extern "C" fn() -> Iface;
type RestartAppIfNecessaryFn = unsafe extern "C" fn(u32) -> bool;
type InitFn = unsafe extern "C" fn() -> bool;
type RunCallbacksFn = unsafe extern "C" fn();

type GetAppInstallDirFn = unsafe extern "C" fn(Iface, u32, *mut c_char, u32) -> u32;
type GetCurrentGameLanguageFn = unsafe extern "C" fn(Iface) -> *const c_char;

type GetConnectedControllersFn = unsafe extern "C" fn(Iface, *mut u64) -> c_int;
type GetInputTypeForHandleFn = unsafe extern "C" fn(Iface, u64) -> i32;
type InputInitFn = unsafe extern "C" fn(Iface, bool) -> bool;
type RunFrameFn = unsafe extern "C" fn(Iface, bool);

type FileWriteFn = unsafe extern "C" fn(Iface, *const c_char, *const c_void, i32) -> bool;
type FileReadFn = unsafe extern "C" fn(Iface, *const c_char, *mut c_void, i32) -> i32;
type NameBoolFn = unsafe extern "C" fn(Iface, *const c_char) -> bool;
type GetFileSizeFn = unsafe extern "C" fn(Iface, *const c_char) -> i32;

type GetSteamIdFn = unsafe extern "C" fn(Iface) -> u64;
type RequestEncryptedAppTicketFn = unsafe extern "C" fn(Iface, *mut c_void, c_int) -> u64;
type GetEncryptedAppTicketFn = unsafe extern "C" fn(Iface, *mut c_void, c_int, *mut u32) -> bool;

type IfaceBoolFn = unsafe extern "C" fn(Iface) -> bool;
type GetAchievementFn = unsafe extern "C" fn(Iface, *const c_char, *mut bool) -> bool;

type IsApiCallCompletedFn = unsafe extern "C" fn(Iface, u64, *mut bool) -> bool;
type GetApiCallFailureReasonFn = unsafe extern "C" fn(Iface, u64) -> i32;
type GetApiCallResultFn =
    unsafe extern "C" fn(Iface, u64, *mut c_void, c_int, c_int, *mut bool) -> bool;

/// Resolved function pointers plus the library that keeps them valid.
struct FlatFns {
    restart_app_if_necessary: RestartAppIfNecessaryFn,
    init: InitFn,
    run_callbacks: RunCallbacksFn,

    steam_apps: AccessorFn,
    apps_get_app_install_dir: GetAppInstallDirFn,
    apps_get_current_game_language: GetCurrentGameLanguageFn,

    steam_input: AccessorFn,
    input_get_connected_controllers: GetConnectedControllersFn,
    input_get_input_type_for_handle: GetInputTypeForHandleFn,
    input_init: InputInitFn,
    input_run_frame: RunFrameFn,

    steam_remote_storage: AccessorFn,
    remote_storage_file_write: FileWriteFn,
    remote_storage_file_read: FileReadFn,
    remote_storage_file_delete: NameBoolFn,
    remote_storage_get_file_size: GetFileSizeFn,

    steam_user: AccessorFn,
    user_get_steam_id: GetSteamIdFn,
    user_request_encrypted_app_ticket: RequestEncryptedAppTicketFn,
    user_get_encrypted_app_ticket: GetEncryptedAppTicketFn,

    steam_user_stats: AccessorFn,
    user_stats_request_current_stats: IfaceBoolFn,
    user_stats_get_achievement: GetAchievementFn,
    user_stats_set_achievement: NameBoolFn,
    user_stats_clear_achievement: NameBoolFn,
    user_stats_store_stats: IfaceBoolFn,

    steam_utils: AccessorFn,
    utils_is_steam_running_on_steam_deck: IfaceBoolFn,
    utils_is_api_call_completed: IsApiCallCompletedFn,
    utils_get_api_call_failure_reason: GetApiCallFailureReasonFn,
    utils_get_api_call_result: GetApiCallResultFn,

    _library: Library,
}

/// Look up one export and copy the function pointer out.
///
/// # Safety
///
/// `T` must be the exact function-pointer type of the export.
unsafe fn symbol<T: Copy>(library: &Library, symbol: FlatSymbol) -> Result<T, LoadError> {
    let resolved: libloading::Symbol<'_, T> = library
        .get(symbol.name().as_bytes())
        .map_err(|source| LoadError::MissingSymbol {
            symbol: symbol.name(),
            source,
        })?;
    tracing::debug!("Resolved {}", symbol);
    Ok(*resolved)
}

impl FlatFns {
    /// Resolve the whole table against `library`.
    ///
    /// # Safety
    ///
    /// `library` must be a Steamworks SDK build exporting the flat API
    /// with the signatures declared above.
    unsafe fn resolve(library: Library) -> Result<Self, LoadError> {
        use FlatSymbol as S;
        let lib = &library;
        Ok(Self {
            restart_app_if_necessary: symbol(lib, S::RestartAppIfNecessary)?,
            init: symbol(lib, S::Init)?,
            run_callbacks: symbol(lib, S::RunCallbacks)?,

            steam_apps: symbol(lib, S::SteamApps)?,
            apps_get_app_install_dir: symbol(lib, S::AppsGetAppInstallDir)?,
            apps_get_current_game_language: symbol(lib, S::AppsGetCurrentGameLanguage)?,

            steam_input: symbol(lib, S::SteamInput)?,
            input_get_connected_controllers: symbol(lib, S::InputGetConnectedControllers)?,
            input_get_input_type_for_handle: symbol(lib, S::InputGetInputTypeForHandle)?,
            input_init: symbol(lib, S::InputInit)?,
            input_run_frame: symbol(lib, S::InputRunFrame)?,

            steam_remote_storage: symbol(lib, S::SteamRemoteStorage)?,
            remote_storage_file_write: symbol(lib, S::RemoteStorageFileWrite)?,
            remote_storage_file_read: symbol(lib, S::RemoteStorageFileRead)?,
            remote_storage_file_delete: symbol(lib, S::RemoteStorageFileDelete)?,
            remote_storage_get_file_size: symbol(lib, S::RemoteStorageGetFileSize)?,

            steam_user: symbol(lib, S::SteamUser)?,
            user_get_steam_id: symbol(lib, S::UserGetSteamId)?,
            user_request_encrypted_app_ticket: symbol(lib, S::UserRequestEncryptedAppTicket)?,
            user_get_encrypted_app_ticket: symbol(lib, S::UserGetEncryptedAppTicket)?,

            steam_user_stats: symbol(lib, S::SteamUserStats)?,
            user_stats_request_current_stats: symbol(lib, S::UserStatsRequestCurrentStats)?,
            user_stats_get_achievement: symbol(lib, S::UserStatsGetAchievement)?,
            user_stats_set_achievement: symbol(lib, S::UserStatsSetAchievement)?,
            user_stats_clear_achievement: symbol(lib, S::UserStatsClearAchievement)?,
            user_stats_store_stats: symbol(lib, S::UserStatsStoreStats)?,

            steam_utils: symbol(lib, S::SteamUtils)?,
            utils_is_steam_running_on_steam_deck: symbol(lib, S::UtilsIsSteamRunningOnSteamDeck)?,
            utils_is_api_call_completed: symbol(lib, S::UtilsIsApiCallCompleted)?,
            utils_get_api_call_failure_reason: symbol(lib, S::UtilsGetApiCallFailureReason)?,
            utils_get_api_call_result: symbol(lib, S::UtilsGetApiCallResult)?,

            _library: library,
        })
    }

    /// Call a versioned accessor; `None` when the SDK hands back null.
    fn interface(&self, accessor: AccessorFn) -> Option<Iface> {
        // SAFETY: accessors take no arguments and only read SDK globals.
        let ptr = unsafe { accessor() };
        (!ptr.is_null()).then_some(ptr)
    }
}

/// Copy `s` into a C string, ending at the first interior NUL as a
/// `const char*` reader would.
fn c_string(s: &str) -> CString {
    let bytes = s.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    CString::new(&bytes[..end]).unwrap_or_default()
}

/// Text of a NUL-terminated buffer.
fn buffer_to_string(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

/// The Steamworks SDK loaded from a shared library.
///
/// Holds the library and its resolved function pointers; nothing else.
/// Interface objects borrow from this value, so the library stays loaded
/// for as long as any of them is reachable.
pub struct NativeSteam {
    path: PathBuf,
    fns: Arc<FlatFns>,
    apps: NativeApps,
    input: NativeInput,
    remote_storage: NativeRemoteStorage,
    user: NativeUser,
    user_stats: NativeUserStats,
    utils: NativeUtils,
}

impl NativeSteam {
    /// Load the SDK from `path` and resolve every flat export.
    ///
    /// # Errors
    ///
    /// [`LoadError::Open`] if the loader rejects the file,
    /// [`LoadError::MissingSymbol`] for the first export it lacks.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        // SAFETY: loading runs the library's initializers. The SDK's are
        // side-effect free until SteamAPI_Init is called.
        let library = unsafe { Library::new(path) }.map_err(|source| {
            tracing::warn!("Failed to open {}: {}", path.display(), source);
            LoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // SAFETY: the signatures above mirror steam_api_flat.h.
        let fns = unsafe { FlatFns::resolve(library) }.map_err(|e| {
            tracing::warn!("Failed to bind {}: {}", path.display(), e);
            e
        })?;

        tracing::info!(
            "Loaded Steamworks flat API from {} ({} symbols)",
            path.display(),
            FlatSymbol::ALL.len()
        );

        Ok(Self::with_fns(path.to_path_buf(), fns))
    }

    fn with_fns(path: PathBuf, fns: FlatFns) -> Self {
        let fns = Arc::new(fns);
        Self {
            path,
            apps: NativeApps {
                fns: Arc::clone(&fns),
            },
            input: NativeInput {
                fns: Arc::clone(&fns),
            },
            remote_storage: NativeRemoteStorage {
                fns: Arc::clone(&fns),
            },
            user: NativeUser {
                fns: Arc::clone(&fns),
            },
            user_stats: NativeUserStats {
                fns: Arc::clone(&fns),
            },
            utils: NativeUtils {
                fns: Arc::clone(&fns),
            },
            fns,
        }
    }

    /// Load the library `config` points at.
    ///
    /// See [`SteamConfig::library_path`] for the lookup order.
    pub fn from_config(config: &SteamConfig, explicit: Option<&Path>) -> Result<Self, LoadError> {
        Self::load(config.library_path(explicit))
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for NativeSteam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeSteam")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SteamApi for NativeSteam {
    fn restart_app_if_necessary(&self, app_id: AppId) -> bool {
        // SAFETY: plain integer argument.
        let restart = unsafe { (self.fns.restart_app_if_necessary)(app_id.raw()) };
        tracing::debug!("RestartAppIfNecessary({}) = {}", app_id, restart);
        restart
    }

    fn init(&self) -> bool {
        // SAFETY: no arguments.
        let ok = unsafe { (self.fns.init)() };
        tracing::debug!("SteamAPI_Init = {}", ok);
        ok
    }

    fn run_callbacks(&self) {
        // SAFETY: no arguments.
        unsafe { (self.fns.run_callbacks)() }
    }

    fn apps(&self) -> &dyn SteamApps {
        &self.apps
    }

    fn input(&self) -> &dyn SteamInput {
        &self.input
    }

    fn remote_storage(&self) -> &dyn SteamRemoteStorage {
        &self.remote_storage
    }

    fn user(&self) -> &dyn SteamUser {
        &self.user
    }

    fn user_stats(&self) -> &dyn SteamUserStats {
        &self.user_stats
    }

    fn utils(&self) -> &dyn SteamUtils {
        &self.utils
    }
}

struct NativeApps {
    fns: Arc<FlatFns>,
}

impl SteamApps for NativeApps {
    fn get_app_install_dir(&self, app_id: AppId) -> String {
        let Some(iface) = self.fns.interface(self.fns.steam_apps) else {
            return String::new();
        };
        let mut buf = vec![0u8; MAX_APP_INSTALL_DIR_SIZE];
        // SAFETY: buf is writable for the length passed.
        let written = unsafe {
            (self.fns.apps_get_app_install_dir)(
                iface,
                app_id.raw(),
                buf.as_mut_ptr().cast(),
                MAX_APP_INSTALL_DIR_SIZE as u32,
            )
        };
        let written = (written as usize).min(buf.len());
        buffer_to_string(&buf[..written])
    }

    fn get_current_game_language(&self) -> String {
        let Some(iface) = self.fns.interface(self.fns.steam_apps) else {
            return String::new();
        };
        // SAFETY: the SDK returns a static NUL-terminated string or null.
        unsafe {
            let ptr = (self.fns.apps_get_current_game_language)(iface);
            if ptr.is_null() {
                String::new()
            } else {
                CStr::from_ptr(ptr).to_string_lossy().into_owned()
            }
        }
    }
}

struct NativeInput {
    fns: Arc<FlatFns>,
}

impl SteamInput for NativeInput {
    fn get_connected_controllers(&self) -> Vec<InputHandle> {
        let Some(iface) = self.fns.interface(self.fns.steam_input) else {
            return Vec::new();
        };
        let mut handles = [0u64; STEAM_INPUT_MAX_COUNT];
        // SAFETY: the SDK writes at most STEAM_INPUT_MAX_COUNT handles.
        let count =
            unsafe { (self.fns.input_get_connected_controllers)(iface, handles.as_mut_ptr()) };
        let count = usize::try_from(count).unwrap_or(0).min(STEAM_INPUT_MAX_COUNT);
        handles[..count].iter().copied().map(InputHandle::new).collect()
    }

    fn get_input_type_for_handle(&self, handle: InputHandle) -> SteamInputType {
        let Some(iface) = self.fns.interface(self.fns.steam_input) else {
            return SteamInputType::Unknown;
        };
        // SAFETY: integer argument.
        SteamInputType(unsafe { (self.fns.input_get_input_type_for_handle)(iface, handle.raw()) })
    }

    fn init(&self, explicitly_call_run_frame: bool) -> bool {
        let Some(iface) = self.fns.interface(self.fns.steam_input) else {
            return false;
        };
        // SAFETY: bool argument.
        unsafe { (self.fns.input_init)(iface, explicitly_call_run_frame) }
    }

    fn run_frame(&self) {
        if let Some(iface) = self.fns.interface(self.fns.steam_input) {
            // SAFETY: the second argument is reserved.
            unsafe { (self.fns.input_run_frame)(iface, false) }
        }
    }
}

struct NativeRemoteStorage {
    fns: Arc<FlatFns>,
}

impl SteamRemoteStorage for NativeRemoteStorage {
    fn file_write(&self, file: &str, data: &[u8]) -> bool {
        let Some(iface) = self.fns.interface(self.fns.steam_remote_storage) else {
            return false;
        };
        let Ok(len) = i32::try_from(data.len()) else {
            return false;
        };
        let name = c_string(file);
        // SAFETY: name is NUL-terminated; data is readable for len bytes.
        unsafe {
            (self.fns.remote_storage_file_write)(iface, name.as_ptr(), data.as_ptr().cast(), len)
        }
    }

    fn file_read(&self, file: &str, data: &mut [u8]) -> i32 {
        let Some(iface) = self.fns.interface(self.fns.steam_remote_storage) else {
            return 0;
        };
        let Ok(len) = i32::try_from(data.len()) else {
            return 0;
        };
        let name = c_string(file);
        // SAFETY: data is writable for len bytes.
        unsafe {
            (self.fns.remote_storage_file_read)(iface, name.as_ptr(), data.as_mut_ptr().cast(), len)
        }
    }

    fn file_delete(&self, file: &str) -> bool {
        let Some(iface) = self.fns.interface(self.fns.steam_remote_storage) else {
            return false;
        };
        let name = c_string(file);
        // SAFETY: name is NUL-terminated.
        unsafe { (self.fns.remote_storage_file_delete)(iface, name.as_ptr()) }
    }

    fn get_file_size(&self, file: &str) -> i32 {
        let Some(iface) = self.fns.interface(self.fns.steam_remote_storage) else {
            return 0;
        };
        let name = c_string(file);
        // SAFETY: name is NUL-terminated.
        unsafe { (self.fns.remote_storage_get_file_size)(iface, name.as_ptr()) }
    }
}

struct NativeUser {
    fns: Arc<FlatFns>,
}

impl SteamUser for NativeUser {
    fn get_steam_id(&self) -> SteamId {
        let Some(iface) = self.fns.interface(self.fns.steam_user) else {
            return SteamId::default();
        };
        // SAFETY: no pointer arguments.
        SteamId::new(unsafe { (self.fns.user_get_steam_id)(iface) })
    }

    fn request_encrypted_app_ticket(&self, data_to_include: &[u8]) -> ApiCallHandle {
        let invalid = ApiCallHandle::new(
            ApiCallHandle::INVALID_RAW,
            CallbackId::ENCRYPTED_APP_TICKET_RESPONSE,
        );
        let Some(iface) = self.fns.interface(self.fns.steam_user) else {
            return invalid;
        };
        let Ok(len) = c_int::try_from(data_to_include.len()) else {
            return invalid;
        };
        // SAFETY: the SDK copies the data and never writes through the pointer.
        let raw = unsafe {
            (self.fns.user_request_encrypted_app_ticket)(
                iface,
                data_to_include.as_ptr() as *mut c_void,
                len,
            )
        };
        ApiCallHandle::new(raw, CallbackId::ENCRYPTED_APP_TICKET_RESPONSE)
    }

    fn get_encrypted_app_ticket(&self) -> (Vec<u8>, bool) {
        let Some(iface) = self.fns.interface(self.fns.steam_user) else {
            return (Vec::new(), false);
        };
        let mut ticket = vec![0u8; MAX_ENCRYPTED_APP_TICKET_SIZE];
        let mut size: u32 = 0;
        // SAFETY: ticket is writable for the length passed; size is a valid out-pointer.
        let ok = unsafe {
            (self.fns.user_get_encrypted_app_ticket)(
                iface,
                ticket.as_mut_ptr().cast(),
                MAX_ENCRYPTED_APP_TICKET_SIZE as c_int,
                &mut size,
            )
        };
        ticket.truncate((size as usize).min(MAX_ENCRYPTED_APP_TICKET_SIZE));
        (ticket, ok)
    }
}

struct NativeUserStats {
    fns: Arc<FlatFns>,
}

impl NativeUserStats {
    fn call_with_name(&self, f: NameBoolFn, name: &str) -> bool {
        let Some(iface) = self.fns.interface(self.fns.steam_user_stats) else {
            return false;
        };
        let name = c_string(name);
        // SAFETY: name is NUL-terminated.
        unsafe { f(iface, name.as_ptr()) }
    }

    fn call(&self, f: IfaceBoolFn) -> bool {
        let Some(iface) = self.fns.interface(self.fns.steam_user_stats) else {
            return false;
        };
        // SAFETY: no arguments beyond the interface.
        unsafe { f(iface) }
    }
}

impl SteamUserStats for NativeUserStats {
    fn request_current_stats(&self) -> bool {
        self.call(self.fns.user_stats_request_current_stats)
    }

    fn get_achievement(&self, name: &str) -> (bool, bool) {
        let Some(iface) = self.fns.interface(self.fns.steam_user_stats) else {
            return (false, false);
        };
        let name = c_string(name);
        let mut achieved = false;
        // SAFETY: name is NUL-terminated; achieved is a valid out-pointer.
        let ok = unsafe {
            (self.fns.user_stats_get_achievement)(iface, name.as_ptr(), &mut achieved)
        };
        (achieved, ok)
    }

    fn set_achievement(&self, name: &str) -> bool {
        self.call_with_name(self.fns.user_stats_set_achievement, name)
    }

    fn clear_achievement(&self, name: &str) -> bool {
        self.call_with_name(self.fns.user_stats_clear_achievement, name)
    }

    fn store_stats(&self) -> bool {
        self.call(self.fns.user_stats_store_stats)
    }
}

struct NativeUtils {
    fns: Arc<FlatFns>,
}

impl SteamUtils for NativeUtils {
    fn is_steam_running_on_steam_deck(&self) -> bool {
        let Some(iface) = self.fns.interface(self.fns.steam_utils) else {
            return false;
        };
        // SAFETY: no arguments beyond the interface.
        unsafe { (self.fns.utils_is_steam_running_on_steam_deck)(iface) }
    }

    fn is_api_call_completed(&self, call: ApiCallHandle) -> (bool, bool) {
        let Some(iface) = self.fns.interface(self.fns.steam_utils) else {
            return (false, true);
        };
        let mut failed = false;
        // SAFETY: failed is a valid out-pointer.
        let completed =
            unsafe { (self.fns.utils_is_api_call_completed)(iface, call.raw(), &mut failed) };
        (completed, failed)
    }

    fn get_api_call_failure_reason(&self, call: ApiCallHandle) -> ApiCallFailure {
        let Some(iface) = self.fns.interface(self.fns.steam_utils) else {
            return ApiCallFailure::SteamGone;
        };
        // SAFETY: integer argument.
        ApiCallFailure(unsafe { (self.fns.utils_get_api_call_failure_reason)(iface, call.raw()) })
    }

    fn get_api_call_result(&self, call: ApiCallHandle, response: &mut [u8]) -> (bool, bool) {
        let Some(iface) = self.fns.interface(self.fns.steam_utils) else {
            return (false, true);
        };
        let Ok(len) = c_int::try_from(response.len()) else {
            return (false, true);
        };
        let mut failed = false;
        // SAFETY: response is writable for len bytes; failed is a valid out-pointer.
        let completed = unsafe {
            (self.fns.utils_get_api_call_result)(
                iface,
                call.raw(),
                response.as_mut_ptr().cast(),
                len,
                call.callback_id(),
                &mut failed,
            )
        };
        (completed, failed)
    }
}


/// Marshaling checks against a hand-built function table.
#[cfg(all(test, unix))]
mod marshal_tests {
    use super::*;
    use std::cell::RefCell;

    /// Arguments the stub exports saw on this thread.
    #[derive(Default)]
    struct Seen {
        run_frame_reserved: Option<bool>,
        names: Vec<String>,
        write_len: Option<i32>,
        read_len: Option<i32>,
        ticket_data: Option<Vec<u8>>,
        result_len: Option<c_int>,
        result_callback: Option<c_int>,
    }

    thread_local! {
        static SEEN: RefCell<Seen> = RefCell::new(Seen::default());
    }

    fn seen<R>(f: impl FnOnce(&mut Seen) -> R) -> R {
        SEEN.with(|s| f(&mut s.borrow_mut()))
    }

    unsafe fn record_name(name: *const c_char) {
        let name = CStr::from_ptr(name).to_string_lossy().into_owned();
        seen(|s| s.names.push(name));
    }

    static LIVE_INTERFACE: u8 = 0;

    unsafe extern "C" fn live_interface() -> Iface {
        &LIVE_INTERFACE as *const u8 as Iface
    }

    unsafe extern "C" fn null_interface() -> Iface {
        std::ptr::null_mut()
    }

    unsafe extern "C" fn restart_app_if_necessary(app_id: u32) -> bool {
        app_id == 480
    }

    unsafe extern "C" fn init() -> bool {
        true
    }

    unsafe extern "C" fn run_callbacks() {}

    unsafe extern "C" fn get_app_install_dir(
        _: Iface,
        app_id: u32,
        buf: *mut c_char,
        len: u32,
    ) -> u32 {
        let out = std::slice::from_raw_parts_mut(buf.cast::<u8>(), len as usize);
        match app_id {
            // Reported length shorter than the bytes written.
            1 => {
                out[..21].copy_from_slice(b"/games/spacewar/extra");
                15
            }
            // NUL inside the reported length.
            2 => {
                out[..20].copy_from_slice(b"/games/spacewar\0junk");
                20
            }
            // Reported length past the end of the buffer.
            _ => {
                out.fill(b'a');
                u32::MAX
            }
        }
    }

    unsafe extern "C" fn get_current_game_language(_: Iface) -> *const c_char {
        b"english\0".as_ptr().cast()
    }

    unsafe extern "C" fn get_connected_controllers(_: Iface, out: *mut u64) -> c_int {
        let out = std::slice::from_raw_parts_mut(out, STEAM_INPUT_MAX_COUNT);
        for (i, handle) in out.iter_mut().enumerate() {
            *handle = i as u64 + 1;
        }
        40
    }

    unsafe extern "C" fn get_input_type_for_handle(_: Iface, handle: u64) -> i32 {
        handle as i32
    }

    unsafe extern "C" fn input_init(_: Iface, explicitly_call_run_frame: bool) -> bool {
        explicitly_call_run_frame
    }

    unsafe extern "C" fn run_frame(_: Iface, reserved: bool) {
        seen(|s| s.run_frame_reserved = Some(reserved));
    }

    unsafe extern "C" fn file_write(
        _: Iface,
        name: *const c_char,
        _data: *const c_void,
        len: i32,
    ) -> bool {
        record_name(name);
        seen(|s| s.write_len = Some(len));
        len > 0
    }

    unsafe extern "C" fn file_read(
        _: Iface,
        name: *const c_char,
        data: *mut c_void,
        len: i32,
    ) -> i32 {
        record_name(name);
        seen(|s| s.read_len = Some(len));
        std::slice::from_raw_parts_mut(data.cast::<u8>(), len as usize).fill(0xAB);
        len
    }

    unsafe extern "C" fn record_name_ok(_: Iface, name: *const c_char) -> bool {
        record_name(name);
        true
    }

    unsafe extern "C" fn get_file_size(_: Iface, name: *const c_char) -> i32 {
        record_name(name);
        -1
    }

    unsafe extern "C" fn get_steam_id(_: Iface) -> u64 {
        76_561_197_960_265_729
    }

    unsafe extern "C" fn request_encrypted_app_ticket(
        _: Iface,
        data: *mut c_void,
        len: c_int,
    ) -> u64 {
        let data = std::slice::from_raw_parts(data.cast::<u8>(), len as usize).to_vec();
        seen(|s| s.ticket_data = Some(data));
        99
    }

    unsafe extern "C" fn get_encrypted_app_ticket(
        _: Iface,
        buf: *mut c_void,
        len: c_int,
        size: *mut u32,
    ) -> bool {
        std::slice::from_raw_parts_mut(buf.cast::<u8>(), len as usize).fill(0x5A);
        *size = 5000;
        true
    }

    unsafe extern "C" fn always_true(_: Iface) -> bool {
        true
    }

    unsafe extern "C" fn get_achievement(
        _: Iface,
        name: *const c_char,
        achieved: *mut bool,
    ) -> bool {
        *achieved = CStr::from_ptr(name).to_bytes() == b"ACH_WIN_ONE_GAME";
        true
    }

    unsafe extern "C" fn is_api_call_completed(_: Iface, call: u64, failed: *mut bool) -> bool {
        *failed = false;
        call == 99
    }

    unsafe extern "C" fn get_api_call_failure_reason(_: Iface, _call: u64) -> i32 {
        ApiCallFailure::MismatchedCallback.raw()
    }

    unsafe extern "C" fn get_api_call_result(
        _: Iface,
        _call: u64,
        _buf: *mut c_void,
        len: c_int,
        callback_id: c_int,
        failed: *mut bool,
    ) -> bool {
        seen(|s| {
            s.result_len = Some(len);
            s.result_callback = Some(callback_id);
        });
        *failed = false;
        true
    }

    /// Every export stubbed; `accessor` stands in for all six interface
    /// accessors.
    fn stub_steam(accessor: AccessorFn) -> NativeSteam {
        let fns = FlatFns {
            restart_app_if_necessary,
            init,
            run_callbacks,

            steam_apps: accessor,
            apps_get_app_install_dir: get_app_install_dir,
            apps_get_current_game_language: get_current_game_language,

            steam_input: accessor,
            input_get_connected_controllers: get_connected_controllers,
            input_get_input_type_for_handle: get_input_type_for_handle,
            input_init,
            input_run_frame: run_frame,

            steam_remote_storage: accessor,
            remote_storage_file_write: file_write,
            remote_storage_file_read: file_read,
            remote_storage_file_delete: record_name_ok,
            remote_storage_get_file_size: get_file_size,

            steam_user: accessor,
            user_get_steam_id: get_steam_id,
            user_request_encrypted_app_ticket: request_encrypted_app_ticket,
            user_get_encrypted_app_ticket: get_encrypted_app_ticket,

            steam_user_stats: accessor,
            user_stats_request_current_stats: always_true,
            user_stats_get_achievement: get_achievement,
            user_stats_set_achievement: record_name_ok,
            user_stats_clear_achievement: record_name_ok,
            user_stats_store_stats: always_true,

            steam_utils: accessor,
            utils_is_steam_running_on_steam_deck: always_true,
            utils_is_api_call_completed: is_api_call_completed,
            utils_get_api_call_failure_reason: get_api_call_failure_reason,
            utils_get_api_call_result: get_api_call_result,

            _library: libloading::os::unix::Library::this().into(),
        };
        NativeSteam::with_fns(PathBuf::from("stub"), fns)
    }

    #[test]
    fn null_interfaces_return_failure_values() {
        let steam = stub_steam(null_interface);

        assert_eq!(steam.apps().get_app_install_dir(AppId::new(1)), "");
        assert_eq!(steam.apps().get_current_game_language(), "");

        assert!(steam.input().get_connected_controllers().is_empty());
        assert_eq!(
            steam.input().get_input_type_for_handle(InputHandle::new(77)),
            SteamInputType::Unknown
        );
        assert!(!steam.input().init(true));
        steam.input().run_frame();

        assert!(!steam.remote_storage().file_write("save.bin", b"data"));
        assert_eq!(steam.remote_storage().file_read("save.bin", &mut [0u8; 4]), 0);
        assert!(!steam.remote_storage().file_delete("save.bin"));
        assert_eq!(steam.remote_storage().get_file_size("save.bin"), 0);

        assert_eq!(steam.user().get_steam_id(), SteamId::default());
        let call = steam.user().request_encrypted_app_ticket(b"abc");
        assert!(call.is_invalid());
        assert_eq!(call.callback_id(), CallbackId::ENCRYPTED_APP_TICKET_RESPONSE);
        assert_eq!(steam.user().get_encrypted_app_ticket(), (Vec::new(), false));

        assert!(!steam.user_stats().request_current_stats());
        assert_eq!(steam.user_stats().get_achievement("ACH_WIN_ONE_GAME"), (false, false));
        assert!(!steam.user_stats().set_achievement("ACH_WIN_ONE_GAME"));
        assert!(!steam.user_stats().clear_achievement("ACH_WIN_ONE_GAME"));
        assert!(!steam.user_stats().store_stats());

        let live_call = ApiCallHandle::new(99, CallbackId::ENCRYPTED_APP_TICKET_RESPONSE);
        assert!(!steam.utils().is_steam_running_on_steam_deck());
        assert_eq!(steam.utils().is_api_call_completed(live_call), (false, true));
        assert_eq!(
            steam.utils().get_api_call_failure_reason(live_call),
            ApiCallFailure::SteamGone
        );
        assert_eq!(
            steam.utils().get_api_call_result(live_call, &mut [0u8; 8]),
            (false, true)
        );

        // No interface export was reached.
        seen(|s| {
            assert_eq!(s.run_frame_reserved, None);
            assert!(s.names.is_empty());
            assert_eq!(s.ticket_data, None);
            assert_eq!(s.result_len, None);
        });

        // Global entry points need no interface.
        assert!(steam.restart_app_if_necessary(AppId::new(480)));
        assert!(steam.init());
    }

    #[test]
    fn install_dir_stops_at_reported_length_or_nul() {
        let steam = stub_steam(live_interface);
        let apps = steam.apps();

        assert_eq!(apps.get_app_install_dir(AppId::new(1)), "/games/spacewar");
        assert_eq!(apps.get_app_install_dir(AppId::new(2)), "/games/spacewar");

        let overlong = apps.get_app_install_dir(AppId::new(3));
        assert_eq!(overlong.len(), MAX_APP_INSTALL_DIR_SIZE);
        assert!(overlong.bytes().all(|b| b == b'a'));

        assert_eq!(apps.get_current_game_language(), "english");
    }

    #[test]
    fn controller_count_is_clamped_to_array() {
        let steam = stub_steam(live_interface);

        let handles = steam.input().get_connected_controllers();
        assert_eq!(handles.len(), STEAM_INPUT_MAX_COUNT);
        assert_eq!(handles[0], InputHandle::new(1));
        assert_eq!(handles[15], InputHandle::new(16));

        // Unnamed input types pass through.
        assert_eq!(
            steam.input().get_input_type_for_handle(InputHandle::new(77)),
            SteamInputType(77)
        );
        assert!(steam.input().init(true));
        assert!(!steam.input().init(false));
    }

    #[test]
    fn run_frame_passes_reserved_false() {
        let steam = stub_steam(live_interface);
        steam.input().run_frame();
        seen(|s| assert_eq!(s.run_frame_reserved, Some(false)));
    }

    #[test]
    fn storage_forwards_names_and_lengths() {
        let steam = stub_steam(live_interface);
        let storage = steam.remote_storage();

        assert!(storage.file_write("save\0.bin", b"hello"));
        let mut buf = [0u8; 6];
        assert_eq!(storage.file_read("save.bin", &mut buf), 6);
        assert_eq!(buf, [0xAB; 6]);
        assert!(storage.file_delete("save.bin"));
        assert_eq!(storage.get_file_size("save.bin"), -1);

        seen(|s| {
            assert_eq!(s.names, ["save", "save.bin", "save.bin", "save.bin"]);
            assert_eq!(s.write_len, Some(5));
            assert_eq!(s.read_len, Some(6));
        });
    }

    #[test]
    fn native_length_guard() {
        assert!(i32::try_from(i32::MAX as usize).is_ok());
        assert!(c_int::try_from(i32::MAX as usize + 1).is_err());

        let steam = stub_steam(live_interface);
        // Empty payloads are still forwarded with a zero length.
        assert!(!steam.remote_storage().file_write("empty.bin", &[]));
        seen(|s| assert_eq!(s.write_len, Some(0)));
    }

    #[test]
    fn ticket_is_truncated_to_buffer() {
        let steam = stub_steam(live_interface);
        let user = steam.user();

        assert_eq!(user.get_steam_id(), SteamId::new(76_561_197_960_265_729));

        let call = user.request_encrypted_app_ticket(b"abc");
        assert_eq!(call, ApiCallHandle::new(99, CallbackId::ENCRYPTED_APP_TICKET_RESPONSE));
        seen(|s| assert_eq!(s.ticket_data.as_deref(), Some(&b"abc"[..])));

        let (ticket, ok) = user.get_encrypted_app_ticket();
        assert!(ok);
        assert_eq!(ticket.len(), MAX_ENCRYPTED_APP_TICKET_SIZE);
        assert!(ticket.iter().all(|&b| b == 0x5A));
    }

    #[test]
    fn achievements_forward_names() {
        let steam = stub_steam(live_interface);
        let stats = steam.user_stats();

        assert!(stats.request_current_stats());
        assert_eq!(stats.get_achievement("ACH_WIN_ONE_GAME"), (true, true));
        assert_eq!(stats.get_achievement("ACH_WIN_100_GAMES"), (false, true));
        assert!(stats.set_achievement("ACH_TRAVEL_FAR_ACCUM"));
        assert!(stats.clear_achievement("ACH_TRAVEL_FAR_SINGLE"));
        assert!(stats.store_stats());

        seen(|s| assert_eq!(s.names, ["ACH_TRAVEL_FAR_ACCUM", "ACH_TRAVEL_FAR_SINGLE"]));
    }

    #[test]
    fn call_result_forwards_callback_id() {
        let steam = stub_steam(live_interface);
        let utils = steam.utils();
        let call = ApiCallHandle::new(99, CallbackId::ENCRYPTED_APP_TICKET_RESPONSE);

        assert!(utils.is_steam_running_on_steam_deck());
        assert_eq!(utils.is_api_call_completed(call), (true, false));
        assert_eq!(
            utils.is_api_call_completed(ApiCallHandle::new(5, 154)),
            (false, false)
        );
        assert_eq!(
            utils.get_api_call_failure_reason(call),
            ApiCallFailure::MismatchedCallback
        );

        let mut response = [0u8; 24];
        assert_eq!(utils.get_api_call_result(call, &mut response), (true, false));
        seen(|s| {
            assert_eq!(s.result_len, Some(24));
            assert_eq!(s.result_callback, Some(154));
        });

        let other = ApiCallHandle::new(99, 1101);
        utils.get_api_call_result(other, &mut response);
        seen(|s| assert_eq!(s.result_callback, Some(1101)));
    }
}
