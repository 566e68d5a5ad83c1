//! Mock backend for testing.
//!
//! Keeps remote storage, achievements, controllers and asynchronous calls
//! in memory, and lets tests drive completion and inject failures.

use super::SteamApi;
use crate::interfaces::{
    SteamApps, SteamInput, SteamRemoteStorage, SteamUser, SteamUserStats, SteamUtils,
    MAX_ENCRYPTED_APP_TICKET_SIZE,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use steam_types::{
    ApiCallFailure, ApiCallHandle, ApiCallResult, AppId, CallbackId, EncryptedAppTicketResponse,
    InputHandle, SteamId, SteamInputType, STEAM_INPUT_MAX_COUNT,
};

/// Steam id reported by a fresh mock.
pub const MOCK_STEAM_ID: SteamId = SteamId::new(76_561_197_960_265_729);

/// Language reported by a fresh mock.
pub const MOCK_LANGUAGE: &str = "english";

const TICKET_PREFIX: &[u8] = b"mock-ticket:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallState {
    Pending,
    Completed(ApiCallResult),
    Failed(ApiCallFailure),
}

#[derive(Debug)]
struct MockCall {
    callback_id: i32,
    state: CallState,
    ticket: Vec<u8>,
}

#[derive(Debug)]
struct MockState {
    init_result: bool,
    initialized: bool,
    restart_required: bool,
    restart_checks: Vec<AppId>,
    run_callbacks_count: usize,
    complete_on_run_callbacks: bool,

    language: String,
    install_dirs: HashMap<AppId, String>,

    input_initialized: bool,
    explicitly_call_run_frame: bool,
    run_frame_count: usize,
    controllers: Vec<(InputHandle, SteamInputType)>,

    files: BTreeMap<String, Vec<u8>>,
    fail_next_file_write: bool,

    steam_id: SteamId,
    ticket_override: Option<Vec<u8>>,
    encrypted_ticket: Option<Vec<u8>>,

    stats_requested: bool,
    achievements: BTreeMap<String, bool>,
    store_stats_count: usize,

    steam_deck: bool,
    next_api_call: u64,
    api_calls: BTreeMap<u64, MockCall>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            init_result: true,
            initialized: false,
            restart_required: false,
            restart_checks: Vec::new(),
            run_callbacks_count: 0,
            complete_on_run_callbacks: false,
            language: MOCK_LANGUAGE.to_string(),
            install_dirs: HashMap::new(),
            input_initialized: false,
            explicitly_call_run_frame: false,
            run_frame_count: 0,
            controllers: Vec::new(),
            files: BTreeMap::new(),
            fail_next_file_write: false,
            steam_id: MOCK_STEAM_ID,
            ticket_override: None,
            encrypted_ticket: None,
            stats_requested: false,
            achievements: BTreeMap::new(),
            store_stats_count: 0,
            steam_deck: false,
            next_api_call: 1,
            api_calls: BTreeMap::new(),
        }
    }
}

impl MockState {
    fn complete(&mut self, raw: u64, result: ApiCallResult) -> bool {
        let Some(call) = self.api_calls.get_mut(&raw) else {
            return false;
        };
        if call.state != CallState::Pending {
            return false;
        }
        call.state = CallState::Completed(result);
        if result == ApiCallResult::OK
            && call.callback_id == CallbackId::ENCRYPTED_APP_TICKET_RESPONSE
        {
            self.encrypted_ticket = Some(call.ticket.clone());
        }
        true
    }

    fn complete_all_pending(&mut self) {
        let pending: Vec<u64> = self
            .api_calls
            .iter()
            .filter(|(_, call)| call.state == CallState::Pending)
            .map(|(raw, _)| *raw)
            .collect();
        for raw in pending {
            self.complete(raw, ApiCallResult::OK);
        }
    }
}

type Shared = Arc<Mutex<MockState>>;

// A panicking test must not poison every later assertion on the same mock.
fn lock(state: &Shared) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory [`SteamApi`].
///
/// Clones share state, so a test can hand one clone to the code under test
/// and keep another for setup and inspection.
#[derive(Debug, Clone)]
pub struct MockSteam {
    state: Shared,
    apps: MockApps,
    input: MockInput,
    remote_storage: MockRemoteStorage,
    user: MockUser,
    user_stats: MockUserStats,
    utils: MockUtils,
}

impl MockSteam {
    /// Create a new mock: init succeeds, language `"english"`, no files,
    /// no controllers, no achievements.
    pub fn new() -> Self {
        let state: Shared = Arc::default();
        Self {
            apps: MockApps { state: Arc::clone(&state) },
            input: MockInput { state: Arc::clone(&state) },
            remote_storage: MockRemoteStorage { state: Arc::clone(&state) },
            user: MockUser { state: Arc::clone(&state) },
            user_stats: MockUserStats { state: Arc::clone(&state) },
            utils: MockUtils { state: Arc::clone(&state) },
            state,
        }
    }

    /// Value `init()` returns.
    pub fn set_init_result(&self, ok: bool) {
        lock(&self.state).init_result = ok;
    }

    /// Value `restart_app_if_necessary()` returns.
    pub fn set_restart_required(&self, restart: bool) {
        lock(&self.state).restart_required = restart;
    }

    /// App ids passed to `restart_app_if_necessary()`, in call order.
    pub fn restart_checks(&self) -> Vec<AppId> {
        lock(&self.state).restart_checks.clone()
    }

    /// Whether `init()` has succeeded.
    pub fn is_initialized(&self) -> bool {
        lock(&self.state).initialized
    }

    /// Number of `run_callbacks()` calls so far.
    pub fn run_callbacks_count(&self) -> usize {
        lock(&self.state).run_callbacks_count
    }

    /// Complete every pending call on `run_callbacks()`.
    pub fn set_complete_on_run_callbacks(&self, enabled: bool) {
        lock(&self.state).complete_on_run_callbacks = enabled;
    }

    /// Language reported by `get_current_game_language()`.
    pub fn set_language(&self, language: &str) {
        lock(&self.state).language = language.to_string();
    }

    /// Install directory reported for `app_id`.
    pub fn set_install_dir(&self, app_id: AppId, dir: &str) {
        lock(&self.state).install_dirs.insert(app_id, dir.to_string());
    }

    /// Connect a controller. It shows up once input is initialized.
    pub fn add_controller(&self, handle: InputHandle, kind: SteamInputType) {
        let mut state = lock(&self.state);
        state.controllers.retain(|(h, _)| *h != handle);
        state.controllers.push((handle, kind));
    }

    /// Whether `input().init()` has been called.
    pub fn is_input_initialized(&self) -> bool {
        lock(&self.state).input_initialized
    }

    /// Argument of the last `input().init()`.
    pub fn explicitly_call_run_frame(&self) -> bool {
        lock(&self.state).explicitly_call_run_frame
    }

    /// Input frames run so far, explicit or driven by `run_callbacks()`.
    pub fn run_frame_count(&self) -> usize {
        lock(&self.state).run_frame_count
    }

    /// Snapshot of remote storage.
    pub fn files(&self) -> BTreeMap<String, Vec<u8>> {
        lock(&self.state).files.clone()
    }

    /// Put a file into remote storage directly.
    pub fn insert_file(&self, name: &str, data: &[u8]) {
        lock(&self.state).files.insert(name.to_string(), data.to_vec());
    }

    /// Cause the next `file_write()` to fail.
    pub fn fail_next_file_write(&self) {
        lock(&self.state).fail_next_file_write = true;
    }

    /// Steam id reported by `get_steam_id()`.
    pub fn set_steam_id(&self, id: SteamId) {
        lock(&self.state).steam_id = id;
    }

    /// Ticket bytes delivered by later ticket requests. By default the
    /// ticket is `b"mock-ticket:"` followed by the included data.
    pub fn set_encrypted_ticket(&self, ticket: &[u8]) {
        lock(&self.state).ticket_override = Some(ticket.to_vec());
    }

    /// Define an achievement with its current state.
    pub fn define_achievement(&self, name: &str, achieved: bool) {
        lock(&self.state).achievements.insert(name.to_string(), achieved);
    }

    /// Current state of an achievement; `None` when undefined.
    pub fn achievement(&self, name: &str) -> Option<bool> {
        lock(&self.state).achievements.get(name).copied()
    }

    /// Number of successful `store_stats()` calls so far.
    pub fn store_stats_count(&self) -> usize {
        lock(&self.state).store_stats_count
    }

    /// Value `is_steam_running_on_steam_deck()` returns.
    pub fn set_steam_deck(&self, on_deck: bool) {
        lock(&self.state).steam_deck = on_deck;
    }

    /// Calls that have not completed or failed yet.
    pub fn pending_api_calls(&self) -> Vec<ApiCallHandle> {
        lock(&self.state)
            .api_calls
            .iter()
            .filter(|(_, call)| call.state == CallState::Pending)
            .map(|(raw, call)| ApiCallHandle::new(*raw, call.callback_id))
            .collect()
    }

    /// Complete a pending call with `k_EResultOK`. Returns `false` if the
    /// call is unknown or no longer pending.
    pub fn complete_api_call(&self, call: ApiCallHandle) -> bool {
        self.complete_api_call_with(call, ApiCallResult::OK)
    }

    /// Complete a pending call with `result` in its response payload.
    pub fn complete_api_call_with(&self, call: ApiCallHandle, result: ApiCallResult) -> bool {
        lock(&self.state).complete(call.raw(), result)
    }

    /// Fail a pending call with `reason`.
    pub fn fail_api_call(&self, call: ApiCallHandle, reason: ApiCallFailure) -> bool {
        let mut state = lock(&self.state);
        match state.api_calls.get_mut(&call.raw()) {
            Some(c) if c.state == CallState::Pending => {
                c.state = CallState::Failed(reason);
                true
            }
            _ => false,
        }
    }

    /// Clear all state.
    pub fn reset(&self) {
        *lock(&self.state) = MockState::default();
    }
}

impl Default for MockSteam {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamApi for MockSteam {
    fn restart_app_if_necessary(&self, app_id: AppId) -> bool {
        let mut state = lock(&self.state);
        state.restart_checks.push(app_id);
        state.restart_required
    }

    fn init(&self) -> bool {
        let mut state = lock(&self.state);
        state.initialized = state.init_result;
        state.init_result
    }

    fn run_callbacks(&self) {
        let mut state = lock(&self.state);
        state.run_callbacks_count += 1;
        if state.input_initialized && !state.explicitly_call_run_frame {
            state.run_frame_count += 1;
        }
        if state.complete_on_run_callbacks {
            state.complete_all_pending();
        }
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

#[derive(Debug, Clone)]
struct MockApps {
    state: Shared,
}

impl SteamApps for MockApps {
    fn get_app_install_dir(&self, app_id: AppId) -> String {
        lock(&self.state)
            .install_dirs
            .get(&app_id)
            .cloned()
            .unwrap_or_default()
    }

    fn get_current_game_language(&self) -> String {
        lock(&self.state).language.clone()
    }
}

#[derive(Debug, Clone)]
struct MockInput {
    state: Shared,
}

impl SteamInput for MockInput {
    fn get_connected_controllers(&self) -> Vec<InputHandle> {
        let state = lock(&self.state);
        if !state.input_initialized {
            return Vec::new();
        }
        state
            .controllers
            .iter()
            .take(STEAM_INPUT_MAX_COUNT)
            .map(|(handle, _)| *handle)
            .collect()
    }

    fn get_input_type_for_handle(&self, handle: InputHandle) -> SteamInputType {
        lock(&self.state)
            .controllers
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, kind)| *kind)
            .unwrap_or(SteamInputType::Unknown)
    }

    fn init(&self, explicitly_call_run_frame: bool) -> bool {
        let mut state = lock(&self.state);
        state.input_initialized = true;
        state.explicitly_call_run_frame = explicitly_call_run_frame;
        true
    }

    fn run_frame(&self) {
        lock(&self.state).run_frame_count += 1;
    }
}

#[derive(Debug, Clone)]
struct MockRemoteStorage {
    state: Shared,
}

impl SteamRemoteStorage for MockRemoteStorage {
    fn file_write(&self, file: &str, data: &[u8]) -> bool {
        let mut state = lock(&self.state);
        if std::mem::take(&mut state.fail_next_file_write) {
            return false;
        }
        if file.is_empty() || i32::try_from(data.len()).is_err() {
            return false;
        }
        state.files.insert(file.to_string(), data.to_vec());
        true
    }

    fn file_read(&self, file: &str, data: &mut [u8]) -> i32 {
        let state = lock(&self.state);
        let Some(contents) = state.files.get(file) else {
            return 0;
        };
        let n = contents.len().min(data.len());
        data[..n].copy_from_slice(&contents[..n]);
        i32::try_from(n).unwrap_or(0)
    }

    fn file_delete(&self, file: &str) -> bool {
        lock(&self.state).files.remove(file).is_some()
    }

    fn get_file_size(&self, file: &str) -> i32 {
        lock(&self.state)
            .files
            .get(file)
            .and_then(|contents| i32::try_from(contents.len()).ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
struct MockUser {
    state: Shared,
}

impl SteamUser for MockUser {
    fn get_steam_id(&self) -> SteamId {
        lock(&self.state).steam_id
    }

    fn request_encrypted_app_ticket(&self, data_to_include: &[u8]) -> ApiCallHandle {
        let mut state = lock(&self.state);
        let ticket = match state.ticket_override {
            Some(ref ticket) => ticket.clone(),
            None => {
                let mut ticket = TICKET_PREFIX.to_vec();
                ticket.extend_from_slice(data_to_include);
                ticket.truncate(MAX_ENCRYPTED_APP_TICKET_SIZE);
                ticket
            }
        };

        let raw = state.next_api_call;
        state.next_api_call += 1;
        state.api_calls.insert(
            raw,
            MockCall {
                callback_id: CallbackId::ENCRYPTED_APP_TICKET_RESPONSE,
                state: CallState::Pending,
                ticket,
            },
        );
        ApiCallHandle::new(raw, CallbackId::ENCRYPTED_APP_TICKET_RESPONSE)
    }

    fn get_encrypted_app_ticket(&self) -> (Vec<u8>, bool) {
        match lock(&self.state).encrypted_ticket {
            Some(ref ticket) => (ticket.clone(), true),
            None => (Vec::new(), false),
        }
    }
}

#[derive(Debug, Clone)]
struct MockUserStats {
    state: Shared,
}

impl SteamUserStats for MockUserStats {
    fn request_current_stats(&self) -> bool {
        lock(&self.state).stats_requested = true;
        true
    }

    fn get_achievement(&self, name: &str) -> (bool, bool) {
        let state = lock(&self.state);
        if !state.stats_requested {
            return (false, false);
        }
        match state.achievements.get(name) {
            Some(&achieved) => (achieved, true),
            None => (false, false),
        }
    }

    fn set_achievement(&self, name: &str) -> bool {
        let mut state = lock(&self.state);
        if !state.stats_requested {
            return false;
        }
        match state.achievements.get_mut(name) {
            Some(achieved) => {
                *achieved = true;
                true
            }
            None => false,
        }
    }

    fn clear_achievement(&self, name: &str) -> bool {
        let mut state = lock(&self.state);
        if !state.stats_requested {
            return false;
        }
        match state.achievements.get_mut(name) {
            Some(achieved) => {
                *achieved = false;
                true
            }
            None => false,
        }
    }

    fn store_stats(&self) -> bool {
        let mut state = lock(&self.state);
        if !state.stats_requested {
            return false;
        }
        state.store_stats_count += 1;
        true
    }
}

#[derive(Debug, Clone)]
struct MockUtils {
    state: Shared,
}

impl SteamUtils for MockUtils {
    fn is_steam_running_on_steam_deck(&self) -> bool {
        lock(&self.state).steam_deck
    }

    fn is_api_call_completed(&self, call: ApiCallHandle) -> (bool, bool) {
        match lock(&self.state).api_calls.get(&call.raw()) {
            None => (false, true),
            Some(c) => match c.state {
                CallState::Pending => (false, false),
                CallState::Completed(_) => (true, false),
                CallState::Failed(_) => (true, true),
            },
        }
    }

    fn get_api_call_failure_reason(&self, call: ApiCallHandle) -> ApiCallFailure {
        match lock(&self.state).api_calls.get(&call.raw()) {
            None => ApiCallFailure::InvalidHandle,
            Some(c) => match c.state {
                CallState::Failed(reason) => reason,
                CallState::Pending | CallState::Completed(_) => ApiCallFailure::None,
            },
        }
    }

    fn get_api_call_result(&self, call: ApiCallHandle, response: &mut [u8]) -> (bool, bool) {
        let mut state = lock(&self.state);
        let Some(c) = state.api_calls.get_mut(&call.raw()) else {
            return (false, true);
        };
        if c.callback_id != call.callback_id() {
            c.state = CallState::Failed(ApiCallFailure::MismatchedCallback);
            return (false, true);
        }
        let call_state = c.state;
        match call_state {
            CallState::Pending => (false, false),
            CallState::Failed(_) => (false, true),
            CallState::Completed(result) => {
                if response.len() != EncryptedAppTicketResponse::SIZE {
                    return (false, true);
                }
                response.copy_from_slice(&EncryptedAppTicketResponse { result }.to_bytes());
                state.api_calls.remove(&call.raw());
                (true, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_and_restart() {
        let steam = MockSteam::new();
        assert!(!steam.is_initialized());
        assert!(steam.init());
        assert!(steam.is_initialized());

        assert!(!steam.restart_app_if_necessary(AppId::new(480)));
        steam.set_restart_required(true);
        assert!(steam.restart_app_if_necessary(AppId::new(480)));
        assert_eq!(steam.restart_checks(), vec![AppId::new(480), AppId::new(480)]);
    }

    #[test]
    fn init_failure_is_reported() {
        let steam = MockSteam::new();
        steam.set_init_result(false);
        assert!(!steam.init());
        assert!(!steam.is_initialized());
    }

    #[test]
    fn clones_share_state() {
        let steam = MockSteam::new();
        let other = steam.clone();

        other.remote_storage().file_write("a.txt", b"hello");
        assert_eq!(steam.files().get("a.txt").map(Vec::as_slice), Some(&b"hello"[..]));

        other.run_callbacks();
        assert_eq!(steam.run_callbacks_count(), 1);
    }

    #[test]
    fn apps_defaults_and_overrides() {
        let steam = MockSteam::new();
        assert_eq!(steam.apps().get_current_game_language(), "english");
        assert_eq!(steam.apps().get_app_install_dir(AppId::new(480)), "");

        steam.set_language("german");
        steam.set_install_dir(AppId::new(480), "/games/Spacewar");
        assert_eq!(steam.apps().get_current_game_language(), "german");
        assert_eq!(
            steam.apps().get_app_install_dir(AppId::new(480)),
            "/games/Spacewar"
        );
    }

    #[test]
    fn storage_native_conventions() {
        let steam = MockSteam::new();
        let storage = steam.remote_storage();

        let mut buf = [0u8; 8];
        assert_eq!(storage.file_read("missing", &mut buf), 0);
        assert_eq!(storage.get_file_size("missing"), 0);
        assert!(!storage.file_delete("missing"));
        assert!(!storage.file_write("", b"x"));

        assert!(storage.file_write("save.bin", &[1, 2, 3, 4, 5]));
        let mut small = [0u8; 3];
        assert_eq!(storage.file_read("save.bin", &mut small), 3);
        assert_eq!(small, [1, 2, 3]);
    }

    #[test]
    fn fail_next_file_write_applies_once() {
        let steam = MockSteam::new();
        steam.fail_next_file_write();
        assert!(!steam.remote_storage().file_write("a", b"1"));
        assert!(steam.files().is_empty());
        assert!(steam.remote_storage().file_write("a", b"1"));
    }

    #[test]
    fn controllers_visible_after_input_init() {
        let steam = MockSteam::new();
        steam.add_controller(InputHandle::new(11), SteamInputType::PS5Controller);
        assert!(steam.input().get_connected_controllers().is_empty());
        assert!(!steam.is_input_initialized());

        assert!(steam.input().init(false));
        assert!(steam.is_input_initialized());
        assert_eq!(
            steam.input().get_connected_controllers(),
            vec![InputHandle::new(11)]
        );
        assert_eq!(
            steam.input().get_input_type_for_handle(InputHandle::new(11)),
            SteamInputType::PS5Controller
        );
        assert_eq!(
            steam.input().get_input_type_for_handle(InputHandle::new(99)),
            SteamInputType::Unknown
        );
    }

    #[test]
    fn controller_list_is_capped() {
        let steam = MockSteam::new();
        for h in 1..=20 {
            steam.add_controller(InputHandle::new(h), SteamInputType::SteamController);
        }
        steam.input().init(true);
        assert_eq!(
            steam.input().get_connected_controllers().len(),
            STEAM_INPUT_MAX_COUNT
        );
    }

    #[test]
    fn run_frame_driven_by_callbacks_unless_explicit() {
        let steam = MockSteam::new();
        steam.input().init(false);
        steam.run_callbacks();
        assert_eq!(steam.run_frame_count(), 1);

        steam.input().init(true);
        assert!(steam.explicitly_call_run_frame());
        steam.run_callbacks();
        assert_eq!(steam.run_frame_count(), 1);
        steam.input().run_frame();
        assert_eq!(steam.run_frame_count(), 2);
    }

    #[test]
    fn achievements_require_stats() {
        let steam = MockSteam::new();
        steam.define_achievement("ACH_WIN_ONE_GAME", false);
        let stats = steam.user_stats();

        assert_eq!(stats.get_achievement("ACH_WIN_ONE_GAME"), (false, false));
        assert!(!stats.set_achievement("ACH_WIN_ONE_GAME"));
        assert!(!stats.store_stats());

        assert!(stats.request_current_stats());
        assert_eq!(stats.get_achievement("ACH_WIN_ONE_GAME"), (false, true));
        assert!(stats.set_achievement("ACH_WIN_ONE_GAME"));
        assert_eq!(stats.get_achievement("ACH_WIN_ONE_GAME"), (true, true));
        assert!(stats.clear_achievement("ACH_WIN_ONE_GAME"));
        assert_eq!(steam.achievement("ACH_WIN_ONE_GAME"), Some(false));
        assert!(stats.store_stats());
        assert_eq!(steam.store_stats_count(), 1);

        assert_eq!(stats.get_achievement("ACH_UNKNOWN"), (false, false));
        assert!(!stats.set_achievement("ACH_UNKNOWN"));
    }

    #[test]
    fn ticket_call_pending_until_completed() {
        let steam = MockSteam::new();
        let call = steam.user().request_encrypted_app_ticket(b"abc");
        assert_eq!(call.raw(), 1);
        assert_eq!(call.callback_id(), CallbackId::ENCRYPTED_APP_TICKET_RESPONSE);
        assert!(!call.is_invalid());

        assert_eq!(steam.utils().is_api_call_completed(call), (false, false));
        assert_eq!(steam.user().get_encrypted_app_ticket(), (Vec::new(), false));
        assert_eq!(steam.pending_api_calls(), vec![call]);

        assert!(steam.complete_api_call(call));
        assert!(!steam.complete_api_call(call));
        assert_eq!(steam.utils().is_api_call_completed(call), (true, false));
        assert_eq!(
            steam.utils().get_api_call_failure_reason(call),
            ApiCallFailure::None
        );

        let (ticket, ok) = steam.user().get_encrypted_app_ticket();
        assert!(ok);
        assert_eq!(ticket, b"mock-ticket:abc");
    }

    #[test]
    fn result_payload_is_consumed() {
        let steam = MockSteam::new();
        let call = steam.user().request_encrypted_app_ticket(&[]);
        steam.complete_api_call(call);

        let mut wrong = [0u8; 8];
        assert_eq!(steam.utils().get_api_call_result(call, &mut wrong), (false, true));

        let mut buf = [0u8; EncryptedAppTicketResponse::SIZE];
        assert_eq!(steam.utils().get_api_call_result(call, &mut buf), (true, false));
        let response = EncryptedAppTicketResponse::from_bytes(&buf).unwrap();
        assert_eq!(response.result, ApiCallResult::OK);

        assert_eq!(steam.utils().get_api_call_result(call, &mut buf), (false, true));
        assert_eq!(
            steam.utils().get_api_call_failure_reason(call),
            ApiCallFailure::InvalidHandle
        );
    }

    #[test]
    fn non_ok_result_withholds_ticket() {
        let steam = MockSteam::new();
        let call = steam.user().request_encrypted_app_ticket(b"x");
        steam.complete_api_call_with(call, ApiCallResult::LimitExceeded);

        let mut buf = [0u8; EncryptedAppTicketResponse::SIZE];
        assert_eq!(steam.utils().get_api_call_result(call, &mut buf), (true, false));
        assert_eq!(
            EncryptedAppTicketResponse::from_bytes(&buf).unwrap().result,
            ApiCallResult::LimitExceeded
        );
        assert!(!steam.user().get_encrypted_app_ticket().1);
    }

    #[test]
    fn failed_call_reports_reason() {
        let steam = MockSteam::new();
        let call = steam.user().request_encrypted_app_ticket(&[]);
        assert!(steam.fail_api_call(call, ApiCallFailure::NetworkFailure));

        assert_eq!(steam.utils().is_api_call_completed(call), (true, true));
        assert_eq!(
            steam.utils().get_api_call_failure_reason(call),
            ApiCallFailure::NetworkFailure
        );
        assert!(!steam.complete_api_call(call));
    }

    #[test]
    fn unknown_and_mismatched_handles() {
        let steam = MockSteam::new();
        let bogus = ApiCallHandle::new(42, CallbackId::ENCRYPTED_APP_TICKET_RESPONSE);
        assert_eq!(steam.utils().is_api_call_completed(bogus), (false, true));
        assert_eq!(
            steam.utils().get_api_call_failure_reason(bogus),
            ApiCallFailure::InvalidHandle
        );

        let call = steam.user().request_encrypted_app_ticket(&[]);
        steam.complete_api_call(call);
        let wrong_id = ApiCallHandle::new(call.raw(), CallbackId::STEAM_USER);
        let mut buf = [0u8; EncryptedAppTicketResponse::SIZE];
        assert_eq!(steam.utils().get_api_call_result(wrong_id, &mut buf), (false, true));
        assert_eq!(
            steam.utils().get_api_call_failure_reason(call),
            ApiCallFailure::MismatchedCallback
        );
    }

    #[test]
    fn run_callbacks_completes_when_enabled() {
        let steam = MockSteam::new();
        let call = steam.user().request_encrypted_app_ticket(&[]);
        steam.run_callbacks();
        assert_eq!(steam.utils().is_api_call_completed(call), (false, false));

        steam.set_complete_on_run_callbacks(true);
        steam.run_callbacks();
        assert_eq!(steam.utils().is_api_call_completed(call), (true, false));
        assert!(steam.pending_api_calls().is_empty());
    }

    #[test]
    fn custom_ticket_and_steam_id() {
        let steam = MockSteam::new();
        assert_eq!(steam.user().get_steam_id(), MOCK_STEAM_ID);
        steam.set_steam_id(SteamId::new(7));
        steam.set_encrypted_ticket(&[0xde, 0xad]);

        let call = steam.user().request_encrypted_app_ticket(b"ignored");
        steam.complete_api_call(call);
        assert_eq!(steam.user().get_steam_id(), SteamId::new(7));
        assert_eq!(steam.user().get_encrypted_app_ticket(), (vec![0xde, 0xad], true));
    }

    #[test]
    fn steam_deck_flag_and_reset() {
        let steam = MockSteam::new();
        assert!(!steam.utils().is_steam_running_on_steam_deck());
        steam.set_steam_deck(true);
        assert!(steam.utils().is_steam_running_on_steam_deck());

        steam.insert_file("a", b"1");
        steam.reset();
        assert!(!steam.utils().is_steam_running_on_steam_deck());
        assert!(steam.files().is_empty());
    }
}
