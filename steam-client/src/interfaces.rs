//! Interface declarations.
//!
//! One trait per native sub-interface. Each method corresponds to exactly
//! one flat export; its contract is the SDK's documented behavior for that
//! export. Parameter order follows the native call, and return shapes
//! keep the native success flags and out-values side by side.

use steam_types::{ApiCallFailure, ApiCallHandle, AppId, InputHandle, SteamId, SteamInputType};

/// Buffer size used for `GetAppInstallDir`.
pub const MAX_APP_INSTALL_DIR_SIZE: usize = 4096;

/// Buffer size used for `GetEncryptedAppTicket`.
pub const MAX_ENCRYPTED_APP_TICKET_SIZE: usize = 1024;

/// `ISteamApps`
pub trait SteamApps {
    /// Install directory of `app_id`; empty when the app is not installed.
    fn get_app_install_dir(&self, app_id: AppId) -> String;

    /// Language the user is running the current game in (e.g. `"english"`).
    fn get_current_game_language(&self) -> String;
}

/// `ISteamInput`
pub trait SteamInput {
    /// Handles of every connected controller, at most
    /// [`STEAM_INPUT_MAX_COUNT`](steam_types::STEAM_INPUT_MAX_COUNT).
    fn get_connected_controllers(&self) -> Vec<InputHandle>;

    /// Kind of device behind `handle`.
    fn get_input_type_for_handle(&self, handle: InputHandle) -> SteamInputType;

    /// Start Steam Input. With `explicitly_call_run_frame` the caller must
    /// drive [`run_frame`](Self::run_frame); otherwise
    /// `SteamAPI_RunCallbacks` does.
    fn init(&self, explicitly_call_run_frame: bool) -> bool;

    /// Synchronize controller state.
    fn run_frame(&self);
}

/// `ISteamRemoteStorage`
pub trait SteamRemoteStorage {
    /// Write `data` to the cloud file `file`, replacing it.
    fn file_write(&self, file: &str, data: &[u8]) -> bool;

    /// Read up to `data.len()` bytes of `file` into `data`.
    ///
    /// Returns the number of bytes read; `0` when the file does not exist
    /// or the read failed.
    fn file_read(&self, file: &str, data: &mut [u8]) -> i32;

    /// Delete `file` locally and from the cloud.
    fn file_delete(&self, file: &str) -> bool;

    /// Size of `file` in bytes; `0` when it does not exist.
    fn get_file_size(&self, file: &str) -> i32;
}

/// `ISteamUser`
pub trait SteamUser {
    /// Steam id of the logged-on user.
    fn get_steam_id(&self) -> SteamId;

    /// Ask the backend for an encrypted app ticket embedding
    /// `data_to_include`.
    ///
    /// Completes with an
    /// [`EncryptedAppTicketResponse`](steam_types::EncryptedAppTicketResponse).
    fn request_encrypted_app_ticket(&self, data_to_include: &[u8]) -> ApiCallHandle;

    /// The most recently received encrypted ticket, and whether one was
    /// available.
    fn get_encrypted_app_ticket(&self) -> (Vec<u8>, bool);
}

/// `ISteamUserStats`
pub trait SteamUserStats {
    /// Ask for the user's stats and achievements. Other calls fail until
    /// they arrive.
    fn request_current_stats(&self) -> bool;

    /// `(achieved, success)` for the achievement `name`.
    fn get_achievement(&self, name: &str) -> (bool, bool);

    /// Unlock `name`. Takes effect on [`store_stats`](Self::store_stats).
    fn set_achievement(&self, name: &str) -> bool;

    /// Lock `name` again. Takes effect on [`store_stats`](Self::store_stats).
    fn clear_achievement(&self, name: &str) -> bool;

    /// Upload changed stats and achievements.
    fn store_stats(&self) -> bool;
}

/// `ISteamUtils`
pub trait SteamUtils {
    /// Whether Steam is running on a Steam Deck.
    fn is_steam_running_on_steam_deck(&self) -> bool;

    /// `(completed, failed)` for an in-flight asynchronous call.
    fn is_api_call_completed(&self, call: ApiCallHandle) -> (bool, bool);

    /// Why `call` failed; [`ApiCallFailure::None`] when it did not.
    fn get_api_call_failure_reason(&self, call: ApiCallHandle) -> ApiCallFailure;

    /// Copy the result struct of a completed `call` into `response`.
    ///
    /// Returns `(completed, failed)`. `response` must be exactly the size
    /// of the struct named by the handle's callback id.
    fn get_api_call_result(&self, call: ApiCallHandle, response: &mut [u8]) -> (bool, bool);
}
