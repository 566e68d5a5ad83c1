//! Exported symbol names of the flat Steamworks API.
//!
//! Every name must match the native export byte-for-byte. The accessor
//! names carry the interface version they were built against (`_v008`,
//! `_v021`, ...); changing a suffix binds a different native interface.

/// `bool SteamAPI_RestartAppIfNecessary(uint32 unOwnAppID)`
pub const RESTART_APP_IF_NECESSARY: &str = "SteamAPI_RestartAppIfNecessary";
/// `bool SteamAPI_Init()`
pub const INIT: &str = "SteamAPI_Init";
/// `void SteamAPI_RunCallbacks()`
pub const RUN_CALLBACKS: &str = "SteamAPI_RunCallbacks";

/// `ISteamApps *SteamAPI_SteamApps_v008()`
pub const STEAM_APPS: &str = "SteamAPI_SteamApps_v008";
/// `uint32 GetAppInstallDir(ISteamApps*, AppId_t, char*, uint32)`
pub const ISTEAM_APPS_GET_APP_INSTALL_DIR: &str = "SteamAPI_ISteamApps_GetAppInstallDir";
/// `const char *GetCurrentGameLanguage(ISteamApps*)`
pub const ISTEAM_APPS_GET_CURRENT_GAME_LANGUAGE: &str =
    "SteamAPI_ISteamApps_GetCurrentGameLanguage";

/// `ISteamInput *SteamAPI_SteamInput_v006()`
pub const STEAM_INPUT: &str = "SteamAPI_SteamInput_v006";
/// `int GetConnectedControllers(ISteamInput*, InputHandle_t*)`
pub const ISTEAM_INPUT_GET_CONNECTED_CONTROLLERS: &str =
    "SteamAPI_ISteamInput_GetConnectedControllers";
/// `ESteamInputType GetInputTypeForHandle(ISteamInput*, InputHandle_t)`
pub const ISTEAM_INPUT_GET_INPUT_TYPE_FOR_HANDLE: &str =
    "SteamAPI_ISteamInput_GetInputTypeForHandle";
/// `bool Init(ISteamInput*, bool)`
pub const ISTEAM_INPUT_INIT: &str = "SteamAPI_ISteamInput_Init";
/// `void RunFrame(ISteamInput*, bool)`
pub const ISTEAM_INPUT_RUN_FRAME: &str = "SteamAPI_ISteamInput_RunFrame";

/// `ISteamRemoteStorage *SteamAPI_SteamRemoteStorage_v016()`
pub const STEAM_REMOTE_STORAGE: &str = "SteamAPI_SteamRemoteStorage_v016";
/// `bool FileWrite(ISteamRemoteStorage*, const char*, const void*, int32)`
pub const ISTEAM_REMOTE_STORAGE_FILE_WRITE: &str = "SteamAPI_ISteamRemoteStorage_FileWrite";
/// `int32 FileRead(ISteamRemoteStorage*, const char*, void*, int32)`
pub const ISTEAM_REMOTE_STORAGE_FILE_READ: &str = "SteamAPI_ISteamRemoteStorage_FileRead";
/// `bool FileDelete(ISteamRemoteStorage*, const char*)`
pub const ISTEAM_REMOTE_STORAGE_FILE_DELETE: &str = "SteamAPI_ISteamRemoteStorage_FileDelete";
/// `int32 GetFileSize(ISteamRemoteStorage*, const char*)`
pub const ISTEAM_REMOTE_STORAGE_GET_FILE_SIZE: &str = "SteamAPI_ISteamRemoteStorage_GetFileSize";

/// `ISteamUser *SteamAPI_SteamUser_v021()`
pub const STEAM_USER: &str = "SteamAPI_SteamUser_v021";
/// `uint64_steamid GetSteamID(ISteamUser*)`
pub const ISTEAM_USER_GET_STEAM_ID: &str = "SteamAPI_ISteamUser_GetSteamID";
/// `SteamAPICall_t RequestEncryptedAppTicket(ISteamUser*, void*, int)`
pub const ISTEAM_USER_REQUEST_ENCRYPTED_APP_TICKET: &str =
    "SteamAPI_ISteamUser_RequestEncryptedAppTicket";
/// `bool GetEncryptedAppTicket(ISteamUser*, void*, int, uint32*)`
pub const ISTEAM_USER_GET_ENCRYPTED_APP_TICKET: &str =
    "SteamAPI_ISteamUser_GetEncryptedAppTicket";

/// `ISteamUserStats *SteamAPI_SteamUserStats_v012()`
pub const STEAM_USER_STATS: &str = "SteamAPI_SteamUserStats_v012";
/// `bool RequestCurrentStats(ISteamUserStats*)`
pub const ISTEAM_USER_STATS_REQUEST_CURRENT_STATS: &str =
    "SteamAPI_ISteamUserStats_RequestCurrentStats";
/// `bool GetAchievement(ISteamUserStats*, const char*, bool*)`
pub const ISTEAM_USER_STATS_GET_ACHIEVEMENT: &str = "SteamAPI_ISteamUserStats_GetAchievement";
/// `bool SetAchievement(ISteamUserStats*, const char*)`
pub const ISTEAM_USER_STATS_SET_ACHIEVEMENT: &str = "SteamAPI_ISteamUserStats_SetAchievement";
/// `bool ClearAchievement(ISteamUserStats*, const char*)`
pub const ISTEAM_USER_STATS_CLEAR_ACHIEVEMENT: &str = "SteamAPI_ISteamUserStats_ClearAchievement";
/// `bool StoreStats(ISteamUserStats*)`
pub const ISTEAM_USER_STATS_STORE_STATS: &str = "SteamAPI_ISteamUserStats_StoreStats";

/// `ISteamUtils *SteamAPI_SteamUtils_v010()`
pub const STEAM_UTILS: &str = "SteamAPI_SteamUtils_v010";
/// `bool IsSteamRunningOnSteamDeck(ISteamUtils*)`
pub const ISTEAM_UTILS_IS_STEAM_RUNNING_ON_STEAM_DECK: &str =
    "SteamAPI_ISteamUtils_IsSteamRunningOnSteamDeck";
/// `bool IsAPICallCompleted(ISteamUtils*, SteamAPICall_t, bool*)`
pub const ISTEAM_UTILS_IS_API_CALL_COMPLETED: &str = "SteamAPI_ISteamUtils_IsAPICallCompleted";
/// `ESteamAPICallFailure GetAPICallFailureReason(ISteamUtils*, SteamAPICall_t)`
pub const ISTEAM_UTILS_GET_API_CALL_FAILURE_REASON: &str =
    "SteamAPI_ISteamUtils_GetAPICallFailureReason";
/// `bool GetAPICallResult(ISteamUtils*, SteamAPICall_t, void*, int, int, bool*)`
pub const ISTEAM_UTILS_GET_API_CALL_RESULT: &str = "SteamAPI_ISteamUtils_GetAPICallResult";

/// A native sub-interface reached through a versioned accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    /// `ISteamApps`
    Apps,
    /// `ISteamInput`
    Input,
    /// `ISteamRemoteStorage`
    RemoteStorage,
    /// `ISteamUser`
    User,
    /// `ISteamUserStats`
    UserStats,
    /// `ISteamUtils`
    Utils,
}

impl Interface {
    /// Every bound interface.
    pub const ALL: [Interface; 6] = [
        Interface::Apps,
        Interface::Input,
        Interface::RemoteStorage,
        Interface::User,
        Interface::UserStats,
        Interface::Utils,
    ];

    /// The accessor returning this interface's pointer.
    pub const fn accessor(self) -> FlatSymbol {
        match self {
            Interface::Apps => FlatSymbol::SteamApps,
            Interface::Input => FlatSymbol::SteamInput,
            Interface::RemoteStorage => FlatSymbol::SteamRemoteStorage,
            Interface::User => FlatSymbol::SteamUser,
            Interface::UserStats => FlatSymbol::SteamUserStats,
            Interface::Utils => FlatSymbol::SteamUtils,
        }
    }

    /// The C++ interface name.
    pub const fn name(self) -> &'static str {
        match self {
            Interface::Apps => "ISteamApps",
            Interface::Input => "ISteamInput",
            Interface::RemoteStorage => "ISteamRemoteStorage",
            Interface::User => "ISteamUser",
            Interface::UserStats => "ISteamUserStats",
            Interface::Utils => "ISteamUtils",
        }
    }

    /// The interface version encoded in the accessor suffix.
    pub fn version(self) -> u32 {
        let accessor = self.accessor().name();
        accessor
            .rsplit_once("_v")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(0)
    }
}

/// One exported function of the flat API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum FlatSymbol {
    RestartAppIfNecessary,
    Init,
    RunCallbacks,

    SteamApps,
    AppsGetAppInstallDir,
    AppsGetCurrentGameLanguage,

    SteamInput,
    InputGetConnectedControllers,
    InputGetInputTypeForHandle,
    InputInit,
    InputRunFrame,

    SteamRemoteStorage,
    RemoteStorageFileWrite,
    RemoteStorageFileRead,
    RemoteStorageFileDelete,
    RemoteStorageGetFileSize,

    SteamUser,
    UserGetSteamId,
    UserRequestEncryptedAppTicket,
    UserGetEncryptedAppTicket,

    SteamUserStats,
    UserStatsRequestCurrentStats,
    UserStatsGetAchievement,
    UserStatsSetAchievement,
    UserStatsClearAchievement,
    UserStatsStoreStats,

    SteamUtils,
    UtilsIsSteamRunningOnSteamDeck,
    UtilsIsApiCallCompleted,
    UtilsGetApiCallFailureReason,
    UtilsGetApiCallResult,
}

impl FlatSymbol {
    /// Every symbol the binding resolves, in table order.
    pub const ALL: [FlatSymbol; 31] = [
        FlatSymbol::RestartAppIfNecessary,
        FlatSymbol::Init,
        FlatSymbol::RunCallbacks,
        FlatSymbol::SteamApps,
        FlatSymbol::AppsGetAppInstallDir,
        FlatSymbol::AppsGetCurrentGameLanguage,
        FlatSymbol::SteamInput,
        FlatSymbol::InputGetConnectedControllers,
        FlatSymbol::InputGetInputTypeForHandle,
        FlatSymbol::InputInit,
        FlatSymbol::InputRunFrame,
        FlatSymbol::SteamRemoteStorage,
        FlatSymbol::RemoteStorageFileWrite,
        FlatSymbol::RemoteStorageFileRead,
        FlatSymbol::RemoteStorageFileDelete,
        FlatSymbol::RemoteStorageGetFileSize,
        FlatSymbol::SteamUser,
        FlatSymbol::UserGetSteamId,
        FlatSymbol::UserRequestEncryptedAppTicket,
        FlatSymbol::UserGetEncryptedAppTicket,
        FlatSymbol::SteamUserStats,
        FlatSymbol::UserStatsRequestCurrentStats,
        FlatSymbol::UserStatsGetAchievement,
        FlatSymbol::UserStatsSetAchievement,
        FlatSymbol::UserStatsClearAchievement,
        FlatSymbol::UserStatsStoreStats,
        FlatSymbol::SteamUtils,
        FlatSymbol::UtilsIsSteamRunningOnSteamDeck,
        FlatSymbol::UtilsIsApiCallCompleted,
        FlatSymbol::UtilsGetApiCallFailureReason,
        FlatSymbol::UtilsGetApiCallResult,
    ];

    /// The exported native name.
    pub const fn name(self) -> &'static str {
        match self {
            FlatSymbol::RestartAppIfNecessary => RESTART_APP_IF_NECESSARY,
            FlatSymbol::Init => INIT,
            FlatSymbol::RunCallbacks => RUN_CALLBACKS,
            FlatSymbol::SteamApps => STEAM_APPS,
            FlatSymbol::AppsGetAppInstallDir => ISTEAM_APPS_GET_APP_INSTALL_DIR,
            FlatSymbol::AppsGetCurrentGameLanguage => ISTEAM_APPS_GET_CURRENT_GAME_LANGUAGE,
            FlatSymbol::SteamInput => STEAM_INPUT,
            FlatSymbol::InputGetConnectedControllers => ISTEAM_INPUT_GET_CONNECTED_CONTROLLERS,
            FlatSymbol::InputGetInputTypeForHandle => ISTEAM_INPUT_GET_INPUT_TYPE_FOR_HANDLE,
            FlatSymbol::InputInit => ISTEAM_INPUT_INIT,
            FlatSymbol::InputRunFrame => ISTEAM_INPUT_RUN_FRAME,
            FlatSymbol::SteamRemoteStorage => STEAM_REMOTE_STORAGE,
            FlatSymbol::RemoteStorageFileWrite => ISTEAM_REMOTE_STORAGE_FILE_WRITE,
            FlatSymbol::RemoteStorageFileRead => ISTEAM_REMOTE_STORAGE_FILE_READ,
            FlatSymbol::RemoteStorageFileDelete => ISTEAM_REMOTE_STORAGE_FILE_DELETE,
            FlatSymbol::RemoteStorageGetFileSize => ISTEAM_REMOTE_STORAGE_GET_FILE_SIZE,
            FlatSymbol::SteamUser => STEAM_USER,
            FlatSymbol::UserGetSteamId => ISTEAM_USER_GET_STEAM_ID,
            FlatSymbol::UserRequestEncryptedAppTicket => ISTEAM_USER_REQUEST_ENCRYPTED_APP_TICKET,
            FlatSymbol::UserGetEncryptedAppTicket => ISTEAM_USER_GET_ENCRYPTED_APP_TICKET,
            FlatSymbol::SteamUserStats => STEAM_USER_STATS,
            FlatSymbol::UserStatsRequestCurrentStats => ISTEAM_USER_STATS_REQUEST_CURRENT_STATS,
            FlatSymbol::UserStatsGetAchievement => ISTEAM_USER_STATS_GET_ACHIEVEMENT,
            FlatSymbol::UserStatsSetAchievement => ISTEAM_USER_STATS_SET_ACHIEVEMENT,
            FlatSymbol::UserStatsClearAchievement => ISTEAM_USER_STATS_CLEAR_ACHIEVEMENT,
            FlatSymbol::UserStatsStoreStats => ISTEAM_USER_STATS_STORE_STATS,
            FlatSymbol::SteamUtils => STEAM_UTILS,
            FlatSymbol::UtilsIsSteamRunningOnSteamDeck => {
                ISTEAM_UTILS_IS_STEAM_RUNNING_ON_STEAM_DECK
            }
            FlatSymbol::UtilsIsApiCallCompleted => ISTEAM_UTILS_IS_API_CALL_COMPLETED,
            FlatSymbol::UtilsGetApiCallFailureReason => ISTEAM_UTILS_GET_API_CALL_FAILURE_REASON,
            FlatSymbol::UtilsGetApiCallResult => ISTEAM_UTILS_GET_API_CALL_RESULT,
        }
    }

    /// The interface this symbol belongs to; `None` for the global entry points.
    pub const fn interface(self) -> Option<Interface> {
        match self {
            FlatSymbol::RestartAppIfNecessary | FlatSymbol::Init | FlatSymbol::RunCallbacks => None,
            FlatSymbol::SteamApps
            | FlatSymbol::AppsGetAppInstallDir
            | FlatSymbol::AppsGetCurrentGameLanguage => Some(Interface::Apps),
            FlatSymbol::SteamInput
            | FlatSymbol::InputGetConnectedControllers
            | FlatSymbol::InputGetInputTypeForHandle
            | FlatSymbol::InputInit
            | FlatSymbol::InputRunFrame => Some(Interface::Input),
            FlatSymbol::SteamRemoteStorage
            | FlatSymbol::RemoteStorageFileWrite
            | FlatSymbol::RemoteStorageFileRead
            | FlatSymbol::RemoteStorageFileDelete
            | FlatSymbol::RemoteStorageGetFileSize => Some(Interface::RemoteStorage),
            FlatSymbol::SteamUser
            | FlatSymbol::UserGetSteamId
            | FlatSymbol::UserRequestEncryptedAppTicket
            | FlatSymbol::UserGetEncryptedAppTicket => Some(Interface::User),
            FlatSymbol::SteamUserStats
            | FlatSymbol::UserStatsRequestCurrentStats
            | FlatSymbol::UserStatsGetAchievement
            | FlatSymbol::UserStatsSetAchievement
            | FlatSymbol::UserStatsClearAchievement
            | FlatSymbol::UserStatsStoreStats => Some(Interface::UserStats),
            FlatSymbol::SteamUtils
            | FlatSymbol::UtilsIsSteamRunningOnSteamDeck
            | FlatSymbol::UtilsIsApiCallCompleted
            | FlatSymbol::UtilsGetApiCallFailureReason
            | FlatSymbol::UtilsGetApiCallResult => Some(Interface::Utils),
        }
    }

    /// Whether this symbol is a versioned interface accessor.
    pub fn is_accessor(self) -> bool {
        self.interface()
            .is_some_and(|interface| interface.accessor() == self)
    }
}

impl std::fmt::Display for FlatSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
