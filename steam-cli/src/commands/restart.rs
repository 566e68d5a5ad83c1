//! Ask whether the app has to be relaunched through Steam.

use serde::Serialize;
use std::fmt;
use steam_client::SteamApi;
use steam_types::AppId;

#[derive(Debug, Serialize)]
pub struct RestartReport {
    pub app_id: AppId,
    pub restart_required: bool,
}

impl fmt::Display for RestartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.restart_required {
            write!(
                f,
                "App {}: not launched through Steam; exit and let Steam relaunch it",
                self.app_id
            )
        } else {
            write!(f, "App {}: no restart needed", self.app_id)
        }
    }
}

/// Run the restart-check command. Must happen before `SteamAPI_Init`.
pub fn run(api: &dyn SteamApi, app_id: AppId) -> RestartReport {
    RestartReport {
        app_id,
        restart_required: api.restart_app_if_necessary(app_id),
    }
}
