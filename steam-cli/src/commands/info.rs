//! Show what the SDK reports about the current session.

use serde::Serialize;
use std::fmt;
use steam_client::{SteamApi, SteamConfig};
use steam_types::{AppId, InputHandle, SteamId};

#[derive(Debug, Serialize)]
pub struct ControllerEntry {
    pub handle: InputHandle,
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub steam_id: SteamId,
    pub language: String,
    pub app_id: Option<AppId>,
    pub install_dir: Option<String>,
    pub steam_deck: bool,
    pub controllers: Vec<ControllerEntry>,
}

impl fmt::Display for InfoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steam ID:    {}", self.steam_id)?;
        writeln!(f, "Language:    {}", self.language)?;
        match (self.app_id, &self.install_dir) {
            (Some(app_id), Some(dir)) if !dir.is_empty() => {
                writeln!(f, "Install dir: {} (app {})", dir, app_id)?
            }
            (Some(app_id), _) => writeln!(f, "Install dir: not installed (app {})", app_id)?,
            (None, _) => {}
        }
        writeln!(f, "Steam Deck:  {}", if self.steam_deck { "yes" } else { "no" })?;
        if self.controllers.is_empty() {
            write!(f, "Controllers: none")
        } else {
            write!(f, "Controllers: {}", self.controllers.len())?;
            for c in &self.controllers {
                write!(f, "\n  [{}] {}", c.handle, c.kind)?;
            }
            Ok(())
        }
    }
}

/// Run the info command. Expects Steam to be initialized.
pub fn run(api: &dyn SteamApi, app_id: Option<AppId>, config: &SteamConfig) -> InfoReport {
    let input = api.input();
    let explicit = config.app.explicitly_call_run_frame;
    let controllers = if input.init(explicit) {
        if explicit {
            input.run_frame();
        } else {
            api.run_callbacks();
        }
        input
            .get_connected_controllers()
            .into_iter()
            .map(|handle| ControllerEntry {
                handle,
                kind: input.get_input_type_for_handle(handle).to_string(),
            })
            .collect()
    } else {
        tracing::warn!("ISteamInput::Init failed; skipping controllers");
        Vec::new()
    };

    InfoReport {
        steam_id: api.user().get_steam_id(),
        language: api.apps().get_current_game_language(),
        app_id,
        install_dir: app_id.map(|id| api.apps().get_app_install_dir(id)),
        steam_deck: api.utils().is_steam_running_on_steam_deck(),
        controllers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steam_client::{MockSteam, MOCK_STEAM_ID};
    use steam_types::SteamInputType;

    #[test]
    fn collects_session_details() {
        let steam = MockSteam::new();
        steam.set_install_dir(AppId::new(480), "/games/Spacewar");
        steam.set_steam_deck(true);
        steam.add_controller(InputHandle::new(3), SteamInputType::PS4Controller);

        let report = run(&steam, Some(AppId::new(480)), &SteamConfig::default());
        assert_eq!(report.steam_id, MOCK_STEAM_ID);
        assert_eq!(report.language, "english");
        assert_eq!(report.install_dir.as_deref(), Some("/games/Spacewar"));
        assert!(report.steam_deck);
        assert_eq!(report.controllers.len(), 1);
        assert_eq!(report.controllers[0].kind, "k_ESteamInputType_PS4Controller");

        let text = report.to_string();
        assert!(text.contains("Install dir: /games/Spacewar (app 480)"));
        assert!(text.contains("[3] k_ESteamInputType_PS4Controller"));
    }

    #[test]
    fn explicit_run_frame_follows_config() {
        let steam = MockSteam::new();
        let mut config = SteamConfig::default();
        config.app.explicitly_call_run_frame = true;

        run(&steam, None, &config);
        assert!(steam.explicitly_call_run_frame());
        assert_eq!(steam.run_frame_count(), 1);
        assert_eq!(steam.run_callbacks_count(), 0);
    }

    #[test]
    fn without_app_id_skips_install_dir() {
        let steam = MockSteam::new();
        let report = run(&steam, None, &SteamConfig::default());
        assert!(report.install_dir.is_none());
        assert!(report.to_string().contains("Controllers: none"));
        assert!(!report.to_string().contains("Install dir"));
    }
}
