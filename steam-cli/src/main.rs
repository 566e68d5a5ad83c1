//! # steam-cli
//!
//! CLI tool for checking a Steamworks SDK library and exercising the flat API.
//!
//! ## Commands
//!
//! - `symbols`: Print the flat symbol table
//! - `check`: Load the library and confirm every symbol resolves
//! - `restart-check`: Ask whether the app must be relaunched through Steam
//! - `info`: Show user, language, install dir, Steam Deck flag and controllers
//! - `storage`: Write, read, delete or size a Steam Cloud file
//! - `achievement`: Get, set or clear an achievement
//! - `ticket`: Request an encrypted app ticket and wait for it
//!
//! ## Example
//!
//! ```bash
//! # Verify an SDK build exports everything the binding needs
//! steam-cli --library ./redistributable_bin/linux64/libsteam_api.so check
//!
//! # Write and read back a cloud file
//! steam-cli storage write save.bin "hello"
//! steam-cli storage read save.bin
//!
//! # Try it without Steam
//! steam-cli --mock ticket --data session-1
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use steam_client::{MockSteam, NativeSteam, SteamApi, SteamConfig};
use steam_types::{AppId, InputHandle, SteamInputType};

mod commands;
mod output;

use commands::{achievement, check, info, restart, storage, symbols, ticket};
use output::Output;

/// App id used by `--mock` when none is configured (the SDK's Spacewar sample).
const MOCK_APP_ID: AppId = AppId::new(480);

/// CLI tool for checking a Steamworks library and exercising the flat API.
#[derive(Parser, Debug)]
#[command(name = "steam-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the Steamworks shared library (overrides config and STEAM_API_LIBRARY)
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    /// Use the in-memory mock instead of the native library (for testing/demo)
    #[arg(long, global = true)]
    mock: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the flat symbol table
    Symbols,

    /// Load the library and confirm every symbol resolves
    Check,

    /// Call SteamAPI_RestartAppIfNecessary
    RestartCheck {
        /// App id (defaults to [app] id from the config)
        #[arg(long)]
        app_id: Option<u32>,
    },

    /// Show user, language, install dir, Steam Deck flag and controllers
    Info {
        /// App id whose install dir to show (defaults to [app] id)
        #[arg(long)]
        app_id: Option<u32>,
    },

    /// Steam Cloud file operations
    Storage {
        #[command(subcommand)]
        action: StorageAction,
    },

    /// Achievement operations
    Achievement {
        #[command(subcommand)]
        action: AchievementAction,

        /// How long to wait for stats to arrive
        #[arg(long, default_value = "5000", global = true)]
        timeout_ms: u64,
    },

    /// Request an encrypted app ticket and wait for it
    Ticket {
        /// Data to embed in the ticket
        #[arg(long)]
        data: Option<String>,

        /// Give up after this many milliseconds
        #[arg(long, default_value = "10000")]
        timeout_ms: u64,

        /// Delay between polls
        #[arg(long, default_value = "50")]
        poll_ms: u64,
    },
}

#[derive(Subcommand, Debug)]
enum StorageAction {
    /// Write a file (from text or --file)
    Write {
        /// Cloud file name
        name: String,

        /// Contents as text
        #[arg(conflicts_with = "file")]
        data: Option<String>,

        /// Read contents from a local file
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Read a file
    Read {
        /// Cloud file name
        name: String,

        /// Write contents to a local file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Delete a file
    Delete {
        /// Cloud file name
        name: String,
    },

    /// Print a file's size
    Size {
        /// Cloud file name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
enum AchievementAction {
    /// Show whether an achievement is unlocked
    Get {
        /// API name of the achievement
        name: String,
    },
    /// Unlock an achievement and store stats
    Set {
        /// API name of the achievement
        name: String,
    },
    /// Lock an achievement again and store stats
    Clear {
        /// API name of the achievement
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config {
        Some(ref path) => SteamConfig::from_file(path)?,
        None => SteamConfig::default(),
    };
    let out = Output::new(cli.json);

    match &cli.command {
        Commands::Symbols => out.emit(&symbols::run()),
        Commands::Check => {
            if cli.mock {
                anyhow::bail!("check needs a native library; drop --mock");
            }
            let path = config.library_path(cli.library.as_deref());
            out.emit(&check::run(&path)?)
        }
        Commands::RestartCheck { app_id } => {
            let api = open_backend(&cli, &config)?;
            let app_id = app_id
                .or(config.app.id)
                .map(AppId::new)
                .or(cli.mock.then_some(MOCK_APP_ID))
                .context("No app id; pass --app-id or set [app] id in the config")?;
            out.emit(&restart::run(api.as_ref(), app_id))
        }
        Commands::Info { app_id } => {
            let api = open_backend(&cli, &config)?;
            commands::start(api.as_ref(), &config)?;
            let app_id = app_id
                .or(config.app.id)
                .map(AppId::new)
                .or(cli.mock.then_some(MOCK_APP_ID));
            out.emit(&info::run(api.as_ref(), app_id, &config))
        }
        Commands::Storage { action } => {
            let api = open_backend(&cli, &config)?;
            commands::start(api.as_ref(), &config)?;
            let cloud = api.remote_storage();
            match action {
                StorageAction::Write { name, data, file } => {
                    let bytes = match (data, file) {
                        (Some(text), _) => text.clone().into_bytes(),
                        (None, Some(path)) => std::fs::read(path)
                            .with_context(|| format!("Failed to read {}", path.display()))?,
                        (None, None) => anyhow::bail!("Must specify contents or --file"),
                    };
                    out.emit(&storage::write(cloud, name, &bytes)?)
                }
                StorageAction::Read { name, output } => {
                    let report = storage::read(cloud, name)?;
                    if let Some(path) = output {
                        std::fs::write(path, &report.data)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                    }
                    out.emit(&report)
                }
                StorageAction::Delete { name } => out.emit(&storage::delete(cloud, name)?),
                StorageAction::Size { name } => out.emit(&storage::size(cloud, name)),
            }
        }
        Commands::Achievement { action, timeout_ms } => {
            let api = open_backend(&cli, &config)?;
            commands::start(api.as_ref(), &config)?;
            let timeout = Duration::from_millis(*timeout_ms);
            let report = match action {
                AchievementAction::Get { name } => achievement::get(api.as_ref(), name, timeout)?,
                AchievementAction::Set { name } => {
                    achievement::set(api.as_ref(), name, true, timeout)?
                }
                AchievementAction::Clear { name } => {
                    achievement::set(api.as_ref(), name, false, timeout)?
                }
            };
            out.emit(&report)
        }
        Commands::Ticket {
            data,
            timeout_ms,
            poll_ms,
        } => {
            let api = open_backend(&cli, &config)?;
            commands::start(api.as_ref(), &config)?;
            let data = data.as_deref().unwrap_or_default().as_bytes();
            out.emit(&ticket::run(
                api.as_ref(),
                data,
                Duration::from_millis(*timeout_ms),
                Duration::from_millis(*poll_ms),
            )?)
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the native library, or build a populated mock with `--mock`.
fn open_backend(cli: &Cli, config: &SteamConfig) -> Result<Box<dyn SteamApi>> {
    if cli.mock {
        return Ok(Box::new(demo_mock(config)));
    }
    let steam = NativeSteam::from_config(config, cli.library.as_deref()).with_context(|| {
        let path = config.library_path(cli.library.as_deref());
        format!("Failed to load Steamworks from {}", path.display())
    })?;
    Ok(Box::new(steam))
}

/// Mock with the Spacewar sample's achievements, one controller, and
/// asynchronous calls that complete on the next `run_callbacks()`.
fn demo_mock(config: &SteamConfig) -> MockSteam {
    let steam = MockSteam::new();
    let app_id = config.app.id.map(AppId::new).unwrap_or(MOCK_APP_ID);
    steam.set_install_dir(app_id, "/mock/steamapps/common/Spacewar");
    steam.add_controller(InputHandle::new(1), SteamInputType::SteamDeckController);
    for name in [
        "ACH_WIN_ONE_GAME",
        "ACH_WIN_100_GAMES",
        "ACH_TRAVEL_FAR_ACCUM",
        "ACH_TRAVEL_FAR_SINGLE",
    ] {
        steam.define_achievement(name, false);
    }
    steam.set_complete_on_run_callbacks(true);
    steam
}
