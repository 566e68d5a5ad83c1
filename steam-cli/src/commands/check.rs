//! Confirm a library exports the whole flat API.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use steam_client::NativeSteam;
use steam_types::{FlatSymbol, Interface};

#[derive(Debug, Serialize)]
pub struct InterfaceEntry {
    pub name: &'static str,
    pub version: u32,
    pub accessor: &'static str,
}

/// Result of a successful check.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub library: PathBuf,
    pub symbols: usize,
    pub interfaces: Vec<InterfaceEntry>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OK: {} exports all {} flat API symbols",
            self.library.display(),
            self.symbols
        )?;
        for iface in &self.interfaces {
            write!(f, "\n  {} v{:03} ({})", iface.name, iface.version, iface.accessor)?;
        }
        Ok(())
    }
}

/// Run the check command. Loading alone proves every symbol resolved;
/// nothing is called.
pub fn run(path: &Path) -> Result<CheckReport> {
    let steam = NativeSteam::load(path)
        .with_context(|| format!("{} is not a usable Steamworks library", path.display()))?;

    Ok(CheckReport {
        library: steam.path().to_path_buf(),
        symbols: FlatSymbol::ALL.len(),
        interfaces: Interface::ALL
            .iter()
            .map(|iface| InterfaceEntry {
                name: iface.name(),
                version: iface.version(),
                accessor: iface.accessor().name(),
            })
            .collect(),
    })
}
