//! Steam Cloud file operations.

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use steam_client::SteamRemoteStorage;

#[derive(Debug, Serialize)]
pub struct WriteReport {
    pub name: String,
    pub bytes: usize,
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrote {} bytes to {}", self.bytes, self.name)
    }
}

#[derive(Debug, Serialize)]
pub struct ReadReport {
    pub name: String,
    pub size: usize,
    pub data_hex: String,
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl fmt::Display for ReadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.data) {
            Ok(text) => write!(f, "{}", text),
            Err(_) => write!(f, "{}", self.data_hex),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteReport {
    pub name: String,
}

impl fmt::Display for DeleteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleted {}", self.name)
    }
}

#[derive(Debug, Serialize)]
pub struct SizeReport {
    pub name: String,
    pub size: i32,
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size)
    }
}

/// Write `data` to `name`.
pub fn write(cloud: &dyn SteamRemoteStorage, name: &str, data: &[u8]) -> Result<WriteReport> {
    if !cloud.file_write(name, data) {
        anyhow::bail!("FileWrite failed for {}", name);
    }
    Ok(WriteReport {
        name: name.to_string(),
        bytes: data.len(),
    })
}

/// Read all of `name`. A size of zero is reported as missing, since the
/// SDK uses it for both.
pub fn read(cloud: &dyn SteamRemoteStorage, name: &str) -> Result<ReadReport> {
    let size = cloud.get_file_size(name);
    let Ok(size) = usize::try_from(size) else {
        anyhow::bail!("GetFileSize returned {} for {}", size, name);
    };
    if size == 0 {
        anyhow::bail!("{} does not exist or is empty", name);
    }

    let mut data = vec![0u8; size];
    let read = cloud.file_read(name, &mut data);
    if usize::try_from(read).ok() != Some(size) {
        anyhow::bail!("FileRead returned {} of {} bytes for {}", read, size, name);
    }

    Ok(ReadReport {
        name: name.to_string(),
        size,
        data_hex: hex::encode(&data),
        data,
    })
}

/// Delete `name`.
pub fn delete(cloud: &dyn SteamRemoteStorage, name: &str) -> Result<DeleteReport> {
    if !cloud.file_delete(name) {
        anyhow::bail!("FileDelete failed for {} (does it exist?)", name);
    }
    Ok(DeleteReport {
        name: name.to_string(),
    })
}

/// Size of `name`; zero when missing.
pub fn size(cloud: &dyn SteamRemoteStorage, name: &str) -> SizeReport {
    SizeReport {
        name: name.to_string(),
        size: cloud.get_file_size(name),
    }
}
