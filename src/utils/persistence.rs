//! JSON file helpers for `~/.skyward/`.

use crate::core::constants::STORAGE_FILENAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the `~/.skyward/` directory path, creating it if needed.
pub fn skyward_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".skyward");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in `~/.skyward/`.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(skyward_dir()?.join(filename))
}

/// Where the high-score store lives.
pub fn storage_path() -> io::Result<PathBuf> {
    save_path(STORAGE_FILENAME)
}

/// Read JSON from `path`, returning `T::default()` if missing or invalid.
pub fn read_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Load a JSON file from `~/.skyward/`, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => read_json_or_default(&path),
        Err(_) => T::default(),
    }
}

/// Write `data` as pretty-printed JSON to `path`.
pub fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)
}
