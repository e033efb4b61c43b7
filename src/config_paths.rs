//! Per-user locations
//!
//! yaml-editor keeps one directory per user. It holds `config.yaml`, read
//! once at startup, and `logs/`, where the daily debug log rolls over.
//! Downloads do not live here; see `EditorConfig::resolved_download_dir`.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "yaml-editor";
const CONFIG_FILE_NAME: &str = "config.yaml";
const LOGS_DIR_NAME: &str = "logs";

/// Prefix of the rolling log files (`yaml-editor.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "yaml-editor.log";

/// `$XDG_CONFIG_HOME/yaml-editor`, `~/.config/yaml-editor` or
/// `%APPDATA%\yaml-editor`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir().map(|dir| dir.join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        unix_config_dir(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
    }
}

/// A relative `XDG_CONFIG_HOME` is invalid and ignored
#[cfg_attr(target_os = "windows", allow(dead_code))]
fn unix_config_dir(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(|| home.map(|home| home.join(".config")))
        .map(|dir| dir.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR_NAME))
}

/// Create the logs directory (and the config directory above it)
pub fn create_logs_dir() -> io::Result<PathBuf> {
    let dir = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
