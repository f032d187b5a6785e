//! Centralized configuration paths for codedaily
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/codedaily/`
//! - Windows: `%APPDATA%\codedaily\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "codedaily";

/// File name prefix of the rolling log (`codedaily.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "codedaily.log";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/codedaily`
///   - Else: `~/.config/codedaily`
///
/// Windows:
///   - `%APPDATA%\codedaily`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/codedaily/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/codedaily/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Newest rolling log file in `dir`, or the undated name when none exist yet
pub fn newest_log_file(dir: &Path) -> PathBuf {
    let mut log_files: Vec<PathBuf> = fs::read_dir(dir)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX))
        })
        .collect();

    // YYYY-MM-DD suffixes sort naturally
    log_files.sort_by(|a, b| b.cmp(a));
    log_files
        .into_iter()
        .next()
        .unwrap_or_else(|| dir.join(LOG_FILE_PREFIX))
}

/// Most recent log file in `~/.config/codedaily/logs/`
pub fn log_file() -> Option<PathBuf> {
    logs_dir().map(|dir| newest_log_file(&dir))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
