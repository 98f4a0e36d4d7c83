use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::warn;

use super::AppConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/tabstrip/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("tabstrip").join("config.ron"))
}

/// Loads the config from the default location, falling back to defaults.
pub fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => AppConfig::default(),
    }
}

/// Loads the config at `path`. A missing file yields defaults silently;
/// an unreadable or malformed one yields defaults and a warning.
pub fn load_config_from(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return AppConfig::default(),
        Err(err) => {
            warn!(path = %path.display(), %err, "config unreadable, using defaults");
            return AppConfig::default();
        }
    };
    match ron::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), %err, "config malformed, using defaults");
            AppConfig::default()
        }
    }
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {}", dir.display()))?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty).context("serializing config")?;
    fs::write(path, serialized).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
