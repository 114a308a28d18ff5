//! The main config loading module for dirview.
//!
//! Handles loading and deserializing settings from `dirview.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! Also generates a default config file for `dv --init`.

use crate::config::{Display, General, InternalGeneral, Keys, Theme};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};
use tracing::{info, warn};

/// Raw configuration as read from the toml file.
/// It is converted into the main [Config] struct after parsing.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
}

/// Main configuration struct for dirview
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// A missing or unparsable file gives the internal defaults.
    ///
    /// Called by the entry point before the terminal is set up, so problems are
    /// reported on stderr.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                warn!(path = %path.display(), error = %e, "config rejected, using defaults");
                Self::default()
            }
        }
    }

    /// Reads and parses one config file.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let raw = toml::from_str::<RawConfig>(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(raw.into())
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the DIRVIEW_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME, then defaults to ~/.config/dirview/dirview.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("DIRVIEW_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("dirview/dirview.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/dirview/dirview.toml");
        }
        PathBuf::from("dirview.toml")
    }

    /// Write the default configuration file to `path`.
    /// Refuses to overwrite an existing file.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {}", path.display());
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const DEFAULT_TOML: &str = r##"# dirview.toml - default configuration for dirview
#
# Commented values are the internal defaults.
# Colors: terminal names ("cyan") or hex codes ("#RRGGBB").

[general]
# start_in_cwd = false
# notice_timeout_ms = 4000

[display]
# selection_marker = true
# borders = true
# border_shape = "square"     # "square", "rounded", "double" or "thick"
# titles = true
# status_line = true
# entry_padding = 1
# scroll_padding = 3

[theme]
# selection_icon = "> "

# [theme.selection]
# fg = "default"
# bg = "default"

# [theme.accent]
# fg = "default"
# bg = "default"

# [theme.entry]
# fg = "default"
# bg = "default"

# [theme.path]
# fg = "default"
# bg = "default"

# [theme.status_line]
# fg = "default"
# bg = "default"

# [theme.error]
# fg = "default"
# bg = "default"

# [theme.widget]
# color.fg = "default"
# color.bg = "default"
# border.fg = "default"
# border.bg = "default"
# title.fg = "default"
# title.bg = "default"

# [keys]
# browse = ["b"]
# open_file = ["Enter", "l", "Right"]
# go_parent = ["h", "Left", "Backspace"]
# go_up = ["k", "Up"]
# go_down = ["j", "Down"]
# go_to_top = ["g", "Home"]
# go_to_bottom = ["G", "End"]
# sort_by_name = ["1"]
# sort_by_size = ["2"]
# sort_by_date = ["3"]
# sort_none = ["0"]
# search = ["s", "/"]
# clear_search = ["Esc"]
# delete = ["d", "Delete"]
# rename = ["r"]
# refresh = ["Ctrl+r", "F5"]
# keybind_help = ["?"]
# quit = ["q"]
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generated_default_parses() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/dirview.toml");

        Config::generate_default(&path)?;
        let config = Config::load_from(&path)?;
        assert!(config.display().borders());
        assert_eq!(config.keys().quit(), ["q".to_string()]);
        Ok(())
    }

    #[test]
    fn generate_refuses_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("dirview.toml");
        fs::write(&path, "# mine")?;

        let err = Config::generate_default(&path).err();
        assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::AlreadyExists));
        assert_eq!(fs::read_to_string(&path)?, "# mine");
        Ok(())
    }

    #[test]
    fn invalid_toml_is_invalid_data() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("dirview.toml");
        fs::write(&path, "[display\nborders = ")?;

        let err = Config::load_from(&path).err();
        assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::InvalidData));
        Ok(())
    }

    #[test]
    fn notice_timeout_is_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let raw: RawConfig = toml::from_str("[general]\nnotice_timeout_ms = 1")?;
        let config = Config::from(raw);
        assert_eq!(
            config.general().notice_timeout(),
            std::time::Duration::from_millis(crate::utils::MIN_NOTICE_TIMEOUT_MS)
        );
        Ok(())
    }
}
