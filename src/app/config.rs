use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tessera::config::GalleryOptions;
use tessera::source::SourceConfig;
use tessera::utils::expand_tilde;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    /// Options applied to every gallery that does not carry its own
    #[serde(default)]
    pub gallery: GalleryOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub open: String,
    pub close: String,
    pub next: String,
    pub prev: String,
    pub next_tag: String,
    pub prev_tag: String,
    pub next_gallery: String,
    pub prev_gallery: String,
    pub quit: String,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            open: "Enter".to_string(),
            close: "Esc".to_string(),
            next: "l".to_string(),
            prev: "h".to_string(),
            next_tag: "Tab".to_string(),
            prev_tag: "BackTab".to_string(),
            next_gallery: "]".to_string(),
            prev_gallery: "[".to_string(),
            quit: "q".to_string(),
        }
    }
}

impl KeybindingsConfig {
    /// Parse a keybinding string into a KeyCode
    pub fn parse_key(s: &str) -> Option<KeyCode> {
        let s = s.trim();

        if s.chars().count() == 1 {
            return s.chars().next().map(KeyCode::Char);
        }

        match s.to_lowercase().as_str() {
            "enter" | "return" => Some(KeyCode::Enter),
            "esc" | "escape" => Some(KeyCode::Esc),
            "tab" => Some(KeyCode::Tab),
            "backtab" | "shift+tab" | "s-tab" => Some(KeyCode::BackTab),
            "space" => Some(KeyCode::Char(' ')),
            "backspace" => Some(KeyCode::Backspace),
            "home" => Some(KeyCode::Home),
            "end" => Some(KeyCode::End),
            "pageup" | "pgup" => Some(KeyCode::PageUp),
            "pagedown" | "pgdn" => Some(KeyCode::PageDown),
            "up" => Some(KeyCode::Up),
            "down" => Some(KeyCode::Down),
            "left" => Some(KeyCode::Left),
            "right" => Some(KeyCode::Right),
            _ => None,
        }
    }

    pub fn matches(&self, key: KeyCode, binding: &str) -> bool {
        Self::parse_key(binding) == Some(key)
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tessera", "tessera")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from `path` (or the default location), writing defaults
    /// when the file is missing. A corrupt file is reported and replaced by
    /// defaults in memory only.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !path.exists() {
            let config = Config::default();
            config.save_to(&path)?;
            debug!(path = %path.display(), "wrote default config");
            return Ok(config);
        }

        let data = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        match toml::from_str::<Config>(&data) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Ok(Config::default())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data).with_context(|| format!("writing config {}", path.display()))?;

        Ok(())
    }

    /// Scan directory with `~` expanded.
    pub fn source_dir(&self) -> PathBuf {
        expand_tilde(&self.source.directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_key_handles_chars_and_names() {
        assert_eq!(KeybindingsConfig::parse_key("l"), Some(KeyCode::Char('l')));
        assert_eq!(KeybindingsConfig::parse_key("]"), Some(KeyCode::Char(']')));
        assert_eq!(KeybindingsConfig::parse_key("ESC"), Some(KeyCode::Esc));
        assert_eq!(KeybindingsConfig::parse_key("shift+tab"), Some(KeyCode::BackTab));
        assert_eq!(KeybindingsConfig::parse_key("nope"), None);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("nested").join("config.toml");
        let config = Config::load_from(Some(&path)).expect("load");
        assert!(path.exists());
        assert_eq!(config.keybindings.next, "l");
        assert!(config.gallery.navigation);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[gallery\nbroken").expect("write");
        let config = Config::load_from(Some(&path)).expect("load");
        assert_eq!(config.gallery, GalleryOptions::default());
        assert_eq!(fs::read_to_string(&path).expect("read"), "[gallery\nbroken");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "[gallery]\nshow_tags = false\n\n[keybindings]\nnext = \"n\"\n",
        )
        .expect("write");
        let config = Config::load_from(Some(&path)).expect("load");
        assert!(!config.gallery.show_tags);
        assert!(config.gallery.light_box);
        assert_eq!(config.keybindings.next, "n");
        assert_eq!(config.keybindings.prev, "h");
        assert!(config.source.recursive);
    }

    #[test]
    fn saved_config_loads_back() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("config.toml");
        let mut config = Config::default();
        config.gallery.all_label = "Tous".to_string();
        config.save_to(&path).expect("save");
        let back = Config::load_from(Some(&path)).expect("load");
        assert_eq!(back.gallery.all_label, "Tous");
    }
}
