//! Configuration management for cloudembed.
//!
//! Parses `cloudembed.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section is
//! optional; an empty file yields the classic SoundCloud widget with the
//! button placed after YouTube.
//!
//! ```toml
//! [player]
//! color = "#ff5500"
//! playlist_height = 450
//!
//! [button]
//! after = "youtube"
//! fallback = "last-group"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `player.endpoint` may reference environment variables, including
//! `${VAR:-fallback}`. Other fields are read literally.

mod expand;

use std::path::{Path, PathBuf};

use cloudembed_bbc::{DEFAULT_REFERENCE_CODE, FallbackPlacement, PlayerOptions, SoundCloudPlugin};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override player accent color.
    pub color: Option<String>,
    /// Override the reference button code.
    pub after: Option<String>,
    /// Override the fallback placement.
    pub fallback: Option<FallbackPlacement>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cloudembed.toml";

/// Largest accepted iframe height in pixels.
const MAX_HEIGHT: u32 = 2000;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Embedded player options.
    pub player: PlayerOptions,
    /// Editor button placement.
    pub button: ButtonConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Editor button placement.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Code of the button the SoundCloud button follows.
    pub after: String,
    /// Placement when that button is missing.
    pub fallback: FallbackPlacement,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            after: DEFAULT_REFERENCE_CODE.to_owned(),
            fallback: FallbackPlacement::default(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`player.endpoint`").
        field: String,
        /// Error message (e.g., "`PLAYER_URL` is not set and has no fallback").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a `#rrggbb` color.
fn require_hex_color(color: &str, field: &str) -> Result<(), ConfigError> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must be a #rrggbb color, got '{color}'"
        )));
    }
    Ok(())
}

/// Require an iframe height within `1..=MAX_HEIGHT`.
fn require_height(height: u32, field: &str) -> Result<(), ConfigError> {
    if height == 0 || height > MAX_HEIGHT {
        return Err(ConfigError::Validation(format!(
            "{field} must be between 1 and {MAX_HEIGHT}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cloudembed.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().ok();
        Self::load_in(cwd.as_deref(), config_path, cli_settings)
    }

    /// [`Config::load`] with discovery starting at `cwd`.
    fn load_in(
        cwd: Option<&Path>,
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = cwd.and_then(Self::discover_config) {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Build the plugin described by this configuration.
    #[must_use]
    pub fn plugin(&self) -> SoundCloudPlugin {
        SoundCloudPlugin::new()
            .with_player_options(self.player.clone())
            .with_reference_code(self.button.after.clone())
            .with_fallback(self.button.fallback)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(color) = &settings.color {
            self.player.color.clone_from(color);
        }
        if let Some(after) = &settings.after {
            self.button.after.clone_from(after);
        }
        if let Some(fallback) = settings.fallback {
            self.button.fallback = fallback;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        expand::expand_player(&mut config.player)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_player()?;
        require_non_empty(&self.button.after, "button.after")?;
        Ok(())
    }

    /// Validate player configuration.
    fn validate_player(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.player.endpoint, "player.endpoint")?;
        require_http_url(&self.player.endpoint, "player.endpoint")?;
        require_hex_color(&self.player.color, "player.color")?;
        require_height(self.player.track_height, "player.track_height")?;
        require_height(self.player.playlist_height, "player.playlist_height")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudembed_bbc::{Button, Plugin, Validator};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.player, PlayerOptions::default());
        assert_eq!(config.button.after, "youtube");
        assert_eq!(config.button.fallback, FallbackPlacement::LastGroup);
        assert!(config.config_path.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.player.color, "#7c6c64");
        assert_eq!(config.player.track_height, 130);
        assert_eq!(config.player.playlist_height, 350);
        assert_eq!(config.button.after, "youtube");
    }

    #[test]
    fn test_parse_player_config() {
        let toml = r##"
[player]
color = "#ff5500"
track_height = 166
auto_play = true
show_artwork = false
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.player.color, "#ff5500");
        assert_eq!(config.player.track_height, 166);
        assert_eq!(config.player.playlist_height, 350);
        assert!(config.player.auto_play);
        assert!(!config.player.show_artwork);
        assert!(!config.player.sharing);
    }

    #[test]
    fn test_parse_button_config() {
        let toml = r#"
[button]
after = "video"
fallback = "last-group"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.button.after, "video");
        assert_eq!(config.button.fallback, FallbackPlacement::LastGroup);
    }

    #[test]
    fn test_parse_unknown_fallback() {
        let toml = r#"
[button]
fallback = "somewhere"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_color() {
        let mut config = Config::default();
        config.player.color = "red".to_owned();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("player.color"));

        config.player.color = "#12345g".to_owned();
        assert!(config.validate().is_err());

        config.player.color = "#A0b1C2".to_owned();
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_heights() {
        let mut config = Config::default();
        config.player.track_height = 0;
        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("player.track_height")
        );

        config.player.track_height = 130;
        config.player.playlist_height = MAX_HEIGHT + 1;
        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("player.playlist_height")
        );
    }

    #[test]
    fn test_validate_endpoint() {
        let mut config = Config::default();
        config.player.endpoint = "w.soundcloud.com/player/".to_owned();
        assert!(config.validate().unwrap_err().to_string().contains("http"));

        config.player.endpoint = String::new();
        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("cannot be empty")
        );
    }

    #[test]
    fn test_validate_button_after() {
        let mut config = Config::default();
        config.button.after = String::new();
        assert!(config.validate().unwrap_err().to_string().contains("button.after"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[player]\nplaylist_height = 450\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.player.playlist_height, 450);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[player]\ncolor = \"blue\"\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[player\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_expands_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[player]\nendpoint = \"${CLOUDEMBED_TEST_UNSET_PLAYER:-https://staging.example.com/player/}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.player.endpoint, "https://staging.example.com/player/");
    }

    #[test]
    fn test_load_unset_endpoint_var() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[player]\nendpoint = \"${CLOUDEMBED_TEST_UNSET_PLAYER}\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "player.endpoint"));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_load_discovers_config_from_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().join("forum").join("themes");
        std::fs::create_dir_all(&cwd).unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[button]\nafter = \"video\"\n").unwrap();

        let overrides = CliSettings {
            fallback: Some(FallbackPlacement::NewGroup),
            ..Default::default()
        };
        let config = Config::load_in(Some(&cwd), None, Some(&overrides)).unwrap();
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.button.after, "video");
        assert_eq!(config.button.fallback, FallbackPlacement::NewGroup);
    }

    #[test]
    fn test_load_without_cwd_uses_defaults() {
        let config = Config::load_in(None, None, None).unwrap();
        assert!(config.config_path.is_none());
        assert_eq!(config.player, PlayerOptions::default());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            color: Some("#000000".to_owned()),
            after: Some("video".to_owned()),
            fallback: Some(FallbackPlacement::LastGroup),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.player.color, "#000000");
        assert_eq!(config.button.after, "video");
        assert_eq!(config.button.fallback, FallbackPlacement::LastGroup);
        assert_eq!(config.player.track_height, 130); // Unchanged
    }

    #[test]
    fn test_load_validates_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            color: Some("not-a-color".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(err.to_string().contains("player.color"));
    }

    #[test]
    fn test_plugin_from_config() {
        let toml = r#"
[player]
track_height = 200

[button]
after = "video"
fallback = "last-group"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let plugin = config.plugin();

        let mut content = "soundcloud.com/a/b".to_owned();
        plugin.validator().validate(&mut content);
        assert!(content.contains(r#"height="200""#));

        let mut groups = vec![vec![Button::for_tag("b", "b", "Bold")]];
        plugin.register_buttons(&mut groups);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0][1].code.as_deref(), Some("soundcloud"));
    }
}
