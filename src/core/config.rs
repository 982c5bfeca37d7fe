//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lectern/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LecternConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory for progress and trainer-mode state.
    pub state_dir: Option<String>,
    /// "module-slug/lesson-slug" to open at launch.
    pub start_lesson: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub state_dir: Option<PathBuf>,
    pub start_lesson: Option<String>,
    pub trainer_mode: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lectern/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lectern").join("config.toml"))
}

/// Load config from `~/.lectern/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LecternConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LecternConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LecternConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LecternConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LecternConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lectern Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# state_dir = "/home/me/.lectern"        # Or set LECTERN_STATE_DIR env var
# start_lesson = "introduction/architecture-overview"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_location` and `cli_trainer` come from CLI arguments (None/false =
/// not specified).
pub fn resolve(
    config: &LecternConfig,
    cli_location: Option<&str>,
    cli_trainer: bool,
) -> ResolvedConfig {
    // State dir: env → config (default resolved later against $HOME)
    let state_dir = std::env::var("LECTERN_STATE_DIR")
        .ok()
        .or_else(|| config.general.state_dir.clone())
        .map(PathBuf::from);

    // Start lesson: CLI → config
    let start_lesson = cli_location
        .map(|s| s.to_string())
        .or_else(|| config.general.start_lesson.clone());

    ResolvedConfig {
        state_dir,
        start_lesson,
        trainer_mode: cli_trainer,
    }
}

/// Split a "module-slug/lesson-slug" location into its two parts.
pub fn split_location(location: &str) -> Option<(&str, &str)> {
    let (module_slug, lesson_slug) = location.split_once('/')?;
    if module_slug.is_empty() || lesson_slug.is_empty() {
        return None;
    }
    Some((module_slug, lesson_slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LecternConfig::default();
        assert!(config.general.state_dir.is_none());
        assert!(config.general.start_lesson.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = LecternConfig::default();
        let resolved = resolve(&config, None, false);
        assert!(resolved.start_lesson.is_none());
        assert!(!resolved.trainer_mode);
    }

    #[test]
    fn test_resolve_cli_location_wins() {
        let config = LecternConfig {
            general: GeneralConfig {
                start_lesson: Some("mail-flow/connectors".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("introduction/dns-records"), false);
        assert_eq!(resolved.start_lesson.as_deref(), Some("introduction/dns-records"));
    }

    #[test]
    fn test_resolve_falls_back_to_config_location() {
        let config = LecternConfig {
            general: GeneralConfig {
                start_lesson: Some("mail-flow/connectors".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, None, true);
        assert_eq!(resolved.start_lesson.as_deref(), Some("mail-flow/connectors"));
        assert!(resolved.trainer_mode);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
start_lesson = "introduction/exam-overview"
"#;
        let config: LecternConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.start_lesson.as_deref(),
            Some("introduction/exam-overview")
        );
        assert!(config.general.state_dir.is_none());
    }

    #[test]
    fn test_split_location() {
        assert_eq!(split_location("intro/lesson-one"), Some(("intro", "lesson-one")));
        assert_eq!(split_location("intro"), None);
        assert_eq!(split_location("/lesson"), None);
        assert_eq!(split_location("intro/"), None);
        // Extra separators belong to the lesson slug
        assert_eq!(split_location("a/b/c"), Some(("a", "b/c")));
    }
}
