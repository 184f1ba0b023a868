//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/discography/discography.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `DISCOGRAPHY_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};

/// Display settings for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Prefix tree labels with the node kind
    pub show_kind: bool,
    /// Colored terminal output
    pub color: bool,
    /// Joins names when printing a lineage
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_kind: false,
            color: true,
            separator: " <- ".into(),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub show_kind: Option<bool>,
    pub color: Option<bool>,
    pub separator: Option<String>,
}

/// Get the XDG config directory for discography.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "discography").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("discography.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            show_kind: overlay.show_kind.unwrap_or(self.show_kind),
            color: overlay.color.unwrap_or(self.color),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "applying global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            current = current.layer_file(path)?;
        }

        Self::apply_env_overrides(current)
    }

    /// Apply one config file on top of `self`.
    pub fn layer_file(&self, path: &Path) -> ApplicationResult<Self> {
        debug!(path = %path.display(), "applying config file");
        Ok(self.merge_with(&load_raw_settings(path)?))
    }

    /// Apply DISCOGRAPHY_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("DISCOGRAPHY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("show_kind") {
            settings.show_kind = val;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# discography configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/discography/discography.toml
#   Explicit: file passed with --config
#   Env:      DISCOGRAPHY_* environment variables

# Prefix tree labels with [discography], [album] or [song]
# show_kind = false

# Colored terminal output (NO_COLOR is honoured as well)
# color = true

# Separator used by `lineage`
# separator = " <- "
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn given_defaults_when_created_then_plain_output_with_arrow_separator() {
        let settings = Settings::default();
        assert!(!settings.show_kind);
        assert!(settings.color);
        assert_eq!(settings.separator, " <- ");
    }

    #[test]
    fn given_partial_file_when_layering_then_unspecified_fields_kept() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_kind = true").unwrap();

        let settings = Settings::default().layer_file(file.path()).unwrap();

        assert!(settings.show_kind);
        assert!(settings.color);
        assert_eq!(settings.separator, " <- ");
    }

    #[test]
    fn given_invalid_toml_when_layering_then_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_kind = = true").unwrap();

        let result = Settings::default().layer_file(file.path());
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_missing_file_when_layering_then_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::default().layer_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_env_vars_when_loading_then_they_win_over_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_kind = false").unwrap();
        writeln!(file, "separator = \" | \"").unwrap();
        std::env::set_var("DISCOGRAPHY_SHOW_KIND", "true");
        std::env::set_var("DISCOGRAPHY_SEPARATOR", " / ");

        let result = Settings::load(Some(file.path()));

        std::env::remove_var("DISCOGRAPHY_SHOW_KIND");
        std::env::remove_var("DISCOGRAPHY_SEPARATOR");
        let settings = result.unwrap();
        assert!(settings.show_kind);
        assert_eq!(settings.separator, " / ");
    }

    #[test]
    fn given_settings_when_serialized_then_template_keys_match() {
        let toml = Settings::default().to_toml().unwrap();
        for key in ["show_kind", "color", "separator"] {
            assert!(toml.contains(key), "missing {key} in {toml}");
            assert!(Settings::template().contains(key));
        }
    }
}
