//! Application settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns settings; the core crate never sees them.  These are the
//! tool's own defaults, not the `KEY=VALUE` placeholder values.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--settings FILE` (must exist), otherwise:
//!    a. `./docfill.toml`
//!    b. `<user config dir>/docfill/config.toml`
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "docfill.toml";

/// Application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default input locations.
    pub paths: PathsConfig,
    /// Which files are targets.
    pub scan: ScanConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub env_file: PathBuf,
    pub root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
    pub follow_links: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(".env"),
            root: PathBuf::from("."),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec![docfill_core::domain::DEFAULT_EXTENSION.to_string()],
            follow_links: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load settings, layering files over the built-in defaults.
    ///
    /// `settings_file` is the path passed via `--settings`; when given it
    /// must exist and replaces the discovered locations.
    pub fn load(settings_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default settings")?;
        let mut builder = Config::builder().add_source(defaults);

        match settings_file {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("settings file not found: {}", path.display());
                }
                builder = builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                let user = Self::config_path();
                builder = builder
                    .add_source(
                        File::from(user.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    )
                    .add_source(
                        File::from(Path::new(LOCAL_SETTINGS_FILE))
                            .format(FileFormat::Toml)
                            .required(false),
                    );
            }
        }

        builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    /// Path to the per-user settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `docfill.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "docfill", "docfill")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_SETTINGS_FILE))
    }
}
