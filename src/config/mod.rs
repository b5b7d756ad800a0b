//! Layered settings: defaults, `tidbits.toml`, then `TIDBITS_` env vars

pub mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::clipboard::ClipboardBackend;
use crate::error::{Result, TidbitsError};
use crate::summary::SummaryOptions;
use crate::utils::moving_average::DEFAULT_WINDOW;

/// File looked up in the current directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "tidbits.toml";

/// Environment prefix; nested keys use `__` (e.g. `TIDBITS_SUMMARY__GROUP_THRESHOLD`).
pub const ENV_PREFIX: &str = "TIDBITS_";

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            invalid => Err(format!("Invalid output format '{invalid}'. Use: text|json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window size for `average`
    pub moving_average_window: usize,

    pub clipboard_backend: ClipboardBackend,

    pub output_format: OutputFormat,

    /// Thresholds for `summarize`
    pub summary: SummaryOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            moving_average_window: DEFAULT_WINDOW,
            clipboard_backend: ClipboardBackend::default(),
            output_format: OutputFormat::default(),
            summary: SummaryOptions::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.moving_average_window == 0 {
            return Err(TidbitsError::Config("moving_average_window must be at least 1".into()));
        }
        if !self.summary.min_prefix_percent.is_finite() {
            return Err(TidbitsError::Config("summary.min_prefix_percent must be finite".into()));
        }
        Ok(())
    }
}

/// Load settings from defaults, the config file and the environment.
///
/// An explicit `config_path` must exist; the implicit `tidbits.toml` is
/// optional.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let mut figment = Figment::from(Serialized::defaults(Settings::default()));
    match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(TidbitsError::NotFound { path: path.to_path_buf() });
            }
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }
        None => figment = figment.merge(Toml::file(CONFIG_FILE_NAME)),
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    let settings: Settings =
        figment.extract().map_err(|e| TidbitsError::Config(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}

/// Render settings as TOML, suitable for a `tidbits.toml`.
pub fn render_settings(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).map_err(|e| TidbitsError::Config(e.to_string()))
}
