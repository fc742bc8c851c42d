use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError};
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "config/default";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub store: StoreConfig,
    pub render: RenderConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub headers: HashMap<String, String>,
    pub timeout_secs: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9000".to_string(),
            headers: HashMap::new(),
            timeout_secs: None,
        }
    }
}

/// Presentation settings shared by the screen and document renderers.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub title: String,
    /// Visible text of the commercial-registration link when a target exists.
    pub link_label: String,
    pub screen_placeholder: String,
    pub document_placeholder: String,
    pub logo_url: Option<String>,
    pub logo_path: Option<PathBuf>,
    pub fonts_dir: Option<PathBuf>,
    pub font_family: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Supplier Registration".to_string(),
            link_label: "View registration".to_string(),
            screen_placeholder: String::new(),
            document_placeholder: "N/A".to_string(),
            logo_url: None,
            logo_path: None,
            fonts_dir: None,
            font_family: "Roboto".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub file_stem: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            file_stem: "vendor-details".to_string(),
        }
    }
}

impl Settings {
    /// Loads `config/default.*` (when present) followed by `APP_*` environment overrides.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Same as [`Settings::new`] but reads the given file instead of `config/default`.
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let config = builder.build()?;

        if let Ok(headers) = config.get_table("store.headers") {
            debug!(
                ?headers,
                "Loaded store headers from configuration"
            );
        }

        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.store.base_url,
            output_dir = %settings.export.output_dir.display(),
            "Parsed settings"
        );

        Ok(settings)
    }
}
