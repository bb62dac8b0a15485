use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    /// Trailing window for the time-series collection
    #[serde(default = "default_days")]
    pub days: u32,
    /// Point count for the scatter collection
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Base URL of a remote data API; when unset, the built-in generator is
    /// used
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportSettings {
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_days() -> u32 {
    30
}

fn default_samples() -> usize {
    100
}

fn default_out_dir() -> String {
    "./charts".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            days: default_days(),
            samples: default_samples(),
            endpoint: None,
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

/// Load settings from `config/settings.{toml,json,...}`. The file is
/// optional; every key has a default.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/settings").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
