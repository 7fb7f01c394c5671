use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
    #[serde(default = "default_risk_threshold")]
    pub risk_threshold: f64,
    #[serde(default = "default_top_features")]
    pub top_features: usize,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            risk_threshold: default_risk_threshold(),
            top_features: default_top_features(),
        }
    }
}

fn default_model_path() -> PathBuf { PathBuf::from("data/stroke_model.json") }
fn default_risk_threshold() -> f64 { 0.7 }
fn default_top_features() -> usize { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    /// CSV with the public stroke dataset; synthetic data is used when absent
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    #[serde(default = "default_synthetic_samples")]
    pub synthetic_samples: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dataset_path: None,
            synthetic_samples: default_synthetic_samples(),
            seed: default_seed(),
        }
    }
}

fn default_synthetic_samples() -> usize { 500 }
fn default_seed() -> u64 { 42 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STROKE_)
    /// 5. A bare PORT variable, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STROKE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("STROKE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_platform_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("STROKE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply overrides from conventional platform variables
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_model_settings() {
        let model = ModelSettings::default();
        assert_eq!(model.path, PathBuf::from("data/stroke_model.json"));
        assert_eq!(model.risk_threshold, 0.7);
        assert_eq!(model.top_features, 5);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "compact");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 9000

[model]
risk_threshold = 0.5

[dashboard]
dataset_path = "data/healthcare-dataset-stroke-data.csv"
"#
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.model.risk_threshold, 0.5);
        assert_eq!(settings.model.top_features, 5);
        assert_eq!(
            settings.dashboard.dataset_path,
            Some(PathBuf::from("data/healthcare-dataset-stroke-data.csv"))
        );
        assert_eq!(settings.dashboard.synthetic_samples, 500);
        assert_eq!(settings.logging.level, "info");
    }
}
