use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use nutriplan_report::{DEFAULT_DATE_FORMAT, DEFAULT_LOCALE, ReportOptions};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    pub report: ReportConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatasetConfig {
    /// JSON food dataset used instead of the bundled one
    #[serde(default)]
    pub foods_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub output_dir: String,
    pub locale: String,
    /// `time` format description used for plan dates
    pub date_format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON lines
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (NUTRIPLAN__REPORT__LOCALE, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("report.output_dir", ".")?
            .set_default("report.locale", DEFAULT_LOCALE)?
            .set_default("report.date_format", DEFAULT_DATE_FORMAT)?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NUTRIPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.report.output_dir.trim().is_empty() {
            return Err("Report output_dir must not be empty".to_string());
        }
        self.report_options().map_err(|e| e.to_string())?;
        if let Some(path) = &self.dataset.foods_path
            && path.trim().is_empty()
        {
            return Err("Dataset foods_path must not be empty when set".to_string());
        }
        Ok(())
    }

    pub fn report_options(&self) -> nutriplan_report::Result<ReportOptions> {
        ReportOptions::new(&self.report.locale, &self.report.date_format)
    }
}
