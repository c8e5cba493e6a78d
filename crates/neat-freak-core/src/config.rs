use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Directory to organize. Defaults to the process working directory.
    #[serde(default)]
    pub working_dir: Option<String>,
    /// Glob patterns for top-level files that must be left in place.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Load `NeatFreak.toml` from the current directory. The file is optional;
/// when absent every field takes its default.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("NeatFreak").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
