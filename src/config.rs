use std::path::{Path, PathBuf};

use config::{Environment, FileFormat};
use serde::Deserialize;

const CONFIG: &str = include_str!("../.config/config.json5");

/// `REACT_APP_API_BASE_URL` lands on the `api_base_url` key.
pub const API_ENV_PREFIX: &str = "REACT_APP";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
  #[serde(default, flatten)]
  pub config: AppConfig,
  #[serde(default)]
  pub api_base_url: Option<String>,
}

impl Config {
  pub fn new() -> Result<Self, config::ConfigError> {
    let config_dir = crate::utils::get_config_dir();
    Self::load(&config_dir, api_environment())
  }

  /// Layers, lowest precedence first: embedded defaults, config files in
  /// `config_dir`, then `env`.
  pub fn load(config_dir: &Path, env: Environment) -> Result<Self, config::ConfigError> {
    let mut builder = config::Config::builder()
      .add_source(config::File::from_str(CONFIG, FileFormat::Json5))
      .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

    let config_files = [
      ("config.json5", FileFormat::Json5),
      ("config.json", FileFormat::Json),
      ("config.yaml", FileFormat::Yaml),
      ("config.toml", FileFormat::Toml),
      ("config.ini", FileFormat::Ini),
    ];
    let mut found_config = false;
    for (file, format) in &config_files {
      builder = builder.add_source(config::File::from(config_dir.join(file)).format(*format).required(false));
      if config_dir.join(file).exists() {
        found_config = true
      }
    }
    if !found_config {
      log::info!("No configuration file found in {}, using defaults", config_dir.display());
    }

    builder.add_source(env).build()?.try_deserialize()
  }
}

/// `REACT_APP_*` variables; an empty value counts as unset.
pub fn api_environment() -> Environment {
  Environment::with_prefix(API_ENV_PREFIX).ignore_empty(true)
}
