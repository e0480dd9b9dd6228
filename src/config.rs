//! User configuration for the command-line host.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use gridcalc_engine::engine::{DEFAULT_PRECISION, MAX_PRECISION};

/// Settings read from `config.toml`. Every key is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decimal places for formatted numbers.
    pub precision: usize,
    /// Heading of the markdown output.
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            precision: DEFAULT_PRECISION,
            title: "Sheet".to_string(),
        }
    }
}

pub(crate) fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridcalc")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load the config from `config_file`, or from the user config directory.
///
/// Problems are returned as warnings and the defaults are used instead. A
/// missing default config is not a problem; a missing explicit one is.
pub fn load_config(config_file: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = config_file.map(Path::to_path_buf).or_else(user_config_path);

    let Some(path) = config_path else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let mut config = match std::fs::read_to_string(&path) {
        Ok(content) => match parse_config(&content) {
            Ok(parsed) => parsed,
            Err(err) => {
                warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                Config::default()
            }
        },
        Err(err) => {
            warnings.push(format!("Failed to read {}: {}", path.display(), err));
            Config::default()
        }
    };
    warnings.extend(clamp_precision(&mut config));
    (config, warnings)
}

/// Bring `precision` into the supported range, returning a warning if it was not.
fn clamp_precision(config: &mut Config) -> Option<String> {
    if config.precision <= MAX_PRECISION {
        return None;
    }
    let warning = format!(
        "precision {} is too large, using {}",
        config.precision, MAX_PRECISION
    );
    config.precision = MAX_PRECISION;
    Some(warning)
}

fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}
