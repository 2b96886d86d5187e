use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::notifier::{DEFAULT_HIDE_DELAY, TimerPolicy};

const CONFIG_FILE: &str = "toaster.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hide_delay_ms: u64,
    pub timer_policy: TimerPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_delay_ms: DEFAULT_HIDE_DELAY.as_millis() as u64,
            timer_policy: TimerPolicy::default(),
        }
    }
}

impl Config {
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hide_delay_ms == 0 {
            return Err(Error::InvalidConfig(String::from(
                "hide_delay_ms must be greater than zero",
            )));
        }
        Ok(())
    }
}

pub fn default_path() -> Result<PathBuf> {
    let project_dirs =
        ProjectDirs::from("org", "Ki11erRabbit", "Toaster").ok_or(Error::NoConfigDir)?;

    Ok(project_dirs.config_dir().join(CONFIG_FILE))
}

pub async fn load() -> Result<Config> {
    load_from_path(&default_path()?).await
}

/// Reads a configuration file. A missing file yields the defaults; unparsable
/// or invalid contents are an error so the file is never replaced.
pub async fn load_from_path(path: &Path) -> Result<Config> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        Err(err) => return Err(err.into()),
    };

    let config = match toml::from_str::<Config>(&contents) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unreadable configuration");
            return Err(err.into());
        }
    };

    config.validate()?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

pub async fn save(config: &Config) -> Result<()> {
    save_to_path(config, &default_path()?).await
}

pub async fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let contents = toml::to_string(config)?;
    fs::write(path, contents).await?;
    info!(path = %path.display(), "saved configuration");
    Ok(())
}
