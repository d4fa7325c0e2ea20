use anyhow::{Context, Result};
use pomo_core::{MAX_MINUTES, MIN_MINUTES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomoConfig {
    /// Duration pre-filled into the form, in minutes.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
    /// Step used by the arrow keys on the duration field.
    #[serde(default = "default_minutes_step")]
    pub minutes_step: u32,
    /// Task names offered with the arrow keys on the task field.
    #[serde(default = "default_task_suggestions")]
    pub task_suggestions: Vec<String>,
    /// Fallback log filter when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_minutes() -> u32 {
    25
}

fn default_minutes_step() -> u32 {
    5
}

fn default_task_suggestions() -> Vec<String> {
    vec![
        "Deep work".to_string(),
        "Code review".to_string(),
        "Email".to_string(),
        "Planning".to_string(),
    ]
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for PomoConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
            minutes_step: default_minutes_step(),
            task_suggestions: default_task_suggestions(),
            log_filter: default_log_filter(),
        }
    }
}

impl PomoConfig {
    fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("pomo"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Load config: built-in defaults, then `config.toml` if present, then
    /// `POMO_*` environment variables.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let settings = config::Config::builder()
            .add_source(
                config::Config::try_from(&Self::default())
                    .context("Failed to build default config")?,
            )
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("POMO")
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("task_suggestions"),
            )
            .build()
            .with_context(|| format!("Failed to read config at {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Clamp values the form would reject anyway.
    pub fn sanitized(mut self) -> Self {
        self.default_minutes = self.default_minutes.clamp(MIN_MINUTES, MAX_MINUTES);
        self.minutes_step = self.minutes_step.clamp(1, MAX_MINUTES);
        self.task_suggestions
            .retain(|suggestion| !suggestion.trim().is_empty());
        self
    }
}
