use crate::core::calendar::{ActivityColor, ActivityPalette, DEFAULT_ACTIVITY_COLORS, FALLBACK_COLOR};
use crate::errors::{AppError, AppResult};
use crate::export::DEFAULT_EXCLUDE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_customers_file")]
    pub customers_file: String,
    #[serde(default = "default_trainings_file")]
    pub trainings_file: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_export_exclude")]
    pub export_exclude: Vec<String>,
    #[serde(default = "default_activity_colors")]
    pub activity_colors: Vec<ActivityColor>,
    #[serde(default = "default_fallback_color")]
    pub fallback_color: String,
}

fn default_customers_file() -> String {
    Config::config_dir().join("customers.json").to_string_lossy().to_string()
}
fn default_trainings_file() -> String {
    Config::config_dir().join("trainings.json").to_string_lossy().to_string()
}
fn default_page_size() -> usize {
    10
}
fn default_export_exclude() -> Vec<String> {
    DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect()
}
fn default_activity_colors() -> Vec<ActivityColor> {
    DEFAULT_ACTIVITY_COLORS
        .iter()
        .map(|(k, c)| ActivityColor::new(k, c))
        .collect()
}
fn default_fallback_color() -> String {
    FALLBACK_COLOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            customers_file: default_customers_file(),
            trainings_file: default_trainings_file(),
            page_size: default_page_size(),
            export_exclude: default_export_exclude(),
            activity_colors: default_activity_colors(),
            fallback_color: default_fallback_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtrainer`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtrainer")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtrainer.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be greater than 0".to_string()));
        }
        if let Some(bad) = self
            .activity_colors
            .iter()
            .map(|a| a.color.as_str())
            .chain(std::iter::once(self.fallback_color.as_str()))
            .find(|c| !is_hex_color(c))
        {
            return Err(AppError::Config(format!("invalid color '{bad}'")));
        }
        Ok(())
    }

    /// Activity palette for the calendar projector.
    pub fn palette(&self) -> ActivityPalette {
        ActivityPalette::new(self.activity_colors.clone(), &self.fallback_color)
    }

    /// Write the configuration file at `path`; an existing file is kept
    /// unless `overwrite` is set. Returns whether the file was written.
    pub fn write_to(&self, path: &Path, overwrite: bool) -> AppResult<bool> {
        if path.exists() && !overwrite {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
