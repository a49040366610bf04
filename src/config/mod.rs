use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    errors::{IntakeError, Result},
    locale::Language,
    message::{DEFAULT_RECIPIENT, SEGMENT_LIMIT},
    utils::{
        app_data_dir,
        persistence::{ensure_dir, load_json, save_json},
    },
};

const CONFIG_FILE: &str = "config.json";

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["language", "recipient", "segment_limit", "locale_dir"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    /// WhatsApp number (international format, digits only) that receives the export.
    pub recipient: String,
    pub segment_limit: usize,
    /// Directory holding `<lang>.json` tables that replace the built-in ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            recipient: DEFAULT_RECIPIENT.into(),
            segment_limit: SEGMENT_LIMIT,
            locale_dir: None,
        }
    }
}

impl Config {
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "language" => Ok(self.language.to_string()),
            "recipient" => Ok(self.recipient.clone()),
            "segment_limit" => Ok(self.segment_limit.to_string()),
            "locale_dir" => Ok(self
                .locale_dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default()),
            other => Err(unknown_key(other)),
        }
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "language" => self.language = value.parse()?,
            "recipient" => {
                let digits = value.trim_start_matches('+');
                if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
                    return Err(IntakeError::Config(format!(
                        "recipient `{}` must be a phone number in international format",
                        value
                    )));
                }
                self.recipient = digits.to_string();
            }
            "segment_limit" => {
                let limit: usize = value.parse().map_err(|_| {
                    IntakeError::Config(format!("segment_limit `{}` is not a number", value))
                })?;
                if limit == 0 {
                    return Err(IntakeError::Config(
                        "segment_limit must be greater than zero".into(),
                    ));
                }
                self.segment_limit = limit;
            }
            "locale_dir" => {
                self.locale_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> IntakeError {
    IntakeError::Config(format!(
        "unknown setting `{}` (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        Ok(load_json(&self.path)?.unwrap_or_default())
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        save_json(config, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
