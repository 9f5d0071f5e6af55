//! Application Configuration
//!
//! Compile-time defaults, optionally overridden by a JSON blob embedded in
//! the host page (`<script id="billed-config" type="application/json">`).

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ELEMENT_ID: &str = "billed-config";

const DEFAULT_API_URL: &str = "http://localhost:5678";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the bills API, without trailing slash
    pub api_url: String,
    /// Receipt preview width as a fraction of the modal width
    pub receipt_scale: f64,
    /// VAT percentage used when the form leaves it empty
    pub default_pct: f64,
    /// Accepted receipt extensions, lowercase
    pub allowed_extensions: Vec<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("BILLED_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            receipt_scale: 0.5,
            default_pct: 20.0,
            allowed_extensions: ["jpg", "jpeg", "png", "gif"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults with the fields present in `json` replaced
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.normalize()?;
        Ok(config)
    }

    fn normalize(&mut self) -> Result<(), ConfigError> {
        while self.api_url.ends_with('/') {
            self.api_url.pop();
        }
        if self.api_url.is_empty() {
            return Err(ConfigError::Invalid("api_url is empty".into()));
        }
        if !(self.receipt_scale > 0.0 && self.receipt_scale <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "receipt_scale must be in (0, 1], got {}",
                self.receipt_scale
            )));
        }
        for ext in &mut self.allowed_extensions {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }
        Ok(())
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn allows_extension(&self, ext: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }

    /// Read the overrides embedded in the page, falling back to defaults
    pub fn load() -> Self {
        let json = leptos::prelude::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match json {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("{}, using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
