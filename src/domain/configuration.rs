//! Application configuration loaded from `rpidsm.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use super::request::{RequestDefaults, validate_language, validate_os_variant, validate_rotation};
use crate::domain::AppError;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Values applied to request fields the caller leaves out.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Where the catalog and script template come from.
    #[serde(default)]
    pub sources: SourcesConfig,
    /// How the one-line install command is addressed.
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.defaults.request_defaults()?;
        self.sources.validate()?;
        self.delivery.validate()?;
        Ok(())
    }
}

/// Request defaults. The language default is the explicit stand-in for a UI preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_os")]
    pub os: String,
    #[serde(default)]
    pub rotation: u16,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { language: default_language(), os: default_os(), rotation: 0 }
    }
}

impl DefaultsConfig {
    /// Validate and convert into typed request defaults.
    pub fn request_defaults(&self) -> Result<RequestDefaults, AppError> {
        let invalid = |field: &str, err: &dyn std::fmt::Display| {
            AppError::config_error(format!("Invalid [defaults] {field}: {err}"))
        };
        let rotation = validate_rotation(&self.rotation.to_string())
            .map_err(|err| invalid("rotation", &err))?;
        let os = validate_os_variant(&self.os).map_err(|err| invalid("os", &err))?;
        let language =
            validate_language(&self.language).map_err(|err| invalid("language", &err))?;
        Ok(RequestDefaults { rotation, os, language })
    }
}

fn default_language() -> String {
    "zh".to_string()
}

fn default_os() -> String {
    "bookworm64".to_string()
}

/// Catalog and template source selection. Unset entries use the embedded assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Screen catalog document (`.json`, `.yaml`, or `.yml`).
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Script template file.
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Script template fetched over HTTP(S).
    #[serde(default)]
    pub template_url: Option<Url>,
    /// Keep the first successful template read in memory.
    #[serde(default = "default_true")]
    pub cache_template: bool,
    /// Timeout for `template_url` fetches, in seconds.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            template: None,
            template_url: None,
            cache_template: default_true(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl SourcesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.template.is_some() && self.template_url.is_some() {
            return Err(AppError::config_error(
                "[sources] template and template_url are mutually exclusive",
            ));
        }
        if let Some(url) = &self.template_url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::config_error(format!(
                    "[sources] template_url must use http or https, got '{}'",
                    url.scheme()
                )));
            }
        }
        if self.fetch_timeout_secs == 0 {
            return Err(AppError::config_error(
                "[sources] fetch_timeout_secs must be greater than 0",
            ));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_fetch_timeout() -> u64 {
    10
}

/// Public address the install endpoint is served from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeliveryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    #[serde(default = "default_install_path")]
    pub install_path: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), install_path: default_install_path() }
    }
}

impl DeliveryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.install_path.starts_with('/') {
            return Err(AppError::config_error("[delivery] install_path must start with '/'"));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:3000").expect("Default base URL must be valid")
}

fn default_install_path() -> String {
    "/api/install".to_string()
}
