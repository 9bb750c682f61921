//! Script template fetched over HTTP using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, ResolveError};
use crate::ports::TemplateSource;

/// Fetches the script template with one GET per call.
///
/// Caching is left to [`super::CachedTemplateSource`].
#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
    url: Url,
    client: Client,
}

impl HttpTemplateSource {
    pub fn new(url: Url, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { url, client })
    }
}

impl TemplateSource for HttpTemplateSource {
    fn load(&self) -> Result<String, ResolveError> {
        tracing::debug!(url = %self.url, "fetching script template");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|e| ResolveError::template_unavailable(self.describe(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::template_unavailable(
                self.describe(),
                format!("HTTP {}", status.as_u16()),
            ));
        }

        response.text().map_err(|e| ResolveError::template_unavailable(self.describe(), e))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
