use std::sync::OnceLock;

use crate::domain::ResolveError;
use crate::ports::TemplateSource;

/// Keeps the first successful read of the wrapped source.
///
/// Failed reads are not cached, so a later request retries the inner source.
#[derive(Debug)]
pub struct CachedTemplateSource<S> {
    inner: S,
    cached: OnceLock<String>,
}

impl<S: TemplateSource> CachedTemplateSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, cached: OnceLock::new() }
    }
}

impl<S: TemplateSource> TemplateSource for CachedTemplateSource<S> {
    fn load(&self) -> Result<String, ResolveError> {
        if let Some(template) = self.cached.get() {
            return Ok(template.clone());
        }
        let template = self.inner.load()?;
        // A concurrent first read may have won; both hold the same content.
        Ok(self.cached.get_or_init(|| template).clone())
    }

    fn describe(&self) -> String {
        format!("cached {}", self.inner.describe())
    }
}
