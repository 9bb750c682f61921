use crate::adapters::{
    CachedTemplateSource, EmbeddedTemplateSource, FileTemplateSource, HttpTemplateSource,
    MinijinjaSummaryRenderer, StaticScreenCatalog,
};
use crate::app::services::ResolutionService;
use crate::domain::{AppConfig, AppError, DeliveryConfig, Diagnostics, SourcesConfig};
use crate::ports::{ScreenCatalog, TemplateSource};

/// Template source chosen at startup from `[sources]`.
pub type DynTemplateSource = Box<dyn TemplateSource + Send + Sync>;

/// Application context holding dependencies for command execution.
pub struct AppContext<C = StaticScreenCatalog, T = DynTemplateSource> {
    service: ResolutionService<C, T>,
    renderer: MinijinjaSummaryRenderer,
    delivery: DeliveryConfig,
    catalog_diagnostics: Diagnostics,
}

impl AppContext {
    /// Build the context from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let defaults = config.defaults.request_defaults()?;
        let catalog = match &config.sources.catalog {
            Some(path) => StaticScreenCatalog::from_path(path)?,
            None => StaticScreenCatalog::embedded()?,
        };
        let template = template_source(&config.sources)?;
        tracing::debug!(template = %template.describe(), "selected template source");

        let catalog_diagnostics = catalog.diagnostics().clone();
        let service = ResolutionService::new(catalog, template, defaults);
        Ok(Self::with_service(service, config.delivery.clone(), catalog_diagnostics))
    }
}

impl<C: ScreenCatalog, T: TemplateSource> AppContext<C, T> {
    /// Create a context around an existing service.
    pub fn with_service(
        service: ResolutionService<C, T>,
        delivery: DeliveryConfig,
        catalog_diagnostics: Diagnostics,
    ) -> Self {
        Self { service, renderer: MinijinjaSummaryRenderer::new(), delivery, catalog_diagnostics }
    }

    pub fn service(&self) -> &ResolutionService<C, T> {
        &self.service
    }

    pub fn catalog(&self) -> &C {
        self.service.catalog()
    }

    pub fn renderer(&self) -> &MinijinjaSummaryRenderer {
        &self.renderer
    }

    pub fn delivery(&self) -> &DeliveryConfig {
        &self.delivery
    }

    /// Findings recorded while the catalog was loaded.
    pub fn catalog_diagnostics(&self) -> &Diagnostics {
        &self.catalog_diagnostics
    }
}

fn template_source(sources: &SourcesConfig) -> Result<DynTemplateSource, AppError> {
    if let Some(path) = &sources.template {
        return Ok(maybe_cached(FileTemplateSource::new(path), sources.cache_template));
    }
    if let Some(url) = &sources.template_url {
        let source = HttpTemplateSource::new(url.clone(), sources.fetch_timeout_secs)?;
        return Ok(maybe_cached(source, sources.cache_template));
    }
    Ok(Box::new(EmbeddedTemplateSource::new()))
}

fn maybe_cached<S>(source: S, cache: bool) -> DynTemplateSource
where
    S: TemplateSource + Send + Sync + 'static,
{
    if cache { Box::new(CachedTemplateSource::new(source)) } else { Box::new(source) }
}
