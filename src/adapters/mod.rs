pub mod assets;
pub mod catalogs;
pub mod summary_renderer;
pub mod template_sources;

pub use catalogs::{CatalogFormat, StaticScreenCatalog};
pub use summary_renderer::MinijinjaSummaryRenderer;
pub use template_sources::{
    CachedTemplateSource, EmbeddedTemplateSource, FileTemplateSource, HttpTemplateSource,
};
