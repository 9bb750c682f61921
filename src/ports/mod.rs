mod screen_catalog;
mod summary_renderer;
mod template_source;

pub use screen_catalog::ScreenCatalog;
pub use summary_renderer::SummaryRenderer;
pub use template_source::TemplateSource;
