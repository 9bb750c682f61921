//! Script template sources.

mod cached;
mod embedded;
mod file;
mod http;

pub use self::cached::CachedTemplateSource;
pub use self::embedded::EmbeddedTemplateSource;
pub use self::file::FileTemplateSource;
pub use self::http::HttpTemplateSource;
