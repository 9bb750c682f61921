pub mod screen_catalog;
mod screen_schema;

pub use self::screen_catalog::{CatalogFormat, StaticScreenCatalog};
