//! Screen catalog port definition.

use crate::domain::ScreenDefinition;

/// Read-only access to the loaded screen catalog.
pub trait ScreenCatalog {
    /// Get a screen by exact, case-sensitive id.
    fn find_by_id(&self, id: &str) -> Option<&ScreenDefinition>;

    /// List all screens in catalog document order.
    fn list_all(&self) -> Vec<&ScreenDefinition>;
}

impl<C: ScreenCatalog + ?Sized> ScreenCatalog for Box<C> {
    fn find_by_id(&self, id: &str) -> Option<&ScreenDefinition> {
        (**self).find_by_id(id)
    }

    fn list_all(&self) -> Vec<&ScreenDefinition> {
        (**self).list_all()
    }
}
