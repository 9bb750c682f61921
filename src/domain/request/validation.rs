//! Per-axis request validation.
//!
//! Each check looks only at its own input, so the order they run in never changes which
//! failure a given malformed value produces.

use super::error::ResolveError;
use super::params::{Language, OsVariant, Rotation};
use crate::domain::ScreenDefinition;
use crate::ports::ScreenCatalog;

/// Accept only the canonical spellings `0`, `90`, `180` and `270`.
pub fn validate_rotation(raw: &str) -> Result<Rotation, ResolveError> {
    Rotation::ALL
        .into_iter()
        .find(|rotation| rotation.to_string() == raw)
        .ok_or_else(|| ResolveError::InvalidRotation(raw.to_string()))
}

pub fn validate_os_variant(raw: &str) -> Result<OsVariant, ResolveError> {
    OsVariant::from_id(raw).ok_or_else(|| ResolveError::UnsupportedOs(raw.to_string()))
}

pub fn validate_language(raw: &str) -> Result<Language, ResolveError> {
    Language::from_code(raw).ok_or_else(|| ResolveError::InvalidLanguage(raw.to_string()))
}

/// Look up a screen by exact, case-sensitive id.
pub fn resolve_screen<'a, C>(
    catalog: &'a C,
    id: Option<&str>,
) -> Result<&'a ScreenDefinition, ResolveError>
where
    C: ScreenCatalog + ?Sized,
{
    let id = id.unwrap_or_default();
    if id.is_empty() {
        return Err(ResolveError::MissingScreenId);
    }
    catalog.find_by_id(id).ok_or_else(|| ResolveError::UnknownScreenId(id.to_string()))
}
