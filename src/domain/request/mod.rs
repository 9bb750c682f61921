//! Request parameters, their validation, and resolution failures.

mod error;
mod params;
mod validation;

pub use error::{Outcome, ResolveError};
pub use params::{Language, OsVariant, RawRequest, RequestDefaults, RequestParameters, Rotation};
pub use validation::{resolve_screen, validate_language, validate_os_variant, validate_rotation};
