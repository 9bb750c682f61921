//! Script template source port definition.

use crate::domain::ResolveError;

/// Supplies the script template text.
///
/// Failures surface as [`ResolveError::TemplateUnavailable`] for the request that triggered the
/// read and must not affect later reads.
pub trait TemplateSource {
    /// Read the template body.
    fn load(&self) -> Result<String, ResolveError>;

    /// Short description of where the template comes from, for logs and diagnostics.
    fn describe(&self) -> String;
}

impl<T: TemplateSource + ?Sized> TemplateSource for Box<T> {
    fn load(&self) -> Result<String, ResolveError> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
