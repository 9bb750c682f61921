use crate::adapters::assets::{CORE_ENGINE_SCRIPT, asset_text};
use crate::domain::ResolveError;
use crate::ports::TemplateSource;

/// The script template compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateSource;

impl EmbeddedTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplateSource {
    fn load(&self) -> Result<String, ResolveError> {
        asset_text(CORE_ENGINE_SCRIPT)
            .map(str::to_string)
            .map_err(|err| ResolveError::template_unavailable(self.describe(), err))
    }

    fn describe(&self) -> String {
        format!("embedded:{}", CORE_ENGINE_SCRIPT)
    }
}
