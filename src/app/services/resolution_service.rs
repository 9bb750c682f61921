//! Resolution service: raw request in, generated script and summary out.

use crate::domain::request::{
    resolve_screen, validate_language, validate_os_variant, validate_rotation,
};
use crate::domain::{
    GenerationResult, RawRequest, RequestDefaults, RequestParameters, ResolveError,
    ScreenDefinition, Summary, inject, substitutions,
};
use crate::ports::{ScreenCatalog, TemplateSource};

/// Binds requests to screens and renders the script template.
///
/// Holds only read-only state, so one instance can serve concurrent callers.
#[derive(Debug)]
pub struct ResolutionService<C, T> {
    catalog: C,
    template: T,
    defaults: RequestDefaults,
}

impl<C: ScreenCatalog, T: TemplateSource> ResolutionService<C, T> {
    pub fn new(catalog: C, template: T, defaults: RequestDefaults) -> Self {
        Self { catalog, template, defaults }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn template(&self) -> &T {
        &self.template
    }

    pub fn defaults(&self) -> RequestDefaults {
        self.defaults
    }

    /// Validate `raw` and bind it to its screen without reading the template.
    ///
    /// Inputs are trimmed. Absent rotation, OS and language take the configured defaults;
    /// present but empty values are validated as given. The first failing check wins, in the
    /// order screen id, rotation, OS, language.
    pub fn parameters(
        &self,
        raw: &RawRequest,
    ) -> Result<(&ScreenDefinition, RequestParameters), ResolveError> {
        let screen = resolve_screen(&self.catalog, trimmed(&raw.id))?;
        let rotation = match trimmed(&raw.rot) {
            Some(rot) => validate_rotation(rot)?,
            None => self.defaults.rotation,
        };
        let os = match trimmed(&raw.os) {
            Some(os) => validate_os_variant(os)?,
            None => self.defaults.os,
        };
        let language = match trimmed(&raw.lang) {
            Some(lang) => validate_language(lang)?,
            None => self.defaults.language,
        };
        Ok((screen, RequestParameters { screen_id: screen.id.clone(), rotation, os, language }))
    }

    /// Validate `raw`, bind it to its screen and produce the script.
    ///
    /// A template read failure surfaces only after every parameter check has passed.
    pub fn resolve(&self, raw: &RawRequest) -> Result<GenerationResult, ResolveError> {
        let _span = tracing::debug_span!(
            "resolve",
            screen = trimmed(&raw.id).unwrap_or_default(),
            rot = trimmed(&raw.rot).unwrap_or_default(),
            os = trimmed(&raw.os).unwrap_or_default(),
            lang = trimmed(&raw.lang).unwrap_or_default()
        )
        .entered();

        let (screen, params) = self.parameters(raw)?;
        let RequestParameters { rotation, os, language, .. } = params;
        let values = substitutions(screen, &params);

        let template = self.template.load().inspect_err(|err| {
            let source = self.template.describe();
            tracing::warn!(source = %source, error = %err, "template load failed");
        })?;
        let script = inject(&template, &values);

        tracing::info!(
            screen = %screen.id,
            rotation = rotation.degrees(),
            os = os.as_str(),
            lang = language.as_str(),
            scenario = screen.scenario.as_str(),
            "resolved display setup"
        );

        Ok(GenerationResult {
            name: screen.name.pick(language).to_string(),
            os,
            rotation,
            language,
            scenario: screen.scenario.as_str(),
            summary: Summary::new(screen, &params),
            script,
            screen: screen.clone(),
        })
    }
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim)
}
