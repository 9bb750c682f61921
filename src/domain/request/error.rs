/// How a failed resolution surfaces at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BadRequest,
    NotFound,
}

impl Outcome {
    pub fn status_code(self) -> u16 {
        match self {
            Outcome::BadRequest => 400,
            Outcome::NotFound => 404,
        }
    }
}

/// Resolution failure. The first failing check aborts the whole call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("missing id")]
    MissingScreenId,

    #[error("unknown screen id '{0}'")]
    UnknownScreenId(String),

    #[error("rot must be one of 0,90,180,270 (got '{0}')")]
    InvalidRotation(String),

    #[error("os not supported: '{0}' (expected bookworm64, bookworm32, bullseye64 or bullseye32)")]
    UnsupportedOs(String),

    #[error("lang must be zh or en (got '{0}')")]
    InvalidLanguage(String),

    #[error("template unavailable from {source_name}: {reason}")]
    TemplateUnavailable { source_name: String, reason: String },
}

impl ResolveError {
    pub fn outcome(&self) -> Outcome {
        match self {
            ResolveError::UnknownScreenId(_) => Outcome::NotFound,
            ResolveError::MissingScreenId
            | ResolveError::InvalidRotation(_)
            | ResolveError::UnsupportedOs(_)
            | ResolveError::InvalidLanguage(_)
            | ResolveError::TemplateUnavailable { .. } => Outcome::BadRequest,
        }
    }

    pub(crate) fn template_unavailable(
        source_name: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        ResolveError::TemplateUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
