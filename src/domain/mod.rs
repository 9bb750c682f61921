pub mod configuration;
pub mod diagnostics;
pub mod error;
pub mod injection;
pub mod request;
pub mod resolution;
pub mod screen;

pub use configuration::{AppConfig, DefaultsConfig, DeliveryConfig, SourcesConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::AppError;
pub use injection::{Substitutions, inject, placeholders};
pub use request::{
    Language, OsVariant, Outcome, RawRequest, RequestDefaults, RequestParameters, ResolveError,
    Rotation,
};
pub use resolution::{GenerationResult, PLACEHOLDER_KEYS, Summary, TouchSummary, substitutions};
pub use screen::{
    HdmiTiming, LcdShowDriver, LocalizedText, Resolution, Scenario, ScreenDefinition, Touch,
};
