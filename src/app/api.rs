//! Library entry points shared by the CLI and embedding callers.

use std::path::Path;

use url::Url;

use crate::app::AppContext;
use crate::app::commands::{command, doctor, screens};
use crate::app::config::load_config;
use crate::app::delivery::{self, DeliveryResponse};
use crate::domain::{AppError, GenerationResult, Language, RawRequest, ResolveError};
use crate::ports::{ScreenCatalog, TemplateSource};

pub use crate::app::commands::doctor::{DoctorOptions, DoctorOutcome};
pub use crate::app::commands::screens::ScreenListing;

/// Load configuration and build the application context.
pub fn load_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = load_config(config_path)?;
    AppContext::from_config(&config)
}

/// Validate a request and produce its script and summary.
pub fn resolve<C, T>(
    ctx: &AppContext<C, T>,
    raw: &RawRequest,
) -> Result<GenerationResult, ResolveError>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    ctx.service().resolve(raw)
}

/// JSON description endpoint.
pub fn describe<C, T>(ctx: &AppContext<C, T>, raw: &RawRequest) -> DeliveryResponse
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    delivery::describe(ctx.service(), raw)
}

/// Raw script endpoint.
pub fn install<C, T>(ctx: &AppContext<C, T>, raw: &RawRequest) -> DeliveryResponse
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    delivery::install(ctx.service(), raw)
}

pub fn list_screens<C, T>(ctx: &AppContext<C, T>, language: Language) -> Vec<ScreenListing>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    screens::execute(ctx, language)
}

/// One-line `curl … | sudo bash` command for a validated request.
pub fn install_command<C, T>(
    ctx: &AppContext<C, T>,
    raw: &RawRequest,
    base_url: Option<&Url>,
) -> Result<String, AppError>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    command::execute(ctx, raw, base_url)
}

/// Check catalog and template consistency, printing findings to stderr.
pub fn doctor<C, T>(
    ctx: &AppContext<C, T>,
    options: DoctorOptions,
) -> Result<DoctorOutcome, AppError>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    doctor::execute(ctx, options)
}
