//! `install`: the bare script, ready to pipe into bash.

use crate::app::AppContext;
use crate::domain::{AppError, RawRequest};
use crate::ports::{ScreenCatalog, TemplateSource};

pub fn execute<C, T>(ctx: &AppContext<C, T>, raw: &RawRequest) -> Result<String, AppError>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    Ok(ctx.service().resolve(raw)?.script)
}
