//! `generate`: summary and script, or the describe JSON body.

use crate::app::AppContext;
use crate::app::delivery::DescribeBody;
use crate::domain::{AppError, RawRequest};
use crate::ports::{ScreenCatalog, SummaryRenderer, TemplateSource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerateFormat {
    #[default]
    Text,
    Json,
}

/// Resolve `raw` and format the result for the terminal.
pub fn execute<C, T>(
    ctx: &AppContext<C, T>,
    raw: &RawRequest,
    format: GenerateFormat,
) -> Result<String, AppError>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    let result = ctx.service().resolve(raw)?;

    match format {
        GenerateFormat::Json => Ok(serde_json::to_string_pretty(&DescribeBody::from(&result))?),
        GenerateFormat::Text => {
            let summary = ctx.renderer().render(&result)?;
            Ok(format!("{}\n\n{}", summary.trim_end(), result.script))
        }
    }
}
