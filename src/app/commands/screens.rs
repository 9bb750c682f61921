//! `screens`: catalog listing.

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::Language;
use crate::ports::{ScreenCatalog, TemplateSource};

/// One catalog entry as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenListing {
    pub id: String,
    pub name: String,
    pub resolution: String,
    pub scenario: &'static str,
    pub touch: String,
    pub tags: Vec<String>,
}

/// List every screen in catalog order with text in `language`.
pub fn execute<C, T>(ctx: &AppContext<C, T>, language: Language) -> Vec<ScreenListing>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    ctx.catalog()
        .list_all()
        .into_iter()
        .map(|screen| ScreenListing {
            id: screen.id.clone(),
            name: screen.name.pick(language).to_string(),
            resolution: format!("{}×{}", screen.resolution.width, screen.resolution.height),
            scenario: screen.scenario.as_str(),
            touch: screen.touch.kind.clone(),
            tags: screen.tags.clone(),
        })
        .collect()
}

/// Aligned plain-text table.
pub fn format_table(listings: &[ScreenListing]) -> String {
    let id_width = listings.iter().map(|l| l.id.chars().count()).max().unwrap_or(0).max(2);
    let res_width =
        listings.iter().map(|l| l.resolution.chars().count()).max().unwrap_or(0).max(10);
    let scenario_width = "lcd_show_driver".len();

    let mut out = format!(
        "{:<id_width$}  {:<res_width$}  {:<scenario_width$}  {:<8}  NAME\n",
        "ID", "RESOLUTION", "SCENARIO", "TOUCH"
    );
    for listing in listings {
        out.push_str(&format!(
            "{:<id_width$}  {:<res_width$}  {:<scenario_width$}  {:<8}  {}\n",
            listing.id, listing.resolution, listing.scenario, listing.touch, listing.name
        ));
    }
    out
}
