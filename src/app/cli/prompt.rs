//! Interactive completion of request parameters.

use dialoguer::Select;

use crate::app::AppContext;
use crate::domain::{AppError, Language, OsVariant, RawRequest, Rotation};
use crate::ports::ScreenCatalog;

/// Ask for every parameter `raw` leaves out. `None` means the user cancelled.
pub(super) fn complete_request(
    ctx: &AppContext,
    mut raw: RawRequest,
) -> Result<Option<RawRequest>, AppError> {
    let defaults = ctx.service().defaults();

    if raw.id.is_none() {
        let screens = ctx.catalog().list_all();
        let items: Vec<String> = screens
            .iter()
            .map(|screen| format!("{} ({})", screen.name.pick(defaults.language), screen.id))
            .collect();
        let Some(index) = select("Select screen", &items, 0)? else {
            return Ok(None);
        };
        raw.id = Some(screens[index].id.clone());
    }

    if raw.rot.is_none() {
        let items: Vec<String> = Rotation::ALL.iter().map(|r| format!("{}°", r)).collect();
        let default = position(&Rotation::ALL, defaults.rotation);
        let Some(index) = select("Select rotation", &items, default)? else {
            return Ok(None);
        };
        raw.rot = Some(Rotation::ALL[index].to_string());
    }

    if raw.os.is_none() {
        let items: Vec<&str> = OsVariant::ALL.iter().map(|os| os.display_name()).collect();
        let default = position(&OsVariant::ALL, defaults.os);
        let Some(index) = select("Select OS", &items, default)? else {
            return Ok(None);
        };
        raw.os = Some(OsVariant::ALL[index].as_str().to_string());
    }

    if raw.lang.is_none() {
        let items: Vec<&str> = Language::ALL.iter().map(|lang| lang.as_str()).collect();
        let default = position(&Language::ALL, defaults.language);
        let Some(index) = select("Select language", &items, default)? else {
            return Ok(None);
        };
        raw.lang = Some(Language::ALL[index].as_str().to_string());
    }

    Ok(Some(raw))
}

fn select<T: ToString>(
    prompt: &str,
    items: &[T],
    default: usize,
) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("{}: {}", prompt, err)))
}

fn position<T: PartialEq>(all: &[T], value: T) -> usize {
    all.iter().position(|item| *item == value).unwrap_or(0)
}
