//! Assets compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

pub const SCREEN_CATALOG: &str = "catalog/screens.json";
pub const CORE_ENGINE_SCRIPT: &str = "scripts/core_engine.sh";
pub const SUMMARY_TEMPLATE: &str = "templates/summary.txt.j2";

/// Read an embedded text asset by its path relative to `src/assets`.
pub fn asset_text(path: &str) -> Result<&'static str, AppError> {
    let file = ASSETS_DIR
        .get_file(path)
        .ok_or_else(|| AppError::config_error(format!("Embedded asset '{}' is missing", path)))?;
    file.contents_utf8().ok_or_else(|| {
        AppError::config_error(format!("Embedded asset '{}' is not valid UTF-8", path))
    })
}
