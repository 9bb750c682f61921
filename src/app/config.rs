//! Configuration file discovery and loading.

use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "RPIDSM_CONFIG";

/// File picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "rpidsm.toml";

/// Load configuration from `--config`, `RPIDSM_CONFIG`, `./rpidsm.toml`, or built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let env_path = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from);
    let cwd = std::env::current_dir()?;

    match locate_config(explicit, env_path.as_deref(), &cwd)? {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Pick the configuration file to read.
///
/// Explicit and environment paths must exist; the working-directory file is optional.
pub fn locate_config(
    explicit: Option<&Path>,
    env_path: Option<&Path>,
    cwd: &Path,
) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = explicit.or(env_path) {
        if !path.is_file() {
            return Err(AppError::ConfigMissing(path.display().to_string()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = cwd.join(DEFAULT_CONFIG_FILE);
    Ok(local.is_file().then_some(local))
}

/// Read, parse and validate one configuration file.
///
/// Relative source paths are taken relative to the file's directory.
pub fn load_config_file(path: &Path) -> Result<AppConfig, AppError> {
    let content = std::fs::read_to_string(path)?;
    let mut config: AppConfig = toml::from_str(&content)?;
    config.validate()?;

    let base = path.parent().unwrap_or(Path::new("."));
    if let Some(catalog) = config.sources.catalog.take() {
        config.sources.catalog = Some(anchor(base, catalog));
    }
    if let Some(template) = config.sources.template.take() {
        config.sources.template = Some(anchor(base, template));
    }

    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn anchor(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() { path } else { base.join(path) }
}
