//! Screen catalog loaded once from the embedded document or a JSON/YAML file.

use std::collections::HashMap;
use std::path::Path;

use crate::adapters::assets::{SCREEN_CATALOG, asset_text};
use crate::domain::{AppError, Diagnostics, ScreenDefinition};
use crate::ports::ScreenCatalog;

use super::screen_schema::{ScreenEntry, into_screens};

/// Catalog document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(CatalogFormat::Json),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            _ => Err(AppError::CatalogLoad {
                source_name: path.display().to_string(),
                reason: "expected a .json, .yaml, or .yml file".to_string(),
            }),
        }
    }
}

/// Immutable in-memory catalog with an id index.
#[derive(Debug, Clone)]
pub struct StaticScreenCatalog {
    screens: Vec<ScreenDefinition>,
    index: HashMap<String, usize>,
    diagnostics: Diagnostics,
    source_name: String,
}

impl StaticScreenCatalog {
    /// Load the catalog bundled with the binary.
    pub fn embedded() -> Result<Self, AppError> {
        let content = asset_text(SCREEN_CATALOG)?;
        Self::from_document(content, CatalogFormat::Json, "embedded catalog")
    }

    /// Load a catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let format = CatalogFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|err| AppError::CatalogLoad {
            source_name: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::from_document(&content, format, &path.display().to_string())
    }

    /// Parse a catalog document.
    pub fn from_document(
        content: &str,
        format: CatalogFormat,
        source_name: &str,
    ) -> Result<Self, AppError> {
        let entries: Vec<ScreenEntry> = match format {
            CatalogFormat::Json => serde_json::from_str(content).map_err(|err| err.to_string()),
            CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|err| err.to_string()),
        }
        .map_err(|reason| AppError::CatalogLoad { source_name: source_name.to_string(), reason })?;

        let mut diagnostics = Diagnostics::default();
        let screens = into_screens(entries, &mut diagnostics)?;
        let index = screens
            .iter()
            .enumerate()
            .map(|(position, screen)| (screen.id.clone(), position))
            .collect();

        tracing::info!(source = source_name, screens = screens.len(), "loaded screen catalog");

        Ok(Self { screens, index, diagnostics, source_name: source_name.to_string() })
    }

    /// Findings collected while loading.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

impl ScreenCatalog for StaticScreenCatalog {
    fn find_by_id(&self, id: &str) -> Option<&ScreenDefinition> {
        self.index.get(id).map(|position| &self.screens[*position])
    }

    fn list_all(&self) -> Vec<&ScreenDefinition> {
        self.screens.iter().collect()
    }
}
