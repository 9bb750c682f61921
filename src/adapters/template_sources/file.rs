use std::path::{Path, PathBuf};

use crate::domain::ResolveError;
use crate::ports::TemplateSource;

/// Reads the script template from disk on every call.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateSource for FileTemplateSource {
    fn load(&self) -> Result<String, ResolveError> {
        tracing::debug!(path = %self.path.display(), "reading script template");
        std::fs::read_to_string(&self.path)
            .map_err(|err| ResolveError::template_unavailable(self.describe(), err))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
