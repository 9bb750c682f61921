use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::ResolveError;
use crate::ports::TemplateSource;

/// Template source returning fixed text and counting reads.
#[derive(Debug, Default)]
pub struct StaticTemplateSource {
    template: String,
    reads: AtomicUsize,
}

impl StaticTemplateSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into(), reads: AtomicUsize::new(0) }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TemplateSource for StaticTemplateSource {
    fn load(&self) -> Result<String, ResolveError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.template.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Template source that always fails.
#[derive(Debug, Default)]
pub struct FailingTemplateSource;

impl TemplateSource for FailingTemplateSource {
    fn load(&self) -> Result<String, ResolveError> {
        Err(ResolveError::template_unavailable(self.describe(), "unreachable"))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}
