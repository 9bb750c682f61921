use crate::domain::{AppError, GenerationResult};

/// Renders the human-readable parameter summary.
///
/// Keeps the template engine out of the command layer.
pub trait SummaryRenderer {
    fn render(&self, result: &GenerationResult) -> Result<String, AppError>;
}
