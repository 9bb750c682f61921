//! `doctor`: catalog and template consistency checks.

use std::collections::BTreeSet;

use crate::app::AppContext;
use crate::domain::{AppError, Diagnostics, PLACEHOLDER_KEYS, placeholders};
use crate::ports::{ScreenCatalog, TemplateSource};

#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Collect findings without printing them.
pub fn diagnose<C, T>(ctx: &AppContext<C, T>) -> Diagnostics
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    let mut diagnostics = Diagnostics::default();
    diagnostics.extend(ctx.catalog_diagnostics());

    if ctx.catalog().list_all().is_empty() {
        diagnostics.push_error("catalog", "catalog contains no screens");
    }

    let template = ctx.service().template();
    match template.load() {
        Ok(body) => placeholder_checks(&template.describe(), &body, &mut diagnostics),
        Err(err) => diagnostics.push_error(template.describe(), err.to_string()),
    }

    diagnostics
}

fn placeholder_checks(subject: &str, template: &str, diagnostics: &mut Diagnostics) {
    let used = placeholders(template);
    let known: BTreeSet<&str> = PLACEHOLDER_KEYS.into_iter().collect();

    for name in &used {
        if !known.contains(name.as_str()) {
            diagnostics.push_error(subject, format!("unknown placeholder __{}__", name));
        }
    }
    for key in PLACEHOLDER_KEYS {
        if !used.contains(key) {
            diagnostics.push_warning(subject, format!("placeholder __{}__ is never used", key));
        }
    }
}

pub fn execute<C, T>(
    ctx: &AppContext<C, T>,
    options: DoctorOptions,
) -> Result<DoctorOutcome, AppError>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    let diagnostics = diagnose(ctx);
    emit(&diagnostics);

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(DoctorOutcome { errors, warnings, exit_code })
}

fn emit(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.errors() {
        eprintln!("[ERROR] {}: {}", diagnostic.subject, diagnostic.message);
    }
    for diagnostic in diagnostics.warnings() {
        eprintln!("[WARN] {}: {}", diagnostic.subject, diagnostic.message);
    }
}
