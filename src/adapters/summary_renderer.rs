//! Human-readable summary rendered with Minijinja.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::adapters::assets::{SUMMARY_TEMPLATE, asset_text};
use crate::domain::{AppError, GenerationResult, Language, Summary};
use crate::ports::SummaryRenderer;

/// Summary renderer using Minijinja and the embedded summary template.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaSummaryRenderer;

impl MinijinjaSummaryRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Serialize)]
struct SummaryLabels {
    screen: &'static str,
    os: &'static str,
    resolution: &'static str,
    rotation: &'static str,
    touch: &'static str,
    lcd_show: &'static str,
    lcd_show_repo: &'static str,
}

impl SummaryLabels {
    fn for_language(language: Language) -> Self {
        match language {
            Language::Zh => Self {
                screen: "屏幕",
                os: "系统",
                resolution: "分辨率",
                rotation: "旋转",
                touch: "触摸",
                lcd_show: "驱动安装器",
                lcd_show_repo: "驱动仓库",
            },
            Language::En => Self {
                screen: "Screen",
                os: "OS",
                resolution: "Resolution",
                rotation: "Rotation",
                touch: "Touch",
                lcd_show: "Driver installer",
                lcd_show_repo: "Driver repository",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryContext<'a> {
    labels: SummaryLabels,
    id: &'a str,
    name: &'a str,
    os: &'static str,
    summary: &'a Summary,
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

impl SummaryRenderer for MinijinjaSummaryRenderer {
    fn render(&self, result: &GenerationResult) -> Result<String, AppError> {
        let template = asset_text(SUMMARY_TEMPLATE)?;
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        let context = SummaryContext {
            labels: SummaryLabels::for_language(result.language),
            id: &result.screen.id,
            name: &result.name,
            os: result.os.display_name(),
            summary: &result.summary,
        };

        env.render_str(template, &context)
            .map_err(|err| AppError::Render(format!("{}: {}", SUMMARY_TEMPLATE, err)))
    }
}
