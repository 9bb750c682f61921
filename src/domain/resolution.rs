//! Binding a validated request to a screen: substitution values and the summary.

use serde::Serialize;

use super::injection::Substitutions;
use super::request::{Language, OsVariant, RequestParameters, Rotation};
use super::screen::{HdmiTiming, LcdShowDriver, Resolution, Scenario, ScreenDefinition};

/// Every placeholder name the resolution step supplies a value for.
pub const PLACEHOLDER_KEYS: [&str; 14] = [
    "SCREEN_ID",
    "SCREEN_NAME",
    "OS_VARIANT",
    "ROT_DEG",
    "LANG",
    "SCENARIO",
    "HDMI_GROUP",
    "HDMI_MODE",
    "HDMI_DRIVE",
    "HDMI_CVT",
    "TOUCH_TYPE",
    "LCDSHOW_REPO",
    "LCDSHOW_INSTALLER",
    "LCDSHOW_ROTARG",
];

/// Build the substitution values for a screen and validated request.
///
/// The scenario match is total: each branch fills the other branch's fields with zero or
/// empty values, so every key in [`PLACEHOLDER_KEYS`] is always present.
pub fn substitutions(screen: &ScreenDefinition, params: &RequestParameters) -> Substitutions {
    let (hdmi, lcd_show) = match &screen.scenario {
        Scenario::HdmiCvt(timing) => (timing.clone(), LcdShowDriver::default()),
        Scenario::LcdShowDriver(driver) => (HdmiTiming::default(), driver.clone()),
    };

    let pairs = [
        ("SCREEN_ID", screen.id.clone()),
        ("SCREEN_NAME", screen.name.pick(params.language).to_string()),
        ("OS_VARIANT", params.os.as_str().to_string()),
        ("ROT_DEG", params.rotation.to_string()),
        ("LANG", params.language.as_str().to_string()),
        ("SCENARIO", screen.scenario.as_str().to_string()),
        ("HDMI_GROUP", hdmi.hdmi_group.to_string()),
        ("HDMI_MODE", hdmi.hdmi_mode.to_string()),
        ("HDMI_DRIVE", hdmi.hdmi_drive.to_string()),
        ("HDMI_CVT", hdmi.hdmi_cvt),
        ("TOUCH_TYPE", screen.touch.kind.clone()),
        ("LCDSHOW_REPO", lcd_show.repo),
        ("LCDSHOW_INSTALLER", lcd_show.installer),
        ("LCDSHOW_ROTARG", if lcd_show.supports_rotation_arg { "1" } else { "0" }.to_string()),
    ];

    pairs.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
}

/// Touch details echoed in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TouchSummary {
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
}

/// Display-oriented echo of what the script will configure.
///
/// Exactly one of `hdmi` and `lcd_show` is present, matching the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub resolution: Resolution,
    pub rotation: u16,
    pub touch: TouchSummary,
    pub hdmi: Option<HdmiTiming>,
    pub lcd_show: Option<LcdShowDriver>,
}

impl Summary {
    pub fn new(screen: &ScreenDefinition, params: &RequestParameters) -> Self {
        Self {
            resolution: screen.resolution,
            rotation: params.rotation.degrees(),
            touch: TouchSummary {
                kind: screen.touch.kind.clone(),
                notes: screen.touch.notes.pick(params.language).to_string(),
            },
            hdmi: screen.scenario.hdmi().cloned(),
            lcd_show: screen.scenario.lcd_show().cloned(),
        }
    }
}

/// A fully resolved request: the screen, the effective choices, and the generated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub screen: ScreenDefinition,
    /// Screen name in the chosen language.
    pub name: String,
    pub os: OsVariant,
    pub rotation: Rotation,
    pub language: Language,
    pub scenario: &'static str,
    pub summary: Summary,
    pub script: String,
}
