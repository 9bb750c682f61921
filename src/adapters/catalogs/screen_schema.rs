//! Catalog document schema and its conversion into domain screens.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::{
    AppError, Diagnostics, HdmiTiming, LcdShowDriver, LocalizedText, Resolution, Scenario,
    ScreenDefinition, Touch,
};

/// One entry of the catalog document, as written.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScreenEntry {
    pub id: String,
    pub name: LocalizedEntry,
    pub resolution: ResolutionEntry,
    /// Any value is accepted here; unknown ones are coerced during conversion.
    #[serde(default)]
    pub scenario: Option<serde_json::Value>,
    #[serde(default)]
    pub hdmi: Option<HdmiEntry>,
    pub touch: TouchEntry,
    #[serde(default)]
    pub lcd_show: Option<LcdShowEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalizedEntry {
    pub zh: String,
    pub en: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResolutionEntry {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HdmiEntry {
    #[serde(default)]
    pub hdmi_group: i64,
    #[serde(default)]
    pub hdmi_mode: i64,
    #[serde(default)]
    pub hdmi_drive: i64,
    #[serde(default)]
    pub hdmi_cvt: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TouchEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: LocalizedEntry,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LcdShowEntry {
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub installer: String,
    #[serde(default)]
    pub supports_rotation_arg: bool,
}

impl From<LocalizedEntry> for LocalizedText {
    fn from(entry: LocalizedEntry) -> Self {
        LocalizedText { zh: entry.zh, en: entry.en }
    }
}

/// Convert parsed entries into screens, enforcing catalog invariants.
///
/// Duplicate or empty ids and zero dimensions fail the load. Softer problems, such as an
/// unrecognized scenario coerced to HDMI timing, are collected as warnings.
pub(crate) fn into_screens(
    entries: Vec<ScreenEntry>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<ScreenDefinition>, AppError> {
    let mut seen = HashSet::new();
    let mut screens = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.id.is_empty() {
            return Err(AppError::InvalidScreen {
                screen: String::new(),
                reason: "id must not be empty".to_string(),
            });
        }
        if !seen.insert(entry.id.clone()) {
            return Err(AppError::InvalidScreen {
                screen: entry.id,
                reason: "duplicate id".to_string(),
            });
        }
        if entry.resolution.width == 0 || entry.resolution.height == 0 {
            return Err(AppError::InvalidScreen {
                screen: entry.id,
                reason: "resolution width and height must be positive".to_string(),
            });
        }

        screens.push(into_screen(entry, diagnostics));
    }

    Ok(screens)
}

fn into_screen(entry: ScreenEntry, diagnostics: &mut Diagnostics) -> ScreenDefinition {
    let resolution = Resolution { width: entry.resolution.width, height: entry.resolution.height };
    let scenario = scenario_for(
        &entry.id,
        entry.scenario.as_ref(),
        entry.hdmi,
        entry.lcd_show,
        diagnostics,
    );

    if let Some((width, height)) = scenario.hdmi().and_then(HdmiTiming::cvt_dimensions) {
        if (width, height) != (resolution.width, resolution.height) {
            diagnostics.push_warning(
                &entry.id,
                format!(
                    "hdmi_cvt declares {width}x{height} but resolution is {}x{}",
                    resolution.width, resolution.height
                ),
            );
        }
    }

    ScreenDefinition {
        id: entry.id,
        name: entry.name.into(),
        resolution,
        scenario,
        touch: Touch { kind: entry.touch.kind, notes: entry.touch.notes.into() },
        tags: entry.tags,
    }
}

fn scenario_for(
    id: &str,
    raw: Option<&serde_json::Value>,
    hdmi: Option<HdmiEntry>,
    lcd_show: Option<LcdShowEntry>,
    diagnostics: &mut Diagnostics,
) -> Scenario {
    let Some(value) = raw else {
        return Scenario::HdmiCvt(hdmi_timing(id, hdmi, diagnostics));
    };
    match value.as_str() {
        Some(Scenario::LCD_SHOW_DRIVER) => {
            Scenario::LcdShowDriver(lcd_show_driver(id, lcd_show, diagnostics))
        }
        Some(Scenario::HDMI_CVT) => Scenario::HdmiCvt(hdmi_timing(id, hdmi, diagnostics)),
        name => {
            let unknown = name.map_or_else(|| value.to_string(), str::to_string);
            tracing::warn!(screen = id, scenario = %unknown, "unrecognized scenario");
            diagnostics
                .push_warning(id, format!("unrecognized scenario '{unknown}' treated as hdmi_cvt"));
            Scenario::HdmiCvt(hdmi_timing(id, hdmi, diagnostics))
        }
    }
}

fn hdmi_timing(id: &str, entry: Option<HdmiEntry>, diagnostics: &mut Diagnostics) -> HdmiTiming {
    let Some(entry) = entry else {
        diagnostics.push_warning(id, "hdmi_cvt screen has no hdmi block");
        return HdmiTiming::default();
    };
    HdmiTiming {
        hdmi_group: entry.hdmi_group,
        hdmi_mode: entry.hdmi_mode,
        hdmi_drive: entry.hdmi_drive,
        hdmi_cvt: entry.hdmi_cvt,
    }
}

fn lcd_show_driver(
    id: &str,
    entry: Option<LcdShowEntry>,
    diagnostics: &mut Diagnostics,
) -> LcdShowDriver {
    let Some(entry) = entry else {
        diagnostics.push_warning(id, "lcd_show_driver screen has no lcdShow block");
        return LcdShowDriver::default();
    };
    LcdShowDriver {
        repo: entry.repo,
        installer: entry.installer,
        supports_rotation_arg: entry.supports_rotation_arg,
    }
}
