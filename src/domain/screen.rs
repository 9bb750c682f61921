//! Screen catalog domain model.

use serde::Serialize;

use super::request::Language;

/// Text carried in both supported UI languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub zh: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self { zh: zh.into(), en: en.into() }
    }

    /// Pick the text for the given language.
    pub fn pick(&self, language: Language) -> &str {
        match language {
            Language::Zh => &self.zh,
            Language::En => &self.en,
        }
    }
}

/// Native panel resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Custom HDMI timing written into the boot configuration.
///
/// Field names follow the `config.txt` keys they end up in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HdmiTiming {
    pub hdmi_group: i64,
    pub hdmi_mode: i64,
    pub hdmi_drive: i64,
    pub hdmi_cvt: String,
}

impl HdmiTiming {
    /// Width and height declared by the leading fields of `hdmi_cvt`, if parseable.
    pub fn cvt_dimensions(&self) -> Option<(u32, u32)> {
        let mut fields = self.hdmi_cvt.split_whitespace();
        let width = fields.next()?.parse().ok()?;
        let height = fields.next()?.parse().ok()?;
        Some((width, height))
    }
}

/// Third-party LCD-show driver package installed by clone-and-run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LcdShowDriver {
    pub repo: String,
    pub installer: String,
    pub supports_rotation_arg: bool,
}

/// Configuration strategy for a screen, carrying the payload that strategy needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    HdmiCvt(HdmiTiming),
    LcdShowDriver(LcdShowDriver),
}

impl Scenario {
    pub const HDMI_CVT: &'static str = "hdmi_cvt";
    pub const LCD_SHOW_DRIVER: &'static str = "lcd_show_driver";

    /// Wire identifier used by the catalog and the generated script.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::HdmiCvt(_) => Self::HDMI_CVT,
            Scenario::LcdShowDriver(_) => Self::LCD_SHOW_DRIVER,
        }
    }

    pub fn hdmi(&self) -> Option<&HdmiTiming> {
        match self {
            Scenario::HdmiCvt(timing) => Some(timing),
            Scenario::LcdShowDriver(_) => None,
        }
    }

    pub fn lcd_show(&self) -> Option<&LcdShowDriver> {
        match self {
            Scenario::HdmiCvt(_) => None,
            Scenario::LcdShowDriver(driver) => Some(driver),
        }
    }
}

/// Touch controller description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Touch {
    /// Short identifier such as `usb` or `xpt2046`.
    pub kind: String,
    pub notes: LocalizedText,
}

/// A physical display model. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenDefinition {
    pub id: String,
    pub name: LocalizedText,
    pub resolution: Resolution,
    pub scenario: Scenario,
    pub touch: Touch,
    pub tags: Vec<String>,
}
