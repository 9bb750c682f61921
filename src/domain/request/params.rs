//! Request parameter types.

use std::fmt;

/// Screen rotation in degrees, clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] =
        [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub fn from_degrees(degrees: u16) -> Option<Self> {
        Rotation::ALL.into_iter().find(|rotation| rotation.degrees() == degrees)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Target OS image. Extending support means extending this whitelist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OsVariant {
    #[default]
    Bookworm64,
    Bookworm32,
    Bullseye64,
    Bullseye32,
}

impl OsVariant {
    pub const ALL: [OsVariant; 4] = [
        OsVariant::Bookworm64,
        OsVariant::Bookworm32,
        OsVariant::Bullseye64,
        OsVariant::Bullseye32,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OsVariant::Bookworm64 => "bookworm64",
            OsVariant::Bookworm32 => "bookworm32",
            OsVariant::Bullseye64 => "bullseye64",
            OsVariant::Bullseye32 => "bullseye32",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        OsVariant::ALL.into_iter().find(|variant| variant.as_str() == id)
    }

    /// Human-readable image name shown in interactive menus.
    pub fn display_name(self) -> &'static str {
        match self {
            OsVariant::Bookworm64 => "Raspberry Pi OS Bookworm 64-bit",
            OsVariant::Bookworm32 => "Raspberry Pi OS Bookworm 32-bit",
            OsVariant::Bullseye64 => "Raspberry Pi OS Bullseye 64-bit",
            OsVariant::Bullseye32 => "Raspberry Pi OS Bullseye 32-bit",
        }
    }
}

impl fmt::Display for OsVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI language. `Zh` is the primary locale, `En` the secondary one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|language| language.as_str() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated request input as it arrives from a caller.
///
/// Absent fields fall back to the defaults carried by [`RequestDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    pub id: Option<String>,
    pub rot: Option<String>,
    pub os: Option<String>,
    pub lang: Option<String>,
}

impl RawRequest {
    pub fn for_screen(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }

    pub fn rotation(mut self, rot: impl Into<String>) -> Self {
        self.rot = Some(rot.into());
        self
    }

    pub fn os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// Values applied to absent request fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestDefaults {
    pub rotation: Rotation,
    pub os: OsVariant,
    pub language: Language,
}

/// Validated request, bound to a catalog screen id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pub screen_id: String,
    pub rotation: Rotation,
    pub os: OsVariant,
    pub language: Language,
}
