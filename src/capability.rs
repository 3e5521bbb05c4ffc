//! Color capability levels and the support queries derived from them.

use std::fmt;
use std::str::FromStr;

/// How many colors a terminal can render.
///
/// Levels are ordered so that every level can render everything the
/// levels below it can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColorLevel {
    /// No color escapes at all.
    #[default]
    None,
    /// 4-bit color, the 16 ANSI colors.
    Basic,
    /// 8-bit color, the 256 color palette.
    Extended,
    /// 24-bit RGB color.
    TrueColor,
}

/// Error returned when a string is not part of the override vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color level: '{0}'")]
pub struct ParseColorLevelError(pub String);

impl FromStr for ColorLevel {
    type Err = ParseColorLevelError;

    /// Parse an override value such as `256`, `4bit` or `truecolor`.
    ///
    /// Only `truecolor` is matched case-insensitively; every other spelling
    /// must be exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ColorLevel::None),
            "basic" | "4bit" => Ok(ColorLevel::Basic),
            "256" | "8bit" => Ok(ColorLevel::Extended),
            "16m" | "24bit" => Ok(ColorLevel::TrueColor),
            other if other.eq_ignore_ascii_case("truecolor") => Ok(ColorLevel::TrueColor),
            other => Err(ParseColorLevelError(other.to_string())),
        }
    }
}

impl fmt::Display for ColorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorLevel::None => "none",
            ColorLevel::Basic => "basic",
            ColorLevel::Extended => "256",
            ColorLevel::TrueColor => "truecolor",
        };
        f.write_str(name)
    }
}

/// The outcome of a detection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSupport {
    level: ColorLevel,
}

impl ColorSupport {
    #[must_use]
    pub fn new(level: ColorLevel) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn level(&self) -> ColorLevel {
        self.level
    }

    /// Whether the 16 ANSI colors can be used.
    #[must_use]
    pub fn supports_16_colors(&self) -> bool {
        self.level >= ColorLevel::Basic
    }

    /// Whether the 256 color palette can be used.
    #[must_use]
    pub fn supports_256_colors(&self) -> bool {
        self.level >= ColorLevel::Extended
    }

    /// Whether 24-bit RGB colors can be used.
    #[must_use]
    pub fn supports_truecolor(&self) -> bool {
        self.level >= ColorLevel::TrueColor
    }
}

impl From<ColorLevel> for ColorSupport {
    fn from(level: ColorLevel) -> Self {
        Self::new(level)
    }
}
