//! Verdict-to-color mapping
//!
//! The palette is a presentation choice only. Grading never looks at it.

use crate::core::LetterVerdict;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Absent letters are gray in every palette
pub const MISSING_COLOR: Rgb = Rgb::new(0x99, 0x99, 0x99);
/// Cells without a verdict yet
pub const UNKNOWN_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
/// Keyboard keys without a verdict yet
pub const KEY_COLOR: Rgb = Rgb::new(0xDD, 0xDD, 0xDD);

/// Color scheme for correct and present letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Green and yellow
    #[default]
    Normal,
    /// Blue and orange
    Colorblind,
}

impl Palette {
    /// Parse a palette name
    ///
    /// Accepts "normal" and "colorblind"/"colourblind"/"cb".
    /// Defaults to normal if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "colorblind" | "colourblind" | "cb" => Self::Colorblind,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal Mode",
            Self::Colorblind => "Colorblind Mode",
        }
    }

    /// The other palette
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Colorblind,
            Self::Colorblind => Self::Normal,
        }
    }

    #[must_use]
    pub const fn correct(self) -> Rgb {
        match self {
            Self::Normal => Rgb::new(0x66, 0xBB, 0x66),
            Self::Colorblind => Rgb::new(0x4F, 0x82, 0xF0),
        }
    }

    #[must_use]
    pub const fn present(self) -> Rgb {
        match self {
            Self::Normal => Rgb::new(0xCC, 0xBB, 0x66),
            Self::Colorblind => Rgb::new(0xFC, 0xBD, 0x5D),
        }
    }

    #[must_use]
    pub const fn color(self, verdict: LetterVerdict) -> Rgb {
        match verdict {
            LetterVerdict::Correct => self.correct(),
            LetterVerdict::Present => self.present(),
            LetterVerdict::Absent => MISSING_COLOR,
        }
    }

    /// Square emoji used in share text
    #[must_use]
    pub const fn emoji(self, verdict: LetterVerdict) -> char {
        match (self, verdict) {
            (Self::Normal, LetterVerdict::Correct) => '🟩',
            (Self::Normal, LetterVerdict::Present) => '🟨',
            (Self::Colorblind, LetterVerdict::Correct) => '🟦',
            (Self::Colorblind, LetterVerdict::Present) => '🟧',
            (_, LetterVerdict::Absent) => '⬜',
        }
    }
}
