use prettytable::color;
use serde::{Deserialize, Serialize};

/// The two color palettes the app ships with. Purely cosmetic, they only
/// affect table header colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePalette {
    /// Amber accents, the original dark look.
    #[default]
    Amber,
    /// Neutral accents for light terminals.
    Light,
}

impl ThemePalette {
    pub const ALL: [ThemePalette; 2] = [ThemePalette::Amber, ThemePalette::Light];

    pub fn name(&self) -> &'static str {
        match self {
            ThemePalette::Amber => "amber",
            ThemePalette::Light => "light",
        }
    }

    /// Accent color used for table headers.
    pub fn accent(&self) -> color::Color {
        match self {
            ThemePalette::Amber => color::YELLOW,
            ThemePalette::Light => color::WHITE,
        }
    }
}
