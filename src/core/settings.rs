//! Player settings bitmask
//!
//! Stored as a single byte in the save record: bit 0 hard mode, bit 1 dark
//! theme, bit 2 high contrast. Unknown bits are preserved untouched.

use std::fmt;

/// One toggleable setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    HardMode,
    DarkTheme,
    HighContrast,
}

impl Setting {
    /// All settings in display order; the index is the bit number
    pub const ALL: [Self; 3] = [Self::HardMode, Self::DarkTheme, Self::HighContrast];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::HardMode => 1 << 0,
            Self::DarkTheme => 1 << 1,
            Self::HighContrast => 1 << 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HardMode => "Hard Mode",
            Self::DarkTheme => "Dark Theme",
            Self::HighContrast => "Color Blind Mode",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::HardMode => "Must use revealed hints in future guesses",
            Self::DarkTheme => "",
            Self::HighContrast => "High contrast colors",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Settings(u8);

impl Settings {
    pub const HARD: Self = Self(Setting::HardMode.bit());
    pub const DARK: Self = Self(Setting::DarkTheme.bit());
    pub const CONTRAST: Self = Self(Setting::HighContrast.bit());

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, setting: Setting) -> bool {
        self.0 & setting.bit() != 0
    }

    #[must_use]
    pub const fn hard_mode(self) -> bool {
        self.contains(Setting::HardMode)
    }

    #[must_use]
    pub const fn dark_theme(self) -> bool {
        self.contains(Setting::DarkTheme)
    }

    #[must_use]
    pub const fn high_contrast(self) -> bool {
        self.contains(Setting::HighContrast)
    }

    pub fn toggle(&mut self, setting: Setting) {
        self.0 ^= setting.bit();
    }

    #[must_use]
    pub const fn with(self, setting: Setting) -> Self {
        Self(self.0 | setting.bit())
    }
}
