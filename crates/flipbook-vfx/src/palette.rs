//! The fixed VFX palette.
//!
//! Every pixel a drawer paints comes from this set. Keeping the palette closed
//! gives all effects the same neon-on-void look and lets the GIF encoder use a
//! single exact global color table.

use serde::Serialize;

/// 8-bit RGBA quadruple.
pub type Rgba = [u8; 4];

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    Transparent,
    Black,
    Cyan,
    Purple,
    Red,
    Gold,
    /// Full-frame flash only.
    White,
}

impl PaletteColor {
    /// All entries, in color-table order.
    pub const ALL: [PaletteColor; 7] = [
        PaletteColor::Transparent,
        PaletteColor::Black,
        PaletteColor::Cyan,
        PaletteColor::Purple,
        PaletteColor::Red,
        PaletteColor::Gold,
        PaletteColor::White,
    ];

    /// The RGBA value of this entry.
    pub const fn rgba(self) -> Rgba {
        match self {
            PaletteColor::Transparent => [0x00, 0x00, 0x00, 0x00],
            PaletteColor::Black => [0x00, 0x00, 0x00, 0xFF],
            PaletteColor::Cyan => [0x00, 0xE5, 0xFF, 0xFF],
            PaletteColor::Purple => [0xA7, 0x8B, 0xFA, 0xFF],
            PaletteColor::Red => [0xFF, 0x3B, 0x3B, 0xFF],
            PaletteColor::Gold => [0xFF, 0xD5, 0x6A, 0xFF],
            PaletteColor::White => [0xFF, 0xFF, 0xFF, 0xFF],
        }
    }

    /// Position of this entry in [`PaletteColor::ALL`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Transparent => "transparent",
            PaletteColor::Black => "black",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Purple => "purple",
            PaletteColor::Red => "red",
            PaletteColor::Gold => "gold",
            PaletteColor::White => "white",
        }
    }

    /// Look up the entry with exactly this RGBA value.
    pub fn from_rgba(rgba: Rgba) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rgba() == rgba)
    }

    pub fn is_opaque(self) -> bool {
        self.rgba()[3] == 0xFF
    }
}
